pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

use anchor_lang::prelude::*;
use instructions::*;
use state::ReleaseEntry;

declare_id!("76eMY2PHqS52Xmdzbfp1ptemvMwpAfjn5mSPdeuu2JGj");

#[program]
pub mod presale_vesting {
    use super::*;

    pub fn initialize(
        ctx: Context<Initialize>,
        sale_id: u64,
        price_numerator: u64,
        price_denominator: u64,
        payment_min_amount: u64,
        advance_fraction: u16,
        release_schedule: Vec<ReleaseEntry>,
    ) -> Result<()> {
        instructions::initialize(
            ctx,
            sale_id,
            price_numerator,
            price_denominator,
            payment_min_amount,
            advance_fraction,
            release_schedule,
        )
    }

    pub fn fund(ctx: Context<Fund>, amount: u64) -> Result<()> {
        instructions::fund(ctx, amount)
    }

    pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
        instructions::withdraw(ctx, amount)
    }

    pub fn pause(ctx: Context<Pause>) -> Result<()> {
        instructions::pause(ctx)
    }

    pub fn resume(ctx: Context<Resume>) -> Result<()> {
        instructions::resume(ctx)
    }

    pub fn update_authority(ctx: Context<UpdateAuthority>, new_authority: Pubkey) -> Result<()> {
        instructions::update_authority(ctx, new_authority)
    }

    pub fn init_vesting(ctx: Context<InitVesting>) -> Result<()> {
        instructions::init_vesting(ctx)
    }

    pub fn execute_sale(ctx: Context<ExecuteSale>, payment_amount: u64) -> Result<()> {
        instructions::execute_sale(ctx, payment_amount)
    }

    pub fn claim(ctx: Context<Claim>) -> Result<()> {
        instructions::claim(ctx)
    }

    pub fn close_vesting(ctx: Context<CloseVesting>) -> Result<()> {
        instructions::close_vesting(ctx)
    }
}
