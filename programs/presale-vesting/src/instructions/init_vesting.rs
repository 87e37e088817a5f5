use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::error::SaleError;
use crate::state::{Sale, Vesting, VestingEntry};

/// Creates the per-(user, mint) vesting ledger, mirroring the sale's release
/// times with zero amounts. Further purchases from any sale with matching
/// times accumulate into this one account.
pub fn init_vesting(ctx: Context<InitVesting>) -> Result<()> {
    let sale = &ctx.accounts.sale;
    require!(
        !sale.release_schedule.is_empty(),
        SaleError::NoVestingSchedule
    );

    let vesting = &mut ctx.accounts.vesting;
    vesting.user = ctx.accounts.user.key();
    vesting.sale_mint = sale.sale_mint;
    vesting.total_amount = 0;
    vesting.bump = ctx.bumps.vesting;
    vesting.escrow_bump = ctx.bumps.vesting_escrow;
    vesting.schedule = sale
        .release_schedule
        .iter()
        .map(|entry| VestingEntry {
            release_time: entry.release_time,
            amount: 0,
            claimed_amount: 0,
        })
        .collect();

    emit!(VestingInitialized {
        vesting: vesting.key(),
        user: vesting.user,
        sale_mint: vesting.sale_mint,
        entries: vesting.schedule.len() as u8,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InitVesting<'info> {
    #[account(
        seeds = [b"sale", sale.sale_mint.as_ref(), &sale.sale_id.to_le_bytes()],
        bump = sale.bump,
    )]
    pub sale: Box<Account<'info, Sale>>,

    #[account(
        constraint = sale_mint.key() == sale.sale_mint @ SaleError::InvalidTokenMint,
    )]
    pub sale_mint: Box<Account<'info, Mint>>,

    #[account(
        init,
        payer = user,
        space = Vesting::space(sale.release_schedule.len()),
        seeds = [b"vesting", user.key().as_ref(), sale.sale_mint.as_ref()],
        bump
    )]
    pub vesting: Box<Account<'info, Vesting>>,

    #[account(
        init,
        payer = user,
        token::mint = sale_mint,
        token::authority = vesting,
        seeds = [b"vesting_escrow", vesting.key().as_ref()],
        bump
    )]
    pub vesting_escrow: Box<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub user: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct VestingInitialized {
    pub vesting: Pubkey,
    pub user: Pubkey,
    pub sale_mint: Pubkey,
    pub entries: u8,
}
