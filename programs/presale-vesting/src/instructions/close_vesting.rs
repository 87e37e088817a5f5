use anchor_lang::prelude::*;
use anchor_spl::token::{self, CloseAccount, Token, TokenAccount};

use crate::error::SaleError;
use crate::state::Vesting;

/// Closes a fully drained vesting ledger and its escrow, returning rent to
/// the user. Fails while any entry still has an unclaimed amount.
pub fn close_vesting(ctx: Context<CloseVesting>) -> Result<()> {
    let vesting = &ctx.accounts.vesting;
    require!(vesting.drained(), SaleError::VestingNotDrained);

    let user_key = ctx.accounts.user.key();
    let signer_seeds: &[&[&[u8]]] = &[&[
        b"vesting",
        user_key.as_ref(),
        vesting.sale_mint.as_ref(),
        &[vesting.bump],
    ]];
    token::close_account(CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        CloseAccount {
            account: ctx.accounts.vesting_escrow.to_account_info(),
            destination: ctx.accounts.user.to_account_info(),
            authority: vesting.to_account_info(),
        },
        signer_seeds,
    ))?;

    emit!(VestingClosed {
        vesting: vesting.key(),
        user: user_key,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct CloseVesting<'info> {
    #[account(
        mut,
        close = user,
        seeds = [b"vesting", user.key().as_ref(), vesting.sale_mint.as_ref()],
        bump = vesting.bump,
    )]
    pub vesting: Account<'info, Vesting>,

    #[account(
        mut,
        seeds = [b"vesting_escrow", vesting.key().as_ref()],
        bump = vesting.escrow_bump,
        constraint = vesting_escrow.amount == 0 @ SaleError::VestingNotDrained,
    )]
    pub vesting_escrow: Account<'info, TokenAccount>,

    #[account(mut)]
    pub user: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct VestingClosed {
    pub vesting: Pubkey,
    pub user: Pubkey,
}
