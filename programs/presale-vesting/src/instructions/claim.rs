use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::error::SaleError;
use crate::state::Vesting;

/// Pays out every matured, unclaimed entry in full. Entries settle
/// all-or-nothing; calling again before the next maturity fails.
pub fn claim(ctx: Context<Claim>) -> Result<()> {
    require_keys_eq!(
        ctx.accounts.user_token.mint,
        ctx.accounts.vesting.sale_mint,
        SaleError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.user_token.owner,
        ctx.accounts.user.key(),
        SaleError::InvalidTokenAccount
    );

    let now = Clock::get()?.unix_timestamp;
    let vesting = &mut ctx.accounts.vesting;
    let amount = vesting.settle_due(now)?;

    let user_key = ctx.accounts.user.key();
    let sale_mint = vesting.sale_mint;
    let signer_seeds: &[&[&[u8]]] = &[&[
        b"vesting",
        user_key.as_ref(),
        sale_mint.as_ref(),
        &[vesting.bump],
    ]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vesting_escrow.to_account_info(),
                to: ctx.accounts.user_token.to_account_info(),
                authority: vesting.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    emit!(VestingClaimed {
        vesting: vesting.key(),
        user: user_key,
        amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Claim<'info> {
    #[account(
        mut,
        seeds = [b"vesting", user.key().as_ref(), vesting.sale_mint.as_ref()],
        bump = vesting.bump,
    )]
    pub vesting: Account<'info, Vesting>,

    #[account(
        mut,
        seeds = [b"vesting_escrow", vesting.key().as_ref()],
        bump = vesting.escrow_bump,
    )]
    pub vesting_escrow: Account<'info, TokenAccount>,

    #[account(mut)]
    pub user_token: Account<'info, TokenAccount>,

    pub user: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct VestingClaimed {
    pub vesting: Pubkey,
    pub user: Pubkey,
    pub amount: u64,
}
