use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::error::SaleError;
use crate::state::Sale;

/// Permissionless: anyone may top up the sale escrow. A direct SPL transfer
/// into the escrow address has the same effect; the escrow balance is the
/// only bookkeeping.
pub fn fund(ctx: Context<Fund>, amount: u64) -> Result<()> {
    let sale = &ctx.accounts.sale;
    require_keys_eq!(
        ctx.accounts.source.mint,
        sale.sale_mint,
        SaleError::InvalidTokenMint
    );

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.source.to_account_info(),
                to: ctx.accounts.sale_escrow.to_account_info(),
                authority: ctx.accounts.funder.to_account_info(),
            },
        ),
        amount,
    )?;

    ctx.accounts.sale_escrow.reload()?;

    emit!(SaleFunded {
        sale: sale.key(),
        funder: ctx.accounts.funder.key(),
        amount,
        escrow_balance: ctx.accounts.sale_escrow.amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Fund<'info> {
    #[account(
        seeds = [b"sale", sale.sale_mint.as_ref(), &sale.sale_id.to_le_bytes()],
        bump = sale.bump,
    )]
    pub sale: Account<'info, Sale>,

    #[account(
        mut,
        seeds = [b"sale_escrow", sale.key().as_ref()],
        bump = sale.escrow_bump,
        constraint = sale_escrow.mint == sale.sale_mint @ SaleError::InvalidTokenMint,
    )]
    pub sale_escrow: Account<'info, TokenAccount>,

    #[account(mut)]
    pub source: Account<'info, TokenAccount>,

    pub funder: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct SaleFunded {
    pub sale: Pubkey,
    pub funder: Pubkey,
    pub amount: u64,
    pub escrow_balance: u64,
}
