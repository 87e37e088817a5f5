use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::error::SaleError;
use crate::state::Sale;

pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
    let sale = &ctx.accounts.sale;
    require_keys_eq!(
        ctx.accounts.authority.key(),
        sale.authority,
        SaleError::Unauthorized
    );
    require_keys_eq!(
        ctx.accounts.destination.mint,
        sale.sale_mint,
        SaleError::InvalidTokenMint
    );

    // A request above the balance means "withdraw everything".
    let amount = amount.min(ctx.accounts.sale_escrow.amount);

    let sale_id = sale.sale_id.to_le_bytes();
    let signer_seeds: &[&[&[u8]]] = &[&[
        b"sale",
        sale.sale_mint.as_ref(),
        &sale_id,
        &[sale.bump],
    ]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.sale_escrow.to_account_info(),
                to: ctx.accounts.destination.to_account_info(),
                authority: sale.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    emit!(SaleWithdrawn {
        sale: sale.key(),
        authority: sale.authority,
        amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Withdraw<'info> {
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
    pub destination: Account<'info, TokenAccount>,

    pub authority: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct SaleWithdrawn {
    pub sale: Pubkey,
    pub authority: Pubkey,
    pub amount: u64,
}
