use anchor_lang::prelude::*;

use crate::error::SaleError;
use crate::state::Sale;

pub fn pause(ctx: Context<Pause>) -> Result<()> {
    let sale = &mut ctx.accounts.sale;
    require_keys_eq!(
        ctx.accounts.authority.key(),
        sale.authority,
        SaleError::Unauthorized
    );
    require!(sale.is_active, SaleError::SaleNotActive);
    sale.is_active = false;
    emit!(SalePaused {
        sale: sale.key(),
        authority: sale.authority,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct Pause<'info> {
    #[account(
        mut,
        seeds = [b"sale", sale.sale_mint.as_ref(), &sale.sale_id.to_le_bytes()],
        bump = sale.bump,
    )]
    pub sale: Account<'info, Sale>,
    pub authority: Signer<'info>,
}

#[event]
pub struct SalePaused {
    pub sale: Pubkey,
    pub authority: Pubkey,
}
