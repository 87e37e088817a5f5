use anchor_lang::prelude::*;

use crate::error::SaleError;
use crate::state::Sale;

pub fn resume(ctx: Context<Resume>) -> Result<()> {
    let sale = &mut ctx.accounts.sale;
    require_keys_eq!(
        ctx.accounts.authority.key(),
        sale.authority,
        SaleError::Unauthorized
    );
    require!(!sale.is_active, SaleError::SaleAlreadyActive);
    sale.is_active = true;
    emit!(SaleResumed {
        sale: sale.key(),
        authority: sale.authority,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct Resume<'info> {
    #[account(
        mut,
        seeds = [b"sale", sale.sale_mint.as_ref(), &sale.sale_id.to_le_bytes()],
        bump = sale.bump,
    )]
    pub sale: Account<'info, Sale>,
    pub authority: Signer<'info>,
}

#[event]
pub struct SaleResumed {
    pub sale: Pubkey,
    pub authority: Pubkey,
}
