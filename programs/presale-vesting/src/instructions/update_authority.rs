use anchor_lang::prelude::*;

use crate::error::SaleError;
use crate::state::Sale;

/// Replaces the sale authority unconditionally; the new key takes effect for
/// every later authority-gated call.
pub fn update_authority(ctx: Context<UpdateAuthority>, new_authority: Pubkey) -> Result<()> {
    let sale = &mut ctx.accounts.sale;
    require_keys_eq!(
        ctx.accounts.authority.key(),
        sale.authority,
        SaleError::Unauthorized
    );

    let old_authority = sale.authority;
    sale.authority = new_authority;

    emit!(AuthorityUpdated {
        sale: sale.key(),
        old_authority,
        new_authority,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct UpdateAuthority<'info> {
    #[account(
        mut,
        seeds = [b"sale", sale.sale_mint.as_ref(), &sale.sale_id.to_le_bytes()],
        bump = sale.bump,
    )]
    pub sale: Account<'info, Sale>,
    pub authority: Signer<'info>,
}

#[event]
pub struct AuthorityUpdated {
    pub sale: Pubkey,
    pub old_authority: Pubkey,
    pub new_authority: Pubkey,
}
