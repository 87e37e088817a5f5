use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::MAX_RELEASE_ENTRIES;
use crate::error::SaleError;
use crate::state::{ReleaseEntry, Sale};
use crate::utils::fraction;

pub fn initialize(
    ctx: Context<Initialize>,
    sale_id: u64,
    price_numerator: u64,
    price_denominator: u64,
    payment_min_amount: u64,
    advance_fraction: u16,
    release_schedule: Vec<ReleaseEntry>,
) -> Result<()> {
    require!(
        price_numerator > 0 && price_denominator > 0,
        SaleError::ZeroPrice
    );
    require!(
        release_schedule.len() <= MAX_RELEASE_ENTRIES,
        SaleError::ScheduleTooLong
    );
    require!(
        fraction::is_exact_partition(advance_fraction, &release_schedule),
        SaleError::FractionsAreNot100Percents
    );

    let sale = &mut ctx.accounts.sale;
    sale.authority = ctx.accounts.authority.key();
    sale.is_active = false;
    sale.price_numerator = price_numerator;
    sale.price_denominator = price_denominator;
    sale.payment_min_amount = payment_min_amount;
    sale.advance_fraction = advance_fraction;
    sale.release_schedule = release_schedule;
    sale.sale_mint = ctx.accounts.sale_mint.key();
    sale.payment = ctx.accounts.payment.key();
    sale.sale_id = sale_id;
    sale.bump = ctx.bumps.sale;
    sale.escrow_bump = ctx.bumps.sale_escrow;

    emit!(SaleInitialized {
        sale: sale.key(),
        authority: sale.authority,
        sale_mint: sale.sale_mint,
        sale_id,
        price_numerator,
        price_denominator,
        advance_fraction,
        schedule_len: sale.release_schedule.len() as u8,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(
    sale_id: u64,
    price_numerator: u64,
    price_denominator: u64,
    payment_min_amount: u64,
    advance_fraction: u16,
    release_schedule: Vec<ReleaseEntry>
)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = payer,
        space = Sale::space(release_schedule.len()),
        seeds = [b"sale", sale_mint.key().as_ref(), &sale_id.to_le_bytes()],
        bump
    )]
    pub sale: Box<Account<'info, Sale>>,

    #[account(
        init,
        payer = payer,
        token::mint = sale_mint,
        token::authority = sale,
        seeds = [b"sale_escrow", sale.key().as_ref()],
        bump
    )]
    pub sale_escrow: Box<Account<'info, TokenAccount>>,

    pub sale_mint: Box<Account<'info, Mint>>,

    /// CHECK: stored as the sale authority; only its key is read.
    pub authority: UncheckedAccount<'info>,

    /// CHECK: stored as the lamport payment destination; only its key is read.
    pub payment: UncheckedAccount<'info>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct SaleInitialized {
    pub sale: Pubkey,
    pub authority: Pubkey,
    pub sale_mint: Pubkey,
    pub sale_id: u64,
    pub price_numerator: u64,
    pub price_denominator: u64,
    pub advance_fraction: u16,
    pub schedule_len: u8,
}
