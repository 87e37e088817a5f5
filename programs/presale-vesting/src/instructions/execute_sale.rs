use anchor_lang::prelude::*;
use anchor_lang::system_program;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::error::SaleError;
use crate::state::{Sale, Vesting};
use crate::utils::{fraction, schedule};

/// Settles one purchase: converts the lamport payment into sale tokens,
/// releases the advance fraction to the buyer immediately and deposits the
/// remainder into the buyer's vesting ledger, which must already exist and
/// carry this sale's release times.
pub fn execute_sale(ctx: Context<ExecuteSale>, payment_amount: u64) -> Result<()> {
    let sale = &ctx.accounts.sale;
    require!(sale.is_active, SaleError::SaleNotActive);
    require!(
        payment_amount >= sale.payment_min_amount,
        SaleError::PaymentBelowMinimum
    );
    require_keys_eq!(
        ctx.accounts.payment.key(),
        sale.payment,
        SaleError::InvalidPaymentAccount
    );
    require_keys_eq!(
        ctx.accounts.buyer_token.mint,
        sale.sale_mint,
        SaleError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.buyer_token.owner,
        ctx.accounts.buyer.key(),
        SaleError::InvalidTokenAccount
    );

    let received = fraction::tokens_for_payment(
        payment_amount,
        sale.price_numerator,
        sale.price_denominator,
    )?;
    let advance = fraction::bps_part(received, sale.advance_fraction)?;
    let to_vest = received.checked_sub(advance).ok_or(SaleError::MathOverflow)?;

    // Every way the purchase can fail is checked before the first transfer.
    let vested_parts = if to_vest > 0 {
        let vesting = ctx
            .accounts
            .vesting
            .as_deref()
            .ok_or(SaleError::VestingNotInitialized)?;
        let vesting_escrow = ctx
            .accounts
            .vesting_escrow
            .as_deref()
            .ok_or(SaleError::VestingNotInitialized)?;
        require!(
            schedule::times_match(&vesting.schedule, &sale.release_schedule),
            SaleError::ScheduleMismatch
        );

        let vesting_key = vesting.key();
        let expected_escrow = Pubkey::create_program_address(
            &[
                b"vesting_escrow",
                vesting_key.as_ref(),
                &[vesting.escrow_bump],
            ],
            &crate::ID,
        )
        .map_err(|_| error!(SaleError::InvalidTokenAccount))?;
        require_keys_eq!(
            vesting_escrow.key(),
            expected_escrow,
            SaleError::InvalidTokenAccount
        );

        fraction::split_vested(received, to_vest, &sale.release_schedule)?
    } else {
        Vec::new()
    };

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.buyer.to_account_info(),
                to: ctx.accounts.payment.to_account_info(),
            },
        ),
        payment_amount,
    )?;

    let sale_id = sale.sale_id.to_le_bytes();
    let signer_seeds: &[&[&[u8]]] = &[&[
        b"sale",
        sale.sale_mint.as_ref(),
        &sale_id,
        &[sale.bump],
    ]];

    if advance > 0 {
        token::transfer(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.sale_escrow.to_account_info(),
                    to: ctx.accounts.buyer_token.to_account_info(),
                    authority: sale.to_account_info(),
                },
                signer_seeds,
            ),
            advance,
        )?;
    }

    if to_vest > 0 {
        let vesting_escrow_info = ctx
            .accounts
            .vesting_escrow
            .as_ref()
            .ok_or(SaleError::VestingNotInitialized)?
            .to_account_info();
        let vesting = ctx
            .accounts
            .vesting
            .as_mut()
            .ok_or(SaleError::VestingNotInitialized)?;
        vesting.credit(&vested_parts)?;

        token::transfer(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.sale_escrow.to_account_info(),
                    to: vesting_escrow_info,
                    authority: sale.to_account_info(),
                },
                signer_seeds,
            ),
            to_vest,
        )?;
    }

    emit!(SaleExecuted {
        sale: sale.key(),
        buyer: ctx.accounts.buyer.key(),
        payment_amount,
        received,
        advance,
        vested: to_vest,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct ExecuteSale<'info> {
    #[account(
        seeds = [b"sale", sale.sale_mint.as_ref(), &sale.sale_id.to_le_bytes()],
        bump = sale.bump,
    )]
    pub sale: Box<Account<'info, Sale>>,

    #[account(
        mut,
        seeds = [b"sale_escrow", sale.key().as_ref()],
        bump = sale.escrow_bump,
        constraint = sale_escrow.mint == sale.sale_mint @ SaleError::InvalidTokenMint,
    )]
    pub sale_escrow: Box<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub buyer: Signer<'info>,

    #[account(mut)]
    pub buyer_token: Box<Account<'info, TokenAccount>>,

    /// CHECK: validated against `sale.payment`; receives lamports only.
    #[account(mut)]
    pub payment: UncheckedAccount<'info>,

    /// Required whenever the sale carries a vesting component.
    #[account(
        mut,
        seeds = [b"vesting", buyer.key().as_ref(), sale.sale_mint.as_ref()],
        bump = vesting.bump,
    )]
    pub vesting: Option<Box<Account<'info, Vesting>>>,

    #[account(mut)]
    pub vesting_escrow: Option<Box<Account<'info, TokenAccount>>>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

#[event]
pub struct SaleExecuted {
    pub sale: Pubkey,
    pub buyer: Pubkey,
    pub payment_amount: u64,
    pub received: u64,
    pub advance: u64,
    pub vested: u64,
}
