use anchor_lang::prelude::*;

/// One entry of a sale's release schedule.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReleaseEntry {
    /// Unlock timestamp (Unix seconds, UTC).
    pub release_time: i64,
    /// Share of the purchase unlocking at `release_time`, in basis points.
    pub fraction: u16,
}

/// Per-offering sale state PDA. The sale escrow is a separate token account
/// PDA with this account as its transfer authority.
#[account]
pub struct Sale {
    /// Identity allowed to pause/resume, rotate authority and withdraw.
    pub authority: Pubkey,
    /// Purchase gate; starts false.
    pub is_active: bool,
    /// Tokens per payment unit, as numerator/denominator. Both non-zero.
    pub price_numerator: u64,
    pub price_denominator: u64,
    /// Minimum accepted payment per purchase, in lamports.
    pub payment_min_amount: u64,
    /// Basis points of each purchase released to the buyer immediately.
    pub advance_fraction: u16,
    /// Unlock times and shares for the vested remainder. Empty only for a
    /// pure-advance sale (advance_fraction == 10000).
    pub release_schedule: Vec<ReleaseEntry>,
    /// Mint of the token being sold.
    pub sale_mint: Pubkey,
    /// Lamport destination for payments.
    pub payment: Pubkey,
    /// Caller-chosen discriminator; part of the PDA seeds so several
    /// offerings of one mint can coexist.
    pub sale_id: u64,
    pub bump: u8,
    pub escrow_bump: u8,
}

impl Sale {
    pub fn space(schedule_len: usize) -> usize {
        8 +  // discriminator
        32 + // authority
        1 +  // is_active
        8 +  // price_numerator
        8 +  // price_denominator
        8 +  // payment_min_amount
        2 +  // advance_fraction
        4 + schedule_len * (8 + 2) + // release_schedule
        32 + // sale_mint
        32 + // payment
        8 +  // sale_id
        1 +  // bump
        1    // escrow_bump
    }
}
