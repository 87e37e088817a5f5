use anchor_lang::prelude::*;

use crate::error::SaleError;

/// One slot of a vesting ledger. `release_time` is fixed at creation;
/// `amount` grows with purchases, `claimed_amount` with claims.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct VestingEntry {
    pub release_time: i64,
    pub amount: u64,
    pub claimed_amount: u64,
}

impl VestingEntry {
    /// Matured and not yet settled portion at `now`.
    pub fn claimable(&self, now: i64) -> u64 {
        if now >= self.release_time {
            self.amount.saturating_sub(self.claimed_amount)
        } else {
            0
        }
    }
}

/// Per-(user, mint) vesting ledger PDA, shared by every sale whose release
/// times match the ones stored here. The vesting escrow is a separate token
/// account PDA with this account as its transfer authority.
#[account]
pub struct Vesting {
    pub user: Pubkey,
    pub sale_mint: Pubkey,
    /// Cumulative tokens ever deposited; equals the sum of entry amounts.
    pub total_amount: u64,
    pub bump: u8,
    pub escrow_bump: u8,
    /// Entry count and release times are immutable after creation.
    pub schedule: Vec<VestingEntry>,
}

impl Vesting {
    pub fn space(schedule_len: usize) -> usize {
        8 +  // discriminator
        32 + // user
        32 + // sale_mint
        8 +  // total_amount
        1 +  // bump
        1 +  // escrow_bump
        4 + schedule_len * (8 + 8 + 8) // schedule
    }

    /// Credit per-entry deposits produced by `fraction::split_vested`.
    /// `parts` must line up with the stored schedule.
    pub fn credit(&mut self, parts: &[u64]) -> std::result::Result<(), SaleError> {
        if parts.len() != self.schedule.len() {
            return Err(SaleError::ScheduleMismatch);
        }
        let mut deposited: u64 = 0;
        for (entry, &part) in self.schedule.iter_mut().zip(parts) {
            entry.amount = entry
                .amount
                .checked_add(part)
                .ok_or(SaleError::MathOverflow)?;
            deposited = deposited
                .checked_add(part)
                .ok_or(SaleError::MathOverflow)?;
        }
        self.total_amount = self
            .total_amount
            .checked_add(deposited)
            .ok_or(SaleError::MathOverflow)?;
        Ok(())
    }

    /// Settle every matured entry in full and return the claimable total.
    /// Fails when nothing new has matured since the previous settlement.
    pub fn settle_due(&mut self, now: i64) -> std::result::Result<u64, SaleError> {
        let mut total: u64 = 0;
        for entry in self.schedule.iter_mut() {
            let due = entry.claimable(now);
            if due > 0 {
                total = total.checked_add(due).ok_or(SaleError::MathOverflow)?;
                entry.claimed_amount = entry.amount;
            }
        }
        if total == 0 {
            return Err(SaleError::NothingToClaim);
        }
        Ok(total)
    }

    /// True once every entry has been claimed in full.
    pub fn drained(&self) -> bool {
        self.schedule
            .iter()
            .all(|entry| entry.claimed_amount == entry.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger(times: &[i64]) -> Vesting {
        Vesting {
            user: Pubkey::default(),
            sale_mint: Pubkey::default(),
            total_amount: 0,
            bump: 255,
            escrow_bump: 255,
            schedule: times
                .iter()
                .map(|&release_time| VestingEntry {
                    release_time,
                    amount: 0,
                    claimed_amount: 0,
                })
                .collect(),
        }
    }

    #[test]
    fn credit_accumulates_across_purchases() {
        let mut v = ledger(&[100, 200]);
        v.credit(&[1_000_000, 1_000_000]).unwrap();
        v.credit(&[250_000, 750_000]).unwrap();

        assert_eq!(v.schedule[0].amount, 1_250_000);
        assert_eq!(v.schedule[1].amount, 1_750_000);
        assert_eq!(v.total_amount, 3_000_000);
    }

    #[test]
    fn credit_rejects_wrong_arity() {
        let mut v = ledger(&[100, 200]);
        assert!(matches!(
            v.credit(&[1, 2, 3]),
            Err(SaleError::ScheduleMismatch)
        ));
        assert_eq!(v.total_amount, 0);
    }

    #[test]
    fn settle_before_first_maturity_fails() {
        let mut v = ledger(&[100, 200]);
        v.credit(&[500, 500]).unwrap();
        assert!(matches!(v.settle_due(99), Err(SaleError::NothingToClaim)));
    }

    #[test]
    fn settle_is_idempotent_until_new_maturity() {
        let mut v = ledger(&[100, 200]);
        v.credit(&[500, 700]).unwrap();

        // release_time == now counts as matured.
        assert_eq!(v.settle_due(100).unwrap(), 500);
        assert!(matches!(v.settle_due(150), Err(SaleError::NothingToClaim)));

        assert_eq!(v.settle_due(200).unwrap(), 700);
        assert!(matches!(v.settle_due(300), Err(SaleError::NothingToClaim)));
        assert!(v.drained());
    }

    #[test]
    fn settle_after_all_maturities_pays_everything() {
        let mut v = ledger(&[100, 200]);
        v.credit(&[1_000_000, 1_000_000]).unwrap();
        assert_eq!(v.settle_due(200).unwrap(), 2_000_000);
        assert!(v.drained());
    }

    #[test]
    fn top_up_after_claim_reopens_the_entry() {
        let mut v = ledger(&[100]);
        v.credit(&[500]).unwrap();
        assert_eq!(v.settle_due(100).unwrap(), 500);

        v.credit(&[300]).unwrap();
        assert!(!v.drained());
        assert_eq!(v.settle_due(100).unwrap(), 300);
        assert_eq!(v.total_amount, 800);
    }
}
