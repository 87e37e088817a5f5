//! Cross-sale schedule compatibility, kept free of account plumbing so the
//! rule stays testable in isolation.

use crate::state::{ReleaseEntry, VestingEntry};

/// True when the ledger's stored release times equal the sale's schedule
/// times in count and order. Fractions are deliberately ignored: two sales
/// may split the vested portion differently and still feed the same ledger.
pub fn times_match(ledger: &[VestingEntry], schedule: &[ReleaseEntry]) -> bool {
    ledger.len() == schedule.len()
        && ledger
            .iter()
            .zip(schedule)
            .all(|(v, s)| v.release_time == s.release_time)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger(times: &[i64]) -> Vec<VestingEntry> {
        times
            .iter()
            .map(|&release_time| VestingEntry {
                release_time,
                amount: 0,
                claimed_amount: 0,
            })
            .collect()
    }

    fn sale_schedule(entries: &[(i64, u16)]) -> Vec<ReleaseEntry> {
        entries
            .iter()
            .map(|&(release_time, fraction)| ReleaseEntry {
                release_time,
                fraction,
            })
            .collect()
    }

    #[test]
    fn same_times_match_even_with_different_fractions() {
        let v = ledger(&[100, 200]);
        assert!(times_match(&v, &sale_schedule(&[(100, 5000), (200, 5000)])));
        assert!(times_match(&v, &sale_schedule(&[(100, 1000), (200, 9000)])));
    }

    #[test]
    fn differing_count_is_a_mismatch() {
        let v = ledger(&[100, 200]);
        assert!(!times_match(&v, &sale_schedule(&[(100, 10000)])));
        assert!(!times_match(
            &v,
            &sale_schedule(&[(100, 3000), (200, 3000), (300, 4000)])
        ));
    }

    #[test]
    fn differing_or_reordered_times_are_a_mismatch() {
        let v = ledger(&[100, 200]);
        assert!(!times_match(&v, &sale_schedule(&[(100, 5000), (201, 5000)])));
        assert!(!times_match(&v, &sale_schedule(&[(200, 5000), (100, 5000)])));
    }

    #[test]
    fn empty_matches_empty() {
        assert!(times_match(&[], &[]));
    }
}
