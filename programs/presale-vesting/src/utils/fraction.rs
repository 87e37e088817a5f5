//! Exact basis-point arithmetic, widened through u128.
//! The 100% partition enforced at sale initialization makes the per-entry
//! floor divisions reconstruct the purchase exactly once the final entry
//! absorbs the flooring dust.

use crate::constants::BPS_DENOMINATOR;
use crate::error::SaleError;
use crate::state::ReleaseEntry;

/// floor(amount * fraction / 10000).
pub fn bps_part(amount: u64, fraction: u16) -> Result<u64, SaleError> {
    let part = amount as u128 * fraction as u128 / BPS_DENOMINATOR as u128;
    u64::try_from(part).map_err(|_| SaleError::MathOverflow)
}

/// floor(payment * numerator / denominator).
pub fn tokens_for_payment(
    payment: u64,
    numerator: u64,
    denominator: u64,
) -> Result<u64, SaleError> {
    if denominator == 0 {
        return Err(SaleError::ZeroPrice);
    }
    let received = (payment as u128)
        .checked_mul(numerator as u128)
        .ok_or(SaleError::MathOverflow)?
        / denominator as u128;
    u64::try_from(received).map_err(|_| SaleError::MathOverflow)
}

/// True when `advance_fraction` plus the schedule fractions form an exact
/// 100% partition. An empty schedule is a valid partition only for a
/// pure-advance sale (advance_fraction == 10000).
pub fn is_exact_partition(advance_fraction: u16, schedule: &[ReleaseEntry]) -> bool {
    let mut sum = advance_fraction as u64;
    for entry in schedule {
        sum += entry.fraction as u64;
    }
    sum == BPS_DENOMINATOR
}

/// Distribute the vested remainder of a purchase across the schedule.
///
/// Each entry's base share is floor(received * fraction / 10000) — computed
/// from the full purchase, since the fractions partition it together with
/// the advance. The final entry absorbs `to_vest - sum(shares)`, bounded by
/// the partition invariant to one base unit per entry, so the parts sum to
/// `to_vest` exactly.
pub fn split_vested(
    received: u64,
    to_vest: u64,
    schedule: &[ReleaseEntry],
) -> Result<Vec<u64>, SaleError> {
    let mut parts = Vec::with_capacity(schedule.len());
    let mut assigned: u64 = 0;
    for entry in schedule {
        let part = bps_part(received, entry.fraction)?;
        assigned = assigned.checked_add(part).ok_or(SaleError::MathOverflow)?;
        parts.push(part);
    }
    if let Some(last) = parts.last_mut() {
        let dust = to_vest.checked_sub(assigned).ok_or(SaleError::MathOverflow)?;
        *last = last.checked_add(dust).ok_or(SaleError::MathOverflow)?;
    }
    Ok(parts)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schedule(fractions: &[u16]) -> Vec<ReleaseEntry> {
        fractions
            .iter()
            .enumerate()
            .map(|(i, &fraction)| ReleaseEntry {
                release_time: 1_700_000_000 + i as i64,
                fraction,
            })
            .collect()
    }

    #[test]
    fn bps_part_floors() {
        assert_eq!(bps_part(1001, 5000).unwrap(), 500);
        assert_eq!(bps_part(0, 10000).unwrap(), 0);
        assert_eq!(bps_part(u64::MAX, 10000).unwrap(), u64::MAX);
    }

    #[test]
    fn tokens_for_payment_floors_and_widens() {
        // 1:1 at numerator=2, denominator=1 doubles the payment.
        assert_eq!(tokens_for_payment(1_000_000, 2, 1).unwrap(), 2_000_000);
        assert_eq!(tokens_for_payment(999, 1, 1000).unwrap(), 0);
        // Intermediate product exceeds u64 without tripping overflow.
        assert_eq!(
            tokens_for_payment(u64::MAX, 1000, 1000).unwrap(),
            u64::MAX
        );
        assert!(matches!(
            tokens_for_payment(u64::MAX, 2, 1),
            Err(SaleError::MathOverflow)
        ));
    }

    #[test]
    fn partition_must_hit_exactly_10000() {
        assert!(is_exact_partition(2000, &schedule(&[4000, 4000])));
        assert!(is_exact_partition(0, &schedule(&[5000, 5000])));
        assert!(!is_exact_partition(2000, &schedule(&[4000, 3999])));
        assert!(!is_exact_partition(2001, &schedule(&[4000, 4000])));
        // Empty schedule is only legal as a pure-advance sale.
        assert!(is_exact_partition(10000, &[]));
        assert!(!is_exact_partition(9999, &[]));
    }

    #[test]
    fn split_matches_fractions_exactly_when_clean() {
        let parts = split_vested(2_000_000, 2_000_000, &schedule(&[5000, 5000])).unwrap();
        assert_eq!(parts, vec![1_000_000, 1_000_000]);
    }

    #[test]
    fn split_assigns_dust_to_last_entry() {
        let parts = split_vested(1001, 1001, &schedule(&[3333, 3333, 3334])).unwrap();
        assert_eq!(parts, vec![333, 333, 335]);
        assert_eq!(parts.iter().sum::<u64>(), 1001);
    }

    #[test]
    fn split_stays_proportional_under_an_advance() {
        // 20% advance, 40%/40% schedule: entries keep their 1:1 ratio.
        let received = 10_000u64;
        let advance = bps_part(received, 2000).unwrap();
        let to_vest = received - advance;
        let parts = split_vested(received, to_vest, &schedule(&[4000, 4000])).unwrap();
        assert_eq!(parts, vec![4_000, 4_000]);

        // Odd amount: the flooring dust lands on the final entry only.
        let received = 10_001u64;
        let advance = bps_part(received, 2000).unwrap();
        let to_vest = received - advance;
        let parts = split_vested(received, to_vest, &schedule(&[4000, 4000])).unwrap();
        assert_eq!(parts.iter().sum::<u64>(), to_vest);
        assert_eq!(parts[0], 4_000);
    }

    #[test]
    fn split_conserves_for_awkward_partitions() {
        for received in [1u64, 7, 99, 10_000, 123_457, 9_999_999] {
            let advance = bps_part(received, 1500).unwrap();
            let to_vest = received - advance;
            let parts =
                split_vested(received, to_vest, &schedule(&[2833, 2833, 2834])).unwrap();
            assert_eq!(parts.iter().sum::<u64>(), to_vest);
            assert_eq!(advance + parts.iter().sum::<u64>(), received);
        }
    }

    #[test]
    fn split_of_empty_schedule_is_empty() {
        assert!(split_vested(1_000, 0, &[]).unwrap().is_empty());
    }
}
