//! Validation and bit encoding of number combinations.
//!
//! A combination is exactly [`NUMBERS_PER_TICKET`] values in
//! `MIN_NUMBER..=MAX_NUMBER`, strictly ascending. The ascending requirement
//! doubles as the uniqueness check, so validation is a single pass. Each
//! accepted value sets bit `v - MIN_NUMBER` in a `u64` mask, which makes
//! later match counting a popcount of a bitwise AND instead of a nested
//! comparison loop.

use anchor_lang::prelude::*;

use crate::constants::{MAX_NUMBER, MIN_NUMBER, NUMBERS_PER_TICKET};
use crate::error::LotteryError;

/// Validates a candidate combination and returns its bitmask.
///
/// The fixed-size argument makes the length rule structural; per value, the
/// range check runs before the ascending check.
pub fn encode_numbers(numbers: &[u8; NUMBERS_PER_TICKET]) -> Result<u64> {
    let mut mask: u64 = 0;
    let mut previous: u8 = 0;
    for &value in numbers.iter() {
        require!(
            (MIN_NUMBER..=MAX_NUMBER).contains(&value),
            LotteryError::NumberOutOfRange
        );
        require!(value > previous, LotteryError::NumbersNotAscending);
        mask |= 1u64 << (value - MIN_NUMBER);
        previous = value;
    }
    Ok(mask)
}

/// Number of values shared by two encoded combinations.
pub fn match_count(ticket_mask: u64, winning_mask: u64) -> u32 {
    (ticket_mask & winning_mask).count_ones()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepted_mask_has_exactly_k_bits() {
        let mask = encode_numbers(&[1, 6, 12, 20, 28, 35]).unwrap();
        assert_eq!(mask.count_ones() as usize, NUMBERS_PER_TICKET);
    }

    #[test]
    fn mask_bits_follow_min_offset() {
        let mask = encode_numbers(&[1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(mask, 0b111111);
        let mask = encode_numbers(&[30, 31, 32, 33, 34, 35]).unwrap();
        assert_eq!(mask, 0b111111 << 29);
    }

    #[test]
    fn equal_masks_iff_equal_combinations() {
        let a = encode_numbers(&[2, 9, 14, 23, 30, 33]).unwrap();
        let b = encode_numbers(&[2, 9, 14, 23, 30, 33]).unwrap();
        let c = encode_numbers(&[2, 9, 14, 23, 30, 34]).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn rejects_duplicate_values() {
        let err = encode_numbers(&[1, 1, 2, 3, 4, 5]).unwrap_err();
        assert_eq!(err, LotteryError::NumbersNotAscending.into());
    }

    #[test]
    fn rejects_descending_values() {
        let err = encode_numbers(&[6, 5, 10, 15, 20, 25]).unwrap_err();
        assert_eq!(err, LotteryError::NumbersNotAscending.into());
    }

    #[test]
    fn rejects_value_below_range() {
        let err = encode_numbers(&[0, 2, 3, 4, 5, 6]).unwrap_err();
        assert_eq!(err, LotteryError::NumberOutOfRange.into());
    }

    #[test]
    fn rejects_value_above_range() {
        let err = encode_numbers(&[1, 2, 3, 4, 5, 36]).unwrap_err();
        assert_eq!(err, LotteryError::NumberOutOfRange.into());
    }

    #[test]
    fn range_violation_reported_before_ordering() {
        // First offending value is out of range, so that error wins even
        // though the sequence is also non-ascending later on.
        let err = encode_numbers(&[0, 5, 4, 10, 20, 30]).unwrap_err();
        assert_eq!(err, LotteryError::NumberOutOfRange.into());
    }

    #[test]
    fn match_count_is_popcount_of_intersection() {
        let ticket = encode_numbers(&[1, 6, 12, 20, 28, 35]).unwrap();
        let draw = encode_numbers(&[1, 6, 12, 21, 29, 34]).unwrap();
        assert_eq!(match_count(ticket, draw), 3);
        assert_eq!(match_count(ticket, ticket), 6);
        let disjoint = encode_numbers(&[2, 7, 13, 21, 29, 34]).unwrap();
        assert_eq!(match_count(ticket, disjoint), 0);
    }
}
