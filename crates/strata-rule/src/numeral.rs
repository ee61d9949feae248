//! Fixed-width positional numerals for rule numbers.
//!
//! A rule number `N` over an alphabet of size `B` is written as exactly
//! `alphabet.width()` base-`B` digits, least significant digit first. The
//! digit at position `i` is the output symbol for the `i`-th neighbourhood
//! of the enumeration.

use smallvec::SmallVec;
use strata_core::{Alphabet, RuleError, Symbol};

/// Digit sequence of a rule number, least significant digit first.
///
/// Nine inline slots cover both alphabets without heap allocation.
pub type Digits = SmallVec<[Symbol; 9]>;

/// Decode `rule` into `alphabet.width()` base-`alphabet.size()` digits,
/// least significant first, zero-padded at the most significant end.
///
/// # Errors
///
/// [`RuleError::OutOfRange`] if `rule > alphabet.max_rule()`.
///
/// # Examples
///
/// ```
/// use strata_core::Alphabet;
/// use strata_rule::decode;
///
/// // 30 = 0b0001_1110
/// let d = decode(30, Alphabet::Binary).unwrap();
/// assert_eq!(d.as_slice(), &[0, 1, 1, 1, 1, 0, 0, 0]);
///
/// // 5 = 1·3 + 2
/// let d = decode(5, Alphabet::Ternary).unwrap();
/// assert_eq!(d.as_slice(), &[2, 1, 0, 0, 0, 0, 0, 0, 0]);
///
/// assert!(decode(256, Alphabet::Binary).is_err());
/// ```
pub fn decode(rule: u32, alphabet: Alphabet) -> Result<Digits, RuleError> {
    let max = alphabet.max_rule();
    if rule > max {
        return Err(RuleError::OutOfRange { rule, max });
    }
    let base = u32::from(alphabet.size());
    let mut rest = rule;
    let mut digits = Digits::with_capacity(alphabet.width());
    for _ in 0..alphabet.width() {
        digits.push((rest % base) as Symbol);
        rest /= base;
    }
    debug_assert_eq!(rest, 0);
    Ok(digits)
}

/// Interpret `digits` (least significant first) as a base-`alphabet.size()`
/// rule number. Inverse of [`decode`].
///
/// Sequences shorter than the width are read as if zero-padded.
///
/// # Errors
///
/// - [`RuleError::InvalidDigit`] if a digit is not below the base.
/// - [`RuleError::RuleTooLarge`] if there are more digits than
///   `alphabet.width()`.
pub fn encode(digits: &[Symbol], alphabet: Alphabet) -> Result<u32, RuleError> {
    if digits.len() > alphabet.width() {
        return Err(RuleError::RuleTooLarge {
            digits: digits.len(),
            neighbourhoods: alphabet.width(),
        });
    }
    let base = alphabet.size();
    let mut rule = 0u32;
    for &digit in digits.iter().rev() {
        if digit >= base {
            return Err(RuleError::InvalidDigit { digit, base });
        }
        rule = rule * u32::from(base) + u32::from(digit);
    }
    Ok(rule)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ── Boundaries ──────────────────────────────────────────────

    #[test]
    fn zero_is_all_zero_digits() {
        assert_eq!(decode(0, Alphabet::Binary).unwrap().as_slice(), &[0; 8]);
        assert_eq!(decode(0, Alphabet::Ternary).unwrap().as_slice(), &[0; 9]);
    }

    #[test]
    fn max_rule_is_all_top_digits() {
        assert_eq!(decode(255, Alphabet::Binary).unwrap().as_slice(), &[1; 8]);
        assert_eq!(
            decode(19_682, Alphabet::Ternary).unwrap().as_slice(),
            &[2; 9]
        );
    }

    #[test]
    fn one_past_max_is_out_of_range() {
        assert_eq!(
            decode(256, Alphabet::Binary),
            Err(RuleError::OutOfRange { rule: 256, max: 255 })
        );
        assert_eq!(
            decode(19_683, Alphabet::Ternary),
            Err(RuleError::OutOfRange {
                rule: 19_683,
                max: 19_682
            })
        );
        assert!(decode(u32::MAX, Alphabet::Ternary).is_err());
    }

    // ── Worked examples ─────────────────────────────────────────

    #[test]
    fn rule_110_binary() {
        // 110 = 0b0110_1110
        assert_eq!(
            decode(110, Alphabet::Binary).unwrap().as_slice(),
            &[0, 1, 1, 1, 0, 1, 1, 0]
        );
    }

    #[test]
    fn ternary_high_digit() {
        // 2·3^8 = 13122
        let d = decode(13_122, Alphabet::Ternary).unwrap();
        assert_eq!(d.as_slice(), &[0, 0, 0, 0, 0, 0, 0, 0, 2]);
    }

    // ── encode ──────────────────────────────────────────────────

    #[test]
    fn encode_short_sequence_is_zero_padded() {
        assert_eq!(encode(&[1, 1], Alphabet::Binary), Ok(3));
        assert_eq!(encode(&[], Alphabet::Ternary), Ok(0));
    }

    #[test]
    fn encode_rejects_bad_digit() {
        assert_eq!(
            encode(&[0, 2], Alphabet::Binary),
            Err(RuleError::InvalidDigit { digit: 2, base: 2 })
        );
    }

    #[test]
    fn encode_rejects_too_many_digits() {
        assert_eq!(
            encode(&[0; 9], Alphabet::Binary),
            Err(RuleError::RuleTooLarge {
                digits: 9,
                neighbourhoods: 8
            })
        );
    }

    // ── Exhaustive round trip ───────────────────────────────────

    #[test]
    fn every_binary_rule_round_trips() {
        for n in 0..=255u32 {
            let d = decode(n, Alphabet::Binary).unwrap();
            assert_eq!(d.len(), 8);
            assert_eq!(encode(&d, Alphabet::Binary), Ok(n));
        }
    }

    #[test]
    fn every_ternary_rule_round_trips() {
        for n in 0..=19_682u32 {
            let d = decode(n, Alphabet::Ternary).unwrap();
            assert_eq!(d.len(), 9);
            assert!(d.iter().all(|&x| x < 3));
            assert_eq!(encode(&d, Alphabet::Ternary), Ok(n));
        }
    }

    proptest! {
        #[test]
        fn out_of_range_never_decodes(n in 19_683u32..=u32::MAX) {
            prop_assert!(decode(n, Alphabet::Ternary).is_err());
            prop_assert!(decode(n, Alphabet::Binary).is_err());
        }
    }
}
