//! [`RuleFamily`]: an alphabet plus a validated neighbourhood enumeration.

use std::ops::RangeInclusive;

use indexmap::IndexSet;
use strata_core::{Alphabet, Neighbourhood, NeighbourhoodCode, RuleError};

use crate::numeral;
use crate::table::{validate_enumeration, RuleTable};

/// The space of all rules for one alphabet and one enumeration order.
///
/// Validates the enumeration once; afterwards [`table()`](Self::table) only
/// has to decode the rule number.
///
/// # Examples
///
/// ```
/// use strata_rule::RuleFamily;
/// use strata_core::Alphabet;
///
/// let family = RuleFamily::lexicographic(Alphabet::Binary);
/// assert_eq!(family.rules(), 0..=255);
///
/// let rule30 = family.table(30).unwrap();
/// assert_eq!(rule30.rule(), 30);
/// assert!(family.table(300).is_err());
/// ```
#[derive(Clone, Debug)]
pub struct RuleFamily {
    alphabet: Alphabet,
    neighbourhoods: Vec<Neighbourhood>,
    codes: IndexSet<NeighbourhoodCode>,
}

impl RuleFamily {
    /// Create a family from an explicit enumeration.
    ///
    /// # Errors
    ///
    /// [`RuleError::InvalidNeighbourhoods`] if any tuple has the wrong
    /// arity or a foreign symbol, if a tuple repeats, or if the enumeration
    /// does not list all `alphabet.width()` neighbourhoods.
    pub fn new(alphabet: Alphabet, neighbourhoods: Vec<Neighbourhood>) -> Result<Self, RuleError> {
        let codes = validate_enumeration(alphabet, &neighbourhoods)?;
        if codes.len() != alphabet.width() {
            return Err(RuleError::InvalidNeighbourhoods {
                reason: format!(
                    "{} entries given, {alphabet} rules need all {}",
                    codes.len(),
                    alphabet.width()
                ),
            });
        }
        Ok(Self {
            alphabet,
            neighbourhoods,
            codes,
        })
    }

    /// The family over the lexicographic enumeration.
    pub fn lexicographic(alphabet: Alphabet) -> Self {
        let neighbourhoods = Neighbourhood::lexicographic(alphabet);
        let codes = (0..alphabet.width())
            .map(|i| NeighbourhoodCode(i as u16))
            .collect();
        Self {
            alphabet,
            neighbourhoods,
            codes,
        }
    }

    /// Resolve the alphabet from its size and use `neighbourhoods` if
    /// given, the lexicographic enumeration otherwise.
    ///
    /// # Errors
    ///
    /// [`RuleError::InvalidAlphabet`] for sizes other than 2 or 3, plus
    /// everything [`new`](Self::new) reports.
    pub fn from_size(
        alphabet_size: u32,
        neighbourhoods: Option<Vec<Neighbourhood>>,
    ) -> Result<Self, RuleError> {
        let alphabet = Alphabet::from_size(alphabet_size)?;
        match neighbourhoods {
            Some(n) => Self::new(alphabet, n),
            None => Ok(Self::lexicographic(alphabet)),
        }
    }

    /// The alphabet.
    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    /// The enumeration, in digit order.
    pub fn neighbourhoods(&self) -> &[Neighbourhood] {
        &self.neighbourhoods
    }

    /// Number of digits per rule (and of neighbourhoods).
    pub fn width(&self) -> usize {
        self.alphabet.width()
    }

    /// Valid rule numbers.
    pub fn rules(&self) -> RangeInclusive<u32> {
        0..=self.alphabet.max_rule()
    }

    /// Build the table for `rule`.
    ///
    /// # Errors
    ///
    /// [`RuleError::OutOfRange`] if `rule` lies outside [`rules()`](Self::rules).
    pub fn table(&self, rule: u32) -> Result<RuleTable, RuleError> {
        let digits = numeral::decode(rule, self.alphabet)?;
        RuleTable::from_codes(self.alphabet, &self.codes, &digits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexicographic_matches_explicit() {
        for ab in [Alphabet::Binary, Alphabet::Ternary] {
            let implicit = RuleFamily::lexicographic(ab);
            let explicit = RuleFamily::new(ab, Neighbourhood::lexicographic(ab)).unwrap();
            for rule in [0, 1, 30, 110, 255] {
                assert_eq!(implicit.table(rule), explicit.table(rule));
            }
        }
    }

    #[test]
    fn from_size_defaults_to_lexicographic() {
        let f = RuleFamily::from_size(3, None).unwrap();
        assert_eq!(f.alphabet(), Alphabet::Ternary);
        assert_eq!(f.width(), 9);
        assert_eq!(f.rules(), 0..=19_682);
        assert_eq!(f.neighbourhoods()[3].as_slice(), &[1, 0]);
    }

    #[test]
    fn from_size_rejects_bad_alphabet() {
        assert_eq!(
            RuleFamily::from_size(4, None).unwrap_err(),
            RuleError::InvalidAlphabet { size: 4 }
        );
    }

    #[test]
    fn new_rejects_short_enumeration() {
        let mut nbhds = Neighbourhood::lexicographic(Alphabet::Ternary);
        nbhds.pop();
        assert!(matches!(
            RuleFamily::new(Alphabet::Ternary, nbhds),
            Err(RuleError::InvalidNeighbourhoods { .. })
        ));
    }

    #[test]
    fn table_rejects_out_of_range() {
        let f = RuleFamily::lexicographic(Alphabet::Ternary);
        assert_eq!(
            f.table(19_683).unwrap_err(),
            RuleError::OutOfRange {
                rule: 19_683,
                max: 19_682
            }
        );
        assert!(f.table(19_682).is_ok());
    }
}
