//! The [`RuleTable`]: neighbourhood → output symbol.

use indexmap::{IndexMap, IndexSet};
use smallvec::SmallVec;
use strata_core::{Alphabet, Neighbourhood, NeighbourhoodCode, RuleError, Symbol};

use crate::numeral;

/// Check a neighbourhood enumeration against `alphabet` and pack it.
///
/// Every tuple must have `alphabet.arity()` cells, every cell must belong
/// to the alphabet, and no tuple may repeat. The count is not checked here;
/// see [`RuleTable::build`] and [`RuleFamily::new`](crate::RuleFamily::new).
///
/// Returns the packed codes in enumeration order.
pub fn validate_enumeration(
    alphabet: Alphabet,
    neighbourhoods: &[Neighbourhood],
) -> Result<IndexSet<NeighbourhoodCode>, RuleError> {
    let mut codes = IndexSet::with_capacity(neighbourhoods.len());
    for (i, n) in neighbourhoods.iter().enumerate() {
        if n.arity() != alphabet.arity() {
            return Err(RuleError::InvalidNeighbourhoods {
                reason: format!(
                    "entry {i} {n} has {} cells, {alphabet} neighbourhoods have {}",
                    n.arity(),
                    alphabet.arity()
                ),
            });
        }
        let code = n.code(alphabet).ok_or_else(|| RuleError::InvalidNeighbourhoods {
            reason: format!("entry {i} {n} holds a symbol outside the {alphabet} alphabet"),
        })?;
        if !codes.insert(code) {
            return Err(RuleError::InvalidNeighbourhoods {
                reason: format!("entry {i} {n} is a duplicate"),
            });
        }
    }
    Ok(codes)
}

/// A complete, immutable transition table for one rule number.
///
/// Entries are kept in enumeration order (for inspection) and mirrored into
/// a dense array indexed by [`NeighbourhoodCode`] for the stepper's hot
/// path. Every one of the `alphabet.width()` neighbourhoods has an entry.
///
/// # Examples
///
/// ```
/// use strata_core::{Alphabet, Neighbourhood};
/// use strata_rule::RuleTable;
///
/// let nbhds = Neighbourhood::lexicographic(Alphabet::Binary);
/// let table = RuleTable::from_rule(Alphabet::Binary, &nbhds, 90).unwrap();
/// assert_eq!(table.len(), 8);
/// // Rule 90: next = left XOR right.
/// assert_eq!(table.get(&Neighbourhood::from([1, 0, 0])), Some(1));
/// assert_eq!(table.get(&Neighbourhood::from([1, 1, 1])), Some(0));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleTable {
    alphabet: Alphabet,
    rule: u32,
    entries: IndexMap<NeighbourhoodCode, Symbol>,
    dense: SmallVec<[Option<Symbol>; 9]>,
}

impl RuleTable {
    /// Pair the `i`-th neighbourhood with the `i`-th digit.
    ///
    /// # Errors
    ///
    /// - [`RuleError::InvalidNeighbourhoods`] if the enumeration is malformed
    ///   or does not cover all `alphabet.width()` neighbourhoods.
    /// - [`RuleError::RuleTooLarge`] if `digits` and `neighbourhoods` differ
    ///   in length.
    /// - [`RuleError::InvalidDigit`] if a digit lies outside the alphabet.
    pub fn build(
        alphabet: Alphabet,
        neighbourhoods: &[Neighbourhood],
        digits: &[Symbol],
    ) -> Result<Self, RuleError> {
        let codes = validate_enumeration(alphabet, neighbourhoods)?;
        Self::from_codes(alphabet, &codes, digits)
    }

    /// Decode `rule` and build its table over `neighbourhoods`.
    ///
    /// # Errors
    ///
    /// [`RuleError::OutOfRange`] if the rule number is too large for the
    /// alphabet, plus everything [`build`](Self::build) reports.
    pub fn from_rule(
        alphabet: Alphabet,
        neighbourhoods: &[Neighbourhood],
        rule: u32,
    ) -> Result<Self, RuleError> {
        let digits = numeral::decode(rule, alphabet)?;
        Self::build(alphabet, neighbourhoods, &digits)
    }

    /// Build from an already validated, packed enumeration.
    pub(crate) fn from_codes(
        alphabet: Alphabet,
        codes: &IndexSet<NeighbourhoodCode>,
        digits: &[Symbol],
    ) -> Result<Self, RuleError> {
        if digits.len() != codes.len() {
            return Err(RuleError::RuleTooLarge {
                digits: digits.len(),
                neighbourhoods: codes.len(),
            });
        }
        if codes.len() != alphabet.width() {
            return Err(RuleError::InvalidNeighbourhoods {
                reason: format!(
                    "{} entries given, {alphabet} rules need all {}",
                    codes.len(),
                    alphabet.width()
                ),
            });
        }
        let rule = numeral::encode(digits, alphabet)?;

        let mut entries = IndexMap::with_capacity(codes.len());
        let mut dense: SmallVec<[Option<Symbol>; 9]> =
            SmallVec::from_elem(None, alphabet.width());
        for (&code, &digit) in codes.iter().zip(digits) {
            entries.insert(code, digit);
            dense[code.index()] = Some(digit);
        }

        log::debug!(
            "built {alphabet} rule table for rule {rule} ({} entries)",
            entries.len()
        );
        Ok(Self {
            alphabet,
            rule,
            entries,
            dense,
        })
    }

    /// The alphabet this table maps over.
    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    /// The rule number whose digits populate the table.
    pub fn rule(&self) -> u32 {
        self.rule
    }

    /// Number of entries (always `alphabet().width()`).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`; construction rejects partial tables.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Output symbol for a packed neighbourhood.
    #[inline]
    pub fn lookup(&self, code: NeighbourhoodCode) -> Option<Symbol> {
        self.dense.get(code.index()).copied().flatten()
    }

    /// Output symbol for a neighbourhood tuple.
    pub fn get(&self, neighbourhood: &Neighbourhood) -> Option<Symbol> {
        neighbourhood
            .code(self.alphabet)
            .and_then(|code| self.lookup(code))
    }

    /// Whether `neighbourhood` has an entry.
    pub fn contains(&self, neighbourhood: &Neighbourhood) -> bool {
        self.get(neighbourhood).is_some()
    }

    /// Entries in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (Neighbourhood, Symbol)> + '_ {
        self.entries
            .iter()
            .map(|(code, &s)| (code.unpack(self.alphabet), s))
    }
}
