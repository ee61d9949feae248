//! Neighbourhood tuples and their packed integer codes.

use std::fmt;

use smallvec::SmallVec;

use crate::alphabet::{Alphabet, Symbol};

/// An ordered tuple of cell values consulted to decide one cell's next value.
///
/// Uses `SmallVec<[Symbol; 3]>` so both supported shapes (3-cell binary,
/// 2-cell ternary) stay inline.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Neighbourhood(SmallVec<[Symbol; 3]>);

impl Neighbourhood {
    /// Build a neighbourhood from a slice of symbols.
    pub fn from_slice(cells: &[Symbol]) -> Self {
        Self(SmallVec::from_slice(cells))
    }

    /// The cell values, left to right.
    pub fn as_slice(&self) -> &[Symbol] {
        &self.0
    }

    /// Number of cells in the tuple.
    pub fn arity(&self) -> usize {
        self.0.len()
    }

    /// Pack into a [`NeighbourhoodCode`] for `alphabet`.
    ///
    /// Returns `None` if the arity does not match or a symbol lies outside
    /// the alphabet.
    pub fn code(&self, alphabet: Alphabet) -> Option<NeighbourhoodCode> {
        NeighbourhoodCode::pack(&self.0, alphabet)
    }

    /// All `size^arity` neighbourhoods of `alphabet` in lexicographic order.
    ///
    /// This is the default enumeration: position `i` holds the tuple whose
    /// packed code is `i`, so the least significant rule digit governs the
    /// all-zero neighbourhood.
    ///
    /// ```
    /// use strata_core::{Alphabet, Neighbourhood};
    ///
    /// let nbhds = Neighbourhood::lexicographic(Alphabet::Ternary);
    /// assert_eq!(nbhds.len(), 9);
    /// assert_eq!(nbhds[0].as_slice(), &[0, 0]);
    /// assert_eq!(nbhds[5].as_slice(), &[1, 2]);
    /// assert_eq!(nbhds[8].as_slice(), &[2, 2]);
    /// ```
    pub fn lexicographic(alphabet: Alphabet) -> Vec<Self> {
        (0..alphabet.width())
            .map(|i| NeighbourhoodCode(i as u16).unpack(alphabet))
            .collect()
    }
}

impl From<&[Symbol]> for Neighbourhood {
    fn from(cells: &[Symbol]) -> Self {
        Self::from_slice(cells)
    }
}

impl<const N: usize> From<[Symbol; N]> for Neighbourhood {
    fn from(cells: [Symbol; N]) -> Self {
        Self::from_slice(&cells)
    }
}

impl fmt::Display for Neighbourhood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, s) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{s}")?;
        }
        write!(f, ")")
    }
}

/// A neighbourhood packed into a single base-`size` integer.
///
/// The leftmost cell is the most significant digit, so codes sort in the
/// same order as the lexicographic enumeration. Codes are always below
/// `alphabet.width()`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NeighbourhoodCode(pub u16);

impl NeighbourhoodCode {
    /// Pack `cells` as a base-`alphabet.size()` number.
    ///
    /// Returns `None` if `cells` does not have `alphabet.arity()` entries
    /// or any symbol lies outside the alphabet.
    pub fn pack(cells: &[Symbol], alphabet: Alphabet) -> Option<Self> {
        if cells.len() != alphabet.arity() {
            return None;
        }
        let base = u16::from(alphabet.size());
        let mut code = 0u16;
        for &s in cells {
            if !alphabet.contains(s) {
                return None;
            }
            code = code * base + u16::from(s);
        }
        Some(Self(code))
    }

    /// Expand back into a neighbourhood of `alphabet.arity()` cells.
    pub fn unpack(self, alphabet: Alphabet) -> Neighbourhood {
        let base = u16::from(alphabet.size());
        let mut cells: SmallVec<[Symbol; 3]> = SmallVec::from_elem(0, alphabet.arity());
        let mut rest = self.0;
        for slot in cells.iter_mut().rev() {
            *slot = (rest % base) as Symbol;
            rest /= base;
        }
        Neighbourhood(cells)
    }

    /// The code as a dense table index.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NeighbourhoodCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn binary_lexicographic_order() {
        let nbhds = Neighbourhood::lexicographic(Alphabet::Binary);
        let expected: [[Symbol; 3]; 8] = [
            [0, 0, 0],
            [0, 0, 1],
            [0, 1, 0],
            [0, 1, 1],
            [1, 0, 0],
            [1, 0, 1],
            [1, 1, 0],
            [1, 1, 1],
        ];
        assert_eq!(nbhds.len(), 8);
        for (got, want) in nbhds.iter().zip(expected.iter()) {
            assert_eq!(got.as_slice(), want);
        }
    }

    #[test]
    fn code_rejects_wrong_arity() {
        let n = Neighbourhood::from([0, 1]);
        assert_eq!(n.code(Alphabet::Binary), None);
        assert_eq!(n.code(Alphabet::Ternary), Some(NeighbourhoodCode(1)));
    }

    #[test]
    fn code_rejects_foreign_symbol() {
        let n = Neighbourhood::from([0, 2, 1]);
        assert_eq!(n.code(Alphabet::Binary), None);
    }

    #[test]
    fn pack_rejects_long_slices() {
        assert_eq!(NeighbourhoodCode::pack(&[1; 40], Alphabet::Ternary), None);
        assert_eq!(NeighbourhoodCode::pack(&[1, 0, 1, 1], Alphabet::Binary), None);
        assert_eq!(NeighbourhoodCode::pack(&[], Alphabet::Binary), None);
        assert_eq!(
            NeighbourhoodCode::pack(&[1, 0, 1], Alphabet::Binary),
            Some(NeighbourhoodCode(5))
        );
    }

    #[test]
    fn display_is_tuple() {
        assert_eq!(Neighbourhood::from([2, 0]).to_string(), "(2, 0)");
    }

    fn arb_alphabet() -> impl Strategy<Value = Alphabet> {
        prop_oneof![Just(Alphabet::Binary), Just(Alphabet::Ternary)]
    }

    proptest! {
        #[test]
        fn lexicographic_position_equals_code(ab in arb_alphabet()) {
            for (i, n) in Neighbourhood::lexicographic(ab).iter().enumerate() {
                prop_assert_eq!(n.code(ab), Some(NeighbourhoodCode(i as u16)));
            }
        }

        #[test]
        fn unpack_then_pack_is_identity(ab in arb_alphabet(), raw in 0u16..9) {
            let code = NeighbourhoodCode(raw % ab.width() as u16);
            prop_assert_eq!(code.unpack(ab).code(ab), Some(code));
        }
    }
}
