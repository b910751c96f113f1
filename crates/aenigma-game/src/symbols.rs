//! Display-symbol permutation.

use aenigma_core::Digit;
use rand::{Rng, seq::SliceRandom};

/// A bijective relabeling of the digits 1-9, used only for display.
///
/// Slot `i` of the table holds the digit shown for logical digit `i + 1`.
/// Rule checking, hints, and completion always operate on logical digits;
/// the permutation only changes which Roman numeral the shell renders for a
/// given cell, so reshuffling mid-game never alters play state.
///
/// # Examples
///
/// ```
/// use aenigma_core::Digit;
/// use aenigma_game::SymbolPermutation;
///
/// let symbols = SymbolPermutation::identity();
/// assert_eq!(symbols.apply(Digit::D3), Digit::D3);
///
/// let mut rng = rand::rng();
/// let symbols = SymbolPermutation::random(&mut rng);
/// for digit in Digit::ALL {
///     assert_eq!(symbols.invert(symbols.apply(digit)), digit);
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolPermutation {
    table: [Digit; 9],
}

impl SymbolPermutation {
    /// The permutation that maps every digit to itself.
    #[must_use]
    pub const fn identity() -> Self {
        Self { table: Digit::ALL }
    }

    /// Draws a uniformly random permutation.
    ///
    /// Shuffling the identity table guarantees the result is a bijection.
    #[must_use]
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut table = Digit::ALL;
        table.shuffle(rng);
        Self { table }
    }

    /// Builds a permutation from raw digit values, slot `i` holding the
    /// display value for logical digit `i + 1`.
    ///
    /// Returns `None` when the values are not a permutation of 1-9, so
    /// persisted tables are validated before use.
    #[must_use]
    pub fn try_from_values(values: [u8; 9]) -> Option<Self> {
        let mut table = [Digit::D1; 9];
        let mut seen = [false; 9];
        for (slot, value) in table.iter_mut().zip(values) {
            let digit = Digit::try_from_value(value)?;
            let i = usize::from(digit.value() - 1);
            if seen[i] {
                return None;
            }
            seen[i] = true;
            *slot = digit;
        }
        Some(Self { table })
    }

    /// Returns the raw digit values of the table.
    #[must_use]
    pub fn values(&self) -> [u8; 9] {
        self.table.map(Digit::value)
    }

    /// Maps a logical digit to its display digit.
    #[must_use]
    pub fn apply(&self, digit: Digit) -> Digit {
        self.table[usize::from(digit.value() - 1)]
    }

    /// Maps a display digit back to its logical digit.
    ///
    /// Total over all digits and the exact inverse of [`apply`](Self::apply)
    /// because the table is always a bijection.
    #[must_use]
    #[expect(clippy::missing_panics_doc)]
    pub fn invert(&self, shown: Digit) -> Digit {
        match self.table.iter().position(|digit| *digit == shown) {
            Some(i) => Digit::ALL[i],
            None => unreachable!("symbol table is always a bijection"),
        }
    }

    /// Maps an optional cell value, keeping empty cells empty.
    #[must_use]
    pub fn apply_cell(&self, value: Option<Digit>) -> Option<Digit> {
        value.map(|digit| self.apply(digit))
    }

    /// Inverse of [`apply_cell`](Self::apply_cell).
    #[must_use]
    pub fn invert_cell(&self, shown: Option<Digit>) -> Option<Digit> {
        shown.map(|digit| self.invert(digit))
    }
}

impl Default for SymbolPermutation {
    fn default() -> Self {
        Self::identity()
    }
}
