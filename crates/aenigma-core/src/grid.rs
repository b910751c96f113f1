//! The 9×9 digit grid.

use std::{fmt, ops::Index, str::FromStr};

use derive_more::{Display, Error};

use crate::{Digit, Position};

/// A 9×9 grid of optional digits, stored in row-major order.
///
/// `None` is an empty cell. The grid round-trips through a compact
/// 81-character text form where `.` is an empty cell and `1`-`9` a digit,
/// reading row by row from the top-left corner.
///
/// # Examples
///
/// ```
/// use aenigma_core::{Digit, DigitGrid, Position};
///
/// let grid: DigitGrid = format!("5{}", ".".repeat(80)).parse().unwrap();
/// assert_eq!(grid[Position::new(0, 0)], Some(Digit::D5));
/// assert_eq!(grid[Position::new(1, 0)], None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitGrid {
    cells: [Option<Digit>; 81],
}

impl Default for DigitGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl DigitGrid {
    /// Creates an empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Returns the cell at the given position.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.index()]
    }

    /// Sets the cell at the given position.
    pub fn set(&mut self, pos: Position, value: Option<Digit>) {
        self.cells[pos.index()] = value;
    }

    /// Returns the number of filled cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Returns whether every cell is filled.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }
}

impl Index<Position> for DigitGrid {
    type Output = Option<Digit>;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[pos.index()]
    }
}

/// Error returned when parsing a grid from its 81-character text form fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ParseGridError {
    /// The text does not contain exactly 81 characters.
    #[display("grid text must be 81 characters, got {length}")]
    BadLength {
        /// Number of characters found.
        length: usize,
    },
    /// A character other than `.` or `1`-`9` was found.
    #[display("invalid grid character {character:?} at index {index}")]
    BadCharacter {
        /// The offending character.
        character: char,
        /// Character offset in the input.
        index: usize,
    },
}

impl FromStr for DigitGrid {
    type Err = ParseGridError;

    #[expect(clippy::cast_possible_truncation)]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [None; 81];
        let mut length = 0;
        for (index, character) in s.chars().enumerate() {
            if index >= 81 {
                return Err(ParseGridError::BadLength {
                    length: s.chars().count(),
                });
            }
            cells[index] = match character {
                '.' => None,
                '1'..='9' => Digit::try_from_value(character as u8 - b'0'),
                _ => return Err(ParseGridError::BadCharacter { character, index }),
            };
            length = index + 1;
        }
        if length != 81 {
            return Err(ParseGridError::BadLength { length });
        }
        Ok(Self { cells })
    }
}

impl fmt::Display for DigitGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell {
                Some(digit) => write!(f, "{digit}")?,
                None => f.write_str(".")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_empty_grid() {
        let grid = DigitGrid::new();
        assert_eq!(grid.filled_count(), 0);
        assert!(!grid.is_full());
        assert_eq!(grid.to_string(), ".".repeat(81));
    }

    #[test]
    fn test_set_get_round_trip() {
        let mut grid = DigitGrid::new();
        let pos = Position::new(3, 7);
        grid.set(pos, Some(Digit::D8));
        assert_eq!(grid.get(pos), Some(Digit::D8));
        assert_eq!(grid[pos], Some(Digit::D8));
        grid.set(pos, None);
        assert_eq!(grid.get(pos), None);
    }

    #[test]
    fn test_parse_row_major_layout() {
        let text = format!("12{}9", ".".repeat(78));
        let grid: DigitGrid = text.parse().expect("valid grid text");
        assert_eq!(grid[Position::new(0, 0)], Some(Digit::D1));
        assert_eq!(grid[Position::new(1, 0)], Some(Digit::D2));
        assert_eq!(grid[Position::new(8, 8)], Some(Digit::D9));
        assert_eq!(grid.filled_count(), 3);
        assert_eq!(grid.to_string(), text);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            "123".parse::<DigitGrid>(),
            Err(ParseGridError::BadLength { length: 3 })
        );
        assert_eq!(
            ".".repeat(82).parse::<DigitGrid>(),
            Err(ParseGridError::BadLength { length: 82 })
        );
        let text = format!("0{}", ".".repeat(80));
        assert_eq!(
            text.parse::<DigitGrid>(),
            Err(ParseGridError::BadCharacter {
                character: '0',
                index: 0
            })
        );
    }

    proptest! {
        #[test]
        fn text_form_round_trips(cells in prop::collection::vec(0u8..=9, 81)) {
            let mut grid = DigitGrid::new();
            for (pos, value) in Position::ALL.into_iter().zip(&cells) {
                grid.set(pos, Digit::try_from_value(*value));
            }
            let reparsed: DigitGrid = grid.to_string().parse().expect("display output is parseable");
            prop_assert_eq!(reparsed, grid);
        }
    }
}
