//! Durable snapshots of a play session.

use aenigma_core::{Digit, DigitGrid, Position};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

use crate::{Board, SymbolPermutation};

/// A by-value image of a [`Board`], mirroring the on-disk JSON schema.
///
/// Grids are rows of integers with `0` for an empty cell, so save files
/// written by earlier releases load unchanged. `symbol_perm` is optional on
/// read: saves that predate symbol shuffling restore with the identity
/// permutation. A snapshot holds no references into the board it was taken
/// from; mutating the board afterwards never corrupts it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    puzzle: [[u8; 9]; 9],
    solution: [[u8; 9]; 9],
    user: [[u8; 9]; 9],
    fixed: [[bool; 9]; 9],
    #[serde(default)]
    symbol_perm: Option<[u8; 9]>,
}

/// A structurally well-formed snapshot whose contents cannot form a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum RestoreError {
    /// A grid holds a value outside `0..=9`.
    #[display("cell value {value} is outside 0..=9")]
    CellValue {
        /// The offending value.
        value: u8,
    },
    /// The solution grid has an empty cell.
    #[display("solution grid has an empty cell")]
    IncompleteSolution,
    /// The symbol table is not a permutation of 1-9.
    #[display("symbol table is not a permutation of 1..=9")]
    InvalidSymbolTable,
}

impl Snapshot {
    /// Captures the full state of a board.
    #[must_use]
    pub fn capture(board: &Board) -> Self {
        let mut user = [[0; 9]; 9];
        let mut fixed = [[false; 9]; 9];
        for pos in Position::ALL {
            let (x, y) = (usize::from(pos.x()), usize::from(pos.y()));
            user[y][x] = board.value(pos).map_or(0, Digit::value);
            fixed[y][x] = board.is_given(pos);
        }
        Self {
            puzzle: grid_to_rows(&board.givens()),
            solution: grid_to_rows(board.solution()),
            user,
            fixed,
            symbol_perm: Some(board.symbols().values()),
        }
    }

    /// Rebuilds a board from this snapshot.
    ///
    /// Clue cells are re-derived from the puzzle grid, player entries are
    /// applied on top of them, and the persisted symbol table (or the
    /// identity, when absent) is installed.
    ///
    /// # Errors
    ///
    /// Returns [`RestoreError`] when a grid value is out of range, the
    /// solution has a gap, or the symbol table is not a bijection.
    pub fn restore(&self) -> Result<Board, RestoreError> {
        let puzzle = rows_to_grid(&self.puzzle)?;
        let solution = rows_to_grid(&self.solution)?;
        if !solution.is_full() {
            return Err(RestoreError::IncompleteSolution);
        }
        let symbols = match self.symbol_perm {
            Some(values) => SymbolPermutation::try_from_values(values)
                .ok_or(RestoreError::InvalidSymbolTable)?,
            None => SymbolPermutation::identity(),
        };
        let user = rows_to_grid(&self.user)?;

        let mut board = Board::with_symbols(&puzzle, &solution, symbols);
        for pos in Position::ALL {
            if let Some(digit) = user[pos] {
                // Clue cells ignore the write, so a snapshot disagreeing
                // with its own puzzle grid cannot alter a clue.
                board.set_cell(pos, digit);
            }
        }
        Ok(board)
    }
}

fn grid_to_rows(grid: &DigitGrid) -> [[u8; 9]; 9] {
    let mut rows = [[0; 9]; 9];
    for pos in Position::ALL {
        rows[usize::from(pos.y())][usize::from(pos.x())] = grid[pos].map_or(0, Digit::value);
    }
    rows
}

fn rows_to_grid(rows: &[[u8; 9]; 9]) -> Result<DigitGrid, RestoreError> {
    let mut grid = DigitGrid::new();
    for pos in Position::ALL {
        let value = rows[usize::from(pos.y())][usize::from(pos.x())];
        if value == 0 {
            continue;
        }
        let digit = Digit::try_from_value(value).ok_or(RestoreError::CellValue { value })?;
        grid.set(pos, Some(digit));
    }
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample_puzzle;

    fn sample_board() -> Board {
        let (puzzle, solution) = sample_puzzle();
        Board::with_symbols(&puzzle, &solution, SymbolPermutation::identity())
    }

    #[test]
    fn test_capture_restore_round_trip() {
        let mut board = sample_board();
        board.set_cell(Position::new(2, 0), Digit::D4);
        board.set_cell(Position::new(3, 0), Digit::D9);

        let snapshot = Snapshot::capture(&board);
        let restored = snapshot.restore().expect("captured snapshot restores");
        assert_eq!(restored, board);
    }

    #[test]
    fn test_snapshot_does_not_alias_the_board() {
        let mut board = sample_board();
        board.set_cell(Position::new(2, 0), Digit::D4);
        let snapshot = Snapshot::capture(&board);

        board.set_cell(Position::new(2, 0), Digit::D9);
        board.shuffle_symbols();

        let restored = snapshot.restore().expect("snapshot restores");
        assert_eq!(restored.value(Position::new(2, 0)), Some(Digit::D4));
        assert_eq!(restored.symbols(), &SymbolPermutation::identity());
    }

    #[test]
    fn test_json_schema_is_stable() {
        let board = sample_board();
        let snapshot = Snapshot::capture(&board);
        let json = serde_json::to_string(&snapshot).expect("snapshot serializes");
        for field in ["\"puzzle\"", "\"solution\"", "\"user\"", "\"fixed\"", "\"symbol_perm\""] {
            assert!(json.contains(field), "missing {field} in {json}");
        }
        let reparsed: Snapshot = serde_json::from_str(&json).expect("snapshot reparses");
        assert_eq!(reparsed, snapshot);
    }

    #[test]
    fn test_missing_symbol_perm_defaults_to_identity() {
        let mut board = sample_board();
        board.shuffle_symbols();
        let mut snapshot = Snapshot::capture(&board);
        snapshot.symbol_perm = None;

        // The field is genuinely optional on the wire as well.
        let json = serde_json::to_string(&snapshot).expect("snapshot serializes");
        let stripped = {
            let mut value: serde_json::Value =
                serde_json::from_str(&json).expect("snapshot JSON parses");
            value
                .as_object_mut()
                .expect("snapshot is a JSON object")
                .remove("symbol_perm");
            value.to_string()
        };
        let reparsed: Snapshot =
            serde_json::from_str(&stripped).expect("symbol_perm is optional");

        let restored = reparsed.restore().expect("legacy snapshot restores");
        assert_eq!(restored.symbols(), &SymbolPermutation::identity());
    }

    #[test]
    fn test_restore_rejects_malformed_grids() {
        let board = sample_board();

        let mut snapshot = Snapshot::capture(&board);
        snapshot.user[0][2] = 10;
        assert_eq!(
            snapshot.restore(),
            Err(RestoreError::CellValue { value: 10 })
        );

        let mut snapshot = Snapshot::capture(&board);
        snapshot.solution[4][4] = 0;
        assert_eq!(snapshot.restore(), Err(RestoreError::IncompleteSolution));

        let mut snapshot = Snapshot::capture(&board);
        snapshot.symbol_perm = Some([1, 1, 3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(snapshot.restore(), Err(RestoreError::InvalidSymbolTable));
    }

    #[test]
    fn test_restore_keeps_clues_over_user_entries() {
        let board = sample_board();
        let mut snapshot = Snapshot::capture(&board);
        // A tampered save claiming a different digit on the clue at (0, 0).
        snapshot.user[0][0] = 9;

        let restored = snapshot.restore().expect("snapshot restores");
        assert_eq!(restored.value(Position::new(0, 0)), Some(Digit::D5));
        assert!(restored.is_given(Position::new(0, 0)));
    }
}
