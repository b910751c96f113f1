//! The play-session board and its rules.

use aenigma_core::{Digit, DigitGrid, Position};
use rand::Rng;

use crate::SymbolPermutation;

/// The state of a single cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    /// No digit entered.
    Empty,
    /// A clue from the puzzle, immutable for the life of the session.
    Given(Digit),
    /// A digit entered by the player.
    Filled(Digit),
}

impl CellState {
    /// Returns the digit occupying the cell, if any.
    #[must_use]
    pub fn as_digit(&self) -> Option<Digit> {
        match self {
            Self::Given(digit) | Self::Filled(digit) => Some(*digit),
            Self::Empty => None,
        }
    }

    /// Returns whether the cell is a puzzle clue.
    #[must_use]
    pub fn is_given(&self) -> bool {
        matches!(self, Self::Given(_))
    }

    /// Returns whether the cell holds no digit.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// A single correction: one wrong or empty cell and the digit the solution
/// holds there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hint {
    /// The cell to correct.
    pub pos: Position,
    /// The solution digit for that cell.
    pub digit: Digit,
}

/// A Roman-numeral Sudoku play session.
///
/// Tracks puzzle clues and player input per cell, the full solution for
/// hint and completion checks, and the current display-symbol permutation.
/// Clue cells silently ignore writes, so input handling never needs a
/// fixed-cell special case. Rule conflicts are a query-time concept: a
/// write always lands, and the shell asks [`has_conflict`](Self::has_conflict)
/// when highlighting.
///
/// # Example
///
/// ```
/// use aenigma_game::{Board, sample_puzzle};
///
/// let (puzzle, solution) = sample_puzzle();
/// let mut board = Board::new(&puzzle, &solution);
/// assert!(!board.is_complete());
///
/// while let Some(hint) = board.hint() {
///     board.set_cell(hint.pos, hint.digit);
/// }
/// assert!(board.is_complete());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [CellState; 81],
    solution: DigitGrid,
    symbols: SymbolPermutation,
}

impl Board {
    /// Creates a board from a puzzle grid and its solution, drawing a
    /// random symbol permutation.
    ///
    /// Filled cells of `puzzle` become clues; its empty cells start empty.
    /// The pair is trusted: `solution` must be a complete valid fill of
    /// `puzzle` agreeing with it on every clue. The board does not validate
    /// this.
    #[must_use]
    pub fn new(puzzle: &DigitGrid, solution: &DigitGrid) -> Self {
        Self::with_symbols(puzzle, solution, SymbolPermutation::random(&mut rand::rng()))
    }

    /// Creates a board with an explicit symbol permutation.
    ///
    /// Used when restoring a persisted session and by tests that need a
    /// deterministic display mapping; trusts its inputs like
    /// [`new`](Self::new).
    #[must_use]
    pub fn with_symbols(
        puzzle: &DigitGrid,
        solution: &DigitGrid,
        symbols: SymbolPermutation,
    ) -> Self {
        let mut cells = [CellState::Empty; 81];
        for pos in Position::ALL {
            if let Some(digit) = puzzle[pos] {
                cells[pos.index()] = CellState::Given(digit);
            }
        }
        Self {
            cells,
            solution: solution.clone(),
            symbols,
        }
    }

    /// Returns the state of the cell at the given position.
    #[must_use]
    pub fn cell(&self, pos: Position) -> &CellState {
        &self.cells[pos.index()]
    }

    /// Returns the digit visible at the given position (clue or player
    /// input), or `None` for an empty cell.
    #[must_use]
    pub fn value(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.index()].as_digit()
    }

    /// Returns whether the cell at the given position is a puzzle clue.
    #[must_use]
    pub fn is_given(&self, pos: Position) -> bool {
        self.cells[pos.index()].is_given()
    }

    /// Returns the clue grid the board was created from.
    #[must_use]
    pub fn givens(&self) -> DigitGrid {
        let mut givens = DigitGrid::new();
        for pos in Position::ALL {
            if let CellState::Given(digit) = self.cells[pos.index()] {
                givens.set(pos, Some(digit));
            }
        }
        givens
    }

    /// Returns the stored solution grid.
    #[must_use]
    pub fn solution(&self) -> &DigitGrid {
        &self.solution
    }

    /// Places a player digit at the given position.
    ///
    /// Clue cells silently ignore the write. No rule validation happens
    /// here: the player may hold a conflicting board and the shell
    /// highlights it via [`has_conflict`](Self::has_conflict) instead of
    /// blocking input.
    pub fn set_cell(&mut self, pos: Position, digit: Digit) {
        let cell = &mut self.cells[pos.index()];
        if !cell.is_given() {
            *cell = CellState::Filled(digit);
        }
    }

    /// Clears the player digit at the given position.
    ///
    /// Clue cells silently ignore the write; clearing an empty cell is a
    /// no-op.
    pub fn clear_cell(&mut self, pos: Position) {
        let cell = &mut self.cells[pos.index()];
        if !cell.is_given() {
            *cell = CellState::Empty;
        }
    }

    /// Clears every player-entered digit, restoring the board to its
    /// freshly created state. The symbol permutation is left untouched.
    pub fn reset(&mut self) {
        for cell in &mut self.cells {
            if !cell.is_given() {
                *cell = CellState::Empty;
            }
        }
    }

    /// Returns whether the board matches the stored solution cell for cell.
    ///
    /// This is solution equality, not generic rule validity: with puzzles
    /// assumed to have a unique solution the two coincide, and equality
    /// keeps hints and completion consistent with each other. Editing a
    /// complete board makes it incomplete again immediately.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        Position::ALL
            .iter()
            .all(|&pos| self.value(pos) == self.solution[pos])
    }

    /// Returns whether the digit at the given position also appears in one
    /// of its house peers (same row, column, or 3×3 box).
    ///
    /// Empty cells never conflict. Recomputed on every call; there is no
    /// cached conflict state to invalidate.
    #[must_use]
    pub fn has_conflict(&self, pos: Position) -> bool {
        let Some(digit) = self.value(pos) else {
            return false;
        };
        pos.house_peers()
            .into_iter()
            .any(|peer| self.value(peer) == Some(digit))
    }

    /// Returns the first cell, scanning rows top to bottom and left to
    /// right, whose value differs from the solution, together with the
    /// solution digit.
    ///
    /// Returns `None` exactly when the board [`is_complete`](Self::is_complete).
    /// The scan order is part of the contract: a given board always yields
    /// the same hint.
    #[must_use]
    pub fn hint(&self) -> Option<Hint> {
        Position::ALL.iter().copied().find_map(|pos| {
            let digit = self.solution[pos]?;
            (self.value(pos) != Some(digit)).then_some(Hint { pos, digit })
        })
    }

    /// Returns the current display-symbol permutation.
    #[must_use]
    pub fn symbols(&self) -> &SymbolPermutation {
        &self.symbols
    }

    /// Replaces the symbol permutation with a fresh uniformly random one.
    ///
    /// Play state is unaffected; only the displayed numerals change.
    pub fn shuffle_symbols(&mut self) {
        self.shuffle_symbols_with(&mut rand::rng());
    }

    /// Replaces the symbol permutation using the provided RNG.
    pub fn shuffle_symbols_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.symbols = SymbolPermutation::random(rng);
    }

    /// Maps a logical digit to the digit currently shown for it.
    #[must_use]
    pub fn display_digit(&self, digit: Digit) -> Digit {
        self.symbols.apply(digit)
    }

    /// Maps a shown digit back to the logical digit it stands for.
    #[must_use]
    pub fn logical_digit(&self, shown: Digit) -> Digit {
        self.symbols.invert(shown)
    }

    /// Returns the display digit for the given position, or `None` for an
    /// empty cell.
    #[must_use]
    pub fn display_value(&self, pos: Position) -> Option<Digit> {
        self.symbols.apply_cell(self.value(pos))
    }
}
