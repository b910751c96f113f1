//! Roman-numeral Sudoku play sessions.
//!
//! This crate is the puzzle state and rule engine behind the game: a
//! [`Board`] tracking clues and player input, conflict and completion
//! checks, row-major hint lookup, the display-symbol permutation that
//! varies which Roman numeral stands for each logical digit, and save-file
//! persistence.
//!
//! The shell around it (rendering, input, menus) stays outside this crate
//! and talks to the engine through the [`Board`] and [`SaveSlot`] APIs.
//! All state and rule checks use logical digits; Roman numerals appear
//! only at the display boundary via [`aenigma_core::roman`].
//!
//! # Example
//!
//! ```
//! use aenigma_core::{Digit, Position};
//! use aenigma_game::{Board, sample_puzzle};
//!
//! let (puzzle, solution) = sample_puzzle();
//! let mut board = Board::new(&puzzle, &solution);
//!
//! // Play state is write-through; conflicts are a query, not a rejection.
//! let pos = Position::new(2, 0);
//! board.set_cell(pos, Digit::D9);
//! assert!(board.has_conflict(pos));
//!
//! // The hint always names the first wrong cell in row-major order.
//! let hint = board.hint().expect("board is not complete");
//! assert_eq!(hint.pos, pos);
//! board.set_cell(hint.pos, hint.digit);
//! assert!(!board.has_conflict(pos));
//! ```

pub mod board;
pub mod sample;
pub mod save_slot;
pub mod snapshot;
pub mod symbols;

pub use self::{
    board::{Board, CellState, Hint},
    sample::sample_puzzle,
    save_slot::SaveSlot,
    snapshot::{RestoreError, Snapshot},
    symbols::SymbolPermutation,
};
