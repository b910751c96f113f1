//! Core vocabulary for Roman-numeral Sudoku.
//!
//! This crate provides the foundational types the game engine is built on:
//!
//! - [`digit`]: Type-safe representation of sudoku digits 1-9
//! - [`position`]: Bounded board coordinates with house-peer lookup
//! - [`grid`]: The 9×9 digit grid with a compact 81-character text form
//! - [`roman`]: The Roman numeral text codec for digits I-IX
//!
//! All rule checking works on logical digits; Roman numerals are only ever a
//! display and input notation, handled entirely by [`roman`].
//!
//! # Examples
//!
//! ```
//! use aenigma_core::{Digit, DigitGrid, Position, roman};
//!
//! let mut grid = DigitGrid::new();
//! grid.set(Position::new(0, 0), Some(Digit::D4));
//! assert_eq!(grid[Position::new(0, 0)], Some(Digit::D4));
//! assert_eq!(roman::to_roman(Digit::D4), "IV");
//! ```

pub mod digit;
pub mod grid;
pub mod position;
pub mod roman;

pub use self::{digit::Digit, grid::DigitGrid, position::Position};
