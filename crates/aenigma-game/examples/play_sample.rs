//! Example walking the bundled sample board from start to completion.
//!
//! This example shows how to:
//! - Create a `Board` from the sample puzzle/solution pair
//! - Shuffle the display symbols and render the grid in Roman numerals
//! - Apply hints until the board is complete
//!
//! # Usage
//!
//! ```sh
//! cargo run --example play_sample
//! ```

use aenigma_core::{Position, roman};
use aenigma_game::{Board, sample_puzzle};

fn main() {
    env_logger::init();

    let (puzzle, solution) = sample_puzzle();
    let mut board = Board::new(&puzzle, &solution);
    board.shuffle_symbols();

    println!("Fresh board (display symbols shuffled):");
    print_board(&board);

    let mut steps = 0;
    while let Some(hint) = board.hint() {
        board.set_cell(hint.pos, hint.digit);
        steps += 1;
    }

    println!("Completed in {steps} hint steps:");
    print_board(&board);
    assert!(board.is_complete());
}

fn print_board(board: &Board) {
    for y in 0..9 {
        let row = (0..9)
            .map(|x| {
                board
                    .display_value(Position::new(x, y))
                    .map_or_else(|| ".".to_string(), |digit| roman::to_roman(digit).to_string())
            })
            .map(|text| format!("{text:>5}"))
            .collect::<String>();
        println!("{row}");
    }
    println!();
}
