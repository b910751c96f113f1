//! The bundled sample puzzle.

use aenigma_core::DigitGrid;

const SAMPLE_PUZZLE: &str = "\
53..7....\
6..195...\
.98....6.\
8...6...3\
4..8.3..1\
7...2...6\
.6....28.\
...419..5\
....8..79";

const SAMPLE_SOLUTION: &str = "\
534678912\
672195348\
198342567\
859761423\
426853791\
713924856\
961537284\
287419635\
345286179";

/// Returns the bundled benchmark puzzle and its unique solution.
///
/// This is the widely used reference grid (row 0 of the puzzle is
/// `5 3 . . 7 . . . .`), giving tests and examples a stable board to work
/// with.
#[must_use]
#[expect(clippy::missing_panics_doc)]
pub fn sample_puzzle() -> (DigitGrid, DigitGrid) {
    let puzzle = SAMPLE_PUZZLE.parse().expect("bundled puzzle grid is valid");
    let solution = SAMPLE_SOLUTION
        .parse()
        .expect("bundled solution grid is valid");
    (puzzle, solution)
}

#[cfg(test)]
mod tests {
    use aenigma_core::Position;

    use super::*;

    #[test]
    fn test_sample_pair_is_consistent() {
        let (puzzle, solution) = sample_puzzle();
        assert!(solution.is_full());
        // Every clue agrees with the solution.
        for pos in Position::ALL {
            if let Some(digit) = puzzle[pos] {
                assert_eq!(solution[pos], Some(digit), "clue mismatch at {pos}");
            }
        }
        // Each digit appears exactly once per row, column, and box.
        for pos in Position::ALL {
            for peer in pos.house_peers() {
                assert_ne!(solution[pos], solution[peer], "{pos} duplicates {peer}");
            }
        }
    }
}
