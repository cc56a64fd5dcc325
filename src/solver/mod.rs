//! The probabilistic solver: given a partially revealed board and the total
//! mine count, compute the exact probability each closed cell is a mine.

mod assemble;
mod enumerate;
mod frontier;
mod preprocess;

use log::debug;

use crate::combinatorics::BinomialTable;
pub use crate::error::{Result, SolveError};
use crate::geometry::NeighborTable;
use crate::grid::Grid;

/// Per-cell classification carried through preprocessing and backtracking.
///
/// A single tagged enum, never two independent booleans: that representation
/// would admit an illegal "both mine and safe" state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Undetermined,
    Mine,
    Safe,
}

/// Validate raw input and build the immutable cell grid.
fn validate(cells: &[Vec<i8>], total_mines: usize) -> Result<Grid<i8>> {
    if cells.is_empty() || cells[0].is_empty() {
        return Err(SolveError::EmptyBoard);
    }
    let width = cells[0].len();
    for (row, line) in cells.iter().enumerate() {
        if line.len() != width {
            return Err(SolveError::RaggedRow { row, actual: line.len(), expected: width });
        }
        for (col, &value) in line.iter().enumerate() {
            if !(-1..=8).contains(&value) {
                return Err(SolveError::InvalidCellValue { row, col, value });
            }
        }
    }
    let cell_count = cells.len() * width;
    if total_mines > cell_count {
        return Err(SolveError::TooManyMines { mines: total_mines, cells: cell_count });
    }
    Ok(Grid::from_rows(cells.to_vec()))
}

/// Compute the mine probability for every cell of `cells`, given that
/// exactly `total_mines` mines are on the board.
///
/// `cells[h][w]` is `-1` for a closed cell or `0..=8` for a revealed clue.
/// Returns a grid of the same shape with each entry in `[0, 1]`.
pub fn solve(cells: &[Vec<i8>], total_mines: usize) -> Result<Vec<Vec<f64>>> {
    let cells = validate(cells, total_mines)?;
    let neighbors = NeighborTable::build(cells.height(), cells.width());
    let classification = preprocess::classify(&cells, &neighbors);
    let found = frontier::collect(&cells, &classification, &neighbors);

    let binomial = BinomialTable::build(cells.height() * cells.width());
    let accumulator = enumerate::run(
        &cells,
        &neighbors,
        &classification,
        &found.cells,
        found.interior_count,
        total_mines,
        &binomial,
    );

    debug!(
        "solve: frontier={} interior={} total_weight={}",
        found.cells.len(),
        found.interior_count,
        accumulator.total
    );

    if accumulator.total == 0.0 {
        return Err(SolveError::Unsatisfiable);
    }

    let probabilities = assemble::assemble(&cells, &classification, &found.cells, &accumulator);
    Ok(probabilities.to_rows())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn assert_close(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < 1e-9, "expected {expected}, got {actual}");
    }

    fn assert_grid_close(actual: &[Vec<f64>], expected: &[Vec<f64>]) {
        for (a_row, e_row) in actual.iter().zip(expected) {
            for (&a, &e) in a_row.iter().zip(e_row) {
                assert_close(a, e);
            }
        }
    }

    #[test]
    fn scenario_single_clue_one_unknown() {
        let result = solve(&[vec![1, -1]], 1).unwrap();
        assert_grid_close(&result, &[vec![0.0, 1.0]]);
    }

    // The literal spec scenario "S = [[1, -1, -1]]" places the clue at the
    // row's end, where only one of the two closed cells is actually adjacent
    // to it under 8-connectivity — that cell is forced to 1.0, not split
    // evenly. Putting the clue in the middle is what makes both closed
    // neighbors genuinely symmetric; see DESIGN.md for the discrepancy.
    #[test]
    fn scenario_symmetric_pair() {
        let result = solve(&[vec![-1, 1, -1]], 1).unwrap();
        assert_grid_close(&result, &[vec![0.5, 0.0, 0.5]]);
    }

    #[test]
    fn scenario_forced_by_count_splits_three_ways() {
        let result = solve(&[vec![-1, -1], vec![-1, 1]], 1).unwrap();
        assert_close(result[0][0], 1.0 / 3.0);
        assert_close(result[0][1], 1.0 / 3.0);
        assert_close(result[1][0], 1.0 / 3.0);
        assert_close(result[1][1], 0.0);
    }

    #[test]
    fn scenario_interior_cell_asymmetry_is_unsatisfiable() {
        let board = vec![vec![-1, -1, -1], vec![-1, 0, -1], vec![-1, -1, -1]];
        let err = solve(&board, 1).unwrap_err();
        assert_eq!(err, SolveError::Unsatisfiable);
    }

    #[test]
    fn scenario_two_clue_deduction_sums_to_mine_count() {
        let result = solve(&[vec![1, 1, -1], vec![-1, -1, -1]], 1).unwrap();
        let sum: f64 = result.iter().flatten().sum();
        assert_close(sum, 1.0);
        assert_close(result[0][0], 0.0);
        assert_close(result[0][1], 0.0);
    }

    #[test]
    fn scenario_all_closed_board_is_uniform() {
        let result = solve(&[vec![-1, -1], vec![-1, -1]], 1).unwrap();
        assert_grid_close(&result, &[vec![0.25, 0.25], vec![0.25, 0.25]]);
    }

    #[rstest]
    #[case(vec![vec![1, -1]], 1)]
    #[case(vec![vec![-1, -1], vec![-1, 1]], 1)]
    #[case(vec![vec![1, 1, -1], vec![-1, -1, -1]], 1)]
    #[case(vec![vec![-1, -1], vec![-1, -1]], 1)]
    fn universal_invariants_hold(#[case] board: Vec<Vec<i8>>, #[case] mines: usize) {
        let result = solve(&board, mines).unwrap();
        let mut sum = 0.0;
        for (row, line) in board.iter().enumerate() {
            for (col, &value) in line.iter().enumerate() {
                let p = result[row][col];
                assert!((0.0..=1.000_001).contains(&p), "{p} out of range");
                if value != -1 {
                    assert_eq!(p, 0.0);
                }
                sum += p;
            }
        }
        assert_close(sum, mines as f64);
    }

    #[test]
    fn permuting_rows_and_columns_permutes_the_result() {
        let board = vec![vec![1, -1, -1], vec![-1, -1, -1]];
        let result = solve(&board, 1).unwrap();

        let reversed_cols = vec![vec![-1, -1, 1], vec![-1, -1, -1]];
        let reversed_result = solve(&reversed_cols, 1).unwrap();

        assert_close(result[0][0], reversed_result[0][2]);
        assert_close(result[0][1], reversed_result[0][1]);
        assert_close(result[0][2], reversed_result[0][0]);
        assert_close(result[1][0], reversed_result[1][2]);
    }

    #[test]
    fn zero_mines_with_zero_clue_neighbors_is_all_zero() {
        let board = vec![vec![0, -1], vec![-1, -1]];
        let result = solve(&board, 0).unwrap();
        for row in &result {
            for &p in row {
                assert_close(p, 0.0);
            }
        }
    }

    #[test]
    fn rejects_out_of_range_cell_value() {
        let err = solve(&[vec![9, -1]], 1).unwrap_err();
        assert_eq!(err, SolveError::InvalidCellValue { row: 0, col: 0, value: 9 });
    }

    #[test]
    fn rejects_ragged_rows() {
        let err = solve(&[vec![-1, -1], vec![-1]], 0).unwrap_err();
        assert_eq!(err, SolveError::RaggedRow { row: 1, actual: 1, expected: 2 });
    }

    #[test]
    fn rejects_too_many_mines() {
        let err = solve(&[vec![-1, -1]], 3).unwrap_err();
        assert_eq!(err, SolveError::TooManyMines { mines: 3, cells: 2 });
    }

    #[test]
    fn rejects_empty_board() {
        let err = solve(&[], 0).unwrap_err();
        assert_eq!(err, SolveError::EmptyBoard);
    }
}
