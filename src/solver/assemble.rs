//! Normalizes enumerator output into the final per-cell probability grid.

use super::Classification;
use super::enumerate::Accumulator;
use crate::grid::Grid;

pub fn assemble(
    cells: &Grid<i8>,
    classification: &Grid<Classification>,
    frontier: &[(usize, usize)],
    accumulator: &Accumulator,
) -> Grid<f64> {
    let height = cells.height();
    let width = cells.width();
    let mut probabilities = Grid::filled(height, width, 0.0f64);

    let frontier_index: std::collections::HashMap<(usize, usize), usize> =
        frontier.iter().enumerate().map(|(i, &pos)| (pos, i)).collect();
    let interior_value = accumulator.per_cell[frontier.len()] / accumulator.total;

    for (row, col) in cells.iter_coords() {
        let pos = (row, col);
        let value = if cells[pos] != -1 || classification[pos] == Classification::Safe {
            0.0
        } else if classification[pos] == Classification::Mine {
            1.0
        } else if let Some(&i) = frontier_index.get(&pos) {
            accumulator.per_cell[i] / accumulator.total
        } else {
            interior_value
        };
        debug_assert!((-1.1e-6..=1.000_001_1).contains(&value), "probability {value} out of range at {pos:?}");
        probabilities[pos] = value;
    }

    probabilities
}
