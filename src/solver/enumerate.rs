//! Backtracking enumerator: depth-first search over frontier assignments
//! with consistency pruning, accumulating binomial-weighted leaf counts.

use log::trace;

use super::Classification;
use crate::combinatorics::BinomialTable;
use crate::geometry::NeighborTable;
use crate::grid::Grid;

/// Accumulated weighted counts, one slot per frontier cell plus a shared
/// slot (the last one) for the interior.
pub struct Accumulator {
    pub per_cell: Vec<f64>,
    pub total: f64,
}

struct Search<'a> {
    cells: &'a Grid<i8>,
    neighbors: &'a NeighborTable,
    frontier: &'a [(usize, usize)],
    total_mines: usize,
    interior_count: usize,
    binomial: &'a BinomialTable,
    classification: Grid<Classification>,
    accumulator: Accumulator,
    leaves_visited: u64,
}

impl Search<'_> {
    /// `mb`/`sb` bounds check for one revealed neighbor of the cell just
    /// assigned at `(row, col)`.
    fn neighbor_is_consistent(&self, row: usize, col: usize) -> bool {
        for &(nr, nc) in self.neighbors.of(row, col) {
            let clue = self.cells[(nr, nc)];
            if clue < 0 {
                continue;
            }
            let clue = clue as usize;
            let nb = self.neighbors.of(nr, nc);
            let mines = nb.iter().filter(|&&p| self.classification[p] == Classification::Mine).count();
            let safes = nb
                .iter()
                .filter(|&&p| self.classification[p] == Classification::Safe || self.cells[p] != -1)
                .count();
            if mines > clue || nb.len() - safes < clue {
                return false;
            }
        }
        true
    }

    fn is_consistent(&self, row: usize, col: usize, tentative_mines: usize, remaining_after: usize) -> bool {
        if tentative_mines > self.total_mines {
            return false;
        }
        if self.interior_count + remaining_after < self.total_mines - tentative_mines {
            return false;
        }
        self.neighbor_is_consistent(row, col)
    }

    fn accumulate_leaf(&mut self, mines_placed: usize) {
        self.leaves_visited += 1;
        let remaining = self.total_mines as isize - mines_placed as isize;
        let weight = self.binomial.get(self.interior_count, remaining);
        if weight == 0.0 {
            return;
        }
        self.accumulator.total += weight;
        for (i, &pos) in self.frontier.iter().enumerate() {
            if self.classification[pos] == Classification::Mine {
                self.accumulator.per_cell[i] += weight;
            }
        }
        if self.interior_count >= 1 && remaining >= 1 {
            let interior_slot = self.frontier.len();
            self.accumulator.per_cell[interior_slot] +=
                self.binomial.get(self.interior_count - 1, remaining - 1);
        }
    }

    fn recurse(&mut self, index: usize, mines_placed: usize) {
        if index == self.frontier.len() {
            self.accumulate_leaf(mines_placed);
            return;
        }
        let (row, col) = self.frontier[index];
        let remaining_after = self.frontier.len() - index - 1;

        self.classification[(row, col)] = Classification::Mine;
        if self.is_consistent(row, col, mines_placed + 1, remaining_after) {
            self.recurse(index + 1, mines_placed + 1);
        }

        self.classification[(row, col)] = Classification::Safe;
        if self.is_consistent(row, col, mines_placed, remaining_after) {
            self.recurse(index + 1, mines_placed);
        }

        self.classification[(row, col)] = Classification::Undetermined;
    }
}

/// Run the backtracking search and return the weighted accumulator.
pub fn run(
    cells: &Grid<i8>,
    neighbors: &NeighborTable,
    classification: &Grid<Classification>,
    frontier: &[(usize, usize)],
    interior_count: usize,
    total_mines: usize,
    binomial: &BinomialTable,
) -> Accumulator {
    let initial_mines = classification.iter().filter(|&&c| c == Classification::Mine).count();

    let mut search = Search {
        cells,
        neighbors,
        frontier,
        total_mines,
        interior_count,
        binomial,
        classification: classification.clone(),
        accumulator: Accumulator { per_cell: vec![0.0; frontier.len() + 1], total: 0.0 },
        leaves_visited: 0,
    };

    search.recurse(0, initial_mines);
    trace!(
        "enumerator visited {} leaves over {} frontier cells, {} interior cells",
        search.leaves_visited,
        frontier.len(),
        interior_count
    );
    search.accumulator
}
