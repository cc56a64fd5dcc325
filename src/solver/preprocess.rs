//! Constraint preprocessor: two single passes over the revealed clues that
//! mark cells provably mined or provably safe by local clue satisfaction.

use super::Classification;
use crate::geometry::NeighborTable;
use crate::grid::Grid;

/// Run both passes and return the resulting classification grid.
///
/// Revealed cells are classified `Safe` up front (pass 2 restates this, but
/// seeding it here means the rest of the solver can treat "revealed" and
/// "known safe" as the same fact without re-deriving it).
pub fn classify(cells: &Grid<i8>, neighbors: &NeighborTable) -> Grid<Classification> {
    let height = cells.height();
    let width = cells.width();
    let mut classification = Grid::filled(height, width, Classification::Undetermined);

    for (row, col) in cells.iter_coords() {
        if cells[(row, col)] >= 0 {
            classification[(row, col)] = Classification::Safe;
        }
    }

    // Pass 1: forced mines.
    for (row, col) in cells.iter_coords() {
        let clue = cells[(row, col)];
        if clue < 1 {
            continue;
        }
        let clue = clue as usize;
        let closed: Vec<(usize, usize)> = neighbors
            .of(row, col)
            .iter()
            .copied()
            .filter(|&(nr, nc)| cells[(nr, nc)] == -1)
            .collect();
        if closed.len() == clue {
            for pos in closed {
                classification[pos] = Classification::Mine;
            }
        }
    }

    // Pass 2: forced safes, using the mines pass 1 found.
    for (row, col) in cells.iter_coords() {
        let clue = cells[(row, col)];
        if clue < 0 {
            continue;
        }
        let clue = clue as usize;
        let mined = neighbors
            .of(row, col)
            .iter()
            .filter(|&&pos| classification[pos] == Classification::Mine)
            .count();
        if mined == clue {
            for &pos in neighbors.of(row, col) {
                if classification[pos] != Classification::Mine {
                    classification[pos] = Classification::Safe;
                }
            }
        }
    }

    classification
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forces_mine_when_closed_count_matches_clue() {
        let cells = Grid::from_rows(vec![vec![1, -1]]);
        let neighbors = NeighborTable::build(1, 2);
        let classification = classify(&cells, &neighbors);
        assert_eq!(classification[(0, 1)], Classification::Mine);
    }

    #[test]
    fn forces_safe_once_clue_is_satisfied() {
        // 0-clue at (0,1) forces all its neighbors safe.
        let cells = Grid::from_rows(vec![vec![-1, 0, -1]]);
        let neighbors = NeighborTable::build(1, 3);
        let classification = classify(&cells, &neighbors);
        assert_eq!(classification[(0, 0)], Classification::Safe);
        assert_eq!(classification[(0, 2)], Classification::Safe);
    }

    #[test]
    fn undetermined_when_clue_is_ambiguous() {
        let cells = Grid::from_rows(vec![vec![-1, -1], vec![-1, 1]]);
        let neighbors = NeighborTable::build(2, 2);
        let classification = classify(&cells, &neighbors);
        assert_eq!(classification[(0, 0)], Classification::Undetermined);
        assert_eq!(classification[(0, 1)], Classification::Undetermined);
        assert_eq!(classification[(1, 0)], Classification::Undetermined);
    }
}
