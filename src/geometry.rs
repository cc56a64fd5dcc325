//! 8-connected neighbor lists for a rectangular grid.
//!
//! Built once per board shape and shared by reference; every solver
//! component reads the same table.

use crate::grid::Grid;

/// Neighbor coordinates for every cell, in deterministic `dy`-then-`dx`
/// ascending order, clipped to the grid and excluding the origin cell.
#[derive(Debug, Clone)]
pub struct NeighborTable {
    height: usize,
    width: usize,
    neighbors: Grid<Vec<(usize, usize)>>,
}

impl NeighborTable {
    pub fn build(height: usize, width: usize) -> Self {
        let mut neighbors = Grid::filled(height, width, Vec::new());
        for row in 0..height {
            for col in 0..width {
                let mut list = Vec::with_capacity(8);
                for dy in -1isize..=1 {
                    for dx in -1isize..=1 {
                        if dy == 0 && dx == 0 {
                            continue;
                        }
                        let nr = row as isize + dy;
                        let nc = col as isize + dx;
                        if nr >= 0 && nc >= 0 && (nr as usize) < height && (nc as usize) < width {
                            list.push((nr as usize, nc as usize));
                        }
                    }
                }
                neighbors[(row, col)] = list;
            }
        }
        Self { height, width, neighbors }
    }

    pub fn of(&self, row: usize, col: usize) -> &[(usize, usize)] {
        &self.neighbors[(row, col)]
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }
}

#[cfg(test)]
mod tests {
    use super::NeighborTable;

    #[test]
    fn corner_cell_has_three_neighbors() {
        let table = NeighborTable::build(3, 3);
        assert_eq!(table.of(0, 0).len(), 3);
        assert_eq!(table.of(0, 0), &[(0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn edge_cell_has_five_neighbors() {
        let table = NeighborTable::build(3, 3);
        assert_eq!(table.of(0, 1).len(), 5);
    }

    #[test]
    fn interior_cell_has_eight_neighbors() {
        let table = NeighborTable::build(3, 3);
        assert_eq!(table.of(1, 1).len(), 8);
    }

    #[test]
    fn single_cell_has_no_neighbors() {
        let table = NeighborTable::build(1, 1);
        assert!(table.of(0, 0).is_empty());
    }
}
