//! The live game board: true mine layout, per-cell revealed/flagged state,
//! and the projection into the `-1..=8` grid the solver consumes.
//!
//! Board generation, flood reveal, and win/loss bookkeeping are the
//! "external collaborator" the specification deliberately keeps out of the
//! solver's scope; this module exists only so the player harness has
//! something real to drive.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::difficulty::Difficulty;
use crate::geometry::NeighborTable;
use crate::grid::Grid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Hidden,
    Flagged,
    Revealed(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Playing,
    Win,
    Lose,
}

pub struct Board {
    pub difficulty: Difficulty,
    width: usize,
    height: usize,
    mines: usize,
    neighbors: NeighborTable,
    mine_at: Grid<bool>,
    revealed: Grid<bool>,
    flagged: Grid<bool>,
    mines_placed: bool,
    status: Status,
    revealed_count: usize,
}

impl Board {
    pub fn new(width: usize, height: usize, mines: usize) -> Self {
        Self {
            difficulty: Difficulty::Easy,
            width,
            height,
            mines,
            neighbors: NeighborTable::build(height, width),
            mine_at: Grid::filled(height, width, false),
            revealed: Grid::filled(height, width, false),
            flagged: Grid::filled(height, width, false),
            mines_placed: false,
            status: Status::Playing,
            revealed_count: 0,
        }
    }

    pub fn with_difficulty(difficulty: Difficulty) -> Self {
        let (w, h, b) = difficulty.parameters();
        let mut board = Self::new(w, h, b);
        board.difficulty = difficulty;
        board
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn mines(&self) -> usize {
        self.mines
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn flags(&self) -> usize {
        self.flagged.iter().filter(|&&f| f).count()
    }

    pub fn cell_state(&self, row: usize, col: usize) -> CellState {
        if self.flagged[(row, col)] {
            CellState::Flagged
        } else if self.revealed[(row, col)] {
            CellState::Revealed(self.clue(row, col))
        } else {
            CellState::Hidden
        }
    }

    fn clue(&self, row: usize, col: usize) -> u8 {
        self.neighbors.of(row, col).iter().filter(|&&p| self.mine_at[p]).count() as u8
    }

    /// Project the current revealed state into the `-1..=8` grid the solver
    /// expects. Unrevealed (and flagged) cells are `-1`.
    pub fn solver_view(&self) -> Vec<Vec<i8>> {
        (0..self.height)
            .map(|row| {
                (0..self.width)
                    .map(|col| {
                        if self.revealed[(row, col)] {
                            self.clue(row, col) as i8
                        } else {
                            -1
                        }
                    })
                    .collect()
            })
            .collect()
    }

    /// Place mines avoiding `(row, col)` and its neighbors (first-click
    /// safety), mirroring the original `MineSweeper::_fill_bombs` behavior.
    fn place_mines(&mut self, row: usize, col: usize, rng: &mut impl Rng) {
        let excluded: std::collections::HashSet<(usize, usize)> = self
            .neighbors
            .of(row, col)
            .iter()
            .copied()
            .chain(std::iter::once((row, col)))
            .collect();

        let mut candidates: Vec<(usize, usize)> =
            self.mine_at.iter_coords().filter(|p| !excluded.contains(p)).collect();
        candidates.shuffle(rng);
        for &pos in candidates.iter().take(self.mines) {
            self.mine_at[pos] = true;
        }
        self.mines_placed = true;
    }

    /// Reveal `(row, col)`, flood-filling through zero-clue cells. Returns
    /// `true` if the opened cell was a mine.
    pub fn open(&mut self, row: usize, col: usize, rng: &mut impl Rng) -> bool {
        if self.status != Status::Playing || self.flagged[(row, col)] || self.revealed[(row, col)] {
            return false;
        }
        if !self.mines_placed {
            self.place_mines(row, col, rng);
        }

        if self.mine_at[(row, col)] {
            self.revealed[(row, col)] = true;
            self.status = Status::Lose;
            return true;
        }

        let mut queue = std::collections::VecDeque::new();
        queue.push_back((row, col));
        while let Some((r, c)) = queue.pop_front() {
            if self.revealed[(r, c)] {
                continue;
            }
            self.revealed[(r, c)] = true;
            self.flagged[(r, c)] = false;
            self.revealed_count += 1;
            if self.clue(r, c) == 0 {
                for &(nr, nc) in self.neighbors.of(r, c) {
                    if !self.revealed[(nr, nc)] && !self.mine_at[(nr, nc)] {
                        queue.push_back((nr, nc));
                    }
                }
            }
        }

        if self.revealed_count == self.width * self.height - self.mines {
            self.status = Status::Win;
        }
        false
    }

    pub fn toggle_flag(&mut self, row: usize, col: usize) {
        if self.revealed[(row, col)] || self.status != Status::Playing {
            return;
        }
        self.flagged[(row, col)] = !self.flagged[(row, col)];
    }

    pub fn set_flag(&mut self, row: usize, col: usize, flagged: bool) {
        if self.revealed[(row, col)] {
            return;
        }
        self.flagged[(row, col)] = flagged;
    }

    pub fn is_revealed(&self, row: usize, col: usize) -> bool {
        self.revealed[(row, col)]
    }

    pub fn is_flagged(&self, row: usize, col: usize) -> bool {
        self.flagged[(row, col)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn first_click_never_hits_a_mine_or_its_neighbors() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let mut board = Board::new(9, 9, 10);
            board.open(4, 4, &mut rng);
            assert_eq!(board.status(), Status::Playing);
            assert!(board.is_revealed(4, 4));
        }
    }

    #[test]
    fn opening_all_safe_cells_wins() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut board = Board::new(2, 1, 0);
        board.open(0, 0, &mut rng);
        assert_eq!(board.status(), Status::Win);
    }

    #[test]
    fn flag_is_cleared_on_reveal() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut board = Board::new(3, 3, 0);
        board.toggle_flag(1, 1);
        assert!(board.is_flagged(1, 1));
        board.open(1, 1, &mut rng);
        assert!(!board.is_flagged(1, 1));
    }

    #[test]
    fn solver_view_reports_minus_one_for_hidden_cells() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut board = Board::new(3, 3, 1);
        board.open(0, 0, &mut rng);
        let view = board.solver_view();
        assert_eq!(view.len(), 3);
        assert!(view.iter().flatten().any(|&v| v == -1));
    }
}
