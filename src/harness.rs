//! Autonomous player harness: the thin collaborator that drives the solver
//! in a loop, as described in §4.7 of the specification.
//!
//! Grounded directly in `examples/original_source/solver.cpp`'s `Game`
//! struct (`OpenSafe`, `update`, `open_by_probabilities`, `start`).

use log::info;
use rand::Rng;

use crate::board::{Board, Status};
use crate::geometry::NeighborTable;
use crate::solver;

const CERTAIN_MINE_THRESHOLD: f64 = 1.0 - 1e-6;

/// Open every closed, unflagged neighbor of a clue whose flagged-neighbor
/// count already equals the clue. Returns `true` if anything was opened.
fn open_safe_neighbors(board: &mut Board, neighbors: &NeighborTable, rng: &mut impl Rng) -> bool {
    let mut opened = false;
    for row in 0..board.height() {
        for col in 0..board.width() {
            let clue = match board.cell_state(row, col) {
                crate::board::CellState::Revealed(n) => n,
                _ => continue,
            };
            let flagged = neighbors.of(row, col).iter().filter(|&&p| board.is_flagged(p.0, p.1)).count();
            if flagged as u8 != clue {
                continue;
            }
            for &(nr, nc) in neighbors.of(row, col) {
                if !board.is_flagged(nr, nc) && !board.is_revealed(nr, nc) {
                    board.open(nr, nc, rng);
                    opened = true;
                }
            }
        }
    }
    opened
}

/// Flag every closed neighbor of a clue whose closed-neighbor count equals
/// the clue.
fn update_flags(board: &mut Board, neighbors: &NeighborTable) {
    for row in 0..board.height() {
        for col in 0..board.width() {
            let clue = match board.cell_state(row, col) {
                crate::board::CellState::Revealed(n) => n,
                _ => continue,
            };
            let closed: Vec<(usize, usize)> =
                neighbors.of(row, col).iter().copied().filter(|&(r, c)| !board.is_revealed(r, c)).collect();
            if closed.len() as u8 == clue {
                for (r, c) in closed {
                    board.set_flag(r, c, true);
                }
            }
        }
    }
}

/// Call the solver and open either every certain-safe cell found, or (if
/// none) the single lowest-probability closed cell.
fn open_by_probability(board: &mut Board, rng: &mut impl Rng) -> solver::Result<()> {
    let probabilities = solver::solve(&board.solver_view(), board.mines())?;

    let mut certain_safe = Vec::new();
    let mut best: Option<((usize, usize), f64)> = None;
    for row in 0..board.height() {
        for col in 0..board.width() {
            if board.is_revealed(row, col) || board.is_flagged(row, col) {
                continue;
            }
            let p = probabilities[row][col];
            if p <= 1e-9 {
                certain_safe.push((row, col));
            }
            if p < CERTAIN_MINE_THRESHOLD && best.is_none_or(|(_, best_p)| p < best_p) {
                best = Some(((row, col), p));
            }
        }
    }

    if certain_safe.is_empty() {
        if let Some(((row, col), p)) = best {
            info!("opening lowest-probability cell ({row}, {col}) p={p:.4}");
            board.open(row, col, rng);
        }
    } else {
        for (row, col) in certain_safe {
            board.open(row, col, rng);
        }
    }
    Ok(())
}

/// Run the harness to completion: open the center cell, then alternate
/// forced-safe propagation and solver-driven opens until the game ends.
pub fn autoplay(board: &mut Board, rng: &mut impl Rng) -> solver::Result<Status> {
    let neighbors = NeighborTable::build(board.height(), board.width());
    board.open(board.height() / 2, board.width() / 2, rng);

    while board.status() == Status::Playing {
        if !open_safe_neighbors(board, &neighbors, rng) {
            open_by_probability(board, rng)?;
        }
        update_flags(board, &neighbors);
    }

    Ok(board.status())
}
