//! Library surface for the Minesweeper probability solver: the constraint
//! engine and its supporting grid/geometry/combinatorics types, plus the
//! board model and autonomous player harness built on top of it.
//!
//! The terminal application (`main.rs`, `app.rs`, `ui.rs`, `input.rs`) is
//! binary-only and not re-exported here.

pub mod board;
pub mod combinatorics;
pub mod difficulty;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod harness;
pub mod solver;

pub use error::{Result, SolveError};
pub use solver::solve;
