use thiserror::Error;

/// Errors the solver can report. Board generation, rendering, and terminal
/// I/O failures are handled at the application layer with `anyhow`; this
/// type only covers the solver's own contract.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SolveError {
    #[error("board has no rows")]
    EmptyBoard,

    #[error("row {row} has width {actual}, expected {expected}")]
    RaggedRow { row: usize, actual: usize, expected: usize },

    #[error("cell ({row}, {col}) has value {value}, expected -1..=8")]
    InvalidCellValue { row: usize, col: usize, value: i8 },

    #[error("mine count {mines} exceeds cell count {cells}")]
    TooManyMines { mines: usize, cells: usize },

    #[error("board has no consistent mine assignment for the given clues and mine count")]
    Unsatisfiable,
}

pub type Result<T> = std::result::Result<T, SolveError>;
