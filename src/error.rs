use std::io;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("i/o failure: {0}")]
    Io(#[from] io::Error),
    #[error("matrix has no rows")]
    EmptyMatrix,
    #[error("row {row} has {found} elements, expected {expected}")]
    RaggedRow { row: usize, expected: usize, found: usize },
    #[error("rhombus needs a square matrix, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },
    #[error("matrix dimensions must be positive, got {rows}x{cols}")]
    InvalidDimension { rows: usize, cols: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
