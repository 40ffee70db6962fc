use crate::error::{Error, Result};

/// Row-major integer grid decoded from one frame sequence.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Matrix {
    pub rows: usize,
    pub cols: usize,
    cells: Vec<i64>,
}

impl Matrix {
    pub fn from_rows(rows: Vec<Vec<i64>>) -> Result<Self> {
        let cols = match rows.first() {
            Some(first) if !first.is_empty() => first.len(),
            _ => return Err(Error::EmptyMatrix),
        };
        let height = rows.len();
        let mut cells = Vec::with_capacity(height * cols);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != cols {
                return Err(Error::RaggedRow { row: i,
                                              expected: cols,
                                              found: row.len() });
            }
            cells.extend(row);
        }
        Ok(Matrix { rows: height,
                    cols,
                    cells })
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Linear view indexed as `r * cols + c`.
    pub fn flattened(&self) -> &[i64] {
        &self.cells
    }
}
