//! Diamond layout of a square matrix.
//!
//! Element `(r, c)` lands on output line `r + c`. The upper half walks the
//! anti-diagonals that start in column 0, the lower half those that start
//! on the last row, so a `n x n` matrix yields `2n - 1` lines.

use crate::core::Matrix;
use crate::error::{Error, Result};
use std::fmt;
use unicode_width::UnicodeWidthStr;

pub const INDENT_UNIT: &str = "  ";
pub const FIELD_SEPARATOR: &str = "   ";

/// One printed line: an indentation depth and the values on its diagonal.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Band {
    pub indent: usize,
    pub values: Vec<i64>,
}

impl Band {
    pub fn to_line(&self) -> String {
        let values: Vec<String> = self.values.iter().map(|v| v.to_string()).collect();
        format!("{}{}", INDENT_UNIT.repeat(self.indent), values.join(FIELD_SEPARATOR))
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Rhombus<'a> {
    n: usize,
    cells: &'a [i64],
}

impl<'a> Rhombus<'a> {
    pub fn new(matrix: &'a Matrix) -> Result<Self> {
        if !matrix.is_square() {
            return Err(Error::NotSquare { rows: matrix.rows,
                                          cols: matrix.cols });
        }
        Ok(Rhombus { n: matrix.rows,
                     cells: matrix.flattened() })
    }

    /// Values from `(i, j)` stepping up one row and right one column until
    /// the row drops below `j` or the column passes `i`.
    fn walk(&self, i: usize, j: usize) -> impl Iterator<Item = i64> + '_ {
        let n = self.n;
        let len = i.checked_sub(j).map_or(0, |d| d + 1);
        (0..len).map(move |k| self.cells[(i - k) * n + j + k])
    }

    fn advance(&self, (i, j): (usize, usize)) -> (usize, usize) {
        if i >= self.n - 1 {
            (i, j + 1)
        } else {
            (i + 1, j)
        }
    }

    pub fn bands(&self) -> Vec<Band> {
        let n = self.n;
        let mut bands = Vec::with_capacity(2 * n - 1);

        let (mut i, mut j) = (0, 0);
        while i + j <= n - 1 {
            bands.push(Band { indent: n - i - 1,
                              values: self.walk(i, j).collect() });
            (i, j) = self.advance((i, j));
        }

        let (mut i, mut j) = (n - 1, 1);
        while i + j <= 2 * n - 2 {
            bands.push(Band { indent: j,
                              values: self.walk(i, j).collect() });
            (i, j) = self.advance((i, j));
        }
        bands
    }

    pub fn lines(&self) -> Vec<String> {
        self.bands().iter().map(Band::to_line).collect()
    }

    /// Display width of every line, top to bottom.
    pub fn silhouette(&self) -> Vec<usize> {
        self.lines().iter().map(|l| UnicodeWidthStr::width(l.as_str())).collect()
    }
}

impl fmt::Display for Rhombus<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
