use crate::core::Matrix;
use crate::error::{Error, Result};
use crate::signal::StopSignal;
use crate::source::LineSource;

pub const ROW_SEPARATOR: char = ';';
pub const VALUE_SEPARATOR: char = ',';

/// Why a row record was dropped. Never surfaces past the decoder.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum RowRejection {
    #[error("row rejected: wrong arity (expected {expected}, found {found})")]
    WrongArity { expected: usize, found: usize },
    #[error("row rejected: parse failure on {token:?}")]
    ParseFailure { token: String },
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct DecodeStats {
    pub rows_accepted: u64,
    pub rejected_arity: u64,
    pub rejected_parse: u64,
    pub surplus_discarded: u64,
    pub blank_lines: u64,
}

impl DecodeStats {
    pub fn rejected(&self) -> u64 {
        self.rejected_arity + self.rejected_parse
    }

    fn record(&mut self, rejection: &RowRejection) {
        match rejection {
            RowRejection::WrongArity { .. } => self.rejected_arity += 1,
            RowRejection::ParseFailure { .. } => self.rejected_parse += 1,
        }
    }
}

/// Parses one `,`-separated row record into exactly `cols` integers.
pub fn parse_row(record: &str, cols: usize) -> std::result::Result<Vec<i64>, RowRejection> {
    let mut row = Vec::with_capacity(cols);
    for token in record.split(VALUE_SEPARATOR) {
        let token = token.trim();
        match token.parse::<i64>() {
            Ok(v) => row.push(v),
            Err(_) => return Err(RowRejection::ParseFailure { token: token.to_string() }),
        }
    }
    if row.len() != cols {
        return Err(RowRejection::WrongArity { expected: cols,
                                              found: row.len() });
    }
    Ok(row)
}

/// Rebuilds `rows x cols` matrices from `;`/`,` delimited text frames.
#[derive(Debug)]
pub struct FrameDecoder {
    rows: usize,
    cols: usize,
    stats: DecodeStats,
}

impl FrameDecoder {
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(Error::InvalidDimension { rows, cols });
        }
        Ok(FrameDecoder { rows,
                          cols,
                          stats: DecodeStats::default() })
    }

    pub fn square(n: usize) -> Result<Self> {
        Self::new(n, n)
    }

    pub fn stats(&self) -> DecodeStats {
        self.stats
    }

    /// Feeds one frame into `acc`, stopping as soon as `acc` holds `rows` rows.
    ///
    /// Records left on the line after that point are dropped, not kept for
    /// the next matrix.
    pub fn decode_frame(&mut self, line: &str, acc: &mut Vec<Vec<i64>>) {
        let line = line.trim();
        if line.is_empty() {
            self.stats.blank_lines += 1;
            return;
        }
        let mut records = line.split(ROW_SEPARATOR).filter(|r| !r.is_empty());
        for record in records.by_ref() {
            match parse_row(record, self.cols) {
                Ok(row) => {
                    self.stats.rows_accepted += 1;
                    acc.push(row);
                },
                Err(rejection) => {
                    tracing::debug!(record, %rejection, "dropping row record");
                    self.stats.record(&rejection);
                },
            }
            if acc.len() >= self.rows {
                break;
            }
        }
        let surplus = records.count() as u64;
        if surplus > 0 {
            tracing::debug!(surplus, "matrix complete, discarding rest of frame");
            self.stats.surplus_discarded += surplus;
        }
    }

    /// Blocks on `source` until a full matrix is collected.
    ///
    /// Returns `Ok(None)` without a partial matrix when the source ends or
    /// `stop` fires first.
    pub fn read_matrix<S: LineSource>(&mut self, source: &mut S, stop: &StopSignal) -> Result<Option<Matrix>> {
        let mut acc = Vec::with_capacity(self.rows);
        while acc.len() < self.rows {
            match source.next_line(stop)? {
                Some(line) => self.decode_frame(&line, &mut acc),
                None => {
                    if !acc.is_empty() {
                        tracing::debug!(collected = acc.len(), wanted = self.rows, "abandoning partial matrix");
                    }
                    return Ok(None);
                },
            }
        }
        Matrix::from_rows(acc).map(Some)
    }
}
