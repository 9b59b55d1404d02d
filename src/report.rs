//! The benchmark's stdout format.
//!
//! Exactly 17 lines: the elapsed time with an `ms` suffix, then the sixteen
//! final values of row 0 in column order.

use std::fmt;
use std::io::{self, Write};

use crate::error::ReportParseError;
use crate::grid::{GRID_DIM, Row};

/// Unit suffix on the elapsed-time line.
pub const ELAPSED_UNIT: &str = "ms";

/// Result of one timed run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BenchReport {
    /// Wall-clock time across the accumulation loop.
    pub elapsed_ms: f64,
    /// Final contents of row 0.
    pub row: Row,
}

impl BenchReport {
    /// Lines in the rendered report.
    pub const LINE_COUNT: usize = 1 + GRID_DIM;

    /// Write the report, one item per line.
    pub fn write_to<W: Write>(&self, mut out: W) -> io::Result<()> {
        write!(out, "{self}")
    }

    /// Parse text produced by [`BenchReport::write_to`].
    pub fn parse(text: &str) -> Result<Self, ReportParseError> {
        let lines: Vec<&str> = text.lines().collect();
        if lines.len() != Self::LINE_COUNT {
            return Err(ReportParseError::LineCount {
                expected: Self::LINE_COUNT,
                found: lines.len(),
            });
        }

        let head = lines[0];
        let number = head
            .strip_suffix(ELAPSED_UNIT)
            .ok_or_else(|| ReportParseError::MissingUnit(head.to_string()))?;
        let elapsed_ms = number
            .parse::<f64>()
            .ok()
            .filter(|ms| ms.is_finite() && *ms >= 0.0)
            .ok_or_else(|| ReportParseError::InvalidElapsed(head.to_string()))?;

        let mut row = [0; GRID_DIM];
        for (idx, (slot, line)) in row.iter_mut().zip(&lines[1..]).enumerate() {
            *slot = line.parse().map_err(|_| ReportParseError::InvalidValue {
                line: idx + 2,
                value: line.to_string(),
            })?;
        }

        Ok(Self { elapsed_ms, row })
    }
}

impl fmt::Display for BenchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}{ELAPSED_UNIT}", self.elapsed_ms)?;
        for value in self.row {
            writeln!(f, "{value}")?;
        }
        Ok(())
    }
}
