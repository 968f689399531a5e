//! Errors raised while building tables.
//!
//! The render path never fails: out-of-range parameters are clamped. Only
//! malformed table data handed in at construction time is rejected.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableError {
    /// A wave table was built from a slice with the wrong number of samples.
    Length { expected: usize, found: usize },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::Length { expected, found } => {
                write!(f, "wave table needs {expected} samples, got {found}")
            }
        }
    }
}

impl core::error::Error for TableError {}
