//! Parse error types
//!
//! Positions are 1-based throughout: `row`/`line` count text lines from the
//! start of the parsed input, `column` counts diagram cells (and therefore
//! matches the stack index the cell belongs to).

/// Errors raised while decoding puzzle text
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A diagram cell is neither `[X]` nor three blanks
    #[error("malformed cell {cell:?} at row {row}, column {column}")]
    MalformedCell {
        row: usize,
        column: usize,
        cell: String,
    },

    /// A move line does not follow `move <count> from <stack> to <stack>`
    #[error("malformed instruction at line {line}: {message}")]
    MalformedInstruction { line: usize, message: String },
}

impl ParseError {
    /// The 1-based text line the error points at
    pub fn line(&self) -> usize {
        match self {
            ParseError::MalformedCell { row, .. } => *row,
            ParseError::MalformedInstruction { line, .. } => *line,
        }
    }
}
