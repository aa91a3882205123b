//! Columnar diagram parser
//!
//! Decodes fixed-column ASCII art into a [`Yard`]. Each row is sliced into
//! 4-character groups (a 3-character cell plus one separator) and every cell
//! is classified as a [`Cell`]. Parsing runs in two passes: the first decodes
//! all rows and fixes the column count from the widest one, the second
//! distributes crates into stacks that were allocated up front. A column that
//! is blank in every row still becomes an (empty) stack. The separator after
//! each cell must be a single space.

use super::errors::ParseError;
use crate::yard::{stack::Stack, Crate, Yard};

/// Width of one cell, not counting its separator
pub const CELL_WIDTH: usize = 3;

/// Width of one cell plus the separator that follows it
const GROUP_WIDTH: usize = CELL_WIDTH + 1;

/// Contents of one diagram slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Three blanks: no crate at this row/column
    Empty,
    /// `[X]`: a crate labeled `X`
    Crate(Crate),
}

/// Classify a 3-character cell, returning `None` for anything unrecognized.
///
/// A bracketed label must be a visible glyph; `[ ]` is not a crate.
pub fn classify_cell(cell: &[char]) -> Option<Cell> {
    match cell {
        [' ', ' ', ' '] => Some(Cell::Empty),
        ['[', label, ']'] if !label.is_whitespace() && !label.is_control() => {
            Some(Cell::Crate(Crate::new(*label)))
        }
        _ => None,
    }
}

/// Whether a line is the stack-number legend (` 1   2   3 `)
pub fn is_legend_row(line: &str) -> bool {
    let mut tokens = line.split_whitespace().peekable();
    tokens.peek().is_some() && tokens.all(|t| t.chars().all(|c| c.is_ascii_digit()))
}

/// Decode one row into its cells. `row` is the 1-based line number used in
/// error reports.
fn decode_row(line: &str, row: usize) -> Result<Vec<Cell>, ParseError> {
    let chars: Vec<char> = line.chars().collect();
    let mut cells = Vec::with_capacity(chars.len().div_ceil(GROUP_WIDTH));

    for (idx, group) in chars.chunks(GROUP_WIDTH).enumerate() {
        let cell = &group[..group.len().min(CELL_WIDTH)];

        // Trailing fragment narrower than a cell
        if cell.len() < CELL_WIDTH {
            if cell.iter().all(|c| c.is_whitespace()) {
                break;
            }
            return Err(malformed(cell, row, idx + 1));
        }

        match classify_cell(cell) {
            Some(decoded) => cells.push(decoded),
            None => return Err(malformed(cell, row, idx + 1)),
        }

        // Cells are separated by exactly one space
        if group.get(CELL_WIDTH).is_some_and(|sep| *sep != ' ') {
            return Err(malformed(group, row, idx + 1));
        }
    }

    Ok(cells)
}

fn malformed(cell: &[char], row: usize, column: usize) -> ParseError {
    ParseError::MalformedCell {
        row,
        column,
        cell: cell.iter().collect(),
    }
}

/// Parse a diagram into a yard.
///
/// Rows are read top to bottom; the lowest crate in the text becomes the base
/// of its stack. Rows shorter than the widest one are blank in their missing
/// columns. Empty input yields a yard with no stacks.
pub fn parse_diagram(text: &str) -> Result<Yard, ParseError> {
    let mut rows = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        if is_legend_row(line) {
            continue;
        }
        rows.push(decode_row(line, idx + 1)?);
    }

    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    let mut columns: Vec<Vec<Crate>> = vec![Vec::new(); width];

    for row in &rows {
        for (column, cell) in columns.iter_mut().zip(row) {
            if let Cell::Crate(item) = cell {
                column.push(*item);
            }
        }
    }

    let stacks = columns
        .into_iter()
        .map(|mut column| {
            column.reverse();
            Stack::from_bottom_up(column)
        })
        .collect();

    let yard = Yard::new(stacks);
    tracing::debug!(
        stacks = yard.len(),
        crates = yard.crate_count(),
        "parsed diagram"
    );
    Ok(yard)
}
