//! Whole-puzzle documents
//!
//! A puzzle file holds a diagram (optionally with its legend row), one blank
//! line, and then the move list. [`parse_document`] splits the text where
//! the diagram ends and hands each half to its parser. Line numbers in
//! errors always refer to the whole document.
//!
//! A row of blank cells (`"   "`) is a diagram row, not a separator: only an
//! empty line or the legend row ends the diagram.

use super::diagram::{is_legend_row, parse_diagram};
use super::errors::ParseError;
use super::instruction::{parse_numbered_lines, MoveInstruction};
use crate::yard::Yard;

/// A parsed puzzle: the starting yard and the moves to apply to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub yard: Yard,
    pub instructions: Vec<MoveInstruction>,
}

/// Parse a full puzzle document.
///
/// Leading empty lines are skipped. The diagram ends at the first empty line
/// or just after the legend row, whichever comes first; a document with
/// neither has no instructions.
pub fn parse_document(text: &str) -> Result<Puzzle, ParseError> {
    let lines: Vec<&str> = text.lines().collect();

    let start = lines
        .iter()
        .position(|line| !line.is_empty())
        .unwrap_or(lines.len());
    let split = lines[start..]
        .iter()
        .position(|line| line.is_empty() || is_legend_row(line))
        .map_or(lines.len(), |offset| {
            let idx = start + offset;
            if is_legend_row(lines[idx]) {
                idx + 1
            } else {
                idx
            }
        });

    let diagram = lines[start..split].join("\n");
    let yard = parse_diagram(&diagram).map_err(|err| match err {
        ParseError::MalformedCell { row, column, cell } => ParseError::MalformedCell {
            row: row + start,
            column,
            cell,
        },
        other => other,
    })?;

    let instructions = parse_numbered_lines(
        lines
            .iter()
            .enumerate()
            .skip(split)
            .map(|(idx, line)| (idx + 1, *line)),
    )?;

    tracing::info!(
        stacks = yard.len(),
        crates = yard.crate_count(),
        moves = instructions.len(),
        "parsed puzzle document"
    );

    Ok(Puzzle { yard, instructions })
}
