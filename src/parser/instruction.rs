//! Move instructions and their textual form
//!
//! A [`MoveInstruction`] is the `(count, from, to)` triple the crane
//! executes. The textual grammar is a single line of six whitespace-separated
//! tokens:
//!
//! ```text
//! move <count> from <stack> to <stack>
//! ```
//!
//! Keywords are case-insensitive and numbers are non-negative decimal
//! integers. Stack indices are 1-based but are only range-checked by the
//! crane, since the decoder has no yard to check them against.

use super::errors::ParseError;
use std::fmt;
use std::str::FromStr;

/// Move `count` crates from stack `from` to stack `to` (1-based positions)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveInstruction {
    pub count: usize,
    pub from: usize,
    pub to: usize,
}

impl MoveInstruction {
    pub fn new(count: usize, from: usize, to: usize) -> Self {
        MoveInstruction { count, from, to }
    }

    /// Whether this move leaves the yard unchanged regardless of mode
    pub fn is_no_op(&self) -> bool {
        self.count == 0 || self.from == self.to
    }
}

impl fmt::Display for MoveInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "move {} from {} to {}", self.count, self.from, self.to)
    }
}

impl FromStr for MoveInstruction {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_instruction(s, 1)
    }
}

fn expect_keyword(token: &str, keyword: &str) -> Result<(), String> {
    if token.eq_ignore_ascii_case(keyword) {
        Ok(())
    } else {
        Err(format!("expected `{}`, found `{}`", keyword, token))
    }
}

fn parse_number(token: &str, what: &str) -> Result<usize, String> {
    if !token.chars().all(|c| c.is_ascii_digit()) {
        return Err(format!("invalid {} `{}`", what, token));
    }
    token
        .parse::<usize>()
        .map_err(|e| format!("invalid {} `{}`: {}", what, token, e))
}

fn decode(line: &str) -> Result<MoveInstruction, String> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        [mv, count, from_kw, from, to_kw, to] => {
            expect_keyword(mv, "move")?;
            let count = parse_number(count, "count")?;
            expect_keyword(from_kw, "from")?;
            let from = parse_number(from, "source stack")?;
            expect_keyword(to_kw, "to")?;
            let to = parse_number(to, "target stack")?;
            Ok(MoveInstruction { count, from, to })
        }
        _ => Err(format!(
            "expected `move <count> from <stack> to <stack>`, found {} token{}",
            tokens.len(),
            if tokens.len() == 1 { "" } else { "s" }
        )),
    }
}

/// Decode a single instruction line. `line_number` is only used for error
/// reporting.
pub fn parse_instruction(line: &str, line_number: usize) -> Result<MoveInstruction, ParseError> {
    decode(line).map_err(|message| ParseError::MalformedInstruction {
        line: line_number,
        message,
    })
}

/// Decode numbered lines, skipping blank ones
pub(crate) fn parse_numbered_lines<'a, I>(lines: I) -> Result<Vec<MoveInstruction>, ParseError>
where
    I: IntoIterator<Item = (usize, &'a str)>,
{
    lines
        .into_iter()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(number, line)| parse_instruction(line, number))
        .collect()
}

/// Decode every non-blank line of `text` into an instruction list
pub fn parse_instructions(text: &str) -> Result<Vec<MoveInstruction>, ParseError> {
    parse_numbered_lines(text.lines().enumerate().map(|(idx, line)| (idx + 1, line)))
}
