//! Puzzle text parsers
//!
//! This module turns raw puzzle text into the crate-yard model:
//! - [`diagram`]: Fixed-column ASCII diagram → [`Yard`](crate::yard::Yard)
//! - [`instruction`]: `move N from A to B` lines → [`MoveInstruction`]
//! - [`document`]: A whole puzzle file (diagram, blank line, moves) → [`Puzzle`]
//! - [`errors`]: [`ParseError`], shared by all three
//!
//! # Input Format
//!
//! ```text
//!     [D]
//! [N] [C]
//! [Z] [M] [P]
//!  1   2   3
//!
//! move 1 from 2 to 1
//! move 3 from 1 to 3
//! ```
//!
//! Every cell is three characters wide and followed by one separator. The
//! legend row is recognized and skipped; the stack count comes from the
//! cells alone.
//!
//! [`MoveInstruction`]: instruction::MoveInstruction
//! [`Puzzle`]: document::Puzzle
//! [`ParseError`]: errors::ParseError

pub mod diagram;
pub mod document;
pub mod errors;
pub mod instruction;
