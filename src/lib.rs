//! # Introduction
//!
//! craneyard parses a diagram of labeled crates stacked in columns, runs a
//! list of crane moves against it, and captures a snapshot of the yard after
//! every move. The snapshot history can then be navigated forward and
//! backward through a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Execution pipeline
//!
//! ```text
//! Text → Diagram parser → Yard ─┐
//!      → Move decoder → Moves ──┴→ Crane → Snapshots → TUI
//! ```
//!
//! 1. [`parser`]: decodes the fixed-column diagram into a [`yard::Yard`] and
//!    `move N from A to B` lines into
//!    [`parser::instruction::MoveInstruction`]s.
//! 2. [`crane`]: binds a yard, executes moves in single-crate or bulk
//!    mode, and records [`snapshot::Snapshot`]s at each step.
//! 3. [`yard`]: the crate-yard model: [`yard::Crate`] labels stored in
//!    LIFO [`yard::stack::Stack`]s.
//! 4. [`snapshot`]: snapshot history with a configurable memory limit.
//! 5. [`ui`]: ratatui-based TUI; not part of the stable library API.
//! 6. [`logging`]: tracing subscriber setup for the binary.
//!
//! ## Example
//!
//! ```
//! use craneyard::crane::engine::{Crane, CraneMode};
//! use craneyard::parser::document::parse_document;
//!
//! let puzzle = parse_document("[A] [B]\n 1   2 \n\nmove 1 from 1 to 2").unwrap();
//! let mut crane = Crane::new();
//! crane
//!     .operate_over(puzzle.yard)
//!     .execute(&puzzle.instructions, CraneMode::Bulk)
//!     .unwrap();
//! assert_eq!(crane.yard().unwrap().top_message(), "A");
//! ```

pub mod crane;
pub mod logging;
pub mod parser;
pub mod snapshot;
pub mod ui;
pub mod yard;
