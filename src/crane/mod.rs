//! Crane execution engine
//!
//! This module provides the logic that moves crates around a yard:
//! - [`engine`]: The [`Crane`](engine::Crane) executor and its [`CraneMode`](engine::CraneMode)s
//! - [`errors`]: Runtime error types
//! - [`constants`]: Default limits
//!
//! # Execution Model
//!
//! Instructions run strictly in order, since every move depends on the state
//! left by the previous one. After each move a snapshot of the yard is taken
//! so the run can be replayed step by step.
//!
//! # Crane Modes
//!
//! Moving `count = 2` from a stack `[X, Y]` (Y on top) onto an empty stack:
//!
//! ```text
//! single-crate:  Y moves first, then X lands on it   →  [Y, X]
//! bulk:          X and Y move together               →  [X, Y]
//! ```
//!
//! Single-crate moves are mode-invariant when `count` is 1.

pub mod constants;
pub mod engine;
pub mod errors;
