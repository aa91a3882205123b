//! Runtime error types for the crane
//!
//! This module defines [`CraneError`], which covers everything that can go
//! wrong once a yard has been parsed: executing without a yard, bad
//! instructions, and history navigation.
//!
//! Move errors are raised before the yard is touched, so the instruction that
//! failed has no partial effect. Moves earlier in the same list stay applied.
//! Running out of snapshot memory is not an error; the crane just stops
//! recording history.

/// Errors raised while operating the crane
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CraneError {
    /// `execute` was called before a yard was bound with `operate_over`
    #[error("crane has no yard to operate over")]
    Unbound,

    /// An instruction names a stack that does not exist
    #[error("step {step}: stack {index} does not exist (yard has {stacks} stacks)")]
    InvalidStackIndex {
        step: usize,
        index: usize,
        stacks: usize,
    },

    /// An instruction moves more crates than the source stack holds
    #[error("step {step}: cannot move {requested} crates from stack {stack}, it holds {available}")]
    InsufficientCrates {
        step: usize,
        stack: usize,
        requested: usize,
        available: usize,
    },

    /// Stepping through history failed
    #[error("history operation failed: {message}")]
    History { message: String },
}

impl CraneError {
    /// The step a move error refers to, if any
    pub fn step(&self) -> Option<usize> {
        match self {
            CraneError::InvalidStackIndex { step, .. } => Some(*step),
            CraneError::InsufficientCrates { step, .. } => Some(*step),
            CraneError::Unbound | CraneError::History { .. } => None,
        }
    }
}
