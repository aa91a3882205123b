//! A single column of crates
//!
//! This module provides [`Stack`], the LIFO container behind every diagram
//! column. Crates are stored bottom-first, so index 0 is the stack base and
//! the last element is the top.
//!
//! # Block Transfers
//!
//! The crane never moves crates through individual `pop`/`push` calls on the
//! public API. Instead it uses [`Stack::lift`] to detach the top `count`
//! crates as a block and [`Stack::place`] / [`Stack::place_reversed`] to set
//! that block down. `lift` checks the depth up front, so a failed lift leaves
//! the stack untouched.

use super::Crate;

/// One column of the yard, base at index 0
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stack {
    crates: Vec<Crate>,
}

impl Stack {
    pub fn new() -> Self {
        Stack { crates: Vec::new() }
    }

    /// Build a stack from crates listed base first
    pub fn from_bottom_up(crates: Vec<Crate>) -> Self {
        Stack { crates }
    }

    /// Push a crate onto the top
    pub fn push(&mut self, item: Crate) {
        self.crates.push(item);
    }

    /// Pop the top crate
    pub fn pop(&mut self) -> Option<Crate> {
        self.crates.pop()
    }

    /// Peek at the top crate
    pub fn peek(&self) -> Option<Crate> {
        self.crates.last().copied()
    }

    /// Number of crates in the stack
    pub fn depth(&self) -> usize {
        self.crates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.crates.is_empty()
    }

    /// All crates, base first (for rendering)
    pub fn crates(&self) -> &[Crate] {
        &self.crates
    }

    /// Detach the top `count` crates as a block, preserving their order.
    ///
    /// Returns `None` without modifying the stack when fewer than `count`
    /// crates are available.
    pub fn lift(&mut self, count: usize) -> Option<Vec<Crate>> {
        let split_at = self.crates.len().checked_sub(count)?;
        Some(self.crates.split_off(split_at))
    }

    /// Set a block down on top, keeping its order
    pub fn place(&mut self, block: Vec<Crate>) {
        self.crates.extend(block);
    }

    /// Set a block down on top one crate at a time, topmost crate first
    pub fn place_reversed(&mut self, block: Vec<Crate>) {
        self.crates.extend(block.into_iter().rev());
    }
}

impl FromIterator<Crate> for Stack {
    fn from_iter<I: IntoIterator<Item = Crate>>(iter: I) -> Self {
        Stack {
            crates: iter.into_iter().collect(),
        }
    }
}
