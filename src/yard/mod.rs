//! Crate-yard model
//!
//! This module provides the core data abstractions the crane works on:
//! - [`Crate`]: A single labeled crate (one printable glyph)
//! - [`stack`]: One column of crates with LIFO access and block transfers
//! - [`Yard`]: The fixed, ordered collection of stacks parsed from a diagram
//!
//! # Indexing
//!
//! Stacks are addressed by their 1-based diagram column, exactly as move
//! instructions name them:
//! ```text
//!     [D]
//! [N] [C]
//! [Z] [M] [P]
//!  1   2   3
//! ```
//! Here `yard.stack(2)` is the column holding `M`, `C`, `D` (base to top).
//!
//! # Invariants
//!
//! - The stack count never changes after construction; the crane only moves
//!   crates between existing stacks.
//! - Moving crates never creates or destroys them, so [`Yard::inventory`] is
//!   the same before and after any successful move.

pub mod stack;

use rustc_hash::FxHashMap;
use stack::Stack;
use std::fmt;

/// A single crate, identified by its label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Crate(char);

impl Crate {
    pub fn new(label: char) -> Self {
        Crate(label)
    }

    pub fn label(self) -> char {
        self.0
    }
}

impl fmt::Display for Crate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered collection of stacks, left to right as drawn in the diagram
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Yard {
    stacks: Vec<Stack>,
}

impl Yard {
    pub fn new(stacks: Vec<Stack>) -> Self {
        Yard { stacks }
    }

    /// Build a yard from per-stack label strings written base first.
    ///
    /// `Yard::from_labels(&["ZN", "MCD", "P"])` is the diagram shown in the
    /// module docs.
    pub fn from_labels(columns: &[&str]) -> Self {
        Yard {
            stacks: columns
                .iter()
                .map(|column| column.chars().map(Crate::new).collect())
                .collect(),
        }
    }

    /// Number of stacks
    pub fn len(&self) -> usize {
        self.stacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stacks.is_empty()
    }

    /// Get a stack by its 1-based position
    pub fn stack(&self, index: usize) -> Option<&Stack> {
        index.checked_sub(1).and_then(|i| self.stacks.get(i))
    }

    /// Get a mutable stack by its 1-based position
    pub fn stack_mut(&mut self, index: usize) -> Option<&mut Stack> {
        index.checked_sub(1).and_then(move |i| self.stacks.get_mut(i))
    }

    /// All stacks, left to right
    pub fn stacks(&self) -> &[Stack] {
        &self.stacks
    }

    /// Top crate of every stack, `None` for empty stacks
    pub fn tops(&self) -> Vec<Option<Crate>> {
        self.stacks.iter().map(Stack::peek).collect()
    }

    /// Labels of all top crates read left to right, skipping empty stacks
    pub fn top_message(&self) -> String {
        self.stacks
            .iter()
            .filter_map(Stack::peek)
            .map(Crate::label)
            .collect()
    }

    /// Total number of crates in the yard
    pub fn crate_count(&self) -> usize {
        self.stacks.iter().map(Stack::depth).sum()
    }

    /// How many crates carry each label
    pub fn inventory(&self) -> FxHashMap<Crate, usize> {
        let mut counts = FxHashMap::default();
        for item in self.stacks.iter().flat_map(|s| s.crates().iter().copied()) {
            *counts.entry(item).or_insert(0) += 1;
        }
        counts
    }

    /// Height of the tallest stack
    pub fn max_depth(&self) -> usize {
        self.stacks.iter().map(Stack::depth).max().unwrap_or(0)
    }
}

/// Renders the yard as a diagram followed by a legend row.
///
/// A yard whose stacks are all empty still gets one blank row so the column
/// count survives a re-parse.
impl fmt::Display for Yard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.stacks.is_empty() {
            return Ok(());
        }

        let height = self.max_depth().max(1);
        for level in (0..height).rev() {
            let row: Vec<String> = self
                .stacks
                .iter()
                .map(|s| match s.crates().get(level) {
                    Some(item) => format!("[{}]", item),
                    None => "   ".to_string(),
                })
                .collect();
            writeln!(f, "{}", row.join(" "))?;
        }

        let legend: Vec<String> = (1..=self.stacks.len())
            .map(|n| format!("{:^3}", n))
            .collect();
        write!(f, "{}", legend.join(" "))
    }
}
