// Snapshot management for replaying crane runs

use crate::crane::engine::CraneMode;
use crate::parser::instruction::MoveInstruction;
use crate::yard::{stack::Stack, Crate, Yard};
use std::mem::size_of;

/// Yard state at one step of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub yard: Yard,
    /// 0 for the freshly bound yard, then one per applied move
    pub step: usize,
    /// The move that produced this state (`None` for the initial yard)
    pub instruction: Option<MoveInstruction>,
    pub mode: Option<CraneMode>,
}

impl Snapshot {
    pub fn initial(yard: Yard) -> Self {
        Snapshot {
            yard,
            step: 0,
            instruction: None,
            mode: None,
        }
    }

    /// Estimate the memory usage of this snapshot in bytes
    pub fn estimated_size(&self) -> usize {
        let stacks = self.yard.len() * size_of::<Stack>();
        let crates = self.yard.crate_count() * size_of::<Crate>();
        size_of::<Snapshot>() + stacks + crates
    }
}

/// Manages the history of a run for stepping backward and forward
#[derive(Debug)]
pub struct SnapshotManager {
    snapshots: Vec<Snapshot>,
    max_memory: usize,
    current_memory: usize,
}

impl SnapshotManager {
    pub fn new(max_memory: usize) -> Self {
        SnapshotManager {
            snapshots: Vec::new(),
            max_memory,
            current_memory: 0,
        }
    }

    /// Add a snapshot to history
    pub fn push(&mut self, snapshot: Snapshot) -> Result<(), String> {
        let snapshot_size = snapshot.estimated_size();

        if self.current_memory + snapshot_size > self.max_memory {
            return Err(format!(
                "Snapshot memory limit exceeded: {} + {} > {}",
                self.current_memory, snapshot_size, self.max_memory
            ));
        }

        self.current_memory += snapshot_size;
        self.snapshots.push(snapshot);
        Ok(())
    }

    /// Drop every snapshot from index `len` onward
    pub fn truncate(&mut self, len: usize) {
        for dropped in self.snapshots.drain(len.min(self.snapshots.len())..) {
            self.current_memory -= dropped.estimated_size();
        }
    }

    /// Forget the whole history
    pub fn clear(&mut self) {
        self.snapshots.clear();
        self.current_memory = 0;
    }

    /// Get a snapshot by index
    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }

    /// Get the number of snapshots
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Get current memory usage
    pub fn memory_usage(&self) -> usize {
        self.current_memory
    }

    /// Get max memory limit
    pub fn memory_limit(&self) -> usize {
        self.max_memory
    }
}
