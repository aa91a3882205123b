// Execution engine for the crane

use crate::crane::constants::DEFAULT_SNAPSHOT_LIMIT;
use crate::crane::errors::CraneError;
use crate::parser::instruction::MoveInstruction;
use crate::snapshot::{Snapshot, SnapshotManager};
use crate::yard::{stack::Stack, Yard};
use std::fmt;

/// How a multi-crate move reorders the crates it carries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum CraneMode {
    /// Crates move one at a time, so the moved block ends up reversed
    #[default]
    SingleCrate,
    /// The whole block moves at once and keeps its order
    Bulk,
}

impl fmt::Display for CraneMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CraneMode::SingleCrate => write!(f, "single-crate"),
            CraneMode::Bulk => write!(f, "bulk"),
        }
    }
}

/// The crane that moves crates around a yard
///
/// A crane starts unbound; [`Crane::operate_over`] hands it a yard, after
/// which [`Crane::execute`] may run instructions against it. Every bound state
/// is recorded as a [`Snapshot`] so a run can be stepped through afterwards.
///
/// History is best effort. Once the snapshot budget is spent the crane stops
/// recording and keeps moving crates; [`Crane::is_recording`] reports whether
/// the current yard is still covered by the history.
pub struct Crane {
    /// The yard being operated on (`None` until bound)
    yard: Option<Yard>,

    /// Snapshot manager for stepping through the run
    snapshot_manager: SnapshotManager,

    /// Index of the snapshot matching the current yard, or one past the last
    /// snapshot once recording has stopped
    history_position: usize,

    /// Moves applied to reach the current yard
    moves_applied: usize,

    /// Whether every state since the last restore has been recorded
    recording: bool,
}

impl Crane {
    /// Create an unbound crane with the default snapshot memory limit
    pub fn new() -> Self {
        Self::with_snapshot_limit(DEFAULT_SNAPSHOT_LIMIT)
    }

    /// Create an unbound crane with an explicit snapshot memory limit
    pub fn with_snapshot_limit(snapshot_memory_limit: usize) -> Self {
        Crane {
            yard: None,
            snapshot_manager: SnapshotManager::new(snapshot_memory_limit),
            history_position: 0,
            moves_applied: 0,
            recording: true,
        }
    }

    /// Bind a yard, replacing any previous one and its history
    pub fn operate_over(&mut self, yard: Yard) -> &mut Self {
        self.snapshot_manager.clear();
        self.history_position = 0;
        self.moves_applied = 0;
        self.recording = true;

        if let Err(message) = self.snapshot_manager.push(Snapshot::initial(yard.clone())) {
            tracing::warn!(%message, "history disabled for this yard");
            self.recording = false;
        }

        tracing::debug!(stacks = yard.len(), "crane bound to yard");
        self.yard = Some(yard);
        self
    }

    /// Run instructions in order against the bound yard.
    ///
    /// Each move is validated before the yard is touched, so a failing
    /// instruction has no effect; moves before it stay applied. When the
    /// crane has been stepped back through history, the snapshots ahead of
    /// the current position are discarded first.
    pub fn execute(
        &mut self,
        instructions: &[MoveInstruction],
        mode: CraneMode,
    ) -> Result<&mut Self, CraneError> {
        if self.yard.is_none() {
            return Err(CraneError::Unbound);
        }

        self.snapshot_manager.truncate(self.history_position + 1);

        for (idx, instruction) in instructions.iter().enumerate() {
            self.apply_move(instruction, mode, idx + 1)?;
            self.take_snapshot(*instruction, mode);
        }

        tracing::info!(
            moves = instructions.len(),
            %mode,
            snapshots = self.snapshot_manager.len(),
            "crane run finished"
        );
        Ok(self)
    }

    /// Apply a single instruction; errors report the step it would have
    /// occupied
    pub fn apply(
        &mut self,
        instruction: MoveInstruction,
        mode: CraneMode,
    ) -> Result<&mut Self, CraneError> {
        if self.yard.is_none() {
            return Err(CraneError::Unbound);
        }

        self.snapshot_manager.truncate(self.history_position + 1);
        self.apply_move(&instruction, mode, self.moves_applied + 1)?;
        self.take_snapshot(instruction, mode);
        Ok(self)
    }

    /// Validate and perform one move
    fn apply_move(
        &mut self,
        instruction: &MoveInstruction,
        mode: CraneMode,
        step: usize,
    ) -> Result<(), CraneError> {
        let yard = self.yard.as_mut().ok_or(CraneError::Unbound)?;
        let MoveInstruction { count, from, to } = *instruction;
        let stacks = yard.len();

        for index in [from, to] {
            if yard.stack(index).is_none() {
                return Err(CraneError::InvalidStackIndex {
                    step,
                    index,
                    stacks,
                });
            }
        }

        let available = yard.stack(from).map_or(0, Stack::depth);
        let insufficient = CraneError::InsufficientCrates {
            step,
            stack: from,
            requested: count,
            available,
        };
        if count > available {
            return Err(insufficient);
        }

        // One crate at a time onto the same stack puts every crate back
        if instruction.is_no_op() {
            tracing::debug!(step, %instruction, "no-op move");
            return Ok(());
        }

        let block = yard
            .stack_mut(from)
            .and_then(|s| s.lift(count))
            .ok_or(insufficient)?;
        let target = yard
            .stack_mut(to)
            .ok_or(CraneError::InvalidStackIndex {
                step,
                index: to,
                stacks,
            })?;

        match mode {
            CraneMode::SingleCrate => target.place_reversed(block),
            CraneMode::Bulk => target.place(block),
        }

        tracing::debug!(step, %instruction, %mode, "moved crates");
        Ok(())
    }

    /// Record the current yard after a move.
    ///
    /// The move itself has already happened, so a full history only stops
    /// recording; it never fails the move.
    fn take_snapshot(&mut self, instruction: MoveInstruction, mode: CraneMode) {
        self.moves_applied += 1;

        if !self.recording {
            self.history_position = self.snapshot_manager.len();
            return;
        }
        let Some(yard) = self.yard.as_ref() else {
            return;
        };

        let snapshot = Snapshot {
            yard: yard.clone(),
            step: self.moves_applied,
            instruction: Some(instruction),
            mode: Some(mode),
        };

        match self.snapshot_manager.push(snapshot) {
            Ok(()) => self.history_position = self.snapshot_manager.len() - 1,
            Err(message) => {
                tracing::warn!(
                    %message,
                    recorded = self.snapshot_manager.len(),
                    "snapshot limit reached, history stops here"
                );
                self.recording = false;
                self.history_position = self.snapshot_manager.len();
            }
        }
    }

    /// Restore the yard from a snapshot
    fn restore_snapshot(&mut self, index: usize) -> Result<(), CraneError> {
        let snapshot = self
            .snapshot_manager
            .get(index)
            .ok_or_else(|| CraneError::History {
                message: "Snapshot not found in history".to_string(),
            })?;

        self.yard = Some(snapshot.yard.clone());
        self.moves_applied = snapshot.step;
        self.history_position = index;
        self.recording = true;
        Ok(())
    }

    /// Step backward in the run (restore previous snapshot)
    pub fn step_backward(&mut self) -> Result<(), CraneError> {
        if self.history_position == 0 {
            return Err(CraneError::History {
                message: "Already at the beginning of the run".to_string(),
            });
        }

        self.restore_snapshot(self.history_position - 1)
    }

    /// Step forward in the run (restore next snapshot)
    pub fn step_forward(&mut self) -> Result<(), CraneError> {
        if self.history_position + 1 >= self.snapshot_manager.len() {
            return Err(CraneError::History {
                message: "No more snapshots available (run finished)".to_string(),
            });
        }

        self.restore_snapshot(self.history_position + 1)
    }

    /// Rewind to the freshly bound yard
    pub fn rewind_to_start(&mut self) -> Result<(), CraneError> {
        if self.snapshot_manager.is_empty() {
            return Err(CraneError::History {
                message: "No snapshots available".to_string(),
            });
        }

        self.restore_snapshot(0)
    }

    /// Jump to the last recorded state
    pub fn jump_to_end(&mut self) -> Result<(), CraneError> {
        match self.snapshot_manager.len() {
            0 => Err(CraneError::History {
                message: "No snapshots available".to_string(),
            }),
            len => self.restore_snapshot(len - 1),
        }
    }

    // ========== Getter methods ==========

    /// The bound yard, if any
    pub fn yard(&self) -> Option<&Yard> {
        self.yard.as_ref()
    }

    /// Consume the crane and hand back its yard
    pub fn into_yard(self) -> Option<Yard> {
        self.yard
    }

    pub fn is_bound(&self) -> bool {
        self.yard.is_some()
    }

    /// Get the current history position
    pub fn history_position(&self) -> usize {
        self.history_position
    }

    /// Whether the current yard is covered by the history
    pub fn is_recording(&self) -> bool {
        self.recording
    }

    /// Moves applied since the yard was bound
    pub fn moves_applied(&self) -> usize {
        self.moves_applied
    }

    /// Get the total number of snapshots
    pub fn total_snapshots(&self) -> usize {
        self.snapshot_manager.len()
    }

    /// The snapshot matching the current yard
    pub fn current_snapshot(&self) -> Option<&Snapshot> {
        self.snapshot_manager.get(self.history_position)
    }

    /// Get a snapshot by history index
    pub fn snapshot(&self, index: usize) -> Option<&Snapshot> {
        self.snapshot_manager.get(index)
    }

    /// Bytes currently held by the history
    pub fn snapshot_memory(&self) -> usize {
        self.snapshot_manager.memory_usage()
    }
}

impl Default for Crane {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(crane: &Crane) -> Vec<String> {
        crane
            .yard()
            .unwrap()
            .stacks()
            .iter()
            .map(|s| s.crates().iter().map(|c| c.label()).collect())
            .collect()
    }

    #[test]
    fn unbound_crane_refuses_to_execute() {
        let mut crane = Crane::new();
        assert!(!crane.is_bound());
        assert_eq!(
            crane.execute(&[], CraneMode::Bulk).err(),
            Some(CraneError::Unbound)
        );
        assert_eq!(
            crane
                .apply(MoveInstruction::new(1, 1, 2), CraneMode::Bulk)
                .err(),
            Some(CraneError::Unbound)
        );
    }

    #[test]
    fn empty_instruction_list_changes_nothing() {
        let yard = Yard::from_labels(&["X", "", "YZ"]);
        let mut crane = Crane::new();
        crane
            .operate_over(yard.clone())
            .execute(&[], CraneMode::SingleCrate)
            .unwrap();
        assert_eq!(crane.yard(), Some(&yard));
        assert_eq!(crane.total_snapshots(), 1);
    }

    #[test]
    fn same_stack_move_is_unchanged_in_both_modes() {
        for mode in [CraneMode::SingleCrate, CraneMode::Bulk] {
            let mut crane = Crane::new();
            crane
                .operate_over(Yard::from_labels(&["ABC"]))
                .execute(&[MoveInstruction::new(2, 1, 1)], mode)
                .unwrap();
            assert_eq!(labels(&crane), vec!["ABC"]);
        }
    }

    #[test]
    fn same_stack_move_still_checks_depth() {
        let mut crane = Crane::new();
        crane.operate_over(Yard::from_labels(&["A"]));
        let err = crane
            .execute(&[MoveInstruction::new(2, 1, 1)], CraneMode::Bulk)
            .err();
        assert!(matches!(err, Some(CraneError::InsufficientCrates { .. })));
    }

    #[test]
    fn failing_step_is_numbered_and_earlier_moves_stay() {
        let mut crane = Crane::new();
        crane.operate_over(Yard::from_labels(&["AB", "C"]));
        let err = crane
            .execute(
                &[MoveInstruction::new(1, 1, 2), MoveInstruction::new(1, 3, 1)],
                CraneMode::Bulk,
            )
            .err();
        assert_eq!(
            err,
            Some(CraneError::InvalidStackIndex {
                step: 2,
                index: 3,
                stacks: 2,
            })
        );
        assert_eq!(labels(&crane), vec!["A", "CB"]);
    }

    #[test]
    fn apply_reports_history_step() {
        let mut crane = Crane::new();
        crane.operate_over(Yard::from_labels(&["AB", ""]));
        crane
            .apply(MoveInstruction::new(1, 1, 2), CraneMode::SingleCrate)
            .unwrap();
        let err = crane
            .apply(MoveInstruction::new(5, 1, 2), CraneMode::SingleCrate)
            .err();
        assert_eq!(err.and_then(|e| e.step()), Some(2));
    }

    #[test]
    fn history_steps_restore_exact_yards() {
        let start = Yard::from_labels(&["AB", ""]);
        let mut crane = Crane::new();
        crane
            .operate_over(start.clone())
            .execute(
                &[MoveInstruction::new(1, 1, 2), MoveInstruction::new(1, 1, 2)],
                CraneMode::SingleCrate,
            )
            .unwrap();
        let end = crane.yard().cloned().unwrap();
        assert_eq!(crane.total_snapshots(), 3);
        assert_eq!(crane.history_position(), 2);

        crane.step_backward().unwrap();
        assert_eq!(labels(&crane), vec!["A", "B"]);
        assert_eq!(
            crane.current_snapshot().and_then(|s| s.instruction),
            Some(MoveInstruction::new(1, 1, 2))
        );

        crane.rewind_to_start().unwrap();
        assert_eq!(crane.yard(), Some(&start));
        assert!(crane.step_backward().is_err());

        crane.jump_to_end().unwrap();
        assert_eq!(crane.yard(), Some(&end));
        assert!(matches!(
            crane.step_forward(),
            Err(CraneError::History { .. })
        ));
    }

    #[test]
    fn executing_after_rewind_branches_history() {
        let mut crane = Crane::new();
        crane
            .operate_over(Yard::from_labels(&["AB", ""]))
            .execute(
                &[MoveInstruction::new(1, 1, 2), MoveInstruction::new(1, 1, 2)],
                CraneMode::Bulk,
            )
            .unwrap();

        crane.rewind_to_start().unwrap();
        crane
            .execute(&[MoveInstruction::new(2, 1, 2)], CraneMode::Bulk)
            .unwrap();

        assert_eq!(crane.total_snapshots(), 2);
        assert_eq!(labels(&crane), vec!["", "AB"]);
        assert!(crane.step_forward().is_err());
    }

    #[test]
    fn snapshot_limit_stops_recording_not_moving() {
        let yard = Yard::from_labels(&["ABC", ""]);
        let limit = Snapshot::initial(yard.clone()).estimated_size();
        let mut crane = Crane::with_snapshot_limit(limit);
        let moves = [MoveInstruction::new(1, 1, 2); 3];
        crane
            .operate_over(yard.clone())
            .execute(&moves, CraneMode::Bulk)
            .unwrap();

        assert_eq!(labels(&crane), vec!["", "CBA"]);
        assert!(!crane.is_recording());
        assert_eq!(crane.moves_applied(), 3);
        assert_eq!(crane.total_snapshots(), 1);
        assert!(crane.current_snapshot().is_none());

        // The recorded prefix can still be replayed
        crane.step_backward().unwrap();
        assert_eq!(crane.yard(), Some(&yard));
        assert!(crane.is_recording());
        assert_eq!(crane.moves_applied(), 0);
    }

    #[test]
    fn zero_budget_still_executes() {
        let mut crane = Crane::with_snapshot_limit(0);
        crane
            .operate_over(Yard::from_labels(&["AB", ""]))
            .execute(&[MoveInstruction::new(2, 1, 2)], CraneMode::SingleCrate)
            .unwrap();
        assert_eq!(labels(&crane), vec!["", "BA"]);
        assert_eq!(crane.total_snapshots(), 0);
        assert!(crane.rewind_to_start().is_err());

        let err = crane
            .apply(MoveInstruction::new(3, 2, 1), CraneMode::SingleCrate)
            .err();
        assert_eq!(err.and_then(|e| e.step()), Some(2));
    }

    #[test]
    fn mode_display_matches_cli_names() {
        assert_eq!(CraneMode::SingleCrate.to_string(), "single-crate");
        assert_eq!(CraneMode::Bulk.to_string(), "bulk");
        assert_eq!(CraneMode::default(), CraneMode::SingleCrate);
    }
}
