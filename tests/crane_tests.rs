// Integration tests for the crane executor

use craneyard::crane::constants::BYTES_PER_MIB;
use craneyard::crane::engine::{Crane, CraneMode};
use craneyard::crane::errors::CraneError;
use craneyard::parser::document::parse_document;
use craneyard::parser::instruction::MoveInstruction;
use craneyard::yard::Yard;
use std::fs;
use std::path::Path;

const MODES: [CraneMode; 2] = [CraneMode::SingleCrate, CraneMode::Bulk];

fn columns(yard: &Yard) -> Vec<String> {
    yard.stacks()
        .iter()
        .map(|s| s.crates().iter().map(|c| c.label()).collect())
        .collect()
}

fn run(yard: Yard, moves: &[MoveInstruction], mode: CraneMode) -> Result<Yard, CraneError> {
    let mut crane = Crane::new();
    crane.operate_over(yard).execute(moves, mode)?;
    Ok(crane.into_yard().expect("crane is bound"))
}

fn run_demo(name: &str, mode: CraneMode) -> Yard {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos").join(name);
    let source = fs::read_to_string(path).expect("Failed to read demo file");
    let puzzle = parse_document(&source).expect("Parsing failed");
    run(puzzle.yard, &puzzle.instructions, mode).expect("Execution failed")
}

#[test]
fn test_bulk_mode_preserves_order() {
    let yard = run(
        Yard::from_labels(&["XY", ""]),
        &[MoveInstruction::new(2, 1, 2)],
        CraneMode::Bulk,
    )
    .expect("Execution failed");
    assert_eq!(columns(&yard), vec!["", "XY"]);
}

#[test]
fn test_single_crate_mode_reverses_order() {
    let yard = run(
        Yard::from_labels(&["XY", ""]),
        &[MoveInstruction::new(2, 1, 2)],
        CraneMode::SingleCrate,
    )
    .expect("Execution failed");
    assert_eq!(columns(&yard), vec!["", "YX"]);
}

#[test]
fn test_single_move_is_mode_invariant() {
    for mode in MODES {
        let yard = run(
            Yard::from_labels(&["S", "T"]),
            &[MoveInstruction::new(1, 1, 2)],
            mode,
        )
        .expect("Execution failed");
        assert_eq!(columns(&yard), vec!["", "TS"], "mode {}", mode);
    }
}

#[test]
fn test_zero_count_is_a_no_op() {
    for mode in MODES {
        let start = Yard::from_labels(&["AB", "C"]);
        let yard = run(start.clone(), &[MoveInstruction::new(0, 1, 2)], mode)
            .expect("Execution failed");
        assert_eq!(yard, start);
    }
}

#[test]
fn test_insufficient_crates_fails_without_moving() {
    let mut crane = Crane::new();
    crane.operate_over(Yard::from_labels(&["A", "B"]));
    let err = crane
        .execute(&[MoveInstruction::new(2, 1, 2)], CraneMode::Bulk)
        .err();
    assert_eq!(
        err,
        Some(CraneError::InsufficientCrates {
            step: 1,
            stack: 1,
            requested: 2,
            available: 1,
        })
    );
    assert_eq!(crane.yard(), Some(&Yard::from_labels(&["A", "B"])));
}

#[test]
fn test_invalid_stack_index_fails_without_moving() {
    for bad in [MoveInstruction::new(1, 0, 1), MoveInstruction::new(1, 1, 3)] {
        let mut crane = Crane::new();
        crane.operate_over(Yard::from_labels(&["A", "B"]));
        let err = crane.execute(&[bad], CraneMode::SingleCrate).err();
        assert!(
            matches!(err, Some(CraneError::InvalidStackIndex { stacks: 2, .. })),
            "{:?}",
            err
        );
        assert_eq!(crane.yard(), Some(&Yard::from_labels(&["A", "B"])));
    }
}

#[test]
fn test_execute_requires_a_yard() {
    let mut crane = Crane::new();
    let err = crane.execute(&[], CraneMode::SingleCrate).err();
    assert_eq!(err, Some(CraneError::Unbound));
    assert_eq!(
        CraneError::Unbound.to_string(),
        "crane has no yard to operate over"
    );
}

#[test]
fn test_sample_answers() {
    let single = run_demo("sample.txt", CraneMode::SingleCrate);
    assert_eq!(single.top_message(), "CMZ");
    assert_eq!(columns(&single), vec!["C", "M", "PDNZ"]);

    let bulk = run_demo("sample.txt", CraneMode::Bulk);
    assert_eq!(bulk.top_message(), "MCD");
    assert_eq!(columns(&bulk), vec!["M", "C", "PZND"]);
}

#[test]
fn test_warehouse_answers() {
    assert_eq!(
        run_demo("warehouse.txt", CraneMode::SingleCrate).top_message(),
        "VRWJLPNBZ"
    );
    assert_eq!(
        run_demo("warehouse.txt", CraneMode::Bulk).top_message(),
        "VDBJLHNWZ"
    );
}

#[test]
fn test_moves_conserve_crates() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/warehouse.txt");
    let source = fs::read_to_string(path).expect("Failed to read demo file");
    let puzzle = parse_document(&source).expect("Parsing failed");
    let before = puzzle.yard.inventory();

    for mode in MODES {
        let after = run(puzzle.yard.clone(), &puzzle.instructions, mode)
            .expect("Execution failed");
        assert_eq!(after.inventory(), before);
        assert_eq!(after.len(), puzzle.yard.len());
    }
}

#[test]
fn test_replay_matches_step_by_step_execution() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/sample.txt");
    let source = fs::read_to_string(path).expect("Failed to read demo file");
    let puzzle = parse_document(&source).expect("Parsing failed");

    let mut stepwise = Crane::new();
    stepwise.operate_over(puzzle.yard.clone());
    let mut states = vec![puzzle.yard.clone()];
    for mv in &puzzle.instructions {
        stepwise.apply(*mv, CraneMode::Bulk).expect("Execution failed");
        states.push(stepwise.yard().cloned().unwrap());
    }

    let mut crane = Crane::new();
    crane
        .operate_over(puzzle.yard)
        .execute(&puzzle.instructions, CraneMode::Bulk)
        .expect("Execution failed");
    crane.rewind_to_start().expect("Rewind failed");

    for (step, expected) in states.iter().enumerate() {
        assert_eq!(crane.history_position(), step);
        assert_eq!(crane.yard(), Some(expected));
        if step + 1 < states.len() {
            crane.step_forward().expect("Step failed");
        }
    }
}

#[test]
fn test_all_blank_yard_accepts_moves() {
    let text = format!("{}\n\nmove 0 from 1 to 2", Yard::from_labels(&["", ""]));
    let puzzle = parse_document(&text).expect("Parsing failed");
    for mode in MODES {
        let yard = run(puzzle.yard.clone(), &puzzle.instructions, mode)
            .expect("Execution failed");
        assert_eq!(yard.len(), 2);
        assert_eq!(yard.crate_count(), 0);
    }
}

#[test]
fn test_full_history_does_not_stop_the_run() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/warehouse.txt");
    let source = fs::read_to_string(path).expect("Failed to read demo file");
    let puzzle = parse_document(&source).expect("Parsing failed");

    for (mode, expected) in [
        (CraneMode::SingleCrate, "VRWJLPNBZ"),
        (CraneMode::Bulk, "VDBJLHNWZ"),
    ] {
        let mut crane = Crane::with_snapshot_limit(0);
        crane
            .operate_over(puzzle.yard.clone())
            .execute(&puzzle.instructions, mode)
            .expect("Execution failed");
        assert!(!crane.is_recording());
        assert_eq!(crane.moves_applied(), puzzle.instructions.len());
        assert_eq!(crane.yard().map(Yard::top_message).as_deref(), Some(expected));
    }
}

#[test]
fn test_deep_stack_outgrows_history_budget() {
    let deep: String = std::iter::repeat('A').take(20_000).collect();
    let yard = Yard::from_labels(&[deep.as_str(), ""]);
    let moves = vec![MoveInstruction::new(1, 1, 2); 200];

    let mut crane = Crane::with_snapshot_limit(BYTES_PER_MIB);
    crane
        .operate_over(yard)
        .execute(&moves, CraneMode::SingleCrate)
        .expect("Execution failed");
    assert!(!crane.is_recording());
    assert!(crane.total_snapshots() < moves.len());

    let yard = crane.yard().expect("crane is bound");
    assert_eq!(yard.stack(1).map(|s| s.depth()), Some(19_800));
    assert_eq!(yard.stack(2).map(|s| s.depth()), Some(200));
}
