// Integration tests for diagram parsing and the yard model

use craneyard::parser::diagram::parse_diagram;
use craneyard::parser::document::parse_document;
use craneyard::parser::errors::ParseError;
use craneyard::yard::{Crate, Yard};
use std::fs;
use std::path::Path;

fn column(yard: &Yard, index: usize) -> String {
    yard.stack(index)
        .expect("stack exists")
        .crates()
        .iter()
        .map(|c| c.label())
        .collect()
}

#[test]
fn test_single_crate_diagram() {
    let yard = parse_diagram("[S]\n 1 ").expect("Parsing failed");
    assert_eq!(yard.len(), 1);
    assert_eq!(column(&yard, 1), "S");
}

#[test]
fn test_two_stacks_one_crate_each() {
    let yard = parse_diagram("[S] [T]\n 1   2 ").expect("Parsing failed");
    assert_eq!(yard.len(), 2);
    assert_eq!(column(&yard, 1), "S");
    assert_eq!(column(&yard, 2), "T");
}

#[test]
fn test_top_of_text_is_top_of_stack() {
    let yard = parse_diagram("[A]\n[B]\n 1 ").expect("Parsing failed");
    let stack = yard.stack(1).unwrap();
    assert_eq!(stack.crates().first(), Some(&Crate::new('B')));
    assert_eq!(stack.peek(), Some(Crate::new('A')));
}

#[test]
fn test_every_column_becomes_a_stack() {
    // Five columns, the second and fourth blank in every row
    let diagram = "[A]         [D]    \n[B]     [C] [E]    \n 1   2   3   4   5 ";
    let yard = parse_diagram(diagram).expect("Parsing failed");
    assert_eq!(yard.len(), 5);
    assert!(yard.stack(2).unwrap().is_empty());
    assert!(yard.stack(5).unwrap().is_empty());
    assert_eq!(column(&yard, 1), "BA");
    assert_eq!(column(&yard, 3), "C");
    assert_eq!(column(&yard, 4), "ED");
}

#[test]
fn test_legend_does_not_add_stacks() {
    let yard = parse_diagram("[A]\n 1   2   3 ").expect("Parsing failed");
    assert_eq!(yard.len(), 1);
}

#[test]
fn test_malformed_cell_is_rejected() {
    let err = parse_diagram("[A] [B] [C]\n[D] [E] #F#").unwrap_err();
    assert_eq!(
        err,
        ParseError::MalformedCell {
            row: 2,
            column: 3,
            cell: "#F#".to_string(),
        }
    );
    assert!(err.to_string().contains("row 2, column 3"));
}

#[test]
fn test_display_round_trips() {
    let yard = Yard::from_labels(&["ZN", "", "MCD", "P"]);
    let reparsed = parse_diagram(&yard.to_string()).expect("Parsing failed");
    assert_eq!(reparsed, yard);
}

#[test]
fn test_display_round_trips_through_document() {
    for labels in [&["", ""][..], &["ZN", "", "MCD", "P"][..], &["", "A"][..]] {
        let yard = Yard::from_labels(labels);
        let puzzle = parse_document(&yard.to_string()).expect("Parsing failed");
        assert_eq!(puzzle.yard, yard, "{:?}", labels);
        assert!(puzzle.instructions.is_empty());
    }
}

#[test]
fn test_blank_top_row_keeps_its_stack() {
    let puzzle = parse_document("   \n 1 \n\nmove 0 from 1 to 1").expect("Parsing failed");
    assert_eq!(puzzle.yard.len(), 1);
    assert_eq!(puzzle.instructions.len(), 1);
}

#[test]
fn test_cells_need_space_separators() {
    let err = parse_diagram("[A]x[B]").unwrap_err();
    assert!(matches!(err, ParseError::MalformedCell { row: 1, column: 1, .. }));
}

#[test]
fn test_demo_warehouse_file() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/warehouse.txt");
    let source = fs::read_to_string(path).expect("Failed to read demo file");
    let puzzle = parse_document(&source).expect("Parsing failed");

    assert_eq!(puzzle.yard.len(), 9);
    assert_eq!(puzzle.yard.crate_count(), 56);
    assert_eq!(column(&puzzle.yard, 4), "RSJ");
    assert_eq!(column(&puzzle.yard, 9), "HGZRC");
    assert_eq!(puzzle.instructions.len(), 10);
}
