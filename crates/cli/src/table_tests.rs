// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn render(table: &Table) -> String {
    let mut out = Vec::new();
    table.render(&mut out);
    String::from_utf8(out).unwrap()
}

#[test]
fn columns_pad_to_widest_cell() {
    let mut table = Table::new(vec![Column::left("ID"), Column::left("STEPS")]);
    table.row(vec!["default".to_string(), "5".to_string()]);
    table.row(vec!["express".to_string(), "12".to_string()]);

    let text = render(&table);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains("STEPS"));
    assert!(lines[1].starts_with("default  5"));
    assert!(lines[2].starts_with("express  12"));
}

#[test]
fn long_cells_are_truncated() {
    let mut table = Table::new(vec![Column::left("LABEL").with_max(6)]);
    table.row(vec!["Order information".to_string()]);
    let text = render(&table);
    assert!(text.lines().nth(1).unwrap().contains("Order…"));
}

#[test]
fn missing_cells_render_empty() {
    let mut table = Table::new(vec![Column::left("A"), Column::left("B")]);
    table.row(vec!["x".to_string()]);
    let text = render(&table);
    assert_eq!(text.lines().nth(1), Some("x"));
}
