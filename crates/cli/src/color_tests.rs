// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

// COLOR and NO_COLOR are process-global, so nothing here sets them.

#[test]
fn codes_are_distinct() {
    let codes = [codes::HEADER, codes::LITERAL, codes::CONTEXT, codes::MUTED];
    for (i, a) in codes.iter().enumerate() {
        assert!(codes[i + 1..].iter().all(|b| a != b));
    }
}

#[test]
fn paint_keeps_text() {
    let painted = paint(codes::HEADER, "Review");
    assert!(painted.contains("Review"));
    if painted != "Review" {
        assert!(painted.starts_with("\x1b[38;5;74m"));
        assert!(painted.ends_with("\x1b[0m"));
    }
}
