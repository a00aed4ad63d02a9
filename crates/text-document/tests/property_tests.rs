//! Property-based tests for text-document
//!
//! Uses proptest to verify the buffer's invariants across a wide range of
//! documents and edit sequences.

use proptest::prelude::*;
use proptest::sample::Index;
use text_document::*;

/// Lines made of letters, spaces and brackets, with one multi-byte letter
fn arb_lines() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-cé (){}\\[\\]]{0,12}", 1..8)
}

/// Inserted text, possibly spanning several lines
fn arb_text() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z]{0,6}",
        Just("\n".to_string()),
        "[a-z]{0,4}\n[a-z ]{0,4}",
        "[a-z]{0,3}\n[a-z]{0,3}\n[a-z]{0,3}",
    ]
}

/// Indent strings, never empty
fn arb_indent() -> impl Strategy<Value = String> {
    prop_oneof![Just("  ".to_string()), Just("\t".to_string()), Just("-> ".to_string())]
}

/// A valid position picked by two indices
fn pick_position(doc: &TextDocument, row: Index, column: Index) -> Position {
    let row = row.index(doc.line_count());
    Position::new(row, column.index(doc.line_length(row) + 1))
}

/// A valid, ordered range picked by four indices
fn pick_range(doc: &TextDocument, a: (Index, Index), b: (Index, Index)) -> Range {
    let p = pick_position(doc, a.0, a.1);
    let q = pick_position(doc, b.0, b.1);
    Range::new(p.min(q), p.max(q)).unwrap()
}

fn brute_force_width(doc: &TextDocument) -> usize {
    doc.lines()
        .lines()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0)
}

proptest! {
    /// Construction then display reproduces newline-joined text
    #[test]
    fn test_round_trip(lines in arb_lines()) {
        let text = lines.join("\n");
        let doc = TextDocument::new(&text);
        prop_assert_eq!(doc.line_count(), lines.len());
        prop_assert_eq!(doc.to_string(), text);
    }

    /// Removing exactly what was inserted restores content and width
    #[test]
    fn test_insert_remove_inverse(
        lines in arb_lines(),
        text in arb_text(),
        row in any::<Index>(),
        column in any::<Index>(),
    ) {
        let mut doc = TextDocument::new(&lines.join("\n"));
        let before = doc.to_string();
        let width_before = doc.width();

        let pos = pick_position(&doc, row, column);
        let end = doc.insert(pos, &text)?;
        doc.remove(Range::new(pos, end)?)?;

        prop_assert_eq!(doc.to_string(), before);
        prop_assert_eq!(doc.width(), width_before);
    }

    /// Reading the whole document as a range equals its display form
    #[test]
    fn test_full_range_read(lines in arb_lines()) {
        let doc = TextDocument::new(&lines.join("\n"));
        let full = Range::new(Position::start(), doc.end_position())?;
        prop_assert_eq!(doc.text_range(full)?, doc.to_string());
    }

    /// Matching from an opening bracket and back lands on the opening bracket
    #[test]
    fn test_bracket_symmetry(lines in arb_lines()) {
        let doc = TextDocument::new(&lines.join("\n"));
        for (row, line) in doc.lines().lines().enumerate() {
            for (column, ch) in line.chars().enumerate() {
                if !matches!(ch, '(' | '[' | '{') {
                    continue;
                }
                if let Some(close) = doc.find_matching_bracket(Position::new(row, column + 1)) {
                    let back = doc.find_matching_bracket(Position::new(close.row, close.column + 1));
                    prop_assert_eq!(back, Some(Position::new(row, column)));
                }
            }
        }
    }

    /// A failed outdent leaves every line untouched
    #[test]
    fn test_outdent_all_or_nothing(
        lines in arb_lines(),
        indent in arb_indent(),
        a in (any::<Index>(), any::<Index>()),
        b in (any::<Index>(), any::<Index>()),
    ) {
        let mut doc = TextDocument::new(&lines.join("\n"));
        let range = pick_range(&doc, a, b);
        let every_row_indented = (range.start.row..=range.end.row)
            .all(|row| doc.line(row).starts_with(indent.as_str()));
        let before = doc.to_string();

        let removed = doc.outdent_rows(range, &indent)?;

        if every_row_indented {
            prop_assert_eq!(removed, indent.chars().count());
        } else {
            prop_assert_eq!(removed, 0);
            prop_assert_eq!(doc.to_string(), before);
        }
    }

    /// Outdent right after indent over the same rows restores content
    #[test]
    fn test_indent_outdent_inverse(
        lines in arb_lines(),
        indent in arb_indent(),
        a in (any::<Index>(), any::<Index>()),
        b in (any::<Index>(), any::<Index>()),
    ) {
        let mut doc = TextDocument::new(&lines.join("\n"));
        let range = pick_range(&doc, a, b);
        let before = doc.to_string();

        doc.indent_rows(range, &indent)?;
        let removed = doc.outdent_rows(range, &indent)?;

        prop_assert_eq!(removed, indent.chars().count());
        prop_assert_eq!(doc.to_string(), before);
    }

    /// The cached width always matches a full rescan
    #[test]
    fn test_width_cache_correctness(
        lines in arb_lines(),
        ops in prop::collection::vec(
            (0..4u8, any::<Index>(), any::<Index>(), any::<Index>(), any::<Index>(), arb_text()),
            1..12,
        ),
    ) {
        let mut doc = TextDocument::new(&lines.join("\n"));
        for (kind, r1, c1, r2, c2, text) in ops {
            let range = pick_range(&doc, (r1, c1), (r2, c2));
            match kind {
                0 => { doc.insert(range.start, &text)?; }
                1 => { doc.remove(range)?; }
                2 => { doc.replace(range, &text)?; }
                _ => doc.indent_rows(range, "  ")?,
            }
            prop_assert_eq!(doc.width(), brute_force_width(&doc));
            prop_assert!(doc.line_count() >= 1);
        }
    }
}
