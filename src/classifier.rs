//! Line classifier and table accumulator
//!
//! Scans the input text line by line and produces the ordered sequence of
//! [`ContentUnit`]s the layout engine consumes. Consecutive table-row lines
//! are buffered and flushed as a single `Table` unit when the run ends.

use crate::types::{ContentUnit, HeadingLevel};

/// Parser state: either scanning free text or inside a table-row run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Scanning,
    InTable,
}

/// Classify the full input text into content units, with tables pre-grouped.
pub fn classify(text: &str) -> Vec<ContentUnit> {
    let mut units = Vec::new();
    let mut state = ScanState::Scanning;
    let mut pending_rows: Vec<Vec<String>> = Vec::new();

    for raw in text.lines() {
        let line = raw.trim();

        if line.starts_with('|') || line.starts_with("+-") {
            pending_rows.push(split_row(line));
            state = ScanState::InTable;
            continue;
        }

        if state == ScanState::InTable {
            flush_table(&mut pending_rows, &mut units);
            state = ScanState::Scanning;
        }

        if line.is_empty() {
            continue;
        }

        if let Some(rest) = line.strip_prefix("# ") {
            units.push(ContentUnit::Heading {
                level: HeadingLevel::H1,
                text: rest.trim().to_string(),
            });
        } else if let Some(rest) = line.strip_prefix("## ") {
            units.push(ContentUnit::Heading {
                level: HeadingLevel::H2,
                text: rest.trim().to_string(),
            });
        } else if let Some(rest) = line.strip_prefix("### ") {
            units.push(ContentUnit::Heading {
                level: HeadingLevel::H3,
                text: rest.trim().to_string(),
            });
        } else if let Some(rest) = line.strip_prefix("- ") {
            units.push(ContentUnit::ListItem { text: rest.trim().to_string() });
        } else {
            units.push(ContentUnit::Paragraph { text: line.to_string() });
        }
    }

    // Input may end while a table is still accumulating
    if state == ScanState::InTable {
        flush_table(&mut pending_rows, &mut units);
    }

    units
}

/// Split a table-row line on pipes, trimming cells and dropping empty ones
fn split_row(line: &str) -> Vec<String> {
    line.split('|')
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .map(String::from)
        .collect()
}

/// True for markdown separator rows (`---|---`) and ASCII border rows (`+--+`)
fn is_separator_row(row: &[String]) -> bool {
    row.iter()
        .all(|cell| cell.chars().all(|ch| matches!(ch, '-' | ':' | '+' | '=' | ' ')))
}

fn flush_table(pending_rows: &mut Vec<Vec<String>>, units: &mut Vec<ContentUnit>) {
    let rows: Vec<Vec<String>> = pending_rows
        .drain(..)
        .filter(|row| !row.is_empty() && !is_separator_row(row))
        .collect();
    if !rows.is_empty() {
        units.push(ContentUnit::Table { rows });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_rows(unit: &ContentUnit) -> &Vec<Vec<String>> {
        match unit {
            ContentUnit::Table { rows } => rows,
            other => panic!("expected table, got {other:?}"),
        }
    }

    #[test]
    fn test_worked_example() {
        let input = "# Title\n\nSome text.\n\n- Item one\n\n| A | B |\n|---|---|\n| 1 | 2 |";
        let units = classify(input);
        assert_eq!(units.len(), 4);
        assert_eq!(
            units[0],
            ContentUnit::Heading { level: HeadingLevel::H1, text: "Title".to_string() }
        );
        assert_eq!(units[1], ContentUnit::Paragraph { text: "Some text.".to_string() });
        assert_eq!(units[2], ContentUnit::ListItem { text: "Item one".to_string() });
        let rows = table_rows(&units[3]);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], vec!["A".to_string(), "B".to_string()]);
        assert_eq!(rows[1], vec!["1".to_string(), "2".to_string()]);
    }

    #[test]
    fn test_heading_levels() {
        let units = classify("# One\n## Two\n### Three");
        assert_eq!(
            units,
            vec![
                ContentUnit::Heading { level: HeadingLevel::H1, text: "One".to_string() },
                ContentUnit::Heading { level: HeadingLevel::H2, text: "Two".to_string() },
                ContentUnit::Heading { level: HeadingLevel::H3, text: "Three".to_string() },
            ]
        );
    }

    #[test]
    fn test_hash_without_space_is_paragraph() {
        let units = classify("#NoSpace");
        assert_eq!(units, vec![ContentUnit::Paragraph { text: "#NoSpace".to_string() }]);
    }

    #[test]
    fn test_blank_lines_produce_no_units() {
        assert!(classify("\n   \n\t\n").is_empty());
    }

    #[test]
    fn test_trailing_table_is_flushed() {
        let units = classify("intro\n| H1 | H2 |\n|----|----|\n| a | b |");
        assert_eq!(units.len(), 2);
        let rows = table_rows(&units[1]);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_ascii_border_rows_dropped() {
        let units = classify("+----+----+\n| A | B |\n+----+----+\n| 1 | 2 |\n+----+----+");
        assert_eq!(units.len(), 1);
        let rows = table_rows(&units[0]);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], vec!["A".to_string(), "B".to_string()]);
    }

    #[test]
    fn test_table_interrupted_by_text() {
        let units = classify("| A |\n| 1 |\nafterwards");
        assert_eq!(units.len(), 2);
        assert!(matches!(units[0], ContentUnit::Table { .. }));
        assert_eq!(units[1], ContentUnit::Paragraph { text: "afterwards".to_string() });
    }

    #[test]
    fn test_separator_only_table_is_dropped() {
        assert!(classify("|---|---|\n+--+--+").is_empty());
    }

    #[test]
    fn test_aligned_separator_row_dropped() {
        let units = classify("| A | B |\n|:---|---:|\n| 1 | 2 |");
        let rows = table_rows(&units[0]);
        assert_eq!(rows.len(), 2);
    }
}
