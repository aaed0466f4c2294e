// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text rendering hooks for tables.
//!
//! A table only supplies its header and the display values of each row; drawing the
//! grid is up to a [`TableFormatter`]. [`PlainFormatter`] is a dependency-free ASCII
//! fallback. The `otable_comfy` crate provides a richer one.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;

use crate::value::Value;

/// Turns a header and rows of display values into text.
pub trait TableFormatter {
    /// Formats one table.
    ///
    /// Every row is expected to have one value per header entry.
    fn format(&self, header: &[&str], rows: &[Vec<Value>]) -> String;
}

/// A minimal ASCII grid.
///
/// ```text
/// +--------+------+
/// | name   | legs |
/// +========+======+
/// | Ralf   | 4    |
/// +--------+------+
/// ```
///
/// Cells are left-aligned and widths are counted in `char`s.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlainFormatter;

impl TableFormatter for PlainFormatter {
    fn format(&self, header: &[&str], rows: &[Vec<Value>]) -> String {
        let cells: Vec<Vec<String>> = rows
            .iter()
            .map(|row| row.iter().map(ToString::to_string).collect())
            .collect();

        let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
        for row in &cells {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let mut lines = vec![
            rule(&widths, '-'),
            line(&widths, header.iter().copied()),
            rule(&widths, '='),
        ];
        lines.extend(
            cells
                .iter()
                .map(|row| line(&widths, row.iter().map(String::as_str))),
        );
        lines.push(rule(&widths, '-'));
        lines.join("\n")
    }
}

fn rule(widths: &[usize], fill: char) -> String {
    let mut out = String::from("+");
    for &width in widths {
        out.extend(core::iter::repeat_n(fill, width + 2));
        out.push('+');
    }
    out
}

fn line<'a>(widths: &[usize], mut cells: impl Iterator<Item = &'a str>) -> String {
    let mut out = String::from("|");
    for &width in widths {
        let cell = cells.next().unwrap_or("");
        out.push(' ');
        out.push_str(cell);
        out.extend(core::iter::repeat_n(' ', width.saturating_sub(cell.chars().count())));
        out.push_str(" |");
    }
    out
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn pads_cells_to_the_widest_entry() {
        let text = PlainFormatter.format(
            &["name", "legs"],
            &[
                vec![Value::from("Ralf"), Value::Int(4)],
                vec![Value::from("Tripod"), Value::Int(3)],
            ],
        );
        assert_eq!(
            text,
            "+--------+------+\n\
             | name   | legs |\n\
             +========+======+\n\
             | Ralf   | 4    |\n\
             | Tripod | 3    |\n\
             +--------+------+"
        );
    }

    #[test]
    fn empty_body_keeps_the_header() {
        let text = PlainFormatter.format(&["id"], &[]);
        assert_eq!(text, "+----+\n| id |\n+====+\n+----+");
    }

    #[test]
    fn widths_count_chars_not_bytes() {
        let text = PlainFormatter.format(&["n"], &[vec![Value::from("\u{e9}t\u{e9}")]]);
        assert!(
            text.contains("| \u{e9}t\u{e9} |"),
            "three chars need no padding: {text}"
        );
    }
}
