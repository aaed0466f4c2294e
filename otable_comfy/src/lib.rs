// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `comfy-table` backed table rendering.
//!
//! This crate implements [`otable_core::TableFormatter`] using `comfy-table`, adding
//! box-drawing borders, markdown output, and width-aware wrapping on top of what
//! [`otable_core::PlainFormatter`] offers.
//!
//! ```
//! use otable_comfy::{ComfyFormatter, Preset, TableStyle};
//! use otable_core::{TableFormatter, Value};
//!
//! let formatter =
//!     ComfyFormatter::new().with_style(TableStyle::default().with_preset(Preset::Ascii));
//! let text = formatter.format(&["name"], &[vec![Value::from("Ralf")]]);
//! assert!(text.contains("Ralf"));
//! ```

mod style;

use comfy_table::{Cell, ContentArrangement, Table};
use otable_core::{TableFormatter, Value};

pub use style::{Arrangement, Preset, TableStyle};

/// A [`TableFormatter`] backed by `comfy-table`.
#[derive(Clone, Debug, Default)]
pub struct ComfyFormatter {
    style: TableStyle,
}

impl ComfyFormatter {
    /// Creates a formatter with the default [`TableStyle`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the style.
    #[must_use]
    pub fn with_style(mut self, style: TableStyle) -> Self {
        self.style = style;
        self
    }

    /// The current style.
    pub fn style(&self) -> &TableStyle {
        &self.style
    }

    fn cell(&self, value: &Value) -> Cell {
        match value {
            Value::Null => Cell::new(&self.style.null_text),
            other => Cell::new(other),
        }
    }

    fn table(&self) -> Table {
        let style = &self.style;
        let mut table = Table::new();
        table.load_preset(style.preset.as_comfy());
        if style.rounded_corners && style.preset == Preset::Utf8 {
            table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
        }
        table.set_content_arrangement(match style.arrangement {
            Arrangement::Disabled => ContentArrangement::Disabled,
            Arrangement::Dynamic => ContentArrangement::Dynamic,
        });
        if let Some(width) = style.max_width {
            table.set_width(width);
        }
        tracing::trace!(?style, "configured comfy table");
        table
    }
}

impl TableFormatter for ComfyFormatter {
    fn format(&self, header: &[&str], rows: &[Vec<Value>]) -> String {
        tracing::debug!(
            columns = header.len(),
            rows = rows.len(),
            preset = ?self.style.preset,
            "rendering table"
        );
        let mut table = self.table();
        table.set_header(header.iter().map(Cell::new));
        for row in rows {
            table.add_row(row.iter().map(|value| self.cell(value)));
        }
        table.to_string()
    }
}
