// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rendering configuration.

use std::sync::Arc;

/// Border characters used when drawing the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Preset {
    /// `+`, `-` and `|` borders around every cell.
    Ascii,
    /// Box-drawing borders around every cell.
    #[default]
    Utf8,
    /// A GitHub-flavored markdown table.
    Markdown,
    /// No borders; columns separated by spaces.
    Borderless,
}

impl Preset {
    pub(crate) fn as_comfy(self) -> &'static str {
        match self {
            Self::Ascii => comfy_table::presets::ASCII_FULL,
            Self::Utf8 => comfy_table::presets::UTF8_FULL,
            Self::Markdown => comfy_table::presets::ASCII_MARKDOWN,
            Self::Borderless => comfy_table::presets::NOTHING,
        }
    }
}

/// How column widths respond to the available width.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Arrangement {
    /// Every column is as wide as its widest cell.
    Disabled,
    /// Cells wrap to fit the terminal, or [`TableStyle::max_width`] when set.
    #[default]
    Dynamic,
}

/// Configuration for [`ComfyFormatter`](crate::ComfyFormatter).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableStyle {
    /// Border characters.
    pub preset: Preset,
    /// Round the outer corners. Only affects [`Preset::Utf8`].
    pub rounded_corners: bool,
    /// Column width policy.
    pub arrangement: Arrangement,
    /// Maximum table width in characters, for [`Arrangement::Dynamic`].
    pub max_width: Option<u16>,
    /// Text shown for null values.
    pub null_text: Arc<str>,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            preset: Preset::default(),
            rounded_corners: true,
            arrangement: Arrangement::default(),
            max_width: None,
            null_text: Arc::from("null"),
        }
    }
}

impl TableStyle {
    /// Sets the border preset.
    #[must_use]
    pub fn with_preset(mut self, preset: Preset) -> Self {
        self.preset = preset;
        self
    }

    /// Sets whether UTF-8 borders get rounded corners.
    #[must_use]
    pub fn with_rounded_corners(mut self, rounded_corners: bool) -> Self {
        self.rounded_corners = rounded_corners;
        self
    }

    /// Sets the column width policy.
    #[must_use]
    pub fn with_arrangement(mut self, arrangement: Arrangement) -> Self {
        self.arrangement = arrangement;
        self
    }

    /// Caps the table width. Implies [`Arrangement::Dynamic`].
    #[must_use]
    pub fn with_max_width(mut self, max_width: u16) -> Self {
        self.max_width = Some(max_width);
        self.arrangement = Arrangement::Dynamic;
        self
    }

    /// Sets the text shown for null values.
    #[must_use]
    pub fn with_null_text(mut self, null_text: impl Into<Arc<str>>) -> Self {
        self.null_text = null_text.into();
        self
    }
}
