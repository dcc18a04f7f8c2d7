//! Multi-line label layout.
//!
//! A label is split into lines, each line is measured, and the renderer
//! asks for the x offset of a line inside the box it draws into.

use crate::config::SplitConfig;
use crate::error::SplitError;
use crate::lines::{LineSplitter, Lines};
use crate::text::{align_offset, display_width};
use crate::types::TextAlign;

/// A single measured line of a label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedLine {
    pub text: String,
    /// Width in terminal cells.
    pub width: usize,
}

/// Split and measured label text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelLayout {
    lines: Vec<PlacedLine>,
    align: TextAlign,
    width: usize,
}

impl LabelLayout {
    pub fn new(text: &str, align: TextAlign, config: SplitConfig) -> Result<Self, SplitError> {
        let lines = LineSplitter::new(config).split(text)?;
        Ok(Self::from_lines(lines, align))
    }

    pub fn from_lines(lines: Lines, align: TextAlign) -> Self {
        let lines: Vec<PlacedLine> = lines
            .into_iter()
            .map(|text| {
                let width = display_width(&text);
                PlacedLine { text, width }
            })
            .collect();
        let width = lines.iter().map(|l| l.width).max().unwrap_or(0);

        log::trace!(
            "[label] Laid out {} lines, widest {} cells",
            lines.len(),
            width
        );

        Self {
            lines,
            align,
            width,
        }
    }

    pub fn lines(&self) -> &[PlacedLine] {
        &self.lines
    }

    pub fn align(&self) -> TextAlign {
        self.align
    }

    /// Width of the widest line.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of lines.
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// X offset of line `index` inside a box `available_width` cells wide.
    pub fn offset(&self, index: usize, available_width: usize) -> Option<usize> {
        self.lines
            .get(index)
            .map(|line| align_offset(line.width, available_width, self.align))
    }

    pub fn into_lines(self) -> Lines {
        Lines::from_vec(self.lines.into_iter().map(|line| line.text).collect())
    }
}
