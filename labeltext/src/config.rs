//! Splitter configuration types.

use crate::types::EmptyLinePolicy;

/// Default maximum number of lines a single split may produce.
pub const DEFAULT_MAX_LINES: usize = 512;

/// Configuration for a [`LineSplitter`](crate::LineSplitter).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitConfig {
    /// Maximum number of lines (None = unlimited).
    /// Text with more lines is rejected before anything is allocated.
    pub max_lines: Option<usize>,

    /// What empty line segments become.
    pub empty_line: EmptyLinePolicy,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            max_lines: Some(DEFAULT_MAX_LINES),
            empty_line: EmptyLinePolicy::default(),
        }
    }
}

impl SplitConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of lines.
    pub fn max_lines(mut self, max: usize) -> Self {
        self.max_lines = Some(max);
        self
    }

    /// Remove the line limit.
    pub fn unbounded(mut self) -> Self {
        self.max_lines = None;
        self
    }

    /// Set the empty line policy.
    pub fn empty_line(mut self, policy: EmptyLinePolicy) -> Self {
        self.empty_line = policy;
        self
    }
}
