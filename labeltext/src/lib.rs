pub mod config;
pub mod error;
pub mod label;
pub mod lines;
pub mod text;
pub mod types;

pub use config::{SplitConfig, DEFAULT_MAX_LINES};
pub use error::SplitError;
pub use label::{LabelLayout, PlacedLine};
pub use lines::{count_lines, split_lines, LineSplitter, Lines};
pub use types::*;
