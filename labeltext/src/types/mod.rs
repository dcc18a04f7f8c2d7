mod enums;

pub use enums::{EmptyLinePolicy, TextAlign};
