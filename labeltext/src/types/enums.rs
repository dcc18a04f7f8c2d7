#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// What an empty line segment turns into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyLinePolicy {
    /// Emit a single space so every line has a measurable width.
    #[default]
    Space,

    /// Emit an empty string.
    /// Only use this when the renderer draws zero-width lines correctly.
    Keep,
}

impl EmptyLinePolicy {
    /// The text emitted in place of an empty segment.
    pub fn placeholder(self) -> &'static str {
        match self {
            EmptyLinePolicy::Space => " ",
            EmptyLinePolicy::Keep => "",
        }
    }
}
