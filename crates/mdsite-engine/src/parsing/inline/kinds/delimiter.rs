use crate::parsing::inline::types::SpanKind;

/// A pairwise inline style delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    /// `**bold**`
    Bold,
    /// `_italic_`
    Italic,
    /// `` `code` ``
    Code,
}

impl Delimiter {
    /// Order in which the delimiter passes run over a block's text.
    pub const PIPELINE: [Delimiter; 3] = [Delimiter::Bold, Delimiter::Italic, Delimiter::Code];

    pub fn as_str(self) -> &'static str {
        match self {
            Delimiter::Bold => "**",
            Delimiter::Italic => "_",
            Delimiter::Code => "`",
        }
    }

    /// The span kind given to text enclosed by this delimiter.
    pub fn span_kind(self) -> SpanKind {
        match self {
            Delimiter::Bold => SpanKind::Bold,
            Delimiter::Italic => SpanKind::Italic,
            Delimiter::Code => SpanKind::Code,
        }
    }
}
