/// The styling or link classification of a [`Span`].
///
/// `Link` and `Image` carry their destination, so a target exists exactly
/// when the span is a link or an image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpanKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link { url: String },
    Image { url: String },
}

/// A contiguous inline run of text with one classification.
///
/// For images `text` is the alt text. Spans are immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    text: String,
    kind: SpanKind,
}

impl Span {
    pub fn new(text: impl Into<String>, kind: SpanKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, SpanKind::Plain)
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(text, SpanKind::Link { url: url.into() })
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(alt, SpanKind::Image { url: url.into() })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> &SpanKind {
        &self.kind
    }

    /// The link or image destination, if this span has one.
    pub fn target(&self) -> Option<&str> {
        match &self.kind {
            SpanKind::Link { url } | SpanKind::Image { url } => Some(url),
            SpanKind::Plain | SpanKind::Bold | SpanKind::Italic | SpanKind::Code => None,
        }
    }

    pub fn is_plain(&self) -> bool {
        matches!(self.kind, SpanKind::Plain)
    }
}
