use crate::{
    error::RenderError,
    parsing::inline::{Span, SpanKind},
};

use super::{
    attributes::Attributes,
    element::{Element, ImageLeaf, Leaf},
    tag::Tag,
};

/// Maps one inline span to its leaf element.
///
/// | kind   | element                            |
/// |--------|------------------------------------|
/// | Plain  | untagged text                      |
/// | Bold   | `<b>`                              |
/// | Italic | `<i>`                              |
/// | Code   | `<code>`                           |
/// | Link   | `<a href="url">`                   |
/// | Image  | `<img src="url" alt="text" />`     |
///
/// # Errors
/// [`RenderError::MalformedElement`] for an empty non-image span and
/// [`RenderError::MissingAttribute`] for a link or image without a URL.
pub fn span_to_element(span: &Span) -> Result<Element, RenderError> {
    let text = span.text();
    let element = match span.kind() {
        SpanKind::Plain => Leaf::text(text)?.into(),
        SpanKind::Bold => Leaf::new(Some(Tag::B), text)?.into(),
        SpanKind::Italic => Leaf::new(Some(Tag::I), text)?.into(),
        SpanKind::Code => Leaf::new(Some(Tag::Code), text)?.into(),
        SpanKind::Link { url } => {
            if url.is_empty() {
                return Err(RenderError::MissingAttribute {
                    tag: Tag::A.as_str(),
                    attribute: "href",
                });
            }
            let attrs = Attributes::new().with("href", url.as_str());
            Leaf::with_attrs(Some(Tag::A), text, attrs)?.into()
        }
        SpanKind::Image { url } => ImageLeaf::new(url.as_str(), text)?.into(),
    };
    Ok(element)
}

/// Maps spans to leaves, stopping at the first invalid span.
pub fn spans_to_elements(spans: &[Span]) -> Result<Vec<Element>, RenderError> {
    spans.iter().map(span_to_element).collect()
}
