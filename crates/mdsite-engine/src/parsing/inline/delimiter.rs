use crate::error::RenderError;

use super::{
    kinds::Delimiter,
    types::{Span, SpanKind},
};

/// Splits every plain span containing `delimiter` into alternating plain and
/// styled spans.
///
/// Spans that are already typed pass through unchanged. Text outside each
/// delimiter pair stays `Plain`, text inside takes the delimiter's kind, and
/// empty segments are dropped. Delimiters match as exact substrings with no
/// nesting or escaping.
///
/// # Errors
/// [`RenderError::Syntax`] if a plain span holds an odd number of
/// delimiters.
pub fn split_delimiter(spans: Vec<Span>, delimiter: Delimiter) -> Result<Vec<Span>, RenderError> {
    let token = delimiter.as_str();
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() || !span.text().contains(token) {
            out.push(span);
            continue;
        }

        if span.text().matches(token).count() % 2 != 0 {
            return Err(RenderError::Syntax {
                delimiter: token,
                text: span.text().to_string(),
            });
        }

        for (i, part) in span.text().split(token).enumerate() {
            if part.is_empty() {
                continue;
            }
            let kind = if i % 2 == 0 {
                SpanKind::Plain
            } else {
                delimiter.span_kind()
            };
            out.push(Span::new(part, kind));
        }
    }

    Ok(out)
}
