use crate::error::RenderError;

use super::{
    delimiter::split_delimiter,
    kinds::Delimiter,
    links::{extract_images, extract_links},
    types::Span,
};

/// Parses a block's text into inline spans.
///
/// Runs the delimiter passes in [`Delimiter::PIPELINE`] order, then images,
/// then links.
///
/// # Errors
/// [`RenderError::Syntax`] on the first unbalanced delimiter.
pub fn text_to_spans(text: &str) -> Result<Vec<Span>, RenderError> {
    let mut spans = vec![Span::plain(text)];
    for delimiter in Delimiter::PIPELINE {
        spans = split_delimiter(spans, delimiter)?;
    }
    let spans = extract_images(spans);
    Ok(extract_links(spans))
}
