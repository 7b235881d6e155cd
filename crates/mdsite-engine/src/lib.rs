pub mod document;
pub mod error;
pub mod html;
pub mod parsing;
pub mod render;

// Re-export key types for easier usage
pub use document::{Document, RenderedDocument, render_document};
pub use error::RenderError;
pub use html::{Element, Tag};
pub use parsing::blocks::{Block, BlockType, markdown_to_blocks};
pub use parsing::inline::{Span, SpanKind, text_to_spans};
pub use render::{BlockRenderer, Diagnostic, DiagnosticKind};
