//! # Inline Parsing
//!
//! Turns the text of one block (markup already stripped) into an ordered
//! sequence of [`Span`]s.
//!
//! ## Pipeline
//!
//! Each pass only rewrites spans that are still `Plain`; spans typed by an
//! earlier pass go through untouched.
//!
//! 1. `**` → Bold, `_` → Italic, `` ` `` → Code (`delimiter::split_delimiter`)
//! 2. `![alt](url)` → Image (`links::extract_images`)
//! 3. `[text](url)` → Link (`links::extract_links`)
//!
//! Images run before links so that `![...](...)` is never half-consumed as a
//! link.
//!
//! ## Modules
//!
//! - **`types`**: `Span` and `SpanKind`
//! - **`kinds`**: inline syntaxes with owned delimiters (Delimiter, Image, Link)
//! - **`cursor`**: byte `Cursor` used by the bracket scanners
//! - **`delimiter`**: pairwise delimiter splitting
//! - **`links`**: bracket-matching image and link extraction
//! - **`parser`**: `text_to_spans()` entry point

pub mod cursor;
pub mod delimiter;
pub mod kinds;
pub mod links;
pub mod parser;
pub mod types;

pub use delimiter::split_delimiter;
pub use kinds::Delimiter;
pub use links::{extract_images, extract_links};
pub use parser::text_to_spans;
pub use types::{Span, SpanKind};
