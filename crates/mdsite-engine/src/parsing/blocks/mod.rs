//! # Block Parsing
//!
//! ## Parsing Phases
//!
//! 1. **Segmentation** (`split`): the document is cut into maximal runs of
//!    non-blank lines. Blank lines only separate blocks and never appear
//!    inside one.
//! 2. **Classification** (`classify`): each run is matched line by line
//!    against the block syntaxes in fixed precedence order; the first match
//!    wins and `Paragraph` is the fallback.
//!
//! ## Modules
//!
//! - **`types`**: `Block` and `BlockType`
//! - **`kinds`**: block-specific types owning their delimiters (Heading,
//!   CodeFence, BlockQuote, UnorderedList, OrderedList)
//! - **`classify`**: `classify()` precedence dispatch
//! - **`split`**: `markdown_to_blocks()`
//!
//! ## Key Invariants
//!
//! - A block's type is derived once, at construction, from its content
//! - Fenced code blocks are raw zones: no inline parsing inside
//! - `start_line` is 1-based and counts blank lines

pub mod classify;
pub mod kinds;
pub mod split;
pub mod types;

pub use classify::classify;
pub use split::markdown_to_blocks;
pub use types::{Block, BlockType};
