//! # Parsing
//!
//! Two-stage pipeline turning markdown text into typed units ready for the
//! element tree builder.
//!
//! 1. **Blocks** (`blocks`): the source is split on blank lines into
//!    [`Block`](blocks::Block)s, each classified into exactly one
//!    [`BlockType`](blocks::BlockType) by looking at every line of the block.
//! 2. **Inline** (`inline`): the text left after a block's markup is stripped
//!    is split into [`Span`](inline::Span)s (plain, bold, italic, code, link,
//!    image).
//!
//! Both stages only look at local lexical context. Nothing here allocates
//! elements or emits HTML; see [`crate::html`] and [`crate::render`].

pub mod blocks;
pub mod inline;
