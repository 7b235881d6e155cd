//! # Block Rendering
//!
//! Turns classified [`Block`](crate::parsing::blocks::Block)s into element
//! trees.
//!
//! - **`renderer`**: `BlockRenderer`, one strategy per `BlockType`, each a
//!   pure function of the block's immutable content
//! - **`diagnostics`**: soft warnings for paragraphs that look like they hold
//!   another block type, collected per render call and left to the caller
//!   to report

pub mod diagnostics;
pub mod renderer;

pub use diagnostics::{Diagnostic, DiagnosticKind, scan_paragraph};
pub use renderer::BlockRenderer;
