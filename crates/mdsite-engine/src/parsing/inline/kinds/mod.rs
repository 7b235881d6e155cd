//! # Inline Kinds
//!
//! Inline syntaxes that own their delimiter constants. The scanners in
//! `delimiter` and `links` use these constants and never hardcode `**`,
//! `![` or `](`.
//!
//! - **`Delimiter`**: pairwise style delimiters in pipeline order
//! - **`Image`**: `OPEN = b"!["`, `ALT_CLOSE = b"]("`
//! - **`Link`**: bracket bytes and the nesting limit for link text

pub mod delimiter;
pub mod link;

pub use delimiter::Delimiter;
pub use link::{Image, Link};
