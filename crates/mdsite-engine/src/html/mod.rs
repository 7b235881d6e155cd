//! # Element Tree
//!
//! Intermediate render tree between inline spans and HTML text.
//!
//! - **`tag`**: `Tag`, the closed set of tags the renderer emits
//! - **`attributes`**: `Attributes`, one value per name, serialised in
//!   insertion order
//! - **`element`**: `Element` over `Leaf`, `ImageLeaf` and `Parent`, each
//!   validated at construction so `to_html` cannot fail
//! - **`convert`**: span → leaf mapping
//!
//! No escaping is applied to text or attribute values.

pub mod attributes;
pub mod convert;
pub mod element;
pub mod tag;

pub use attributes::Attributes;
pub use convert::{span_to_element, spans_to_elements};
pub use element::{Element, ImageLeaf, Leaf, Parent};
pub use tag::Tag;
