/// Inline image `![alt](url)`.
///
/// Alt text runs to the nearest `](`; there is no escaping or nesting
/// support, so `]` inside alt text is fine as long as `(` does not follow it.
pub struct Image;

impl Image {
    pub const OPEN: &'static [u8; 2] = b"![";
    pub const ALT_CLOSE: &'static [u8; 2] = b"](";
}

/// Inline link `[text](url)`.
///
/// Link text may contain one level of balanced brackets:
/// `[see [docs]](url)` is a link with text `see [docs]`.
pub struct Link;

impl Link {
    pub const OPEN: u8 = b'[';
    pub const CLOSE: u8 = b']';
    pub const URL_OPEN: u8 = b'(';
    /// The URL runs to the nearest `)`, so it cannot itself contain one.
    pub const URL_CLOSE: u8 = b')';
    /// Outer brackets plus one nested level.
    pub const MAX_DEPTH: usize = 2;
}
