/// Blockquote block type with owned delimiter constant.
///
/// Every line of a quote block carries the prefix; nested quotes are not
/// recognised.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote line prefix, including its separating space.
    pub const PREFIX: &'static str = "> ";

    pub fn matches(line: &str) -> bool {
        line.starts_with(Self::PREFIX)
    }

    /// Strips one quote prefix from a line.
    pub fn strip(line: &str) -> Option<&str> {
        line.strip_prefix(Self::PREFIX)
    }
}
