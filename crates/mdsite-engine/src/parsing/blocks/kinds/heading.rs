use std::sync::OnceLock;

use regex::Regex;

/// ATX heading block type with owned marker constants.
///
/// All heading syntax knowledge lives here: a single line opening with one
/// to six `#` characters followed by a space.
pub struct Heading;

impl Heading {
    /// The heading marker character.
    pub const MARKER: char = '#';
    /// Deepest heading level (`<h6>`).
    pub const MAX_LEVEL: u8 = 6;

    fn pattern() -> &'static Regex {
        static HEADING_REGEX: OnceLock<Regex> = OnceLock::new();
        HEADING_REGEX.get_or_init(|| {
            Regex::new(&format!(r"^(#{{1,{}}}) ", Self::MAX_LEVEL)).expect("Invalid heading regex")
        })
    }

    /// Returns the heading level if `line` opens with 1-6 `#` and a space.
    pub fn level(line: &str) -> Option<u8> {
        Self::pattern()
            .captures(line)
            .map(|caps| caps[1].len() as u8)
    }

    /// Splits a heading line into its level and the text after `#… `.
    pub fn strip(line: &str) -> Option<(u8, &str)> {
        let level = Self::level(line)?;
        Some((level, &line[usize::from(level) + 1..]))
    }
}
