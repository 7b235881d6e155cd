use std::sync::OnceLock;

use regex::Regex;

/// Unordered (bullet) list block type.
pub struct UnorderedList;

impl UnorderedList {
    pub const MARKER: &'static str = "- ";

    pub fn matches(line: &str) -> bool {
        line.starts_with(Self::MARKER)
    }

    pub fn strip(line: &str) -> Option<&str> {
        line.strip_prefix(Self::MARKER)
    }
}

/// Ordered list block type.
///
/// Markers are positional: line `i` (1-based) must start with `"{i}. "`.
/// A list starting anywhere but 1, or skipping a number, is not a list.
pub struct OrderedList;

impl OrderedList {
    /// The marker expected on the 1-based line `index`.
    pub fn marker(index: usize) -> String {
        format!("{index}. ")
    }

    pub fn matches(line: &str, index: usize) -> bool {
        line.starts_with(&Self::marker(index))
    }

    pub fn strip(line: &str, index: usize) -> Option<&str> {
        line.strip_prefix(&Self::marker(index))
    }

    /// Whether `line` starts with any `"<digits>. "` marker, regardless of
    /// its position in the block.
    pub fn looks_like_item(line: &str) -> bool {
        static ITEM_REGEX: OnceLock<Regex> = OnceLock::new();
        ITEM_REGEX
            .get_or_init(|| Regex::new(r"^\d+\. ").expect("Invalid ordered list regex"))
            .is_match(line)
    }
}
