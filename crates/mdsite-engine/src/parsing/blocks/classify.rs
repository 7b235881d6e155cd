use super::{
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
    types::BlockType,
};

/// Classifies a block's content into exactly one [`BlockType`].
///
/// Rules are tried in precedence order and the first match wins:
/// heading, code, quote, unordered list, ordered list, paragraph.
/// Every rule except heading and code must hold for every line.
pub fn classify(content: &str) -> BlockType {
    let lines: Vec<&str> = content.split('\n').collect();

    if let [line] = lines.as_slice()
        && let Some(level) = Heading::level(line)
    {
        return BlockType::Heading { level };
    }

    // Fence beats the per-line rules: a fenced body may contain anything.
    if CodeFence::body(content).is_some() {
        return BlockType::Code;
    }

    if lines.iter().all(|line| BlockQuote::matches(line)) {
        return BlockType::Quote;
    }

    if lines.iter().all(|line| UnorderedList::matches(line)) {
        return BlockType::UnorderedList;
    }

    if lines
        .iter()
        .enumerate()
        .all(|(i, line)| OrderedList::matches(line, i + 1))
    {
        return BlockType::OrderedList;
    }

    BlockType::Paragraph
}
