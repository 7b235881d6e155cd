use super::classify::classify;

/// The structural type of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockType {
    /// A single-line ATX heading.
    Heading {
        /// Number of `#` markers (1-6).
        level: u8,
    },
    /// A fenced code block (```), kept verbatim.
    Code,
    /// Every line starts with `> `.
    Quote,
    /// Every line starts with `- `.
    UnorderedList,
    /// Line `i` starts with `i. `, counting from 1.
    OrderedList,
    /// Default when no other block syntax matches.
    Paragraph,
}

/// A maximal run of non-blank source lines with its derived type.
///
/// Blocks are immutable: the type is classified once from `content` at
/// construction and rendering never rewrites the content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    content: String,
    start_line: usize,
    block_type: BlockType,
}

impl Block {
    /// Creates a block from its joined lines and the 1-based line number of
    /// its first line, classifying it immediately.
    pub fn new(content: impl Into<String>, start_line: usize) -> Self {
        let content = content.into();
        let block_type = classify(&content);
        Self {
            content,
            start_line,
            block_type,
        }
    }

    /// The block's lines joined by `\n`.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// 1-based line number of the block's first line.
    pub fn start_line(&self) -> usize {
        self.start_line
    }

    /// 1-based line number of the block's last line.
    pub fn end_line(&self) -> usize {
        self.start_line + self.content.matches('\n').count()
    }

    pub fn block_type(&self) -> BlockType {
        self.block_type
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.content.split('\n')
    }
}
