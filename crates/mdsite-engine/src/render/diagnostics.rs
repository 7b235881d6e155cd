use std::{fmt, ops::RangeInclusive};

use crate::parsing::blocks::{
    Block,
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
};

/// What a suspicious paragraph line looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// Line starts with `#`.
    SuspectedHeading,
    /// Line contains a ``` fence.
    SuspectedCodeFence,
    /// Line starts with `> `.
    SuspectedQuote,
    /// Line starts with `- ` or `<digits>. `.
    SuspectedList,
}

impl DiagnosticKind {
    fn describe(self) -> &'static str {
        match self {
            DiagnosticKind::SuspectedHeading => "a heading",
            DiagnosticKind::SuspectedCodeFence => "a code block",
            DiagnosticKind::SuspectedQuote => "a quote",
            DiagnosticKind::SuspectedList => "a list",
        }
    }

    fn hint(self) -> &'static str {
        match self {
            DiagnosticKind::SuspectedHeading => {
                "headings are a single line of 1-6 '#' and a space, separated from other blocks by blank lines"
            }
            DiagnosticKind::SuspectedCodeFence => {
                "code blocks open and close with a line of exactly ``` and are separated from other blocks by blank lines"
            }
            DiagnosticKind::SuspectedQuote => {
                "every line of a quote must start with '> ' and the quote must be separated from other blocks by blank lines"
            }
            DiagnosticKind::SuspectedList => {
                "every line of a list must start with '- ' or '1. ', '2. ', ... in order, and the list must be separated from other blocks by blank lines"
            }
        }
    }
}

/// A soft warning raised while rendering.
///
/// A paragraph whose lines look like another block type usually means a
/// missing blank line upstream. Rendering continues as a paragraph; the
/// caller decides whether to ignore, log or reject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    /// Source lines of the whole block (1-based, inclusive).
    pub lines: RangeInclusive<usize>,
    /// The first offending line.
    pub line: usize,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "lines {}-{}: {}",
            self.lines.start(),
            self.lines.end(),
            self.message
        )
    }
}

/// Re-scans a paragraph for lines that look like other block syntax.
///
/// Stops at the first suspicious line, so a block yields at most one
/// diagnostic.
pub fn scan_paragraph(block: &Block) -> Option<Diagnostic> {
    block.lines().enumerate().find_map(|(offset, line)| {
        let kind = suspect(line)?;
        let line = block.start_line() + offset;
        Some(Diagnostic {
            kind,
            lines: block.start_line()..=block.end_line(),
            line,
            message: format!(
                "paragraph appears to contain {} at line {line}; {}",
                kind.describe(),
                kind.hint()
            ),
        })
    })
}

fn suspect(line: &str) -> Option<DiagnosticKind> {
    if line.starts_with(Heading::MARKER) {
        Some(DiagnosticKind::SuspectedHeading)
    } else if line.contains(CodeFence::FENCE) {
        Some(DiagnosticKind::SuspectedCodeFence)
    } else if BlockQuote::matches(line) {
        Some(DiagnosticKind::SuspectedQuote)
    } else if UnorderedList::matches(line) || OrderedList::looks_like_item(line) {
        Some(DiagnosticKind::SuspectedList)
    } else {
        None
    }
}
