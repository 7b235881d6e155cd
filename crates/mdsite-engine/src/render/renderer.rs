use crate::{
    error::RenderError,
    html::{Element, Leaf, Parent, Tag, spans_to_elements},
    parsing::{
        blocks::{
            Block, BlockType,
            kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
        },
        inline::text_to_spans,
    },
};

use super::diagnostics::{Diagnostic, scan_paragraph};

/// Renders blocks into element trees, collecting paragraph diagnostics.
///
/// Every block is wrapped in a [`BlockRenderer::CONTAINER`] so block
/// boundaries survive in the output. Rendering reads the block and never
/// mutates it, so rendering the same block twice gives the same element.
#[derive(Debug, Default)]
pub struct BlockRenderer {
    diagnostics: Vec<Diagnostic>,
}

impl BlockRenderer {
    pub const CONTAINER: Tag = Tag::Div;

    pub fn new() -> Self {
        Self::default()
    }

    /// Renders one block wrapped in its container element.
    ///
    /// # Errors
    /// Any inline [`RenderError::Syntax`] or element validation error from
    /// the block's content.
    pub fn render(&mut self, block: &Block) -> Result<Element, RenderError> {
        let body = self.render_body(block)?;
        Ok(Parent::new(Self::CONTAINER, vec![body])?.into())
    }

    /// Renders one block without the container.
    pub fn render_body(&mut self, block: &Block) -> Result<Element, RenderError> {
        log::debug!(
            "rendering {:?} block at lines {}-{}",
            block.block_type(),
            block.start_line(),
            block.end_line()
        );
        match block.block_type() {
            BlockType::Heading { .. } => heading(block),
            BlockType::Code => code(block),
            BlockType::Quote => quote(block),
            BlockType::UnorderedList => unordered_list(block),
            BlockType::OrderedList => ordered_list(block),
            BlockType::Paragraph => {
                if let Some(diagnostic) = scan_paragraph(block) {
                    log::debug!("{diagnostic}");
                    self.diagnostics.push(diagnostic);
                }
                paragraph(block)
            }
        }
    }

    /// Diagnostics raised so far.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

/// Inline-parses `text` into child elements.
fn inline(text: &str) -> Result<Vec<Element>, RenderError> {
    spans_to_elements(&text_to_spans(text)?)
}

fn parent(tag: Tag, children: Vec<Element>) -> Result<Element, RenderError> {
    Ok(Parent::new(tag, children)?.into())
}

fn malformed(block: &Block, what: &str) -> RenderError {
    RenderError::MalformedElement(format!(
        "{what} at lines {}-{}",
        block.start_line(),
        block.end_line()
    ))
}

fn heading(block: &Block) -> Result<Element, RenderError> {
    let (level, text) =
        Heading::strip(block.content()).ok_or_else(|| malformed(block, "heading marker missing"))?;
    let tag = Tag::heading(level).ok_or_else(|| malformed(block, "heading level out of range"))?;
    parent(tag, inline(text)?)
}

fn code(block: &Block) -> Result<Element, RenderError> {
    let body =
        CodeFence::body(block.content()).ok_or_else(|| malformed(block, "unclosed code fence"))?;
    if body.is_empty() {
        return Err(malformed(block, "empty code block"));
    }
    // Raw zone: no inline parsing.
    let code = Leaf::new(Some(Tag::Code), body)?;
    parent(Tag::Pre, vec![code.into()])
}

fn quote(block: &Block) -> Result<Element, RenderError> {
    let text = block
        .lines()
        .map(|line| BlockQuote::strip(line).unwrap_or(line))
        .collect::<Vec<_>>()
        .join("\n");
    parent(Tag::Blockquote, inline(&text)?)
}

fn unordered_list(block: &Block) -> Result<Element, RenderError> {
    let items = block
        .lines()
        .map(|line| list_item(UnorderedList::strip(line).unwrap_or(line)))
        .collect::<Result<Vec<_>, _>>()?;
    parent(Tag::Ul, items)
}

fn ordered_list(block: &Block) -> Result<Element, RenderError> {
    let items = block
        .lines()
        .enumerate()
        .map(|(i, line)| list_item(OrderedList::strip(line, i + 1).unwrap_or(line)))
        .collect::<Result<Vec<_>, _>>()?;
    parent(Tag::Ol, items)
}

fn list_item(text: &str) -> Result<Element, RenderError> {
    parent(Tag::Li, inline(text)?)
}

fn paragraph(block: &Block) -> Result<Element, RenderError> {
    parent(Tag::P, inline(block.content())?)
}
