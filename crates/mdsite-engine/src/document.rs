//! Whole-document assembly: title extraction and body rendering.

use crate::{
    error::RenderError,
    parsing::blocks::{Block, BlockType, markdown_to_blocks},
    render::{BlockRenderer, Diagnostic},
};

/// A parsed markdown document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    blocks: Vec<Block>,
}

/// Output of a successful render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    /// Text of the first level-1 heading.
    pub title: String,
    /// One `<div>` per block, joined by `\n`.
    pub body_html: String,
    /// Soft warnings, in block order.
    pub diagnostics: Vec<Diagnostic>,
}

impl Document {
    const TITLE_MARKER: &'static str = "# ";

    pub fn parse(markdown: &str) -> Self {
        Self {
            blocks: markdown_to_blocks(markdown),
        }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// The text of the first level-1 heading block.
    ///
    /// # Errors
    /// [`RenderError::MissingTitle`] when no block is a level-1 heading.
    pub fn title(&self) -> Result<&str, RenderError> {
        self.blocks
            .iter()
            .filter(|block| block.block_type() == BlockType::Heading { level: 1 })
            .find_map(|block| block.content().strip_prefix(Self::TITLE_MARKER))
            .ok_or(RenderError::MissingTitle)
    }

    /// Renders every block in order.
    ///
    /// The title is resolved first, so a document without one fails before
    /// any block is rendered. The first block error aborts the whole render.
    pub fn render(&self) -> Result<RenderedDocument, RenderError> {
        let title = self.title()?.to_string();

        let mut renderer = BlockRenderer::new();
        let mut fragments = Vec::with_capacity(self.blocks.len());
        for block in &self.blocks {
            let element = renderer.render(block).inspect_err(|e| {
                log::debug!(
                    "render failed at lines {}-{}: {e}",
                    block.start_line(),
                    block.end_line()
                )
            })?;
            fragments.push(element.to_html());
        }

        log::debug!("rendered {} blocks for {title:?}", fragments.len());
        Ok(RenderedDocument {
            title,
            body_html: fragments.join("\n"),
            diagnostics: renderer.into_diagnostics(),
        })
    }
}

/// Parses and renders a markdown document in one call.
pub fn render_document(markdown: &str) -> Result<RenderedDocument, RenderError> {
    Document::parse(markdown).render()
}
