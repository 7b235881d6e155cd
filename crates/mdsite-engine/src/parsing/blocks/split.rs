use super::types::Block;

/// Splits markdown source into blocks on blank-line boundaries.
///
/// A blank line is empty after trimming whitespace. Blank lines advance the
/// line counter but never produce a block, so each block's `start_line` is
/// the 1-based source line of its first line.
pub fn markdown_to_blocks(markdown: &str) -> Vec<Block> {
    let mut splitter = BlockSplitter::new();
    for (index, line) in markdown.lines().enumerate() {
        splitter.push(index + 1, line);
    }
    splitter.finish()
}

/// Accumulates the current run of non-blank lines.
struct BlockSplitter<'a> {
    run: Vec<&'a str>,
    run_start: usize,
    out: Vec<Block>,
}

impl<'a> BlockSplitter<'a> {
    fn new() -> Self {
        Self {
            run: vec![],
            run_start: 0,
            out: vec![],
        }
    }

    fn push(&mut self, line_number: usize, line: &'a str) {
        if line.trim().is_empty() {
            self.flush();
            return;
        }
        if self.run.is_empty() {
            self.run_start = line_number;
        }
        self.run.push(line);
    }

    fn finish(mut self) -> Vec<Block> {
        // EOF flush
        self.flush();
        self.out
    }

    fn flush(&mut self) {
        if self.run.is_empty() {
            return;
        }
        let content = self.run.join("\n");
        self.run.clear();

        let block = Block::new(content.trim(), self.run_start);
        log::debug!(
            "block at lines {}-{} classified as {:?}",
            block.start_line(),
            block.end_line(),
            block.block_type()
        );
        self.out.push(block);
    }
}
