/// How consecutive blocks are separated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spacing {
    /// Blocks follow each other directly.
    Tight,
    /// Every block is followed by an empty line.
    BlankLine,
}

/// A group of lines rendered together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Block {
    lines: Vec<String>,
}

impl Block {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a line; returns `self` for chaining.
    #[must_use]
    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Wraps the block in `\begin{env}` / `\end{env}` when `env` is given.
    #[must_use]
    pub fn wrapped(self, env: Option<&str>) -> Self {
        match env {
            Some(env) => {
                let mut lines = Vec::with_capacity(self.lines.len() + 2);
                lines.push(format!("\\begin{{{env}}}"));
                lines.extend(self.lines);
                lines.push(format!("\\end{{{env}}}"));
                Self { lines }
            }
            None => self,
        }
    }
}

/// Ordered blocks plus an optional closing token written without a newline.
///
/// Every line is terminated by `\n`; block separation follows [`Spacing`].
#[derive(Debug, Clone)]
pub struct Document {
    blocks: Vec<Block>,
    spacing: Spacing,
    trailer: Option<String>,
}

impl Document {
    pub const fn new(spacing: Spacing) -> Self {
        Self {
            blocks: Vec::new(),
            spacing,
            trailer: None,
        }
    }

    /// Adds a block; empty blocks are dropped.
    pub fn push(&mut self, block: Block) {
        if !block.is_empty() {
            self.blocks.push(block);
        }
    }

    pub fn set_trailer(&mut self, trailer: impl Into<String>) {
        self.trailer = Some(trailer.into());
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        for block in &self.blocks {
            for line in &block.lines {
                out.push_str(line);
                out.push('\n');
            }
            if self.spacing == Spacing::BlankLine {
                out.push('\n');
            }
        }

        if let Some(trailer) = &self.trailer {
            out.push_str(trailer);
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tight_spacing() {
        let mut doc = Document::new(Spacing::Tight);
        doc.push(Block::new().line("X."));
        doc.push(Block::new().line("Y."));
        assert_eq!(doc.render(), "X.\nY.\n");
    }

    #[test]
    fn test_blank_line_spacing_with_trailer() {
        let mut doc = Document::new(Spacing::BlankLine);
        doc.push(Block::new().line("a").line("b"));
        doc.push(Block::new().line("c"));
        doc.set_trailer("end");
        assert_eq!(doc.render(), "a\nb\n\nc\n\nend");
    }

    #[test]
    fn test_empty_blocks_are_dropped() {
        let mut doc = Document::new(Spacing::BlankLine);
        doc.push(Block::new());
        doc.push(Block::new().line("only"));
        assert_eq!(doc.render(), "only\n\n");
    }

    #[test]
    fn test_wrapped_in_environment() {
        let block = Block::new().line("Bonjour.").wrapped(Some("french"));
        let mut doc = Document::new(Spacing::Tight);
        doc.push(block);
        assert_eq!(doc.render(), "\\begin{french}\nBonjour.\n\\end{french}\n");

        let plain = Block::new().line("x").wrapped(None);
        assert_eq!(plain, Block::new().line("x"));
    }
}
