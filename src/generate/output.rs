/// Output buffer that accumulates generated Go code line by line.
///
/// Indentation is centralized here (one tab per level, the Go convention) so
/// the template builders never hand-roll leading whitespace.
pub(crate) struct Output {
    lines: Vec<String>,
}

impl Output {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add a line at the given indent depth.
    pub fn line(&mut self, depth: usize, text: impl AsRef<str>) {
        self.lines.push(format!("{}{}", "\t".repeat(depth), text.as_ref()));
    }

    /// Add an empty line.
    pub fn blank(&mut self) {
        self.lines.push(String::new());
    }

    /// Finish and return the block, without a trailing newline.
    pub fn finish(self) -> String {
        self.lines.join("\n")
    }
}
