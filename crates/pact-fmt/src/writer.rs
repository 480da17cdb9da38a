/// Accumulates formatted source lines at a 2-space indent per level.
pub(crate) struct Writer {
    lines: Vec<String>,
}

impl Writer {
    pub(crate) fn new() -> Self {
        Self { lines: Vec::new() }
    }

    pub(crate) fn push(&mut self, level: usize, text: &str) {
        self.lines.push(format!("{}{text}", indent(level)));
    }

    pub(crate) fn push_lines(&mut self, lines: Vec<String>) {
        self.lines.extend(lines);
    }

    pub(crate) fn blank(&mut self) {
        self.lines.push(String::new());
    }

    pub(crate) fn finish(self) -> String {
        let mut text = self.lines.join("\n");
        text.push('\n');
        text
    }
}

pub(crate) fn indent(level: usize) -> String {
    "  ".repeat(level)
}
