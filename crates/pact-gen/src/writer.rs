/// A flat line buffer with a 4-space indent level, enough structure for a
/// syntax-directed walker emitting indentation-sensitive target source —
/// there is no AST for the output, only text.
pub(crate) struct Writer {
    buf: String,
    level: usize,
}

impl Writer {
    pub(crate) fn new() -> Self {
        Self { buf: String::new(), level: 0 }
    }

    pub(crate) fn line(&mut self, text: &str) {
        self.buf.push_str(&"    ".repeat(self.level));
        self.buf.push_str(text);
        self.buf.push('\n');
    }

    pub(crate) fn blank(&mut self) {
        self.buf.push('\n');
    }

    pub(crate) fn indent(&mut self) {
        self.level += 1;
    }

    pub(crate) fn dedent(&mut self) {
        self.level -= 1;
    }

    pub(crate) fn finish(self) -> String {
        self.buf
    }
}
