/// A 1-based line/column source position.
///
/// Every AST node carries one of these. Unlike a native-compiler `Span`
/// (byte offsets, file ids, start/end ranges) this toolchain only ever
/// reports a single point — the lexer, parser, and type checker all report
/// errors as "here", not "from here to there" — so there is nothing to gain
/// from a richer representation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub line: u32,
    pub column: u32,
}

impl Pos {
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// The position at the very start of a file.
    pub const fn start() -> Self {
        Self { line: 1, column: 1 }
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
