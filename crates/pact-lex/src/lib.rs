//! The indentation-sensitive lexer: source text in, a token stream out.
//!
//! Tokenization fails fast — the first illegal construct (a tab, an odd
//! indent, an unterminated string or comment, a stray character) stops the
//! whole pass with a positioned [`LexError`]. There is no recovery mode;
//! downstream passes never see a partial token stream.

mod cursor;
mod error;
mod indent;
mod lexer;
mod token;

pub use error::LexError;
pub use lexer::Lexer;
pub use token::{Token, TokenKind};

/// Tokenize `source` in one call, the common case for callers that don't
/// need to stream tokens one at a time.
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).tokenize()
}
