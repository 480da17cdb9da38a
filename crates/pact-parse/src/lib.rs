//! Recursive-descent parser: a token stream in, a [`Program`] out.
//!
//! The grammar is split across files by concern the way the lexer is:
//! [`items`] for top-level declarations, [`types`] for type annotations,
//! [`expr`] for the precedence-climbing expression grammar, [`stmt`] for
//! blocks, [`pattern`] for `given` patterns. All of them are `impl Parser`
//! blocks over the one cursor defined here.

mod error;
mod expr;
mod items;
mod pattern;
mod stmt;
mod types;

pub use error::ParseError;

use pact_ast::Program;
use pact_lex::{Token, TokenKind};
use pact_util::Pos;

pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    pub fn parse(mut self) -> Result<Program, ParseError> {
        let mut imports = Vec::new();
        let mut declarations = Vec::new();

        self.skip_newlines();

        while self.peek().kind == TokenKind::Import {
            imports.push(self.parse_import()?);
            self.skip_newlines();
        }

        while self.peek().kind != TokenKind::Eof {
            match self.peek().kind {
                TokenKind::Type => declarations.push(self.parse_type_declaration()?),
                TokenKind::Define => declarations.push(self.parse_function_declaration()?),
                other => {
                    return Err(ParseError::Unexpected {
                        found: other.name().to_string(),
                        pos: self.peek().pos,
                    })
                }
            }
            self.skip_newlines();
        }

        Ok(Program::new(imports, declarations))
    }

    // ---- token helpers shared by every grammar submodule ----

    pub(crate) fn peek(&self) -> &Token {
        self.peek_at(0)
    }

    pub(crate) fn peek_at(&self, offset: usize) -> &Token {
        self.tokens
            .get(self.pos + offset)
            .unwrap_or_else(|| self.tokens.last().expect("token stream always has EOF"))
    }

    pub(crate) fn advance(&mut self) -> Token {
        let tok = self.peek().clone();
        if tok.kind != TokenKind::Eof {
            self.pos += 1;
        }
        tok
    }

    pub(crate) fn expect(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        let tok = self.peek().clone();
        if tok.kind != kind {
            return Err(ParseError::Expected {
                expected: kind.name().to_string(),
                found: tok.kind.name().to_string(),
                pos: tok.pos,
            });
        }
        Ok(self.advance())
    }

    pub(crate) fn skip_newlines(&mut self) {
        while self.peek().kind == TokenKind::Newline {
            self.advance();
        }
    }

    pub(crate) fn pos_here(&self) -> Pos {
        self.peek().pos
    }
}
