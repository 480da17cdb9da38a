use crate::cursor::Cursor;
use crate::error::LexError;
use crate::indent::IndentStack;
use crate::token::{Token, TokenKind};

/// Turns source text into a token stream. See the module-level docs for the
/// failure policy: the first illegal construct stops tokenization.
pub struct Lexer {
    cursor: Cursor,
    indent: IndentStack,
    tokens: Vec<Token>,
}

impl Lexer {
    pub fn new(source: &str) -> Self {
        Self {
            cursor: Cursor::new(source),
            indent: IndentStack::new(),
            tokens: Vec::new(),
        }
    }

    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        let mut at_line_start = true;

        while !self.cursor.is_eof() {
            if at_line_start {
                if self.consume_leading_whitespace()? {
                    // Blank or comment-only line: no INDENT/DEDENT, keep
                    // scanning the next line.
                    continue;
                }
                at_line_start = false;
            }

            self.skip_spaces_and_tabs();

            let ch = self.cursor.peek();
            if ch == '\0' {
                break;
            }

            if ch == '#' {
                self.skip_comment()?;
                continue;
            }

            if ch == '\n' {
                let pos = self.cursor.pos();
                self.cursor.advance();
                self.tokens.push(Token::new(TokenKind::Newline, "\\n", pos));
                at_line_start = true;
                continue;
            }

            if ch.is_alphabetic() || ch == '_' {
                let tok = self.read_identifier();
                self.tokens.push(tok);
                continue;
            }

            if ch.is_ascii_digit() {
                let tok = self.read_number();
                self.tokens.push(tok);
                continue;
            }

            if ch == '"' {
                let tok = self.read_string()?;
                self.tokens.push(tok);
                continue;
            }

            if let Some(tok) = self.read_operator_or_symbol() {
                self.tokens.push(tok);
                continue;
            }

            return Err(LexError::UnexpectedCharacter(self.cursor.pos(), ch));
        }

        let eof_pos = self.cursor.pos();
        for _ in 0..self.indent.flush() {
            self.tokens.push(Token::new(TokenKind::Dedent, "", eof_pos));
        }
        self.tokens.push(Token::new(TokenKind::Eof, "", eof_pos));

        Ok(self.tokens)
    }

    /// Consumes leading spaces/tabs at a line start and reconciles the
    /// indent stack. Returns `true` if the line turned out to be blank or
    /// comment-only (no layout tokens should be emitted for it).
    fn consume_leading_whitespace(&mut self) -> Result<bool, LexError> {
        let mut spaces = 0u32;
        loop {
            match self.cursor.peek() {
                ' ' => {
                    spaces += 1;
                    self.cursor.advance();
                }
                '\t' => return Err(LexError::TabInIndentation(self.cursor.pos())),
                _ => break,
            }
        }

        if self.cursor.peek() == '#' {
            self.skip_comment()?;
        }
        if self.cursor.peek() == '\n' {
            self.cursor.advance();
            return Ok(true);
        }
        if self.cursor.is_eof() {
            return Ok(true);
        }

        if spaces % 2 != 0 {
            return Err(LexError::OddIndentation(self.cursor.pos()));
        }

        let level = spaces / 2;
        let pos = self.cursor.pos();
        for is_indent in self.indent.reconcile(level, pos)? {
            let kind = if is_indent {
                TokenKind::Indent
            } else {
                TokenKind::Dedent
            };
            self.tokens.push(Token::new(kind, "", pos));
        }
        Ok(false)
    }

    fn skip_spaces_and_tabs(&mut self) {
        while matches!(self.cursor.peek(), ' ' | '\t') {
            self.cursor.advance();
        }
    }

    fn skip_comment(&mut self) -> Result<(), LexError> {
        if self.cursor.peek() != '#' {
            return Ok(());
        }
        if self.cursor.peek_at(1) == '#' {
            let start = self.cursor.pos();
            self.cursor.advance();
            self.cursor.advance();
            while !(self.cursor.peek() == '#' && self.cursor.peek_at(1) == '#') {
                if self.cursor.is_eof() {
                    return Err(LexError::UnterminatedComment { start });
                }
                self.cursor.advance();
            }
            self.cursor.advance();
            self.cursor.advance();
        } else {
            while self.cursor.peek() != '\n' && !self.cursor.is_eof() {
                self.cursor.advance();
            }
        }
        Ok(())
    }

    fn read_identifier(&mut self) -> Token {
        let pos = self.cursor.pos();
        let mut text = String::new();
        while self.cursor.peek().is_alphanumeric() || self.cursor.peek() == '_' {
            text.push(self.cursor.advance());
        }
        let kind = TokenKind::keyword(&text).unwrap_or(TokenKind::Identifier);
        Token::new(kind, text, pos)
    }

    fn read_number(&mut self) -> Token {
        let pos = self.cursor.pos();
        let mut text = String::new();
        while self.cursor.peek().is_ascii_digit() {
            text.push(self.cursor.advance());
        }
        let mut is_float = false;
        if self.cursor.peek() == '.' && self.cursor.peek_at(1).is_ascii_digit() {
            is_float = true;
            text.push(self.cursor.advance());
            while self.cursor.peek().is_ascii_digit() {
                text.push(self.cursor.advance());
            }
        }
        let kind = if is_float {
            TokenKind::FloatLiteral
        } else {
            TokenKind::IntegerLiteral
        };
        Token::new(kind, text, pos)
    }

    fn read_string(&mut self) -> Result<Token, LexError> {
        let start = self.cursor.pos();
        self.cursor.advance(); // opening quote
        let mut text = String::new();
        loop {
            let ch = self.cursor.peek();
            if ch == '"' {
                break;
            }
            if self.cursor.is_eof() {
                return Err(LexError::UnterminatedString { start });
            }
            if ch == '\\' {
                self.cursor.advance();
                let escaped = self.cursor.advance();
                text.push(match escaped {
                    'n' => '\n',
                    't' => '\t',
                    'r' => '\r',
                    '"' => '"',
                    '\\' => '\\',
                    other => other,
                });
            } else {
                text.push(self.cursor.advance());
            }
        }
        self.cursor.advance(); // closing quote
        Ok(Token::new(TokenKind::StringLiteral, text, start))
    }

    fn read_operator_or_symbol(&mut self) -> Option<Token> {
        let pos = self.cursor.pos();
        let c0 = self.cursor.peek();
        let c1 = self.cursor.peek_at(1);
        let c2 = self.cursor.peek_at(2);

        macro_rules! take {
            ($n:expr, $kind:expr, $text:expr) => {{
                for _ in 0..$n {
                    self.cursor.advance();
                }
                return Some(Token::new($kind, $text, pos));
            }};
        }

        if c0 == '.' && c1 == '.' && c2 == '.' {
            take!(3, TokenKind::Ellipsis, "...");
        }
        match (c0, c1) {
            ('-', '>') => take!(2, TokenKind::Arrow, "->"),
            ('=', '=') => take!(2, TokenKind::EqEq, "=="),
            ('!', '=') => take!(2, TokenKind::NotEq, "!="),
            ('<', '=') => take!(2, TokenKind::Le, "<="),
            ('>', '=') => take!(2, TokenKind::Ge, ">="),
            ('&', '&') => take!(2, TokenKind::AndAnd, "&&"),
            ('|', '|') => take!(2, TokenKind::OrOr, "||"),
            _ => {}
        }

        let kind = match c0 {
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '%' => TokenKind::Percent,
            '<' => TokenKind::Lt,
            '>' => TokenKind::Gt,
            '!' => TokenKind::Not,
            '|' => TokenKind::Pipe,
            '&' => TokenKind::Ampersand,
            '?' => TokenKind::Question,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '[' => TokenKind::LBracket,
            ']' => TokenKind::RBracket,
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            ',' => TokenKind::Comma,
            ':' => TokenKind::Colon,
            '.' => TokenKind::Dot,
            '=' => TokenKind::Assign,
            _ => return None,
        };
        self.cursor.advance();
        Some(Token::new(kind, c0.to_string(), pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        Lexer::new(source)
            .tokenize()
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn empty_source_is_just_eof() {
        assert_eq!(kinds(""), vec![TokenKind::Eof]);
    }

    #[test]
    fn keyword_vs_identifier() {
        assert_eq!(kinds("define")[0], TokenKind::Define);
        assert_eq!(kinds("defined")[0], TokenKind::Identifier);
    }

    #[test]
    fn integer_then_dot_without_digit_is_two_tokens() {
        let toks = Lexer::new("1.").tokenize().unwrap();
        assert_eq!(toks[0].kind, TokenKind::IntegerLiteral);
        assert_eq!(toks[0].text, "1");
        assert_eq!(toks[1].kind, TokenKind::Dot);
    }

    #[test]
    fn float_literal() {
        let toks = Lexer::new("3.14").tokenize().unwrap();
        assert_eq!(toks[0].kind, TokenKind::FloatLiteral);
        assert_eq!(toks[0].text, "3.14");
    }

    #[test]
    fn string_escapes() {
        let toks = Lexer::new(r#""a\nb\"c""#).tokenize().unwrap();
        assert_eq!(toks[0].text, "a\nb\"c");
    }

    #[test]
    fn unterminated_string_is_fatal() {
        let err = Lexer::new("\"abc").tokenize().unwrap_err();
        assert!(matches!(err, LexError::UnterminatedString { .. }));
    }

    #[test]
    fn unterminated_block_comment_is_fatal() {
        let err = Lexer::new("## never closes").tokenize().unwrap_err();
        assert!(matches!(err, LexError::UnterminatedComment { .. }));
    }

    #[test]
    fn block_comment_is_skipped() {
        let toks = Lexer::new("## comment ##\ndefine").tokenize().unwrap();
        // A NEWLINE from the blank-comment line is not emitted since the
        // comment was on its own line and consumed to end of line; the
        // following line starts fresh.
        assert!(toks.iter().any(|t| t.kind == TokenKind::Define));
    }

    #[test]
    fn tab_in_indentation_is_fatal() {
        let err = Lexer::new("define f()\n\tgiven\n").tokenize().unwrap_err();
        assert!(matches!(err, LexError::TabInIndentation(_)));
    }

    #[test]
    fn odd_indentation_is_fatal() {
        let err = Lexer::new("define f()\n   given\n").tokenize().unwrap_err();
        assert!(matches!(err, LexError::OddIndentation(_)));
    }

    #[test]
    fn indent_and_dedent_are_balanced() {
        let toks = kinds("a\n  b\nc\n");
        let indents = toks.iter().filter(|k| **k == TokenKind::Indent).count();
        let dedents = toks.iter().filter(|k| **k == TokenKind::Dedent).count();
        assert_eq!(indents, dedents);
    }

    #[test]
    fn blank_lines_emit_no_layout_tokens() {
        let toks = kinds("a\n\n\nb\n");
        assert!(!toks.contains(&TokenKind::Indent));
        assert!(!toks.contains(&TokenKind::Dedent));
    }

    #[test]
    fn trailing_dedents_flush_at_eof() {
        let toks = kinds("a\n  b\n  c");
        assert_eq!(toks.last(), Some(&TokenKind::Eof));
        assert_eq!(
            toks[toks.len() - 2],
            TokenKind::Dedent,
            "expected a flush DEDENT right before EOF"
        );
    }

    #[test]
    fn three_char_then_two_char_operator_precedence() {
        let toks = kinds("...");
        assert_eq!(toks[0], TokenKind::Ellipsis);
    }
}
