use crate::error::ParseError;
use crate::Parser;
use pact_ast::{LiteralValue, Pattern};
use pact_lex::TokenKind;

impl Parser {
    /// An identifier followed by `(` is a constructor pattern; the bare
    /// identifier `_` is a wildcard; any other identifier binds; integer,
    /// float, string, and bool tokens become literal patterns.
    pub(crate) fn parse_pattern(&mut self) -> Result<Pattern, ParseError> {
        let tok = self.peek().clone();
        match tok.kind {
            TokenKind::Identifier => {
                self.advance();
                if tok.text == "_" {
                    return Ok(Pattern::Wildcard(tok.pos));
                }
                if self.peek().kind == TokenKind::LParen {
                    self.advance();
                    let mut parameters = Vec::new();
                    if self.peek().kind != TokenKind::RParen {
                        parameters.push(self.parse_pattern()?);
                        while self.peek().kind == TokenKind::Comma {
                            self.advance();
                            parameters.push(self.parse_pattern()?);
                        }
                    }
                    self.expect(TokenKind::RParen)?;
                    return Ok(Pattern::Constructor {
                        name: tok.text,
                        parameters,
                        pos: tok.pos,
                    });
                }
                Ok(Pattern::Identifier(tok.text, tok.pos))
            }
            TokenKind::IntegerLiteral => {
                self.advance();
                let value = tok
                    .text
                    .parse::<i64>()
                    .expect("lexer only emits well-formed integer literal text");
                Ok(Pattern::Literal(LiteralValue::Int(value), tok.pos))
            }
            TokenKind::FloatLiteral => {
                self.advance();
                let value = tok
                    .text
                    .parse::<f64>()
                    .expect("lexer only emits well-formed float literal text");
                Ok(Pattern::Literal(LiteralValue::Float(value), tok.pos))
            }
            TokenKind::StringLiteral => {
                self.advance();
                Ok(Pattern::Literal(LiteralValue::Str(tok.text), tok.pos))
            }
            TokenKind::True => {
                self.advance();
                Ok(Pattern::Literal(LiteralValue::Bool(true), tok.pos))
            }
            TokenKind::False => {
                self.advance();
                Ok(Pattern::Literal(LiteralValue::Bool(false), tok.pos))
            }
            other => Err(ParseError::Expected {
                expected: "pattern".to_string(),
                found: other.name().to_string(),
                pos: tok.pos,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::Parser;
    use pact_ast::Pattern;
    use pact_lex::lex;

    fn parse_pattern(source: &str) -> Pattern {
        let tokens = lex(source).unwrap();
        Parser::new(tokens).parse_pattern().unwrap()
    }

    #[test]
    fn underscore_is_wildcard() {
        assert!(matches!(parse_pattern("_"), Pattern::Wildcard(_)));
    }

    #[test]
    fn bare_identifier_binds() {
        assert!(matches!(parse_pattern("x"), Pattern::Identifier(..)));
    }

    #[test]
    fn identifier_with_parens_is_constructor() {
        match parse_pattern("Some(x)") {
            Pattern::Constructor { name, parameters, .. } => {
                assert_eq!(name, "Some");
                assert_eq!(parameters.len(), 1);
            }
            other => panic!("expected constructor pattern, got {other:?}"),
        }
    }

    #[test]
    fn nested_constructor_pattern() {
        match parse_pattern("Pair(Some(x), _)") {
            Pattern::Constructor { parameters, .. } => {
                assert!(matches!(parameters[0], Pattern::Constructor { .. }));
                assert!(matches!(parameters[1], Pattern::Wildcard(_)));
            }
            other => panic!("expected constructor pattern, got {other:?}"),
        }
    }

    #[test]
    fn literal_patterns() {
        assert!(matches!(parse_pattern("42"), Pattern::Literal(..)));
        assert!(matches!(parse_pattern("\"x\""), Pattern::Literal(..)));
        assert!(matches!(parse_pattern("true"), Pattern::Literal(..)));
    }
}
