use crate::error::ParseError;
use crate::Parser;
use pact_ast::{PrimitiveType, Type};
use pact_lex::TokenKind;

impl Parser {
    /// Parses a type annotation: a primitive keyword, `Array[T]`,
    /// `Result[T, E]`, or a named type with optional bracketed arguments.
    pub(crate) fn parse_type(&mut self) -> Result<Type, ParseError> {
        let tok = self.peek().clone();

        if let Some(prim) = PrimitiveType::from_name(&tok.text) {
            if matches!(
                tok.kind,
                TokenKind::Int
                    | TokenKind::Float
                    | TokenKind::Bool
                    | TokenKind::String
                    | TokenKind::Byte
                    | TokenKind::Unit
            ) {
                self.advance();
                return Ok(Type::Primitive(prim));
            }
        }

        if tok.kind == TokenKind::Array {
            self.advance();
            self.expect(TokenKind::LBracket)?;
            let elem = self.parse_type()?;
            self.expect(TokenKind::RBracket)?;
            return Ok(Type::Array(Box::new(elem)));
        }

        if tok.kind == TokenKind::Result {
            self.advance();
            self.expect(TokenKind::LBracket)?;
            let ok = self.parse_type()?;
            self.expect(TokenKind::Comma)?;
            let err = self.parse_type()?;
            self.expect(TokenKind::RBracket)?;
            return Ok(Type::Result(Box::new(ok), Box::new(err)));
        }

        if tok.kind == TokenKind::Identifier {
            self.advance();
            let mut args = Vec::new();
            if self.peek().kind == TokenKind::LBracket {
                self.advance();
                args.push(self.parse_type()?);
                while self.peek().kind == TokenKind::Comma {
                    self.advance();
                    args.push(self.parse_type()?);
                }
                self.expect(TokenKind::RBracket)?;
            }
            return Ok(Type::Named(tok.text, args));
        }

        Err(ParseError::Expected {
            expected: "type".into(),
            found: tok.kind.name().to_string(),
            pos: tok.pos,
        })
    }
}
