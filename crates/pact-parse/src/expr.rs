use crate::error::ParseError;
use crate::Parser;
use pact_ast::{BinOp, Expression, UnOp};
use pact_lex::TokenKind;

/// Precedence-climbing expression grammar, lowest to highest:
/// `||`, `&&`, `== !=`, `< > <= >=`, `+ -`, `* / %`, unary, postfix, primary.
impl Parser {
    pub(crate) fn parse_expression(&mut self) -> Result<Expression, ParseError> {
        self.parse_or()
    }

    fn parse_or(&mut self) -> Result<Expression, ParseError> {
        let mut left = self.parse_and()?;
        while self.peek().kind == TokenKind::OrOr {
            let pos = left.pos();
            self.advance();
            let right = self.parse_and()?;
            left = Expression::BinaryOp {
                op: BinOp::Or,
                left: Box::new(left),
                right: Box::new(right),
                pos,
            };
        }
        Ok(left)
    }

    fn parse_and(&mut self) -> Result<Expression, ParseError> {
        let mut left = self.parse_equality()?;
        while self.peek().kind == TokenKind::AndAnd {
            let pos = left.pos();
            self.advance();
            let right = self.parse_equality()?;
            left = Expression::BinaryOp {
                op: BinOp::And,
                left: Box::new(left),
                right: Box::new(right),
                pos,
            };
        }
        Ok(left)
    }

    fn parse_equality(&mut self) -> Result<Expression, ParseError> {
        let mut left = self.parse_comparison()?;
        loop {
            let op = match self.peek().kind {
                TokenKind::EqEq => BinOp::Eq,
                TokenKind::NotEq => BinOp::Ne,
                _ => break,
            };
            let pos = left.pos();
            self.advance();
            let right = self.parse_comparison()?;
            left = Expression::BinaryOp {
                op,
                left: Box::new(left),
                right: Box::new(right),
                pos,
            };
        }
        Ok(left)
    }

    fn parse_comparison(&mut self) -> Result<Expression, ParseError> {
        let mut left = self.parse_additive()?;
        loop {
            let op = match self.peek().kind {
                TokenKind::Lt => BinOp::Lt,
                TokenKind::Gt => BinOp::Gt,
                TokenKind::Le => BinOp::Le,
                TokenKind::Ge => BinOp::Ge,
                _ => break,
            };
            let pos = left.pos();
            self.advance();
            let right = self.parse_additive()?;
            left = Expression::BinaryOp {
                op,
                left: Box::new(left),
                right: Box::new(right),
                pos,
            };
        }
        Ok(left)
    }

    fn parse_additive(&mut self) -> Result<Expression, ParseError> {
        let mut left = self.parse_multiplicative()?;
        loop {
            let op = match self.peek().kind {
                TokenKind::Plus => BinOp::Add,
                TokenKind::Minus => BinOp::Sub,
                _ => break,
            };
            let pos = left.pos();
            self.advance();
            let right = self.parse_multiplicative()?;
            left = Expression::BinaryOp {
                op,
                left: Box::new(left),
                right: Box::new(right),
                pos,
            };
        }
        Ok(left)
    }

    fn parse_multiplicative(&mut self) -> Result<Expression, ParseError> {
        let mut left = self.parse_unary()?;
        loop {
            let op = match self.peek().kind {
                TokenKind::Star => BinOp::Mul,
                TokenKind::Slash => BinOp::Div,
                TokenKind::Percent => BinOp::Mod,
                _ => break,
            };
            let pos = left.pos();
            self.advance();
            let right = self.parse_unary()?;
            left = Expression::BinaryOp {
                op,
                left: Box::new(left),
                right: Box::new(right),
                pos,
            };
        }
        Ok(left)
    }

    /// `! -`, right-associative, prefix.
    fn parse_unary(&mut self) -> Result<Expression, ParseError> {
        let op = match self.peek().kind {
            TokenKind::Not => UnOp::Not,
            TokenKind::Minus => UnOp::Neg,
            _ => return self.parse_postfix(),
        };
        let pos = self.advance().pos;
        let operand = Box::new(self.parse_unary()?);
        Ok(Expression::UnaryOp { op, operand, pos })
    }

    /// Function call and member access, left-associative, chainable.
    fn parse_postfix(&mut self) -> Result<Expression, ParseError> {
        let mut expr = self.parse_primary()?;
        loop {
            match self.peek().kind {
                TokenKind::LParen => {
                    let pos = expr.pos();
                    self.advance();
                    let mut arguments = Vec::new();
                    if self.peek().kind != TokenKind::RParen {
                        arguments.push(self.parse_expression()?);
                        while self.peek().kind == TokenKind::Comma {
                            self.advance();
                            arguments.push(self.parse_expression()?);
                        }
                    }
                    self.expect(TokenKind::RParen)?;
                    expr = Expression::FunctionCall {
                        callee: Box::new(expr),
                        arguments,
                        pos,
                    };
                }
                TokenKind::Dot => {
                    let pos = expr.pos();
                    self.advance();
                    let member = self.expect(TokenKind::Identifier)?.text;
                    expr = Expression::MemberAccess {
                        object: Box::new(expr),
                        member,
                        pos,
                    };
                }
                _ => break,
            }
        }
        Ok(expr)
    }

    fn parse_primary(&mut self) -> Result<Expression, ParseError> {
        let tok = self.peek().clone();
        match tok.kind {
            TokenKind::IntegerLiteral => {
                self.advance();
                let value = tok
                    .text
                    .parse::<i64>()
                    .expect("lexer only emits well-formed integer literal text");
                Ok(Expression::IntegerLiteral(value, tok.pos))
            }
            TokenKind::FloatLiteral => {
                self.advance();
                let value = tok
                    .text
                    .parse::<f64>()
                    .expect("lexer only emits well-formed float literal text");
                Ok(Expression::FloatLiteral(value, tok.pos))
            }
            TokenKind::StringLiteral => {
                self.advance();
                Ok(Expression::StringLiteral(tok.text, tok.pos))
            }
            TokenKind::True => {
                self.advance();
                Ok(Expression::BoolLiteral(true, tok.pos))
            }
            TokenKind::False => {
                self.advance();
                Ok(Expression::BoolLiteral(false, tok.pos))
            }
            TokenKind::Identifier => {
                self.advance();
                Ok(Expression::Identifier(tok.text, tok.pos))
            }
            TokenKind::When => self.parse_when(),
            TokenKind::Given => self.parse_given_expression(),
            TokenKind::LBracket => self.parse_array_literal(),
            TokenKind::LBrace => self.parse_record_literal(),
            TokenKind::LParen => {
                self.advance();
                let inner = self.parse_expression()?;
                self.expect(TokenKind::RParen)?;
                Ok(inner)
            }
            other => Err(ParseError::Unexpected {
                found: other.name().to_string(),
                pos: tok.pos,
            }),
        }
    }

    /// `when CONDITION \n BLOCK [ otherwise \n BLOCK ]`
    fn parse_when(&mut self) -> Result<Expression, ParseError> {
        let pos = self.pos_here();
        self.expect(TokenKind::When)?;
        let condition = Box::new(self.parse_expression()?);
        self.skip_newlines();
        let then_block = self.parse_block()?;
        self.skip_newlines();
        let else_block = if self.peek().kind == TokenKind::Otherwise {
            self.advance();
            self.skip_newlines();
            Some(self.parse_block()?)
        } else {
            None
        };
        Ok(Expression::When {
            condition,
            then_block,
            else_block,
            pos,
        })
    }

    /// `given SCRUTINEE \n { PATTERN -> EXPRESSION }*`, cases read as long as
    /// the current token can begin a pattern. The case list may or may not
    /// be wrapped in its own INDENT/DEDENT pair depending on the source
    /// layout, same as a type declaration's invariant clauses.
    fn parse_given_expression(&mut self) -> Result<Expression, ParseError> {
        let pos = self.pos_here();
        self.expect(TokenKind::Given)?;
        let scrutinee = Box::new(self.parse_expression()?);
        self.skip_newlines();
        let wrapped = if self.peek().kind == TokenKind::Indent {
            self.advance();
            self.skip_newlines();
            true
        } else {
            false
        };

        let mut cases = Vec::new();
        while self.can_start_pattern() {
            let case_pos = self.pos_here();
            let pattern = self.parse_pattern()?;
            self.expect(TokenKind::Arrow)?;
            let expression = self.parse_expression()?;
            cases.push(pact_ast::PatternCase {
                pattern,
                expression,
                pos: case_pos,
            });
            self.skip_newlines();
        }

        if wrapped {
            self.expect(TokenKind::Dedent)?;
        }
        Ok(Expression::Given {
            scrutinee,
            cases,
            pos,
        })
    }

    fn can_start_pattern(&self) -> bool {
        matches!(
            self.peek().kind,
            TokenKind::Identifier
                | TokenKind::IntegerLiteral
                | TokenKind::FloatLiteral
                | TokenKind::StringLiteral
                | TokenKind::True
                | TokenKind::False
        )
    }

    fn parse_array_literal(&mut self) -> Result<Expression, ParseError> {
        let pos = self.pos_here();
        self.expect(TokenKind::LBracket)?;
        self.skip_newlines();
        let mut elements = Vec::new();
        if self.peek().kind != TokenKind::RBracket {
            elements.push(self.parse_expression()?);
            self.skip_newlines();
            while self.peek().kind == TokenKind::Comma {
                self.advance();
                self.skip_newlines();
                if self.peek().kind == TokenKind::RBracket {
                    break;
                }
                elements.push(self.parse_expression()?);
                self.skip_newlines();
            }
        }
        self.expect(TokenKind::RBracket)?;
        Ok(Expression::ArrayLiteral { elements, pos })
    }

    fn parse_record_literal(&mut self) -> Result<Expression, ParseError> {
        let pos = self.pos_here();
        self.expect(TokenKind::LBrace)?;
        self.skip_newlines();
        let mut fields = Vec::new();
        if self.peek().kind != TokenKind::RBrace {
            loop {
                let name = self.expect(TokenKind::Identifier)?.text;
                self.expect(TokenKind::Colon)?;
                let value = self.parse_expression()?;
                fields.push((name, value));
                self.skip_newlines();
                if self.peek().kind == TokenKind::Comma {
                    self.advance();
                    self.skip_newlines();
                    if self.peek().kind == TokenKind::RBrace {
                        break;
                    }
                    continue;
                }
                break;
            }
        }
        self.skip_newlines();
        self.expect(TokenKind::RBrace)?;
        Ok(Expression::RecordLiteral { fields, pos })
    }
}

#[cfg(test)]
mod tests {
    use crate::Parser;
    use pact_ast::{BinOp, Expression};
    use pact_lex::lex;

    fn parse_expr(source: &str) -> Expression {
        let tokens = lex(source).unwrap();
        Parser::new(tokens).parse_expression().unwrap()
    }

    #[test]
    fn precedence_multiplication_over_addition() {
        let expr = parse_expr("1 + 2 * 3");
        match expr {
            Expression::BinaryOp { op: BinOp::Add, right, .. } => {
                assert!(matches!(*right, Expression::BinaryOp { op: BinOp::Mul, .. }));
            }
            _ => panic!("expected addition at the top"),
        }
    }

    #[test]
    fn comparison_binds_looser_than_additive() {
        let expr = parse_expr("1 + 2 < 3 * 4");
        assert!(matches!(expr, Expression::BinaryOp { op: BinOp::Lt, .. }));
    }

    #[test]
    fn unary_is_right_associative_prefix() {
        let expr = parse_expr("!!x");
        match expr {
            Expression::UnaryOp { operand, .. } => {
                assert!(matches!(*operand, Expression::UnaryOp { .. }));
            }
            _ => panic!("expected nested unary"),
        }
    }

    #[test]
    fn postfix_call_then_member_chains() {
        let expr = parse_expr("f(1, 2).x");
        assert!(matches!(expr, Expression::MemberAccess { .. }));
    }

    #[test]
    fn callee_need_not_be_an_identifier() {
        let expr = parse_expr("(f)(1)");
        match expr {
            Expression::FunctionCall { callee, arguments, .. } => {
                assert!(matches!(*callee, Expression::Identifier(..)));
                assert_eq!(arguments.len(), 1);
            }
            _ => panic!("expected a call"),
        }
    }

    #[test]
    fn array_literal_elements_in_order() {
        let expr = parse_expr("[1, 2, 3]");
        match expr {
            Expression::ArrayLiteral { elements, .. } => assert_eq!(elements.len(), 3),
            _ => panic!("expected array literal"),
        }
    }

    #[test]
    fn record_literal_field_order() {
        let expr = parse_expr("{ x: 1, y: 2 }");
        match expr {
            Expression::RecordLiteral { fields, .. } => {
                assert_eq!(fields[0].0, "x");
                assert_eq!(fields[1].0, "y");
            }
            _ => panic!("expected record literal"),
        }
    }

    #[test]
    fn when_otherwise_single_line_form() {
        let expr = parse_expr("when true\n  1\notherwise\n  2\n");
        assert!(matches!(expr, Expression::When { else_block: Some(_), .. }));
    }

    #[test]
    fn when_without_otherwise() {
        let expr = parse_expr("when true\n  1\n");
        assert!(matches!(expr, Expression::When { else_block: None, .. }));
    }

    #[test]
    fn given_expression_with_cases() {
        let expr = parse_expr("given x\n  1 -> 2\n  _ -> 3\n");
        match expr {
            Expression::Given { cases, .. } => assert_eq!(cases.len(), 2),
            _ => panic!("expected given expression"),
        }
    }
}
