use crate::error::ParseError;
use crate::Parser;
use pact_ast::{Block, Statement};
use pact_lex::TokenKind;

impl Parser {
    /// If the next token is INDENT, parse statements until the matching
    /// DEDENT; otherwise parse a single statement. The parser only ever
    /// produces `ExpressionStatement` nodes directly — `LetBinding` and
    /// `Assignment` are part of the AST model for syntax the grammar does
    /// not yet expose.
    pub(crate) fn parse_block(&mut self) -> Result<Block, ParseError> {
        let pos = self.pos_here();
        if self.peek().kind == TokenKind::Indent {
            self.advance();
            self.skip_newlines();
            let mut statements = Vec::new();
            while self.peek().kind != TokenKind::Dedent {
                statements.push(self.parse_statement()?);
                self.skip_newlines();
            }
            self.expect(TokenKind::Dedent)?;
            Ok(Block::new(statements, pos))
        } else {
            let statement = self.parse_statement()?;
            Ok(Block::new(vec![statement], pos))
        }
    }

    fn parse_statement(&mut self) -> Result<Statement, ParseError> {
        let pos = self.pos_here();
        let expression = self.parse_expression()?;
        Ok(Statement::ExpressionStatement { expression, pos })
    }
}

#[cfg(test)]
mod tests {
    use crate::Parser;
    use pact_lex::lex;

    fn parse_block(source: &str) -> pact_ast::Block {
        let tokens = lex(source).unwrap();
        Parser::new(tokens).parse_block().unwrap()
    }

    #[test]
    fn single_statement_without_indent() {
        let block = parse_block("1 + 2");
        assert_eq!(block.statements.len(), 1);
    }

    #[test]
    fn multi_statement_indented_block() {
        let block = parse_block("\n  1\n  2\n  3\n");
        assert_eq!(block.statements.len(), 3);
    }

    #[test]
    fn trailing_expression_is_last_statement() {
        let block = parse_block("\n  1\n  x + 1\n");
        assert!(block.trailing_expression().is_some());
    }
}
