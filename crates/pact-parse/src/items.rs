use crate::error::ParseError;
use crate::Parser;
use pact_ast::{
    Declaration, FunctionDeclaration, Import, Parameter, SimpleType, SumType, Type,
    TypeDeclaration, TypeDefinition, Variant,
};
use pact_lex::TokenKind;

impl Parser {
    /// `import` followed by a dot-joined identifier path.
    pub(crate) fn parse_import(&mut self) -> Result<Import, ParseError> {
        let pos = self.pos_here();
        self.expect(TokenKind::Import)?;
        let mut module_path = self.expect(TokenKind::Identifier)?.text;
        while self.peek().kind == TokenKind::Dot {
            self.advance();
            module_path.push('.');
            module_path.push_str(&self.expect(TokenKind::Identifier)?.text);
        }
        Ok(Import { module_path, pos })
    }

    /// `type NAME [type-params]? = TYPE-DEFINITION` followed by zero or more
    /// `invariant EXPRESSION` clauses. Both the definition and the
    /// invariant list may independently be wrapped in their own
    /// INDENT/DEDENT pair, depending on whether the source put them on the
    /// `type` line or an indented continuation.
    pub(crate) fn parse_type_declaration(&mut self) -> Result<Declaration, ParseError> {
        let pos = self.pos_here();
        self.expect(TokenKind::Type)?;

        // The type name itself may be an identifier or a built-in type
        // keyword, so an alias like `type Result = ...` can be declared.
        let name_tok = self.advance();
        if !is_type_name_token(name_tok.kind) {
            return Err(ParseError::Expected {
                expected: "type name".to_string(),
                found: name_tok.kind.name().to_string(),
                pos: name_tok.pos,
            });
        }
        let name = name_tok.text;

        let mut type_params = Vec::new();
        if self.peek().kind == TokenKind::LBracket {
            self.advance();
            type_params.push(self.expect(TokenKind::Identifier)?.text);
            while self.peek().kind == TokenKind::Comma {
                self.advance();
                type_params.push(self.expect(TokenKind::Identifier)?.text);
            }
            self.expect(TokenKind::RBracket)?;
        }

        self.expect(TokenKind::Assign)?;
        self.skip_newlines();
        let def_wrapped = if self.peek().kind == TokenKind::Indent {
            self.advance();
            true
        } else {
            false
        };
        let definition = self.parse_type_definition()?;
        if def_wrapped {
            self.skip_newlines();
            self.expect(TokenKind::Dedent)?;
        }

        self.skip_newlines();
        let mut invariants = Vec::new();
        let invariants_wrapped = if self.peek().kind == TokenKind::Indent {
            self.advance();
            self.skip_newlines();
            true
        } else {
            false
        };
        while self.peek().kind == TokenKind::Invariant {
            self.advance();
            invariants.push(self.parse_expression()?);
            self.skip_newlines();
        }
        if invariants_wrapped {
            self.expect(TokenKind::Dedent)?;
        }

        Ok(Declaration::Type(TypeDeclaration {
            name,
            type_params,
            definition,
            invariants,
            pos,
        }))
    }

    fn parse_type_definition(&mut self) -> Result<TypeDefinition, ParseError> {
        if self.peek().kind == TokenKind::Pipe {
            return self.parse_sum_type();
        }
        if self.peek().kind == TokenKind::LBrace {
            return self.parse_record_type();
        }
        let ty = self.parse_type()?;
        Ok(TypeDefinition::Simple(simple_type_from(ty)))
    }

    /// One or more `| VARIANT [( TYPE (, TYPE)* )]?` alternatives.
    fn parse_sum_type(&mut self) -> Result<TypeDefinition, ParseError> {
        let mut variants = Vec::new();
        while self.peek().kind == TokenKind::Pipe {
            self.advance();
            let pos = self.pos_here();
            let name = self.expect(TokenKind::Identifier)?.text;
            let mut parameters = Vec::new();
            if self.peek().kind == TokenKind::LParen {
                self.advance();
                if self.peek().kind != TokenKind::RParen {
                    parameters.push(self.parse_type()?);
                    while self.peek().kind == TokenKind::Comma {
                        self.advance();
                        parameters.push(self.parse_type()?);
                    }
                }
                self.expect(TokenKind::RParen)?;
            }
            variants.push(Variant {
                name,
                parameters,
                pos,
            });
            self.skip_newlines();
        }
        Ok(TypeDefinition::Sum(SumType { variants }))
    }

    /// `{ FIELD : TYPE (, FIELD : TYPE)* }`, stored as a `SimpleType` named
    /// `"Record"` whose `type_args` are the field types in order — field
    /// names are validated here for presence but not kept.
    fn parse_record_type(&mut self) -> Result<TypeDefinition, ParseError> {
        self.expect(TokenKind::LBrace)?;
        self.skip_newlines();
        let mut field_types = Vec::new();
        if self.peek().kind != TokenKind::RBrace {
            loop {
                self.expect(TokenKind::Identifier)?;
                self.expect(TokenKind::Colon)?;
                field_types.push(self.parse_type()?);
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
        Ok(TypeDefinition::Simple(SimpleType {
            name: "Record".to_string(),
            type_args: field_types,
        }))
    }

    /// `define NAME ( PARAMS? ) -> RETURN-TYPE`, then zero or more
    /// `expect`/`ensure` clauses followed by a `given` body block.
    ///
    /// The layout tokens between the return type and `given` are not a
    /// single well-nested block: the contract clauses may be wrapped in
    /// their own INDENT, and its matching DEDENT can land either right
    /// after the last clause (when the source dedents back out before
    /// `given`) or only after the body block itself closes (when `given`
    /// and the body stay nested inside that same indent). `outer_indent`
    /// tracks whether that INDENT was opened so its DEDENT gets consumed
    /// at whichever of the two points it actually shows up.
    pub(crate) fn parse_function_declaration(&mut self) -> Result<Declaration, ParseError> {
        let pos = self.pos_here();
        self.expect(TokenKind::Define)?;
        let name = self.expect(TokenKind::Identifier)?.text;
        self.expect(TokenKind::LParen)?;
        let mut parameters = Vec::new();
        if self.peek().kind != TokenKind::RParen {
            parameters.push(self.parse_parameter()?);
            while self.peek().kind == TokenKind::Comma {
                self.advance();
                parameters.push(self.parse_parameter()?);
            }
        }
        self.expect(TokenKind::RParen)?;
        self.expect(TokenKind::Arrow)?;
        let return_type = self.parse_type()?;

        self.skip_newlines();
        let mut outer_indent_open = false;
        if self.peek().kind == TokenKind::Indent {
            self.advance();
            outer_indent_open = true;
        }

        let mut preconditions = Vec::new();
        let mut postconditions = Vec::new();
        loop {
            match self.peek().kind {
                TokenKind::Expect => {
                    self.advance();
                    preconditions.push(self.parse_expression()?);
                    self.skip_newlines();
                }
                TokenKind::Ensure => {
                    self.advance();
                    postconditions.push(self.parse_expression()?);
                    self.skip_newlines();
                }
                _ => break,
            }
        }

        if outer_indent_open && self.peek().kind == TokenKind::Dedent {
            self.advance();
            outer_indent_open = false;
        }

        self.expect(TokenKind::Given)?;
        self.skip_newlines();
        let body = self.parse_block()?;

        if outer_indent_open {
            self.expect(TokenKind::Dedent)?;
        }

        Ok(Declaration::Function(FunctionDeclaration {
            name,
            parameters,
            return_type,
            preconditions,
            postconditions,
            body,
            pos,
        }))
    }

    fn parse_parameter(&mut self) -> Result<Parameter, ParseError> {
        let pos = self.pos_here();
        let name = self.expect(TokenKind::Identifier)?.text;
        self.expect(TokenKind::Colon)?;
        let type_annotation = self.parse_type()?;
        Ok(Parameter {
            name,
            type_annotation,
            pos,
        })
    }
}

fn is_type_name_token(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Identifier
            | TokenKind::Int
            | TokenKind::Float
            | TokenKind::Bool
            | TokenKind::String
            | TokenKind::Byte
            | TokenKind::Unit
            | TokenKind::Array
            | TokenKind::Result
    )
}

fn simple_type_from(ty: Type) -> SimpleType {
    match ty {
        Type::Primitive(p) => SimpleType {
            name: p.name().to_string(),
            type_args: Vec::new(),
        },
        Type::Named(name, args) => SimpleType {
            name,
            type_args: args,
        },
        Type::Array(elem) => SimpleType {
            name: "Array".to_string(),
            type_args: vec![*elem],
        },
        Type::Result(ok, err) => SimpleType {
            name: "Result".to_string(),
            type_args: vec![*ok, *err],
        },
        Type::Function(mut params, ret) => {
            params.push(*ret);
            SimpleType {
                name: "Function".to_string(),
                type_args: params,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::Parser;
    use pact_ast::{Declaration, TypeDefinition};
    use pact_lex::lex;

    fn parse_program(source: &str) -> pact_ast::Program {
        let tokens = lex(source).unwrap();
        Parser::new(tokens).parse().unwrap()
    }

    #[test]
    fn import_path_is_dot_joined() {
        let program = parse_program("import a.b.c\n");
        assert_eq!(program.imports[0].module_path, "a.b.c");
    }

    #[test]
    fn simple_alias_with_invariant() {
        let program = parse_program("type PositiveInt = Int\n  invariant value > 0\n");
        match &program.declarations[0] {
            Declaration::Type(d) => {
                assert!(matches!(d.definition, TypeDefinition::Simple(_)));
                assert_eq!(d.invariants.len(), 1);
            }
            _ => panic!("expected a type declaration"),
        }
    }

    #[test]
    fn sum_type_variants_in_order() {
        let program = parse_program("type Shape =\n  | Circle(Float)\n  | Square(Float)\n");
        match &program.declarations[0] {
            Declaration::Type(d) => match &d.definition {
                TypeDefinition::Sum(s) => {
                    assert_eq!(s.variants[0].name, "Circle");
                    assert_eq!(s.variants[1].name, "Square");
                }
                _ => panic!("expected a sum type"),
            },
            _ => panic!("expected a type declaration"),
        }
    }

    #[test]
    fn record_type_field_types_in_order() {
        let program = parse_program("type Point = { x: Int, y: Int }\n");
        match &program.declarations[0] {
            Declaration::Type(d) => match &d.definition {
                TypeDefinition::Simple(s) => {
                    assert_eq!(s.name, "Record");
                    assert_eq!(s.type_args.len(), 2);
                }
                _ => panic!("expected a record-backed simple type"),
            },
            _ => panic!("expected a type declaration"),
        }
    }

    #[test]
    fn function_with_contracts_dedenting_before_given() {
        let program =
            parse_program("define f(x: Int) -> Int\n  expect x >= 5\n  ensure x >= 0\ngiven\n  x\n");
        match &program.declarations[0] {
            Declaration::Function(d) => {
                assert_eq!(d.preconditions.len(), 1);
                assert_eq!(d.postconditions.len(), 1);
            }
            _ => panic!("expected a function declaration"),
        }
    }

    #[test]
    fn function_without_contracts() {
        let program = parse_program("define add(x: Int, y: Int) -> Int\ngiven\n  x + y\n");
        match &program.declarations[0] {
            Declaration::Function(d) => {
                assert!(d.preconditions.is_empty());
                assert!(d.postconditions.is_empty());
                assert_eq!(d.parameters.len(), 2);
            }
            _ => panic!("expected a function declaration"),
        }
    }

    #[test]
    fn function_with_contracts_wrapping_given_in_one_block() {
        let program = parse_program(
            "define f(x: Int) -> Int\n  expect x >= 0\n  given\n    x\n",
        );
        match &program.declarations[0] {
            Declaration::Function(d) => assert_eq!(d.preconditions.len(), 1),
            _ => panic!("expected a function declaration"),
        }
    }

    #[test]
    fn leading_token_other_than_type_or_define_is_an_error() {
        let tokens = lex("42\n").unwrap();
        assert!(Parser::new(tokens).parse().is_err());
    }
}
