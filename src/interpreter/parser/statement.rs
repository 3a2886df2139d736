use tracing::trace;

use crate::{
    ast::{Identifier, Statement},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{Parser, Precedence},
    },
};

impl<I: Iterator<Item = Token>> Parser<I> {
    /// Parses a single statement.
    ///
    /// The leading token decides the statement kind:
    /// - `let` starts a binding,
    /// - `return` starts a return statement,
    /// - anything else is parsed as an expression statement.
    ///
    /// # Returns
    /// The parsed statement, or `None` if it was malformed. In that case the
    /// error has been recorded and the token window has moved past the
    /// offending construct.
    pub(in crate::interpreter::parser) fn parse_statement(&mut self) -> Option<Statement> {
        trace!(kind = %self.current.kind, line = self.current.line, "statement");

        match self.current.kind {
            TokenKind::Let => self.parse_let_statement(),
            TokenKind::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    /// Parses a variable binding.
    ///
    /// Grammar: `let := "let" identifier "=" expression ";"?`
    ///
    /// A missing identifier or `=` is an error; the rest of the statement is
    /// skipped so parsing can resume after it.
    fn parse_let_statement(&mut self) -> Option<Statement> {
        let token = self.current.clone();

        if self.expect_peek(TokenKind::Ident).is_none() {
            self.synchronize();
            return None;
        }
        let name = Identifier::from_token(self.current.clone());

        if self.expect_peek(TokenKind::Assign).is_none() {
            self.synchronize();
            return None;
        }
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_semicolon();

        Some(Statement::Let { token, name, value })
    }

    /// Parses a return statement.
    ///
    /// Grammar: `return := "return" expression? ";"?`
    ///
    /// The value is omitted when `return` is directly followed by `;`, the
    /// end of the enclosing block, or the end of input.
    fn parse_return_statement(&mut self) -> Option<Statement> {
        let token = self.current.clone();

        if self.peek.is(TokenKind::Semicolon) {
            self.next_token();
            return Some(Statement::Return { token, value: None });
        }
        if self.peek.is(TokenKind::RBrace) || self.peek.is(TokenKind::Eof) {
            return Some(Statement::Return { token, value: None });
        }

        self.next_token();
        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_semicolon();

        Some(Statement::Return { token,
                                 value: Some(value) })
    }

    /// Parses an expression used as a statement, with an optional trailing
    /// semicolon.
    fn parse_expression_statement(&mut self) -> Option<Statement> {
        let token = self.current.clone();
        let expression = self.parse_expression(Precedence::Lowest)?;
        self.skip_semicolon();

        Some(Statement::Expression { token, expression })
    }
}
