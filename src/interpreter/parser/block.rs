use crate::{
    ast::BlockStatement,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::Parser,
    },
};

impl<I: Iterator<Item = Token>> Parser<I> {
    /// Parses a block delimited by braces.
    ///
    /// A block consists of zero or more statements. Parsing continues until
    /// the closing `}`; reaching the end of input first records an error and
    /// returns the statements collected so far.
    ///
    /// Grammar: `block := "{" statement* "}"`
    ///
    /// The current token must be the opening `{`. On return the current token
    /// is the closing `}` (or `Eof`).
    pub(in crate::interpreter::parser) fn parse_block(&mut self) -> BlockStatement {
        let token = self.current.clone();
        let mut statements = Vec::new();

        self.next_token();

        while !self.current.is(TokenKind::RBrace) {
            if self.current.is(TokenKind::Eof) {
                self.push_error(ParseError::UnexpectedToken { expected: TokenKind::RBrace,
                                                              found:    TokenKind::Eof,
                                                              line:     self.current.line, });
                break;
            }

            if let Some(statement) = self.parse_statement() {
                statements.push(statement);
            }
            self.next_token();
        }

        BlockStatement { token, statements }
    }
}
