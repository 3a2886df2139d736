use crate::{
    ast::Expression,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{Parser, Precedence},
    },
};

impl<I: Iterator<Item = Token>> Parser<I> {
    /// Advances past the next token if it has the expected kind.
    ///
    /// When the next token does not match, an `UnexpectedToken` error naming
    /// both kinds is recorded and the window is left where it was.
    ///
    /// # Returns
    /// `Some(())` if the token matched, `None` otherwise.
    pub(in crate::interpreter::parser) fn expect_peek(&mut self, kind: TokenKind) -> Option<()> {
        if self.peek.is(kind) {
            self.next_token();
            return Some(());
        }

        self.push_error(ParseError::UnexpectedToken { expected: kind,
                                                      found:    self.peek.kind,
                                                      line:     self.peek.line, });
        None
    }

    /// Consumes an optional trailing semicolon.
    pub(in crate::interpreter::parser) fn skip_semicolon(&mut self) {
        if self.peek.is(TokenKind::Semicolon) {
            self.next_token();
        }
    }

    /// Skips the rest of a malformed statement.
    ///
    /// Stops on the terminating `;`, at the end of input, or just before the
    /// `}` closing the enclosing block, so the caller's loop resumes with the
    /// next statement.
    pub(in crate::interpreter::parser) fn synchronize(&mut self) {
        while !self.current.is(TokenKind::Semicolon)
              && !self.current.is(TokenKind::Eof)
              && !self.peek.is(TokenKind::RBrace)
        {
            self.next_token();
        }
    }

    /// Parses a comma-separated list of expressions until a closing token.
    ///
    /// This utility is shared by array literals and call arguments. The
    /// current token is the opening delimiter; on success the current token is
    /// the closing one. An immediately encountered closing token produces an
    /// empty list.
    ///
    /// Grammar: `list := (expression ("," expression)*)? closing`
    ///
    /// # Parameters
    /// - `closing`: The token kind that terminates the list (`]` or `)`).
    ///
    /// # Returns
    /// The parsed elements, or `None` if an element or the closing token was
    /// malformed.
    pub(in crate::interpreter::parser) fn parse_expression_list(&mut self,
                                                                closing: TokenKind)
                                                                -> Option<Vec<Expression>> {
        let mut items = Vec::new();

        if self.peek.is(closing) {
            self.next_token();
            return Some(items);
        }

        self.next_token();
        items.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek.is(TokenKind::Comma) {
            self.next_token();
            self.next_token();
            items.push(self.parse_expression(Precedence::Lowest)?);
        }

        self.expect_peek(closing)?;
        Some(items)
    }
}
