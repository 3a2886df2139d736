use crate::{
    ast::{Expression, Identifier, PrefixOperator},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{Parser, Precedence},
    },
};

impl<I: Iterator<Item = Token>> Parser<I> {
    /// Parses an expression that starts at the current token.
    ///
    /// Every token kind that can begin an expression has a handler here. Any
    /// other token is a syntax error: the error is recorded and no node is
    /// produced.
    ///
    /// # Returns
    /// The parsed expression, or `None` if an error was recorded.
    pub(in crate::interpreter::parser) fn parse_prefix(&mut self) -> Option<Expression> {
        match self.current.kind {
            TokenKind::Ident => Some(Expression::Identifier(Identifier::from_token(self.current
                                                                                       .clone()))),
            TokenKind::Int => self.parse_integer_literal(),
            TokenKind::String => {
                Some(Expression::Str { token: self.current.clone(),
                                       value: self.current.literal.clone(), })
            },
            TokenKind::True | TokenKind::False => {
                Some(Expression::Boolean { token: self.current.clone(),
                                           value: self.current.is(TokenKind::True), })
            },
            TokenKind::Bang => self.parse_prefix_operator(PrefixOperator::Not),
            TokenKind::Minus => self.parse_prefix_operator(PrefixOperator::Negate),
            TokenKind::LParen => self.parse_grouped_expression(),
            TokenKind::If => self.parse_if_expression(),
            TokenKind::Function => self.parse_function_literal(),
            TokenKind::LBracket => {
                let token = self.current.clone();
                let elements = self.parse_expression_list(TokenKind::RBracket)?;
                Some(Expression::Array { token, elements })
            },
            TokenKind::LBrace => self.parse_hash_literal(),
            kind => {
                self.push_error(ParseError::NoPrefixParseFn { token: kind,
                                                              line:  self.current.line, });
                None
            },
        }
    }

    /// Parses an integer literal.
    ///
    /// Literals that do not fit in an `i64` are reported as
    /// `InvalidInteger` and dropped.
    fn parse_integer_literal(&mut self) -> Option<Expression> {
        let token = self.current.clone();

        match token.literal.parse::<i64>() {
            Ok(value) => Some(Expression::Integer { token, value }),
            Err(_) => {
                self.push_error(ParseError::InvalidInteger { literal: token.literal,
                                                             line:    token.line, });
                None
            },
        }
    }

    /// Parses `-<expr>` or `!<expr>`.
    ///
    /// The operand is parsed at `Prefix` precedence, so only calls and index
    /// expressions bind tighter than the operator: `-a * b` is `((-a) * b)`.
    fn parse_prefix_operator(&mut self, operator: PrefixOperator) -> Option<Expression> {
        let token = self.current.clone();
        self.next_token();

        let right = self.parse_expression(Precedence::Prefix)?;

        Some(Expression::Prefix { token,
                                  operator,
                                  right: Box::new(right) })
    }

    /// Parses a parenthesized expression.
    ///
    /// The inner expression restarts at `Lowest` precedence; no node is
    /// created for the parentheses themselves.
    fn parse_grouped_expression(&mut self) -> Option<Expression> {
        self.next_token();

        let expression = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RParen)?;

        Some(expression)
    }

    /// Parses an `if` expression with an optional `else` branch.
    ///
    /// Syntax:
    /// ```text
    ///     if (<condition>) { <consequence> } else { <alternative> }
    /// ```
    ///
    /// # Errors
    /// Records `UnexpectedToken` if the parentheses around the condition or
    /// the braces around either branch are missing.
    fn parse_if_expression(&mut self) -> Option<Expression> {
        let token = self.current.clone();

        self.expect_peek(TokenKind::LParen)?;
        self.next_token();
        let condition = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RParen)?;

        self.expect_peek(TokenKind::LBrace)?;
        let consequence = self.parse_block();

        let alternative = if self.peek.is(TokenKind::Else) {
            self.next_token();
            self.expect_peek(TokenKind::LBrace)?;
            Some(self.parse_block())
        } else {
            None
        };

        Some(Expression::If { token,
                              condition: Box::new(condition),
                              consequence,
                              alternative })
    }

    /// Parses a function literal `fn(<params>) { <body> }`.
    fn parse_function_literal(&mut self) -> Option<Expression> {
        let token = self.current.clone();

        self.expect_peek(TokenKind::LParen)?;
        let parameters = self.parse_function_parameters()?;

        self.expect_peek(TokenKind::LBrace)?;
        let body = self.parse_block();

        Some(Expression::Function { token,
                                    parameters,
                                    body })
    }

    /// Parses the parameter list of a function literal.
    ///
    /// Grammar: `params := "(" (identifier ("," identifier)*)? ")"`
    ///
    /// The current token must be the opening `(`.
    fn parse_function_parameters(&mut self) -> Option<Vec<Identifier>> {
        let mut parameters = Vec::new();

        if self.peek.is(TokenKind::RParen) {
            self.next_token();
            return Some(parameters);
        }

        self.expect_peek(TokenKind::Ident)?;
        parameters.push(Identifier::from_token(self.current.clone()));

        while self.peek.is(TokenKind::Comma) {
            self.next_token();
            self.expect_peek(TokenKind::Ident)?;
            parameters.push(Identifier::from_token(self.current.clone()));
        }

        self.expect_peek(TokenKind::RParen)?;
        Some(parameters)
    }

    /// Parses a hash literal of the form `{ key: value, ... }`.
    ///
    /// Keys and values are arbitrary expressions; whether a key is usable is
    /// decided at evaluation time. An empty hash `{}` is accepted.
    ///
    /// Grammar: `hash := "{" (expression ":" expression ("," expression ":"
    /// expression)*)? "}"`
    fn parse_hash_literal(&mut self) -> Option<Expression> {
        let token = self.current.clone();
        let mut pairs = Vec::new();

        while !self.peek.is(TokenKind::RBrace) {
            self.next_token();
            let key = self.parse_expression(Precedence::Lowest)?;

            self.expect_peek(TokenKind::Colon)?;
            self.next_token();
            let value = self.parse_expression(Precedence::Lowest)?;

            pairs.push((key, value));

            if !self.peek.is(TokenKind::RBrace) {
                self.expect_peek(TokenKind::Comma)?;
            }
        }

        self.expect_peek(TokenKind::RBrace)?;
        Some(Expression::Hash { token, pairs })
    }
}
