use crate::{
    ast::{Expression, InfixOperator},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{Parser, Precedence},
    },
};

impl<I: Iterator<Item = Token>> Parser<I> {
    /// Continues an expression whose left operand is already parsed.
    ///
    /// The current token is the infix token itself. Only tokens with a
    /// precedence above `Lowest` ever reach this point, and each of them has
    /// a handler: `(` starts a call, `[` an index expression, and every other
    /// one is a binary operator.
    ///
    /// # Parameters
    /// - `left`: The expression parsed so far.
    ///
    /// # Returns
    /// The combined expression, or `None` if an error was recorded.
    pub(in crate::interpreter::parser) fn parse_infix(&mut self,
                                                      left: Expression)
                                                      -> Option<Expression> {
        match self.current.kind {
            TokenKind::LParen => self.parse_call_expression(left),
            TokenKind::LBracket => self.parse_index_expression(left),
            kind => {
                let operator = token_to_infix_operator(kind)?;
                self.parse_infix_operator(left, operator)
            },
        }
    }

    /// Parses the right operand of a binary operator.
    ///
    /// The right operand is parsed at the operator's own precedence, so an
    /// operator of equal precedence to its right stops the inner loop and is
    /// folded in by the outer one: `a - b - c` is `((a - b) - c)`.
    fn parse_infix_operator(&mut self,
                            left: Expression,
                            operator: InfixOperator)
                            -> Option<Expression> {
        let token = self.current.clone();
        let precedence = Precedence::of(token.kind);
        self.next_token();

        let right = self.parse_expression(precedence)?;

        Some(Expression::Infix { token,
                                 left: Box::new(left),
                                 operator,
                                 right: Box::new(right) })
    }

    /// Parses the argument list of a call; `function` is the callee.
    fn parse_call_expression(&mut self, function: Expression) -> Option<Expression> {
        let token = self.current.clone();
        let arguments = self.parse_expression_list(TokenKind::RParen)?;

        Some(Expression::Call { token,
                                function: Box::new(function),
                                arguments })
    }

    /// Parses `[<index>]` following an already parsed expression.
    fn parse_index_expression(&mut self, left: Expression) -> Option<Expression> {
        let token = self.current.clone();
        self.next_token();

        let index = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RBracket)?;

        Some(Expression::Index { token,
                                 left: Box::new(left),
                                 index: Box::new(index) })
    }
}

/// Maps a token kind to its corresponding binary operator.
///
/// # Returns
/// `Some(InfixOperator)` if the token is a binary operator, otherwise `None`.
///
/// # Example
/// ```
/// use capuchin::{
///     ast::InfixOperator,
///     interpreter::{lexer::TokenKind, parser::binary::token_to_infix_operator},
/// };
///
/// assert_eq!(token_to_infix_operator(TokenKind::Plus), Some(InfixOperator::Add));
/// assert_eq!(token_to_infix_operator(TokenKind::Comma), None);
/// ```
#[must_use]
pub const fn token_to_infix_operator(kind: TokenKind) -> Option<InfixOperator> {
    match kind {
        TokenKind::Plus => Some(InfixOperator::Add),
        TokenKind::Minus => Some(InfixOperator::Sub),
        TokenKind::Asterisk => Some(InfixOperator::Mul),
        TokenKind::Slash => Some(InfixOperator::Div),
        TokenKind::Lt => Some(InfixOperator::Less),
        TokenKind::Gt => Some(InfixOperator::Greater),
        TokenKind::Eq => Some(InfixOperator::Equal),
        TokenKind::NotEq => Some(InfixOperator::NotEqual),
        _ => None,
    }
}
