use tracing::debug;

use crate::{
    ast::{Expression, Program},
    error::ParseError,
    interpreter::lexer::{Lexer, Token, TokenKind},
};

/// Binding power of an operator, lowest first.
///
/// The derived ordering is what the precedence-climbing loop compares, so the
/// variant order is the precedence table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Anything that does not continue an expression.
    Lowest,
    /// `==`, `!=`
    Equals,
    /// `<`, `>`
    LessGreater,
    /// `+`, `-`
    Sum,
    /// `*`, `/`
    Product,
    /// `-x`, `!x`
    Prefix,
    /// `f(x)`, `a[i]`
    Call,
}

impl Precedence {
    /// Returns the infix binding power of a token kind.
    ///
    /// Tokens without an infix meaning map to `Lowest`, which stops the
    /// precedence-climbing loop.
    ///
    /// # Example
    /// ```
    /// use capuchin::interpreter::{lexer::TokenKind, parser::core::Precedence};
    ///
    /// assert!(Precedence::of(TokenKind::Asterisk) > Precedence::of(TokenKind::Plus));
    /// assert_eq!(Precedence::of(TokenKind::Semicolon), Precedence::Lowest);
    /// ```
    #[must_use]
    pub const fn of(kind: TokenKind) -> Self {
        match kind {
            TokenKind::Eq | TokenKind::NotEq => Self::Equals,
            TokenKind::Lt | TokenKind::Gt => Self::LessGreater,
            TokenKind::Plus | TokenKind::Minus => Self::Sum,
            TokenKind::Asterisk | TokenKind::Slash => Self::Product,
            TokenKind::LParen | TokenKind::LBracket => Self::Call,
            _ => Self::Lowest,
        }
    }
}

/// Builds an AST from a token stream.
///
/// The parser looks at exactly two tokens at a time: `current`, the token
/// being parsed, and `peek`, the one after it. Syntax errors are collected
/// rather than returned, and parsing continues with the next statement, so a
/// single pass reports every problem it can find.
///
/// # Example
/// ```
/// use capuchin::interpreter::parser::core::Parser;
///
/// let (program, errors) = Parser::from_source("let x = 1 + 2 * 3;").parse_program();
///
/// assert!(errors.is_empty());
/// assert_eq!(program.to_string(), "let x = (1 + (2 * 3));");
/// ```
pub struct Parser<I: Iterator<Item = Token>> {
    pub(in crate::interpreter::parser) tokens:  I,
    pub(in crate::interpreter::parser) current: Token,
    pub(in crate::interpreter::parser) peek:    Token,
    pub(in crate::interpreter::parser) errors:  Vec<ParseError>,
}

impl<'src> Parser<Lexer<'src>> {
    /// Creates a parser reading directly from source text.
    #[must_use]
    pub fn from_source(source: &'src str) -> Self {
        Self::new(Lexer::new(source))
    }
}

impl<I: Iterator<Item = Token>> Parser<I> {
    /// Creates a parser over a token stream.
    ///
    /// The stream is expected to end with an `Eof` token; if it simply runs
    /// dry, the parser behaves as if it produced `Eof` forever.
    pub fn new(tokens: I) -> Self {
        let placeholder = Token::new(TokenKind::Eof, "", 1);
        let mut parser = Self { tokens,
                                current: placeholder.clone(),
                                peek: placeholder,
                                errors: Vec::new() };
        parser.next_token();
        parser.next_token();
        parser
    }

    /// Parses the whole token stream into a program.
    ///
    /// Statements that fail to parse are dropped from the program and their
    /// errors are recorded; parsing resumes at the following token.
    ///
    /// # Returns
    /// The best-effort program and the ordered list of syntax errors. An
    /// empty list means the program is a faithful parse of the input.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn parse_program(mut self) -> (Program, Vec<ParseError>) {
        let mut program = Program::default();

        while !self.current.is(TokenKind::Eof) {
            if let Some(statement) = self.parse_statement() {
                program.statements.push(statement);
            }
            self.next_token();
        }

        debug!(statements = program.statements.len(),
               errors = self.errors.len(),
               "parsed program");
        (program, self.errors)
    }

    /// Parses an expression whose operators all bind tighter than
    /// `precedence`.
    ///
    /// This is the precedence-climbing loop: the prefix handler of the current
    /// token produces the initial left operand, then infix handlers keep
    /// folding it into larger expressions while the next token binds more
    /// tightly than `precedence`. The comparison is strict, which makes every
    /// binary operator left-associative.
    ///
    /// # Parameters
    /// - `precedence`: The binding power of the operator to the left of this
    ///   expression, or `Lowest` at the start of an expression.
    ///
    /// # Returns
    /// The parsed expression, or `None` if an error was recorded.
    pub fn parse_expression(&mut self, precedence: Precedence) -> Option<Expression> {
        let mut left = self.parse_prefix()?;

        while !self.peek.is(TokenKind::Semicolon) && precedence < Precedence::of(self.peek.kind) {
            self.next_token();
            left = self.parse_infix(left)?;
        }

        Some(left)
    }

    /// Shifts the token window one token forward.
    pub(in crate::interpreter::parser) fn next_token(&mut self) {
        let line = self.peek.line;
        let next = self.tokens
                       .next()
                       .unwrap_or_else(|| Token::new(TokenKind::Eof, "", line));
        self.current = std::mem::replace(&mut self.peek, next);
    }

    /// Records a syntax error.
    pub(in crate::interpreter::parser) fn push_error(&mut self, error: ParseError) {
        debug!(line = error.line(), %error, "syntax error");
        self.errors.push(error);
    }
}
