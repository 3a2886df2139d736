use std::fmt;

use crate::interpreter::lexer::TokenKind;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during parsing.
///
/// `Display` renders only the message; the line is kept as a field so hosts
/// can add location information themselves.
pub enum ParseError {
    /// The token after the current one was not the one the grammar requires.
    UnexpectedToken {
        /// The token kind the grammar required.
        expected: TokenKind,
        /// The token kind actually found.
        found:    TokenKind,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A token that cannot start an expression appeared where one was
    /// expected.
    NoPrefixParseFn {
        /// The offending token kind.
        token: TokenKind,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An integer literal could not be represented as a 64-bit integer.
    InvalidInteger {
        /// The literal text.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl ParseError {
    /// The source line the error was reported on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedToken { line, .. }
            | Self::NoPrefixParseFn { line, .. }
            | Self::InvalidInteger { line, .. } => *line,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedToken { expected, found, .. } => {
                write!(f, "expected next token to be {expected}, got {found} instead")
            },
            Self::NoPrefixParseFn { token, .. } => {
                write!(f, "no prefix parse function for {token} found")
            },
            Self::InvalidInteger { literal, .. } => {
                write!(f, "could not parse {literal:?} as integer")
            },
        }
    }
}

impl std::error::Error for ParseError {}

/// The full, ordered list of syntax errors from one parse.
///
/// Used by hosts that want to treat "any syntax error" as a single failure.
/// Each error renders on its own line, prefixed with its source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrors(pub Vec<ParseError>);

impl fmt::Display for ParseErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "Error on line {}: {error}", error.line())?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseErrors {}
