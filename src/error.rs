/// Parsing errors.
///
/// Defines the syntax errors the parser records while building the AST.
/// Parsing does not stop at the first error; every error is collected and
/// handed back alongside the best-effort program.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the error kinds the evaluator can produce. Runtime errors are
/// carried as ordinary values (`Object::Error`) through evaluation, and the
/// message each one renders is part of the language's observable behavior.
pub mod runtime_error;

pub use parse_error::{ParseError, ParseErrors};
pub use runtime_error::RuntimeError;
