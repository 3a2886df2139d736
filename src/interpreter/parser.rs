/// Parser state and the expression-parsing entry point.
///
/// Holds the `Parser` type, the precedence table, and the precedence-climbing
/// loop every expression goes through.
pub mod core;

/// Prefix expression parsing.
///
/// Handlers for tokens that can start an expression: literals, identifiers,
/// prefix operators, grouping, `if`, function literals, arrays and hashes.
pub mod unary;

/// Infix expression parsing.
///
/// Handlers for tokens that continue an expression with an already parsed
/// left operand: binary operators, calls and index expressions.
pub mod binary;

/// Block parsing.
///
/// Parses brace-delimited statement sequences used as bodies.
pub mod block;

/// Statement parsing.
///
/// Dispatches on the leading token to `let`, `return` or expression
/// statements.
pub mod statement;

/// Parsing utilities.
///
/// Token expectations, error recovery, and comma-separated list parsing
/// shared by several handlers.
pub mod utils;
