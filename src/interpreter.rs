/// Chained lexical scopes.
///
/// An environment maps names to objects and optionally links to the scope
/// that encloses it. Function calls create a fresh environment enclosed by
/// the function's defining scope, which is what makes closures work.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the tree produced by the parser and yields an object
/// for every node. Runtime failures are ordinary `Object::Error` values, and
/// `return` travels outward as a wrapped `Object::ReturnValue` until a call
/// boundary or the program level unwraps it.
///
/// # Responsibilities
/// - Evaluates statements, expressions, conditionals and calls.
/// - Applies operators according to operand types.
/// - Hosts the builtin function table.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads raw source text and produces a stream of tokens, each
/// corresponding to an identifier, literal, operator, delimiter or keyword.
/// Whitespace and `//` comments are skipped; line breaks are counted so
/// tokens carry their source line.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// Statements are parsed by recursive descent; expressions by precedence
/// climbing over prefix and infix parse functions selected by token kind.
///
/// # Responsibilities
/// - Converts tokens into [`crate::ast`] nodes.
/// - Collects syntax errors with line information instead of stopping at the
///   first one.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// Integers, booleans, strings, null, arrays, hashes, functions and builtins,
/// plus the error and return-signal objects the evaluator uses internally.
pub mod value;
