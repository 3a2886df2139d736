/// Core evaluation logic.
///
/// Contains the program, block, statement and expression dispatch, and the
/// propagation rules for runtime errors and `return` signals.
pub mod core;

/// Prefix operator evaluation.
///
/// Implements `!` (truthiness negation) and `-` (integer negation).
pub mod unary;

/// Infix operator evaluation.
///
/// Implements arithmetic, comparison, string concatenation and equality,
/// along with the type-mismatch and unknown-operator errors.
pub mod binary;

/// Array, hash and index evaluation.
///
/// Builds array and hash objects from literals and resolves index
/// expressions against them.
pub mod collection;

/// Function evaluation.
///
/// Handles closures, builtin dispatch, argument binding and return value
/// unwrapping.
pub mod function;
