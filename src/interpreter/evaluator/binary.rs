/// Infix dispatch on operand types.
///
/// Routes each operation to the integer or string implementation, handles
/// equality between booleans and `null`, and reports mismatched or
/// unsupported operand types.
pub mod core;

/// Integer arithmetic and comparison.
///
/// Implements `+ - * /` and `< > == !=` on two integers. Arithmetic wraps on
/// overflow; division by zero is a runtime error.
pub mod integer;

/// String operations.
///
/// Strings support concatenation with `+` and nothing else.
pub mod string;
