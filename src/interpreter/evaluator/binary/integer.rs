use crate::{ast::InfixOperator, error::RuntimeError, interpreter::value::core::Object};

/// Applies an infix operator to two integers.
///
/// Arithmetic wraps on overflow. Comparisons yield booleans.
///
/// # Returns
/// The integer or boolean result, or a `division by zero` error.
///
/// # Example
/// ```
/// use capuchin::{
///     ast::InfixOperator,
///     interpreter::{evaluator::binary::integer::eval_integer_infix, value::core::Object},
/// };
///
/// assert_eq!(eval_integer_infix(InfixOperator::Div, 7, 2), Object::Integer(3));
/// assert_eq!(eval_integer_infix(InfixOperator::Less, 1, 2), Object::Boolean(true));
/// assert_eq!(eval_integer_infix(InfixOperator::Div, 1, 0).to_string(),
///            "ERROR: division by zero");
/// ```
#[must_use]
pub fn eval_integer_infix(operator: InfixOperator, left: i64, right: i64) -> Object {
    match operator {
        InfixOperator::Add => Object::Integer(left.wrapping_add(right)),
        InfixOperator::Sub => Object::Integer(left.wrapping_sub(right)),
        InfixOperator::Mul => Object::Integer(left.wrapping_mul(right)),
        InfixOperator::Div => {
            if right == 0 {
                return RuntimeError::DivisionByZero.into();
            }
            Object::Integer(left.wrapping_div(right))
        },
        InfixOperator::Less => Object::from(left < right),
        InfixOperator::Greater => Object::from(left > right),
        InfixOperator::Equal => Object::from(left == right),
        InfixOperator::NotEqual => Object::from(left != right),
    }
}
