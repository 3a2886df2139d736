use crate::{
    ast::PrefixOperator,
    error::RuntimeError,
    interpreter::value::core::Object,
};

/// Evaluates a prefix operation on an already evaluated operand.
///
/// Supported operators:
/// - `Not`: the negation of the operand's truthiness, for any operand.
/// - `Negate`: integer negation (wrapping on `i64::MIN`).
///
/// # Returns
/// The resulting object, or an `unknown operator` error when `-` is applied
/// to a non-integer.
///
/// # Example
/// ```
/// use capuchin::{
///     ast::PrefixOperator,
///     interpreter::{evaluator::unary::eval_prefix, value::core::Object},
/// };
///
/// assert_eq!(eval_prefix(PrefixOperator::Not, &Object::Integer(5)),
///            Object::Boolean(false));
/// assert_eq!(eval_prefix(PrefixOperator::Negate, &Object::Integer(5)),
///            Object::Integer(-5));
/// assert_eq!(eval_prefix(PrefixOperator::Negate, &Object::Boolean(true)).to_string(),
///            "ERROR: unknown operator: -BOOLEAN");
/// ```
#[must_use]
pub fn eval_prefix(operator: PrefixOperator, right: &Object) -> Object {
    match operator {
        PrefixOperator::Not => Object::from(!right.is_truthy()),
        PrefixOperator::Negate => match right {
            Object::Integer(n) => Object::Integer(n.wrapping_neg()),
            other => RuntimeError::UnknownPrefixOperator { operator,
                                                           operand: other.object_type() }.into(),
        },
    }
}
