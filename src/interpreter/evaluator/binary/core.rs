use crate::{
    ast::InfixOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::binary::{integer::eval_integer_infix, string::eval_string_infix},
        value::core::Object,
    },
};

/// Evaluates an infix operation on two already evaluated operands.
///
/// Dispatch order:
/// 1. Two integers: arithmetic or comparison.
/// 2. Two strings: concatenation.
/// 3. `==` / `!=` where both operands are booleans or `null`: comparison by
///    value.
/// 4. Operands of different types: `type mismatch`.
/// 5. Anything else: `unknown operator`.
///
/// A mismatch is therefore reported before an unknown operator whenever the
/// operand types differ.
///
/// # Example
/// ```
/// use capuchin::{
///     ast::InfixOperator,
///     interpreter::{evaluator::binary::core::eval_infix, value::core::Object},
/// };
///
/// let sum = eval_infix(InfixOperator::Add, &Object::Integer(5), &Object::Integer(10));
/// assert_eq!(sum, Object::Integer(15));
///
/// let err = eval_infix(InfixOperator::Add, &Object::Integer(5), &Object::Boolean(true));
/// assert_eq!(err.to_string(), "ERROR: type mismatch: INTEGER + BOOLEAN");
/// ```
#[must_use]
pub fn eval_infix(operator: InfixOperator, left: &Object, right: &Object) -> Object {
    match (left, right) {
        (Object::Integer(l), Object::Integer(r)) => eval_integer_infix(operator, *l, *r),
        (Object::Str(l), Object::Str(r)) => eval_string_infix(operator, l, r),
        _ if is_equality(operator) && is_value_comparable(left) && is_value_comparable(right) => {
            let equal = left == right;
            Object::from(if operator == InfixOperator::Equal { equal } else { !equal })
        },
        _ if left.object_type() != right.object_type() => {
            RuntimeError::TypeMismatch { left: left.object_type(),
                                         operator,
                                         right: right.object_type() }.into()
        },
        _ => RuntimeError::UnknownInfixOperator { left: left.object_type(),
                                                  operator,
                                                  right: right.object_type() }.into(),
    }
}

const fn is_equality(operator: InfixOperator) -> bool {
    matches!(operator, InfixOperator::Equal | InfixOperator::NotEqual)
}

/// Booleans and `null` are compared by value under `==` and `!=`.
const fn is_value_comparable(object: &Object) -> bool {
    matches!(object, Object::Boolean(_) | Object::Null)
}
