use crate::{
    ast::InfixOperator,
    error::RuntimeError,
    interpreter::value::core::{Object, ObjectType},
};

/// Applies an infix operator to two strings.
///
/// Only `+` is defined; it yields a new string holding both operands.
///
/// # Returns
/// The concatenated string, or an `unknown operator` error for every other
/// operator.
pub fn eval_string_infix(operator: InfixOperator, left: &str, right: &str) -> Object {
    match operator {
        InfixOperator::Add => {
            let mut joined = String::with_capacity(left.len() + right.len());
            joined.push_str(left);
            joined.push_str(right);
            Object::from(joined)
        },
        _ => RuntimeError::UnknownInfixOperator { left: ObjectType::Str,
                                                  operator,
                                                  right: ObjectType::Str }.into(),
    }
}
