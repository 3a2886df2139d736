use std::rc::Rc;

use crate::{
    error::RuntimeError,
    interpreter::value::core::{NULL, Object},
};

/// Returns the length of a string (in bytes) or an array.
///
/// Arity is checked by the caller; `args` holds exactly one argument.
///
/// # Example
/// ```
/// use capuchin::interpreter::{evaluator::function::builtin::len, value::core::Object};
///
/// assert_eq!(len(&[Object::from("four")]), Object::Integer(4));
/// assert_eq!(len(&[Object::Integer(1)]).to_string(),
///            "ERROR: argument to `len` not supported, got INTEGER");
/// ```
pub fn len(args: &[Object]) -> Object {
    let length = match &args[0] {
        Object::Str(s) => s.len(),
        Object::Array(elements) => elements.len(),
        other => {
            return RuntimeError::BuiltinArgumentNotSupported { name: "len",
                                                               got:  other.object_type(), }.into();
        },
    };

    Object::Integer(i64::try_from(length).unwrap_or(i64::MAX))
}

/// Returns the first element of an array, or `null` if it is empty.
pub fn first(args: &[Object]) -> Object {
    match &args[0] {
        Object::Array(elements) => elements.first().cloned().unwrap_or(NULL),
        other => expected_array("first", other),
    }
}

/// Returns the last element of an array, or `null` if it is empty.
pub fn last(args: &[Object]) -> Object {
    match &args[0] {
        Object::Array(elements) => elements.last().cloned().unwrap_or(NULL),
        other => expected_array("last", other),
    }
}

/// Returns a new array holding every element but the first.
///
/// An empty array yields `null`. The argument is left untouched.
///
/// # Example
/// ```
/// use capuchin::interpreter::{evaluator::function::builtin::rest, value::core::Object};
///
/// let array = Object::from(vec![Object::Integer(1), Object::Integer(2), Object::Integer(3)]);
/// assert_eq!(rest(&[array]).to_string(), "[2, 3]");
/// ```
pub fn rest(args: &[Object]) -> Object {
    match &args[0] {
        Object::Array(elements) if elements.is_empty() => NULL,
        Object::Array(elements) => Object::Array(Rc::new(elements[1..].to_vec())),
        other => expected_array("rest", other),
    }
}

/// Returns a new array with the second argument appended to the first.
///
/// The original array is left untouched.
pub fn push(args: &[Object]) -> Object {
    match &args[0] {
        Object::Array(elements) => {
            let mut pushed = Vec::with_capacity(elements.len() + 1);
            pushed.extend(elements.iter().cloned());
            pushed.push(args[1].clone());
            Object::from(pushed)
        },
        other => expected_array("push", other),
    }
}

fn expected_array(name: &'static str, got: &Object) -> Object {
    RuntimeError::BuiltinExpectedArray { name,
                                         got: got.object_type() }.into()
}
