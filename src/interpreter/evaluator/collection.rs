use std::rc::Rc;

use crate::{
    ast::Expression,
    error::RuntimeError,
    interpreter::{
        environment::Env,
        evaluator::core::{eval_expression, try_eval},
        value::core::{HashObject, HashPair, NULL, Object},
    },
};

/// Evaluates a hash literal.
///
/// Pairs are evaluated in source order, key before value. Each key must be
/// hashable (integer, boolean or string); a later pair with an equal key
/// replaces an earlier one.
///
/// # Returns
/// The hash object, or the first error produced by a key, a value, or an
/// unusable key type.
pub fn eval_hash_literal(pairs: &[(Expression, Expression)], env: &Env) -> Object {
    let mut hash = HashObject::default();

    for (key_expression, value_expression) in pairs {
        let key = try_eval!(eval_expression(key_expression, env));
        let Some(hash_key) = key.hash_key() else {
            return RuntimeError::UnusableAsHashKey { object_type: key.object_type() }.into();
        };

        let value = try_eval!(eval_expression(value_expression, env));
        hash.pairs.insert(hash_key, HashPair { key, value });
    }

    Object::Hash(Rc::new(hash))
}

/// Evaluates `left[index]`.
///
/// - Arrays take integer indices. Out-of-range indices, including negative
///   ones, yield `null` rather than an error.
/// - Hashes take any hashable key. Missing keys yield `null`.
/// - Every other base type is an error.
///
/// # Example
/// ```
/// use capuchin::interpreter::{
///     evaluator::collection::eval_index,
///     value::core::{NULL, Object},
/// };
///
/// let array = Object::from(vec![Object::Integer(1), Object::Integer(2)]);
///
/// assert_eq!(eval_index(&array, &Object::Integer(1)), Object::Integer(2));
/// assert_eq!(eval_index(&array, &Object::Integer(2)), NULL);
/// assert_eq!(eval_index(&array, &Object::Integer(-1)), NULL);
/// assert_eq!(eval_index(&Object::Integer(1), &Object::Integer(0)).to_string(),
///            "ERROR: index operator not supported: INTEGER");
/// ```
#[must_use]
pub fn eval_index(left: &Object, index: &Object) -> Object {
    match (left, index) {
        (Object::Array(elements), Object::Integer(i)) => {
            usize::try_from(*i).ok().and_then(|i| elements.get(i)).cloned().unwrap_or(NULL)
        },
        (Object::Array(_), other) => {
            RuntimeError::ArrayIndexNotInteger { index: other.object_type() }.into()
        },
        (Object::Hash(hash), key) => match key.hash_key() {
            Some(hash_key) => hash.get(&hash_key).cloned().unwrap_or(NULL),
            None => RuntimeError::UnusableAsHashKey { object_type: key.object_type() }.into(),
        },
        (other, _) => RuntimeError::IndexNotSupported { object_type: other.object_type() }.into(),
    }
}
