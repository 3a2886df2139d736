use std::fmt;

use crate::{
    ast::{InfixOperator, PrefixOperator},
    interpreter::value::core::ObjectType,
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
///
/// The rendered messages follow fixed templates; programs and tests observe
/// them, so the wording here must not drift.
pub enum RuntimeError {
    /// Tried to use a name bound nowhere in the scope chain.
    UnknownIdentifier {
        /// The name of the identifier.
        name: String,
    },
    /// A prefix operator was applied to an operand it does not support.
    UnknownPrefixOperator {
        /// The operator.
        operator: PrefixOperator,
        /// The operand type.
        operand:  ObjectType,
    },
    /// An infix operator was applied to two operands of the same type that it
    /// does not support.
    UnknownInfixOperator {
        /// Left operand type.
        left:     ObjectType,
        /// The operator.
        operator: InfixOperator,
        /// Right operand type.
        right:    ObjectType,
    },
    /// An infix operator was applied to operands of different types.
    TypeMismatch {
        /// Left operand type.
        left:     ObjectType,
        /// The operator.
        operator: InfixOperator,
        /// Right operand type.
        right:    ObjectType,
    },
    /// Integer division with a zero divisor.
    DivisionByZero,
    /// A value that cannot be hashed was used as a hash key.
    UnusableAsHashKey {
        /// The offending type.
        object_type: ObjectType,
    },
    /// The indexed value supports no indexing at all.
    IndexNotSupported {
        /// The indexed type.
        object_type: ObjectType,
    },
    /// An array was indexed with something other than an integer.
    ArrayIndexNotInteger {
        /// The index type.
        index: ObjectType,
    },
    /// Something other than a function or builtin was called.
    NotAFunction {
        /// The callee type.
        object_type: ObjectType,
    },
    /// A user function was called with the wrong number of arguments.
    WrongArgumentCount {
        /// Number of declared parameters.
        want: usize,
        /// Number of supplied arguments.
        got:  usize,
    },
    /// A builtin was called with the wrong number of arguments.
    BuiltinArity {
        /// The builtin's name.
        name: &'static str,
        /// The number of arguments it takes.
        want: usize,
    },
    /// A builtin received an argument of a type it cannot handle.
    BuiltinArgumentNotSupported {
        /// The builtin's name.
        name: &'static str,
        /// The argument type received.
        got:  ObjectType,
    },
    /// A builtin that operates on arrays received something else.
    BuiltinExpectedArray {
        /// The builtin's name.
        name: &'static str,
        /// The argument type received.
        got:  ObjectType,
    },
}

/// Spells out small argument counts for builtin arity messages.
const fn count_word(n: usize) -> &'static str {
    match n {
        0 => "no arguments",
        1 => "one argument",
        2 => "two arguments",
        3 => "three arguments",
        _ => "several arguments",
    }
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownIdentifier { name } => write!(f, "identifier not found: {name}"),
            Self::UnknownPrefixOperator { operator, operand } => {
                write!(f, "unknown operator: {operator}{operand}")
            },
            Self::UnknownInfixOperator { left,
                                         operator,
                                         right, } => {
                write!(f, "unknown operator: {left} {operator} {right}")
            },
            Self::TypeMismatch { left,
                                 operator,
                                 right, } => write!(f, "type mismatch: {left} {operator} {right}"),
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::UnusableAsHashKey { object_type } => {
                write!(f, "unusable as hash key: {object_type}")
            },
            Self::IndexNotSupported { object_type } => {
                write!(f, "index operator not supported: {object_type}")
            },
            Self::ArrayIndexNotInteger { index } => {
                write!(f, "index operator not supported: ARRAY[{index}]")
            },
            Self::NotAFunction { object_type } => write!(f, "not a function: {object_type}"),
            Self::WrongArgumentCount { want, got } => {
                write!(f, "wrong number of arguments: want={want}, got={got}")
            },
            Self::BuiltinArity { name, want } => write!(f, "`{name}` takes {}", count_word(*want)),
            Self::BuiltinArgumentNotSupported { name, got } => {
                write!(f, "argument to `{name}` not supported, got {got}")
            },
            Self::BuiltinExpectedArray { name, got } => {
                write!(f, "argument to `{name}` must be ARRAY, got {got}")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
