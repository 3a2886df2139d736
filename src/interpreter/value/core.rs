use std::{fmt, rc::Rc};

use rustc_hash::FxHashMap;

use crate::{
    ast::{BlockStatement, Identifier},
    error::RuntimeError,
    interpreter::{environment::Env, value::hash_key::HashKey},
};

/// The shared `null` value.
pub const NULL: Object = Object::Null;
/// The shared `true` value.
pub const TRUE: Object = Object::Boolean(true);
/// The shared `false` value.
pub const FALSE: Object = Object::Boolean(false);

/// Signature of a native builtin implementation.
///
/// A builtin receives the evaluated arguments and returns an object; errors
/// are returned as `Object::Error` like everywhere else.
pub type BuiltinFn = fn(&[Object]) -> Object;

/// The type tag of an object, as it appears in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ObjectType {
    /// `INTEGER`
    Integer,
    /// `BOOLEAN`
    Boolean,
    /// `STRING`
    Str,
    /// `NULL`
    Null,
    /// `ARRAY`
    Array,
    /// `HASH`
    Hash,
    /// `FUNCTION`
    Function,
    /// `BUILTIN`
    Builtin,
    /// `ERROR`
    Error,
    /// `RETURN_VALUE`
    ReturnValue,
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Integer => "INTEGER",
            Self::Boolean => "BOOLEAN",
            Self::Str => "STRING",
            Self::Null => "NULL",
            Self::Array => "ARRAY",
            Self::Hash => "HASH",
            Self::Function => "FUNCTION",
            Self::Builtin => "BUILTIN",
            Self::Error => "ERROR",
            Self::ReturnValue => "RETURN_VALUE",
        };
        write!(f, "{name}")
    }
}

/// Represents a runtime value in the interpreter.
///
/// This enum models every value a program can produce. Compound values hold
/// their contents behind `Rc`, so copying an object into another binding,
/// array or closure never deep-copies it.
///
/// `ReturnValue` is the evaluator's early-exit signal. It is unwrapped at the
/// nearest function-call boundary and at the end of a program, so user code
/// never observes it.
#[derive(Debug, Clone, PartialEq)]
pub enum Object {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A boolean value (`true` or `false`).
    Boolean(bool),
    /// An immutable string.
    Str(Rc<str>),
    /// The absence of a value.
    Null,
    /// An ordered sequence of objects.
    Array(Rc<Vec<Self>>),
    /// A mapping from hashable keys to values.
    Hash(Rc<HashObject>),
    /// A user-defined function closed over its defining scope.
    Function(Rc<Function>),
    /// A native function.
    Builtin(Builtin),
    /// A runtime error, propagated as a value.
    Error(RuntimeError),
    /// A value travelling outward from a `return` statement.
    ReturnValue(Box<Self>),
}

impl From<i64> for Object {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for Object {
    fn from(v: bool) -> Self {
        if v { TRUE } else { FALSE }
    }
}

impl From<&str> for Object {
    fn from(v: &str) -> Self {
        Self::Str(Rc::from(v))
    }
}

impl From<String> for Object {
    fn from(v: String) -> Self {
        Self::Str(Rc::from(v))
    }
}

impl From<Vec<Self>> for Object {
    fn from(v: Vec<Self>) -> Self {
        Self::Array(Rc::new(v))
    }
}

impl From<RuntimeError> for Object {
    fn from(e: RuntimeError) -> Self {
        Self::Error(e)
    }
}

impl Object {
    /// Returns the type tag of the object.
    #[must_use]
    pub const fn object_type(&self) -> ObjectType {
        match self {
            Self::Integer(_) => ObjectType::Integer,
            Self::Boolean(_) => ObjectType::Boolean,
            Self::Str(_) => ObjectType::Str,
            Self::Null => ObjectType::Null,
            Self::Array(_) => ObjectType::Array,
            Self::Hash(_) => ObjectType::Hash,
            Self::Function(_) => ObjectType::Function,
            Self::Builtin(_) => ObjectType::Builtin,
            Self::Error(_) => ObjectType::Error,
            Self::ReturnValue(_) => ObjectType::ReturnValue,
        }
    }

    /// Tests the object for truthiness.
    ///
    /// Everything is truthy except `false` and `null`; in particular `0` and
    /// the empty string are truthy.
    ///
    /// # Example
    /// ```
    /// use capuchin::interpreter::value::core::{NULL, Object};
    ///
    /// assert!(Object::Integer(0).is_truthy());
    /// assert!(!Object::Boolean(false).is_truthy());
    /// assert!(!NULL.is_truthy());
    /// ```
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Null | Self::Boolean(false))
    }

    /// Unwraps a return signal into the value it carries; any other object is
    /// returned unchanged.
    #[must_use]
    pub fn unwrap_return(self) -> Self {
        match self {
            Self::ReturnValue(value) => *value,
            other => other,
        }
    }
}

/// A key/value pair stored in a hash, keeping the original key object so the
/// hash can be rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct HashPair {
    /// The key as written by the program.
    pub key:   Object,
    /// The associated value.
    pub value: Object,
}

/// The contents of a hash object.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HashObject {
    /// Pairs indexed by the hash key of their key object.
    pub pairs: FxHashMap<HashKey, HashPair>,
}

impl HashObject {
    /// Looks up the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &HashKey) -> Option<&Object> {
        self.pairs.get(key).map(|pair| &pair.value)
    }
}

/// A user-defined function: parameters, body, and the environment that was
/// current when the function literal was evaluated.
///
/// The environment is held by reference, so several closures created in the
/// same scope share it, and bindings added to that scope later are visible to
/// all of them.
pub struct Function {
    /// Parameter names, in order.
    pub parameters: Vec<Identifier>,
    /// The function body.
    pub body:       BlockStatement,
    /// The defining environment.
    pub env:        Env,
}

impl fmt::Debug for Function {
    // The captured environment may contain this very function.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
         .field("parameters", &self.parameters)
         .field("body", &self.body)
         .finish_non_exhaustive()
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `Any` means the builtin accepts any number of arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Exactly this many arguments.
    Exact(usize),
    /// Any number of arguments.
    Any,
}

/// A native function from the builtin table.
#[derive(Debug, Clone, Copy)]
pub struct Builtin {
    /// The name the builtin is bound to.
    pub name:  &'static str,
    /// The number of arguments it accepts.
    pub arity: Arity,
    /// The implementation.
    pub func:  BuiltinFn,
}

impl PartialEq for Builtin {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(i) => write!(f, "{i}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Null => write!(f, "null"),
            Self::Array(elements) => {
                write!(f, "[")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{element}")?;
                }
                write!(f, "]")
            },
            Self::Hash(hash) => {
                let mut pairs: Vec<(&HashKey, &HashPair)> = hash.pairs.iter().collect();
                pairs.sort_by_key(|(key, _)| *key);

                write!(f, "{{")?;
                for (i, (_, pair)) in pairs.into_iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", pair.key, pair.value)?;
                }
                write!(f, "}}")
            },
            Self::Function(function) => {
                write!(f, "fn(")?;
                for (i, parameter) in function.parameters.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{parameter}")?;
                }
                write!(f, ") {{\n{}\n}}", function.body)
            },
            Self::Builtin(_) => write!(f, "builtin function"),
            Self::Error(e) => write!(f, "ERROR: {e}"),
            Self::ReturnValue(value) => write!(f, "{value}"),
        }
    }
}
