use tracing::debug;

use crate::{
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::{
            core::eval_block,
            function::{builtin, print},
        },
        value::core::{Arity, Builtin, Function, Object},
    },
};

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the builtin.
///
/// The macro produces `BUILTIN_TABLE`, the static table [`lookup_builtin`]
/// searches.
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        static BUILTIN_TABLE: &[Builtin] = &[
            $(
                Builtin { name: $name, arity: $arity, func: $func },
            )*
        ];
    };
}

builtin_functions! {
    "len"   => { arity: Arity::Exact(1), func: builtin::len },
    "first" => { arity: Arity::Exact(1), func: builtin::first },
    "last"  => { arity: Arity::Exact(1), func: builtin::last },
    "rest"  => { arity: Arity::Exact(1), func: builtin::rest },
    "push"  => { arity: Arity::Exact(2), func: builtin::push },
    "puts"  => { arity: Arity::Any,      func: print::puts },
}

/// Looks up a builtin function by name.
///
/// # Example
/// ```
/// use capuchin::interpreter::evaluator::function::core::lookup_builtin;
///
/// assert!(lookup_builtin("len").is_some());
/// assert!(lookup_builtin("nope").is_none());
/// ```
#[must_use]
pub fn lookup_builtin(name: &str) -> Option<Builtin> {
    BUILTIN_TABLE.iter().find(|b| b.name == name).copied()
}

/// Applies a callable object to evaluated arguments.
///
/// For a user function, a new environment enclosed by the function's
/// defining environment is created, parameters are bound positionally, and
/// the body is evaluated in it. A `return` signal coming out of the body is
/// unwrapped here, so it never leaks into the caller. Errors are passed on
/// unchanged.
///
/// For a builtin, the argument count is checked against its arity and the
/// native implementation is invoked.
///
/// # Parameters
/// - `function`: The evaluated callee.
/// - `arguments`: Evaluated arguments, in order.
///
/// # Returns
/// The call's result, or an error for a non-callable callee or a wrong
/// number of arguments.
pub fn apply_function(function: &Object, arguments: Vec<Object>) -> Object {
    match function {
        Object::Function(function) => call_user_defined_function(function, arguments),
        Object::Builtin(builtin) => {
            if let Arity::Exact(want) = builtin.arity
               && arguments.len() != want
            {
                return RuntimeError::BuiltinArity { name: builtin.name,
                                                    want }.into();
            }

            debug!(name = builtin.name, arguments = arguments.len(), "calling builtin");
            (builtin.func)(&arguments)
        },
        other => RuntimeError::NotAFunction { object_type: other.object_type() }.into(),
    }
}

/// Executes a user-defined function.
///
/// Its parameter count must match the number of supplied arguments.
fn call_user_defined_function(function: &Function, arguments: Vec<Object>) -> Object {
    if arguments.len() != function.parameters.len() {
        return RuntimeError::WrongArgumentCount { want: function.parameters.len(),
                                                  got:  arguments.len(), }.into();
    }

    debug!(parameters = function.parameters.len(), "calling function");

    let env = Environment::new_enclosed(&function.env);
    {
        let mut scope = env.borrow_mut();
        for (parameter, argument) in function.parameters.iter().zip(arguments) {
            scope.set(parameter.value.clone(), argument);
        }
    }

    eval_block(&function.body, &env).unwrap_return()
}
