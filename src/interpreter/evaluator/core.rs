use std::rc::Rc;

use tracing::trace;

use crate::{
    ast::{BlockStatement, Expression, Identifier, Program, Statement},
    error::RuntimeError,
    interpreter::{
        environment::Env,
        evaluator::{
            binary::core::eval_infix,
            collection::{eval_hash_literal, eval_index},
            function::core::{apply_function, lookup_builtin},
            unary::eval_prefix,
        },
        value::core::{Function, NULL, Object},
    },
};

/// Returns early from the enclosing evaluation function if `$obj` is a
/// control signal (an error or a `return` value); otherwise yields it.
///
/// This is how every compound evaluation step short-circuits: the first
/// signalling sub-result becomes the result of the whole step, and no sibling
/// expression after it is evaluated.
macro_rules! try_eval {
    ($obj:expr) => {
        match $obj {
            signal @ ($crate::interpreter::value::core::Object::Error(_)
                      | $crate::interpreter::value::core::Object::ReturnValue(_)) => return signal,
            value => value,
        }
    };
}
pub(crate) use try_eval;

/// Evaluates a program and returns its result.
///
/// Statements are evaluated in order. A `return` at the top level ends the
/// program with the returned value; a runtime error ends it with the error.
/// Otherwise the result is the value of the last statement (`null` for an
/// empty program).
///
/// Bindings made by the program are written into `env`, so evaluating
/// several programs against the same environment carries definitions from
/// one to the next.
///
/// # Example
/// ```
/// use capuchin::interpreter::{
///     environment::Environment, evaluator::core::eval_program, parser::core::Parser,
///     value::core::Object,
/// };
///
/// let (program, errors) = Parser::from_source("let a = 5; let b = a; b;").parse_program();
/// assert!(errors.is_empty());
///
/// let env = Environment::new();
/// assert_eq!(eval_program(&program, &env), Object::Integer(5));
/// ```
#[tracing::instrument(level = "debug", skip_all, fields(statements = program.statements.len()))]
pub fn eval_program(program: &Program, env: &Env) -> Object {
    let mut result = NULL;

    for statement in &program.statements {
        match eval_statement(statement, env) {
            Object::ReturnValue(value) => return *value,
            error @ Object::Error(_) => return error,
            value => result = value,
        }
    }

    result
}

/// Evaluates the statements of a block in order.
///
/// Unlike [`eval_program`], a `return` signal is passed on still wrapped, so
/// that it keeps travelling outward through enclosing blocks until a function
/// call unwraps it.
pub fn eval_block(block: &BlockStatement, env: &Env) -> Object {
    let mut result = NULL;

    for statement in &block.statements {
        result = try_eval!(eval_statement(statement, env));
    }

    result
}

/// Evaluates a single statement.
///
/// - `let` evaluates its value and binds it in `env` (never in an outer
///   scope); the statement itself yields `null`.
/// - `return` wraps its value (or `null`) in a return signal.
/// - An expression statement yields the expression's value.
pub fn eval_statement(statement: &Statement, env: &Env) -> Object {
    trace!(line = statement.token().line, "eval statement");

    match statement {
        Statement::Let { name, value, .. } => {
            let value = try_eval!(eval_expression(value, env));
            env.borrow_mut().set(name.value.clone(), value);
            NULL
        },
        Statement::Return { value, .. } => {
            let value = match value {
                Some(expression) => try_eval!(eval_expression(expression, env)),
                None => NULL,
            };
            Object::ReturnValue(Box::new(value))
        },
        Statement::Expression { expression, .. } => eval_expression(expression, env),
    }
}

/// Evaluates an expression.
///
/// This is the main entry point for expression evaluation. Every expression
/// kind yields an object; failures yield an `Object::Error` which the caller
/// is expected to propagate.
pub fn eval_expression(expression: &Expression, env: &Env) -> Object {
    match expression {
        Expression::Identifier(ident) => eval_identifier(ident, env),
        Expression::Integer { value, .. } => Object::Integer(*value),
        Expression::Boolean { value, .. } => Object::from(*value),
        Expression::Str { value, .. } => Object::from(value.as_str()),
        Expression::Prefix { operator, right, .. } => {
            let right = try_eval!(eval_expression(right, env));
            eval_prefix(*operator, &right)
        },
        Expression::Infix { left,
                            operator,
                            right,
                            .. } => {
            let left = try_eval!(eval_expression(left, env));
            let right = try_eval!(eval_expression(right, env));
            eval_infix(*operator, &left, &right)
        },
        Expression::If { condition,
                         consequence,
                         alternative,
                         .. } => eval_if_expression(condition, consequence, alternative.as_ref(), env),
        Expression::Function { parameters, body, .. } => {
            Object::Function(Rc::new(Function { parameters: parameters.clone(),
                                                body:       body.clone(),
                                                env:        Rc::clone(env), }))
        },
        Expression::Call { function,
                           arguments,
                           .. } => {
            let function = try_eval!(eval_expression(function, env));
            match eval_expressions(arguments, env) {
                Ok(arguments) => apply_function(&function, arguments),
                Err(signal) => signal,
            }
        },
        Expression::Array { elements, .. } => match eval_expressions(elements, env) {
            Ok(elements) => Object::from(elements),
            Err(signal) => signal,
        },
        Expression::Hash { pairs, .. } => eval_hash_literal(pairs, env),
        Expression::Index { left, index, .. } => {
            let left = try_eval!(eval_expression(left, env));
            let index = try_eval!(eval_expression(index, env));
            eval_index(&left, &index)
        },
    }
}

/// Evaluates a list of expressions left to right.
///
/// # Returns
/// - `Ok(Vec<Object>)`: The values, in order.
/// - `Err(Object)`: The first error or return signal encountered; later
///   expressions are not evaluated.
pub fn eval_expressions(expressions: &[Expression], env: &Env) -> Result<Vec<Object>, Object> {
    let mut values = Vec::with_capacity(expressions.len());

    for expression in expressions {
        match eval_expression(expression, env) {
            signal @ (Object::Error(_) | Object::ReturnValue(_)) => return Err(signal),
            value => values.push(value),
        }
    }

    Ok(values)
}

/// Looks up an identifier.
///
/// The scope chain is searched first, so programs can shadow builtin names;
/// the builtin table is consulted only when no scope binds the name.
fn eval_identifier(ident: &Identifier, env: &Env) -> Object {
    if let Some(value) = env.borrow().get(&ident.value) {
        return value;
    }
    if let Some(builtin) = lookup_builtin(&ident.value) {
        return Object::Builtin(builtin);
    }

    RuntimeError::UnknownIdentifier { name: ident.value.clone() }.into()
}

/// Evaluates a conditional expression.
///
/// The condition is tested for truthiness. Without an `else` branch, a false
/// condition yields `null`.
fn eval_if_expression(condition: &Expression,
                      consequence: &BlockStatement,
                      alternative: Option<&BlockStatement>,
                      env: &Env)
                      -> Object {
    let condition = try_eval!(eval_expression(condition, env));

    if condition.is_truthy() {
        eval_block(consequence, env)
    } else if let Some(alternative) = alternative {
        eval_block(alternative, env)
    } else {
        NULL
    }
}
