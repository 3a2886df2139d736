//! # capuchin
//!
//! capuchin is a tree-walking interpreter for a small, dynamically typed
//! expression language with first-class functions and closures, integers,
//! booleans, strings, arrays and hashes.
//!
//! Source text flows through three stages: the [lexer](interpreter::lexer)
//! turns it into tokens, the [parser](interpreter::parser) builds an
//! [AST](ast), and the [evaluator](interpreter::evaluator) walks the tree
//! against an [environment](interpreter::environment) to produce an
//! [object](interpreter::value::core::Object).

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc, clippy::new_ret_no_self)]

use std::error::Error;

use crate::{
    error::ParseErrors,
    interpreter::{
        environment::{Env, Environment},
        evaluator::core::eval_program,
        parser::core::Parser,
        value::core::Object,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the statement and expression nodes produced by the
/// parser and consumed by the evaluator, together with their canonical
/// textual rendering.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// Syntax errors are collected by the parser as [`error::ParseError`]s.
/// Runtime failures are [`error::RuntimeError`]s, carried through evaluation
/// inside error objects and surfaced to hosts as ordinary Rust errors.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, scopes, evaluation and value
/// representations.
pub mod interpreter;

/// Parses and evaluates `source` against `env`.
///
/// Bindings made by the program are kept in `env`, so a host can call this
/// repeatedly with the same environment, as a REPL does.
///
/// # Errors
/// - [`ParseErrors`] if the source has any syntax error. Nothing is evaluated
///   in that case.
/// - [`error::RuntimeError`] if evaluation ends in an error object.
///
/// # Example
/// ```
/// use capuchin::{interpret, interpreter::{environment::Environment, value::core::Object}};
///
/// let env = Environment::new();
/// interpret("let double = fn(x) { x * 2 };", &env).unwrap();
///
/// assert_eq!(interpret("double(21)", &env).unwrap(), Object::Integer(42));
/// assert_eq!(interpret("double(true)", &env).unwrap_err().to_string(),
///            "type mismatch: BOOLEAN * INTEGER");
/// ```
pub fn interpret(source: &str, env: &Env) -> Result<Object, Box<dyn Error>> {
    let (program, errors) = Parser::from_source(source).parse_program();
    if !errors.is_empty() {
        return Err(Box::new(ParseErrors(errors)));
    }

    match eval_program(&program, env) {
        Object::Error(e) => Err(Box::new(e)),
        value => Ok(value),
    }
}

/// Runs a complete program in a fresh environment.
///
/// If `auto_print` is set and the program produces a value other than
/// `null`, its rendering is printed to standard output.
///
/// # Errors
/// Returns an error if parsing or evaluation fails.
///
/// # Examples
/// ```
/// use capuchin::get_result;
///
/// let source = "let result = 2 + 2; result";
/// assert!(get_result(source, false).is_ok());
///
/// // `x` is not defined.
/// let source = "let y = x + 1;";
/// assert!(get_result(source, false).is_err());
/// ```
pub fn get_result(source: &str, auto_print: bool) -> Result<(), Box<dyn Error>> {
    let result = interpret(source, &Environment::new())?;

    if auto_print && result != Object::Null {
        println!("{result}");
    }

    Ok(())
}
