use crate::interpreter::value::core::{NULL, Object};

/// Prints each argument to standard output on its own line and returns
/// `null`.
///
/// Values are formatted with their `Display` implementation, so strings are
/// printed without quotes.
///
/// # Example
/// ```
/// use capuchin::interpreter::{
///     evaluator::function::print::puts,
///     value::core::{NULL, Object},
/// };
///
/// // The function prints to stdout, but the doctest only checks the result.
/// assert_eq!(puts(&[Object::from("hello"), Object::Integer(42)]), NULL);
/// ```
pub fn puts(args: &[Object]) -> Object {
    for arg in args {
        println!("{arg}");
    }
    NULL
}
