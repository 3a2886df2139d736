/// Function application and the builtin table.
///
/// Applies closures and builtins to evaluated arguments and resolves builtin
/// names.
pub mod core;
/// Array and string builtins.
///
/// Implements `len`, `first`, `last`, `rest` and `push`.
pub mod builtin;
/// The `puts` builtin.
///
/// Writes values to standard output.
pub mod print;
