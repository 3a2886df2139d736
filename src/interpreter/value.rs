/// Runtime object representation.
///
/// Defines the `Object` enum and the supporting function, builtin and hash
/// types. Every evaluation step produces an `Object`, including errors.
pub mod core;
/// Hash key derivation.
///
/// Defines `HashKey`, the comparable stand-in for integers, booleans and
/// strings when they are used as keys in a hash literal or an index
/// expression. Structurally equal keys always derive the same `HashKey`.
pub mod hash_key;
