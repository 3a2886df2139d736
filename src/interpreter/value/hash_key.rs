use std::hash::Hasher;

use rustc_hash::FxHasher;

use crate::interpreter::value::core::{Object, ObjectType};

/// A comparable key derived from a hashable object's type and value.
///
/// Integers use their two's-complement bit pattern, booleans map to `1` and
/// `0`, and strings use a 64-bit digest of their bytes. Keys of different
/// types never compare equal, even when their `value` coincides.
///
/// # Example
/// ```
/// use capuchin::interpreter::value::core::Object;
///
/// let a = Object::from("Hello World").hash_key();
/// let b = Object::from("Hello World").hash_key();
/// let c = Object::from("another string").hash_key();
///
/// assert!(a.is_some());
/// assert_eq!(a, b);
/// assert_ne!(a, c);
/// assert_eq!(Object::Null.hash_key(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HashKey {
    /// The type of the object the key was derived from.
    pub object_type: ObjectType,
    /// The derived value.
    pub value:       u64,
}

impl Object {
    /// Derives the hash key for this object.
    ///
    /// # Returns
    /// - `Some(HashKey)` for integers, booleans and strings.
    /// - `None` for every other object type.
    #[must_use]
    pub fn hash_key(&self) -> Option<HashKey> {
        let value = match self {
            Self::Integer(i) => u64::from_ne_bytes(i.to_ne_bytes()),
            Self::Boolean(b) => u64::from(*b),
            Self::Str(s) => {
                let mut hasher = FxHasher::default();
                hasher.write(s.as_bytes());
                hasher.finish()
            },
            _ => return None,
        };

        Some(HashKey { object_type: self.object_type(),
                       value })
    }
}
