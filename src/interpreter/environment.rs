use std::{cell::RefCell, fmt, rc::Rc};

use rustc_hash::FxHashMap;

use crate::interpreter::value::core::Object;

/// Shared handle to an environment.
///
/// Closures, call frames and the host all hold environments through this
/// handle; an environment lives as long as its longest holder.
pub type Env = Rc<RefCell<Environment>>;

/// A single lexical scope: name bindings plus an optional link to the
/// enclosing scope.
///
/// Lookups walk outward through the chain. Bindings are always written into
/// the scope they are made in, so an inner `let` shadows an outer binding
/// instead of overwriting it.
///
/// # Example
/// ```
/// use capuchin::interpreter::{environment::Environment, value::core::Object};
///
/// let global = Environment::new();
/// global.borrow_mut().set("x", Object::Integer(1));
///
/// let local = Environment::new_enclosed(&global);
/// local.borrow_mut().set("x", Object::Integer(2));
///
/// assert_eq!(local.borrow().get("x"), Some(Object::Integer(2)));
/// assert_eq!(global.borrow().get("x"), Some(Object::Integer(1)));
/// ```
#[derive(Default)]
pub struct Environment {
    store: FxHashMap<String, Object>,
    outer: Option<Env>,
}

impl Environment {
    /// Creates a root environment with no enclosing scope.
    #[must_use]
    pub fn new() -> Env {
        Rc::new(RefCell::new(Self::default()))
    }

    /// Creates an environment enclosed by `outer`.
    ///
    /// Used for every function invocation, with `outer` set to the function's
    /// defining environment.
    #[must_use]
    pub fn new_enclosed(outer: &Env) -> Env {
        Rc::new(RefCell::new(Self { store: FxHashMap::default(),
                                    outer: Some(Rc::clone(outer)), }))
    }

    /// Looks up `name`, walking outward through enclosing scopes.
    ///
    /// # Returns
    /// A clone of the bound object, or `None` if no scope binds the name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Object> {
        match self.store.get(name) {
            Some(value) => Some(value.clone()),
            None => self.outer.as_ref().and_then(|outer| outer.borrow().get(name)),
        }
    }

    /// Binds `name` to `value` in this scope, replacing any binding of the
    /// same name in this scope only.
    pub fn set(&mut self, name: impl Into<String>, value: Object) {
        self.store.insert(name.into(), value);
    }
}

impl fmt::Debug for Environment {
    // Bound functions capture environments, so printing values could recurse.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&String> = self.store.keys().collect();
        names.sort();
        f.debug_struct("Environment")
         .field("names", &names)
         .field("outer", &self.outer)
         .finish()
    }
}
