//! Callback rule: arbitrary predicates supplied by the caller
//!
//! A predicate receives a parameter list of JSON values and returns `true`
//! to pass. It can be given three ways:
//!
//! - [`Callback::function`]: a function or closure, called directly;
//! - [`Callback::method`]: a name looked up on an explicit [`PredicateResolver`];
//! - [`Callback::named`] (or a plain `&str`): a name looked up on the host
//!   injected with [`ValidationSession::with_host`].
//!
//! A name that cannot be resolved fails the session with a diagnostic of its
//! own, never with the caller's message.
//!
//! ```
//! use std::sync::Arc;
//! use formgate_validator::prelude::*;
//! use serde_json::Value;
//!
//! let registry = PredicateRegistry::new()
//!     .register("is_even", |params: &[Value]| params[0].as_i64().is_some_and(|n| n % 2 == 0));
//!
//! let mut session = ValidationSession::default().with_host(Arc::new(registry));
//! session.callback("is_even", "must be even", 3);
//! assert_eq!(session.error_message(), "must be even");
//! ```

use std::collections::HashMap;
use std::fmt;

use serde_json::Value;

use crate::foundation::ValidationFailure;
use crate::session::ValidationSession;

// ============================================================================
// RESOLVER CAPABILITY
// ============================================================================

/// Something that can run predicates by name.
///
/// Hosts implement this for their own service objects, usually with a
/// `match` on the name. [`PredicateRegistry`] is a ready-made implementation.
pub trait PredicateResolver {
    /// Runs predicate `name` with `params`.
    ///
    /// Returns `None` if no predicate of that name exists.
    fn call(&self, name: &str, params: &[Value]) -> Option<bool>;
}

type BoxedPredicate = Box<dyn Fn(&[Value]) -> bool + Send + Sync>;

/// Name-to-closure table implementing [`PredicateResolver`].
#[derive(Default)]
pub struct PredicateRegistry {
    predicates: HashMap<String, BoxedPredicate>,
}

impl PredicateRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a predicate, replacing any previous one with the same name.
    #[must_use = "builder methods must be chained or built"]
    pub fn register<F>(mut self, name: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&[Value]) -> bool + Send + Sync + 'static,
    {
        self.insert(name, predicate);
        self
    }

    /// Adds a predicate in place.
    pub fn insert<F>(&mut self, name: impl Into<String>, predicate: F)
    where
        F: Fn(&[Value]) -> bool + Send + Sync + 'static,
    {
        self.predicates.insert(name.into(), Box::new(predicate));
    }

    /// Returns `true` if a predicate named `name` is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.predicates.contains_key(name)
    }

    /// Number of registered predicates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    /// Returns `true` if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }
}

impl PredicateResolver for PredicateRegistry {
    fn call(&self, name: &str, params: &[Value]) -> Option<bool> {
        self.predicates.get(name).map(|predicate| predicate(params))
    }
}

impl fmt::Debug for PredicateRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.predicates.keys().collect();
        names.sort();
        f.debug_struct("PredicateRegistry")
            .field("predicates", &names)
            .finish()
    }
}

// ============================================================================
// CALLBACK
// ============================================================================

/// How the callback rule finds its predicate.
#[derive(Clone, Copy)]
pub enum Callback<'c> {
    /// Resolved by name on the session's host.
    Named(&'c str),
    /// Resolved by name on the given resolver.
    Method(&'c dyn PredicateResolver, &'c str),
    /// Called directly.
    Function(&'c dyn Fn(&[Value]) -> bool),
}

impl<'c> Callback<'c> {
    /// A predicate looked up on the session's host.
    #[must_use]
    pub const fn named(name: &'c str) -> Self {
        Self::Named(name)
    }

    /// A predicate looked up on `resolver`.
    #[must_use]
    pub const fn method(resolver: &'c dyn PredicateResolver, name: &'c str) -> Self {
        Self::Method(resolver, name)
    }

    /// A predicate called directly.
    #[must_use]
    pub fn function(predicate: &'c impl Fn(&[Value]) -> bool) -> Self {
        Self::Function(predicate)
    }
}

impl<'c> From<&'c str> for Callback<'c> {
    fn from(name: &'c str) -> Self {
        Self::Named(name)
    }
}

impl fmt::Debug for Callback<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.debug_tuple("Named").field(name).finish(),
            Self::Method(_, name) => f.debug_tuple("Method").field(name).finish(),
            Self::Function(_) => f.write_str("Function(<fn>)"),
        }
    }
}

// ============================================================================
// PARAMETERS
// ============================================================================

/// Converts a single value or a sequence into a predicate parameter list.
///
/// A single value becomes a one-element list.
pub trait IntoParams {
    /// Performs the conversion.
    fn into_params(self) -> Vec<Value>;
}

impl IntoParams for () {
    fn into_params(self) -> Vec<Value> {
        Vec::new()
    }
}

impl IntoParams for Vec<Value> {
    fn into_params(self) -> Vec<Value> {
        self
    }
}

impl<const N: usize> IntoParams for [Value; N] {
    fn into_params(self) -> Vec<Value> {
        self.into()
    }
}

impl<const N: usize> IntoParams for [&str; N] {
    fn into_params(self) -> Vec<Value> {
        self.into_iter().map(Value::from).collect()
    }
}

impl IntoParams for &[&str] {
    fn into_params(self) -> Vec<Value> {
        self.iter().copied().map(Value::from).collect()
    }
}

macro_rules! single_param {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl IntoParams for $ty {
                fn into_params(self) -> Vec<Value> {
                    vec![Value::from(self)]
                }
            }
        )+
    };
}

single_param!(Value, &str, String, bool, i32, i64, u32, u64, f64);

// ============================================================================
// RULE
// ============================================================================

impl ValidationSession {
    /// Runs a caller-supplied predicate with `params`.
    ///
    /// Fails with `message` when the predicate returns `false`, and with a
    /// resolution diagnostic when a named predicate does not exist.
    pub fn callback<'c>(
        &mut self,
        callback: impl Into<Callback<'c>>,
        message: &str,
        params: impl IntoParams,
    ) -> &mut Self {
        if self.latched("callback") {
            return self;
        }
        let params = params.into_params();
        let (name, result) = match callback.into() {
            Callback::Named(name) => {
                let result = self.host().and_then(|host| host.call(name, &params));
                (name, result)
            }
            Callback::Method(resolver, name) => (name, resolver.call(name, &params)),
            Callback::Function(predicate) => ("<fn>", Some(predicate(&params))),
        };
        match result {
            Some(true) => {}
            Some(false) => self.fail("callback", None, message),
            None => {
                tracing::warn!(predicate = name, "callback predicate could not be resolved");
                self.record(ValidationFailure::unresolved_callback(name));
            }
        }
        self
    }
}

// ============================================================================
// TESTS
// ============================================================================
