//! Argument binding protocol.
//!
//! An [`ArgumentBinder`] resolves one controller parameter from request
//! data. Binders never fail: a parameter that cannot be resolved here comes
//! back as [`BindingResult::Unbound`], and the dispatch layer decides
//! whether another binder gets a turn or the request fails with a
//! missing-argument error.

use crate::request::RequestContext;

/// Outcome of one binder's attempt to resolve one argument.
#[derive(Debug, Clone, PartialEq)]
pub enum BindingResult<T> {
    /// The binder produced a value for the argument.
    Bound(T),
    /// The binder did not produce a value. Covers both "not satisfiable
    /// yet, retry later in the pipeline" and "intentionally absent".
    Unbound,
}

impl<T> BindingResult<T> {
    /// Whether a value was produced.
    pub fn is_bound(&self) -> bool {
        matches!(self, BindingResult::Bound(_))
    }

    /// Borrow the bound value, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            BindingResult::Bound(value) => Some(value),
            BindingResult::Unbound => None,
        }
    }

    /// Convert into an `Option`, consuming the result.
    pub fn into_option(self) -> Option<T> {
        match self {
            BindingResult::Bound(value) => Some(value),
            BindingResult::Unbound => None,
        }
    }
}

impl<T> From<Option<T>> for BindingResult<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => BindingResult::Bound(value),
            None => BindingResult::Unbound,
        }
    }
}

/// Metadata about the parameter currently being bound.
///
/// A nullable parameter accepts absence of a value; binders use the flag to
/// avoid side effects (like creating a session) that exist only to satisfy
/// a parameter the controller is happy to go without.
#[derive(Debug, Clone)]
pub struct ArgumentContext<'a> {
    name: &'a str,
    nullable: bool,
}

impl<'a> ArgumentContext<'a> {
    /// Context for a required (non-nullable) parameter.
    pub fn new(name: &'a str) -> Self {
        Self {
            name,
            nullable: false,
        }
    }

    /// Mark the parameter as nullable.
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// The parameter name.
    pub fn name(&self) -> &str {
        self.name
    }

    /// Whether the parameter accepts absence of a value.
    pub fn is_nullable(&self) -> bool {
        self.nullable
    }
}

/// Resolves a controller parameter of type `T` from request data.
pub trait ArgumentBinder<T> {
    /// Attempt to bind a value for the parameter described by `ctx`.
    ///
    /// Binders may mutate the request's attribute store, e.g. to memoize a
    /// lazily created value so later binders for the same request observe
    /// the same instance.
    fn bind(&self, ctx: &ArgumentContext<'_>, request: &mut RequestContext) -> BindingResult<T>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_binding_result_accessors() {
        let bound: BindingResult<u32> = BindingResult::Bound(7);
        assert!(bound.is_bound());
        assert_eq!(bound.value(), Some(&7));
        assert_eq!(bound.into_option(), Some(7));

        let unbound: BindingResult<u32> = BindingResult::Unbound;
        assert!(!unbound.is_bound());
        assert_eq!(unbound.value(), None);
        assert_eq!(unbound.into_option(), None);
    }

    #[test]
    fn test_from_option() {
        assert_eq!(BindingResult::from(Some(1)), BindingResult::Bound(1));
        assert_eq!(BindingResult::<i32>::from(None), BindingResult::Unbound);
    }

    #[test]
    fn test_argument_context_defaults_to_required() {
        let ctx = ArgumentContext::new("session");
        assert_eq!(ctx.name(), "session");
        assert!(!ctx.is_nullable());

        let ctx = ctx.nullable();
        assert!(ctx.is_nullable());
    }
}
