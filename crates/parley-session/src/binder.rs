//! Session argument binding.

use std::sync::Arc;

use parley_core::{ArgumentBinder, ArgumentContext, BindingResult, RequestContext};

use crate::session::Session;
use crate::store::SessionStore;

/// Request attribute key under which the resolved [`Session`] is stored.
pub const SESSION_ATTRIBUTE: &str = "parley.session";

/// Request attribute key marking that session resolution has run for the
/// request. Binders must not act before it is set.
pub const SESSION_RESOLVED_ATTRIBUTE: &str = "parley.session.resolved";

/// Binds controller parameters of type [`Session`].
///
/// A session bound for a required parameter is memoized in the request
/// attributes, so a request gets at most one session no matter how many
/// parameters ask for it. Nullable parameters never force creation.
pub struct SessionArgumentBinder {
    store: Arc<dyn SessionStore>,
}

impl SessionArgumentBinder {
    /// Create a binder backed by the given store.
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }
}

impl ArgumentBinder<Session> for SessionArgumentBinder {
    fn bind(
        &self,
        ctx: &ArgumentContext<'_>,
        request: &mut RequestContext,
    ) -> BindingResult<Session> {
        if !request.attributes().contains(SESSION_RESOLVED_ATTRIBUTE) {
            // Session resolution hasn't run for this request yet.
            return BindingResult::Unbound;
        }

        if let Some(existing) = request.attributes().get::<Session>(SESSION_ATTRIBUTE) {
            return BindingResult::Bound(existing.clone());
        }

        if ctx.is_nullable() {
            // An optional parameter never forces session creation.
            return BindingResult::Unbound;
        }

        let session = self.store.new_session();
        tracing::debug!(
            session_id = %session.id(),
            argument = ctx.name(),
            "Created session for required argument"
        );
        request
            .attributes_mut()
            .put(SESSION_ATTRIBUTE, session.clone());
        BindingResult::Bound(session)
    }
}
