//! Header-based session resolution.

use std::sync::Arc;

use parley_core::RequestContext;

use crate::binder::{SESSION_ATTRIBUTE, SESSION_RESOLVED_ATTRIBUTE};
use crate::store::SessionStore;

/// Default request header carrying the session id.
pub const SESSION_HEADER: &str = "x-parley-session";

/// Restores an existing session from the request's session id header and
/// marks the request as session-resolved.
///
/// Resolution never creates a session. Creation stays lazy in
/// [`SessionArgumentBinder`](crate::SessionArgumentBinder), so only
/// requests that actually need a session get one.
pub struct SessionResolver {
    store: Arc<dyn SessionStore>,
    header: String,
}

impl SessionResolver {
    /// Create a resolver using the default session id header.
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self::with_header(store, SESSION_HEADER)
    }

    /// Create a resolver reading the session id from a custom header.
    pub fn with_header(store: Arc<dyn SessionStore>, header: impl Into<String>) -> Self {
        Self {
            store,
            header: header.into(),
        }
    }

    /// Resolve the session for `request`.
    ///
    /// Always sets the resolved marker, even when no session id is present
    /// or the id is unknown, so binders can tell resolution has run.
    pub fn resolve(&self, request: &mut RequestContext) {
        let id = request
            .headers()
            .get(self.header.as_str())
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);

        if let Some(id) = id {
            match self.store.find(&id) {
                Some(session) => {
                    session.touch();
                    tracing::debug!(session_id = %id, "Restored session from request header");
                    request.attributes_mut().put(SESSION_ATTRIBUTE, session);
                }
                None => {
                    tracing::debug!(session_id = %id, "Unknown session id in request header");
                }
            }
        }

        request.attributes_mut().put(SESSION_RESOLVED_ATTRIBUTE, true);
    }
}
