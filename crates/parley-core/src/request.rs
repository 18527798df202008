//! Per-request context handed to argument binders.

use http::HeaderMap;

use crate::attributes::Attributes;

/// The slice of an incoming request that binders and filters operate on:
/// a read-only view of the headers plus the mutable attribute store.
///
/// Binding for a single request takes `&mut RequestContext`, so binders for
/// that request run sequentially. Check-then-create sequences on the
/// attribute store need no further synchronization.
#[derive(Debug, Default)]
pub struct RequestContext {
    headers: HeaderMap,
    attributes: Attributes,
}

impl RequestContext {
    /// Create a context with no headers and an empty attribute store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context for a request with the given headers.
    pub fn with_headers(headers: HeaderMap) -> Self {
        Self {
            headers,
            attributes: Attributes::new(),
        }
    }

    /// The request headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// The request-scoped attribute store.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Mutable access to the request-scoped attribute store.
    pub fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }
}
