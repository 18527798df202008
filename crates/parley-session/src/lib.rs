//! parley-session - HTTP Session Binding
//!
//! Session state for the request pipeline: the [`Session`] handle, the
//! [`SessionStore`] trait with an in-memory implementation and expiry
//! cleanup, the header-based [`SessionResolver`], and the
//! [`SessionArgumentBinder`] that exposes the session as a bindable
//! controller argument.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use parley_core::{ArgumentBinder, ArgumentContext, RequestContext};
//! use parley_session::{InMemorySessionStore, SessionArgumentBinder, SessionResolver};
//!
//! let store = InMemorySessionStore::new_shared();
//! let resolver = SessionResolver::new(store.clone());
//! let binder = SessionArgumentBinder::new(store.clone());
//!
//! let mut request = RequestContext::new();
//! resolver.resolve(&mut request);
//!
//! // A required session parameter lazily creates the session; every
//! // later parameter of the same request observes the same instance.
//! let session = binder
//!     .bind(&ArgumentContext::new("session"), &mut request)
//!     .into_option()
//!     .unwrap();
//! session.put("user", "alice");
//! ```

pub mod binder;
pub mod resolve;
pub mod session;
pub mod store;

pub use binder::{SessionArgumentBinder, SESSION_ATTRIBUTE, SESSION_RESOLVED_ATTRIBUTE};
pub use resolve::{SessionResolver, SESSION_HEADER};
pub use session::Session;
pub use store::{spawn_cleanup_task, InMemorySessionStore, SessionStats, SessionStore};
