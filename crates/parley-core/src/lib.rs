//! parley-core - Request Binding Contracts
//!
//! Shared building blocks for argument binders: the request-scoped
//! attribute store, the request context handed to every binder, and the
//! binding protocol types (`ArgumentBinder`, `BindingResult`,
//! `ArgumentContext`).
//!
//! Binders resolve controller parameter values from request data at
//! dispatch time. A binder that cannot (or should not) produce a value
//! returns [`BindingResult::Unbound`] rather than an error; the pipeline
//! above decides whether to retry later in the filter chain or fail the
//! request with a missing-argument error.

pub mod attributes;
pub mod binding;
pub mod request;

pub use attributes::Attributes;
pub use binding::{ArgumentBinder, ArgumentContext, BindingResult};
pub use request::RequestContext;
