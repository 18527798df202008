//! parley-mime - Media Types for Content Negotiation
//!
//! A structured representation of MIME type strings
//! (`type/subtype[+suffix][;param=value]*`) per RFC 2046 and the IANA
//! media type registry, with the quality-value (`q`) semantics used to
//! rank acceptable types during content negotiation.
//!
//! # Example
//!
//! ```
//! use parley_mime::MediaType;
//!
//! let mt = MediaType::new("application/hal+json;q=0.8").unwrap();
//! assert_eq!(mt.name(), "application/hal+json");
//! assert_eq!(mt.extension(), "json");
//! assert_eq!(mt.quality(), "0.8");
//!
//! // Equality is by name only; parameters do not participate.
//! let plain = MediaType::new("application/hal+json").unwrap();
//! assert_eq!(mt, plain);
//! ```

pub mod accept;
mod catalog;
pub mod media_type;

pub use accept::{order_by_quality, parse_accept};
pub use media_type::{MediaType, MediaTypeError, Parameters};
