//! Predefined media types.
//!
//! The common types used across the request pipeline, exposed as named
//! singletons. A handful carry an extension that differs from their
//! subtype.

use std::sync::OnceLock;

use crate::media_type::MediaType;

fn entry(raw: &str, extension: Option<&str>) -> MediaType {
    match extension {
        Some(extension) => MediaType::with_extension(raw, extension),
        None => MediaType::new(raw),
    }
    .expect("catalog media types are well-formed")
}

static ALL: OnceLock<MediaType> = OnceLock::new();
static FORM: OnceLock<MediaType> = OnceLock::new();
static MULTIPART_FORM: OnceLock<MediaType> = OnceLock::new();
static HTML: OnceLock<MediaType> = OnceLock::new();
static XHTML: OnceLock<MediaType> = OnceLock::new();
static XML: OnceLock<MediaType> = OnceLock::new();
static JSON: OnceLock<MediaType> = OnceLock::new();
static TEXT_XML: OnceLock<MediaType> = OnceLock::new();
static TEXT_JSON: OnceLock<MediaType> = OnceLock::new();
static HAL_JSON: OnceLock<MediaType> = OnceLock::new();
static HAL_XML: OnceLock<MediaType> = OnceLock::new();
static ATOM_XML: OnceLock<MediaType> = OnceLock::new();
static VND_ERROR: OnceLock<MediaType> = OnceLock::new();

impl MediaType {
    /// A wildcard media type representing all types: `*/*`.
    pub fn all() -> &'static MediaType {
        ALL.get_or_init(|| entry("*/*", Some("all")))
    }

    /// Form encoded data: `application/x-www-form-urlencoded`.
    pub fn form() -> &'static MediaType {
        FORM.get_or_init(|| entry("application/x-www-form-urlencoded", Some("form")))
    }

    /// Multi part form data: `multipart/form-data`.
    pub fn multipart_form() -> &'static MediaType {
        MULTIPART_FORM.get_or_init(|| entry("multipart/form-data", Some("multipartForm")))
    }

    /// HTML: `text/html`.
    pub fn html() -> &'static MediaType {
        HTML.get_or_init(|| entry("text/html", None))
    }

    /// XHTML: `application/xhtml+xml`.
    pub fn xhtml() -> &'static MediaType {
        XHTML.get_or_init(|| entry("application/xhtml+xml", Some("html")))
    }

    /// XML: `application/xml`.
    pub fn xml() -> &'static MediaType {
        XML.get_or_init(|| entry("application/xml", None))
    }

    /// JSON: `application/json`.
    pub fn json() -> &'static MediaType {
        JSON.get_or_init(|| entry("application/json", None))
    }

    /// XML: `text/xml`.
    pub fn text_xml() -> &'static MediaType {
        TEXT_XML.get_or_init(|| entry("text/xml", None))
    }

    /// JSON: `text/json`.
    pub fn text_json() -> &'static MediaType {
        TEXT_JSON.get_or_init(|| entry("text/json", None))
    }

    /// HAL JSON: `application/hal+json`.
    pub fn hal_json() -> &'static MediaType {
        HAL_JSON.get_or_init(|| entry("application/hal+json", None))
    }

    /// HAL XML: `application/hal+xml`.
    pub fn hal_xml() -> &'static MediaType {
        HAL_XML.get_or_init(|| entry("application/hal+xml", None))
    }

    /// Atom: `application/atom+xml`.
    pub fn atom_xml() -> &'static MediaType {
        ATOM_XML.get_or_init(|| entry("application/atom+xml", None))
    }

    /// VND error: `application/vnd.error+json`.
    pub fn vnd_error() -> &'static MediaType {
        VND_ERROR.get_or_init(|| entry("application/vnd.error+json", None))
    }
}
