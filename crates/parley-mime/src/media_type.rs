//! Media type parsing.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

const Q_PARAMETER: &str = "q";
const V_PARAMETER: &str = "v";
const CHARSET_PARAMETER: &str = "charset";
const DEFAULT_QUALITY: &str = "1.0";
const DEFAULT_QUALITY_NUMBER: f64 = 1.0;

/// Error constructing a [`MediaType`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MediaTypeError {
    /// The base token has no `/` separating type and subtype.
    #[error("invalid mime type: {0}")]
    InvalidName(String),
}

/// Ordered media-type parameters.
///
/// Parameter lists are tiny, so entries are kept in insertion order in a
/// `Vec` and lookups scan linearly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parameters {
    entries: Vec<(String, String)>,
}

impl Parameters {
    /// Create an empty parameter list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Whether a value exists for `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Insert or replace the value for `key`. Replacing keeps the original
    /// position of the entry.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Iterate over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A media type per RFC 2046, e.g. `application/hal+json;q=0.8`.
///
/// Immutable value object. Equality and hashing use only [`name`]: two
/// media types with the same `type/subtype` are equal even when their
/// parameters or extensions differ. Content negotiation keys on the core
/// type, so `application/json;q=0.5` and `application/json;q=0.9` are the
/// same value.
///
/// [`name`]: MediaType::name
#[derive(Debug)]
pub struct MediaType {
    full_name: String,
    name: String,
    ty: String,
    subtype: String,
    extension: String,
    parameters: Parameters,
    quality_number: OnceLock<f64>,
}

impl MediaType {
    /// Parse a media type from its string form, e.g. `application/json` or
    /// `text/html;charset=utf-8`.
    pub fn new(raw: &str) -> Result<Self, MediaTypeError> {
        Self::build(raw, None, &[])
    }

    /// Parse a media type with an explicit file extension, overriding the
    /// extension derived from the subtype.
    pub fn with_extension(raw: &str, extension: &str) -> Result<Self, MediaTypeError> {
        Self::build(raw, Some(extension), &[])
    }

    /// Parse a media type with additional parameters. Parameters embedded
    /// in `raw` take precedence over entries in `parameters`.
    pub fn with_parameters(
        raw: &str,
        parameters: &[(&str, &str)],
    ) -> Result<Self, MediaTypeError> {
        Self::build(raw, None, parameters)
    }

    /// Parse a media type with an optional extension override and
    /// additional parameters.
    pub fn with_extension_and_parameters(
        raw: &str,
        extension: Option<&str>,
        parameters: &[(&str, &str)],
    ) -> Result<Self, MediaTypeError> {
        Self::build(raw, extension, parameters)
    }

    fn build(
        raw: &str,
        extension: Option<&str>,
        extra: &[(&str, &str)],
    ) -> Result<Self, MediaTypeError> {
        let full_name = raw.to_string();

        // Parameter precedence: the q default first, then caller-supplied
        // extras, then parameters embedded in the raw string.
        let mut parameters = Parameters::new();
        parameters.insert(Q_PARAMETER, DEFAULT_QUALITY);
        for (key, value) in extra {
            parameters.insert(*key, *value);
        }

        let name = match raw.split_once(';') {
            Some((base, rest)) => {
                for token in rest.split(';') {
                    // Tokens without '=' are ignored.
                    if let Some((key, value)) = token.split_once('=') {
                        parameters.insert(key.trim(), value.trim());
                    }
                }
                base
            }
            None => raw,
        };

        let (ty, subtype) = name
            .split_once('/')
            .ok_or_else(|| MediaTypeError::InvalidName(name.to_string()))?;

        let extension = match extension {
            Some(extension) => extension.to_string(),
            None => match subtype.rsplit_once('+') {
                Some((_, suffix)) => suffix.to_string(),
                None => subtype.to_string(),
            },
        };

        Ok(Self {
            full_name,
            name: name.to_string(),
            ty: ty.to_string(),
            subtype: subtype.to_string(),
            extension,
            parameters,
            quality_number: OnceLock::new(),
        })
    }

    /// The full name including any parameters, exactly as supplied.
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// The name without parameters, e.g. `application/json`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The type portion. For `application/hal+json` this is `application`.
    pub fn ty(&self) -> &str {
        &self.ty
    }

    /// The subtype. For `application/hal+json` this is `hal+json`.
    pub fn subtype(&self) -> &str {
        &self.subtype
    }

    /// The file extension. For `application/hal+json` this is `json`.
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// The media type parameters.
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// The raw quality (`q`) parameter value, `"1.0"` when not supplied.
    pub fn quality(&self) -> &str {
        self.parameters.get(Q_PARAMETER).unwrap_or(DEFAULT_QUALITY)
    }

    /// The quality as a number. A missing or unparseable `q` value yields
    /// `1.0`. Computed once and cached; the value is immutable.
    pub fn quality_as_number(&self) -> f64 {
        *self.quality_number.get_or_init(|| {
            self.parameters
                .get(Q_PARAMETER)
                .and_then(|q| q.parse().ok())
                .unwrap_or(DEFAULT_QUALITY_NUMBER)
        })
    }

    /// The version (`v`) parameter value, if supplied.
    pub fn version(&self) -> Option<&str> {
        self.parameters.get(V_PARAMETER)
    }

    /// The charset parameter value, if supplied.
    pub fn charset(&self) -> Option<&str> {
        self.parameters.get(CHARSET_PARAMETER)
    }
}

impl Clone for MediaType {
    fn clone(&self) -> Self {
        let quality_number = OnceLock::new();
        if let Some(quality) = self.quality_number.get() {
            let _ = quality_number.set(*quality);
        }
        Self {
            full_name: self.full_name.clone(),
            name: self.name.clone(),
            ty: self.ty.clone(),
            subtype: self.subtype.clone(),
            extension: self.extension.clone(),
            parameters: self.parameters.clone(),
            quality_number,
        }
    }
}

impl PartialEq for MediaType {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for MediaType {}

impl Hash for MediaType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for MediaType {
    /// Renders the original full name, not a reconstruction from the
    /// parsed fields.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_name)
    }
}

impl FromStr for MediaType {
    type Err = MediaTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for MediaType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.full_name)
    }
}

impl<'de> Deserialize<'de> for MediaType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn test_plain_name_round_trips() {
        let mt = MediaType::new("application/json").unwrap();
        assert_eq!(mt.name(), "application/json");
        assert_eq!(mt.full_name(), "application/json");
        assert_eq!(mt.to_string(), "application/json");
        assert_eq!(mt.quality(), "1.0");
        assert_eq!(mt.quality_as_number(), 1.0);
    }

    #[test]
    fn test_suffixed_subtype() {
        let mt = MediaType::new("application/hal+json").unwrap();
        assert_eq!(mt.ty(), "application");
        assert_eq!(mt.subtype(), "hal+json");
        assert_eq!(mt.extension(), "json");
    }

    #[test]
    fn test_explicit_extension_override() {
        let mt = MediaType::with_extension("application/json", "js").unwrap();
        assert_eq!(mt.extension(), "js");
        assert_eq!(mt.subtype(), "json");
    }

    #[test]
    fn test_quality_parameter() {
        let mt = MediaType::new("application/json;q=0.7").unwrap();
        assert_eq!(mt.name(), "application/json");
        assert_eq!(mt.quality(), "0.7");
        assert_eq!(mt.quality_as_number(), 0.7);
        // Display is the original string, parameters included.
        assert_eq!(mt.to_string(), "application/json;q=0.7");
    }

    #[test]
    fn test_quality_parse_failure_falls_back() {
        let mt = MediaType::new("application/json;q=notanumber").unwrap();
        assert_eq!(mt.quality(), "notanumber");
        assert_eq!(mt.quality_as_number(), 1.0);
    }

    #[test]
    fn test_parameters_are_trimmed() {
        let mt = MediaType::new("application/json; q = 0.5 ;charset= utf-8").unwrap();
        assert_eq!(mt.quality(), "0.5");
        assert_eq!(mt.charset(), Some("utf-8"));
    }

    #[test]
    fn test_parameter_token_without_equals_is_ignored() {
        let mt = MediaType::new("application/json;charset").unwrap();
        assert_eq!(mt.charset(), None);
        assert_eq!(mt.parameters().len(), 1); // just the default q
    }

    #[test]
    fn test_embedded_parameters_win_over_extras() {
        let mt =
            MediaType::with_parameters("application/json;charset=utf-8", &[("charset", "ascii")])
                .unwrap();
        assert_eq!(mt.charset(), Some("utf-8"));

        let mt = MediaType::with_parameters("application/json", &[("charset", "ascii")]).unwrap();
        assert_eq!(mt.charset(), Some("ascii"));
    }

    #[test]
    fn test_version_parameter() {
        let mt = MediaType::new("application/json;v=2;q=0.9").unwrap();
        assert_eq!(mt.version(), Some("2"));
        assert_eq!(mt.quality(), "0.9");

        let mt = MediaType::new("application/json").unwrap();
        assert_eq!(mt.version(), None);
    }

    #[test]
    fn test_equality_ignores_parameters() {
        let plain = MediaType::new("application/json").unwrap();
        let with_charset = MediaType::new("application/json;charset=utf-8").unwrap();
        assert_eq!(plain, with_charset);

        let low_q = MediaType::new("application/json;q=0.5").unwrap();
        let high_q = MediaType::new("application/json;q=0.9").unwrap();
        assert_eq!(low_q, high_q);
    }

    #[test]
    fn test_equality_ignores_extension() {
        let a = MediaType::with_extension("application/json", "js").unwrap();
        let b = MediaType::new("application/json").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_hash_matches_equality() {
        let mut set = HashSet::new();
        set.insert(MediaType::new("application/json").unwrap());
        set.insert(MediaType::new("application/json;q=0.5").unwrap());
        set.insert(MediaType::new("text/html").unwrap());
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_missing_slash_is_rejected() {
        let err = MediaType::new("no-slash-here").unwrap_err();
        assert_eq!(err, MediaTypeError::InvalidName("no-slash-here".into()));
        assert!(MediaType::new("").is_err());
    }

    #[test]
    fn test_clone_preserves_value() {
        let mt = MediaType::new("application/json;q=0.3").unwrap();
        assert_eq!(mt.quality_as_number(), 0.3);
        let cloned = mt.clone();
        assert_eq!(cloned, mt);
        assert_eq!(cloned.quality_as_number(), 0.3);
        assert_eq!(cloned.to_string(), "application/json;q=0.3");
    }

    #[test]
    fn test_serde_string_form() {
        let mt = MediaType::new("application/json;q=0.7").unwrap();
        let json = serde_json::to_string(&mt).unwrap();
        assert_eq!(json, "\"application/json;q=0.7\"");

        let parsed: MediaType = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.quality(), "0.7");
        assert!(serde_json::from_str::<MediaType>("\"bogus\"").is_err());
    }
}
