//! Accept-list parsing and quality ordering.

use std::cmp::Ordering;

use crate::media_type::MediaType;

/// Parse a comma-separated media type list, e.g. an `Accept` header value.
///
/// Entries that do not parse as media types are skipped.
pub fn parse_accept(header: &str) -> Vec<MediaType> {
    header
        .split(',')
        .filter_map(|token| {
            let token = token.trim();
            if token.is_empty() {
                return None;
            }
            MediaType::new(token).ok()
        })
        .collect()
}

/// Stably sort media types by descending quality.
///
/// Types with equal quality keep their original relative order, so a
/// client's listing order still breaks ties.
pub fn order_by_quality(types: &mut [MediaType]) {
    types.sort_by(|a, b| {
        b.quality_as_number()
            .partial_cmp(&a.quality_as_number())
            .unwrap_or(Ordering::Equal)
    });
}
