//! Path builders for every page, so links and redirects share one definition.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Everything outside the RFC 3986 unreserved set.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

pub fn players() -> String {
    "/players".to_string()
}

pub fn player_edit(id: &str) -> String {
    format!("/player/{}", encode_segment(id))
}

pub fn player_delete(id: &str) -> String {
    format!("/players/{}/delete", encode_segment(id))
}

fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, SEGMENT).to_string()
}
