//! Content-Type classification.
//!
//! Advisory only: decides whether a response body is safe to hand back as
//! text. A negative answer produces a warning, never an error.

use std::collections::HashSet;

use mime::Mime;

/// Returns true when the Content-Type names a text-like media type with
/// an acceptable charset.
///
/// Accepted: any `text/*`, exactly `application/json`, and any
/// `application/samlmetadata+xml` variant. The charset, if present, must be
/// `utf-8` or `us-ascii` (case-insensitive). Whitespace around the media
/// type is ignored; a repeated parameter makes the value unparseable.
pub fn is_text(content_type: &str) -> bool {
    let parsed = match parse(content_type) {
        Some(m) => m,
        None => return false,
    };

    if !is_text_media_type(&parsed.essence_str().to_ascii_lowercase()) {
        return false;
    }

    match parsed.get_param(mime::CHARSET) {
        None => true,
        Some(charset) => {
            let charset = charset.as_str().to_ascii_lowercase();
            charset.is_empty() || charset == "utf-8" || charset == "us-ascii"
        }
    }
}

fn parse(content_type: &str) -> Option<Mime> {
    let parsed: Mime = match content_type.split_once(';') {
        Some((media_type, params)) => format!("{};{}", media_type.trim(), params).parse().ok()?,
        None => content_type.trim().parse().ok()?,
    };

    let mut seen = HashSet::new();
    for (name, _) in parsed.params() {
        if !seen.insert(name.as_str().to_ascii_lowercase()) {
            return None;
        }
    }
    Some(parsed)
}

fn is_text_media_type(essence: &str) -> bool {
    if let Some(subtype) = essence.strip_prefix("text/") {
        return !subtype.is_empty();
    }
    essence == "application/json" || essence.starts_with("application/samlmetadata+xml")
}

/// Warning text for a Content-Type that is missing or not text-like.
pub fn warning_for(content_type: Option<&str>) -> Option<String> {
    let value = content_type.unwrap_or("");
    if !value.is_empty() && is_text(value) {
        return None;
    }
    Some(format!(
        "Content-Type is not recognized as a text type, got {:?}",
        value
    ))
}
