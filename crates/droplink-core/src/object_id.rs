//! Object-identifier normalization.
//!
//! Stored and user-supplied identifiers arrive in two shapes: the bare
//! provider identifier (`folder/abc_def.webp`) or a full CDN delivery URL
//! (`https://cdn.example/upload/v123/folder/abc_def.webp`). Mutation calls
//! against the provider require the canonical identifier with no version
//! segment and no file extension.
//!
//! [`normalize`] is idempotent: `normalize(normalize(x)) == normalize(x)`
//! for every input. A URL whose path does not contain the provider's
//! `upload` marker segment is returned unchanged; the downstream mutation
//! call then fails with a provider-reported "not found", which delete
//! treats as success.

/// Path segment that precedes the identifier in provider delivery URLs.
const UPLOAD_MARKER: &str = "upload";

/// Convert a raw identifier or delivery URL into the canonical object
/// identifier the provider expects for mutation calls.
pub fn normalize(raw: &str) -> String {
    match split_scheme(raw) {
        Some(rest) => extract_from_url(rest).unwrap_or_else(|| raw.to_string()),
        None => strip_extension(raw),
    }
}

/// If `s` begins with a URL scheme (`alpha (alnum | + | - | .)* ://`),
/// return everything after the `://`.
fn split_scheme(s: &str) -> Option<&str> {
    let idx = s.find("://")?;
    let scheme = &s[..idx];
    let mut chars = scheme.chars();
    let first = chars.next()?;
    if !first.is_ascii_alphabetic() {
        return None;
    }
    if chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')) {
        Some(&s[idx + 3..])
    } else {
        None
    }
}

/// Extract the identifier from the host-and-path portion of a delivery URL.
///
/// Returns `None` when the URL does not contain the upload marker segment
/// or nothing follows it.
fn extract_from_url(rest: &str) -> Option<String> {
    // Query string and fragment are not part of the identifier.
    let path = rest.split(['?', '#']).next().unwrap_or(rest);

    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    let marker = segments.iter().position(|s| *s == UPLOAD_MARKER)?;

    let mut tail = &segments[marker + 1..];
    if tail.first().is_some_and(|s| is_version_segment(s)) {
        tail = &tail[1..];
    }
    if tail.is_empty() {
        return None;
    }

    Some(strip_extension(&tail.join("/")))
}

/// True for delivery-URL version segments: `v` followed by one or more digits.
fn is_version_segment(s: &str) -> bool {
    s.len() > 1 && s.starts_with('v') && s[1..].bytes().all(|b| b.is_ascii_digit())
}

/// Strip the trailing file extension from the final path segment of `id`.
///
/// The final segment is truncated at its first `.`; stripping one extension
/// at a time (`a.b.c` -> `a.b`) would break idempotence for multi-dot
/// names. A segment with no stem before the dot is left alone.
fn strip_extension(id: &str) -> String {
    let (dir, name) = match id.rfind('/') {
        Some(i) => (&id[..=i], &id[i + 1..]),
        None => ("", id),
    };
    match name.find('.') {
        Some(i) if i > 0 => format!("{dir}{}", &name[..i]),
        _ => id.to_string(),
    }
}
