//! Display-name derivation for resource references.
//!
//! Candidate names come from a Content-Disposition header or the last URI
//! path segment. Candidates are sanitized for the host filesystem; anything
//! unusable is rejected so the resolver's fallback naming applies instead.

use url::Url;

/// Longest display name kept after sanitization (Linux NAME_MAX).
const NAME_MAX: usize = 255;

/// Last non-empty path segment of `uri`, sanitized.
///
/// Returns `None` for root or empty paths and for segments that sanitize
/// away to nothing.
pub fn from_path_segment(uri: &Url) -> Option<String> {
    let segment = uri.path().split('/').filter(|s| !s.is_empty()).last()?;
    sanitize(segment)
}

/// Filename carried by a raw Content-Disposition header value, sanitized.
///
/// `filename*=UTF-8''percent-encoded` (RFC 5987) takes precedence over a
/// plain `filename=` token or quoted string.
pub fn from_content_disposition(value: &str) -> Option<String> {
    let mut plain: Option<String> = None;

    for param in value.split(';').map(str::trim) {
        let Some((key, raw)) = param.split_once('=') else {
            continue;
        };
        let key = key.trim().to_ascii_lowercase();
        let raw = raw.trim();

        if key == "filename*" {
            let encoded = raw
                .strip_prefix("UTF-8''")
                .or_else(|| raw.strip_prefix("utf-8''"));
            if let Some(name) = encoded.and_then(|e| sanitize(&percent_decode(e))) {
                return Some(name);
            }
        } else if key == "filename" {
            let unquoted = raw
                .strip_prefix('"')
                .and_then(|r| r.strip_suffix('"'))
                .unwrap_or(raw);
            if let Some(name) = sanitize(&unquoted.replace("\\\"", "\"")) {
                plain = Some(name);
            }
        }
    }

    plain
}

/// Sanitizes a candidate name for the host filesystem.
///
/// Replaces path separators, NUL, whitespace, and control characters with
/// `_` (runs collapsed), trims leading/trailing dots, spaces, and
/// underscores, and caps the result at 255 bytes. Returns `None` when
/// nothing usable remains (including `.` and `..`).
pub fn sanitize(name: &str) -> Option<String> {
    let mut out = String::with_capacity(name.len());
    let mut prev_underscore = false;

    for c in name.chars() {
        let unsafe_char =
            c == '\0' || c == '/' || c == '\\' || c.is_control() || c == ' ' || c == '\t';
        if unsafe_char {
            if !prev_underscore {
                out.push('_');
            }
            prev_underscore = true;
        } else {
            out.push(c);
            prev_underscore = false;
        }
    }

    let trimmed = out.trim_matches(|c| c == '.' || c == '_');
    if trimmed.is_empty() {
        return None;
    }

    let mut take = trimmed.len().min(NAME_MAX);
    while take > 0 && !trimmed.is_char_boundary(take) {
        take -= 1;
    }
    Some(trimmed[..take].to_string())
}

/// Percent-decode for RFC 5987 values. Malformed escapes pass through.
fn percent_decode(input: &str) -> String {
    let mut out = Vec::with_capacity(input.len());
    let mut bytes = input.bytes();
    while let Some(b) = bytes.next() {
        if b != b'%' {
            out.push(b);
            continue;
        }
        match (
            bytes.next().and_then(hex_value),
            bytes.next().and_then(hex_value),
        ) {
            (Some(high), Some(low)) => out.push(high << 4 | low),
            _ => out.push(b'%'),
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
