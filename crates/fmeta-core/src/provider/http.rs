//! HTTP(S) provider: metadata-only HEAD probe via libcurl.
//!
//! No body is transferred. `content_type` and `query` are independent host
//! calls, so each performs its own probe. Runs on the current thread; the
//! bridge dispatches it through `spawn_blocking`.

use anyhow::{Context, Result};
use std::str;
use std::time::Duration;
use url::Url;

use crate::config::HttpConfig;
use crate::cursor::{Cursor, DISPLAY_NAME, SIZE};
use crate::display_name;

use super::ContentProvider;

pub struct HttpProvider {
    connect_timeout: Duration,
    timeout: Duration,
    follow_redirects: bool,
}

/// Headers of interest from a HEAD response.
#[derive(Debug, Default)]
struct HeadFields {
    content_type: Option<String>,
    content_disposition: Option<String>,
    content_length: Option<u64>,
}

impl HttpProvider {
    pub fn new(http: &HttpConfig) -> Self {
        Self {
            connect_timeout: Duration::from_secs(http.connect_timeout_secs),
            timeout: Duration::from_secs(http.timeout_secs),
            follow_redirects: http.follow_redirects,
        }
    }

    /// Performs a HEAD request and returns the parsed headers.
    fn probe(&self, uri: &Url) -> Result<HeadFields> {
        let mut lines: Vec<String> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(uri.as_str()).context("invalid URL")?;
        easy.nobody(true)?; // HEAD request
        easy.follow_location(self.follow_redirects)?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.timeout)?;

        {
            let mut transfer = easy.transfer();
            transfer.header_function(|data| {
                if let Ok(s) = str::from_utf8(data) {
                    lines.push(s.trim_end().to_string());
                }
                true
            })?;
            transfer.perform().context("HEAD request failed")?;
        }

        let code = easy.response_code().context("no response code")?;
        if !(200..300).contains(&code) {
            anyhow::bail!("HEAD {} returned HTTP {}", uri, code);
        }

        Ok(parse_head_fields(&lines))
    }
}

impl ContentProvider for HttpProvider {
    fn content_type(&self, uri: &Url) -> Result<Option<String>> {
        Ok(self.probe(uri)?.content_type)
    }

    fn query(&self, uri: &Url) -> Result<Option<Cursor>> {
        let fields = self.probe(uri)?;

        let name = fields
            .content_disposition
            .as_deref()
            .and_then(display_name::from_content_disposition)
            .or_else(|| display_name::from_path_segment(uri));

        let cursor = Cursor::new(
            vec![DISPLAY_NAME, SIZE],
            vec![vec![name, fields.content_length.map(|n| n.to_string())]],
        );
        Ok(Some(cursor))
    }
}

/// Parse collected header lines into HeadFields.
fn parse_head_fields(lines: &[String]) -> HeadFields {
    let mut fields = HeadFields::default();

    for line in lines {
        let Some((name, value)) = line.trim().split_once(':') else {
            continue;
        };
        let name = name.trim();
        let value = value.trim();
        if name.eq_ignore_ascii_case("content-type") {
            fields.content_type = strip_type_parameters(value);
        }
        if name.eq_ignore_ascii_case("content-disposition") && !value.is_empty() {
            fields.content_disposition = Some(value.to_string());
        }
        if name.eq_ignore_ascii_case("content-length") {
            if let Ok(n) = value.parse::<u64>() {
                fields.content_length = Some(n);
            }
        }
    }

    fields
}

/// `text/html; charset=utf-8` → `text/html`. Empty values become `None`.
fn strip_type_parameters(value: &str) -> Option<String> {
    let media_type = value.split(';').next().unwrap_or("").trim();
    if media_type.is_empty() {
        None
    } else {
        Some(media_type.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_content_type_strips_parameters() {
        let lines = [
            "HTTP/1.1 200 OK".to_string(),
            "Content-Type: audio/mpeg; charset=binary".to_string(),
        ];
        let fields = parse_head_fields(&lines);
        assert_eq!(fields.content_type.as_deref(), Some("audio/mpeg"));
    }

    #[test]
    fn parse_headers_case_insensitive() {
        let lines = [
            "content-type: application/pdf".to_string(),
            "CONTENT-LENGTH: 12345".to_string(),
        ];
        let fields = parse_head_fields(&lines);
        assert_eq!(fields.content_type.as_deref(), Some("application/pdf"));
        assert_eq!(fields.content_length, Some(12345));
    }

    #[test]
    fn parse_content_disposition_kept_raw() {
        let lines = ["Content-Disposition: attachment; filename=\"report.pdf\"".to_string()];
        let fields = parse_head_fields(&lines);
        assert!(fields
            .content_disposition
            .as_deref()
            .unwrap()
            .contains("report.pdf"));
    }

    #[test]
    fn parse_missing_headers_are_none() {
        let lines = ["HTTP/1.1 200 OK".to_string()];
        let fields = parse_head_fields(&lines);
        assert!(fields.content_type.is_none());
        assert!(fields.content_disposition.is_none());
        assert!(fields.content_length.is_none());
    }

    #[test]
    fn parse_empty_content_type_is_none() {
        let lines = ["Content-Type: ;charset=utf-8".to_string()];
        let fields = parse_head_fields(&lines);
        assert!(fields.content_type.is_none());
    }
}
