//! Minimal HTTP/1.1 server answering HEAD requests for integration tests.
//!
//! Serves configurable metadata headers for any path. HEAD only; other
//! methods get 405.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

#[derive(Debug, Clone)]
pub struct HeadServerOptions {
    pub status: u16,
    pub content_type: Option<String>,
    pub content_disposition: Option<String>,
    pub content_length: Option<u64>,
}

impl Default for HeadServerOptions {
    fn default() -> Self {
        Self {
            status: 200,
            content_type: None,
            content_disposition: None,
            content_length: None,
        }
    }
}

/// Starts a server in a background thread. Returns the base URL
/// (e.g. "http://127.0.0.1:12345/"). Runs until the process exits.
pub fn start(opts: HeadServerOptions) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let opts = opts.clone();
            thread::spawn(move || handle(stream, &opts));
        }
    });
    format!("http://127.0.0.1:{}/", port)
}

fn handle(mut stream: std::net::TcpStream, opts: &HeadServerOptions) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));

    let mut buf = [0u8; 4096];
    let n = match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(n) => n,
    };
    let request = String::from_utf8_lossy(&buf[..n]);
    let method = request.split_whitespace().next().unwrap_or("");

    if !method.eq_ignore_ascii_case("HEAD") {
        let _ = stream.write_all(b"HTTP/1.1 405 Method Not Allowed\r\n\r\n");
        return;
    }

    let mut response = format!("HTTP/1.1 {} X\r\n", opts.status);
    if let Some(ct) = &opts.content_type {
        response.push_str(&format!("Content-Type: {}\r\n", ct));
    }
    if let Some(cd) = &opts.content_disposition {
        response.push_str(&format!("Content-Disposition: {}\r\n", cd));
    }
    if let Some(len) = opts.content_length {
        response.push_str(&format!("Content-Length: {}\r\n", len));
    }
    response.push_str("Connection: close\r\n\r\n");
    let _ = stream.write_all(response.as_bytes());
}
