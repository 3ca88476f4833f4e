//! HTTP/1.1 wire-style renderings of requests and responses for `-v`

use std::fmt::Write;

use reqwest::header::HeaderMap;

/// Render the outgoing request: request line, Host, headers, blank line, body.
pub fn request(req: &reqwest::Request) -> String {
    let url = req.url();
    let mut target = url.path().to_string();
    if let Some(query) = url.query() {
        target.push('?');
        target.push_str(query);
    }

    let mut out = String::new();
    let _ = write!(out, "{} {} HTTP/1.1\r\n", req.method(), target);

    // `Host` displays IPv6 addresses in brackets
    if let Some(host) = url.host() {
        match url.port() {
            Some(port) => {
                let _ = write!(out, "Host: {}:{}\r\n", host, port);
            }
            None => {
                let _ = write!(out, "Host: {}\r\n", host);
            }
        }
    }

    write_headers(&mut out, req.headers());

    let body = req.body().and_then(|b| b.as_bytes());
    if let Some(bytes) = body {
        let _ = write!(out, "Content-Length: {}\r\n", bytes.len());
    }
    out.push_str("\r\n");
    if let Some(bytes) = body {
        out.push_str(&String::from_utf8_lossy(bytes));
    }
    out
}

/// Render the response head: status line, headers and the blank line.
pub fn response(resp: &reqwest::Response) -> String {
    let mut out = String::new();
    let _ = write!(out, "{:?} {}\r\n", resp.version(), resp.status());
    write_headers(&mut out, resp.headers());
    out.push_str("\r\n");
    out
}

fn write_headers(out: &mut String, headers: &HeaderMap) {
    for (name, value) in headers {
        let value = String::from_utf8_lossy(value.as_bytes());
        let _ = write!(out, "{}: {}\r\n", canonical_name(name.as_str()), value);
    }
}

/// `content-type` -> `Content-Type`
fn canonical_name(name: &str) -> String {
    name.split('-')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join("-")
}
