//! Wire-style rendering of requests and responses for debug logs

use reqwest::header::HeaderMap;
use reqwest::{Request, StatusCode, Version};

/// Render an outgoing request as request line, headers and body.
///
/// Returns `None` when the body is a stream that cannot be read without
/// consuming it.
pub fn dump_request(request: &Request) -> Option<Vec<u8>> {
    let body = match request.body() {
        Some(body) => body.as_bytes()?,
        None => &[],
    };

    let url = request.url();
    let mut target = url.path().to_string();
    if let Some(query) = url.query() {
        target.push('?');
        target.push_str(query);
    }

    let mut out = format!("{} {} {:?}\r\n", request.method(), target, request.version()).into_bytes();
    if let Some(host) = url.host_str() {
        let host = match url.port() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_string(),
        };
        push_header(&mut out, "host", host.as_bytes());
    }
    push_headers(&mut out, request.headers());
    out.extend_from_slice(b"\r\n");
    out.extend_from_slice(body);
    Some(out)
}

/// Render a response as status line, headers and body
pub fn dump_response(
    status: StatusCode,
    version: Version,
    headers: &HeaderMap,
    body: &[u8],
) -> Vec<u8> {
    let mut out = format!("{version:?} {status}\r\n").into_bytes();
    push_headers(&mut out, headers);
    out.extend_from_slice(b"\r\n");
    out.extend_from_slice(body);
    out
}

fn push_headers(out: &mut Vec<u8>, headers: &HeaderMap) {
    for (name, value) in headers {
        if value.is_sensitive() {
            push_header(out, name.as_str(), b"<redacted>");
        } else {
            push_header(out, name.as_str(), value.as_bytes());
        }
    }
}

fn push_header(out: &mut Vec<u8>, name: &str, value: &[u8]) {
    out.extend_from_slice(name.as_bytes());
    out.extend_from_slice(b": ");
    out.extend_from_slice(value);
    out.extend_from_slice(b"\r\n");
}
