//! One-shot HTTP server for feed tests

use std::io::{Read, Write};
use std::net::TcpListener;

/// Serve a single plain-text response on 127.0.0.1, returns the feed URL
pub(crate) fn serve_once(status: u16, reason: &str, body: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: text/plain; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        reason,
        body.len(),
        body
    );

    std::thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            // Read until the end of the request headers
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                match stream.read(&mut buf) {
                    Ok(0) | Err(_) => break,
                    Ok(n) => request.extend_from_slice(&buf[..n]),
                }
            }
            let _ = stream.write_all(response.as_bytes());
            let _ = stream.flush();
        }
    });

    format!("http://{}/feed.txt", addr)
}

/// URL on a port that was just released, so connects are refused
pub(crate) fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/feed.txt", addr)
}
