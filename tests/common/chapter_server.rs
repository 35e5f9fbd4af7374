//! Minimal HTTP/1.1 server for integration tests.
//!
//! Serves a fixed set of pages keyed by request target and answers 404 for
//! everything else. Every request line is recorded so tests can check what
//! the client asked for, including absolute-form targets sent to a proxy.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

pub struct ChapterServer {
    pub base_url: String,
    pub port: u16,
    request_lines: Arc<Mutex<Vec<String>>>,
}

impl ChapterServer {
    /// Request lines received so far, e.g. `GET /book/1.htm HTTP/1.1`.
    pub fn request_lines(&self) -> Vec<String> {
        self.request_lines.lock().unwrap().clone()
    }
}

/// Starts a server in a background thread. `pages` maps a request target
/// (path, or absolute URI when used as a proxy) to its body.
pub fn start(pages: &[(&str, &str)]) -> ChapterServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let pages: Arc<HashMap<String, Vec<u8>>> = Arc::new(
        pages
            .iter()
            .map(|(target, body)| (target.to_string(), body.as_bytes().to_vec()))
            .collect(),
    );
    let request_lines = Arc::new(Mutex::new(Vec::new()));

    let lines = Arc::clone(&request_lines);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let pages = Arc::clone(&pages);
            let lines = Arc::clone(&lines);
            thread::spawn(move || handle(stream, &pages, &lines));
        }
    });

    ChapterServer {
        base_url: format!("http://127.0.0.1:{}/", port),
        port,
        request_lines,
    }
}

fn handle(mut stream: TcpStream, pages: &HashMap<String, Vec<u8>>, lines: &Mutex<Vec<String>>) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));

    let mut request = Vec::new();
    let mut buf = [0u8; 4096];
    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => return,
            Ok(n) => request.extend_from_slice(&buf[..n]),
        }
    }

    let request = String::from_utf8_lossy(&request);
    let request_line = request.lines().next().unwrap_or_default().to_string();
    let target = request_line
        .split_whitespace()
        .nth(1)
        .unwrap_or_default()
        .to_string();
    lines.lock().unwrap().push(request_line);

    let response = match pages.get(&target) {
        Some(body) => {
            let mut response = format!(
                "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                body.len()
            )
            .into_bytes();
            response.extend_from_slice(body);
            response
        }
        None => b"HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n".to_vec(),
    };
    let _ = stream.write_all(&response);
    let _ = stream.flush();
}
