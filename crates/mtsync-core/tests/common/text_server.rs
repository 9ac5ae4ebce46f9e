//! Minimal HTTP/1.1 server for integration tests.
//!
//! Answers every request with the same status and body. Can stall before
//! replying to exercise client timeouts, and records the `User-Agent` it saw.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct TextServerOptions {
    /// Status line sent back, e.g. "200 OK".
    pub status: &'static str,
    /// Sleep this long before writing the response.
    pub delay: Option<Duration>,
}

impl Default for TextServerOptions {
    fn default() -> Self {
        Self {
            status: "200 OK",
            delay: None,
        }
    }
}

/// Handle to a running server. The server runs until the process exits.
pub struct TextServer {
    pub url: String,
    user_agents: Arc<Mutex<Vec<String>>>,
}

impl TextServer {
    /// `User-Agent` header values received so far, in arrival order.
    pub fn user_agents(&self) -> Vec<String> {
        self.user_agents.lock().unwrap().clone()
    }
}

/// Starts a server returning `200 OK` with `body`.
pub fn start(body: impl Into<Vec<u8>>) -> TextServer {
    start_with_options(body, TextServerOptions::default())
}

pub fn start_with_options(body: impl Into<Vec<u8>>, opts: TextServerOptions) -> TextServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let body = Arc::new(body.into());
    let user_agents = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&user_agents);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let body = Arc::clone(&body);
            let seen = Arc::clone(&seen);
            let opts = opts.clone();
            thread::spawn(move || handle(stream, &body, &opts, &seen));
        }
    });
    TextServer {
        url: format!("http://127.0.0.1:{}/all_proxies.txt", port),
        user_agents,
    }
}

fn handle(
    mut stream: TcpStream,
    body: &[u8],
    opts: &TextServerOptions,
    seen: &Mutex<Vec<String>>,
) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(n) => n,
    };
    let request = String::from_utf8_lossy(&buf[..n]);
    if let Some(ua) = header_value(&request, "user-agent") {
        seen.lock().unwrap().push(ua);
    }

    if let Some(delay) = opts.delay {
        thread::sleep(delay);
    }

    let head = format!(
        "HTTP/1.1 {}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        opts.status,
        body.len()
    );
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(body);
}

fn header_value(request: &str, name: &str) -> Option<String> {
    request
        .lines()
        .skip(1)
        .take_while(|l| !l.trim().is_empty())
        .filter_map(|l| l.split_once(':'))
        .find(|(k, _)| k.trim().eq_ignore_ascii_case(name))
        .map(|(_, v)| v.trim().to_string())
}
