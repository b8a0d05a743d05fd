//! Test utilities for remote clients.
//!
//! Provides a one-shot local HTTP server that records the request it receives.

#![allow(dead_code)]

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// A request captured by [`serve_once`].
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    /// Request line, e.g. `POST /gradio_api/run/predict HTTP/1.1`
    pub request_line: String,
    /// Raw header block
    pub headers: String,
    /// Request body
    pub body: String,
}

/// Answers exactly one request with `content_type` and `body`.
///
/// Returns the server address and a handle yielding the captured request.
pub async fn serve_once(
    content_type: &'static str,
    body: Vec<u8>,
) -> std::io::Result<(String, JoinHandle<std::io::Result<CapturedRequest>>)> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let address = format!("http://{}", listener.local_addr()?);

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await?;

        let mut received = Vec::new();
        let mut chunk = [0u8; 4096];
        let header_end = loop {
            let n = socket.read(&mut chunk).await?;
            if n == 0 {
                break received.len();
            }
            received.extend_from_slice(&chunk[..n]);
            if let Some(pos) = find(&received, b"\r\n\r\n") {
                break pos + 4;
            }
        };

        let headers = String::from_utf8_lossy(&received[..header_end]).to_string();
        let content_length = headers
            .lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                name.eq_ignore_ascii_case("content-length")
                    .then(|| value.trim().parse::<usize>().ok())
                    .flatten()
            })
            .unwrap_or(0);

        while received.len() < header_end + content_length {
            let n = socket.read(&mut chunk).await?;
            if n == 0 {
                break;
            }
            received.extend_from_slice(&chunk[..n]);
        }

        let head = format!(
            "HTTP/1.1 200 OK\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            content_type,
            body.len()
        );
        socket.write_all(head.as_bytes()).await?;
        socket.write_all(&body).await?;
        socket.shutdown().await?;

        let request_line = headers.lines().next().unwrap_or_default().to_string();
        Ok(CapturedRequest {
            request_line,
            headers,
            body: String::from_utf8_lossy(&received[header_end..]).to_string(),
        })
    });

    Ok((address, handle))
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
