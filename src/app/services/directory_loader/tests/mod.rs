//! Test utilities and fixtures for directory loader testing
//!
//! This module provides sample CSV content, temporary file helpers and a
//! minimal one-shot HTTP responder used across the loader test modules.

use std::io::Write;
use tempfile::NamedTempFile;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

mod session_tests;
mod tokenizer_tests;

/// Directory with one local team, one blank row and one national team
pub const SAMPLE_CSV: &str = "\
Name,State/Terr./US,Region Note,Type,Web,Phone,Email,Social,Comment
Alpha Team,California,Los Angeles,Legal;Medical,http://a.example,555-0001,a@example.com,,Helps locally
,,,,,,,,
National Corps,National,,Medical,http://n.example,555-0002,n@example.com,,Covers all states
";

/// Convert string slices into an owned row
pub fn row(fields: &[&str]) -> Vec<String> {
    fields.iter().map(|f| f.to_string()).collect()
}

/// Write content to a temporary CSV file
pub fn create_temp_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// Serve exactly one HTTP response on a random local port
///
/// Returns the URL to request and a receiver yielding the raw request head
/// the server saw.
pub async fn serve_once(status_line: &str, body: &str) -> (String, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (request_tx, request_rx) = oneshot::channel();

    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: text/csv; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status_line,
        body.len(),
        body
    );

    tokio::spawn(async move {
        let Ok((mut socket, _)) = listener.accept().await else {
            return;
        };

        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            match socket.read(&mut buf).await {
                Ok(0) | Err(_) => break,
                Ok(n) => request.extend_from_slice(&buf[..n]),
            }
        }
        let _ = request_tx.send(String::from_utf8_lossy(&request).into_owned());

        let _ = socket.write_all(response.as_bytes()).await;
        let _ = socket.shutdown().await;
    });

    (format!("http://{}/rrts.csv", addr), request_rx)
}

/// Accept one connection and never answer it
pub async fn serve_never() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        if let Ok((socket, _)) = listener.accept().await {
            tokio::time::sleep(std::time::Duration::from_secs(30)).await;
            drop(socket);
        }
    });

    format!("http://{}/rrts.csv", addr)
}
