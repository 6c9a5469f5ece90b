//! Fetcher integration tests
//!
//! Runs `ReqwestFetcher` against one-shot HTTP servers on a local port.

use broeser::core::config::BrowserConfig;
use broeser::core::NavigationErrorKind;
use broeser::surface::{PageFetcher, ReqwestFetcher};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use url::Url;

/// Raw HTTP/1.1 response with a fixed length body
fn http_response(status: &str, content_type: &str, body: &str) -> Vec<u8> {
    format!(
        "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        content_type,
        body.len(),
        body
    )
    .into_bytes()
}

/// Accept one connection, read its request head and answer with `response`
async fn serve_once(response: Vec<u8>) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                return;
            }
            request.extend_from_slice(&buf[..n]);
        }
        socket.write_all(&response).await.unwrap();
        let _ = socket.shutdown().await;
    });

    addr
}

fn fetcher(max_body_bytes: usize) -> ReqwestFetcher {
    let config = BrowserConfig {
        timeout_secs: 5,
        max_body_bytes,
        ..BrowserConfig::default()
    };
    ReqwestFetcher::new(&config).unwrap()
}

fn url(addr: SocketAddr, path: &str) -> Url {
    Url::parse(&format!("http://{}{}", addr, path)).unwrap()
}

#[tokio::test]
async fn test_error_page_body_is_truncated_at_limit() {
    let body = format!(
        "<html><head><title>Nope</title></head><body>{}</body></html>",
        "x".repeat(5 * 1024)
    );
    let addr = serve_once(http_response("404 Not Found", "text/html", &body)).await;

    let page = fetcher(100).fetch(url(addr, "/missing")).await.unwrap();

    assert_eq!(page.status, 404);
    assert_eq!(page.title.as_deref(), Some("Nope"));
    assert_eq!(page.bytes, 100);
    assert!(page.truncated);
    assert_eq!(page.url.path(), "/missing");
}

#[tokio::test]
async fn test_body_at_limit_is_not_truncated() {
    let body = "<title>Exact</title>";
    let addr = serve_once(http_response("200 OK", "text/html; charset=utf-8", body)).await;

    let page = fetcher(body.len()).fetch(url(addr, "/")).await.unwrap();

    assert_eq!(page.status, 200);
    assert_eq!(page.bytes, body.len());
    assert!(!page.truncated);
    assert_eq!(page.title.as_deref(), Some("Exact"));
    assert_eq!(
        page.content_type.as_deref(),
        Some("text/html; charset=utf-8")
    );
}

#[tokio::test]
async fn test_server_error_is_still_a_page() {
    let addr = serve_once(http_response(
        "500 Internal Server Error",
        "text/html",
        "<title>Broken</title>",
    ))
    .await;

    let page = fetcher(1024).fetch(url(addr, "/")).await.unwrap();

    assert_eq!(page.status, 500);
    assert_eq!(page.title.as_deref(), Some("Broken"));
}

#[tokio::test]
async fn test_plain_text_has_no_title() {
    let addr = serve_once(http_response(
        "200 OK",
        "text/plain",
        "<title>Not markup</title>",
    ))
    .await;

    let page = fetcher(1024).fetch(url(addr, "/notes.txt")).await.unwrap();

    assert_eq!(page.status, 200);
    assert_eq!(page.title, None);
    assert_eq!(page.bytes, "<title>Not markup</title>".len());
}

#[tokio::test]
async fn test_refused_connection_is_connection_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let result = fetcher(1024).fetch(url(addr, "/")).await;

    assert_eq!(result.unwrap_err(), NavigationErrorKind::Connection);
}

#[tokio::test]
async fn test_silent_server_times_out() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (_socket, _) = listener.accept().await.unwrap();
        tokio::time::sleep(Duration::from_secs(10)).await;
    });

    let config = BrowserConfig {
        timeout_secs: 1,
        ..BrowserConfig::default()
    };
    let fetcher = ReqwestFetcher::new(&config).unwrap();

    let result = fetcher.fetch(url(addr, "/")).await;

    assert_eq!(result.unwrap_err(), NavigationErrorKind::Timeout);
}
