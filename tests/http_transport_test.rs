//! HttpTransport against a throwaway local server

use iem_reco::client::HttpTransport;
use iem_reco_common::{Error, Transport, UserInput};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Serve one canned response and hand back the raw request text
async fn serve_once(status: &'static str, body: &'static str) -> (String, tokio::task::JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind failed");
    let addr = listener.local_addr().expect("no local addr");

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept failed");

        let mut request = Vec::new();
        let mut buf = [0u8; 4096];
        loop {
            let n = socket.read(&mut buf).await.expect("read failed");
            request.extend_from_slice(&buf[..n]);
            if n == 0 || request_complete(&request) {
                break;
            }
        }

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.expect("write failed");
        String::from_utf8_lossy(&request).into_owned()
    });

    (format!("http://{}", addr), handle)
}

/// Headers received and the body is as long as Content-Length says
fn request_complete(raw: &[u8]) -> bool {
    let text = String::from_utf8_lossy(raw);
    let Some(split) = text.find("\r\n\r\n") else {
        return false;
    };
    let length = text[..split]
        .lines()
        .find_map(|l| {
            let (name, value) = l.split_once(':')?;
            name.eq_ignore_ascii_case("content-length").then(|| value.trim().parse::<usize>().ok())?
        })
        .unwrap_or(0);
    raw.len() >= split + 4 + length
}

fn input() -> UserInput {
    UserInput {
        budget: "1jt-2jt".to_string(),
        genre: "Rock".to_string(),
        sound_character: "Bass kuat".to_string(),
    }
}

#[tokio::test]
async fn test_posts_json_to_recommend_endpoint() {
    let (server, handle) = serve_once("200 OK", r#"{"success": true, "recommendations": []}"#).await;
    let transport = HttpTransport::new(&server, Duration::from_secs(5)).expect("client");

    let envelope = transport.recommend(&input()).await.expect("request failed");
    assert!(envelope.success);

    let request = handle.await.expect("server task failed");
    assert!(request.starts_with("POST /api/recommend HTTP/1.1"));
    assert!(request.to_lowercase().contains("content-type: application/json"));
    assert!(request.contains(r#""sound_character":"Bass kuat""#));
}

/// HTTP status is ignored; the envelope decides
#[tokio::test]
async fn test_error_status_still_parsed() {
    let body = r#"{"success": false, "error": "No IEM available in budget > 2jt"}"#;
    let (server, handle) = serve_once("404 Not Found", body).await;
    let transport = HttpTransport::new(&server, Duration::from_secs(5)).expect("client");

    let envelope = transport.recommend(&input()).await.expect("request failed");
    assert!(!envelope.success);
    assert_eq!(envelope.error.as_deref(), Some("No IEM available in budget > 2jt"));
    handle.await.expect("server task failed");
}

#[tokio::test]
async fn test_non_json_body_is_transport_error() {
    let (server, handle) = serve_once("502 Bad Gateway", "<html>bad gateway</html>").await;
    let transport = HttpTransport::new(&server, Duration::from_secs(5)).expect("client");

    let err = transport.recommend(&input()).await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
    handle.await.expect("server task failed");
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    // Bind then drop to get a port nobody listens on
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind failed");
    let addr = listener.local_addr().expect("no local addr");
    drop(listener);

    let transport = HttpTransport::new(&format!("http://{}", addr), Duration::from_secs(5)).expect("client");
    let err = transport.recommend(&input()).await.unwrap_err();
    assert!(err.to_string().starts_with("Could not connect to the server: "));
}
