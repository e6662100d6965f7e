#![cfg(feature = "http-transport")]

use osu_api::{HttpTransport, OsuApiError, Transport};
use serde_json::json;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Serves one canned HTTP response on a local port and returns its URL.
async fn serve_once(status: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind listener");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept");
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|window| window == b"\r\n\r\n") {
            let read = socket.read(&mut buf).await.expect("read request");
            if read == 0 {
                break;
            }
            request.extend_from_slice(&buf[..read]);
        }
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket
            .write_all(response.as_bytes())
            .await
            .expect("write response");
        socket.shutdown().await.ok();
    });

    format!("http://{addr}/api/get_scores?k=KEY&b=1")
}

#[tokio::test]
async fn json_body_is_decoded() {
    let url = serve_once("200 OK", r#"[{"score":"1000"}]"#).await;
    let value = HttpTransport::new()
        .unwrap()
        .fetch_json(&url)
        .await
        .expect("json decoded");
    assert_eq!(value, json!([{ "score": "1000" }]));
}

#[tokio::test]
async fn non_json_body_is_decode_error() {
    let url = serve_once("200 OK", "hello").await;
    let err = HttpTransport::new().unwrap().fetch_json(&url).await.unwrap_err();
    assert!(matches!(err, OsuApiError::Decode(_)), "unexpected error: {err}");
}

#[tokio::test]
async fn error_status_is_transport_error() {
    let url = serve_once("500 Internal Server Error", r#"{"error":"boom"}"#).await;
    let err = HttpTransport::new().unwrap().fetch_json(&url).await.unwrap_err();
    match err {
        OsuApiError::Transport(message) => assert!(message.contains("500"), "{message}"),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn refused_connection_is_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let err = HttpTransport::new()
        .unwrap()
        .fetch_json(&format!("http://{addr}/api/get_scores?k=KEY"))
        .await
        .unwrap_err();
    assert!(matches!(err, OsuApiError::Transport(_)), "unexpected error: {err}");
}
