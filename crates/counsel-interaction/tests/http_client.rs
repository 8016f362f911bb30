use counsel_core::{PredictionConfig, RequestMode};
use counsel_interaction::{HttpPredictionClient, PredictionError, PredictionService};
use serde_json::{Value, json};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// Serves exactly one HTTP exchange and hands back the request body it got.
async fn serve_once(status_line: &'static str, body: &'static str) -> (String, oneshot::Receiver<Value>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}/api/v1/prediction/test", listener.local_addr().unwrap());
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let request_body = read_request_body(&mut socket).await;
        let _ = tx.send(serde_json::from_slice(&request_body).unwrap_or(Value::Null));

        let response = format!(
            "{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
    });

    (url, rx)
}

async fn read_request_body(socket: &mut tokio::net::TcpStream) -> Vec<u8> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];

    let header_end = loop {
        let n = socket.read(&mut chunk).await.unwrap();
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
        if n == 0 {
            return Vec::new();
        }
    };

    let headers = String::from_utf8_lossy(&buf[..header_end]).to_lowercase();
    let content_length = headers
        .lines()
        .find_map(|line| line.strip_prefix("content-length:"))
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(0);

    while buf.len() < header_end + content_length {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    buf[header_end..].to_vec()
}

fn client(timeout_secs: u64) -> HttpPredictionClient {
    HttpPredictionClient::new(&PredictionConfig {
        timeout_secs,
        connect_timeout_secs: 2,
    })
    .unwrap()
}

#[tokio::test]
async fn test_plain_question_round_trip() {
    let (url, received) = serve_once("HTTP/1.1 200 OK", r#"{"text": "You are analytical."}"#).await;

    let reply = client(5)
        .predict(&url, "What are my strengths?", &RequestMode::Plain)
        .await
        .unwrap();

    assert_eq!(reply.text, "You are analytical.");
    assert!(!reply.is_fallback);
    assert_eq!(received.await.unwrap(), json!({ "question": "What are my strengths?" }));
}

#[tokio::test]
async fn test_resume_override_is_sent() {
    let (url, received) = serve_once("HTTP/1.1 200 OK", r#"{"text": "Solid resume."}"#).await;

    client(5)
        .predict(&url, "Review", &RequestMode::ResumeAugmented("RESUME".to_string()))
        .await
        .unwrap();

    assert_eq!(
        received.await.unwrap(),
        json!({ "question": "Review", "overrideConfig": { "text": "RESUME" } })
    );
}

#[tokio::test]
async fn test_missing_text_field_is_fallback_not_error() {
    let (url, _received) = serve_once("HTTP/1.1 200 OK", r#"{"question": "echo"}"#).await;

    let reply = client(5)
        .predict(&url, "Hello", &RequestMode::Plain)
        .await
        .unwrap();

    assert!(reply.is_fallback);
}

#[tokio::test]
async fn test_error_status_is_protocol_error() {
    let (url, _received) =
        serve_once("HTTP/1.1 500 Internal Server Error", r#"{"error": "boom"}"#).await;

    let err = client(5)
        .predict(&url, "Hello", &RequestMode::Plain)
        .await
        .unwrap_err();

    match err {
        PredictionError::Protocol { status, ref detail } => {
            assert_eq!(status, 500);
            assert!(detail.contains("500"));
        }
        other => panic!("expected protocol error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unreachable_endpoint_is_transport_error() {
    // Bind then drop to get a port nothing listens on.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}/api/v1/prediction/gone", listener.local_addr().unwrap());
    drop(listener);

    let err = client(5)
        .predict(&url, "Hello", &RequestMode::Plain)
        .await
        .unwrap_err();

    assert!(matches!(err, PredictionError::Transport { .. }));
    assert!(err.is_reportable());
}

#[tokio::test]
async fn test_silent_endpoint_times_out() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}/api/v1/prediction/slow", listener.local_addr().unwrap());

    tokio::spawn(async move {
        let (_socket, _) = listener.accept().await.unwrap();
        tokio::time::sleep(std::time::Duration::from_secs(10)).await;
    });

    let err = client(1)
        .predict(&url, "Hello", &RequestMode::Plain)
        .await
        .unwrap_err();

    assert!(matches!(err, PredictionError::Transport { .. }));
    assert!(err.detail().contains("timed out"));
}
