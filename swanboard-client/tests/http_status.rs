// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Exercises the client against a throwaway HTTP/1.1 listener that replays
// canned backend responses, one per accepted connection.

#![cfg(not(target_arch = "wasm32"))]

use std::sync::{Arc, Mutex};

use swanboard_client::swanboard_types::{BadgeTone, ConnectionAction};
use swanboard_client::{ApiError, AuthMode, StatusApiClient};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

struct Canned {
    status_line: &'static str,
    headers: Vec<String>,
    body: String,
}

impl Canned {
    fn json(body: &str) -> Self {
        Self {
            status_line: "200 OK",
            headers: vec!["Content-Type: application/json".to_string()],
            body: body.to_string(),
        }
    }

    fn status(status_line: &'static str, body: &str) -> Self {
        Self {
            status_line,
            headers: vec!["Content-Type: text/html".to_string()],
            body: body.to_string(),
        }
    }

    fn redirect(location: String) -> Self {
        Self {
            status_line: "302 FOUND",
            headers: vec![format!("Location: {location}")],
            body: String::new(),
        }
    }
}

/// Serve `responses` in order and return the base URL plus the recorded
/// request heads.
async fn serve(responses: Vec<Canned>) -> (String, Arc<Mutex<Vec<String>>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    let seen = Arc::new(Mutex::new(Vec::new()));
    let recorder = seen.clone();

    tokio::spawn(async move {
        for canned in responses {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut head = Vec::new();
            let mut buf = [0u8; 1024];
            while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                head.extend_from_slice(&buf[..n]);
            }
            recorder
                .lock()
                .unwrap()
                .push(String::from_utf8_lossy(&head).to_string());

            let mut response = format!("HTTP/1.1 {}\r\n", canned.status_line);
            for header in &canned.headers {
                response.push_str(header);
                response.push_str("\r\n");
            }
            response.push_str(&format!(
                "Content-Length: {}\r\nConnection: close\r\n\r\n{}",
                canned.body.len(),
                canned.body
            ));
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        }
    });

    (base, seen)
}

#[tokio::test]
async fn get_status_decodes_snapshot_in_order() {
    let (base, seen) = serve(vec![Canned::json(
        r#"{"db1":"established: 5 connections","api2":"reconnecting"}"#,
    )])
    .await;
    let client = StatusApiClient::new(&base, AuthMode::Browser).unwrap();

    let snapshot = client.get_status().await.unwrap();

    let entries: Vec<_> = snapshot
        .iter()
        .map(|(name, status)| (name.to_string(), status.tone()))
        .collect();
    assert_eq!(
        entries,
        vec![
            ("db1".to_string(), BadgeTone::Success),
            ("api2".to_string(), BadgeTone::Warning)
        ]
    );
    assert!(seen.lock().unwrap()[0].starts_with("GET /api/status HTTP/1.1"));
}

#[tokio::test]
async fn session_cookie_is_forwarded() {
    let (base, seen) = serve(vec![Canned::json("{}")]).await;
    let client =
        StatusApiClient::new(&base, AuthMode::SessionCookie("session=abc123".into())).unwrap();

    let snapshot = client.get_status().await.unwrap();

    assert!(snapshot.is_empty());
    let head = seen.lock().unwrap()[0].to_lowercase();
    assert!(head.contains("cookie: session=abc123"), "{head}");
}

#[tokio::test]
async fn unauthorized_maps_to_not_authenticated() {
    let (base, _) = serve(vec![Canned::status("401 UNAUTHORIZED", "")]).await;
    let client = StatusApiClient::new(&base, AuthMode::Browser).unwrap();

    let err = client.get_status().await.unwrap_err();
    assert!(matches!(err, ApiError::NotAuthenticated), "{err:?}");
}

#[tokio::test]
async fn login_redirect_maps_to_not_authenticated() {
    // Relative Location headers resolve against the same listener.
    let (base, seen) = serve(vec![
        Canned::redirect("/login".to_string()),
        Canned::status("200 OK", "<html>login form</html>"),
    ])
    .await;
    let client = StatusApiClient::new(&base, AuthMode::Browser).unwrap();

    let err = client.get_status().await.unwrap_err();
    assert!(matches!(err, ApiError::NotAuthenticated), "{err:?}");
    assert!(seen.lock().unwrap()[1].starts_with("GET /login HTTP/1.1"));
}

#[tokio::test]
async fn html_body_is_a_decode_error() {
    let (base, _) = serve(vec![Canned::status("200 OK", "<html>oops</html>")]).await;
    let client = StatusApiClient::new(&base, AuthMode::Browser).unwrap();

    let err = client.get_status().await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)), "{err:?}");
}

#[tokio::test]
async fn server_error_keeps_status_and_body() {
    let (base, _) = serve(vec![Canned::status("500 INTERNAL SERVER ERROR", "vici down")]).await;
    let client = StatusApiClient::new(&base, AuthMode::Browser).unwrap();

    match client.get_stats().await.unwrap_err() {
        ApiError::ServerError { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "vici down");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn get_stats_reads_counters() {
    let (base, seen) = serve(vec![Canned::json(
        r#"{"ikesas":{"total":"3","half-open":"1"}}"#,
    )])
    .await;
    let client = StatusApiClient::new(&base, AuthMode::Browser).unwrap();

    let stats = client.get_stats().await.unwrap();
    assert_eq!(stats.ike_sas_total(), Some(3));
    assert_eq!(stats.ike_sas_half_open(), Some(1));
    assert!(seen.lock().unwrap()[0].starts_with("GET /api/stats HTTP/1.1"));
}

#[tokio::test]
async fn perform_action_follows_redirect_to_dashboard() {
    let (base, seen) = serve(vec![
        Canned::redirect("/".to_string()),
        Canned::status("200 OK", "<html>dashboard</html>"),
    ])
    .await;
    let client = StatusApiClient::new(&base, AuthMode::Browser).unwrap();

    client
        .perform_action(ConnectionAction::Stop, "db1")
        .await
        .unwrap();

    let seen = seen.lock().unwrap();
    assert!(seen[0].starts_with("GET /connections/stop/db1 HTTP/1.1"));
    assert!(seen[1].starts_with("GET / HTTP/1.1"));
}
