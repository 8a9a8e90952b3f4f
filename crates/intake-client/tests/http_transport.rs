//! Integration tests for `ReqwestTransport` against a loopback HTTP server.
//!
//! The server is a bare `tokio::net::TcpListener` that accepts one
//! connection, captures the request, and answers with a fixed status line.
//! That is enough to check the method, path, `Content-Type`, and JSON body
//! that actually go over the wire.

use std::sync::Arc;

use intake_client::application::{SubmissionController, SubmitEvent, SubmitOutcome, FORM_ID};
use intake_client::domain::IntakeConfig;
use intake_client::infrastructure::mock::RecordingFormView;
use intake_client::infrastructure::ReqwestTransport;
use intake_core::{FormInputs, StatusMessage};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// What the loopback server saw.
struct CapturedRequest {
    request_line: String,
    /// Header block, lowercased.
    headers: String,
    body: String,
}

/// Starts a server that handles exactly one request.
///
/// Returns the webhook URL to post to and a handle resolving to the
/// captured request.
async fn serve_once(status_line: &'static str) -> (String, JoinHandle<CapturedRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];

        // Read until the end of the header block.
        let header_end = loop {
            let n = stream.read(&mut chunk).await.unwrap();
            assert!(n > 0, "connection closed before headers were complete");
            buf.extend_from_slice(&chunk[..n]);
            if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                break pos + 4;
            }
        };

        let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
        let (request_line, headers) = head.split_once("\r\n").unwrap();
        let headers = headers.to_ascii_lowercase();
        let content_length: usize = headers
            .lines()
            .find_map(|l| l.strip_prefix("content-length:"))
            .map(|v| v.trim().parse().unwrap())
            .unwrap_or(0);

        // Read the rest of the body.
        while buf.len() < header_end + content_length {
            let n = stream.read(&mut chunk).await.unwrap();
            assert!(n > 0, "connection closed before body was complete");
            buf.extend_from_slice(&chunk[..n]);
        }
        let body = String::from_utf8_lossy(&buf[header_end..header_end + content_length])
            .to_string();

        let response =
            format!("HTTP/1.1 {status_line}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n");
        stream.write_all(response.as_bytes()).await.unwrap();
        stream.shutdown().await.ok();

        CapturedRequest {
            request_line: request_line.to_string(),
            headers,
            body,
        }
    });

    (format!("http://{addr}/webhook/astrology"), handle)
}

fn complete_form() -> FormInputs {
    FormInputs {
        full_name: " Ada Lovelace ".to_string(),
        email: "ada@example.com".to_string(),
        date_of_birth: "1815-12-10".to_string(),
        time_of_birth: "06:45".to_string(),
        place_of_birth: "London".to_string(),
        gender: String::new(),
        focus_area: "career".to_string(),
        extra_context: String::new(),
        consent: true,
    }
}

fn controller_for(url: String, view: Arc<RecordingFormView>) -> SubmissionController {
    let config = IntakeConfig {
        webhook_url: Some(url),
        ..IntakeConfig::default()
    };
    let transport = ReqwestTransport::new(config.request_timeout()).unwrap();
    SubmissionController::new(&config, view, Arc::new(transport))
}

#[tokio::test]
async fn test_post_carries_json_content_type_and_body() {
    // Arrange
    let (url, server) = serve_once("200 OK").await;
    let view = Arc::new(RecordingFormView::new(complete_form()));
    let controller = controller_for(url, view.clone());

    // Act
    let outcome = controller
        .handle_submit(&mut SubmitEvent::new(FORM_ID))
        .await;
    let request = server.await.unwrap();

    // Assert
    assert!(outcome.is_submitted());
    assert_eq!(request.request_line, "POST /webhook/astrology HTTP/1.1");
    assert!(
        request.headers.contains("content-type: application/json"),
        "headers were: {}",
        request.headers
    );
    let body: serde_json::Value = serde_json::from_str(&request.body).unwrap();
    assert_eq!(
        body,
        serde_json::json!({
            "fullName": "Ada Lovelace",
            "email": "ada@example.com",
            "dateOfBirth": "1815-12-10",
            "timeOfBirth": "06:45",
            "placeOfBirth": "London",
            "gender": null,
            "focusArea": "career",
            "extraContext": null,
            "source": "astrology-prediction-site-v1"
        })
    );
    assert!(view.inputs().is_blank());
    assert_eq!(view.status(), StatusMessage::received());
}

#[tokio::test]
async fn test_server_error_is_reported_as_failure() {
    // Arrange
    let (url, server) = serve_once("500 Internal Server Error").await;
    let view = Arc::new(RecordingFormView::new(complete_form()));
    let controller = controller_for(url, view.clone());

    // Act
    let outcome = controller
        .handle_submit(&mut SubmitEvent::new(FORM_ID))
        .await;
    server.await.unwrap();

    // Assert
    assert!(matches!(outcome, SubmitOutcome::Failed(_)));
    assert_eq!(view.inputs(), complete_form());
    assert_eq!(view.status(), StatusMessage::send_failed());
    assert!(view.submit_enabled());
}

#[tokio::test]
async fn test_202_accepted_counts_as_success() {
    let (url, server) = serve_once("202 Accepted").await;
    let view = Arc::new(RecordingFormView::new(complete_form()));
    let controller = controller_for(url, view.clone());

    let outcome = controller
        .handle_submit(&mut SubmitEvent::new(FORM_ID))
        .await;
    server.await.unwrap();

    assert!(outcome.is_submitted());
}
