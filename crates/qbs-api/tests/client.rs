#![allow(missing_docs)]

//! Tests driving the client end-to-end against a minimal in-process HTTP
//! stub: a TCP listener that serves one canned response and hands back the
//! request head so tests can assert on the path and query actually sent.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use qbs_api::{ApiClient, ApiError};
use qbs_model::FilterSet;

/// Serve exactly one request with the given status line and JSON body.
///
/// Returns the stub's base URL and a receiver for the raw request head.
async fn serve_once(
    status_line: &'static str,
    body: &'static str,
) -> (String, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind stub");
    let addr = listener.local_addr().expect("stub addr");
    let (head_tx, head_rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.expect("accept");

        // Read until the end of the request head.
        let mut head = Vec::new();
        loop {
            let mut buf = [0u8; 1024];
            let read = stream.read(&mut buf).await.expect("read request");
            if read == 0 {
                break;
            }
            head.extend_from_slice(&buf[..read]);
            if head.windows(4).any(|window| window == b"\r\n\r\n") {
                break;
            }
        }

        let response = format!(
            "{status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len(),
        );
        stream
            .write_all(response.as_bytes())
            .await
            .expect("write response");
        let _ = stream.shutdown().await;
        let _ = head_tx.send(String::from_utf8_lossy(&head).into_owned());
    });

    (format!("http://{addr}"), head_rx)
}

fn filters() -> FilterSet {
    FilterSet {
        class_id: 1,
        subject_id: 11,
        chapter_id: 111,
        topic_id: None,
        question_level_id: 5,
        question_type_id: 7,
        remove_used_questions: true,
    }
}

#[tokio::test]
async fn fetch_metadata_decodes_the_snapshot() {
    let (base_url, request_head) = serve_once(
        "HTTP/1.1 200 OK",
        r#"{"classes":[{"id":1,"subjects":[{"id":11,"chapters":[{"id":111}]}]}],"questionLevels":[{"id":5}],"questionTypes":[{"id":7}]}"#,
    )
    .await;

    let client = ApiClient::new(base_url).expect("client");
    let metadata = client.fetch_metadata().await.expect("fetch metadata");

    assert_eq!(metadata.classes.len(), 1);
    assert_eq!(metadata.classes[0].subjects[0].chapters[0].id, 111);
    assert_eq!(metadata.question_levels[0].id, 5);

    let head = request_head.await.expect("request head");
    assert!(head.starts_with("GET /courses/metadata HTTP/1.1"));
}

#[tokio::test]
async fn fetch_questions_sends_the_filter_query() {
    let (base_url, request_head) = serve_once(
        "HTTP/1.1 200 OK",
        r#"[{"id":3,"content":"What is $2^8$?","solutionHtml":"<p>256</p>"}]"#,
    )
    .await;

    let client = ApiClient::new(base_url).expect("client");
    let questions = client
        .fetch_questions(&filters())
        .await
        .expect("fetch questions");

    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0].id, 3);
    assert_eq!(questions[0].solution_html.as_deref(), Some("<p>256</p>"));

    let head = request_head.await.expect("request head");
    assert!(head.starts_with("GET /questions?"));
    assert!(head.contains("classId=1"));
    assert!(head.contains("subjectId=11"));
    assert!(head.contains("removeUsedQuestions=true"));
    // Absent topics stay off the wire entirely.
    assert!(!head.contains("topicId"));
}

#[tokio::test]
async fn empty_question_list_is_a_valid_result() {
    let (base_url, _request_head) = serve_once("HTTP/1.1 200 OK", "[]").await;

    let client = ApiClient::new(base_url).expect("client");
    let questions = client
        .fetch_questions(&filters())
        .await
        .expect("fetch questions");
    assert!(questions.is_empty());
}

#[tokio::test]
async fn server_errors_surface_as_status_values() {
    let (base_url, _request_head) =
        serve_once("HTTP/1.1 500 Internal Server Error", r#"{"error":"boom"}"#).await;

    let client = ApiClient::new(base_url).expect("client");
    let err = client.fetch_metadata().await.expect_err("should fail");

    assert!(matches!(err, ApiError::Status { status: 500, .. }));
}

#[tokio::test]
async fn malformed_bodies_surface_as_decode_errors() {
    let (base_url, _request_head) = serve_once("HTTP/1.1 200 OK", "not json").await;

    let client = ApiClient::new(base_url).expect("client");
    let err = client.fetch_metadata().await.expect_err("should fail");

    assert!(matches!(err, ApiError::Decode(_)));
}
