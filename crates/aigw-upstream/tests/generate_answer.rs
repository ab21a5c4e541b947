//! End-to-end answer generation against a local HTTP server.
//!
//! Platforms live in an in-memory `SQLite` registry; the upstream is a
//! mockito server standing in for Ollama / DeepSeek.

use std::sync::Arc;
use std::time::Duration;

use aigw_core::{
    AiPlatformInput, AnswerResult, AnswerService, ErrorKind, PlatformService, PlatformType,
};
use aigw_db::SqlitePlatformRepository;
use aigw_upstream::{ReqwestUpstreamClient, UpstreamClientConfig};
use mockito::Matcher;
use serde_json::json;

struct Harness {
    platforms: PlatformService,
    answers: AnswerService,
}

async fn harness(timeout: Duration) -> Harness {
    let pool = aigw_db::setup_test_database().await.unwrap();
    let repo = Arc::new(SqlitePlatformRepository::new(pool));
    let upstream = Arc::new(
        ReqwestUpstreamClient::new(UpstreamClientConfig::new().with_timeout(timeout)).unwrap(),
    );
    Harness {
        platforms: PlatformService::new(repo.clone()),
        answers: AnswerService::new(repo, upstream),
    }
}

async fn register(h: &Harness, platform_type: PlatformType, url: String) -> String {
    let input = AiPlatformInput::new(platform_type, url, "secret", "test platform", "test-model");
    h.platforms.create(input).await.unwrap().name()
}

#[tokio::test]
async fn ollama_reply_is_stripped_of_reasoning() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/chat")
        .match_header("authorization", "Bearer secret")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "model": "test-model",
            "messages": [{"role": "user", "content": "What is 6*7?"}],
            "stream": false
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message":{"role":"assistant","content":"<think>reasoning</think> 42"}}"#)
        .create_async()
        .await;

    let h = harness(Duration::from_secs(5)).await;
    let name = register(&h, PlatformType::Ollama, format!("{}/api/chat", server.url())).await;

    let result = h.answers.generate_answer(&name, "What is 6*7?").await.unwrap();
    assert_eq!(result, AnswerResult::answered("42"));
    mock.assert_async().await;
}

#[tokio::test]
async fn deepseek_reply_uses_first_choice() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .match_body(Matcher::PartialJson(json!({"model": "test-model", "stream": false})))
        .with_status(200)
        .with_body(r#"{"choices":[{"message":{"content":"hello"}},{"message":{"content":"ignored"}}]}"#)
        .create_async()
        .await;

    let h = harness(Duration::from_secs(5)).await;
    let name = register(
        &h,
        PlatformType::Deepseek,
        format!("{}/chat/completions", server.url()),
    )
    .await;

    let result = h.answers.generate_answer(&name, "hi").await.unwrap();
    assert_eq!(result.answer(), Some("hello"));
    mock.assert_async().await;
}

#[tokio::test]
async fn error_status_becomes_failed_result() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/api/chat")
        .with_status(500)
        .with_body("model not loaded")
        .create_async()
        .await;

    let h = harness(Duration::from_secs(5)).await;
    let name = register(&h, PlatformType::Ollama, format!("{}/api/chat", server.url())).await;

    let result = h.answers.generate_answer(&name, "hi").await.unwrap();
    assert!(!result.is_success());
    let message = result.error_message().unwrap();
    assert!(message.contains("500"), "{message}");
    assert!(message.contains("model not loaded"), "{message}");
}

#[tokio::test]
async fn malformed_reply_becomes_failed_result() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/api/chat")
        .with_status(200)
        .with_body(r#"{"done":true}"#)
        .create_async()
        .await;

    let h = harness(Duration::from_secs(5)).await;
    let name = register(&h, PlatformType::Ollama, format!("{}/api/chat", server.url())).await;

    let result = h.answers.generate_answer(&name, "hi").await.unwrap();
    assert_eq!(
        result.error_message(),
        Some("Failed to parse response: invalid Ollama response format")
    );
}

#[tokio::test]
async fn unresponsive_platform_times_out() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    // Accept and hold connections without ever answering
    let _server = tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });

    let h = harness(Duration::from_millis(200)).await;
    let name = register(&h, PlatformType::Unspecified, format!("http://{addr}/generate")).await;

    let result = h.answers.generate_answer(&name, "hi").await.unwrap();
    let message = result.error_message().unwrap();
    assert!(message.contains("timed out"), "{message}");
}

#[tokio::test]
async fn unreachable_platform_is_connect_failure() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let h = harness(Duration::from_secs(5)).await;
    let name = register(&h, PlatformType::Ollama, format!("http://{addr}/api/chat")).await;

    let result = h.answers.generate_answer(&name, "hi").await.unwrap();
    let message = result.error_message().unwrap();
    assert!(message.starts_with("Failed to connect to AI platform"), "{message}");
}

#[tokio::test]
async fn bad_references_fail_before_any_request() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let h = harness(Duration::from_secs(5)).await;
    register(&h, PlatformType::Ollama, format!("{}/api/chat", server.url())).await;

    for bogus in ["bogus", "ai-platforms/x"] {
        let err = h.answers.generate_answer(bogus, "hi").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument, "{bogus}");
    }
    let err = h
        .answers
        .generate_answer("ai-platforms/999", "hi")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    mock.assert_async().await;
}
