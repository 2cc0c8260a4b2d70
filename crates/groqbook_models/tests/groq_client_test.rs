//! Tests for the Groq client against a local mock server.

use futures_util::StreamExt;
use groqbook_core::{GenerateRequest, Message, ResponseFormat};
use groqbook_error::{GroqErrorKind, GroqbookErrorKind};
use groqbook_interface::BookDriver;
use groqbook_models::GroqClient;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PATH: &str = "/openai/v1/chat/completions";

fn client_for(server: &MockServer) -> GroqClient {
    GroqClient::with_base_url("test-key", format!("{}{}", server.uri(), PATH))
}

fn json_request() -> GenerateRequest {
    GenerateRequest::builder()
        .model("llama3-70b-8192")
        .messages(vec![Message::system("Write JSON"), Message::user("Rust")])
        .temperature(0.3)
        .max_tokens(8000)
        .top_p(1.0)
        .response_format(ResponseFormat::JsonObject)
        .build()
        .expect("Valid request")
}

fn stream_request() -> GenerateRequest {
    GenerateRequest::builder()
        .model("llama3-8b-8192")
        .messages(vec![Message::user("Chapter one")])
        .stream(true)
        .build()
        .expect("Valid request")
}

fn sse_body(events: &[serde_json::Value]) -> String {
    let mut body = String::new();
    for event in events {
        body.push_str(&format!("data: {}\n\n", event));
    }
    body.push_str("data: [DONE]\n\n");
    body
}

#[tokio::test]
async fn test_complete_returns_content_and_usage() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(PATH))
        .and(header("authorization", "Bearer test-key"))
        .and(body_partial_json(json!({
            "model": "llama3-70b-8192",
            "response_format": {"type": "json_object"},
            "messages": [
                {"role": "system", "content": "Write JSON"},
                {"role": "user", "content": "Rust"}
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": "{\"Intro\":\"x\"}"},
                "finish_reason": "stop"
            }],
            "usage": {
                "queue_time": 0.01,
                "prompt_tokens": 120,
                "prompt_time": 0.05,
                "completion_tokens": 300,
                "completion_time": 1.25,
                "total_tokens": 420,
                "total_time": 1.3
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let completion = client_for(&server).complete(&json_request()).await?;

    assert_eq!(completion.content, "{\"Intro\":\"x\"}");
    let usage = completion.usage.expect("usage present");
    assert_eq!(usage.prompt_tokens, 120);
    assert_eq!(usage.completion_tokens, 300);
    assert_eq!(usage.prompt_time, 0.05);
    assert_eq!(usage.completion_time, 1.25);
    assert_eq!(usage.total_time, 1.3);
    Ok(())
}

#[tokio::test]
async fn test_complete_omits_stream_flag() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{"message": {"content": "{}"}}]
        })))
        .mount(&server)
        .await;

    client_for(&server).complete(&json_request()).await?;

    let requests = server.received_requests().await.expect("recording enabled");
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body)?;
    assert!(body.get("stream").is_none());
    assert_eq!(body["max_tokens"], 8000);
    Ok(())
}

#[tokio::test]
async fn test_complete_http_error_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(PATH))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .complete(&json_request())
        .await
        .unwrap_err();

    match err.kind() {
        GroqbookErrorKind::Groq(e) => assert_eq!(
            e.kind,
            GroqErrorKind::HttpStatus {
                status_code: 401,
                message: "invalid api key".to_string(),
            }
        ),
        other => panic!("Expected Groq error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_complete_without_choices_fails() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .complete(&json_request())
        .await
        .unwrap_err();
    assert!(matches!(
        err.kind(),
        GroqbookErrorKind::Groq(e) if e.kind == GroqErrorKind::EmptyResponse
    ));
}

#[tokio::test]
async fn test_stream_yields_deltas_then_usage() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    let body = sse_body(&[
        json!({"choices": [{"index": 0, "delta": {"role": "assistant", "content": ""}}], "x_groq": {"id": "req_1"}}),
        json!({"choices": [{"index": 0, "delta": {"content": "Once "}}]}),
        json!({"choices": [{"index": 0, "delta": {"content": "upon"}}]}),
        json!({
            "choices": [{"index": 0, "delta": {}, "finish_reason": "stop"}],
            "x_groq": {"id": "req_1", "usage": {
                "prompt_tokens": 30, "prompt_time": 0.01,
                "completion_tokens": 2, "completion_time": 0.02,
                "total_tokens": 32, "total_time": 0.03
            }}
        }),
    ]);
    Mock::given(method("POST"))
        .and(path(PATH))
        .and(body_partial_json(json!({"stream": true})))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/event-stream")
                .set_body_string(body),
        )
        .mount(&server)
        .await;

    let mut stream = client_for(&server).stream(&stream_request()).await?;
    let mut chunks = Vec::new();
    while let Some(chunk) = stream.next().await {
        chunks.push(chunk?);
    }

    assert_eq!(chunks.len(), 4);
    assert_eq!(chunks[0].delta.as_deref(), Some(""));
    assert!(chunks[0].usage.is_none());
    assert_eq!(chunks[1].delta.as_deref(), Some("Once "));
    assert_eq!(chunks[2].delta.as_deref(), Some("upon"));
    assert_eq!(chunks[3].delta, None);
    let usage = chunks[3].usage.expect("final usage");
    assert_eq!(usage.prompt_tokens, 30);
    assert_eq!(usage.completion_tokens, 2);
    assert_eq!(usage.total_time, 0.03);
    Ok(())
}

#[tokio::test]
async fn test_stream_without_done_is_an_error() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "data: {\"choices\":[{\"delta\":{\"content\":\"partial\"}}]}\n\n",
        ))
        .mount(&server)
        .await;

    let items: Vec<_> = client_for(&server)
        .stream(&stream_request())
        .await?
        .collect()
        .await;

    assert_eq!(items.len(), 2);
    assert_eq!(
        items[0].as_ref().map(|c| c.delta.clone()).ok(),
        Some(Some("partial".to_string()))
    );
    assert!(items[1].is_err());
    Ok(())
}

#[tokio::test]
async fn test_stream_with_garbage_event_is_an_error() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("data: not json\n\ndata: [DONE]\n\n"))
        .mount(&server)
        .await;

    let items: Vec<_> = client_for(&server)
        .stream(&stream_request())
        .await?
        .collect()
        .await;

    assert_eq!(items.len(), 1);
    let err = items.into_iter().next().expect("one item").unwrap_err();
    assert!(matches!(
        err.kind(),
        GroqbookErrorKind::Groq(e) if matches!(e.kind, GroqErrorKind::StreamInterrupted(_))
    ));
    Ok(())
}

#[test]
fn test_from_env_requires_key() {
    // SAFETY: this is the only test in the binary touching GROQ_API_KEY.
    unsafe { std::env::remove_var("GROQ_API_KEY") };
    let err = GroqClient::from_env().unwrap_err();
    assert_eq!(err.kind, GroqErrorKind::MissingApiKey);
}

#[tokio::test]
async fn test_unreachable_server_is_an_http_error() {
    // Port 1 is reserved and not listening
    let client = GroqClient::with_base_url("test-key", "http://127.0.0.1:1/chat/completions");
    let err = client.complete(&json_request()).await.unwrap_err();
    assert!(matches!(err.kind(), GroqbookErrorKind::Http(_)));
}
