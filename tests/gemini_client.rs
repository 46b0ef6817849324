//! Gemini client against an in-process mock server


use letterhammer::LetterError;
use letterhammer::llm::{FALLBACK_TEXT, GeminiClient, TextGenerator};
use test_utils::{LETTER_REPLY, serve_hangup, serve_once};

fn client_for(base: String) -> GeminiClient {
    GeminiClient::with_http_client(base, "gemini-2.0-flash".to_string(), reqwest::Client::new())
}

#[tokio::test]
async fn test_request_wire_format() {
    let (base, server) = serve_once(200, LETTER_REPLY).await;
    let client = client_for(base);

    let text = client
        .generate("secret-key", "Write a formal letter for scenario: S\n\n- a: X")
        .await
        .unwrap();
    assert_eq!(text, "Dear Sir,...");

    let request = server.await.unwrap();
    assert_eq!(request.method, "POST");
    assert_eq!(
        request.target,
        "/v1beta/models/gemini-2.0-flash:generateContent?key=secret-key"
    );
    assert_eq!(request.header("content-type"), Some("application/json"));
    assert_eq!(
        request.json(),
        serde_json::json!({
            "contents": [{"parts": [{"text": "Write a formal letter for scenario: S\n\n- a: X"}]}]
        })
    );
}

#[tokio::test]
async fn test_key_is_query_encoded() {
    let (base, server) = serve_once(200, LETTER_REPLY).await;
    client_for(base).generate("a b&c", "p").await.unwrap();

    let request = server.await.unwrap();
    assert!(
        request.target.ends_with("?key=a+b%26c"),
        "target was {}",
        request.target
    );
}

#[tokio::test]
async fn test_missing_text_yields_fallback() {
    let (base, server) = serve_once(200, r#"{"candidates":[{"content":{"parts":[]}}]}"#).await;
    let text = client_for(base).generate("k", "p").await.unwrap();
    assert_eq!(text, FALLBACK_TEXT);
    server.await.unwrap();
}

#[tokio::test]
async fn test_json_error_status_yields_fallback() {
    let (base, server) = serve_once(
        400,
        r#"{"error":{"code":400,"message":"API key not valid.","status":"INVALID_ARGUMENT"}}"#,
    )
    .await;
    let text = client_for(base).generate("bad", "p").await.unwrap();
    assert_eq!(text, "No response from AI.");
    server.await.unwrap();
}

#[tokio::test]
async fn test_non_json_body_is_error() {
    let (base, server) = serve_once(502, "<html>Bad Gateway</html>").await;
    let result = client_for(base).generate("k", "p").await;
    assert!(matches!(result, Err(LetterError::InvalidResponse(_))));
    server.await.unwrap();
}

#[tokio::test]
async fn test_dropped_connection_is_http_error() {
    let (base, server) = serve_hangup().await;
    let result = client_for(base).generate("k", "p").await;
    assert!(matches!(result, Err(LetterError::Http(_))));
    server.await.unwrap();
}
