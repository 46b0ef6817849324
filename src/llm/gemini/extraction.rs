// src/llm/gemini/extraction.rs
// Response extraction for Gemini generateContent replies

use serde_json::Value;

use crate::error::Result;

/// Shown when the reply has no usable text
pub const FALLBACK_TEXT: &str = "No response from AI.";

/// Extract `candidates[0].content.parts[0].text`.
///
/// Any missing link, a non-string text, or an empty string yields
/// [`FALLBACK_TEXT`]. Never fails.
pub fn extract_text(body: &Value) -> String {
    body.get("candidates")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("content"))
        .and_then(|c| c.get("parts"))
        .and_then(|p| p.get(0))
        .and_then(|p| p.get("text"))
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
        .unwrap_or(FALLBACK_TEXT)
        .to_string()
}

/// Parse a raw response body and extract its text.
/// A body that is not JSON at all is an error, not a fallback.
pub fn extract_text_from_body(body: &str) -> Result<String> {
    let value: Value = serde_json::from_str(body)?;
    Ok(extract_text(&value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LetterError;
    use serde_json::json;

    #[test]
    fn test_extract_first_candidate_first_part() {
        let body = json!({"candidates":[{"content":{"parts":[{"text":"Dear Sir,..."}]}}]});
        assert_eq!(extract_text(&body), "Dear Sir,...");
    }

    #[test]
    fn test_extract_ignores_later_parts_and_candidates() {
        let body = json!({
            "candidates": [
                {"content": {"parts": [{"text": "first"}, {"text": "second"}]}},
                {"content": {"parts": [{"text": "other candidate"}]}}
            ]
        });
        assert_eq!(extract_text(&body), "first");
    }

    #[test]
    fn test_extract_preserves_whitespace() {
        let body = json!({
            "candidates": [{"content": {"parts": [{"text": "Dear Sir,\n\n  Regards\n"}]}}]
        });
        assert_eq!(extract_text(&body), "Dear Sir,\n\n  Regards\n");
    }

    #[test]
    fn test_fallback_on_each_missing_link() {
        let cases = [
            json!({}),
            json!({"candidates": []}),
            json!({"candidates": [{}]}),
            json!({"candidates": [{"content": {}}]}),
            json!({"candidates": [{"content": {"parts": []}}]}),
            json!({"candidates": [{"content": {"parts": [{}]}}]}),
            json!({"candidates": [{"content": {"parts": [{"functionCall": {"name": "x"}}]}}]}),
        ];
        for body in cases {
            assert_eq!(extract_text(&body), FALLBACK_TEXT, "body: {}", body);
        }
    }

    #[test]
    fn test_fallback_on_wrong_types() {
        let cases = [
            json!(null),
            json!([1, 2, 3]),
            json!({"candidates": {"0": {}}}),
            json!({"candidates": [{"content": {"parts": [{"text": 42}]}}]}),
            json!({"candidates": [{"content": {"parts": [{"text": null}]}}]}),
        ];
        for body in cases {
            assert_eq!(extract_text(&body), FALLBACK_TEXT, "body: {}", body);
        }
    }

    #[test]
    fn test_fallback_on_empty_text() {
        let body = json!({"candidates":[{"content":{"parts":[{"text":""}]}}]});
        assert_eq!(extract_text(&body), FALLBACK_TEXT);
    }

    #[test]
    fn test_api_error_body_falls_back() {
        let body = json!({"error": {"code": 400, "message": "API key not valid."}});
        assert_eq!(extract_text(&body), FALLBACK_TEXT);
    }

    #[test]
    fn test_extract_from_body() {
        let text = extract_text_from_body(
            r#"{"candidates":[{"content":{"parts":[{"text":"Hello"}],"role":"model"}}]}"#,
        )
        .unwrap();
        assert_eq!(text, "Hello");
    }

    #[test]
    fn test_non_json_body_is_error() {
        let result = extract_text_from_body("<html>502 Bad Gateway</html>");
        assert!(matches!(result, Err(LetterError::InvalidResponse(_))));
    }
}
