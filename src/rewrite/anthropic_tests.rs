//! Unit tests for the Anthropic Messages adapter.

use crate::rewrite::RewriteError;

use super::{
    AnthropicConfig, AnthropicModelClient, MessagesResponse, first_text_block,
    truncate_for_message,
};

#[test]
fn construction_requires_api_key() {
    let error = AnthropicModelClient::new(AnthropicConfig::default())
        .expect_err("missing key should be rejected at construction");

    assert!(
        matches!(error, RewriteError::Configuration { .. }),
        "expected missing API key to map to Configuration error, got {error:?}"
    );
}

#[test]
fn construction_succeeds_with_api_key() {
    let config = AnthropicConfig {
        api_key: Some("test-key".to_owned()),
        ..AnthropicConfig::default()
    };

    assert!(AnthropicModelClient::new(config).is_ok());
}

#[test]
fn first_text_block_skips_textless_blocks() {
    let response: MessagesResponse = serde_json::from_value(serde_json::json!({
        "content": [
            {"type": "thinking"},
            {"type": "text", "text": "리라이팅: Hello."}
        ]
    }))
    .expect("messages response should decode");

    assert_eq!(first_text_block(&response), Some("리라이팅: Hello."));
}

#[test]
fn first_text_block_returns_none_for_empty_content() {
    let response: MessagesResponse =
        serde_json::from_value(serde_json::json!({"content": []}))
            .expect("messages response should decode");

    assert_eq!(first_text_block(&response), None);
}

#[test]
fn truncate_for_message_appends_ellipsis_only_when_needed() {
    assert_eq!(truncate_for_message("short", 160), "short");
    assert_eq!(truncate_for_message("abcdef", 3), "abc...");
}
