//! Rewrite orchestration with a guaranteed degraded fallback.

use std::fmt;
use std::sync::Arc;

use super::catalog::{Context, ToneCatalog, ToneVariant};
use super::client::ModelClient;
use super::error::RewriteError;
use super::model::{ParsedFields, RewriteRequest, RewriteResult};
use super::parser::extract_fields;
use super::prompt::build_rewrite_prompt;

/// Fixed rewritten-text marker carried by the degraded fallback response.
pub const FALLBACK_REWRITTEN_TEXT: &str = "[서비스 일시 중단]";

/// Fixed apology carried by the degraded fallback response.
pub const FALLBACK_EXPLANATION: &str = "서비스에 일시적인 문제가 발생했습니다.";

/// Coordinates one rewrite request: tone resolution, prompt construction,
/// model invocation, reply parsing, and result assembly.
///
/// The orchestrator holds only immutable state and is safe to share across
/// arbitrarily many concurrent requests. Construct it once at startup and
/// reuse it.
#[derive(Clone)]
pub struct RewriteOrchestrator {
    catalog: ToneCatalog,
    client: Arc<dyn ModelClient>,
}

impl fmt::Debug for RewriteOrchestrator {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("RewriteOrchestrator")
            .field("catalog", &self.catalog)
            .finish_non_exhaustive()
    }
}

impl RewriteOrchestrator {
    /// Creates an orchestrator over an immutable catalogue and model client.
    #[must_use]
    pub fn new(catalog: ToneCatalog, client: Arc<dyn ModelClient>) -> Self {
        Self { catalog, client }
    }

    /// Ordered tone variants available for a context.
    #[must_use]
    pub const fn available_tones(&self, context: Context) -> &[ToneVariant] {
        self.catalog.tones_for(context)
    }

    /// Rewrites the request's text in the resolved tone.
    ///
    /// Every failure after tone resolution — a failed or timed-out model
    /// call, or an unparseable reply — is absorbed into the returned result:
    /// parse failures substitute per-field sentinels, invocation failures
    /// substitute the fixed fallback response. The caller never sees raw
    /// provider error text.
    ///
    /// # Errors
    ///
    /// Returns a validation-class [`RewriteError`] (empty text, or a tone
    /// outside the context's tone set) before any model call is made.
    pub async fn rewrite(&self, request: &RewriteRequest) -> Result<RewriteResult, RewriteError> {
        if request.text().trim().is_empty() {
            return Err(RewriteError::EmptyText);
        }
        let tone = self.catalog.resolve(request.context(), request.tone())?;

        let prompt = build_rewrite_prompt(request.text(), request.context(), tone);
        let fields = match self.client.complete(&prompt).await {
            Ok(reply) => {
                tracing::debug!("raw model reply ({} bytes):\n{reply}", reply.len());
                extract_fields(&reply)
            }
            Err(error) => {
                tracing::warn!("model invocation failed, substituting fallback response: {error}");
                ParsedFields {
                    rewritten_text: FALLBACK_REWRITTEN_TEXT.to_owned(),
                    explanation: FALLBACK_EXPLANATION.to_owned(),
                }
            }
        };

        Ok(RewriteResult {
            original_text: request.text().to_owned(),
            context: request.context(),
            rewritten_text: fields.rewritten_text,
            explanation: fields.explanation,
            tone_name: tone.name().to_owned(),
            tone_icon: tone.icon().to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rstest::rstest;

    use crate::rewrite::test_support::StubModelClient;
    use crate::rewrite::{
        Context, EXPLANATION_PARSE_SENTINEL, ModelClient, RewriteError, RewriteRequest,
        ToneCatalog,
    };

    use super::super::client::MockModelClient;
    use super::{FALLBACK_EXPLANATION, FALLBACK_REWRITTEN_TEXT, RewriteOrchestrator};

    fn orchestrator(client: impl ModelClient + 'static) -> RewriteOrchestrator {
        RewriteOrchestrator::new(ToneCatalog::standard(), Arc::new(client))
    }

    #[tokio::test]
    async fn rewrite_parses_reply_and_copies_original_verbatim() {
        let stub =
            StubModelClient::success("리라이팅: Good morning.\n설명\nMade it more formal.");
        let subject = orchestrator(stub);
        let request = RewriteRequest::new("good morning", Context::BusinessEmail, None);

        let result = subject
            .rewrite(&request)
            .await
            .expect("well-formed request must not be rejected");

        assert_eq!(result.original_text, "good morning");
        assert_eq!(result.context, Context::BusinessEmail);
        assert_eq!(result.rewritten_text, "Good morning.");
        assert_eq!(result.explanation, "Made it more formal.");
        assert_eq!(result.tone_name, "정중한");
        assert_eq!(result.tone_icon, "🤝");
    }

    #[tokio::test]
    async fn rewrite_uses_the_requested_tone() {
        let stub = StubModelClient::success("리라이팅: Send it today.\n설명\nShorter.");
        let subject = orchestrator(stub);
        let request = RewriteRequest::new(
            "please send the file",
            Context::BusinessEmail,
            Some("간결한".to_owned()),
        );

        let result = subject
            .rewrite(&request)
            .await
            .expect("well-formed request must not be rejected");

        assert_eq!(result.tone_name, "간결한");
        assert_eq!(result.tone_icon, "⚡");
    }

    #[rstest]
    #[case(Context::BusinessEmail, "정중한", "🤝")]
    #[case(Context::Academic, "학술적", "🎓")]
    #[case(Context::Casual, "친근한", "😊")]
    #[tokio::test]
    async fn failed_invocation_degrades_to_the_fallback_response(
        #[case] context: Context,
        #[case] default_name: &str,
        #[case] default_icon: &str,
    ) {
        let stub = StubModelClient::failure(RewriteError::Network {
            message: "connection reset".to_owned(),
        });
        let subject = orchestrator(stub);
        let request = RewriteRequest::new("hello", context, None);

        let result = subject
            .rewrite(&request)
            .await
            .expect("invocation failure must not surface as an error");

        assert_eq!(result.original_text, "hello");
        assert_eq!(result.rewritten_text, FALLBACK_REWRITTEN_TEXT);
        assert_eq!(result.explanation, FALLBACK_EXPLANATION);
        assert_eq!(result.tone_name, default_name);
        assert_eq!(result.tone_icon, default_icon);
    }

    #[tokio::test]
    async fn fallback_response_never_leaks_provider_error_text() {
        let stub = StubModelClient::failure(RewriteError::Api {
            message: "upstream exploded with secret details".to_owned(),
        });
        let subject = orchestrator(stub);
        let request = RewriteRequest::new("hello", Context::Casual, None);

        let result = subject
            .rewrite(&request)
            .await
            .expect("invocation failure must not surface as an error");

        assert!(!result.rewritten_text.contains("secret"));
        assert!(!result.explanation.contains("secret"));
    }

    #[tokio::test]
    async fn unknown_tone_is_rejected_before_any_model_call() {
        let mut mock = MockModelClient::new();
        mock.expect_complete().times(0);
        let subject = orchestrator(mock);
        let request = RewriteRequest::new(
            "hello",
            Context::Academic,
            Some("존재안함".to_owned()),
        );

        let error = subject
            .rewrite(&request)
            .await
            .expect_err("tone outside the context's set must be rejected");

        assert_eq!(
            error,
            RewriteError::UnknownTone {
                tone: "존재안함".to_owned(),
                context: Context::Academic,
            }
        );
    }

    #[tokio::test]
    async fn empty_text_is_rejected_before_any_model_call() {
        let mut mock = MockModelClient::new();
        mock.expect_complete().times(0);
        let subject = orchestrator(mock);
        let request = RewriteRequest::new("   ", Context::Casual, None);

        let error = subject
            .rewrite(&request)
            .await
            .expect_err("whitespace-only text must be rejected");

        assert_eq!(error, RewriteError::EmptyText);
    }

    #[tokio::test]
    async fn partial_parse_keeps_the_extracted_field() {
        let stub = StubModelClient::success("리라이팅: Good morning.\n(no explanation block)");
        let subject = orchestrator(stub);
        let request = RewriteRequest::new("good morning", Context::BusinessEmail, None);

        let result = subject
            .rewrite(&request)
            .await
            .expect("parse failure of one field must not reject the request");

        assert_eq!(result.rewritten_text, "Good morning.");
        assert_eq!(result.explanation, EXPLANATION_PARSE_SENTINEL);
    }

    #[tokio::test]
    async fn identical_requests_yield_identical_results() {
        let stub = StubModelClient::success("리라이팅: Hi.\n설명: Casual greeting.");
        let subject = orchestrator(stub);
        let request = RewriteRequest::new("hello", Context::Casual, Some("캐주얼한".to_owned()));

        let first = subject
            .rewrite(&request)
            .await
            .expect("well-formed request must not be rejected");
        let second = subject
            .rewrite(&request)
            .await
            .expect("well-formed request must not be rejected");

        assert_eq!(first, second);
    }
}
