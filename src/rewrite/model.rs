//! Shared domain models for style rewriting.

use serde::{Deserialize, Serialize};

use super::catalog::Context;

/// Input payload for a rewrite request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteRequest {
    text: String,
    context: Context,
    tone: Option<String>,
}

impl RewriteRequest {
    /// Constructs a request from explicit text/context/tone values.
    ///
    /// `tone` of `None` selects the context's default tone during
    /// orchestration.
    #[must_use]
    pub fn new(text: impl Into<String>, context: Context, tone: Option<String>) -> Self {
        Self {
            text: text.into(),
            context,
            tone,
        }
    }

    /// Sentence that should be rewritten.
    #[must_use]
    pub const fn text(&self) -> &str {
        self.text.as_str()
    }

    /// Target context.
    #[must_use]
    pub const fn context(&self) -> Context {
        self.context
    }

    /// Requested tone name, if any.
    #[must_use]
    pub fn tone(&self) -> Option<&str> {
        self.tone.as_deref()
    }
}

/// Fields extracted from a raw model reply.
///
/// Each field is extracted independently: a failed extraction substitutes
/// that field's sentinel without affecting the other field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFields {
    /// Rewritten sentence, or the rewrite parse sentinel.
    pub rewritten_text: String,
    /// Explanation of the changes, or the explanation parse sentinel.
    pub explanation: String,
}

/// Result of one rewrite request, including degraded fallback responses.
///
/// This is the boundary DTO an embedding HTTP layer returns verbatim; every
/// field is always populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewriteResult {
    /// The request text, copied verbatim and never transformed.
    pub original_text: String,
    /// Context the rewrite targeted.
    pub context: Context,
    /// Rewritten sentence, a parse sentinel, or the fallback marker.
    pub rewritten_text: String,
    /// Explanation of the changes, a parse sentinel, or the fallback apology.
    pub explanation: String,
    /// Resolved tone's name.
    pub tone_name: String,
    /// Resolved tone's display glyph.
    pub tone_icon: String,
}
