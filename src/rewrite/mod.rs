//! Style-rewrite engine: tone catalogue, prompt construction, model
//! invocation, and reply parsing with graceful degradation.

mod anthropic;
mod catalog;
mod client;
mod error;
mod model;
mod orchestrator;
mod parser;
mod prompt;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use anthropic::{AnthropicConfig, AnthropicModelClient};
pub use catalog::{Context, ContextParseError, ToneCatalog, ToneVariant};
pub use client::ModelClient;
pub use error::RewriteError;
pub use model::{ParsedFields, RewriteRequest, RewriteResult};
pub use orchestrator::{FALLBACK_EXPLANATION, FALLBACK_REWRITTEN_TEXT, RewriteOrchestrator};
pub use parser::{EXPLANATION_PARSE_SENTINEL, REWRITE_PARSE_SENTINEL, extract_fields};
pub use prompt::build_rewrite_prompt;
