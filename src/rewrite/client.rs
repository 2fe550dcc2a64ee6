//! Model-client abstraction for generative text completion.
//!
//! The trait-based design mirrors the crate's other seams: the orchestrator
//! depends on the capability, production code plugs in the Anthropic HTTP
//! implementation, and tests substitute mocks or deterministic stubs.

use async_trait::async_trait;

use super::error::RewriteError;

/// Asynchronous text-completion capability backing the orchestrator.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Completes a prompt into free-form reply text.
    ///
    /// # Errors
    ///
    /// Returns an invocation-class [`RewriteError`] when the provider call
    /// fails, times out, or yields no assistant text.
    async fn complete(&self, prompt: &str) -> Result<String, RewriteError>;
}
