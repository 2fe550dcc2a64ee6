//! Test-support utilities for rewrite flows.

use async_trait::async_trait;

use super::client::ModelClient;
use super::error::RewriteError;

/// Deterministic model-client stub used by unit and behavioural tests.
#[derive(Debug, Clone)]
pub struct StubModelClient {
    response: Result<String, RewriteError>,
}

impl StubModelClient {
    /// Creates a stub that always returns the provided reply text.
    #[must_use]
    pub fn success(reply: impl Into<String>) -> Self {
        Self {
            response: Ok(reply.into()),
        }
    }

    /// Creates a stub that always returns the provided error.
    #[must_use]
    pub const fn failure(error: RewriteError) -> Self {
        Self {
            response: Err(error),
        }
    }
}

#[async_trait]
impl ModelClient for StubModelClient {
    async fn complete(&self, _prompt: &str) -> Result<String, RewriteError> {
        self.response.clone()
    }
}
