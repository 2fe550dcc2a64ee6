//! Error types exposed by the rewrite engine.

use thiserror::Error;

use super::catalog::Context;

/// Errors surfaced while validating a request or talking to the model
/// provider.
///
/// Validation variants reject a request before any model call is made.
/// Invocation variants (`Authentication`, `Api`, `Network`) are absorbed by
/// the orchestrator's fallback path and never escape
/// [`RewriteOrchestrator::rewrite`](super::RewriteOrchestrator::rewrite).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RewriteError {
    /// The request text was empty or whitespace-only.
    #[error("text to rewrite must not be empty")]
    EmptyText,

    /// The context label is outside the closed set.
    #[error(
        "unsupported context '{value}': valid options are 'business-email', 'academic', or 'casual'"
    )]
    UnknownContext {
        /// The label that failed to parse.
        value: String,
    },

    /// The requested tone is not in the requested context's tone set.
    #[error("unknown tone '{tone}' for context '{context}'")]
    UnknownTone {
        /// The tone name that failed to resolve.
        tone: String,
        /// The context whose tone set was searched.
        context: Context,
    },

    /// Configuration could not be loaded or the provider credential is
    /// missing. Fatal at startup; never recovered per request.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// The model provider rejected the credential.
    #[error("model provider rejected the credential: {message}")]
    Authentication {
        /// Provider error message returned with the 401/403 response.
        message: String,
    },

    /// The model provider returned a non-authentication API error.
    #[error("model provider error: {message}")]
    Api {
        /// Response detail describing the failure.
        message: String,
    },

    /// Networking failed while calling the model provider, including
    /// timeouts.
    #[error("network error talking to the model provider: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },
}
