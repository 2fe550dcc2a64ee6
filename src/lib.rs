//! Retone library crate providing English style rewriting.
//!
//! The library asks a generative language model to rewrite a sentence for a
//! chosen context (business email, academic writing, casual conversation) in
//! a named tone, then extracts the rewritten sentence and an explanation from
//! the model's free-text reply. Provider failures degrade into a fixed,
//! clearly-labelled fallback response instead of surfacing errors to callers.

pub mod config;
pub mod rewrite;

pub use config::RetoneConfig;
pub use rewrite::{
    Context, ModelClient, RewriteError, RewriteOrchestrator, RewriteRequest, RewriteResult,
    ToneCatalog, ToneVariant,
};
