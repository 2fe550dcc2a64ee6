//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.retone.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `RETONE_API_KEY`, or legacy
//!    `ANTHROPIC_API_KEY`
//! 4. **Command-line arguments** – `--text`/`-x`, `--context`/`-c`, etc.
//!
//! # Configuration File
//!
//! Place `.retone.toml` in the current directory, home directory, or XDG
//! config directory with:
//!
//! ```toml
//! api_key = "sk-ant-example"
//! model = "claude-sonnet-4-20250514"
//! timeout_secs = 20
//! ```

use std::env;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::rewrite::{AnthropicConfig, Context, RewriteError};

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Environment Variables
///
/// - `RETONE_TEXT` or `--text`: Sentence to rewrite
/// - `RETONE_CONTEXT` or `--context`: Target context label
/// - `RETONE_TONE` or `--tone`: Tone name within the context
/// - `RETONE_API_KEY`, `ANTHROPIC_API_KEY` (legacy), or `--api-key`:
///   Provider credential
/// - `RETONE_MODEL` or `--model`: Model identifier override
/// - `RETONE_BASE_URL` or `--base-url`: Messages API base URL override
/// - `RETONE_TIMEOUT_SECS` or `--timeout-secs`: Model call timeout
#[derive(Debug, Clone, Default, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "RETONE",
    discovery(
        dotfile_name = ".retone.toml",
        config_file_name = "retone.toml",
        app_name = "retone"
    )
)]
pub struct RetoneConfig {
    /// Sentence to rewrite.
    ///
    /// Can be provided via:
    /// - CLI: `--text <TEXT>` or `-x <TEXT>`
    /// - Environment: `RETONE_TEXT`
    #[ortho_config(cli_short = 'x')]
    pub text: Option<String>,

    /// Target context label (`business-email`, `academic`, or `casual`).
    ///
    /// Can be provided via:
    /// - CLI: `--context <CONTEXT>` or `-c <CONTEXT>`
    /// - Environment: `RETONE_CONTEXT`
    /// - Config file: `context = "..."`
    #[ortho_config(cli_short = 'c')]
    pub context: Option<String>,

    /// Tone name within the context. Defaults to the context's first tone.
    ///
    /// Can be provided via:
    /// - CLI: `--tone <TONE>` or `-t <TONE>`
    /// - Environment: `RETONE_TONE`
    /// - Config file: `tone = "..."`
    #[ortho_config(cli_short = 't')]
    pub tone: Option<String>,

    /// Anthropic API key used for the Messages API.
    ///
    /// Can be provided via:
    /// - CLI: `--api-key <KEY>` or `-k <KEY>`
    /// - Environment: `RETONE_API_KEY` or `ANTHROPIC_API_KEY` (legacy)
    /// - Config file: `api_key = "..."`
    #[ortho_config(cli_short = 'k')]
    pub api_key: Option<String>,

    /// Model identifier override.
    ///
    /// Can be provided via:
    /// - CLI: `--model <MODEL>`
    /// - Environment: `RETONE_MODEL`
    /// - Config file: `model = "..."`
    #[ortho_config()]
    pub model: Option<String>,

    /// Base URL override for the Messages API.
    ///
    /// Can be provided via:
    /// - CLI: `--base-url <URL>`
    /// - Environment: `RETONE_BASE_URL`
    /// - Config file: `base_url = "..."`
    #[ortho_config()]
    pub base_url: Option<String>,

    /// Model call timeout in seconds.
    ///
    /// Can be provided via:
    /// - CLI: `--timeout-secs <SECS>`
    /// - Environment: `RETONE_TIMEOUT_SECS`
    /// - Config file: `timeout_secs = 20`
    #[ortho_config()]
    pub timeout_secs: Option<u64>,
}

impl RetoneConfig {
    /// Resolves the API key from configuration or the legacy
    /// `ANTHROPIC_API_KEY` environment variable.
    ///
    /// For backward compatibility, if no key is provided via
    /// `RETONE_API_KEY`, the CLI, or a configuration file, this method falls
    /// back to reading `ANTHROPIC_API_KEY` from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`RewriteError::Configuration`] when no source provides a
    /// value.
    pub fn resolve_api_key(&self) -> Result<String, RewriteError> {
        self.api_key
            .clone()
            .or_else(|| env::var("ANTHROPIC_API_KEY").ok())
            .ok_or_else(|| RewriteError::Configuration {
                message: concat!(
                    "Anthropic API key is required (use --api-key, ",
                    "RETONE_API_KEY, or ANTHROPIC_API_KEY)"
                )
                .to_owned(),
            })
    }

    /// Returns the text to rewrite.
    ///
    /// # Errors
    ///
    /// Returns [`RewriteError::Configuration`] when no text is configured.
    pub fn require_text(&self) -> Result<&str, RewriteError> {
        self.text
            .as_deref()
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| RewriteError::Configuration {
                message: "text to rewrite is required (use --text or -x)".to_owned(),
            })
    }

    /// Parses the configured context label into a [`Context`].
    ///
    /// # Errors
    ///
    /// Returns [`RewriteError::Configuration`] when no context is configured
    /// and [`RewriteError::UnknownContext`] when the label is outside the
    /// closed set.
    pub fn require_context(&self) -> Result<Context, RewriteError> {
        let label = self
            .context
            .as_deref()
            .ok_or_else(|| RewriteError::Configuration {
                message: "rewrite context is required (use --context or -c)".to_owned(),
            })?;

        Ok(label.parse::<Context>()?)
    }

    /// Projects provider settings for the model client, applying defaults
    /// for any unset field.
    #[must_use]
    pub fn model_settings(&self, api_key: String) -> AnthropicConfig {
        let defaults = AnthropicConfig::default();

        AnthropicConfig {
            base_url: self.base_url.clone().unwrap_or(defaults.base_url),
            model: self.model.clone().unwrap_or(defaults.model),
            api_key: Some(api_key),
            timeout: self.timeout_secs.map_or(defaults.timeout, Duration::from_secs),
            max_tokens: defaults.max_tokens,
            temperature: defaults.temperature,
        }
    }
}
