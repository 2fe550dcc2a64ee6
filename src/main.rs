//! Retone CLI entrypoint for one-shot style rewrites.

use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;

use ortho_config::OrthoConfig;
use retone::rewrite::{AnthropicModelClient, RewriteOrchestrator, ToneCatalog};
use retone::{RetoneConfig, RewriteError, RewriteRequest, RewriteResult};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), RewriteError> {
    let config = load_config()?;

    let text = config.require_text()?;
    let context = config.require_context()?;
    let api_key = config.resolve_api_key()?;

    let client = AnthropicModelClient::new(config.model_settings(api_key))?;
    let orchestrator = RewriteOrchestrator::new(ToneCatalog::standard(), Arc::new(client));

    let request = RewriteRequest::new(text, context, config.tone.clone());
    let result = orchestrator.rewrite(&request).await?;

    write_result(&result)
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`RewriteError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<RetoneConfig, RewriteError> {
    RetoneConfig::load().map_err(|error| RewriteError::Configuration {
        message: error.to_string(),
    })
}

fn write_result(result: &RewriteResult) -> Result<(), RewriteError> {
    let serialised = serde_json::to_string_pretty(result).map_err(|error| RewriteError::Io {
        message: format!("failed to serialise rewrite result: {error}"),
    })?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{serialised}").map_err(|error| RewriteError::Io {
        message: error.to_string(),
    })
}
