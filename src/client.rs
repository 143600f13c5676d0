//! Client commands: call a running proxy through the gateway and print the
//! response envelope as JSON.

use std::process::ExitCode;
use std::time::Duration;

use serde::Serialize;
use tracing::debug;

use learnkit_config::GatewayConfig;
use learnkit_gateway::{ApiResponse, Gateway};

use crate::cli::{ApiArgs, Commands};

/// Gateway for `api`, falling back to the configured base URL.
pub(crate) fn gateway_for(api: &ApiArgs, config: &GatewayConfig) -> Gateway {
    let base_url = api.api.clone().unwrap_or_else(|| config.base_url.clone());
    debug!("Using proxy API at {}", base_url);
    Gateway::with_timeout(base_url, Duration::from_secs(config.timeout_seconds))
}

/// Run one client command. `Serve` is not a client command and is rejected.
pub(crate) async fn run_command(
    command: Commands,
    config: &GatewayConfig,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let output = match command {
        Commands::Ask { question, api } => {
            render(gateway_for(&api, config).ask_question(&question).await)?
        }
        Commands::Summarize { input, api } => {
            let text = input.read()?;
            render(gateway_for(&api, config).summarize_text(&text).await)?
        }
        Commands::Quiz { input, api } => {
            let text = input.read()?;
            render(gateway_for(&api, config).generate_quiz(&text).await)?
        }
        Commands::Roadmap { topic, level, api } => render(
            gateway_for(&api, config)
                .generate_roadmap(&topic, level.as_deref())
                .await,
        )?,
        Commands::Serve { .. } => return Err("serve is not a client command".into()),
    };

    println!("{}", output.json);
    Ok(output.exit_code)
}

struct Rendered {
    json: String,
    exit_code: ExitCode,
}

fn render<T: Serialize>(response: ApiResponse<T>) -> Result<Rendered, serde_json::Error> {
    let exit_code = if response.is_err() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    };
    Ok(Rendered {
        json: serde_json::to_string_pretty(&response)?,
        exit_code,
    })
}
