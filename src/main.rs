//! dream-journal: terminal journal entry for the Aetheria analysis API.
//!
//! Reads one dream from stdin, submits it, and prints the analysis.
//!
//! ```text
//! echo "A house with too many doors" | AETHERIA__INGESTION__BASE_URL=http://localhost:8000 dream-journal
//! ```

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use tokio::io::AsyncReadExt;
use tracing::info;

use aetheria::adapters::{HttpIngestionClient, IngestionClientConfig, SchemaRecordValidator};
use aetheria::application::{PresentationState, SubmitDreamCommand, SubmitDreamHandler};
use aetheria::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let config = AppConfig::load().context("loading configuration")?;
    config.validate().context("validating configuration")?;
    config.logging.init_tracing();

    let user_id = config.ingestion.user_id()?;
    let validator = Arc::new(SchemaRecordValidator::from_config(&config.validation));
    let client = Arc::new(HttpIngestionClient::new(IngestionClientConfig::from_config(
        &config.ingestion,
    ))?);
    let handler = SubmitDreamHandler::new(client, validator);

    eprintln!("{}", PresentationState::Idle.render());
    let mut content = String::new();
    tokio::io::stdin()
        .read_to_string(&mut content)
        .await
        .context("reading dream from stdin")?;

    info!(endpoint = %config.ingestion.endpoint(), "Starting dream-journal");
    eprintln!("{}", PresentationState::Submitting.render());

    let result = handler.handle(SubmitDreamCommand::text(user_id, content)).await;
    let state = PresentationState::from_result(result);
    println!("{}", state.render());

    Ok(match state {
        PresentationState::Analysis(_) => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    })
}
