//! API description command handler.

use kineto::{KinetoConfig, KinetoResult, RemoteClient, connect};

/// Handles the `api` command: prints the remote's endpoint description.
#[tracing::instrument(skip_all)]
pub async fn handle_api_command(config: &KinetoConfig) -> KinetoResult<()> {
    let client = connect(config.remote())?;
    let description = client.describe_api().await?;

    let pretty =
        serde_json::to_string_pretty(&description).unwrap_or_else(|_| description.to_string());
    println!("{}", pretty);
    Ok(())
}
