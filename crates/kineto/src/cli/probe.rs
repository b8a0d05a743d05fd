//! Probe command handler.

use super::RequestArgs;
use kineto::{KinetoConfig, KinetoResult};

/// Handles the `probe` command: one line per shape, in chain order.
#[tracing::instrument(skip_all)]
pub async fn handle_probe_command(config: &KinetoConfig, request: RequestArgs) -> KinetoResult<()> {
    let request = request.to_request(config.defaults())?;
    let invoker = config.invoker()?;
    let report = invoker.probe(&request).await?;

    for entry in report.entries() {
        match entry.outcome() {
            Ok(payload) => println!("ok    {:<24} [{}] {}", entry.shape(), entry.endpoint(), payload),
            Err(message) => println!("fail  {:<24} [{}] {}", entry.shape(), entry.endpoint(), message),
        }
    }

    match report.winner() {
        Some(winner) => println!("first accepted shape: {}", winner.shape()),
        None => println!("no shape was accepted"),
    }
    Ok(())
}
