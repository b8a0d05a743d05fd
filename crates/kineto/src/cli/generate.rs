//! Generate command handler.

use super::RequestArgs;
use kineto::{KinetoConfig, KinetoResult, MediaPayload, save_payload};
use std::path::PathBuf;
use tracing::warn;

/// Handles the `generate` command.
///
/// Prints the winning shape and payload. On exhaustion, prints every failure
/// in attempt order before returning the error.
#[tracing::instrument(skip_all)]
pub async fn handle_generate_command(
    config: &KinetoConfig,
    request: RequestArgs,
    output: Option<PathBuf>,
) -> KinetoResult<()> {
    let request = request.to_request(config.defaults())?;
    let invoker = config.invoker()?;

    let success = match invoker.invoke(&request).await {
        Ok(success) => success,
        Err(e) => {
            if !e.failures().is_empty() {
                println!("All {} call shapes failed:", e.failures().len());
                for (attempt, failure) in e.failures().iter().enumerate() {
                    println!("  {}. {}", attempt + 1, failure);
                }
            }
            return Err(e.into());
        }
    };

    for failure in success.failures() {
        println!("skipped  {}", failure);
    }
    println!(
        "accepted {} after {} attempt(s)",
        success.shape(),
        success.attempts()
    );
    println!("{}", success.payload());

    if let Some(path) = output {
        match save_payload(success.payload(), &path) {
            Ok(bytes) => println!("saved {} bytes to {}", bytes, path.display()),
            Err(e) if matches!(success.payload(), MediaPayload::Url(_)) => {
                warn!(error = %e, "Payload is a URL; not saved");
                println!("payload is remote; not saved to {}", path.display());
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}
