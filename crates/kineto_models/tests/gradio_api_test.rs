//! Live tests against a running Gradio text-to-video app.
//!
//! Set `KINETO_ADDRESS` (e.g. in `.env`) to the app's share link.
//!
//! Run with: cargo test --package kineto_models --features api -- --ignored

#![cfg(all(feature = "gradio", feature = "api"))]

use kineto_core::{Argument, Endpoint, ParamSlot};
use kineto_interface::RemoteClient;
use kineto_models::GradioClient;

fn client() -> anyhow::Result<GradioClient> {
    let _ = dotenvy::dotenv();
    let address = std::env::var("KINETO_ADDRESS")?;
    Ok(GradioClient::new(address)?)
}

#[tokio::test]
#[ignore] // Requires a running Gradio app
async fn test_gradio_describe_api() -> anyhow::Result<()> {
    let info = client()?.describe_api().await?;
    assert!(info.get("named_endpoints").is_some());
    Ok(())
}

#[tokio::test]
#[ignore]
async fn test_gradio_prompt_only_call() -> anyhow::Result<()> {
    let payload = client()?
        .call(
            &Endpoint::FnIndex(0),
            &[Argument::new(ParamSlot::Prompt, "a paper boat on a pond")],
        )
        .await?;
    println!("Payload: {}", payload);
    Ok(())
}

#[tokio::test]
#[ignore]
async fn test_gradio_unknown_route_fails() -> anyhow::Result<()> {
    let result = client()?
        .call(
            &Endpoint::Route("/no_such_route".into()),
            &[Argument::new(ParamSlot::Prompt, "a cat")],
        )
        .await;
    assert!(result.is_err());
    Ok(())
}
