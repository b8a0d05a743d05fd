//! Tests for configuration parsing, overrides and chain construction.

use kineto::{Endpoint, KinetoConfig, ParamSlot, RemoteKind};
use std::io::Write;
use std::time::Duration;

#[test]
fn test_parse_full_config() {
    let toml = r#"
[remote]
kind = "gradio"
address = "https://5a84.gradio.live"
attempt_timeout_secs = 600

[defaults]
negative_prompt = "worst quality, blurry"
frame_count = 97
guidance_scale = 4.5

[[shapes]]
name = "full_params"
route = "/predict"
slots = ["prompt", "negative_prompt", "num_frames", "width", "height",
         "guidance_scale", "num_inference_steps", "seed"]

[[shapes]]
name = "prompt_only"
fn_index = 1
slots = ["prompt"]
"#;

    let config = KinetoConfig::from_toml_str(toml).expect("Valid config");
    assert_eq!(*config.remote().kind(), RemoteKind::Gradio);
    assert_eq!(
        config.remote().address().as_deref(),
        Some("https://5a84.gradio.live")
    );
    assert_eq!(config.attempt_timeout(), Some(Duration::from_secs(600)));
    assert_eq!(*config.defaults().frame_count(), 97);
    assert_eq!(*config.defaults().guidance_scale(), 4.5);
    // Unset defaults keep their built-in values
    assert_eq!(*config.defaults().width(), 768);

    let chain = config.shape_chain().expect("Valid chain");
    assert_eq!(chain.len(), 2);
    assert_eq!(chain.shapes()[0].name(), "full_params");
    assert_eq!(*chain.shapes()[0].endpoint(), Endpoint::Route("/predict".into()));
    assert_eq!(chain.shapes()[0].slots().len(), 8);
    assert_eq!(*chain.shapes()[1].endpoint(), Endpoint::FnIndex(1));
    assert_eq!(chain.shapes()[1].slots(), &vec![ParamSlot::Prompt]);
}

#[test]
fn test_gradio_defaults_to_standard_chain() {
    let config = KinetoConfig::from_toml_str(
        r#"
[remote]
address = "https://5a84.gradio.live"
"#,
    )
    .expect("Valid config");

    assert_eq!(*config.remote().kind(), RemoteKind::Gradio);
    assert_eq!(config.attempt_timeout(), None);

    let chain = config.shape_chain().expect("Standard chain");
    let names: Vec<_> = chain.iter().map(|shape| shape.name().as_str()).collect();
    assert_eq!(
        names,
        [
            "full_params",
            "without_seed",
            "prompt_and_negative",
            "prompt_only",
            "secondary_prompt_only"
        ]
    );
    assert!(chain.shapes()[..4].iter().all(|shape| *shape.endpoint() == Endpoint::FnIndex(0)));
    assert_eq!(*chain.shapes()[4].endpoint(), Endpoint::FnIndex(1));
    assert_eq!(chain.shapes()[4].slots(), &vec![ParamSlot::Prompt]);
}

#[test]
fn test_huggingface_uses_model_route() {
    let config = KinetoConfig::from_toml_str(
        r#"
[remote]
kind = "hugging_face"
model = "Lightricks/LTX-Video"
"#,
    )
    .expect("Valid config");

    let chain = config.shape_chain().expect("Standard chain");
    assert!(
        chain
            .iter()
            .all(|shape| *shape.endpoint() == Endpoint::Route("Lightricks/LTX-Video".into()))
    );
}

#[test]
fn test_huggingface_without_model_or_shapes_is_rejected() {
    let config = KinetoConfig::from_toml_str("[remote]\nkind = \"hugging_face\"\n")
        .expect("Parses");
    let err = config.shape_chain().unwrap_err();
    assert!(err.message.contains("remote.model"));
}

#[test]
fn test_shape_needs_exactly_one_endpoint() {
    for shape in [
        "name = \"both\"\nfn_index = 0\nroute = \"/predict\"\nslots = [\"prompt\"]",
        "name = \"neither\"\nslots = [\"prompt\"]",
    ] {
        let toml = format!("[remote]\naddress = \"http://h\"\n\n[[shapes]]\n{}\n", shape);
        let config = KinetoConfig::from_toml_str(&toml).expect("Parses");
        let err = config.shape_chain().unwrap_err();
        assert!(err.message.contains("exactly one"), "{}", err);
    }
}

#[test]
fn test_shape_without_prompt_is_rejected() {
    let toml = r#"
[remote]
address = "http://h"

[[shapes]]
name = "seed_only"
fn_index = 0
slots = ["seed"]
"#;
    let config = KinetoConfig::from_toml_str(toml).expect("Parses");
    let err = config.shape_chain().unwrap_err();
    assert!(err.message.contains("seed_only"));
}

#[test]
fn test_empty_slots_are_rejected() {
    let toml = r#"
[remote]
address = "http://h"

[[shapes]]
name = "nothing"
fn_index = 0
slots = []
"#;
    let config = KinetoConfig::from_toml_str(toml).expect("Parses");
    assert!(config.shape_chain().is_err());
}

#[test]
fn test_unknown_slot_fails_to_parse() {
    let toml = r#"
[remote]
address = "http://h"

[[shapes]]
name = "typo"
fn_index = 0
slots = ["prompt", "fps"]
"#;
    let err = KinetoConfig::from_toml_str(toml).unwrap_err();
    assert!(err.message.contains("Failed to parse"));
}

#[test]
fn test_zero_timeout_is_rejected() {
    let err = KinetoConfig::from_toml_str("[remote]\nattempt_timeout_secs = 0\n").unwrap_err();
    assert!(err.message.contains("positive"));
}

#[test]
fn test_overrides_replace_address_and_set_token() {
    let config = KinetoConfig::from_toml_str("[remote]\naddress = \"http://old\"\n")
        .expect("Parses")
        .with_overrides(Some("https://new.gradio.live".into()), Some("hf_secret".into()));

    assert_eq!(
        config.remote().address().as_deref(),
        Some("https://new.gradio.live")
    );
    assert_eq!(config.remote().token().as_deref(), Some("hf_secret"));
    // Credentials never show up in logs
    assert!(!format!("{:?}", config).contains("hf_secret"));
}

#[test]
fn test_blank_overrides_are_ignored() {
    let config = KinetoConfig::from_toml_str("[remote]\naddress = \"http://old\"\n")
        .expect("Parses")
        .with_overrides(Some("  ".into()), None);
    assert_eq!(config.remote().address().as_deref(), Some("http://old"));
    assert!(config.remote().token().is_none());
}

#[test]
fn test_token_is_not_read_from_file() {
    let toml = "[remote]\naddress = \"http://h\"\ntoken = \"leaked\"\n";
    // Unknown keys are ignored, and the token stays unset
    let config = KinetoConfig::from_toml_str(toml).expect("Parses");
    assert!(config.remote().token().is_none());
}

#[test]
fn test_request_builder_applies_defaults() {
    let config = KinetoConfig::from_toml_str(
        r#"
[remote]
address = "http://h"

[defaults]
negative_prompt = "blurry"
seed = 7
"#,
    )
    .expect("Parses");

    let request = config
        .defaults()
        .request_builder("a cat surfing")
        .build()
        .expect("Complete request");
    assert_eq!(request.prompt(), "a cat surfing");
    assert_eq!(request.negative_prompt().as_deref(), Some("blurry"));
    assert_eq!(*request.seed(), Some(7));
    assert_eq!(*request.frame_count(), 121);
}

#[test]
fn test_from_file_reads_toml() -> anyhow::Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    writeln!(file, "[remote]\nkind = \"hugging_face\"\nmodel = \"m/v\"")?;

    let config = KinetoConfig::from_file(file.path())?;
    assert_eq!(*config.remote().kind(), RemoteKind::HuggingFace);
    assert_eq!(config.shape_chain()?.len(), 4);
    Ok(())
}

#[test]
fn test_missing_file_is_config_error() {
    let err = KinetoConfig::from_file("/nonexistent/kineto.toml").unwrap_err();
    assert!(format!("{}", err).contains("Failed to read config file"));
}
