//! Command-line argument definitions.

use clap::{Args, Parser, Subcommand};
use kineto::{ConfigError, GenerationRequest, LogFormat, RequestDefaults};
use std::path::PathBuf;

/// Kineto - text-to-video generation against remote endpoints.
#[derive(Parser, Debug)]
#[command(name = "kineto")]
#[command(about = "Generate video from text on a remote Gradio or HuggingFace endpoint")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, default_value = "kineto.toml", env = "KINETO_CONFIG")]
    pub config: PathBuf,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Log output format selected on the command line.
    pub fn log_format(&self) -> LogFormat {
        if self.json_logs {
            LogFormat::Json
        } else {
            LogFormat::Pretty
        }
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a video, falling back through the shape chain
    Generate {
        #[command(flatten)]
        request: RequestArgs,

        /// Save the generated media to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Try every shape and report which ones the endpoint accepts
    Probe {
        #[command(flatten)]
        request: RequestArgs,
    },

    /// Print the remote endpoint description
    Api,
}

/// Request fields; unset values come from the configured defaults.
#[derive(Args, Debug, Clone)]
pub struct RequestArgs {
    /// Text prompt
    #[arg(short, long)]
    pub prompt: String,

    /// Negative prompt
    #[arg(short, long)]
    pub negative_prompt: Option<String>,

    /// Number of frames
    #[arg(long)]
    pub frames: Option<u32>,

    /// Width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Guidance scale
    #[arg(long)]
    pub guidance: Option<f64>,

    /// Denoising steps
    #[arg(long)]
    pub steps: Option<u32>,

    /// Sampling seed
    #[arg(long)]
    pub seed: Option<i64>,
}

impl RequestArgs {
    /// Merges the arguments over `defaults`.
    pub fn to_request(&self, defaults: &RequestDefaults) -> Result<GenerationRequest, ConfigError> {
        let mut builder = defaults.request_builder(self.prompt.clone());
        if let Some(negative) = &self.negative_prompt {
            builder.negative_prompt(negative.clone());
        }
        if let Some(frames) = self.frames {
            builder.frame_count(frames);
        }
        if let Some(width) = self.width {
            builder.width(width);
        }
        if let Some(height) = self.height {
            builder.height(height);
        }
        if let Some(guidance) = self.guidance {
            builder.guidance_scale(guidance);
        }
        if let Some(steps) = self.steps {
            builder.inference_steps(steps);
        }
        if let Some(seed) = self.seed {
            builder.seed(seed);
        }
        builder
            .build()
            .map_err(|e| ConfigError::new(format!("Invalid request: {}", e)))
    }
}
