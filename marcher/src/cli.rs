use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use render::RenderSettings;

#[derive(Parser, Debug)]
#[command(name = "marcher")]
#[command(about = "CPU signed distance field ray marcher")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Mode,
}

#[derive(Subcommand, Debug)]
pub enum Mode {
    /// Render a single frame to a PNG file
    Render {
        #[command(flatten)]
        scene: SceneArgs,
    },

    /// Keep rendering, applying control messages read from stdin
    Interactive {
        #[command(flatten)]
        scene: SceneArgs,

        /// Stop after this many frames; otherwise run until stdin closes
        #[arg(long)]
        frames: Option<u64>,

        /// Upper bound on frames per second
        #[arg(long, default_value_t = 30.0, value_parser = parse_fps)]
        fps: f32,
    },
}

#[derive(Args, Debug)]
pub struct SceneArgs {
    /// JSON scene description; the built-in demo scene when omitted
    #[arg(short, long)]
    pub scene: Option<PathBuf>,

    #[arg(short, long, default_value = "frame.png")]
    pub out: PathBuf,

    /// Overrides the scene's frame width
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: Option<u32>,

    /// Overrides the scene's frame height
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: Option<u32>,

    /// Divide the resolution by this factor for a quick preview
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub preview: Option<u32>,

    /// Render on the calling thread only
    #[arg(long)]
    pub serial: bool,
}

impl SceneArgs {
    /// Applies the command line overrides on top of the scene's settings.
    pub fn apply(&self, mut settings: RenderSettings) -> RenderSettings {
        if let Some(width) = self.width {
            settings.width = width;
        }
        if let Some(height) = self.height {
            settings.height = height;
        }
        if let Some(scale) = self.preview {
            settings.preview_scale = scale;
        }
        settings
    }
}

fn parse_fps(value: &str) -> Result<f32, String> {
    let fps: f32 = value.parse().map_err(|_| format!("{value:?} is not a number"))?;
    if fps.is_finite() && fps > 0.0 {
        Ok(fps)
    } else {
        Err("fps must be a positive number".to_string())
    }
}
