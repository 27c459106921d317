use std::path::PathBuf;

use engine::image_model::{AspectRatio, ImageSize};

/// Renders a structured paper summary into a single hand-drawn style
/// infographic image and reports the outcome as one JSON line on stdout.
#[derive(Debug, clap::Parser)]
pub struct Cli {
    /// Paper title
    #[arg(long)]
    pub title: String,

    /// Paper abstract or summary text
    #[arg(long)]
    pub summary: String,

    /// Key points as a JSON string array; plain text becomes a single point
    #[arg(long)]
    pub key_points: String,

    /// Methodology description
    #[arg(long)]
    pub methodology: String,

    /// Path the generated image is written to
    #[arg(long)]
    pub output: PathBuf,

    #[arg(long, value_enum, default_value_t)]
    pub aspect_ratio: AspectRatio,

    #[arg(long, value_enum, default_value_t)]
    pub image_size: ImageSize,
}
