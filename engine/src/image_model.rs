use std::pin::Pin;

use color_eyre::Result;
use serde::{Deserialize, Serialize};
use strum::Display;

pub mod gemini;
pub use gemini::Gemini;

/// One element of the ordered part sequence a model responds with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponsePart {
    Text(String),
    Image { mime_type: String, data: Vec<u8> },
}

#[derive(
    Debug,
    Clone,
    Copy,
    Display,
    clap::ValueEnum,
    Serialize,
    Deserialize,
    Hash,
    PartialEq,
    Eq,
    Default,
)]
pub enum AspectRatio {
    #[strum(to_string = "1:1")]
    #[value(name = "1:1")]
    Square,
    /// Portrait orientation, the natural shape for an infographic sheet
    #[default]
    #[strum(to_string = "3:4")]
    #[value(name = "3:4")]
    Portrait,
    #[strum(to_string = "4:3")]
    #[value(name = "4:3")]
    Landscape,
    #[strum(to_string = "9:16")]
    #[value(name = "9:16")]
    Tall,
    #[strum(to_string = "16:9")]
    #[value(name = "16:9")]
    Wide,
}

#[derive(
    Debug,
    Clone,
    Copy,
    Display,
    clap::ValueEnum,
    Serialize,
    Deserialize,
    Hash,
    PartialEq,
    Eq,
    Default,
)]
pub enum ImageSize {
    #[strum(to_string = "1K")]
    #[value(name = "1K")]
    OneK,
    #[default]
    #[strum(to_string = "2K")]
    #[value(name = "2K")]
    TwoK,
    #[strum(to_string = "4K")]
    #[value(name = "4K")]
    FourK,
}

pub trait ImageModel {
    fn generate<'a>(
        &'a self,
        prompt: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<ResponsePart>>> + Send + 'a>>;
}
