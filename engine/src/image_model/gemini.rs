use std::pin::Pin;

use color_eyre::Result;
use log::debug;

use crate::image_model::{AspectRatio, ImageModel, ImageSize, ResponsePart};

pub mod gemini_api;

#[derive(Clone)]
pub struct Gemini {
    api_key: String,
    aspect_ratio: AspectRatio,
    image_size: ImageSize,
    client: reqwest::Client,
}

impl Gemini {
    pub fn new(api_key: String, aspect_ratio: AspectRatio, image_size: ImageSize) -> Self {
        Self {
            api_key,
            aspect_ratio,
            image_size,
            client: reqwest::Client::new(),
        }
    }
}

impl ImageModel for Gemini {
    fn generate<'a>(
        &'a self,
        prompt: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<ResponsePart>>> + Send + 'a>> {
        let resp_fut = gemini_api::query(
            prompt,
            self.aspect_ratio,
            self.image_size,
            &self.api_key,
            &self.client,
        );

        Box::pin(async move {
            let response = resp_fut.await?;
            debug!("Query response: {response:#?}");
            gemini_api::decode_parts(response)
        })
    }
}
