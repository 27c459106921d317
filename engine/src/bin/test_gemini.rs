use color_eyre::{Result, eyre::eyre};
use engine::image_model::{AspectRatio, Gemini, ImageModel, ImageSize, ResponsePart};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    pretty_env_logger::init();
    let api_key = std::env::args()
        .nth(1)
        .ok_or(eyre!("Missing api key as first arg"))?;

    let model = Gemini::new(api_key, AspectRatio::default(), ImageSize::default());
    let parts = model
        .generate("책상 위에 앉아 있는 주황색 고양이를 손그림 스타일로 그려주세요")
        .await?;

    for part in parts {
        match part {
            ResponsePart::Text(text) => println!("Text part:\n{text}"),
            ResponsePart::Image { mime_type, data } => {
                std::fs::write("output.png", &data)?;
                println!("Saved image ({mime_type}), {} bytes", data.len());
            }
        }
    }

    Ok(())
}
