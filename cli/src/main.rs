use std::process::ExitCode;

use clap::Parser;
use color_eyre::Result;
use engine::image_model::Gemini;
use engine::infographic::{self, PaperSummary};
use log::debug;
use serde_json::json;

use crate::cli::Cli;

mod cli;

const API_KEY_VAR: &str = "GEMINI_API_KEY";
const MISSING_KEY_MSG: &str = "GEMINI_API_KEY 환경 변수가 설정되지 않았습니다.";

#[tokio::main]
async fn main() -> ExitCode {
    pretty_env_logger::init();

    // Checked before argument parsing: a missing credential goes to the JSON
    // channel, never into clap's usage error.
    let api_key = std::env::var(API_KEY_VAR)
        .ok()
        .filter(|key| !key.is_empty());
    let Some(api_key) = api_key else {
        println!("{}", json!({ "error": MISSING_KEY_MSG }));
        return ExitCode::FAILURE;
    };

    let cli = Cli::parse();

    match run(cli, api_key).await {
        Ok(line) => {
            println!("{line}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("{}", json!({ "error": e.to_string() }));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli, api_key: String) -> Result<String> {
    let paper = PaperSummary {
        title: cli.title,
        summary: cli.summary,
        key_points: infographic::parse_key_points(&cli.key_points),
        methodology: cli.methodology,
    };
    debug!("Paper summary:\n{paper:#?}");

    let model = Gemini::new(api_key, cli.aspect_ratio, cli.image_size);
    let report = infographic::generate(&model, &paper, &cli.output).await?;
    Ok(serde_json::to_string(&report)?)
}
