//! Turns a structured paper summary into a single hand-drawn style
//! infographic image via an [`ImageModel`].

use std::{
    fs,
    path::{Path, PathBuf},
};

use color_eyre::Result;
use indoc::{formatdoc, indoc};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::image_model::{ImageModel, ResponsePart};

const INFOGRAPHIC_STYLE: &str = indoc! {"
    디자인 스타일:
    - 배경: 도화지 텍스처 (크림색/오프화이트)
    - 텍스트: 검정 볼펜 잉크 스타일 (#000000, 90% 불투명도)
    - 강조: 노란색 형광펜 (#FEE500)
    - 이미지 스타일: 캐주얼 손그림, 막대 인간, 별, 화살표, 간단한 아이콘
    - 구성: 여백 주석 스타일, 자유 형식, 브레인스토밍 노트 느낌
    - 타이포그래피: 손글씨 폰트, 깔끔하면서도 끄적인 듯한 스타일
    - 톤: 창의적, 러프, 개인적, 브레인스토밍, 진정성 있는 느낌
"};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaperSummary {
    pub title: String,
    pub summary: String,
    pub key_points: Vec<String>,
    pub methodology: String,
}

impl PaperSummary {
    pub fn prompt(&self) -> String {
        let key_points = self
            .key_points
            .iter()
            .map(|point| format!("• {point}"))
            .collect::<Vec<_>>()
            .join("\n");

        formatdoc! {"
            다음 논문 내용을 손그림 스타일의 인포그래픽으로 만들어주세요.

            {style}
            논문 정보:
            제목: {title}

            요약: {summary}

            핵심 포인트:
            {key_points}

            방법론: {methodology}

            인포그래픽 구성:
            1. 상단에 제목을 손글씨 스타일로 크게 배치
            2. 중앙에 핵심 내용을 막대 인간, 화살표, 말풍선으로 시각화
            3. 핵심 포인트들을 노란 형광펜으로 강조된 박스나 별표로 표시
            4. 방법론은 간단한 플로우차트나 다이어그램으로 표현
            5. 여백에 작은 주석이나 메모 스타일의 추가 설명

            전체적으로 노트에 끄적인 듯한 브레인스토밍 스타일로,
            학술적이면서도 친근하고 이해하기 쉬운 인포그래픽을 만들어주세요.
            한국어로 작성해주세요.
            ",
            style = INFOGRAPHIC_STYLE,
            title = self.title,
            summary = self.summary,
            key_points = key_points,
            methodology = self.methodology,
        }
    }
}

/// Parses the `--key-points` argument. Anything that isn't a JSON string
/// array is treated as a single free-text point rather than an error.
pub fn parse_key_points(raw: &str) -> Vec<String> {
    serde_json::from_str(raw).unwrap_or_else(|_| vec![raw.to_string()])
}

/// The outcome the caller reads from stdout. `success` only turns true once
/// an image has been written, so callers must inspect it rather than the
/// exit code to detect text-only responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub success: bool,
    pub image_path: Option<PathBuf>,
    pub text: Option<String>,
}

/// Requests one infographic and writes it to `output_path`.
///
/// The response parts are applied in order: the last non-empty text part
/// becomes the report's text, and the first image part is written to disk.
/// Later image parts are skipped, so the persisted file always corresponds
/// to the first one. A response without any image part yields
/// `success: false` instead of an error.
pub async fn generate(
    model: &dyn ImageModel,
    paper: &PaperSummary,
    output_path: &Path,
) -> Result<Report> {
    let prompt = paper.prompt();
    debug!("Prompt:\n{prompt}");

    let parts = model.generate(&prompt).await?;

    let mut report = Report {
        success: false,
        image_path: None,
        text: None,
    };

    for part in parts {
        match part {
            ResponsePart::Text(text) => {
                if !text.is_empty() {
                    report.text = Some(text);
                }
            }
            ResponsePart::Image { data, .. } => {
                if report.success {
                    warn!("Response contained more than one image, keeping the first");
                    continue;
                }
                fs::write(output_path, &data)?;
                report.success = true;
                report.image_path = Some(output_path.to_path_buf());
            }
        }
    }

    Ok(report)
}
