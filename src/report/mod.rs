pub mod json;
pub mod md;

use crate::cards::{CardRow, RankKey};
use crate::error::RatingError;
use crate::types::report::ScoringReport;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render(report: &ScoringReport, format: OutputFormat) -> Result<String, RatingError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(RatingError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
    }
}

pub fn render_ranking(
    rows: &[CardRow],
    key: RankKey,
    format: OutputFormat,
) -> Result<String, RatingError> {
    match format {
        OutputFormat::Json => json::ranking_to_json(rows).map_err(RatingError::Json),
        OutputFormat::Md => Ok(md::ranking_to_markdown(rows, key)),
    }
}
