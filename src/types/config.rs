use crate::engine::profiles::ProfileTable;
use crate::engine::{
    index_definitions, RatingEngine, ScoringOptions, DEFAULT_WEIGHT_TOLERANCE,
    MAX_WEIGHT_TOLERANCE,
};
use crate::error::{RatingError, Result};
use crate::types::scoring::StatDefinition;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct RatingConfig {
    #[serde(default)]
    pub engine: Option<EngineConfig>,
    #[serde(default)]
    pub stats: Vec<StatDefinition>,
    #[serde(default)]
    pub profiles: ProfileTable,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub clamp_sub_scores: bool,
    pub weight_tolerance: Option<f64>,
}

impl RatingConfig {
    pub fn scoring_options(&self) -> ScoringOptions {
        match &self.engine {
            Some(engine) => ScoringOptions {
                clamp_sub_scores: engine.clamp_sub_scores,
                weight_tolerance: engine.weight_tolerance.unwrap_or(DEFAULT_WEIGHT_TOLERANCE),
            },
            None => ScoringOptions::default(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.stats.is_empty() {
            return Err(RatingError::ConfigParse(
                "at least one [[stats]] entry is required".to_string(),
            ));
        }

        let tolerance = self.scoring_options().weight_tolerance;
        if !(tolerance > 0.0 && tolerance <= MAX_WEIGHT_TOLERANCE) {
            return Err(RatingError::ConfigParse(format!(
                "engine.weight_tolerance must be in (0.0, {MAX_WEIGHT_TOLERANCE}] (found {tolerance})"
            )));
        }

        let definitions = index_definitions(&self.stats)?;

        if self.profiles.is_empty() {
            return Err(RatingError::ConfigParse(
                "at least one [profiles.<name>] table is required".to_string(),
            ));
        }
        self.profiles.validate(&definitions, tolerance)
    }

    /// Validates and builds an engine; `options` usually comes from `scoring_options`.
    pub fn build_engine(&self, options: ScoringOptions) -> Result<RatingEngine> {
        self.validate()?;
        RatingEngine::new(&self.stats, self.profiles.clone(), options)
    }
}
