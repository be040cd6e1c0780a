//! Normalizes raw player statistics against reference bests and folds them
//! into a weighted overall rating.
//!
//! Sub-score for a higher-is-better statistic is `value / best * 100`, for a
//! lower-is-better statistic `best / value * 100`. The overall rating is the
//! sum of `sub_score * weight` over the profile's weighted statistics.

pub mod batch;
pub mod profiles;

use crate::error::{RatingError, Result};
use crate::types::scoring::{
    Direction, PlayerRecord, PlayerStatValue, ProfileWeights, RatingResult, Score, StatDefinition,
};
use profiles::ProfileTable;
use std::collections::BTreeMap;
use tracing::debug;

pub const DEFAULT_WEIGHT_TOLERANCE: f64 = 1e-6;
pub const MAX_WEIGHT_TOLERANCE: f64 = 0.01;
pub const MAX_SCORE: Score = 100.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringOptions {
    /// Cap every sub-score at 100 (and floor at 0) before weighting.
    pub clamp_sub_scores: bool,
    pub weight_tolerance: f64,
}

impl Default for ScoringOptions {
    fn default() -> Self {
        Self {
            clamp_sub_scores: false,
            weight_tolerance: DEFAULT_WEIGHT_TOLERANCE,
        }
    }
}

/// Sub-score of a single raw value, unclamped.
pub fn score_statistic(value: f64, definition: &StatDefinition) -> Result<Score> {
    score_statistic_with(value, definition, &ScoringOptions::default())
}

pub fn score_statistic_with(
    value: f64,
    definition: &StatDefinition,
    options: &ScoringOptions,
) -> Result<Score> {
    if !value.is_finite() || value < 0.0 {
        return Err(RatingError::InvalidValue(format!(
            "statistic '{}' must be a finite non-negative number (found {value})",
            definition.key
        )));
    }
    check_reference_best(definition)?;

    let score = match definition.direction {
        Direction::Higher => (value / definition.reference_best) * MAX_SCORE,
        Direction::Lower => {
            if value == 0.0 {
                return Err(RatingError::DivisionByZero {
                    key: definition.key.clone(),
                });
            }
            (definition.reference_best / value) * MAX_SCORE
        }
    };

    if !score.is_finite() {
        return Err(RatingError::InvalidValue(format!(
            "statistic '{}' overflows its sub-score (value {value}, reference best {})",
            definition.key, definition.reference_best
        )));
    }

    if options.clamp_sub_scores {
        Ok(score.clamp(0.0, MAX_SCORE))
    } else {
        Ok(score)
    }
}

/// Weighted rating of one player with default options.
pub fn score_overall(
    player_values: &[PlayerStatValue],
    definitions: &[StatDefinition],
    weights: &ProfileWeights,
) -> Result<RatingResult> {
    score_overall_with(
        player_values,
        definitions,
        weights,
        &ScoringOptions::default(),
    )
}

pub fn score_overall_with(
    player_values: &[PlayerStatValue],
    definitions: &[StatDefinition],
    weights: &ProfileWeights,
    options: &ScoringOptions,
) -> Result<RatingResult> {
    let definitions = index_definitions(definitions)?;
    validate_weights(weights, &definitions, options.weight_tolerance)?;
    score_indexed(player_values, &definitions, weights, options)
}

fn score_indexed(
    player_values: &[PlayerStatValue],
    definitions: &BTreeMap<String, StatDefinition>,
    weights: &ProfileWeights,
    options: &ScoringOptions,
) -> Result<RatingResult> {
    let values = index_values(player_values)?;

    let mut per_stat_score = BTreeMap::new();
    for (key, value) in &values {
        match definitions.get(*key) {
            Some(definition) => {
                let score = score_statistic_with(*value, definition, options)?;
                per_stat_score.insert((*key).to_string(), score);
            }
            None => debug!(stat = %key, "ignoring value without a definition"),
        }
    }

    let mut overall = 0.0;
    for (key, weight) in weights {
        let score = per_stat_score
            .get(key)
            .ok_or_else(|| RatingError::MissingStatistic(key.clone()))?;
        overall += score * weight;
    }

    Ok(RatingResult {
        per_stat_score,
        overall,
    })
}

/// Checks that weights are in `[0, 1]`, name known statistics and sum to 1.
pub fn validate_weights(
    weights: &ProfileWeights,
    definitions: &BTreeMap<String, StatDefinition>,
    tolerance: f64,
) -> Result<()> {
    check_tolerance(tolerance)?;
    if weights.is_empty() {
        return Err(RatingError::InvalidWeights(
            "at least one statistic must be weighted".to_string(),
        ));
    }

    let unknown = weights
        .keys()
        .filter(|key| !definitions.contains_key(*key))
        .cloned()
        .collect::<Vec<_>>();
    if !unknown.is_empty() {
        return Err(RatingError::InvalidWeights(format!(
            "weights reference undefined statistic(s): {}",
            unknown.join(", ")
        )));
    }

    if let Some((key, weight)) = weights
        .iter()
        .find(|(_, weight)| !(0.0..=1.0).contains(*weight))
    {
        return Err(RatingError::InvalidWeights(format!(
            "weight for '{key}' must be between 0.0 and 1.0 (found {weight})"
        )));
    }

    let sum: f64 = weights.values().sum();
    if (sum - 1.0).abs() > tolerance {
        return Err(RatingError::InvalidWeights(format!(
            "weights must sum to 1.0 (found {sum:.6})"
        )));
    }

    Ok(())
}

/// Tolerance must lie in `(0, MAX_WEIGHT_TOLERANCE]`; NaN never does.
pub fn check_tolerance(tolerance: f64) -> Result<()> {
    if tolerance > 0.0 && tolerance <= MAX_WEIGHT_TOLERANCE {
        Ok(())
    } else {
        Err(RatingError::InvalidWeights(format!(
            "weight tolerance must be in (0.0, {MAX_WEIGHT_TOLERANCE}] (found {tolerance})"
        )))
    }
}

/// Builds the key-sorted definition map, rejecting duplicates and bad references.
pub fn index_definitions(
    definitions: &[StatDefinition],
) -> Result<BTreeMap<String, StatDefinition>> {
    let mut indexed = BTreeMap::new();
    for definition in definitions {
        if definition.key.trim().is_empty() {
            return Err(RatingError::InvalidDefinition(
                "statistic keys must be non-empty".to_string(),
            ));
        }
        check_reference_best(definition)?;
        if indexed
            .insert(definition.key.clone(), definition.clone())
            .is_some()
        {
            return Err(RatingError::InvalidDefinition(format!(
                "duplicate statistic key: {}",
                definition.key
            )));
        }
    }
    Ok(indexed)
}

fn check_reference_best(definition: &StatDefinition) -> Result<()> {
    if definition.reference_best.is_finite() && definition.reference_best > 0.0 {
        Ok(())
    } else {
        Err(RatingError::InvalidDefinition(format!(
            "reference_best for '{}' must be greater than 0 (found {})",
            definition.key, definition.reference_best
        )))
    }
}

fn index_values(player_values: &[PlayerStatValue]) -> Result<BTreeMap<&str, f64>> {
    let mut values = BTreeMap::new();
    for stat in player_values {
        if values.insert(stat.key.as_str(), stat.value).is_some() {
            return Err(RatingError::InvalidValue(format!(
                "duplicate value for statistic '{}'",
                stat.key
            )));
        }
    }
    Ok(values)
}

/// Validated definitions and profile weights, shared read-only across scoring calls.
#[derive(Debug, Clone)]
pub struct RatingEngine {
    definitions: BTreeMap<String, StatDefinition>,
    profiles: ProfileTable,
    options: ScoringOptions,
}

impl RatingEngine {
    pub fn new(
        definitions: &[StatDefinition],
        profiles: ProfileTable,
        options: ScoringOptions,
    ) -> Result<Self> {
        check_tolerance(options.weight_tolerance)?;
        let definitions = index_definitions(definitions)?;
        profiles.validate(&definitions, options.weight_tolerance)?;
        debug!(
            statistics = definitions.len(),
            profiles = profiles.len(),
            "rating engine ready"
        );
        Ok(Self {
            definitions,
            profiles,
            options,
        })
    }

    pub fn definitions(&self) -> impl Iterator<Item = &StatDefinition> {
        self.definitions.values()
    }

    pub fn profiles(&self) -> &ProfileTable {
        &self.profiles
    }

    pub fn options(&self) -> &ScoringOptions {
        &self.options
    }

    pub fn score(
        &self,
        player_values: &[PlayerStatValue],
        weights: &ProfileWeights,
    ) -> Result<RatingResult> {
        validate_weights(weights, &self.definitions, self.options.weight_tolerance)?;
        score_indexed(player_values, &self.definitions, weights, &self.options)
    }

    pub fn score_player(&self, player: &PlayerRecord) -> Result<RatingResult> {
        let weights = self.profiles.weights_for(player.profile)?;
        score_indexed(
            &player.stat_values(),
            &self.definitions,
            weights,
            &self.options,
        )
    }
}
