use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub type Score = f64;

/// Whether a larger raw value is a better performance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[serde(alias = "higher_is_better")]
    Higher,
    #[serde(alias = "lower_is_better")]
    Lower,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatDefinition {
    pub key: String,
    pub direction: Direction,
    /// Best observed value (highest, or lowest for `Direction::Lower`).
    pub reference_best: f64,
}

impl StatDefinition {
    pub fn new(key: impl Into<String>, direction: Direction, reference_best: f64) -> Self {
        Self {
            key: key.into(),
            direction,
            reference_best,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerStatValue {
    pub key: String,
    pub value: f64,
}

impl PlayerStatValue {
    pub fn new(key: impl Into<String>, value: f64) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// Statistic key to weight. Kept sorted so summation order is fixed.
pub type ProfileWeights = BTreeMap<String, f64>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingResult {
    pub per_stat_score: BTreeMap<String, Score>,
    pub overall: Score,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    Attacker,
    Midfielder,
    Defender,
    Goalkeeper,
}

impl Profile {
    pub fn as_str(self) -> &'static str {
        match self {
            Profile::Attacker => "attacker",
            Profile::Midfielder => "midfielder",
            Profile::Defender => "defender",
            Profile::Goalkeeper => "goalkeeper",
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One player as supplied to a batch scoring run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub profile: Profile,
    pub stats: BTreeMap<String, f64>,
}

impl PlayerRecord {
    pub fn stat_values(&self) -> Vec<PlayerStatValue> {
        self.stats
            .iter()
            .map(|(key, value)| PlayerStatValue::new(key.clone(), *value))
            .collect()
    }
}
