use crate::engine::batch::PlayerRating;
use crate::types::scoring::{PlayerRecord, Score};
use chrono::Utc;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize)]
pub struct ScoringReport {
    pub version: String,
    pub generated_at: String,
    pub clamp_sub_scores: bool,
    pub players: Vec<PlayerScore>,
    pub failures: Vec<PlayerFailure>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerScore {
    pub id: String,
    pub name: Option<String>,
    pub profile: String,
    pub overall: Score,
    pub per_stat_score: BTreeMap<String, Score>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerFailure {
    pub id: String,
    pub error: String,
}

impl ScoringReport {
    /// Pairs each rating with its input record; both slices share the batch order.
    pub fn from_batch(
        players: &[PlayerRecord],
        ratings: Vec<PlayerRating>,
        clamp_sub_scores: bool,
    ) -> Self {
        let mut scored = Vec::new();
        let mut failures = Vec::new();
        for (player, rating) in players.iter().zip(ratings) {
            match rating.result {
                Ok(result) => scored.push(PlayerScore {
                    id: rating.player_id,
                    name: player.name.clone(),
                    profile: player.profile.to_string(),
                    overall: result.overall,
                    per_stat_score: result.per_stat_score,
                }),
                Err(err) => failures.push(PlayerFailure {
                    id: rating.player_id,
                    error: err.to_string(),
                }),
            }
        }

        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: Utc::now().to_rfc3339(),
            clamp_sub_scores,
            players: scored,
            failures,
        }
    }

    /// Scored players, best overall first; ties keep input order.
    pub fn sort_by_overall(&mut self) {
        self.players.sort_by(|a, b| b.overall.total_cmp(&a.overall));
    }
}
