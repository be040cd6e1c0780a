use crate::engine::RatingEngine;
use crate::error::RatingError;
use crate::types::scoring::{PlayerRecord, RatingResult};
use rayon::prelude::*;
use tracing::{debug, info};

#[derive(Debug)]
pub struct PlayerRating {
    pub player_id: String,
    pub result: Result<RatingResult, RatingError>,
}

/// Scores every player independently. Output order follows `players`.
pub fn score_batch(engine: &RatingEngine, players: &[PlayerRecord]) -> Vec<PlayerRating> {
    info!(players = players.len(), "scoring batch");

    let ratings: Vec<PlayerRating> = players
        .par_iter()
        .map(|player| {
            let result = engine.score_player(player);
            if let Err(err) = &result {
                debug!(player = %player.id, error = %err, "player could not be scored");
            }
            PlayerRating {
                player_id: player.id.clone(),
                result,
            }
        })
        .collect();

    let failed = ratings.iter().filter(|rating| rating.result.is_err()).count();
    info!(scored = ratings.len() - failed, failed, "batch complete");
    ratings
}
