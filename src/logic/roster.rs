//! Players page: one summary line per known player.

use crate::logic::round_to_tenth;
use crate::models::{Amount, Dataset, PlayerId};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlayerSummary {
    pub player_id: PlayerId,
    pub name: String,
    pub description: Option<String>,
    pub avatar_ref: Option<String>,
    pub total_sessions: u32,
    pub total_buyins: Amount,
    /// Rounded to one decimal place.
    pub total_result: Amount,
}

/// Summaries for every player, in player collection order.
pub fn player_summaries(dataset: &Dataset) -> Vec<PlayerSummary> {
    dataset
        .players()
        .iter()
        .map(|player| {
            let mut total_sessions = 0;
            let mut total_buyins = 0.0;
            let mut total_result = 0.0;
            for session in dataset.sessions() {
                let participation = &session.participation;
                if participation
                    .attendees()
                    .is_some_and(|players| players.contains(&player.id))
                {
                    total_sessions += 1;
                }
                if let Some(pb) = participation
                    .buyins()
                    .and_then(|entries| entries.iter().find(|pb| pb.player_id == player.id))
                {
                    total_sessions += 1;
                    total_buyins += pb.total();
                    total_result += pb.result;
                }
            }
            PlayerSummary {
                player_id: player.id.clone(),
                name: player.name.clone(),
                description: player.description.clone(),
                avatar_ref: player.avatar_ref.clone(),
                total_sessions,
                total_buyins,
                total_result: round_to_tenth(total_result),
            }
        })
        .collect()
}
