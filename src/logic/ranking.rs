//! Leaderboard of players by summed session result.

use crate::logic::totals::player_display_name;
use crate::models::{Amount, Dataset, PlayerId};
use serde::Serialize;
use std::collections::HashMap;

/// One leaderboard line.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RankedResult {
    pub player_id: PlayerId,
    pub name: String,
    /// Sum of the player's results over every financial session.
    pub value: Amount,
}

/// Players with financial participation, best total result first, at most `n` entries.
///
/// Ids missing from the player collection are ranked too, under their raw id.
/// Equal totals keep the order in which players were first encountered.
pub fn top_results(dataset: &Dataset, n: usize) -> Vec<RankedResult> {
    // Insertion-ordered accumulation: index into `totals` by player id.
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut totals: Vec<(&str, Amount)> = Vec::new();

    for session in dataset.sessions() {
        for pb in session.participation.buyins().unwrap_or_default() {
            let id = pb.player_id.as_str();
            match index.get(id) {
                Some(&i) => totals[i].1 += pb.result,
                None => {
                    index.insert(id, totals.len());
                    totals.push((id, pb.result));
                }
            }
        }
    }

    totals.sort_by(|a, b| b.1.total_cmp(&a.1));
    totals
        .into_iter()
        .take(n)
        .map(|(id, value)| RankedResult {
            player_id: id.to_string(),
            name: player_display_name(dataset, id).to_string(),
            value,
        })
        .collect()
}

/// The home page podium: [`top_results`] limited to 3.
pub fn top3_results(dataset: &Dataset) -> Vec<RankedResult> {
    top_results(dataset, 3)
}
