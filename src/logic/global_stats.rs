//! Dataset-wide "fun awards" and totals.

use crate::logic::totals::{player_display_name, session_buyin_total};
use crate::models::{Amount, Dataset, PlayerId, Session};
use serde::Serialize;
use std::collections::HashMap;

/// Winner of an award. An award nobody qualifies for is a placeholder
/// (empty id and name, value 0). `most_economical` uses the same zero
/// placeholder when no player has bought in, rather than an infinite amount.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Award {
    pub player_id: PlayerId,
    pub name: String,
    /// Count, amount or result depending on the award.
    pub value: Amount,
}

impl Award {
    fn new(player_id: &str, name: &str, value: Amount) -> Self {
        Self {
            player_id: player_id.to_string(),
            name: name.to_string(),
            value,
        }
    }

    /// True when no player won this award.
    pub fn is_placeholder(&self) -> bool {
        self.player_id.is_empty()
    }
}

/// Dataset-wide statistics for the home page.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct GlobalStats {
    /// Every buy-in ever made.
    pub total_deposit: Amount,
    /// Most buy-in events (value is the count).
    pub champion_top_ups: Award,
    /// Highest total buy-ins.
    pub most_generous: Award,
    /// Lowest non-zero total buy-ins.
    pub most_economical: Award,
    /// Lowest negative total result.
    pub biggest_loser: Award,
    /// Highest positive total result.
    pub king_of_wins: Award,
    /// Best positive result of the latest financial session.
    pub last_hero: Option<Award>,
    pub total_sessions: usize,
    pub total_players: usize,
    /// Sessions with financial data.
    pub active_sessions: usize,
}

#[derive(Clone, Copy, Default)]
struct Tally {
    buyins: Amount,
    result: Amount,
    top_ups: u32,
}

/// Compute the award leaderboard.
///
/// Only players in the player collection compete; ties go to the player listed first.
pub fn global_stats(dataset: &Dataset) -> GlobalStats {
    let players = dataset.players();
    let index: HashMap<&str, usize> = players
        .iter()
        .enumerate()
        .map(|(i, p)| (p.id.as_str(), i))
        .collect();
    let mut tallies = vec![Tally::default(); players.len()];

    let mut total_deposit = 0.0;
    let mut active_sessions = 0;
    for session in dataset.sessions() {
        let Some(entries) = session.participation.buyins() else {
            continue;
        };
        active_sessions += 1;
        total_deposit += session_buyin_total(session);
        for pb in entries {
            if let Some(&i) = index.get(pb.player_id.as_str()) {
                let t = &mut tallies[i];
                t.buyins += pb.total();
                t.result += pb.result;
                t.top_ups += pb.buyins.len() as u32;
            }
        }
    }

    let mut champion_top_ups = Award::default();
    let mut most_generous = Award::default();
    let mut most_economical: Option<Award> = None;
    let mut biggest_loser = Award::default();
    let mut king_of_wins = Award::default();

    for (player, t) in players.iter().zip(&tallies) {
        let top_ups = f64::from(t.top_ups);
        if top_ups > champion_top_ups.value {
            champion_top_ups = Award::new(&player.id, &player.name, top_ups);
        }
        if t.buyins > most_generous.value {
            most_generous = Award::new(&player.id, &player.name, t.buyins);
        }
        if t.buyins > 0.0 && most_economical.as_ref().map_or(true, |a| t.buyins < a.value) {
            most_economical = Some(Award::new(&player.id, &player.name, t.buyins));
        }
        if t.result < biggest_loser.value {
            biggest_loser = Award::new(&player.id, &player.name, t.result);
        }
        if t.result > king_of_wins.value {
            king_of_wins = Award::new(&player.id, &player.name, t.result);
        }
    }

    GlobalStats {
        total_deposit,
        champion_top_ups,
        most_generous,
        most_economical: most_economical.unwrap_or_default(),
        biggest_loser,
        king_of_wins,
        last_hero: last_hero(dataset),
        total_sessions: dataset.sessions().len(),
        total_players: players.len(),
        active_sessions,
    }
}

/// Best positive result of the most recent financial session with participants.
///
/// Among sessions on the same date the first stored wins; among equal results the
/// first listed participant wins.
pub fn last_hero(dataset: &Dataset) -> Option<Award> {
    let latest: &Session = dataset
        .sessions()
        .iter()
        .filter(|s| s.participation.buyins().is_some_and(|e| !e.is_empty()))
        .fold(None, |best: Option<&Session>, s| match best {
            Some(b) if s.date <= b.date => Some(b),
            _ => Some(s),
        })?;

    let entries = latest.participation.buyins()?;
    let (first, rest) = entries.split_first()?;
    let winner = rest
        .iter()
        .fold(first, |max, pb| if pb.result > max.result { pb } else { max });

    if winner.result <= 0.0 {
        return None;
    }
    let name = player_display_name(dataset, &winner.player_id);
    Some(Award::new(&winner.player_id, name, winner.result))
}
