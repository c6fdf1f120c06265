//! Career statistics of a single player across every session.

use crate::logic::round_half_up;
use crate::models::{Amount, Dataset, SessionId};
use chrono::NaiveDate;
use serde::Serialize;

/// How many sessions `PlayerStats::recent_sessions` keeps.
pub const RECENT_SESSIONS_LIMIT: usize = 10;

/// One session in a player's history.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlayerSessionEntry {
    pub session_id: SessionId,
    pub date: NaiveDate,
    /// Empty for attendance-only sessions.
    pub buyins: Vec<Amount>,
    pub total_buyin: Amount,
    pub result: Amount,
}

/// A single buy-in event.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BuyinEvent {
    pub date: NaiveDate,
    pub amount: Amount,
}

/// Aggregated career statistics of one player.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct PlayerStats {
    pub total_sessions: u32,
    pub sessions_with_buyins: u32,
    pub sessions_without_buyins: u32,
    pub total_buyins: Amount,
    pub total_result: Amount,
    pub wins: u32,
    pub losses: u32,
    pub max_buyin: Amount,
    /// Mean buy-in event, rounded to the nearest integer.
    pub average_buyin: Amount,
    /// Mean result per financial session, rounded to the nearest integer.
    pub average_result: Amount,
    /// Newest first, at most [`RECENT_SESSIONS_LIMIT`].
    pub recent_sessions: Vec<PlayerSessionEntry>,
    /// Newest first.
    pub buyin_history: Vec<BuyinEvent>,
}

/// Compute career statistics for `player_id`. Unknown ids yield all-zero stats.
///
/// Sessions sharing a date keep their storage order in both histories.
pub fn player_stats(dataset: &Dataset, player_id: &str) -> PlayerStats {
    let mut stats = PlayerStats::default();

    for session in dataset.sessions() {
        // Each list is its own participation record: a player in both counts twice.
        let attended = session
            .participation
            .attendees()
            .is_some_and(|players| players.iter().any(|p| p == player_id));
        if attended {
            stats.total_sessions += 1;
            stats.sessions_without_buyins += 1;
        }

        let financial = session
            .participation
            .buyins()
            .and_then(|entries| entries.iter().find(|pb| pb.player_id == player_id));
        let entry = match financial {
            Some(pb) => {
                stats.total_sessions += 1;
                stats.sessions_with_buyins += 1;
                let total = pb.total();
                stats.total_buyins += total;
                stats.total_result += pb.result;
                if pb.result > 0.0 {
                    stats.wins += 1;
                } else if pb.result < 0.0 {
                    stats.losses += 1;
                }
                for &amount in &pb.buyins {
                    stats.buyin_history.push(BuyinEvent {
                        date: session.date,
                        amount,
                    });
                    stats.max_buyin = stats.max_buyin.max(amount);
                }
                PlayerSessionEntry {
                    session_id: session.id,
                    date: session.date,
                    buyins: pb.buyins.clone(),
                    total_buyin: total,
                    result: pb.result,
                }
            }
            None if attended => PlayerSessionEntry {
                session_id: session.id,
                date: session.date,
                buyins: Vec::new(),
                total_buyin: 0.0,
                result: 0.0,
            },
            None => continue,
        };
        stats.recent_sessions.push(entry);
    }

    if stats.total_buyins > 0.0 && !stats.buyin_history.is_empty() {
        stats.average_buyin =
            round_half_up(stats.total_buyins / stats.buyin_history.len() as f64);
    }
    if stats.sessions_with_buyins > 0 {
        stats.average_result =
            round_half_up(stats.total_result / f64::from(stats.sessions_with_buyins));
    }

    // sort_by is stable: equal dates keep storage order.
    stats.recent_sessions.sort_by(|a, b| b.date.cmp(&a.date));
    stats.recent_sessions.truncate(RECENT_SESSIONS_LIMIT);
    stats.buyin_history.sort_by(|a, b| b.date.cmp(&a.date));

    stats
}
