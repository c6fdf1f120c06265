//! Statistics engine: pure functions over a loaded [`Dataset`](crate::models::Dataset).

mod global_stats;
mod player_stats;
mod ranking;
mod roster;
mod totals;

pub use global_stats::{global_stats, last_hero, Award, GlobalStats};
pub use player_stats::{player_stats, BuyinEvent, PlayerSessionEntry, PlayerStats, RECENT_SESSIONS_LIMIT};
pub use ranking::{top3_results, top_results, RankedResult};
pub use roster::{player_summaries, PlayerSummary};
pub use totals::{
    deposit_series, player_display_name, session_buyin_total, session_participant_count,
    session_summaries, session_view, DepositPoint, SessionAttendee, SessionBuyinRow,
    SessionSummary, SessionView,
};

/// Round to the nearest integer, halves toward positive infinity (-2.5 -> -2).
pub(crate) fn round_half_up(x: f64) -> f64 {
    let r = x.floor();
    if x - r >= 0.5 {
        r + 1.0
    } else {
        r
    }
}

/// Round to one decimal place, halves toward positive infinity.
pub(crate) fn round_to_tenth(x: f64) -> f64 {
    round_half_up(x * 10.0) / 10.0
}
