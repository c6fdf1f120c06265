//! Poker session tracker: library with the dataset model and the statistics engine.

pub mod logic;
pub mod models;

pub use logic::{
    deposit_series, global_stats, last_hero, player_display_name, player_stats, player_summaries,
    session_buyin_total, session_participant_count, session_summaries, session_view,
    top3_results, top_results, Award, BuyinEvent, DepositPoint, GlobalStats, PlayerSessionEntry,
    PlayerStats, PlayerSummary, RankedResult, SessionAttendee, SessionBuyinRow, SessionSummary,
    SessionView, RECENT_SESSIONS_LIMIT,
};
pub use models::{
    Amount, Dataset, DatasetError, Participation, Player, PlayerBuyin, PlayerId, Session,
    SessionId,
};
