//! Per-session helpers: buy-in totals, participant counts, display names and list/detail views.

use crate::models::{Amount, Dataset, Participation, PlayerId, Session, SessionId};
use chrono::NaiveDate;
use serde::Serialize;

/// Sum of every buy-in of every participant; 0 when the session has no financial data.
pub fn session_buyin_total(session: &Session) -> Amount {
    session
        .participation
        .buyins()
        .map(|entries| entries.iter().map(|pb| pb.total()).sum())
        .unwrap_or(0.0)
}

/// Number of participants. Financial records take priority over the attendance list.
pub fn session_participant_count(session: &Session) -> usize {
    match &session.participation {
        Participation::Financial { players_buyins }
        | Participation::Mixed { players_buyins, .. } => players_buyins.len(),
        Participation::AttendanceOnly { players } => players.len(),
        Participation::Empty => 0,
    }
}

/// Player name, or the raw id when the player is not in the dataset.
pub fn player_display_name<'a>(dataset: &'a Dataset, player_id: &'a str) -> &'a str {
    dataset
        .player(player_id)
        .map(|p| p.name.as_str())
        .unwrap_or(player_id)
}

/// Row of the session list.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SessionSummary {
    pub id: SessionId,
    pub date: NaiveDate,
    pub participant_count: usize,
    /// `None` when the session has no financial data.
    pub total_buyin: Option<Amount>,
}

/// One participant's line in a session detail.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SessionBuyinRow {
    pub player_id: PlayerId,
    pub name: String,
    pub buyins: Vec<Amount>,
    pub total_buyin: Amount,
    pub result: Amount,
}

/// Entry of a session's attendance list.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct SessionAttendee {
    pub player_id: PlayerId,
    pub name: String,
}

/// Detail view of a single session.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SessionView {
    pub id: SessionId,
    pub date: NaiveDate,
    pub notes: Option<String>,
    pub total_buyin: Amount,
    pub participant_count: usize,
    pub has_financial_data: bool,
    pub rows: Vec<SessionBuyinRow>,
    pub attendees: Vec<SessionAttendee>,
}

/// One point of the deposit chart: total buy-ins of a financial session.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DepositPoint {
    pub session_id: SessionId,
    pub date: NaiveDate,
    pub amount: Amount,
}

/// Build the detail view of `session`, resolving player names.
pub fn session_view(dataset: &Dataset, session: &Session) -> SessionView {
    let rows = session
        .participation
        .buyins()
        .unwrap_or_default()
        .iter()
        .map(|pb| SessionBuyinRow {
            player_id: pb.player_id.clone(),
            name: player_display_name(dataset, &pb.player_id).to_string(),
            buyins: pb.buyins.clone(),
            total_buyin: pb.total(),
            result: pb.result,
        })
        .collect();
    let attendees = session
        .participation
        .attendees()
        .unwrap_or_default()
        .iter()
        .map(|id| SessionAttendee {
            player_id: id.clone(),
            name: player_display_name(dataset, id).to_string(),
        })
        .collect();
    SessionView {
        id: session.id,
        date: session.date,
        notes: session.notes.clone(),
        total_buyin: session_buyin_total(session),
        participant_count: session_participant_count(session),
        has_financial_data: session.has_financial_data(),
        rows,
        attendees,
    }
}

/// Session list rows, in storage order.
pub fn session_summaries(dataset: &Dataset) -> Vec<SessionSummary> {
    dataset
        .sessions()
        .iter()
        .map(|s| SessionSummary {
            id: s.id,
            date: s.date,
            participant_count: session_participant_count(s),
            total_buyin: s.has_financial_data().then(|| session_buyin_total(s)),
        })
        .collect()
}

/// Total buy-ins per financial session, in storage order.
pub fn deposit_series(dataset: &Dataset) -> Vec<DepositPoint> {
    dataset
        .sessions()
        .iter()
        .filter(|s| s.has_financial_data())
        .map(|s| DepositPoint {
            session_id: s.id,
            date: s.date,
            amount: session_buyin_total(s),
        })
        .collect()
}
