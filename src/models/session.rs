//! Session, Participation and PlayerBuyin.

use crate::models::player::PlayerId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Unique identifier for a session.
pub type SessionId = u32;

/// Monetary amount (euros; the data may hold fractional values).
pub type Amount = f64;

/// One player's financial record in a session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerBuyin {
    pub player_id: PlayerId,
    /// Each entry is one cash contribution (initial buy-in or top-up).
    #[serde(default)]
    pub buyins: Vec<Amount>,
    /// Net outcome. Authoritative input, not derived from `buyins`.
    pub result: Amount,
}

impl PlayerBuyin {
    pub fn new(player_id: impl Into<PlayerId>, buyins: Vec<Amount>, result: Amount) -> Self {
        Self {
            player_id: player_id.into(),
            buyins,
            result,
        }
    }

    /// Sum of this player's buy-ins in the session.
    pub fn total(&self) -> Amount {
        self.buyins.iter().sum()
    }
}

/// How a session was recorded.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Participation {
    /// Neither list was recorded.
    #[default]
    Empty,
    /// Attendance only, no money.
    AttendanceOnly { players: Vec<PlayerId> },
    /// Full financial data.
    Financial { players_buyins: Vec<PlayerBuyin> },
    /// Both lists recorded. Each list is a separate participation record.
    Mixed {
        players: Vec<PlayerId>,
        players_buyins: Vec<PlayerBuyin>,
    },
}

impl Participation {
    /// Financial records, if the session has them.
    pub fn buyins(&self) -> Option<&[PlayerBuyin]> {
        match self {
            Participation::Financial { players_buyins }
            | Participation::Mixed { players_buyins, .. } => Some(players_buyins),
            _ => None,
        }
    }

    /// Plain attendance list, if one was recorded.
    pub fn attendees(&self) -> Option<&[PlayerId]> {
        match self {
            Participation::AttendanceOnly { players } | Participation::Mixed { players, .. } => {
                Some(players)
            }
            _ => None,
        }
    }
}

/// One recorded poker game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawSession")]
pub struct Session {
    pub id: SessionId,
    pub date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub participation: Participation,
}

impl Session {
    pub fn new(id: SessionId, date: NaiveDate, participation: Participation) -> Self {
        Self {
            id,
            date,
            notes: None,
            participation,
        }
    }

    pub fn attendance(id: SessionId, date: NaiveDate, players: Vec<PlayerId>) -> Self {
        Self::new(id, date, Participation::AttendanceOnly { players })
    }

    pub fn financial(id: SessionId, date: NaiveDate, players_buyins: Vec<PlayerBuyin>) -> Self {
        Self::new(id, date, Participation::Financial { players_buyins })
    }

    pub fn mixed(
        id: SessionId,
        date: NaiveDate,
        players: Vec<PlayerId>,
        players_buyins: Vec<PlayerBuyin>,
    ) -> Self {
        Self::new(id, date, Participation::Mixed { players, players_buyins })
    }

    /// True when the session carries financial data (even an empty list).
    pub fn has_financial_data(&self) -> bool {
        self.participation.buyins().is_some()
    }
}

/// On-disk shape of a session: two optional lists instead of a sum type.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSession {
    id: SessionId,
    date: NaiveDate,
    #[serde(default)]
    notes: Option<String>,
    #[serde(default)]
    players: Option<Vec<PlayerId>>,
    #[serde(default)]
    players_buyins: Option<Vec<PlayerBuyin>>,
}

impl From<RawSession> for Session {
    fn from(raw: RawSession) -> Self {
        let participation = match (raw.players, raw.players_buyins) {
            (Some(players), Some(players_buyins)) => {
                log::warn!(
                    "Session {} has both players and playersBuyins; players in both are counted twice",
                    raw.id
                );
                Participation::Mixed {
                    players,
                    players_buyins,
                }
            }
            (None, Some(players_buyins)) => Participation::Financial { players_buyins },
            (Some(players), None) => Participation::AttendanceOnly { players },
            (None, None) => Participation::Empty,
        };
        Session {
            id: raw.id,
            date: raw.date,
            notes: raw.notes,
            participation,
        }
    }
}
