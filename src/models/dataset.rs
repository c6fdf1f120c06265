//! Dataset: the immutable snapshot of sessions and players every computation reads.

use crate::models::player::{Player, PlayerId};
use crate::models::session::{Session, SessionId};
use serde::Deserialize;
use std::collections::HashSet;

/// Errors that can occur while loading the dataset.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DatasetError {
    /// A data file could not be read.
    Io { path: String, message: String },
    /// A data file is not valid JSON for its expected shape.
    Parse { what: &'static str, message: String },
    /// Two players share an id.
    DuplicatePlayerId(PlayerId),
    /// Two sessions share an id.
    DuplicateSessionId(SessionId),
}

impl std::fmt::Display for DatasetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatasetError::Io { path, message } => write!(f, "Cannot read {}: {}", path, message),
            DatasetError::Parse { what, message } => write!(f, "Invalid {} data: {}", what, message),
            DatasetError::DuplicatePlayerId(id) => write!(f, "Duplicate player id {:?}", id),
            DatasetError::DuplicateSessionId(id) => write!(f, "Duplicate session id {}", id),
        }
    }
}

impl std::error::Error for DatasetError {}

/// Shape of `games.json`.
#[derive(Deserialize)]
struct SessionsFile {
    #[serde(default)]
    sessions: Vec<Session>,
}

/// Read-only snapshot of all sessions and players, in storage order.
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    sessions: Vec<Session>,
    players: Vec<Player>,
}

impl Dataset {
    /// Build a dataset, rejecting duplicate player or session ids.
    pub fn new(sessions: Vec<Session>, players: Vec<Player>) -> Result<Self, DatasetError> {
        {
            let mut seen = HashSet::new();
            if let Some(p) = players.iter().find(|p| !seen.insert(p.id.as_str())) {
                return Err(DatasetError::DuplicatePlayerId(p.id.clone()));
            }
        }
        let mut seen = HashSet::new();
        if let Some(s) = sessions.iter().find(|s| !seen.insert(s.id)) {
            return Err(DatasetError::DuplicateSessionId(s.id));
        }
        Ok(Self { sessions, players })
    }

    /// Parse `games.json` (`{"sessions": [...]}`) and `players.json` (`[...]`) contents.
    pub fn from_json_strs(games_json: &str, players_json: &str) -> Result<Self, DatasetError> {
        let games: SessionsFile =
            serde_json::from_str(games_json).map_err(|e| DatasetError::Parse {
                what: "games",
                message: e.to_string(),
            })?;
        let players: Vec<Player> =
            serde_json::from_str(players_json).map_err(|e| DatasetError::Parse {
                what: "players",
                message: e.to_string(),
            })?;
        Self::new(games.sessions, players)
    }

    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Session by id; `None` means not found.
    pub fn session(&self, id: SessionId) -> Option<&Session> {
        self.sessions.iter().find(|s| s.id == id)
    }

    /// Player by id; `None` means not found.
    pub fn player(&self, id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }
}
