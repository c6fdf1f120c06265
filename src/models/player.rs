//! Player data structure.

use serde::{Deserialize, Serialize};

/// Unique identifier for a player (referenced from sessions).
pub type PlayerId = String;

/// A player known to the dashboard.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Path to the avatar image, relative to the static directory.
    #[serde(default, rename = "pfp", skip_serializing_if = "Option::is_none")]
    pub avatar_ref: Option<String>,
}

impl Player {
    /// Create a player with the given id and name and no display metadata.
    pub fn new(id: impl Into<PlayerId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            avatar_ref: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
