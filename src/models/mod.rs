//! Data structures for the poker tracker: players, sessions, the loaded dataset.

mod dataset;
mod player;
mod session;

pub use dataset::{Dataset, DatasetError};
pub use player::{Player, PlayerId};
pub use session::{Amount, Participation, PlayerBuyin, Session, SessionId};
