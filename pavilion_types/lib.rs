pub mod errors;
pub mod identifier;
pub mod player;

pub use errors::{EncoderError, ProfileError, RosterError, StorageError};
pub use player::{PlayerProfile, PlayerSummary};
