use thiserror::Error;

/// Failures talking to the Play-Cricket roster API.
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("roster API request failed with status {status}")]
    BadStatus { status: u16 },

    #[error("roster API unreachable: {0}")]
    Unreachable(String),
}

/// Failures while re-encoding an uploaded photo.
#[derive(Debug, Error)]
pub enum EncoderError {
    #[error("could not decode uploaded image: {0}")]
    Decode(String),

    #[error("could not encode image to AVIF: {0}")]
    Encode(String),
}

/// Failures from the object store holding player photos.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error(
        "Image {key} already exists in storage. Contact an administrator to replace an existing photo."
    )]
    AlreadyExists { key: String },

    #[error("object store unavailable: {0}")]
    Unavailable(String),
}

/// Failures from the profile database.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error(
        "Player \"{player_name}\" (ID: {member_id}) already exists in the database. Contact an administrator to resubmit player information."
    )]
    AlreadyExists { member_id: i64, player_name: String },

    #[error("database unavailable: {0}")]
    Unavailable(String),
}
