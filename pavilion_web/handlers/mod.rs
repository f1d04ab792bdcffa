mod error;
mod players_handler;
mod submit_handler;
mod upload_handler;

pub use error::ApiError;
pub use players_handler::player_stats;
pub use submit_handler::submit_profile;
pub use upload_handler::upload_image;
