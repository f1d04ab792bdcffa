use serde::{Deserialize, Serialize};

/// A club member as reported by the Play-Cricket roster API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub member_id: i64,
    pub name: String,
}

/// A complete biographical record for one player.
///
/// A profile is created exactly once per member id; there is no update or
/// delete path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub member_id: i64,
    pub player_name: String,
    pub birth_date: String,
    pub nationality: String,
    pub role: String,
    pub batting_style: String,
    pub bowling_hand: String,
    pub bowling_style: String,
    pub debut_year: i32,
    pub image_path: String,
}
