use pavilion_types::PlayerProfile;

/// Row shape of the `player_profile` table.
#[derive(Debug, sqlx::FromRow)]
pub struct PlayerProfileRow {
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

impl From<PlayerProfileRow> for PlayerProfile {
    fn from(row: PlayerProfileRow) -> Self {
        PlayerProfile {
            member_id: row.member_id,
            player_name: row.player_name,
            birth_date: row.birth_date,
            nationality: row.nationality,
            role: row.role,
            batting_style: row.batting_style,
            bowling_hand: row.bowling_hand,
            bowling_style: row.bowling_style,
            debut_year: row.debut_year,
            image_path: row.image_path,
        }
    }
}
