use async_trait::async_trait;
use sqlx::PgPool;

use pavilion_app::repository::ProfileRepository;
use pavilion_types::{PlayerProfile, ProfileError};

use crate::models::PlayerProfileRow;

/// Postgres-backed profile repository. Uniqueness is enforced by the
/// primary key on `member_id` rather than a separate existence probe, so a
/// concurrent duplicate insert loses at the database instead of racing a
/// check-then-act window.
#[derive(Clone)]
pub struct PostgresProfileRepository {
    pool: PgPool,
}

impl PostgresProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileRepository for PostgresProfileRepository {
    async fn insert(&self, profile: &PlayerProfile) -> Result<(), ProfileError> {
        let result = sqlx::query(
            r#"
            INSERT INTO player_profile (
                member_id, player_name, birth_date, nationality, role,
                batting_style, bowling_hand, bowling_style, debut_year, image_path
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ON CONFLICT (member_id) DO NOTHING
            "#,
        )
        .bind(profile.member_id)
        .bind(&profile.player_name)
        .bind(&profile.birth_date)
        .bind(&profile.nationality)
        .bind(&profile.role)
        .bind(&profile.batting_style)
        .bind(&profile.bowling_hand)
        .bind(&profile.bowling_style)
        .bind(profile.debut_year)
        .bind(&profile.image_path)
        .execute(&self.pool)
        .await
        .map_err(db_error)?;

        if result.rows_affected() == 0 {
            let existing_name: String =
                sqlx::query_scalar("SELECT player_name FROM player_profile WHERE member_id = $1")
                    .bind(profile.member_id)
                    .fetch_one(&self.pool)
                    .await
                    .map_err(db_error)?;

            return Err(ProfileError::AlreadyExists {
                member_id: profile.member_id,
                player_name: existing_name,
            });
        }

        tracing::info!(member_id = profile.member_id, "player profile created");
        Ok(())
    }

    async fn find_by_member_id(
        &self,
        member_id: i64,
    ) -> Result<Option<PlayerProfile>, ProfileError> {
        let row: Option<PlayerProfileRow> = sqlx::query_as(
            r#"
            SELECT member_id, player_name, birth_date, nationality, role,
                   batting_style, bowling_hand, bowling_style, debut_year, image_path
            FROM player_profile
            WHERE member_id = $1
            "#,
        )
        .bind(member_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error)?;

        Ok(row.map(Into::into))
    }
}

fn db_error(e: sqlx::Error) -> ProfileError {
    ProfileError::Unavailable(e.to_string())
}
