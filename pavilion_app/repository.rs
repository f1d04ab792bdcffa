use async_trait::async_trait;

use pavilion_types::{PlayerProfile, ProfileError};

/// Persistence seam for player profiles. Implemented by the Postgres
/// repository in `pavilion_db` and by an in-memory fake for tests.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Inserts a new profile. Fails with [`ProfileError::AlreadyExists`]
    /// when a row with the same member id is present; never updates.
    async fn insert(&self, profile: &PlayerProfile) -> Result<(), ProfileError>;

    async fn find_by_member_id(
        &self,
        member_id: i64,
    ) -> Result<Option<PlayerProfile>, ProfileError>;
}
