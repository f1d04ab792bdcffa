#[cfg(any(test, feature = "test-utils"))]
pub mod tests {
    use async_trait::async_trait;
    use std::{
        collections::HashMap,
        sync::{Arc, Mutex},
    };

    use pavilion_types::{PlayerProfile, ProfileError, StorageError};

    use crate::repository::ProfileRepository;
    use crate::storage::{BlobStore, public_object_url};

    /// In-memory stand-in for the Postgres profile repository.
    #[derive(Default, Clone)]
    pub struct MemoryProfileRepository {
        rows: Arc<Mutex<HashMap<i64, PlayerProfile>>>,
    }

    impl MemoryProfileRepository {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn row_count(&self) -> usize {
            self.rows.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl ProfileRepository for MemoryProfileRepository {
        async fn insert(&self, profile: &PlayerProfile) -> Result<(), ProfileError> {
            let mut rows = self.rows.lock().unwrap();
            if let Some(existing) = rows.get(&profile.member_id) {
                return Err(ProfileError::AlreadyExists {
                    member_id: existing.member_id,
                    player_name: existing.player_name.clone(),
                });
            }

            rows.insert(profile.member_id, profile.clone());
            Ok(())
        }

        async fn find_by_member_id(
            &self,
            member_id: i64,
        ) -> Result<Option<PlayerProfile>, ProfileError> {
            Ok(self.rows.lock().unwrap().get(&member_id).cloned())
        }
    }

    /// In-memory stand-in for the R2 store. Derives public URLs with the
    /// same helper as the real client.
    pub struct MemoryBlobStore {
        bucket: String,
        account_id: String,
        objects: Mutex<HashMap<String, Vec<u8>>>,
    }

    impl MemoryBlobStore {
        pub fn new(bucket: &str, account_id: &str) -> Self {
            Self {
                bucket: bucket.to_string(),
                account_id: account_id.to_string(),
                objects: Mutex::new(HashMap::new()),
            }
        }

        pub fn object_count(&self) -> usize {
            self.objects.lock().unwrap().len()
        }

        pub fn object(&self, key: &str) -> Option<Vec<u8>> {
            self.objects.lock().unwrap().get(key).cloned()
        }
    }

    #[async_trait]
    impl BlobStore for MemoryBlobStore {
        async fn exists(&self, key: &str) -> Result<bool, StorageError> {
            Ok(self.objects.lock().unwrap().contains_key(key))
        }

        async fn put(
            &self,
            key: &str,
            bytes: Vec<u8>,
            _content_type: &str,
        ) -> Result<String, StorageError> {
            let mut objects = self.objects.lock().unwrap();
            if objects.contains_key(key) {
                return Err(StorageError::AlreadyExists {
                    key: key.to_string(),
                });
            }

            objects.insert(key.to_string(), bytes);
            Ok(public_object_url(&self.bucket, &self.account_id, key))
        }
    }
}
