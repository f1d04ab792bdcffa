pub mod config;
pub mod encoder;
pub mod repository;
pub mod roster;
pub mod storage;
pub mod test_utils;

pub use config::Config;
pub use repository::ProfileRepository;
pub use storage::BlobStore;
