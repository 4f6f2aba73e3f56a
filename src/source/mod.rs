use anyhow::Result;

pub mod http;
pub mod local_fs;

pub use http::HttpSource;
pub use local_fs::LocalSource;

/// A place UCD documents can be read from, addressed by paths relative to
/// the database root (e.g. `extracted/DerivedGeneralCategory.txt`).
pub trait Source {
    async fn fetch(&self, path: &str) -> Result<String>;
}
