use anyhow::{Context, Result};
use camino::Utf8PathBuf as PathBuf;
use tracing::{debug, instrument};

use super::Source;

/// Reads documents from a local copy of the UCD.
#[derive(Debug, Clone)]
pub struct LocalSource {
    pub root: PathBuf,
}

impl LocalSource {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}

impl Source for LocalSource {
    #[instrument(err, skip(self), level = "debug")]
    async fn fetch(&self, path: &str) -> Result<String> {
        let file = self.root.join(path);
        let content = tokio::fs::read_to_string(&file)
            .await
            .with_context(|| format!("Couldn't read file '{file}'"))?;
        debug!("Read {} bytes from '{}'", content.len(), file);
        Ok(content)
    }
}
