use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Url;
use tracing::{debug, instrument};

use super::Source;

pub const DEFAULT_BASE_URL: &str = "https://www.unicode.org/Public/UNIDATA/";

/// Downloads documents relative to a base URL. The client is shared between
/// all requests of a run.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpSource {
    pub fn new(client: reqwest::Client, base_url: &str) -> Result<Self> {
        // without the trailing slash `Url::join` would replace the last segment
        let base_url = if base_url.ends_with('/') {
            Url::parse(base_url)
        } else {
            Url::parse(&format!("{base_url}/"))
        }
        .with_context(|| format!("Invalid base URL '{base_url}'"))?;
        Ok(Self { client, base_url })
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("wcswidth-gen/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Self::new(client, base_url)
    }

    pub fn url(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .with_context(|| format!("Couldn't form URL for {path}"))
    }
}

impl Source for HttpSource {
    #[instrument(err, skip(self))]
    async fn fetch(&self, path: &str) -> Result<String> {
        let url = self.url(path)?;
        let body = self
            .client
            .get(url.clone())
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .with_context(|| format!("Couldn't download {url}"))?
            .text()
            .await
            .with_context(|| format!("Couldn't read response from {url}"))?;
        debug!("Downloaded {} bytes from {}", body.len(), url);
        Ok(body)
    }
}
