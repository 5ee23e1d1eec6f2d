use std::path::Path;

use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest::Client;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::core::error::{LauncherError, LauncherResult};
use crate::core::http::build_http_client;

/// Retrieves one remote file into a freshly created local file.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Returns the number of bytes written to `dest`.
    async fn fetch(&self, dest: &Path, url: &str) -> LauncherResult<u64>;
}

/// Plain HTTP(S) fetcher: no retries, no checksum, no resume.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> LauncherResult<Self> {
        Ok(Self::with_client(build_http_client()?))
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    /// The file is created before the request goes out. Whatever was written
    /// before a failure stays on disk.
    async fn fetch(&self, dest: &Path, url: &str) -> LauncherResult<u64> {
        let local_write = |source| LauncherError::LocalWrite {
            path: dest.to_path_buf(),
            source,
        };
        let network = |source| LauncherError::Network {
            url: url.to_string(),
            source,
        };

        let mut file = tokio::fs::File::create(dest).await.map_err(local_write)?;

        debug!("Download from: {}", url);
        let response = self.client.get(url).send().await.map_err(network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(LauncherError::DownloadFailed {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let mut written = 0u64;
        let mut body = response.bytes_stream();
        while let Some(chunk) = body.next().await {
            let chunk = chunk.map_err(network)?;
            file.write_all(&chunk).await.map_err(local_write)?;
            written += chunk.len() as u64;
        }
        file.flush().await.map_err(local_write)?;

        debug!("Downloaded: {} -> {:?} ({} bytes)", url, dest, written);
        Ok(written)
    }
}
