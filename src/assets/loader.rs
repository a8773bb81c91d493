use std::future::Future;
use std::path::Path;
use std::time::Duration;

use anyhow::Context as _;

use crate::assets::decode::{DesignImage, decode_design};
use crate::assets::source::{DesignSource, decode_data_uri};
use crate::foundation::error::{EngineError, EngineResult, truncate_url};

/// Fetches and decodes design images.
///
/// The engine is generic over this seam so hosts can plug in their own transport (or a
/// cache) and tests can run without a network.
pub trait DesignLoader: Send + Sync {
    /// Load the design behind `uri`. Every failure must surface as
    /// [`EngineError::ImageLoad`].
    fn load(&self, uri: &str) -> impl Future<Output = EngineResult<DesignImage>> + Send;
}

/// Limits applied while loading designs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoaderOpts {
    /// Upper bound for one load, network and decode included.
    pub timeout: Duration,
    /// Largest accepted encoded payload.
    pub max_bytes: usize,
}

impl Default for LoaderOpts {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            max_bytes: 32 * 1024 * 1024,
        }
    }
}

/// Loader for `http(s)://` URLs, `data:` URIs and local files.
#[derive(Clone, Debug)]
pub struct DefaultDesignLoader {
    client: reqwest::Client,
    opts: LoaderOpts,
}

impl DefaultDesignLoader {
    pub fn new(opts: LoaderOpts) -> EngineResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(opts.timeout)
            .build()
            .context("build http client")?;
        Ok(Self { client, opts })
    }

    pub fn opts(&self) -> LoaderOpts {
        self.opts
    }

    #[tracing::instrument(skip_all, fields(source = %truncate_url(uri)))]
    async fn load_inner(&self, uri: &str) -> EngineResult<DesignImage> {
        let (bytes, mime) = match DesignSource::from_uri(uri) {
            DesignSource::DataUri(s) => {
                let payload = decode_data_uri(&s)?;
                (payload.bytes, payload.mime)
            }
            DesignSource::Http(url) => self.fetch_http(&url).await?,
            DesignSource::File(path) => (read_file(uri, &path).await?, None),
        };

        if bytes.len() > self.opts.max_bytes {
            return Err(EngineError::image_load(
                uri,
                format!(
                    "design is {} bytes, limit is {}",
                    bytes.len(),
                    self.opts.max_bytes
                ),
            ));
        }
        tracing::debug!(bytes = bytes.len(), mime = ?mime, "design fetched");

        decode_design(&bytes, mime.as_deref())
            .map_err(|e| EngineError::image_load(uri, format!("decode failed: {e}")))
    }

    async fn fetch_http(&self, url: &str) -> EngineResult<(Vec<u8>, Option<String>)> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| EngineError::image_load(url, format!("request failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(EngineError::image_load(url, format!("http status {status}")));
        }
        if let Some(len) = resp.content_length()
            && len > self.opts.max_bytes as u64
        {
            return Err(EngineError::image_load(
                url,
                format!("content-length {len} exceeds limit {}", self.opts.max_bytes),
            ));
        }

        let mime = resp
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.split(';').next().unwrap_or(v).trim().to_ascii_lowercase());
        let body = resp
            .bytes()
            .await
            .map_err(|e| EngineError::image_load(url, format!("reading body failed: {e}")))?;
        Ok((body.to_vec(), mime))
    }
}

impl DesignLoader for DefaultDesignLoader {
    fn load(&self, uri: &str) -> impl Future<Output = EngineResult<DesignImage>> + Send {
        async move {
            match tokio::time::timeout(self.opts.timeout, self.load_inner(uri)).await {
                Ok(res) => res,
                Err(_) => Err(EngineError::image_load(
                    uri,
                    format!("timed out after {} ms", self.opts.timeout.as_millis()),
                )),
            }
        }
    }
}

async fn read_file(uri: &str, path: &Path) -> EngineResult<Vec<u8>> {
    tokio::fs::read(path)
        .await
        .map_err(|e| EngineError::image_load(uri, format!("read '{}': {e}", path.display())))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/loader.rs"]
mod tests;
