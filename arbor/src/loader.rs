//! Loading record documents over HTTP.

use std::cell::RefCell;
use std::rc::Weak;
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;

use crate::error::LoadError;
use crate::record::Record;
use crate::tree::Tree;

/// Source of record documents.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch the raw body at `url`. Non-success responses are errors.
    async fn fetch(&self, url: &str) -> Result<String, LoadError>;
}

/// [`Fetcher`] backed by a `reqwest` client.
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    http_client: Client,
    timeout: Option<Duration>,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Abort requests that take longer than `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, LoadError> {
        let url = url::Url::parse(url).map_err(|e| LoadError::InvalidUrl(format!("{url}: {e}")))?;

        let mut request = self.http_client.get(url);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(LoadError::Status(response.status().as_u16()));
        }
        Ok(response.text().await?)
    }
}

/// Fetch and parse a record document.
pub async fn fetch_records(fetcher: &dyn Fetcher, url: &str) -> Result<Vec<Record>, LoadError> {
    let body = fetcher.fetch(url).await?;
    Ok(Record::parse_document(&body)?)
}

/// Fetch `url` and replace the tree's items with the document.
///
/// The tree is held weakly across the fetch: if it was dropped before the
/// response arrived, nothing happens. Failures are logged and otherwise
/// swallowed, leaving the tree unchanged. Returns whether data was applied.
pub async fn load_from_url(tree: Weak<RefCell<Tree>>, fetcher: &dyn Fetcher, url: &str) -> bool {
    let records = match fetch_records(fetcher, url).await {
        Ok(records) => records,
        Err(e) => {
            warn!("Loading {url} failed: {e}");
            return false;
        }
    };

    let Some(handle) = tree.upgrade() else {
        debug!("Tree dropped before {url} finished loading");
        return false;
    };

    let Ok(mut tree) = handle.try_borrow_mut() else {
        warn!("Tree is borrowed elsewhere, dropping data from {url}");
        return false;
    };
    match tree.set_data(&records) {
        Ok(()) => true,
        Err(e) => {
            warn!("Applying {url} failed: {e}");
            false
        }
    }
}
