use crate::{CliClientResult, ClientError};

use ud_core::{DirectorySource, Result as CoreResult, UserId, UserRecord};

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::{Client as ReqwestClient, Method, Url};
use serde::de::DeserializeOwned;

/// HTTP client for the remote user directory
pub struct Client {
    pub base_url: String,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client without a request timeout
    ///
    /// # Arguments
    /// * `base_url` - Directory URL (e.g., "https://jsonplaceholder.typicode.com")
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: ReqwestClient::new(),
        }
    }

    /// Create a new client whose requests give up after `timeout`
    pub fn with_timeout(base_url: &str, timeout: Duration) -> CliClientResult<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Base URL with `segments` appended, each one percent-encoded
    pub(crate) fn endpoint(&self, segments: &[&str]) -> CliClientResult<Url> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ClientError::url(&self.base_url, e.to_string()))?;

        url.path_segments_mut()
            .map_err(|_| ClientError::url(&self.base_url, "cannot be a base"))?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }

    /// Execute a GET and decode the JSON body
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> CliClientResult<T> {
        debug!("GET {}", url);

        let response = self.client.request(Method::GET, url.clone()).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(ClientError::status(status.as_u16(), url.to_string()));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    // =========================================================================
    // User Operations
    // =========================================================================

    /// List all users
    pub async fn list_users(&self) -> CliClientResult<Vec<UserRecord>> {
        self.get_json(self.endpoint(&["users"])?).await
    }

    /// Get a user by ID. Text ids are sent as a single path segment.
    pub async fn get_user(&self, id: &UserId) -> CliClientResult<UserRecord> {
        let id = id.to_string();
        self.get_json(self.endpoint(&["users", &id])?).await
    }
}

#[async_trait]
impl DirectorySource for Client {
    async fn fetch_users(&self) -> CoreResult<Vec<UserRecord>> {
        Ok(self.list_users().await?)
    }

    async fn fetch_user(&self, id: &UserId) -> CoreResult<UserRecord> {
        Ok(self.get_user(id).await?)
    }
}
