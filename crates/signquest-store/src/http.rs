//! HTTP profile store.
//!
//! Talks to the game's web backend:
//! - `GET  {base}/api/get_profile?email=...` returns the stored profile
//! - `POST {base}/api/correct` and `POST {base}/api/incorrect` with
//!   `{"email": ...}` record outcomes

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;
use serde::Serialize;
use tracing::instrument;

use signquest_core::error::StoreError;
use signquest_core::model::{Identity, Outcome, Profile};
use signquest_core::traits::ProfileStore;

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Profile store backed by the web API.
pub struct HttpProfileStore {
    base_url: String,
    timeout_secs: u64,
    client: reqwest::Client,
}

impl HttpProfileStore {
    pub fn new(base_url: &str, timeout_secs: Option<u64>) -> anyhow::Result<Self> {
        let timeout_secs = timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout_secs,
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn transport_error(&self, e: reqwest::Error) -> StoreError {
        if e.is_timeout() {
            StoreError::Timeout(self.timeout_secs)
        } else if e.is_connect() {
            StoreError::Network(format!("profile store not reachable at {}", self.base_url))
        } else {
            StoreError::Network(e.to_string())
        }
    }
}

#[derive(Serialize)]
struct NotifyBody<'a> {
    email: &'a str,
}

fn outcome_path(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Correct => "api/correct",
        Outcome::Incorrect => "api/incorrect",
    }
}

#[async_trait]
impl ProfileStore for HttpProfileStore {
    fn name(&self) -> &str {
        "http"
    }

    #[instrument(skip(self), fields(base_url = %self.base_url))]
    async fn fetch_profile(&self, identity: &Identity) -> Result<Profile, StoreError> {
        let url = Url::parse_with_params(
            &format!("{}/api/get_profile", self.base_url),
            &[("email", identity.as_str())],
        )
        .map_err(|e| StoreError::Network(format!("invalid store url: {e}")))?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status().as_u16();
        if status == 404 {
            return Err(StoreError::ProfileNotFound(identity.to_string()));
        }
        if status >= 400 {
            let message = response.text().await.unwrap_or_default();
            return Err(StoreError::Api { status, message });
        }

        response
            .json::<Profile>()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))
    }

    #[instrument(skip(self), fields(base_url = %self.base_url))]
    async fn notify(&self, outcome: Outcome, identity: &Identity) -> Result<(), StoreError> {
        let response = self
            .client
            .post(format!("{}/{}", self.base_url, outcome_path(outcome)))
            .json(&NotifyBody {
                email: identity.as_str(),
            })
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status().as_u16();
        if status >= 400 {
            let message = response.text().await.unwrap_or_default();
            return Err(StoreError::Api { status, message });
        }

        Ok(())
    }
}
