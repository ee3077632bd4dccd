//! Authenticated HTTP client for the Bitbucket Cloud REST API.
//!
//! The publisher talks to Bitbucket through the [`InsightsApi`] trait so
//! tests can substitute a recording implementation; [`BitbucketClient`] is
//! the production implementation. There is no retry, backoff or local
//! timeout policy here; a failed call surfaces as an error for the caller
//! to log.

use async_trait::async_trait;
use codeinsights_core::{Error, Result};
use reqwest::Client;
use tracing::debug;

use crate::report::Report;

/// Base URL of the Bitbucket Cloud REST API.
pub const CLOUD_API_BASE: &str = "https://api.bitbucket.org";

/// Credentials for the Bitbucket Cloud REST API.
#[derive(Clone)]
pub enum Credentials {
    /// An OAuth or repository access token, sent as a bearer header.
    Bearer(String),
    /// Username plus app password, sent as basic auth.
    Basic {
        /// Bitbucket username.
        username: String,
        /// App password generated for that user.
        app_password: String,
    },
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bearer(_) => f.write_str("Credentials::Bearer(***)"),
            Self::Basic { username, .. } => f
                .debug_struct("Credentials::Basic")
                .field("username", username)
                .field("app_password", &"***")
                .finish(),
        }
    }
}

/// Minimal API surface the publisher needs.
///
/// Abstracting the HTTP calls keeps the publisher testable with mock
/// implementations and keeps `reqwest` out of its signature.
#[async_trait]
pub trait InsightsApi: Send + Sync {
    /// Upsert a report at the given resource path (relative to the API
    /// root). PUT to the same path replaces the previous report.
    async fn put_report(&self, path: &str, report: &Report) -> Result<()>;
}

/// Production [`InsightsApi`] implementation bound to one account.
pub struct BitbucketClient {
    http: Client,
    base_url: String,
    credentials: Option<Credentials>,
}

impl BitbucketClient {
    /// Create a client for the Bitbucket Cloud API.
    ///
    /// # Panics
    ///
    /// `reqwest::Client::builder().build()` only fails when the TLS backend
    /// cannot initialize, which is an environment problem no caller can
    /// recover from.
    #[must_use]
    pub fn cloud(credentials: Option<Credentials>) -> Self {
        Self::new(CLOUD_API_BASE, credentials)
    }

    /// Create a client against an explicit base URL. Used by tests; real
    /// publishing always targets [`CLOUD_API_BASE`].
    #[must_use]
    pub fn new(base_url: impl Into<String>, credentials: Option<Credentials>) -> Self {
        Self {
            http: Client::builder()
                .user_agent("codeinsights")
                .build()
                .expect("failed to create HTTP client - TLS backend initialization failed"),
            base_url: base_url.into(),
            credentials,
        }
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

#[async_trait]
impl InsightsApi for BitbucketClient {
    async fn put_report(&self, path: &str, report: &Report) -> Result<()> {
        let url = self.url_for(path);
        debug!(%url, report_type = %report.report_type, "Publishing code insights report");

        let mut request = self.http.put(&url).json(report);
        match &self.credentials {
            Some(Credentials::Bearer(token)) => {
                request = request.bearer_auth(token);
            }
            Some(Credentials::Basic {
                username,
                app_password,
            }) => {
                request = request.basic_auth(username, Some(app_password));
            }
            None => {}
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::http(status.as_u16(), url));
        }

        debug!(%status, "Report accepted");
        Ok(())
    }
}
