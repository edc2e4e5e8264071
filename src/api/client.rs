//! Jenkins API client implementation.
//!
//! This module provides the main client for interacting with the Jenkins JSON API.
//! It handles authentication, request/response processing and error mapping.

use std::path::Path;
use std::time::Duration;

use reqwest::{header, Client, RequestBuilder, Response};
use serde_json::Value;
use tokio::time::Instant;
use tracing::{debug, info, instrument, warn};

use super::auth::Auth;
use super::endpoints;
use super::error::{JenkinsError, Result};
use crate::config::ClientConfig;

/// Default time to wait for a build to appear.
pub const DEFAULT_WAIT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default delay between polling attempts.
const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// The Jenkins API client.
///
/// Holds only immutable configuration, so one client can serve any number of
/// concurrent operations. Every request runs on its own short-lived HTTP
/// session; no cookies or pooled connections survive between calls.
#[derive(Debug, Clone)]
pub struct JenkinsClient {
    /// Server root, always ending with exactly one `/`.
    server: String,
    /// Authentication credentials, if configured.
    auth: Option<Auth>,
    /// Per-request transport timeout.
    timeout: Option<Duration>,
    /// Delay between attempts in `wait_until_build_exist`.
    poll_interval: Duration,
}

impl JenkinsClient {
    /// Create a new Jenkins client.
    ///
    /// Credentials are only used when both `username` and `password` are given.
    ///
    /// # Arguments
    ///
    /// * `url` - The Jenkins server URL, with or without a trailing slash
    /// * `username` - Optional user name
    /// * `password` - Optional password or API token
    pub fn new(url: &str, username: Option<&str>, password: Option<&str>) -> Self {
        let server = normalize_base_url(url);
        let auth = Auth::from_parts(username, password);

        debug!(server = %server, authenticated = auth.is_some(), "Created Jenkins client");

        Self {
            server,
            auth,
            timeout: None,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    /// Create a client from a configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the configuration is not usable.
    pub fn from_config(config: &ClientConfig) -> crate::config::Result<Self> {
        config.validate()?;

        let mut client = Self::new(
            &config.url,
            config.username.as_deref(),
            config.password.as_deref(),
        )
        .with_poll_interval(config.poll_interval());
        client.timeout = config.timeout();

        Ok(client)
    }

    /// Load a configuration file and create a client from it.
    pub fn from_config_file(path: &Path) -> crate::Result<Self> {
        let config = ClientConfig::load(path)?;
        Ok(Self::from_config(&config)?)
    }

    /// Set a per-request transport timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the delay between attempts while waiting for a build.
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Get the normalized server URL.
    pub fn server(&self) -> &str {
        &self.server
    }

    /// Resolve an endpoint path against the server URL.
    pub fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.server, path)
    }

    /// Check whether a job exists.
    ///
    /// Returns `false` when the server answers 404 or reports a different name.
    #[instrument(skip(self))]
    pub async fn job_exists(&self, name: &str) -> Result<bool> {
        let url = self.build_url(&endpoints::job_name(name));

        match self.perform_get_request(&url).await {
            Ok(response) => match response.get("name") {
                Some(found) => Ok(found.as_str() == Some(name)),
                None => Err(JenkinsError::MissingField("name".to_string())),
            },
            Err(JenkinsError::NotFound(_)) => {
                debug!("Job does not exist");
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    /// Get job metadata at the given expansion depth.
    #[instrument(skip(self))]
    pub async fn get_job_info(&self, name: &str, depth: u32) -> Result<Value> {
        let url = self.build_url(&endpoints::job_info(name, depth));
        self.perform_get_request(&url).await
    }

    /// Get the number the next build of a job will receive.
    #[instrument(skip(self))]
    pub async fn get_next_build_number(&self, name: &str) -> Result<u64> {
        let response = self.get_job_info(name, 0).await?;

        response
            .get("nextBuildNumber")
            .and_then(Value::as_u64)
            .ok_or_else(|| JenkinsError::MissingField("nextBuildNumber".to_string()))
    }

    /// Get metadata for one build of a job.
    #[instrument(skip(self))]
    pub async fn get_build_info(&self, name: &str, number: u64, depth: u32) -> Result<Value> {
        let url = self.build_url(&endpoints::build_info(name, number, depth));
        self.perform_get_request(&url).await
    }

    /// Poll until a build exists and return its metadata.
    ///
    /// Only not-found answers are retried. Once `timeout` has elapsed since the
    /// first attempt, the last not-found error is returned. Any other error is
    /// returned immediately.
    #[instrument(skip(self))]
    pub async fn wait_until_build_exist(
        &self,
        name: &str,
        number: u64,
        timeout: Duration,
    ) -> Result<Value> {
        let start = Instant::now();
        let mut attempts: u32 = 0;

        loop {
            attempts += 1;

            match self.get_build_info(name, number, 0).await {
                Ok(info) => {
                    debug!(attempts, "Build found");
                    return Ok(info);
                }
                Err(e) if e.is_not_found() => {
                    let elapsed = start.elapsed();
                    if elapsed >= timeout {
                        warn!(attempts, ?elapsed, "Gave up waiting for build");
                        return Err(e);
                    }
                    tokio::time::sleep(self.poll_interval.min(timeout - elapsed)).await;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Trigger a build of a job.
    ///
    /// Non-empty `params` select the parameterized endpoint, with the
    /// parameters form-encoded into the URL in the order given. Jenkins usually
    /// answers with an empty body, which is returned as `Value::Null`.
    #[instrument(skip(self, params))]
    pub async fn build_job(&self, name: &str, params: Option<&[(&str, &str)]>) -> Result<Value> {
        let path = match params {
            Some(params) if !params.is_empty() => endpoints::build_with_params(name, params),
            _ => endpoints::build_job(name),
        };

        let url = self.build_url(&path);
        let response = self.perform_post_request(&url, None).await?;

        info!("Build triggered");
        Ok(response)
    }

    /// Build an isolated HTTP session for a single request.
    fn session(&self) -> Result<Client> {
        let mut builder = Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        builder.build().map_err(JenkinsError::Transport)
    }

    /// Attach the configured authorization header.
    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.auth {
            Some(auth) => request.header(header::AUTHORIZATION, auth.header_value()),
            None => request,
        }
    }

    /// Perform a single GET request and decode the JSON body.
    async fn perform_get_request(&self, url: &str) -> Result<Value> {
        debug!(url = %url, "GET");

        let session = self.session()?;
        let response = self.authorize(session.get(url)).send().await?;

        Self::handle_response(response).await
    }

    /// Perform a single POST request, optionally with a form payload.
    async fn perform_post_request(
        &self,
        url: &str,
        data: Option<&[(&str, &str)]>,
    ) -> Result<Value> {
        debug!(url = %url, "POST");

        let session = self.session()?;
        let mut request = self.authorize(session.post(url));
        if let Some(data) = data {
            request = request.form(data);
        }
        let response = request.send().await?;

        Self::handle_response(response).await
    }

    /// Map the HTTP status to an error or decode the JSON body.
    ///
    /// 404, 401, 403 and 500 are remapped; any other failure status surfaces as
    /// the reqwest error produced by `error_for_status`.
    async fn handle_response(response: Response) -> Result<Value> {
        let status = response.status();

        if let Some(err) = JenkinsError::from_status(status) {
            warn!(status = status.as_u16(), url = %response.url(), "Request failed: {}", err);
            return Err(err);
        }

        let response = response.error_for_status()?;
        let body = response.text().await?;

        if body.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&body)
            .map_err(|e| JenkinsError::InvalidResponse(format!("Failed to parse response: {}", e)))
    }
}

/// Normalize the base URL so it ends with exactly one slash.
fn normalize_base_url(url: &str) -> String {
    let url = url.trim_end_matches('/');

    if !url.starts_with("https://") && !url.contains("localhost") && !url.contains("127.0.0.1") {
        warn!("URL does not use HTTPS: {}. Credentials are sent in clear text.", url);
    }

    format!("{}/", url)
}
