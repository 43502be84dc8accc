use crate::core::{College, CollegeClient, Result};
use crate::utils::error::StudentError;
use crate::utils::validation::validate_url;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Fetches colleges from the college service over HTTP (`GET {base}/college/{id}`).
#[derive(Debug, Clone)]
pub struct HttpCollegeClient {
    client: Client,
    base_url: Url,
    timeout: Option<Duration>,
}

impl HttpCollegeClient {
    /// `client` is shared with the rest of the process; this type never builds its own.
    pub fn new(client: Client, base_url: &str) -> Result<Self> {
        validate_url("college_service_url", base_url)?;
        let base_url = Url::parse(base_url).map_err(|e| StudentError::InvalidConfigValueError {
            field: "college_service_url".to_string(),
            value: base_url.to_string(),
            reason: format!("Invalid URL format: {}", e),
        })?;
        Ok(Self {
            client,
            base_url,
            timeout: None,
        })
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// The college id always lands in a single, percent-encoded path segment.
    pub fn college_url(&self, college_id: &str) -> Url {
        let mut url = self.base_url.clone();
        // http(s) URLs always have a path to extend
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("college").push(college_id);
        }
        url
    }
}

#[async_trait]
impl CollegeClient for HttpCollegeClient {
    async fn fetch_college(&self, college_id: &str) -> Result<College> {
        let url = self.college_url(college_id);
        tracing::debug!("Fetching college from: {}", url);

        let mut request = self.client.get(url);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("College service response status: {}", status);

        if !status.is_success() {
            return Err(StudentError::CollegeStatus {
                status,
                college_id: college_id.to_string(),
            });
        }

        Ok(response.json::<College>().await?)
    }
}
