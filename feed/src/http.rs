// SPDX-FileCopyrightText: 2025-2026 Campus Events Hub contributors
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP client wrapper for the event feed.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::config::FeedConfig;
use crate::error::FeedError;

/// HTTP client for feed requests.
#[derive(Debug)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Creates a new HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if HTTP client creation fails.
    pub fn new(config: &FeedConfig) -> Result<Self, FeedError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Performs a plain GET and returns the raw body.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or returns an error status code.
    pub async fn get(&self, url: Url) -> Result<Vec<u8>, FeedError> {
        let resp = self.client.get(url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FeedError::Transport(format!("HTTP {status}")));
        }

        let body = resp.bytes().await?;
        Ok(body.to_vec())
    }
}
