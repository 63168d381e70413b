// SPDX-FileCopyrightText: 2025-2026 Campus Events Hub contributors
//
// SPDX-License-Identifier: Apache-2.0

/// The feed the mobile client ships with.
pub const DEFAULT_ENDPOINT: &str = "https://ed46cd907c564a10a26de530462262a3.api.mockbin.io/";

/// Remote feed configuration.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct FeedConfig {
    /// URL of the JSON event list.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// User agent string.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

const fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("campus-events-feed/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}
