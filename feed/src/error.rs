// SPDX-FileCopyrightText: 2025-2026 Campus Events Hub contributors
//
// SPDX-License-Identifier: Apache-2.0

/// Feed errors.
///
/// The display form of every variant is the message shown to the user as-is.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FeedError {
    /// The endpoint is not an absolute `http`/`https` URL.
    #[error("Invalid URL")]
    InvalidEndpoint(String),

    /// Timeout, connection failure or an unsuccessful HTTP status.
    #[error("Network error: {0}")]
    Transport(String),

    /// The server answered without a body.
    #[error("No data received")]
    EmptyBody,

    /// The body is not a JSON array of events.
    #[error("Decode error: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for FeedError {
    fn from(e: reqwest::Error) -> Self {
        Self::Transport(e.to_string())
    }
}

impl From<serde_json::Error> for FeedError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}
