// SPDX-FileCopyrightText: 2025-2026 Campus Events Hub contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Fetch cycle and the state consumers observe.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use reqwest::Url;
use tokio::sync::watch;

use crate::config::FeedConfig;
use crate::error::FeedError;
use crate::http::HttpClient;
use crate::types::RemoteEvent;

/// Observable state of a [`RemoteEventFetcher`].
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FetchState {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// A request is in flight.
    Loading,
    /// The working set of the latest successful fetch, in server order.
    Ready(Arc<[RemoteEvent]>),
    /// The latest fetch failed.
    Failed(FeedError),
}

impl FetchState {
    /// Whether a request is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// The working set, if the latest fetch succeeded.
    #[must_use]
    pub fn events(&self) -> Option<&[RemoteEvent]> {
        match self {
            Self::Ready(events) => Some(events.as_ref()),
            _ => None,
        }
    }

    /// The error, if the latest fetch failed.
    #[must_use]
    pub const fn error(&self) -> Option<&FeedError> {
        match self {
            Self::Failed(e) => Some(e),
            _ => None,
        }
    }
}

/// Fetches the remote event list and publishes the outcome.
///
/// Every state change goes through one `watch` channel, so subscribers never
/// see a partially decoded batch. Calls are not deduplicated, but a response
/// that was superseded by a newer [`fetch`](Self::fetch) is dropped instead of
/// overwriting the newer state.
///
/// # Example
///
/// ```ignore
/// use campus_events_feed::{FeedConfig, RemoteEventFetcher};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = FeedConfig::default();
/// let fetcher = RemoteEventFetcher::new(&config)?;
/// let state = fetcher.fetch(&config.endpoint).await;
/// if let Some(events) = state.events() {
///     println!("{} events", events.len());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct RemoteEventFetcher {
    http: HttpClient,
    state: watch::Sender<FetchState>,
    generation: AtomicU64,
}

impl RemoteEventFetcher {
    /// Creates an idle fetcher.
    ///
    /// # Errors
    ///
    /// Returns an error if HTTP client initialization fails.
    pub fn new(config: &FeedConfig) -> Result<Self, FeedError> {
        let http = HttpClient::new(config)?;
        let (state, _) = watch::channel(FetchState::Idle);
        Ok(Self {
            http,
            state,
            generation: AtomicU64::new(0),
        })
    }

    /// The latest published state.
    #[must_use]
    pub fn state(&self) -> FetchState {
        self.state.borrow().clone()
    }

    /// Subscribes to state changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<FetchState> {
        self.state.subscribe()
    }

    /// Runs one fetch cycle against `endpoint` and returns the resulting state.
    ///
    /// Failures end up in [`FetchState::Failed`]; nothing is returned as an
    /// error. When a newer call has started meanwhile, this response is
    /// discarded and the newer state is returned.
    pub async fn fetch(&self, endpoint: &str) -> FetchState {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let url = match parse_endpoint(endpoint) {
            Ok(url) => url,
            Err(e) => {
                tracing::warn!(endpoint, "refusing to fetch from invalid endpoint");
                self.publish(ticket, FetchState::Failed(e));
                return self.state();
            }
        };

        self.publish(ticket, FetchState::Loading);
        tracing::debug!(%url, "fetching remote events...");

        let next = match self.load(url).await {
            Ok(events) => {
                tracing::debug!(count = events.len(), "remote events decoded");
                FetchState::Ready(events.into())
            }
            Err(e) => {
                tracing::warn!(err = %e, "fetching remote events failed");
                FetchState::Failed(e)
            }
        };

        if !self.publish(ticket, next) {
            tracing::debug!(ticket, "dropping superseded response");
        }
        self.state()
    }

    /// Runs one fetch cycle without touching the published state.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the body is empty or it doesn't
    /// decode.
    pub async fn load(&self, url: Url) -> Result<Vec<RemoteEvent>, FeedError> {
        let body = self.http.get(url).await?;
        decode_events(&body)
    }

    /// Publishes `next` unless `ticket` was superseded.
    fn publish(&self, ticket: u64, next: FetchState) -> bool {
        if self.generation.load(Ordering::SeqCst) != ticket {
            return false;
        }
        self.state.send_replace(next);
        true
    }
}

/// Validates a feed endpoint.
///
/// # Errors
///
/// Returns [`FeedError::InvalidEndpoint`] unless `endpoint` is an absolute
/// `http` or `https` URL.
pub fn parse_endpoint(endpoint: &str) -> Result<Url, FeedError> {
    let invalid = || FeedError::InvalidEndpoint(endpoint.to_string());
    let url = Url::parse(endpoint.trim()).map_err(|_| invalid())?;
    match url.scheme() {
        "http" | "https" if url.has_host() => Ok(url),
        _ => Err(invalid()),
    }
}

/// Decodes a response body into events, all or nothing.
///
/// Each record gets a fresh [`EventId`](crate::EventId).
///
/// # Errors
///
/// Returns [`FeedError::EmptyBody`] for an empty body and
/// [`FeedError::Decode`] when the body is not a JSON array of events.
pub fn decode_events(body: &[u8]) -> Result<Vec<RemoteEvent>, FeedError> {
    if body.is_empty() {
        return Err(FeedError::EmptyBody);
    }
    Ok(serde_json::from_slice(body)?)
}
