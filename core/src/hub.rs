// SPDX-FileCopyrightText: 2025-2026 Campus Events Hub contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use campus_events_feed::{FeedError, FetchState, RemoteEvent, RemoteEventFetcher};
use jiff::{Timestamp, Zoned};
use tokio::sync::watch;

use crate::config::Config;
use crate::filter::{EventFilter, preview};

/// Campus Events Hub core: the remote feed plus the clock it is filtered against.
#[derive(Debug)]
pub struct EventsHub {
    now: Zoned,
    config: Config,
    fetcher: RemoteEventFetcher,
}

impl EventsHub {
    /// Creates a new hub with the given configuration.
    pub fn new(mut config: Config) -> Result<Self, Box<dyn Error>> {
        config.normalize()?;
        let now = Timestamp::now().to_zoned(config.time_zone()?);
        let fetcher = RemoteEventFetcher::new(&config.feed)
            .map_err(|e| format!("Failed to initialize feed client: {e}"))?;

        Ok(Self {
            now,
            config,
            fetcher,
        })
    }

    /// The reference instant filters are evaluated against.
    pub fn now(&self) -> &Zoned {
        &self.now
    }

    /// Refresh the reference instant to now, keeping its time zone.
    pub fn refresh_now(&mut self) {
        self.now = Timestamp::now().to_zoned(self.now.time_zone().clone());
    }

    /// Pins the reference instant.
    pub fn set_now(&mut self, now: Zoned) {
        self.now = now;
    }

    /// The normalized configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Runs one fetch cycle against the configured endpoint.
    pub async fn refresh(&self) -> FetchState {
        self.fetcher.fetch(&self.config.feed.endpoint).await
    }

    /// The latest fetch state.
    pub fn state(&self) -> FetchState {
        self.fetcher.state()
    }

    /// Subscribes to fetch state changes.
    pub fn subscribe(&self) -> watch::Receiver<FetchState> {
        self.fetcher.subscribe()
    }

    /// Filter built from the configured defaults.
    pub fn default_filter(&self) -> EventFilter {
        EventFilter::new(self.config.default_range).with_invalid_date(self.config.invalid_date)
    }

    /// Filters the working set.
    ///
    /// Nothing is listed before the first fetch completes; a failed fetch
    /// returns its error.
    pub fn list(&self, filter: &EventFilter) -> Result<Vec<RemoteEvent>, FeedError> {
        match self.fetcher.state() {
            FetchState::Ready(events) => Ok(filter
                .apply(&events, &self.now)
                .into_iter()
                .cloned()
                .collect()),
            FetchState::Failed(e) => Err(e),
            FetchState::Idle | FetchState::Loading => Ok(Vec::new()),
        }
    }

    /// The preview strip: the first events of the working set, unfiltered.
    pub fn preview(&self) -> Result<Vec<RemoteEvent>, FeedError> {
        match self.fetcher.state() {
            FetchState::Ready(events) => Ok(preview(&events, self.config.preview_limit).to_vec()),
            FetchState::Failed(e) => Err(e),
            FetchState::Idle | FetchState::Loading => Ok(Vec::new()),
        }
    }
}
