// SPDX-FileCopyrightText: 2025-2026 Campus Events Hub contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Remote event feed: wire model, HTTP transport and the fetch state machine.

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]
// Allow certain clippy lints that are too restrictive for this crate
#![allow(clippy::module_name_repetitions, clippy::single_match_else)]

mod config;
mod error;
mod fetcher;
mod http;
mod types;

pub use crate::config::{DEFAULT_ENDPOINT, FeedConfig};
pub use crate::error::FeedError;
pub use crate::fetcher::{FetchState, RemoteEventFetcher, decode_events, parse_endpoint};
pub use crate::types::{DateParseError, EventId, RemoteEvent};
