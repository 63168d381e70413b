// SPDX-FileCopyrightText: 2025-2026 Campus Events Hub contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Campus Events Hub core: filtering of the remote event feed, configuration,
//! and the campus event workflows on top of the hosted backend.

mod backend;
mod campus;
mod config;
mod filter;
mod hub;

pub use crate::backend::{
    AuthError, AuthProvider, BlobStorage, Credentials, Document, DocumentId, DocumentStore,
    Fields, StorageError, StoreError, UserIdentity,
};
pub use crate::campus::{
    CampusEvent, CampusEventError, CampusEvents, EVENTS_COLLECTION, POSTER_FOLDER,
    USERS_COLLECTION, UserProfile,
};
pub use crate::config::{APP_NAME, Config};
pub use crate::filter::{
    EventFilter, InvalidDatePolicy, RangeFilter, filter_by_range, filter_by_text, preview,
};
pub use crate::hub::EventsHub;
pub use campus_events_feed::{
    DateParseError, EventId, FeedConfig, FeedError, FetchState, RemoteEvent,
};
