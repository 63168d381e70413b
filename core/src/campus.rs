// SPDX-FileCopyrightText: 2025-2026 Campus Events Hub contributors
//
// SPDX-License-Identifier: Apache-2.0

use futures::StreamExt;
use futures::stream::BoxStream;
use jiff::Timestamp;
use serde_json::Value;
use uuid::Uuid;

use crate::backend::{
    BlobStorage, Document, DocumentId, DocumentStore, Fields, StoreError, UserIdentity,
};

/// Collection holding campus events.
pub const EVENTS_COLLECTION: &str = "Events";

/// Collection holding user profiles.
pub const USERS_COLLECTION: &str = "Users";

/// Storage folder for event posters.
pub const POSTER_FOLDER: &str = "eventPosters";

/// An event organised on campus, stored in the document store.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CampusEvent {
    /// Document id, `None` until the event is stored.
    #[serde(skip)]
    pub id: Option<DocumentId>,
    /// Display title, never blank once stored.
    #[serde(rename = "Title")]
    pub title: String,
    /// Free-text description.
    #[serde(rename = "Description", default)]
    pub description: String,
    /// Start time.
    #[serde(rename = "Date")]
    pub date: Timestamp,
    /// City the event takes place in.
    #[serde(rename = "City", default)]
    pub city: String,
    /// Venue name.
    #[serde(rename = "Venue", default)]
    pub venue: String,
    /// Organiser or provenance label.
    #[serde(rename = "Source", default)]
    pub source: String,
    /// Download URL of the poster image.
    #[serde(rename = "Poster", default, skip_serializing_if = "is_blank")]
    pub poster: Option<String>,
    /// Latitude in degrees, only meaningful together with `longitude`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    /// Longitude in degrees.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

fn is_blank(poster: &Option<String>) -> bool {
    poster.as_deref().is_none_or(str::is_empty)
}

fn to_object<T: serde::Serialize>(value: &T) -> Result<Fields, String> {
    match serde_json::to_value(value) {
        Ok(Value::Object(fields)) => Ok(fields),
        Ok(other) => Err(format!("expected an object, got {other}")),
        Err(e) => Err(e.to_string()),
    }
}

impl CampusEvent {
    /// Both coordinates, if the event has a location.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        self.latitude.zip(self.longitude)
    }

    /// Fields written to the store.
    ///
    /// `Poster` is only written when non-empty and the coordinates only as a pair.
    pub fn to_fields(&self) -> Result<Fields, CampusEventError> {
        let mut event = self.clone();
        if event.coordinates().is_none() {
            event.latitude = None;
            event.longitude = None;
        }
        to_object(&event).map_err(CampusEventError::Encode)
    }

    /// Decodes a stored document.
    pub fn from_document(doc: &Document) -> Result<Self, CampusEventError> {
        let mut event: CampusEvent = serde_json::from_value(Value::Object(doc.fields.clone()))
            .map_err(|e| CampusEventError::Decode(e.to_string()))?;
        event.id = Some(doc.id.clone());
        Ok(event)
    }

    fn normalized(mut self) -> Result<Self, CampusEventError> {
        self.title = self.title.trim().to_string();
        if self.title.is_empty() {
            return Err(CampusEventError::EmptyTitle);
        }
        Ok(self)
    }
}

/// Role stored for every account in the users collection.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UserProfile {
    /// Sign-in email.
    pub email: String,
    /// Whether the user may edit and delete events.
    #[serde(rename = "isAdmin", default)]
    pub is_admin: bool,
}

/// Campus event errors.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CampusEventError {
    /// Title is blank after trimming.
    #[error("Event title must not be empty")]
    EmptyTitle,
    /// The event was never stored.
    #[error("Event has no id")]
    MissingId,
    /// Stored fields don't describe an event.
    #[error("Invalid event document: {0}")]
    Decode(String),
    /// The event couldn't be turned into stored fields.
    #[error("Failed to encode event: {0}")]
    Encode(String),
    /// The store rejected the write.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Campus event workflows on top of the hosted backend.
#[derive(Debug, Clone)]
pub struct CampusEvents<S, B> {
    store: S,
    storage: B,
}

impl<S: DocumentStore, B: BlobStorage> CampusEvents<S, B> {
    /// Creates the workflows over a store and a blob storage.
    pub fn new(store: S, storage: B) -> Self {
        Self { store, storage }
    }

    /// Live list of campus events. Documents that don't decode are skipped.
    pub fn subscribe(&self) -> BoxStream<'static, Result<Vec<CampusEvent>, StoreError>> {
        self.store
            .subscribe(EVENTS_COLLECTION)
            .map(|snapshot| {
                snapshot.map(|docs| {
                    docs.iter()
                        .filter_map(|doc| match CampusEvent::from_document(doc) {
                            Ok(event) => Some(event),
                            Err(err) => {
                                tracing::warn!(id = %doc.id, %err, "skipping campus event");
                                None
                            }
                        })
                        .collect::<Vec<_>>()
                })
            })
            .boxed()
    }

    /// Stores a new event, uploading its poster first when given.
    ///
    /// A failed upload is logged and the event is stored without a poster.
    pub async fn publish(
        &self,
        event: CampusEvent,
        poster: Option<Vec<u8>>,
    ) -> Result<CampusEvent, CampusEventError> {
        let mut event = event.normalized()?;
        if let Some(bytes) = poster {
            if let Some(url) = self.upload_poster(bytes).await {
                event.poster = Some(url);
            }
        }

        tracing::debug!(title = %event.title, "adding campus event...");
        let id = self
            .store
            .add_document(EVENTS_COLLECTION, event.to_fields()?)
            .await?;
        event.id = Some(id);
        Ok(event)
    }

    /// Merges the edited event into its document.
    ///
    /// The stored poster is only replaced when a new one uploads successfully.
    pub async fn update(
        &self,
        event: CampusEvent,
        poster: Option<Vec<u8>>,
    ) -> Result<CampusEvent, CampusEventError> {
        let mut event = event.normalized()?;
        let id = event.id.clone().ok_or(CampusEventError::MissingId)?;
        if let Some(bytes) = poster {
            if let Some(url) = self.upload_poster(bytes).await {
                event.poster = Some(url);
            }
        }

        tracing::debug!(%id, "updating campus event...");
        self.store
            .set_document(EVENTS_COLLECTION, &id, event.to_fields()?, true)
            .await?;
        Ok(event)
    }

    /// Deletes a stored event.
    pub async fn delete(&self, event: &CampusEvent) -> Result<(), CampusEventError> {
        let id = event.id.as_ref().ok_or(CampusEventError::MissingId)?;
        tracing::debug!(%id, "deleting campus event...");
        self.store.delete_document(EVENTS_COLLECTION, id).await?;
        Ok(())
    }

    /// Records a freshly registered account as a regular user.
    pub async fn register_profile(&self, user: &UserIdentity, email: &str) -> Result<(), StoreError> {
        let profile = UserProfile {
            email: email.to_string(),
            is_admin: false,
        };
        let fields = to_object(&profile).map_err(StoreError::Backend)?;
        self.store
            .set_document(USERS_COLLECTION, &DocumentId::new(&user.uid), fields, false)
            .await
    }

    /// Whether the user may edit and delete events. Missing profiles are not admins.
    pub async fn is_admin(&self, uid: &str) -> bool {
        let fields = match self
            .store
            .get_document(USERS_COLLECTION, &DocumentId::new(uid))
            .await
        {
            Ok(Some(fields)) => fields,
            Ok(None) => {
                tracing::debug!(uid, "no user profile");
                return false;
            }
            Err(err) => {
                tracing::warn!(uid, %err, "failed to load user role");
                return false;
            }
        };

        fields
            .get("isAdmin")
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    async fn upload_poster(&self, bytes: Vec<u8>) -> Option<String> {
        let path = format!("{POSTER_FOLDER}/poster-{}.jpg", Uuid::new_v4());
        if let Err(err) = self.storage.upload(&path, bytes).await {
            tracing::warn!(%path, %err, "poster upload failed");
            return None;
        }

        match self.storage.download_url(&path).await {
            Ok(url) => Some(url),
            Err(err) => {
                tracing::warn!(%path, %err, "poster download URL unavailable");
                None
            }
        }
    }
}
