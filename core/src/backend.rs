// SPDX-FileCopyrightText: 2025-2026 Campus Events Hub contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Boundaries of the hosted backend: authentication, document store and blob storage.

use std::fmt;

use async_trait::async_trait;
use futures::stream::BoxStream;

/// Fields of a stored document.
pub type Fields = serde_json::Map<String, serde_json::Value>;

/// Identifier of a document in the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct DocumentId(String);

impl DocumentId {
    /// Creates a new `DocumentId`.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for DocumentId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// A document snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Document id.
    pub id: DocumentId,
    /// Document fields.
    pub fields: Fields,
}

/// The signed-in user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserIdentity {
    /// Backend user id.
    pub uid: String,
    /// Email the account was registered with.
    pub email: Option<String>,
}

/// Email and password as typed by the user.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Account email.
    pub email: String,
    /// Account password.
    pub password: String,
}

impl Credentials {
    /// Minimum password length accepted on sign up.
    pub const MIN_PASSWORD_LEN: usize = 6;

    /// Creates credentials from user input.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Checks the input before signing in.
    pub fn validate_sign_in(&self) -> Result<(), AuthError> {
        if self.email.trim().is_empty() || self.password.trim().is_empty() {
            return Err(AuthError::MissingFields);
        }
        Ok(())
    }

    /// Checks the input before creating an account.
    pub fn validate_sign_up(&self) -> Result<(), AuthError> {
        self.validate_sign_in()?;
        if self.password.chars().count() < Self::MIN_PASSWORD_LEN {
            return Err(AuthError::WeakPassword(Self::MIN_PASSWORD_LEN));
        }
        Ok(())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Authentication errors.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// Email or password is blank.
    #[error("Please fill all the fields.")]
    MissingFields,
    /// Password too short for sign up.
    #[error("Password must be at least {0} characters.")]
    WeakPassword(usize),
    /// The backend rejected the email/password pair.
    #[error("The username or password is not correct. Please try again.")]
    InvalidCredentials,
    /// Any other backend failure.
    #[error("{0}")]
    Backend(String),
}

/// Document store errors.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No document with that id.
    #[error("Document not found: {0}")]
    NotFound(DocumentId),
    /// The caller lacks permission.
    #[error("Permission denied")]
    PermissionDenied,
    /// Any other backend failure.
    #[error("Store error: {0}")]
    Backend(String),
}

/// Blob storage errors.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No blob at that path.
    #[error("Object not found: {0}")]
    NotFound(String),
    /// Any other backend failure.
    #[error("Storage error: {0}")]
    Backend(String),
}

/// Account management.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Signs in with an existing account.
    async fn sign_in(&self, credentials: &Credentials) -> Result<UserIdentity, AuthError>;

    /// Creates an account and signs in.
    async fn sign_up(&self, credentials: &Credentials) -> Result<UserIdentity, AuthError>;

    /// Signs the current user out.
    async fn sign_out(&self) -> Result<(), AuthError>;

    /// The signed-in user, if any.
    async fn current_user(&self) -> Option<UserIdentity>;
}

/// Real-time document store.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Live snapshots of a collection, each one the full ordered list.
    fn subscribe(&self, collection: &str) -> BoxStream<'static, Result<Vec<Document>, StoreError>>;

    /// Reads a single document.
    async fn get_document(
        &self,
        collection: &str,
        id: &DocumentId,
    ) -> Result<Option<Fields>, StoreError>;

    /// Adds a document with a generated id.
    async fn add_document(&self, collection: &str, fields: Fields)
    -> Result<DocumentId, StoreError>;

    /// Writes a document, merging into existing fields when `merge` is set.
    async fn set_document(
        &self,
        collection: &str,
        id: &DocumentId,
        fields: Fields,
        merge: bool,
    ) -> Result<(), StoreError>;

    /// Deletes a document.
    async fn delete_document(&self, collection: &str, id: &DocumentId) -> Result<(), StoreError>;
}

/// Binary object storage.
#[async_trait]
pub trait BlobStorage: Send + Sync {
    /// Uploads `bytes` to `path`.
    async fn upload(&self, path: &str, bytes: Vec<u8>) -> Result<(), StorageError>;

    /// Public download URL of the object at `path`.
    async fn download_url(&self, path: &str) -> Result<String, StorageError>;
}
