// SPDX-FileCopyrightText: 2025-2026 Campus Events Hub contributors
//
// SPDX-License-Identifier: Apache-2.0

//! In-memory backend used by the workflow tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use campus_events_core::{
    AuthError, AuthProvider, BlobStorage, Credentials, Document, DocumentId, DocumentStore, Fields,
    StorageError, StoreError, UserIdentity,
};
use futures::StreamExt;
use futures::stream::{self, BoxStream};
use tokio::sync::watch;

#[derive(Debug)]
struct StoreInner {
    collections: Mutex<HashMap<String, Vec<Document>>>,
    version: watch::Sender<u64>,
    next_id: AtomicU64,
    read_only: bool,
}

impl StoreInner {
    fn snapshot(&self, collection: &str) -> Vec<Document> {
        self.collections
            .lock()
            .unwrap()
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }

    fn check_writable(&self) -> Result<(), StoreError> {
        if self.read_only {
            Err(StoreError::PermissionDenied)
        } else {
            Ok(())
        }
    }

    fn bump(&self) {
        self.version.send_modify(|v| *v += 1);
    }
}

/// Document store keeping collections in insertion order.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    inner: Arc<StoreInner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::with_access(false)
    }

    /// A store that rejects every write.
    pub fn read_only() -> Self {
        Self::with_access(true)
    }

    fn with_access(read_only: bool) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                collections: Mutex::new(HashMap::new()),
                version: watch::Sender::new(0),
                next_id: AtomicU64::new(1),
                read_only,
            }),
        }
    }

    pub fn documents(&self, collection: &str) -> Vec<Document> {
        self.inner.snapshot(collection)
    }

    /// Inserts raw fields, bypassing validation.
    pub fn insert_raw(&self, collection: &str, id: &str, fields: Fields) {
        self.inner
            .collections
            .lock()
            .unwrap()
            .entry(collection.to_string())
            .or_default()
            .push(Document {
                id: DocumentId::new(id),
                fields,
            });
        self.inner.bump();
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    fn subscribe(&self, collection: &str) -> BoxStream<'static, Result<Vec<Document>, StoreError>> {
        let inner = Arc::clone(&self.inner);
        let rx = inner.version.subscribe();
        let collection = collection.to_string();
        stream::unfold(
            (inner, collection, rx, true),
            |(inner, collection, mut rx, first)| async move {
                if !first && rx.changed().await.is_err() {
                    return None;
                }
                let docs = inner.snapshot(&collection);
                Some((Ok(docs), (inner, collection, rx, false)))
            },
        )
        .boxed()
    }

    async fn get_document(
        &self,
        collection: &str,
        id: &DocumentId,
    ) -> Result<Option<Fields>, StoreError> {
        Ok(self
            .inner
            .snapshot(collection)
            .into_iter()
            .find(|doc| &doc.id == id)
            .map(|doc| doc.fields))
    }

    async fn add_document(
        &self,
        collection: &str,
        fields: Fields,
    ) -> Result<DocumentId, StoreError> {
        self.inner.check_writable()?;
        let n = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        let id = DocumentId::new(format!("doc-{n}"));
        self.insert_raw(collection, id.as_str(), fields);
        Ok(id)
    }

    async fn set_document(
        &self,
        collection: &str,
        id: &DocumentId,
        fields: Fields,
        merge: bool,
    ) -> Result<(), StoreError> {
        self.inner.check_writable()?;
        {
            let mut collections = self.inner.collections.lock().unwrap();
            let docs = collections.entry(collection.to_string()).or_default();
            match docs.iter_mut().find(|doc| &doc.id == id) {
                Some(doc) if merge => doc.fields.extend(fields),
                Some(doc) => doc.fields = fields,
                None => docs.push(Document {
                    id: id.clone(),
                    fields,
                }),
            }
        }
        self.inner.bump();
        Ok(())
    }

    async fn delete_document(&self, collection: &str, id: &DocumentId) -> Result<(), StoreError> {
        self.inner.check_writable()?;
        {
            let mut collections = self.inner.collections.lock().unwrap();
            let docs = collections.entry(collection.to_string()).or_default();
            let before = docs.len();
            docs.retain(|doc| &doc.id != id);
            if docs.len() == before {
                return Err(StoreError::NotFound(id.clone()));
            }
        }
        self.inner.bump();
        Ok(())
    }
}

/// Blob storage serving uploads from memory.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    blobs: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryStorage {
    pub fn paths(&self) -> Vec<String> {
        let mut paths: Vec<_> = self.blobs.lock().unwrap().keys().cloned().collect();
        paths.sort();
        paths
    }
}

#[async_trait]
impl BlobStorage for MemoryStorage {
    async fn upload(&self, path: &str, bytes: Vec<u8>) -> Result<(), StorageError> {
        self.blobs.lock().unwrap().insert(path.to_string(), bytes);
        Ok(())
    }

    async fn download_url(&self, path: &str) -> Result<String, StorageError> {
        if self.blobs.lock().unwrap().contains_key(path) {
            Ok(format!("https://storage.test/{path}"))
        } else {
            Err(StorageError::NotFound(path.to_string()))
        }
    }
}

/// Blob storage that rejects every upload.
#[derive(Debug, Default)]
pub struct FailingStorage;

#[async_trait]
impl BlobStorage for FailingStorage {
    async fn upload(&self, _path: &str, _bytes: Vec<u8>) -> Result<(), StorageError> {
        Err(StorageError::Backend("quota exceeded".to_string()))
    }

    async fn download_url(&self, path: &str) -> Result<String, StorageError> {
        Err(StorageError::NotFound(path.to_string()))
    }
}

/// Email/password accounts kept in memory.
#[derive(Debug, Default)]
pub struct MemoryAuth {
    accounts: Mutex<HashMap<String, (String, String)>>,
    current: Mutex<Option<UserIdentity>>,
}

impl MemoryAuth {
    fn sign_in_as(&self, uid: String, email: &str) -> UserIdentity {
        let user = UserIdentity {
            uid,
            email: Some(email.to_string()),
        };
        *self.current.lock().unwrap() = Some(user.clone());
        user
    }
}

#[async_trait]
impl AuthProvider for MemoryAuth {
    async fn sign_in(&self, credentials: &Credentials) -> Result<UserIdentity, AuthError> {
        credentials.validate_sign_in()?;
        let uid = match self.accounts.lock().unwrap().get(&credentials.email) {
            Some((uid, password)) if *password == credentials.password => uid.clone(),
            _ => return Err(AuthError::InvalidCredentials),
        };
        Ok(self.sign_in_as(uid, &credentials.email))
    }

    async fn sign_up(&self, credentials: &Credentials) -> Result<UserIdentity, AuthError> {
        credentials.validate_sign_up()?;
        let uid = {
            let mut accounts = self.accounts.lock().unwrap();
            if accounts.contains_key(&credentials.email) {
                return Err(AuthError::Backend(
                    "The email address is already in use by another account.".to_string(),
                ));
            }
            let uid = format!("uid-{}", accounts.len() + 1);
            accounts.insert(
                credentials.email.clone(),
                (uid.clone(), credentials.password.clone()),
            );
            uid
        };
        Ok(self.sign_in_as(uid, &credentials.email))
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        *self.current.lock().unwrap() = None;
        Ok(())
    }

    async fn current_user(&self) -> Option<UserIdentity> {
        self.current.lock().unwrap().clone()
    }
}
