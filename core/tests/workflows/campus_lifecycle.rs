// SPDX-FileCopyrightText: 2025-2026 Campus Events Hub contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Campus event lifecycle: publish, watch, edit and delete.

use campus_events_core::{
    CampusEventError, CampusEvents, DocumentStore, EVENTS_COLLECTION, StoreError,
};
use futures::StreamExt;
use serde_json::json;

use crate::common::{FailingStorage, MemoryStorage, MemoryStore, test_event};

#[tokio::test]
async fn publish_then_watch() {
    let store = MemoryStore::new();
    let campus = CampusEvents::new(store.clone(), MemoryStorage::default());

    let mut live = campus.subscribe();
    let first = live.next().await.unwrap().unwrap();
    assert!(first.is_empty());

    let published = campus.publish(test_event("Career Fair"), None).await.unwrap();
    assert!(published.id.is_some());

    let snapshot = live.next().await.unwrap().unwrap();
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].title, "Career Fair");
    assert_eq!(snapshot[0].id, published.id);
}

#[tokio::test]
async fn publish_uploads_poster() {
    let storage = MemoryStorage::default();
    let store = MemoryStore::new();
    let campus = CampusEvents::new(store.clone(), storage);

    let event = campus
        .publish(test_event("Poster Night"), Some(vec![0xFF, 0xD8, 0xFF]))
        .await
        .unwrap();

    let poster = event.poster.expect("poster URL should be set");
    assert!(poster.starts_with("https://storage.test/eventPosters/poster-"));
    assert!(poster.ends_with(".jpg"));

    let docs = store.documents(EVENTS_COLLECTION);
    assert_eq!(docs[0].fields["Poster"], json!(poster));
}

#[tokio::test]
async fn failed_upload_still_publishes() {
    let store = MemoryStore::new();
    let campus = CampusEvents::new(store.clone(), FailingStorage);

    let event = campus
        .publish(test_event("Quiz Bowl"), Some(vec![1, 2, 3]))
        .await
        .unwrap();

    assert_eq!(event.poster, None);
    let docs = store.documents(EVENTS_COLLECTION);
    assert_eq!(docs.len(), 1);
    assert!(docs[0].fields.get("Poster").is_none());
}

#[tokio::test]
async fn publish_rejects_blank_title() {
    let store = MemoryStore::new();
    let campus = CampusEvents::new(store.clone(), MemoryStorage::default());

    let err = campus.publish(test_event("   "), None).await.unwrap_err();
    assert_eq!(err, CampusEventError::EmptyTitle);
    assert!(store.documents(EVENTS_COLLECTION).is_empty());
}

#[tokio::test]
async fn store_errors_propagate() {
    let campus = CampusEvents::new(MemoryStore::read_only(), MemoryStorage::default());
    let err = campus.publish(test_event("Hackathon"), None).await.unwrap_err();
    assert_eq!(err, CampusEventError::Store(StoreError::PermissionDenied));
}

#[tokio::test]
async fn update_merges_fields() {
    let store = MemoryStore::new();
    let campus = CampusEvents::new(store.clone(), MemoryStorage::default());
    let mut event = campus
        .publish(test_event("Career Fair"), Some(vec![7]))
        .await
        .unwrap();
    let poster = event.poster.clone();

    event.title = "Career Fair 2025".to_string();
    event.poster = None;
    event.latitude = Some(24.45);
    event.longitude = Some(54.38);
    let updated = campus.update(event, None).await.unwrap();
    assert_eq!(updated.title, "Career Fair 2025");

    let fields = store
        .get_document(EVENTS_COLLECTION, updated.id.as_ref().unwrap())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(fields["Title"], "Career Fair 2025");
    assert_eq!(fields["latitude"], 24.45);
    // Merge keeps the poster uploaded earlier.
    assert_eq!(fields["Poster"], json!(poster.unwrap()));
}

#[tokio::test]
async fn update_requires_a_stored_event() {
    let campus = CampusEvents::new(MemoryStore::new(), MemoryStorage::default());
    let err = campus.update(test_event("Draft"), None).await.unwrap_err();
    assert_eq!(err, CampusEventError::MissingId);
}

#[tokio::test]
async fn delete_removes_the_document() {
    let store = MemoryStore::new();
    let campus = CampusEvents::new(store.clone(), MemoryStorage::default());
    let keep = campus.publish(test_event("Keep"), None).await.unwrap();
    let drop = campus.publish(test_event("Drop"), None).await.unwrap();

    campus.delete(&drop).await.unwrap();

    let docs = store.documents(EVENTS_COLLECTION);
    assert_eq!(docs.len(), 1);
    assert_eq!(Some(&docs[0].id), keep.id.as_ref());

    let err = campus.delete(&drop).await.unwrap_err();
    assert!(matches!(err, CampusEventError::Store(StoreError::NotFound(_))));
    assert_eq!(
        campus.delete(&test_event("Never saved")).await,
        Err(CampusEventError::MissingId)
    );
}

#[tokio::test]
async fn watch_skips_malformed_documents() {
    let store = MemoryStore::new();
    let campus = CampusEvents::new(store.clone(), MemoryStorage::default());
    campus.publish(test_event("Valid"), None).await.unwrap();

    let mut broken = serde_json::Map::new();
    broken.insert("Title".to_string(), json!("No date"));
    store.insert_raw(EVENTS_COLLECTION, "broken", broken);

    let snapshot = campus.subscribe().next().await.unwrap().unwrap();
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].title, "Valid");
}
