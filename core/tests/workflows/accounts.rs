// SPDX-FileCopyrightText: 2025-2026 Campus Events Hub contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Account workflows: sign up, profile registration and roles.

use campus_events_core::{
    AuthError, AuthProvider, CampusEvents, Credentials, DocumentId, DocumentStore,
    USERS_COLLECTION,
};
use serde_json::json;

use crate::common::{MemoryAuth, MemoryStorage, MemoryStore};

#[tokio::test]
async fn sign_up_registers_a_regular_user() {
    let auth = MemoryAuth::default();
    let store = MemoryStore::new();
    let campus = CampusEvents::new(store.clone(), MemoryStorage::default());

    let credentials = Credentials::new("student@hct.ac.ae", "secret1");
    let user = auth.sign_up(&credentials).await.unwrap();
    campus
        .register_profile(&user, &credentials.email)
        .await
        .unwrap();

    let fields = store
        .get_document(USERS_COLLECTION, &DocumentId::new(&user.uid))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(fields["email"], "student@hct.ac.ae");
    assert_eq!(fields["isAdmin"], false);
    assert!(!campus.is_admin(&user.uid).await);
    assert_eq!(auth.current_user().await, Some(user));
}

#[tokio::test]
async fn admins_are_recognised() {
    let store = MemoryStore::new();
    let campus = CampusEvents::new(store.clone(), MemoryStorage::default());

    let mut fields = serde_json::Map::new();
    fields.insert("email".to_string(), json!("dean@hct.ac.ae"));
    fields.insert("isAdmin".to_string(), json!(true));
    store
        .set_document(USERS_COLLECTION, &DocumentId::new("dean"), fields, false)
        .await
        .unwrap();

    assert!(campus.is_admin("dean").await);
    assert!(!campus.is_admin("nobody").await);
}

#[tokio::test]
async fn sign_up_validates_before_reaching_the_backend() {
    let auth = MemoryAuth::default();

    let err = auth
        .sign_up(&Credentials::new("", "secret1"))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Please fill all the fields.");

    let err = auth
        .sign_up(&Credentials::new("a@hct.ac.ae", "123"))
        .await
        .unwrap_err();
    assert_eq!(err, AuthError::WeakPassword(6));
    assert_eq!(auth.current_user().await, None);
}

#[tokio::test]
async fn sign_in_and_out() {
    let auth = MemoryAuth::default();
    let credentials = Credentials::new("student@hct.ac.ae", "secret1");
    let user = auth.sign_up(&credentials).await.unwrap();
    auth.sign_out().await.unwrap();
    assert_eq!(auth.current_user().await, None);

    let wrong = Credentials::new("student@hct.ac.ae", "secret2");
    assert_eq!(
        auth.sign_in(&wrong).await.unwrap_err(),
        AuthError::InvalidCredentials
    );

    let signed_in = auth.sign_in(&credentials).await.unwrap();
    assert_eq!(signed_in, user);
}
