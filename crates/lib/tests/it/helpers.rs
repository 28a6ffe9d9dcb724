//! Shared helpers for the integration suite.

#![allow(dead_code)]

use lobby::UserStore;

/// Create a store with the given `(name, clash_id, password)` users registered.
pub async fn store_with_users(users: &[(&str, &str, &str)]) -> UserStore {
    let store = UserStore::new();
    for (name, clash_id, password) in users {
        store
            .register(name, clash_id, password)
            .await
            .expect("Failed to register user");
    }
    store
}

/// Names of the online players, in list order.
pub async fn online_names(store: &UserStore) -> Vec<String> {
    store
        .list_online()
        .await
        .into_iter()
        .map(|s| s.name)
        .collect()
}
