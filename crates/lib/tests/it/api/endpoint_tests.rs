//! Endpoint behavior: status codes and bodies for each route.

use serde_json::json;

use super::helpers::*;

// ===== REGISTER =====

#[tokio::test]
async fn test_register_success() {
    let srv = start_empty_server().await;

    let resp = srv
        .post(
            "/api/register",
            json!({"name": "Alice", "clashId": "A1", "password": "pw1"}),
        )
        .await;
    let (status, body) = status_and_json(resp).await;
    assert_eq!(status, 200);
    assert_eq!(
        body,
        json!({"success": true, "message": "Registered! You can now log in."})
    );
    assert_eq!(srv.server.store().user_count().await, 1);

    srv.stop().await;
}

#[tokio::test]
async fn test_register_missing_fields_is_400() {
    let srv = start_empty_server().await;

    for body in [
        json!({"name": "Alice", "clashId": "A1"}),
        json!({"name": "", "clashId": "A1", "password": "pw"}),
        json!({}),
    ] {
        let (status, body) = status_and_json(srv.post("/api/register", body).await).await;
        assert_eq!(status, 400);
        assert_eq!(body, json!({"error": "All fields are required."}));
    }

    srv.stop().await;
}

#[tokio::test]
async fn test_register_duplicate_is_409() {
    let srv = start_empty_server().await;
    srv.post(
        "/api/register",
        json!({"name": "Alice", "clashId": "A1", "password": "pw1"}),
    )
    .await;

    let resp = srv
        .post(
            "/api/register",
            json!({"name": "alice", "clashId": "A2", "password": "pw2"}),
        )
        .await;
    let (status, body) = status_and_json(resp).await;
    assert_eq!(status, 409);
    assert_eq!(body, json!({"error": "User already exists."}));

    let resp = srv
        .post(
            "/api/register",
            json!({"name": "Bob", "clashId": "a1", "password": "pw2"}),
        )
        .await;
    assert_eq!(resp.status().as_u16(), 409);

    srv.stop().await;
}

#[tokio::test]
async fn test_malformed_body_is_400() {
    let srv = start_empty_server().await;

    let resp = srv
        .client
        .post(srv.url("/api/register"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    let (status, body) = status_and_json(resp).await;
    assert_eq!(status, 400);
    assert!(body["error"].as_str().unwrap().starts_with("Invalid request body"));

    srv.stop().await;
}

// ===== LOGIN =====

#[tokio::test]
async fn test_login_success_and_failure() {
    let store = lobby::UserStore::new();
    store.register("Alice", "A1", "pw1").await.unwrap();
    let srv = start_server(store).await;

    let (status, body) = status_and_json(
        srv.post("/api/login", json!({"name": "Alice", "password": "pw1"}))
            .await,
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(body, json!({"success": true, "message": "Logged in!"}));

    let (status, body) = status_and_json(
        srv.post("/api/login", json!({"name": "alice", "password": "wrong"}))
            .await,
    )
    .await;
    assert_eq!(status, 401);
    assert_eq!(body, json!({"error": "Invalid name or password."}));

    srv.stop().await;
}

#[tokio::test]
async fn test_login_missing_fields_is_400() {
    let srv = start_empty_server().await;
    let resp = srv.post("/api/login", json!({"name": "Alice"})).await;
    assert_eq!(resp.status().as_u16(), 400);
    srv.stop().await;
}

// ===== ONLINE / LOGOUT =====

#[tokio::test]
async fn test_online_lists_sessions_in_login_order() {
    let store = lobby::UserStore::new();
    store.register("Alice", "A1", "pw1").await.unwrap();
    store.register("Bob", "B1", "pw2").await.unwrap();
    let srv = start_server(store).await;

    let (status, body) = status_and_json(srv.get("/api/online").await).await;
    assert_eq!(status, 200);
    assert_eq!(body, json!([]));

    srv.post("/api/login", json!({"name": "Bob", "password": "pw2"}))
        .await;
    srv.post("/api/login", json!({"name": "Alice", "password": "pw1"}))
        .await;
    srv.post("/api/login", json!({"name": "BOB", "password": "pw2"}))
        .await;

    let (_, body) = status_and_json(srv.get("/api/online").await).await;
    let players = body.as_array().unwrap();
    assert_eq!(players.len(), 2);
    assert_eq!(players[0]["name"], "Bob");
    assert_eq!(players[0]["clashId"], "B1");
    assert!(players[0]["loginTime"].as_u64().unwrap() > 0);
    assert_eq!(players[1]["name"], "Alice");

    srv.stop().await;
}

#[tokio::test]
async fn test_logout_always_succeeds() {
    let store = lobby::UserStore::new();
    store.register("Alice", "A1", "pw1").await.unwrap();
    store.login("Alice", "pw1").await.unwrap();
    let srv = start_server(store).await;

    let expected = json!({"success": true, "message": "Logged out."});
    for body in [json!({"name": "ALICE"}), json!({"name": "ALICE"}), json!({})] {
        let (status, resp) = status_and_json(srv.post("/api/logout", body).await).await;
        assert_eq!(status, 200);
        assert_eq!(resp, expected);
    }

    let (_, body) = status_and_json(srv.get("/api/online").await).await;
    assert_eq!(body, json!([]));

    srv.stop().await;
}

// ===== ROOT / HEALTH =====

#[tokio::test]
async fn test_root_banner() {
    let srv = start_empty_server().await;
    let resp = srv.get("/").await;
    assert_eq!(resp.status().as_u16(), 200);
    assert_eq!(
        resp.text().await.unwrap(),
        "Casino Royale backend is running!"
    );
    srv.stop().await;
}

#[tokio::test]
async fn test_health_reports_counts() {
    let store = lobby::UserStore::new();
    store.seed_demo().await.unwrap();
    let srv = start_server(store).await;

    let (status, body) = status_and_json(srv.get("/health").await).await;
    assert_eq!(status, 200);
    assert_eq!(body, json!({"status": "healthy", "users": 3, "online": 2}));

    srv.stop().await;
}

// ===== END TO END =====

#[tokio::test]
async fn test_end_to_end_over_http() {
    let srv = start_empty_server().await;

    let resp = srv
        .post(
            "/api/register",
            json!({"name": "Alice", "clashId": "A1", "password": "pw1"}),
        )
        .await;
    assert_eq!(resp.status().as_u16(), 200);

    let resp = srv
        .post("/api/login", json!({"name": "Alice", "password": "pw1"}))
        .await;
    assert_eq!(resp.status().as_u16(), 200);

    let (_, body) = status_and_json(srv.get("/api/online").await).await;
    assert_eq!(body[0]["name"], "Alice");
    assert_eq!(body[0]["clashId"], "A1");

    let resp = srv
        .post("/api/login", json!({"name": "alice", "password": "wrong"}))
        .await;
    assert_eq!(resp.status().as_u16(), 401);

    let resp = srv.post("/api/logout", json!({"name": "ALICE"})).await;
    assert_eq!(resp.status().as_u16(), 200);

    let (_, body) = status_and_json(srv.get("/api/online").await).await;
    assert_eq!(body, json!([]));

    srv.stop().await;
}
