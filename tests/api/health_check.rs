use std::time::{Duration, Instant};

use mongo_app::domain::DatabaseHost;

use crate::helpers::{spawn_app, spawn_app_with};

#[tokio::test]
async fn health_check_works() {
    let test_app = spawn_app_with(|c| {
        c.database.host = DatabaseHost::parse(Some("mongo.invalid".into()));
    })
    .await;

    let response = test_app.get_health_check().await;

    assert!(response.status().is_success());
    assert_eq!(Some(0), response.content_length());
}

#[tokio::test]
async fn database_health_check_returns_503_when_no_server_can_be_selected() {
    let test_app = spawn_app_with(|c| {
        c.database.host = DatabaseHost::parse(Some("mongo.invalid".into()));
    })
    .await;

    let started = Instant::now();
    let response = test_app.get_database_health_check().await;

    assert_eq!(503, response.status().as_u16());
    // Bounded by serverSelectionTimeoutMS.
    assert!(started.elapsed() < Duration::from_secs(10));
}

#[tokio::test]
#[ignore = "requires a MongoDB server reachable through MONGO_URL"]
async fn database_health_check_returns_200_when_mongodb_is_up() {
    let test_app = spawn_app().await;

    let response = test_app.get_database_health_check().await;

    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.expect("Body is not JSON");
    assert_eq!(body["status"], "up");
    assert!(body["database"].is_string());
}
