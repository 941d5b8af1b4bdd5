use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};
use uuid::Uuid;

use launchpad::api;
use launchpad_core::models::Project;
use launchpad_core::Database;

fn test_server() -> (TestServer, Database) {
    let db = Database::open_in_memory().unwrap();
    db.migrate().unwrap();
    let server = TestServer::new(api::create_router(db.clone())).unwrap();
    (server, db)
}

async fn create_project(server: &TestServer, brand: &str) -> Project {
    let response = server
        .post("/api/projects")
        .json(&json!({ "brand_name": brand }))
        .await;
    response.assert_status(StatusCode::CREATED);
    response.json()
}

#[tokio::test]
async fn health_is_ok() {
    let (server, _db) = test_server();
    let response = server.get("/api/health").await;
    response.assert_status_ok();
}

#[tokio::test]
async fn create_requires_a_brand_name() {
    let (server, _db) = test_server();
    let response = server
        .post("/api/projects")
        .json(&json!({ "brand_name": "   " }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn project_crud_round_trip() {
    let (server, _db) = test_server();
    let created = create_project(&server, "Acme").await;
    assert_eq!(created.version, 1);
    assert_eq!(created.version_history, vec![1]);

    let fetched: Project = server
        .get(&format!("/api/projects/{}", created.id))
        .await
        .json();
    assert_eq!(fetched.brand_name, "Acme");

    let updated: Project = server
        .put(&format!("/api/projects/{}", created.id))
        .json(&json!({ "status": "On HOLD", "poc": "Dana" }))
        .await
        .json();
    assert_eq!(updated.poc.as_deref(), Some("Dana"));
    assert_eq!(updated.status.as_str(), "On HOLD");

    let listed: Vec<Project> = server.get("/api/projects").await.json();
    assert_eq!(listed.len(), 1);

    server
        .delete(&format!("/api/projects/{}", created.id))
        .await
        .assert_status(StatusCode::NO_CONTENT);
    server
        .get(&format!("/api/projects/{}", created.id))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn missing_ids_are_404s() {
    let (server, _db) = test_server();
    let id = Uuid::new_v4();
    server
        .get(&format!("/api/projects/{id}"))
        .await
        .assert_status(StatusCode::NOT_FOUND);
    server
        .put(&format!("/api/projects/{id}"))
        .json(&json!({ "poc": "x" }))
        .await
        .assert_status(StatusCode::NOT_FOUND);
    server
        .delete(&format!("/api/projects/{id}"))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn progress_recomputes_after_answer_updates() {
    let (server, _db) = test_server();
    let created = create_project(&server, "Acme").await;
    assert_eq!(created.progress.sales_completion, 0);

    let updated: Project = server
        .put(&format!("/api/projects/{}", created.id))
        .json(&json!({
            "sales": {
                "contract_signed": true,
                "brand_assets": "https://assets.example.com",
                "integrations": ["Klaviyo"],
                "launch_window": "Q2",
                "billing": { "provider": "Stripe", "account_email": "ap@acme.test" },
                "contact": { "name": "Dana", "email": "dana@acme.test" }
            }
        }))
        .await
        .json();
    // All eight required sales units filled.
    assert_eq!(updated.progress.sales_completion, 100);
    assert_eq!(updated.progress.launch_completion, 0);
    assert_eq!(updated.progress.overall, 50);
}

#[tokio::test]
async fn read_reconciles_version_history() {
    let (server, _db) = test_server();
    let created = create_project(&server, "Acme").await;

    // Move to version 3 with an empty stored history and a marker at 5.
    server
        .put(&format!("/api/projects/{}", created.id))
        .json(&json!({
            "version": 3,
            "version_history": [],
            "launch": {
                "feature_builds": [{ "name": "hero", "version": 5 }]
            }
        }))
        .await
        .assert_status_ok();

    let fetched: Project = server
        .get(&format!("/api/projects/{}", created.id))
        .await
        .json();
    assert_eq!(fetched.version_history, vec![1, 2, 3, 5]);
}

#[tokio::test]
async fn read_carries_sales_integrations_into_launch() {
    let (server, _db) = test_server();
    let created = create_project(&server, "Acme").await;

    server
        .put(&format!("/api/projects/{}", created.id))
        .json(&json!({ "sales": { "integrations": ["Klaviyo", "Gorgias"] } }))
        .await
        .assert_status_ok();

    let fetched: Value = server
        .get(&format!("/api/projects/{}", created.id))
        .await
        .json();
    assert_eq!(
        fetched["checklists"]["launch"]["integrations"],
        json!(["Klaviyo", "Gorgias"])
    );

    // The default is read-time only; the stored launch map is untouched
    // until the launch form itself is saved.
    let listed: Vec<Value> = server.get("/api/projects").await.json();
    assert_eq!(listed[0]["checklists"]["launch"], json!({}));
}

#[tokio::test]
async fn email_draft_lists_missing_fields() {
    let (server, _db) = test_server();
    let created = create_project(&server, "Acme").await;

    server
        .put(&format!("/api/projects/{}", created.id))
        .json(&json!({
            "poc": "Dana",
            "sales": { "contract_signed": true }
        }))
        .await
        .assert_status_ok();

    let draft: Value = server
        .get(&format!("/api/projects/{}/email-draft", created.id))
        .await
        .json();
    assert_eq!(draft["subject"], "Missing information for Acme");
    let body = draft["body"].as_str().unwrap();
    assert!(body.starts_with("Hi Dana,"));
    assert!(body.contains("- Brand asset folder"));
    assert!(body.contains("- Billing details: Payment provider"));
    assert!(!body.contains("Contract signed"));

    let response = server
        .get(&format!("/api/projects/{}/email-draft", created.id))
        .add_query_param("checklist", "bogus")
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn config_defaults_then_replaces_wholesale() {
    let (server, _db) = test_server();
    let config: Value = server.get("/api/config").await.json();
    assert_eq!(config["version"], "v1");

    let replacement = json!({
        "version": "v2",
        "sales": [{ "id": "only", "label": "Only", "type": "text" }],
        "launch": []
    });
    server
        .put("/api/config")
        .json(&replacement)
        .await
        .assert_status_ok();

    let stored: Value = server.get("/api/config").await.json();
    assert_eq!(stored["version"], "v2");
    assert_eq!(stored["sales"].as_array().unwrap().len(), 1);
}
