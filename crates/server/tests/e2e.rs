use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::json;
use service::{storage::memory::MemoryVillaStore, villa::VillaService};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use server::routes::{self, ServerState};

fn cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

struct TestApp {
    base_url: String,
}

/// Bind an ephemeral port and serve the app over a fresh, empty store.
async fn start_server() -> anyhow::Result<TestApp> {
    let store = MemoryVillaStore::new();
    let state = ServerState { villas: Arc::new(VillaService::new(store)) };

    let app: Router = routes::build_router(state, cors());
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("server error: {}", e);
        }
    });

    Ok(TestApp { base_url })
}

fn client() -> reqwest::Client {
    reqwest::Client::new()
}

#[tokio::test]
async fn e2e_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().get(format!("{}/health", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_create_list_get() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    // empty store lists as an empty array
    let res = c.get(format!("{}/villa", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<serde_json::Value>().await?, json!([]));

    // first create gets id 1 and a Location header
    let res = c
        .post(format!("{}/villa", app.base_url))
        .json(&json!({"name": "Pool House"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let location = res
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    assert_eq!(location.as_deref(), Some("/villa/1"));
    let created = res.json::<serde_json::Value>().await?;
    assert_eq!(created, json!({"id": 1, "name": "Pool House"}));

    // second create gets max + 1
    let res = c
        .post(format!("{}/villa", app.base_url))
        .json(&json!({"name": "Beach House"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    assert_eq!(res.json::<serde_json::Value>().await?["id"], 2);

    // list is in insertion order
    let res = c.get(format!("{}/villa", app.base_url)).send().await?;
    let list = res.json::<serde_json::Value>().await?;
    assert_eq!(
        list,
        json!([
            {"id": 1, "name": "Pool House"},
            {"id": 2, "name": "Beach House"}
        ])
    );

    // get returns the stored name
    let res = c.get(format!("{}/villa/1", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(
        res.json::<serde_json::Value>().await?,
        json!({"id": 1, "name": "Pool House"})
    );
    Ok(())
}

#[tokio::test]
async fn e2e_get_rejects_bad_ids() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    for id in ["0", "-5"] {
        let res = c.get(format!("{}/villa/{}", app.base_url, id)).send().await?;
        assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST, "id {}", id);
        let body = res.json::<serde_json::Value>().await?;
        assert!(body["error"].is_string());
    }

    let res = c.get(format!("{}/villa/999", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn e2e_create_validation_and_conflict() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    // missing name
    let res = c
        .post(format!("{}/villa", app.base_url))
        .json(&json!({}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);

    // empty name
    let res = c
        .post(format!("{}/villa", app.base_url))
        .json(&json!({"name": ""}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);

    let res = c
        .post(format!("{}/villa", app.base_url))
        .json(&json!({"name": "Pool House"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);

    // duplicate name, case-insensitive
    let res = c
        .post(format!("{}/villa", app.base_url))
        .json(&json!({"name": "pool house"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn e2e_update_and_patch() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let res = c
        .post(format!("{}/villa", app.base_url))
        .json(&json!({"name": "Old Name"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);

    // path/body id mismatch
    let res = c
        .put(format!("{}/villa/1", app.base_url))
        .json(&json!({"id": 2, "name": "X"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);

    // absent record
    let res = c
        .put(format!("{}/villa/42", app.base_url))
        .json(&json!({"id": 42, "name": "X"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);

    // successful rename returns no content
    let res = c
        .put(format!("{}/villa/1", app.base_url))
        .json(&json!({"id": 1, "name": "New Name"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::NO_CONTENT);

    let res = c.get(format!("{}/villa/1", app.base_url)).send().await?;
    assert_eq!(res.json::<serde_json::Value>().await?["name"], "New Name");

    // patch a missing record
    let res = c
        .patch(format!("{}/villa/42", app.base_url))
        .json(&json!({"name": "X"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);

    // patch to an empty name is rejected, record untouched
    let res = c
        .patch(format!("{}/villa/1", app.base_url))
        .json(&json!({"name": "  "}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);

    let res = c
        .patch(format!("{}/villa/1", app.base_url))
        .json(&json!({"name": "Patched Name"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::NO_CONTENT);

    let res = c.get(format!("{}/villa", app.base_url)).send().await?;
    assert_eq!(
        res.json::<serde_json::Value>().await?,
        json!([{"id": 1, "name": "Patched Name"}])
    );
    Ok(())
}

#[tokio::test]
async fn e2e_delete() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let res = c
        .post(format!("{}/villa", app.base_url))
        .json(&json!({"name": "Short Lived"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);

    let res = c.delete(format!("{}/villa/0", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);

    let res = c.delete(format!("{}/villa/1", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NO_CONTENT);

    let res = c.get(format!("{}/villa/1", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);

    let res = c.delete(format!("{}/villa/1", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}
