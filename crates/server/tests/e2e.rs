use std::net::SocketAddr;

use axum::Router;
use migration::MigratorTrait;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use server::routes;
use server::ApiServices;

struct TestApp {
    base_url: String,
}

impl TestApp {
    fn url(&self, path: &str) -> String { format!("{}{}", self.base_url, path) }
}

async fn serve(services: ApiServices) -> anyhow::Result<TestApp> {
    let app: Router = routes::build_router(services, CorsLayer::very_permissive());
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

/// Router over fresh in-memory stores.
async fn start_server() -> anyhow::Result<TestApp> {
    serve(ApiServices::in_memory()).await
}

/// Router over PostgreSQL, or `None` when DB tests are skipped.
async fn start_db_server() -> Option<TestApp> {
    if std::env::var("SKIP_DB_TESTS").is_ok() || std::env::var("DATABASE_URL").is_err() {
        eprintln!("DATABASE_URL missing or SKIP_DB_TESTS set; skip db e2e test");
        return None;
    }
    let db = models::db::connect().await.ok()?;
    if let Err(e) = migration::Migrator::up(&db, None).await {
        eprintln!("skip: migrate up failed: {}", e);
        return None;
    }
    serve(ApiServices::from_db(db)).await.ok()
}

async fn post(c: &reqwest::Client, url: String, data: Value) -> anyhow::Result<Value> {
    let res = c.post(url).json(&json!({ "data": data })).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    Ok(res.json().await?)
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = reqwest::get(app.url("/health")).await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_category_crud_round_trip() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    let created = post(&c, app.url("/api/category"), json!({"type": "COMPUTER", "title": "Laptops"})).await?;
    assert_eq!(created["status"], "OK");
    assert!(created.get("error").is_none());
    let id = created["data"]["id"].as_i64().unwrap();

    let read: Value = c.get(app.url(&format!("/api/category/{id}"))).send().await?.json().await?;
    assert_eq!(read["data"], created["data"]);

    let updated: Value = c
        .put(app.url("/api/category"))
        .json(&json!({"data": {"id": id, "type": "CLOTHING"}}))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(updated["data"]["type"], "CLOTHING");
    assert_eq!(updated["data"]["title"], "");

    let deleted: Value = c.delete(app.url(&format!("/api/category/{id}"))).send().await?.json().await?;
    assert_eq!(deleted, json!({"status": "OK"}));

    let res = c.get(app.url(&format!("/api/category/{id}"))).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let gone: Value = res.json().await?;
    assert_eq!(gone, json!({"status": "ERROR", "message": "데이터 없음", "error": "NOT_FOUND"}));
    Ok(())
}

#[tokio::test]
async fn e2e_missing_payload_and_missing_id() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    let res: Value = c.post(app.url("/api/item")).json(&json!({})).send().await?.json().await?;
    assert_eq!(res["error"], "MISSING_PAYLOAD");
    assert_eq!(res["message"], "데이터 없음");

    let res: Value = c
        .put(app.url("/api/user"))
        .json(&json!({"data": {"account": "nobody"}}))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(res["error"], "VALIDATION");
    assert_eq!(res["message"], "id required");
    Ok(())
}

#[tokio::test]
async fn e2e_malformed_body_is_rejected_by_extractor() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = reqwest::Client::new()
        .post(app.url("/api/category"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await?;
    assert!(res.status().is_client_error());
    Ok(())
}

#[tokio::test]
async fn e2e_search_pages() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();
    for i in 0..5 {
        post(&c, app.url("/api/category"), json!({"type": "T", "title": format!("t{i}")})).await?;
    }

    let page: Value = c.get(app.url("/api/category?page=1&size=2")).send().await?.json().await?;
    assert_eq!(page["pagination"], json!({"total_pages": 3, "total_elements": 5, "current_page": 1, "current_elements": 2}));
    assert_eq!(page["data"].as_array().map(Vec::len), Some(2));

    let past: Value = c.get(app.url("/api/category?page=9&size=2")).send().await?.json().await?;
    assert_eq!(past["error"], "VALIDATION");
    Ok(())
}

#[tokio::test]
async fn e2e_user_order_info_tree() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    let user = post(&c, app.url("/api/user"), json!({"account": "u1", "password": "pw", "status": "UNREGISTERED"})).await?;
    let user_id = user["data"]["id"].as_i64().unwrap();
    assert_eq!(user["data"]["status"], "REGISTERED");

    let mut item_ids = Vec::new();
    for name in ["i1", "i2", "i3"] {
        let item = post(
            &c,
            app.url("/api/item"),
            json!({"status": "REGISTERED", "name": name, "title": name, "content": "", "price": "1000.00"}),
        )
        .await?;
        item_ids.push(item["data"]["id"].as_i64().unwrap());
    }

    let group = |total: &str| json!({"status": "COMPLETE", "order_type": "ALL", "payment_type": "CARD", "total_price": total, "user_id": user_id});
    let g1 = post(&c, app.url("/api/orderGroup"), group("2000.00")).await?["data"]["id"].as_i64().unwrap();
    let g2 = post(&c, app.url("/api/orderGroup"), group("1000.00")).await?["data"]["id"].as_i64().unwrap();

    for (g, item) in [(g1, item_ids[0]), (g1, item_ids[1]), (g2, item_ids[2])] {
        let line = json!({"status": "WAITING", "quantity": 1, "total_price": "1000.00", "order_group_id": g, "item_id": item});
        let res = post(&c, app.url("/api/orderDetail"), line).await?;
        assert_eq!(res["status"], "OK");
    }

    let info: Value = c.get(app.url(&format!("/api/user/{user_id}/orderInfo"))).send().await?.json().await?;
    assert_eq!(info["status"], "OK");
    let user = &info["data"]["user_api_response"];
    assert_eq!(user["account"], "u1");
    let groups = user["order_group_api_response_list"].as_array().unwrap();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0]["id"], g1);
    let names: Vec<&str> = groups[0]["item_api_response_list"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|i| i["name"].as_str())
        .collect();
    assert_eq!(names, vec!["i1", "i2"]);
    assert_eq!(groups[1]["item_api_response_list"][0]["name"], "i3");

    let missing: Value = c.get(app.url("/api/user/999/orderInfo")).send().await?.json().await?;
    assert_eq!(missing["error"], "NOT_FOUND");

    let res = c.delete(app.url(&format!("/api/item/{}", item_ids[0]))).send().await?;
    assert_eq!(res.status(), HttpStatusCode::INTERNAL_SERVER_ERROR);
    let again: Value = c.get(app.url(&format!("/api/user/{user_id}/orderInfo"))).send().await?.json().await?;
    assert_eq!(again["status"], "OK");

    let deleted: Value = c.delete(app.url(&format!("/api/user/{user_id}"))).send().await?.json().await?;
    assert_eq!(deleted["status"], "OK");
    let orphan: Value = c.get(app.url(&format!("/api/orderGroup/{g1}"))).send().await?.json().await?;
    assert_eq!(orphan["error"], "NOT_FOUND");
    Ok(())
}

#[tokio::test]
async fn e2e_openapi_document_is_served() -> anyhow::Result<()> {
    let app = start_server().await?;
    let doc: Value = reqwest::get(app.url("/api-docs/openapi.json")).await?.json().await?;
    assert!(doc["paths"]["/api/user/{id}/orderInfo"].is_object());
    Ok(())
}

#[tokio::test]
async fn e2e_db_category_round_trip() -> anyhow::Result<()> {
    let Some(app) = start_db_server().await else { return Ok(()) };
    let c = reqwest::Client::new();

    let created = post(&c, app.url("/api/category"), json!({"type": "E2E", "title": "db round trip"})).await?;
    let id = created["data"]["id"].as_i64().unwrap();
    let read: Value = c.get(app.url(&format!("/api/category/{id}"))).send().await?.json().await?;
    assert_eq!(read["data"], created["data"]);

    let deleted: Value = c.delete(app.url(&format!("/api/category/{id}"))).send().await?.json().await?;
    assert_eq!(deleted["status"], "OK");
    Ok(())
}
