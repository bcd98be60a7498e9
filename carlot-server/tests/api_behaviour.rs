use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt;

use carlot_core::SqliteCatalogRepository;
use carlot_server::infra::config::{Config, DatabaseConfig, ServerConfig};
use carlot_server::{AppState, create_router};

const BOUNDARY: &str = "carlot-test-boundary";

const EXPLORER_FIELDS: &[(&str, &str)] = &[
    ("manufacturer", "Ford"),
    ("bodystyle", "SUV"),
    ("model_name", "Explorer"),
    ("horsepower", "300"),
    ("torque", "310"),
    ("eco_rating", "6"),
    ("safety_rating", "8"),
    ("seats", "7"),
    ("year", "2020"),
    ("price", "32000"),
    ("distance", "30000"),
];

fn test_app(pool: SqlitePool) -> Router {
    let config = Config {
        server: ServerConfig {
            host: "127.0.0.1".into(),
            port: 0,
        },
        database: DatabaseConfig {
            path: PathBuf::from(":memory:"),
        },
    };
    let catalog = Arc::new(SqliteCatalogRepository::new(pool));
    create_router(AppState::new(catalog, Arc::new(config)))
}

fn multipart_body(fields: &[(&str, &str)], image: Option<&[u8]>) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; \
                 name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    if let Some(bytes) = image {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; \
                 name=\"image\"; filename=\"upload.jpg\"\r\n\
                 Content-Type: image/jpeg\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

fn listing_request(
    fields: &[(&str, &str)],
    image: Option<&[u8]>,
) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/v1/listings")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(multipart_body(fields, image)))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_json(response: axum::response::Response) -> Result<Value> {
    let bytes = response.into_body().collect().await?.to_bytes();
    Ok(serde_json::from_slice(&bytes)?)
}

#[sqlx::test(migrator = "carlot_core::MIGRATOR")]
async fn catalog_starts_empty(pool: SqlitePool) -> Result<()> {
    let app = test_app(pool);

    let response = app.oneshot(get("/api/v1/catalog")).await?;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await?;
    assert_eq!(json["status"], "success");
    assert_eq!(json["data"].as_array().unwrap().len(), 0);
    Ok(())
}

#[sqlx::test(migrator = "carlot_core::MIGRATOR")]
async fn create_listing_and_fetch_image_roundtrip(
    pool: SqlitePool,
) -> Result<()> {
    let app = test_app(pool);

    let response = app
        .clone()
        .oneshot(listing_request(EXPLORER_FIELDS, Some(b"abc")))
        .await?;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await?;
    assert_eq!(created["status"], "success");
    assert!(created["data"]["stock_id"].as_i64().unwrap() > 0);

    let response = app
        .clone()
        .oneshot(get("/api/v1/catalog?query=Explorer"))
        .await?;
    let json = body_json(response).await?;
    let listings = json["data"].as_array().unwrap();
    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0]["manufacturer"], "Ford");
    assert_eq!(listings[0]["bodystyle"], "SUV");
    assert_eq!(listings[0]["price"], 32000.0);

    let image_id = listings[0]["image_id"].as_i64().unwrap();
    let response = app.oneshot(get(&format!("/images/{image_id}"))).await?;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "image/jpeg");
    let bytes = response.into_body().collect().await?.to_bytes();
    assert_eq!(&bytes[..], b"abc");
    Ok(())
}

#[sqlx::test(migrator = "carlot_core::MIGRATOR")]
async fn listing_without_image_serves_not_found(
    pool: SqlitePool,
) -> Result<()> {
    let app = test_app(pool);

    let response = app
        .clone()
        .oneshot(listing_request(EXPLORER_FIELDS, None))
        .await?;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app.clone().oneshot(get("/api/v1/catalog")).await?;
    let json = body_json(response).await?;
    let image_id = json["data"][0]["image_id"].as_i64().unwrap();

    let response = app.oneshot(get(&format!("/images/{image_id}"))).await?;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[sqlx::test(migrator = "carlot_core::MIGRATOR")]
async fn unknown_image_is_not_found(pool: SqlitePool) -> Result<()> {
    let app = test_app(pool);

    let response = app.oneshot(get("/images/9999")).await?;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[sqlx::test(migrator = "carlot_core::MIGRATOR")]
async fn malformed_year_is_rejected(pool: SqlitePool) -> Result<()> {
    let app = test_app(pool);

    let mut fields = EXPLORER_FIELDS.to_vec();
    fields.iter_mut().find(|(n, _)| *n == "year").unwrap().1 = "20x0";

    let response = app.oneshot(listing_request(&fields, None)).await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await?;
    assert!(
        json["error"]["message"]
            .as_str()
            .unwrap()
            .contains("4-digit year")
    );
    Ok(())
}

#[sqlx::test(migrator = "carlot_core::MIGRATOR")]
async fn missing_form_field_is_rejected(pool: SqlitePool) -> Result<()> {
    let app = test_app(pool);

    let fields: Vec<_> = EXPLORER_FIELDS
        .iter()
        .copied()
        .filter(|(name, _)| *name != "manufacturer")
        .collect();

    let response = app.oneshot(listing_request(&fields, None)).await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[sqlx::test(migrator = "carlot_core::MIGRATOR")]
async fn seed_fleet_populates_catalog(pool: SqlitePool) -> Result<()> {
    let app = test_app(pool);

    let response = app.clone().oneshot(get("/api/v1/dev/seed-fleet")).await?;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await?;
    assert_eq!(json["data"]["created"], 10);

    let response = app.clone().oneshot(get("/api/v1/catalog")).await?;
    let json = body_json(response).await?;
    assert_eq!(json["data"].as_array().unwrap().len(), 10);

    // Reference data deduplicated across the fleet: three Toyota listings.
    let response = app.oneshot(get("/api/v1/catalog?query=Toy")).await?;
    let json = body_json(response).await?;
    assert_eq!(json["data"].as_array().unwrap().len(), 3);
    Ok(())
}

#[sqlx::test(migrator = "carlot_core::MIGRATOR")]
async fn seed_sample_creates_camry(pool: SqlitePool) -> Result<()> {
    let app = test_app(pool);

    let response = app.clone().oneshot(get("/api/v1/dev/seed-sample")).await?;
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(get("/api/v1/catalog?query=Camry")).await?;
    let json = body_json(response).await?;
    let listings = json["data"].as_array().unwrap();
    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0]["manufacturer"], "Toyota");
    assert_eq!(listings[0]["year"], "2020-01-01");
    Ok(())
}

#[sqlx::test(migrator = "carlot_core::MIGRATOR")]
async fn home_returns_carousel_content(pool: SqlitePool) -> Result<()> {
    let app = test_app(pool);

    let response = app.oneshot(get("/api/v1/home")).await?;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await?;
    let items = json["data"].as_array().unwrap();
    assert_eq!(items.len(), 3);
    assert!(items[0]["caption"].as_str().unwrap().contains("Qashqai"));
    Ok(())
}
