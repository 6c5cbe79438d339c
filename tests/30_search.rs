mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};
use uuid::Uuid;

use restaurant_api::services::SearchQuery;

#[tokio::test]
async fn search_relays_provider_payload() -> Result<()> {
    let server = common::spawn_server().await?;

    let res = server
        .get(Uuid::new_v4(), "/search?term=tacos&location=Boston")
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body = res.json::<Value>().await?;
    assert_eq!(body["search"]["businesses"][0]["name"], "Taco Spot");
    assert_eq!(body["search"]["total"], 1);
    assert_eq!(body["search"]["region"]["center"]["latitude"], json!(40.7));

    assert_eq!(
        server.search.queries(),
        vec![SearchQuery {
            term: Some("tacos".to_string()),
            location: Some("Boston".to_string()),
        }]
    );
    Ok(())
}

#[tokio::test]
async fn search_forwards_absent_parameters_as_absent() -> Result<()> {
    let server = common::spawn_server().await?;

    let res = server.get(Uuid::new_v4(), "/search?term=ramen").send().await?;
    assert_eq!(res.status(), StatusCode::OK);

    assert_eq!(
        server.search.queries(),
        vec![SearchQuery {
            term: Some("ramen".to_string()),
            location: None,
        }]
    );
    Ok(())
}

#[tokio::test]
async fn provider_failure_is_bad_gateway() -> Result<()> {
    let server = common::spawn_server_with(common::StubSearch::failing(500)).await?;

    let res = server
        .get(Uuid::new_v4(), "/search?term=tacos&location=Boston")
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_GATEWAY);

    let body = res.json::<Value>().await?;
    assert_eq!(body, json!({ "message": "search provider request failed" }));
    assert!(!body.to_string().contains("provider exploded"));
    Ok(())
}

#[tokio::test]
async fn search_requires_token() -> Result<()> {
    let server = common::spawn_server().await?;

    let res = server.client.get(server.url("/search?term=tacos")).send().await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    assert!(server.search.queries().is_empty());
    Ok(())
}
