#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;
use uuid::Uuid;

use restaurant_api::auth::TokenKeys;
use restaurant_api::database::{
    MemoryRestaurantStore, NewRestaurant, Restaurant, RestaurantChanges, RestaurantStore, StoreError,
};
use restaurant_api::services::{SearchClient, SearchError, SearchQuery};
use restaurant_api::{app, AppState};

pub const TEST_SECRET: &str = "integration-test-secret";

/// Memory store that counts every call, so tests can prove a request never
/// reached persistence
#[derive(Clone, Default)]
pub struct CountingStore {
    inner: MemoryRestaurantStore,
    calls: Arc<AtomicUsize>,
    fail_health: Arc<AtomicBool>,
}

impl CountingStore {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Make `health_check` report the store as unreachable
    pub fn set_health_failing(&self, failing: bool) {
        self.fail_health.store(failing, Ordering::SeqCst);
    }

    pub async fn len(&self) -> usize {
        self.inner.len().await
    }

    fn tick(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl RestaurantStore for CountingStore {
    async fn find_by_owner(&self, owner: Uuid) -> Result<Vec<Restaurant>, StoreError> {
        self.tick();
        self.inner.find_by_owner(owner).await
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Restaurant>, StoreError> {
        self.tick();
        self.inner.find_by_id(id).await
    }

    async fn create(&self, restaurant: NewRestaurant) -> Result<Restaurant, StoreError> {
        self.tick();
        self.inner.create(restaurant).await
    }

    async fn update(&self, id: Uuid, changes: RestaurantChanges) -> Result<Restaurant, StoreError> {
        self.tick();
        self.inner.update(id, changes).await
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        self.tick();
        self.inner.delete(id).await
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        if self.fail_health.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("connection refused".to_string()));
        }
        self.inner.health_check().await
    }
}

/// Search provider double: answers with a fixed payload or fails with a status
#[derive(Default)]
pub struct StubSearch {
    pub fail_with: Option<u16>,
    pub queries: Mutex<Vec<SearchQuery>>,
}

impl StubSearch {
    pub fn failing(status: u16) -> Self {
        Self {
            fail_with: Some(status),
            ..Default::default()
        }
    }

    pub fn queries(&self) -> Vec<SearchQuery> {
        self.queries.lock().map(|q| q.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl SearchClient for StubSearch {
    async fn search(&self, query: &SearchQuery) -> Result<Value, SearchError> {
        if let Ok(mut queries) = self.queries.lock() {
            queries.push(query.clone());
        }

        match self.fail_with {
            Some(status) => Err(SearchError::Status {
                status,
                body: "provider exploded".to_string(),
            }),
            None => Ok(json!({
                "total": 1,
                "businesses": [{ "name": "Taco Spot", "rating": 4.5 }],
                "region": { "center": { "latitude": 40.7, "longitude": -73.9 } }
            })),
        }
    }
}

pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    pub store: CountingStore,
    pub search: Arc<StubSearch>,
    pub tokens: TokenKeys,
    pub client: reqwest::Client,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Bearer token for `user`
    pub fn token(&self, user: Uuid) -> String {
        self.tokens.issue(user).expect("token")
    }

    pub fn get(&self, user: Uuid, path: &str) -> reqwest::RequestBuilder {
        self.client.get(self.url(path)).bearer_auth(self.token(user))
    }

    pub fn post(&self, user: Uuid, path: &str) -> reqwest::RequestBuilder {
        self.client.post(self.url(path)).bearer_auth(self.token(user))
    }

    pub fn patch(&self, user: Uuid, path: &str) -> reqwest::RequestBuilder {
        self.client.patch(self.url(path)).bearer_auth(self.token(user))
    }

    pub fn delete(&self, user: Uuid, path: &str) -> reqwest::RequestBuilder {
        self.client.delete(self.url(path)).bearer_auth(self.token(user))
    }

    /// Create a restaurant as `user` and return its JSON
    pub async fn create_restaurant(&self, user: Uuid, fields: Value) -> Result<Value> {
        let res = self
            .post(user, "/restaurants")
            .json(&json!({ "restaurant": fields }))
            .send()
            .await?;
        anyhow::ensure!(res.status() == StatusCode::CREATED, "create failed: {}", res.status());

        let body = res.json::<Value>().await?;
        Ok(body["restaurant"].clone())
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let deadline = Instant::now() + timeout;
        loop {
            if Instant::now() > deadline {
                break;
            }
            if let Ok(resp) = self.client.get(self.url("/health")).send().await {
                if resp.status() == StatusCode::OK {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        anyhow::bail!("server did not become ready on {} within {:?}", self.base_url, timeout)
    }
}

pub async fn spawn_server() -> Result<TestServer> {
    spawn_server_with(StubSearch::default()).await
}

/// Boot the app in-process on a free port with a fresh store
pub async fn spawn_server_with(search: StubSearch) -> Result<TestServer> {
    let port = portpicker::pick_unused_port().context("failed to pick free port")?;
    let base_url = format!("http://127.0.0.1:{}", port);

    let store = CountingStore::default();
    let search = Arc::new(search);
    let tokens = TokenKeys::from_secret(TEST_SECRET, 1)?;

    let state = AppState::new(Arc::new(store.clone()), search.clone(), tokens.clone());
    let router = app(state, CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
        .await
        .with_context(|| format!("failed to bind port {}", port))?;
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, router).await {
            tracing::error!("test server error: {}", e);
        }
    });

    let server = TestServer {
        port,
        base_url,
        store,
        search,
        tokens,
        client: reqwest::Client::new(),
    };
    server.wait_ready(Duration::from_secs(10)).await?;
    Ok(server)
}
