#![allow(dead_code)]

use alias_shortener::application::services::{AliasSettings, AuthService, UrlService};
use alias_shortener::domain::entities::{NewShortUrl, NewUser, ShortUrl, User};
use alias_shortener::domain::repositories::{
    HealthCheck, UrlGetter, UrlRemover, UrlSaver, UserFinder, UserRegistrar,
};
use alias_shortener::error::AppError;
use alias_shortener::infrastructure::security::{PasswordHasher, TokenIssuer};
use alias_shortener::routes::app_router;
use alias_shortener::state::AppState;
use async_trait::async_trait;
use axum::Router;
use axum_test::TestServer;
use chrono::Utc;
use serde_json::{Value, json};
use sqlx::PgPool;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use uuid::Uuid;

pub const TEST_JWT_SECRET: &str = "test-jwt-secret-0123456789";
pub const TEST_BCRYPT_COST: u32 = 4;

/// In-memory store with the same uniqueness and case rules as the
/// PostgreSQL repositories.
#[derive(Default)]
pub struct MemoryStore {
    urls: Mutex<Vec<ShortUrl>>,
    users: Mutex<Vec<User>>,
    down: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Makes every health check fail.
    pub fn set_down(&self, down: bool) {
        self.down.store(down, Ordering::SeqCst);
    }

    pub fn url_count(&self) -> usize {
        self.urls.lock().unwrap().len()
    }

    pub fn find(&self, alias: &str) -> Option<ShortUrl> {
        self.urls
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.alias == alias)
            .cloned()
    }
}

#[async_trait]
impl UrlSaver for MemoryStore {
    async fn save(&self, new_url: NewShortUrl) -> Result<Uuid, AppError> {
        let mut urls = self.urls.lock().unwrap();

        if urls.iter().any(|u| u.alias == new_url.alias) {
            return Err(AppError::AliasExists {
                alias: new_url.alias,
            });
        }

        let id = Uuid::new_v4();
        urls.push(ShortUrl {
            id,
            alias: new_url.alias,
            target: new_url.target,
            creator: new_url.creator,
            created_at: Utc::now(),
        });

        Ok(id)
    }
}

#[async_trait]
impl UrlGetter for MemoryStore {
    async fn get_url(&self, alias: &str) -> Result<String, AppError> {
        self.find(alias)
            .map(|u| u.target)
            .ok_or_else(|| AppError::UrlNotFound {
                alias: alias.to_string(),
            })
    }

    async fn find_by_alias(&self, alias: &str) -> Result<Option<ShortUrl>, AppError> {
        Ok(self.find(alias))
    }
}

#[async_trait]
impl UrlRemover for MemoryStore {
    async fn delete_url(&self, alias: &str, creator: Uuid) -> Result<bool, AppError> {
        let mut urls = self.urls.lock().unwrap();

        let lowered = alias.to_lowercase();
        let variants: Vec<&ShortUrl> = urls
            .iter()
            .filter(|u| u.alias.to_lowercase() == lowered)
            .collect();

        if !variants.is_empty() && !variants.iter().any(|u| u.alias == alias) {
            return Err(AppError::CaseMismatch {
                alias: alias.to_string(),
            });
        }

        let before = urls.len();
        urls.retain(|u| !(u.alias == alias && u.creator == creator));

        if urls.len() == before {
            return Err(AppError::AliasNotFound {
                alias: alias.to_string(),
            });
        }

        Ok(true)
    }
}

#[async_trait]
impl UserRegistrar for MemoryStore {
    async fn create_user(&self, new_user: NewUser) -> Result<User, AppError> {
        let mut users = self.users.lock().unwrap();

        if users.iter().any(|u| u.username == new_user.username) {
            return Err(AppError::UsernameTaken {
                username: new_user.username,
            });
        }

        let user = User {
            id: new_user.id_or_generate(),
            username: new_user.username,
            password_digest: new_user.password_digest,
        };
        users.push(user.clone());

        Ok(user)
    }
}

#[async_trait]
impl UserFinder for MemoryStore {
    async fn get_user_by_username(&self, username: &str) -> Result<User, AppError> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.username == username)
            .cloned()
            .ok_or_else(|| AppError::UserNotFound {
                username: username.to_string(),
            })
    }
}

#[async_trait]
impl HealthCheck for MemoryStore {
    async fn ping(&self) -> Result<(), String> {
        if self.down.load(Ordering::SeqCst) {
            Err("connection refused".to_string())
        } else {
            Ok(())
        }
    }
}

pub fn test_token_issuer() -> TokenIssuer {
    TokenIssuer::new(TEST_JWT_SECRET, chrono::Duration::hours(24))
}

pub fn create_test_state(store: Arc<MemoryStore>) -> AppState {
    let url_service = UrlService::new(
        store.clone(),
        store.clone(),
        store.clone(),
        AliasSettings::default(),
    );

    let hasher = PasswordHasher::new(TEST_BCRYPT_COST).unwrap();
    let auth_service = AuthService::new(store.clone(), store.clone(), hasher, test_token_issuer());

    AppState::new(Arc::new(url_service), Arc::new(auth_service), store)
}

pub fn create_test_app(store: Arc<MemoryStore>) -> Router {
    app_router(create_test_state(store), Duration::from_secs(4))
}

pub fn create_test_server(store: Arc<MemoryStore>) -> TestServer {
    TestServer::new(create_test_app(store)).unwrap()
}

/// Registers `username` and returns its id.
pub async fn register(server: &TestServer, username: &str, password: &str) -> Uuid {
    let response = server
        .post("/register")
        .json(&json!({ "username": username, "password": password }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);

    let body: Value = response.json();
    body["user_id"].as_str().unwrap().parse().unwrap()
}

/// Logs in and returns the bearer token.
pub async fn login(server: &TestServer, username: &str, password: &str) -> String {
    let response = server
        .post("/login")
        .json(&json!({ "username": username, "password": password }))
        .await;

    response.assert_status_ok();

    let body: Value = response.json();
    body["token"].as_str().unwrap().to_string()
}

/// Registers and logs in, returning the bearer token.
pub async fn register_and_login(server: &TestServer, username: &str) -> String {
    register(server, username, "password123").await;
    login(server, username, "password123").await
}

pub async fn create_test_user(pool: &PgPool, username: &str) -> Uuid {
    sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO users (id, username, password) VALUES ($1, $2, 'digest') RETURNING id",
    )
    .bind(Uuid::new_v4())
    .bind(username)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_url(pool: &PgPool, alias: &str, target: &str, creator: Uuid) {
    sqlx::query("INSERT INTO url (id, alias, url, creator) VALUES ($1, $2, $3, $4)")
        .bind(Uuid::new_v4())
        .bind(alias)
        .bind(target)
        .bind(creator)
        .execute(pool)
        .await
        .unwrap();
}
