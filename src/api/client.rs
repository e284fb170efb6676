//! HTTP client for the admin backend's read API.

use async_trait::async_trait;
use chrono::Utc;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde::de::DeserializeOwned;

use crate::buttons::{ButtonNode, ButtonStore, FlatButton, StoreError};
use crate::core::config;
use crate::core::{AppError, AppResult};

/// Client for the backend's `GET /masters/` and `GET /buttons/` endpoints.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Wraps an existing reqwest client; `base_url` with or without a
    /// trailing slash.
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    /// Builds a client from the environment-backed configuration: token
    /// header when a token is set, fixed short timeout, stable User-Agent.
    pub fn from_config() -> AppResult<Self> {
        let mut headers = HeaderMap::new();
        let token = config::USER_TOKEN.as_str();
        if !token.is_empty() {
            let value = HeaderValue::from_str(&format!("Token {token}"))
                .map_err(|e| AppError::Validation(format!("invalid USER_TOKEN: {e}")))?;
            headers.insert(AUTHORIZATION, value);
        }

        let http = reqwest::Client::builder()
            .user_agent(concat!("knopka/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .timeout(config::api::timeout())
            .build()?;

        Ok(Self::new(http, config::API_BASE_URL.as_str()))
    }

    async fn get_json<T: DeserializeOwned>(&self, resource: &str) -> Result<T, StoreError> {
        let url = format!("{}/{resource}/", self.base_url);
        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(StoreError::Http(response.status()));
        }
        Ok(response.json().await?)
    }
}

#[async_trait]
impl ButtonStore for ApiClient {
    async fn masters(&self) -> Result<Vec<ButtonNode>, StoreError> {
        self.get_json("masters").await
    }

    async fn buttons(&self) -> Result<Vec<FlatButton>, StoreError> {
        let rows: Vec<FlatButton> = self.get_json("buttons").await?;

        // The store enforces these at write time; a violation here means
        // the backend data is already pathological. Serve it anyway.
        let now = Utc::now();
        for row in &rows {
            if let Err(violation) = row.check_constraints(now) {
                log::warn!("Store row {} violates write constraints: {}", row.id, violation);
            }
        }

        Ok(rows)
    }
}
