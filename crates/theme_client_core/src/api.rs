//! HTTP client for the theme endpoints.

use std::time::Duration;

use crate::error::{ClientError, Result};
use crate::models::{CreateThemeBody, ThemeConfig};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct ThemeApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ThemeApiClient {
    /// `base_url` is the server origin, e.g. `http://localhost:8000`.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self::with_client(base_url, http))
    }

    pub fn with_client(base_url: impl Into<String>, http: reqwest::Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST /api/themes -> saved record with `id` and `savedAt`
    pub async fn create_theme(&self, accent_color: &str, primary_color: &str) -> Result<ThemeConfig> {
        let url = format!("{}/api/themes", self.base_url);
        let body = CreateThemeBody { accent_color, primary_color };
        let resp = self.http.post(&url).json(&body).send().await?;
        decode(resp).await
    }

    /// GET /api/themes
    pub async fn list_themes(&self) -> Result<Vec<ThemeConfig>> {
        let url = format!("{}/api/themes", self.base_url);
        let resp = self.http.get(&url).send().await?;
        decode(resp).await
    }

    /// GET /api/themes/:id
    pub async fn get_theme(&self, id: &str) -> Result<ThemeConfig> {
        let url = format!("{}/api/themes/{}", self.base_url, urlencoding::encode(id));
        let resp = self.http.get(&url).send().await?;
        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound);
        }
        decode(resp).await
    }
}

async fn decode<T: serde::de::DeserializeOwned>(resp: reqwest::Response) -> Result<T> {
    let status = resp.status();
    let text = resp.text().await?;
    if !status.is_success() {
        let message = serde_json::from_str::<serde_json::Value>(&text)
            .ok()
            .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
            .unwrap_or(text);
        return Err(ClientError::Status {
            status: status.as_u16(),
            message,
        });
    }
    Ok(serde_json::from_str(&text)?)
}
