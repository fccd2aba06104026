use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;

use crate::error::ApiError;
use crate::models::ThemeRecord;
use crate::AppState;

const MISSING_FIELDS: &str = "Missing required fields: accentColor, primaryColor";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateThemeRequest {
    pub accent_color: Option<String>,
    pub primary_color: Option<String>,
}

impl CreateThemeRequest {
    /// Both colors, or a validation error if either is missing or empty.
    /// The color format itself is not checked.
    pub fn into_colors(self) -> Result<(String, String), ApiError> {
        match (self.accent_color, self.primary_color) {
            (Some(accent), Some(primary)) if !accent.is_empty() && !primary.is_empty() => {
                Ok((accent, primary))
            }
            _ => Err(ApiError::Validation(MISSING_FIELDS.to_string())),
        }
    }
}

// POST /api/themes
pub async fn create_theme(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<ThemeRecord>), ApiError> {
    // Parsed regardless of Content-Type.
    let payload: CreateThemeRequest = serde_json::from_slice(&body).map_err(|e| {
        tracing::debug!("Rejected theme payload: {}", e);
        ApiError::Validation(format!("Invalid request body: {}", e))
    })?;

    let (accent_color, primary_color) = payload.into_colors()?;

    let record = ThemeRecord::new(accent_color, primary_color);
    state.store.append(record.clone()).await;

    tracing::info!(
        "Saved theme {} (accent={}, primary={})",
        record.id,
        record.accent_color,
        record.primary_color
    );

    Ok((StatusCode::CREATED, Json(record)))
}

// GET /api/themes
pub async fn list_themes(State(state): State<AppState>) -> Json<Vec<ThemeRecord>> {
    Json(state.store.list().await)
}

// GET /api/themes/:id
pub async fn get_theme(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ThemeRecord>, ApiError> {
    match state.store.find_by_id(&id).await {
        Some(record) => Ok(Json(record)),
        None => {
            tracing::debug!("Theme {} not found", id);
            Err(ApiError::NotFound("Theme not found".to_string()))
        }
    }
}
