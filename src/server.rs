//! HTTP surface for the landing page front end.
//!
//! Every request runs inside the scope of the shared [`LanguageStore`], so
//! handlers resolve strings through `i18n::t` like any other consumer.

use crate::config::Config;
use crate::content::LandingPage;
use crate::gemini::GeminiClient;
use crate::i18n::{
    self, active_language, set_active_language, Catalog, CatalogValidator, Language,
    LanguageConfig, LanguageRegistry, LanguageStore, LookupMetrics, MetricsReport, StoreError,
};
use crate::lab::{AiLab, LabError};
use anyhow::{Context, Result};
use axum::{
    extract::{Path, Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct AppState {
    pub store: LanguageStore,
    pub lab: AiLab,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            store: LanguageStore::new(config.default_language),
            lab: AiLab::new(GeminiClient::new(config)),
        }
    }
}

// ==================== Errors ====================

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("{0}")]
    BadRequest(String),

    #[error("{message}")]
    Lab { status: StatusCode, message: String },
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Lab { status, .. } => *status,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(ErrorBody { error: self.to_string() })).into_response()
    }
}

/// Turn a lab failure into a localized banner.
fn lab_error(e: LabError) -> Result<ApiError, StoreError> {
    let status = match e {
        LabError::Busy => StatusCode::CONFLICT,
        LabError::EmptyInput | LabError::InvalidImage(_) => StatusCode::BAD_REQUEST,
        LabError::EditFailed(_) => StatusCode::BAD_GATEWAY,
        LabError::ChatFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    warn!("AI lab request failed: {}", e);
    Ok(ApiError::Lab {
        status,
        message: i18n::t(e.message_key())?.to_string(),
    })
}

// ==================== Bodies ====================

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LanguageBody {
    pub language: Language,
}

#[derive(Debug, Deserialize)]
pub struct SetLanguageRequest {
    pub language: String,
}

#[derive(Debug, Serialize)]
pub struct LanguagesResponse {
    pub active: Language,
    pub languages: Vec<&'static LanguageConfig>,
}

#[derive(Debug, Serialize)]
pub struct TranslationResponse {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct EditImageRequest {
    pub image: String,
    pub instruction: String,
}

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    pub prompt: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LabResponse {
    pub result: String,
}

// ==================== Router ====================

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/languages", get(list_languages))
        .route("/api/language", get(get_language).put(put_language))
        .route("/api/t/:key", get(translate_key))
        .route("/api/dictionary", get(dictionary))
        .route("/api/page", get(page))
        .route("/api/metrics", get(metrics))
        .route("/api/lab/edit-image", post(edit_image))
        .route("/api/lab/ask", post(ask))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            provide_language_store,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Install the shared store for the duration of the request.
async fn provide_language_store(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    state.store.scope(next.run(request)).await
}

/// Validate the catalog, bind, and serve until the process is stopped.
pub async fn run(config: Config) -> Result<()> {
    let report = CatalogValidator::validate_builtin();
    for error in &report.errors {
        warn!("Catalog error: {}", error);
    }
    for warning in &report.warnings {
        warn!("Catalog warning: {}", warning);
    }

    if config.gemini_api_key.is_empty() {
        warn!("No Gemini API key configured; AI lab calls will fail at request time");
    }

    let app = router(AppState::new(&config));
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!(
        "Serving on {} (default language: {})",
        addr, config.default_language
    );
    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}

// ==================== Handlers ====================

async fn health() -> &'static str {
    "ok"
}

async fn list_languages() -> Result<Json<LanguagesResponse>, ApiError> {
    Ok(Json(LanguagesResponse {
        active: active_language()?,
        languages: LanguageRegistry::get().list_all(),
    }))
}

async fn get_language() -> Result<Json<LanguageBody>, ApiError> {
    Ok(Json(LanguageBody {
        language: active_language()?,
    }))
}

async fn put_language(
    Json(request): Json<SetLanguageRequest>,
) -> Result<Json<LanguageBody>, ApiError> {
    let language = Language::from_code(&request.language)
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;
    set_active_language(language)?;
    Ok(Json(LanguageBody { language }))
}

async fn translate_key(Path(key): Path<String>) -> Result<Json<TranslationResponse>, ApiError> {
    let value = i18n::t(&key)?.to_string();
    Ok(Json(TranslationResponse { key, value }))
}

async fn dictionary() -> Result<Json<BTreeMap<&'static str, &'static str>>, ApiError> {
    let language = active_language()?;
    let entries: BTreeMap<&'static str, &'static str> = Catalog::global()
        .dictionary(language)
        .map(|dictionary| dictionary.iter().map(|(k, v)| (*k, *v)).collect())
        .unwrap_or_default();
    Ok(Json(entries))
}

async fn page() -> Result<Json<LandingPage>, ApiError> {
    let store = LanguageStore::current()?;
    Ok(Json(LandingPage::build(&store)))
}

async fn metrics() -> Json<MetricsReport> {
    Json(LookupMetrics::global().report())
}

async fn edit_image(
    State(state): State<AppState>,
    Json(request): Json<EditImageRequest>,
) -> Result<Json<LabResponse>, ApiError> {
    match state.lab.edit_image(&request.image, &request.instruction).await {
        Ok(result) => Ok(Json(LabResponse { result })),
        Err(e) => Err(lab_error(e)?),
    }
}

async fn ask(
    State(state): State<AppState>,
    Json(request): Json<AskRequest>,
) -> Result<Json<LabResponse>, ApiError> {
    match state.lab.ask(&request.prompt).await {
        Ok(result) => Ok(Json(LabResponse { result })),
        Err(e) => Err(lab_error(e)?),
    }
}
