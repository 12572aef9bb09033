use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use serde::Deserialize;
use tracing::{error, info};

use super::domain::PlayerSalary;
use super::fetcher::DocumentFetcher;
use super::SalaryGenerator;
use crate::error::AppError;

pub const GENERATE_SALARIES_PATH: &str = "/api/admin/generate-player-salaries";

/// Body accepted by the salary generation endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateSalariesRequest {
    #[serde(default, alias = "cricinfoMatchUrl")]
    pub match_url: Option<String>,
}

/// Shared handler state: the pipeline plus the accepted source domain.
pub struct SalaryRouteState<F> {
    pub generator: SalaryGenerator<F>,
    pub source_domain: String,
}

impl<F> SalaryRouteState<F> {
    pub fn new(generator: SalaryGenerator<F>, source_domain: impl Into<String>) -> Self {
        Self {
            generator,
            source_domain: source_domain.into(),
        }
    }

    fn validate(&self, request: GenerateSalariesRequest) -> Result<String, AppError> {
        validate_match_url(request.match_url.as_deref(), &self.source_domain)
    }
}

/// Trims the URL and requires it to reference the configured source domain.
pub fn validate_match_url(match_url: Option<&str>, source_domain: &str) -> Result<String, AppError> {
    let match_url = match_url
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .ok_or_else(|| AppError::InvalidRequest("matchUrl is required".to_string()))?;

    if !match_url.contains(source_domain) {
        return Err(AppError::InvalidRequest(format!(
            "A valid {source_domain} match URL is required."
        )));
    }

    Ok(match_url.to_string())
}

/// Router exposing salary generation for admin tooling.
pub fn salary_router<F>(state: Arc<SalaryRouteState<F>>) -> Router
where
    F: DocumentFetcher + 'static,
{
    Router::new()
        .route(GENERATE_SALARIES_PATH, post(generate_salaries_handler::<F>))
        .with_state(state)
}

pub(crate) async fn generate_salaries_handler<F>(
    State(state): State<Arc<SalaryRouteState<F>>>,
    payload: Result<Json<GenerateSalariesRequest>, JsonRejection>,
) -> Result<Json<Vec<PlayerSalary>>, AppError>
where
    F: DocumentFetcher + 'static,
{
    let Json(request) = payload
        .map_err(|rejection| AppError::InvalidRequest(rejection.body_text()))?;
    let match_url = state.validate(request)?;

    info!(%match_url, "generating salaries for match");
    match state.generator.generate(&match_url).await {
        Ok(salaries) => Ok(Json(salaries)),
        Err(err) => {
            error!(%match_url, error = %err, "failed to generate salaries");
            Err(AppError::from(err))
        }
    }
}
