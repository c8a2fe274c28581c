//! Company handlers: list, read, create, update, delete.

use crate::error::AppError;
use crate::extractors::ApiJson;
use crate::model::{CompanyChanges, NewCompany};
use crate::response;
use crate::service::{CompanyService, RequestValidator};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = CompanyService::list(&state.pool).await?;
    Ok(response::companies(rows))
}

pub async fn read(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let company = CompanyService::read(&state.pool, &code)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("company {}", code)))?;
    Ok(response::company(company))
}

pub async fn create(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<NewCompany>,
) -> Result<impl IntoResponse, AppError> {
    RequestValidator::require(&[("code", body.code.as_str()), ("name", body.name.as_str())])?;
    let company = CompanyService::create(&state.pool, &body)
        .await?
        .ok_or_else(|| AppError::BadRequest("company not created".into()))?;
    tracing::info!(code = %company.code, "company created");
    Ok(response::company(company))
}

pub async fn update(
    State(state): State<AppState>,
    Path(code): Path<String>,
    ApiJson(body): ApiJson<CompanyChanges>,
) -> Result<impl IntoResponse, AppError> {
    RequestValidator::require(&[("name", body.name.as_str())])?;
    let company = CompanyService::update(&state.pool, &code, &body)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("company {}", code)))?;
    Ok(response::company(company))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    CompanyService::delete(&state.pool, &code)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("company {}", code)))?;
    tracing::info!(code = %code, "company deleted");
    Ok(response::deleted())
}
