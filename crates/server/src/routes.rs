// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Request handlers for the issue and chart endpoints.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::info;

use tally_core::chart::{self, RandomColors};
use tally_core::{Distribution, Issue, NewIssue, Throughput, Timeline};

use crate::error::ApiError;
use crate::state::AppState;

type ApiResult<T> = Result<Json<T>, ApiError>;

/// `POST /api/issues`
pub async fn create_issue(
    State(state): State<AppState>,
    body: Result<Json<NewIssue>, JsonRejection>,
) -> Result<(StatusCode, Json<Issue>), ApiError> {
    let Json(body) = body?;
    let issue = state.create_issue(body).await?;
    info!(
        "created issue {} ({}, {})",
        issue.business_id, issue.severity, issue.assignee
    );
    Ok((StatusCode::CREATED, Json(issue)))
}

/// `GET /api/issues`
pub async fn list_issues(State(state): State<AppState>) -> ApiResult<Vec<Issue>> {
    Ok(Json(state.all_issues().await?))
}

/// `PUT /api/issues/:business_id`
///
/// The request body is ignored: the only possible update is resolving.
pub async fn resolve_issue(
    State(state): State<AppState>,
    Path(business_id): Path<String>,
) -> ApiResult<Issue> {
    let issue = state.resolve_issue(&business_id).await?;
    info!("resolved issue {}", issue.business_id);
    Ok(Json(issue))
}

/// `GET /api/charts/severity`
pub async fn severity_chart(State(state): State<AppState>) -> ApiResult<Distribution> {
    let issues = state.all_issues().await?;
    Ok(Json(chart::severity_distribution(&issues)))
}

/// `GET /api/charts/status`
pub async fn status_chart(State(state): State<AppState>) -> ApiResult<Distribution> {
    let issues = state.all_issues().await?;
    Ok(Json(chart::status_distribution(&issues)))
}

/// `GET /api/charts/timeline`
pub async fn timeline_chart(State(state): State<AppState>) -> ApiResult<Timeline> {
    let issues = state.resolved_issues().await?;
    Ok(Json(chart::resolution_timeline(&issues, RandomColors::new())))
}

/// `GET /api/charts/assignee`
pub async fn assignee_chart(State(state): State<AppState>) -> ApiResult<Throughput> {
    let issues = state.all_issues().await?;
    Ok(Json(chart::assignee_throughput(&issues)))
}

/// Fallback for unknown paths and unsupported methods.
pub async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}
