use axum::extract::{Path, Query};
use axum::Json;
use serde::Deserialize;

use crate::catalog;
use crate::error::AppError;
use crate::models::{Project, ProjectStatus};

#[derive(Deserialize)]
pub struct ListQuery {
    pub status: Option<String>,
}

/// Catalog records in display order, optionally narrowed to one status.
pub async fn list(Query(q): Query<ListQuery>) -> Result<Json<Vec<Project>>, AppError> {
    let status = q
        .status
        .as_deref()
        .map(str::parse::<ProjectStatus>)
        .transpose()?;

    let projects = catalog::projects()
        .iter()
        .filter(|p| status.is_none_or(|s| p.status == s))
        .cloned()
        .collect();

    Ok(Json(projects))
}

pub async fn get(Path(id): Path<u32>) -> Result<Json<Project>, AppError> {
    catalog::projects()
        .iter()
        .find(|p| p.id == id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Project not found".to_string()))
}
