//! HTTP handlers

pub mod auth;
pub mod profile;
pub mod admin;
pub mod groups;
pub mod projects;
pub mod categories;
pub mod statuses;
pub mod tasks;
pub mod board;
pub mod health;

use axum::{http::StatusCode, Json};

use crate::error::ApiError;
use crate::response::ApiResponse;

pub type ApiResult<T> = Result<Json<ApiResponse<T>>, ApiError>;
pub type Created<T> = Result<(StatusCode, Json<ApiResponse<T>>), ApiError>;

pub(crate) fn ok<T: serde::Serialize>(data: T) -> ApiResult<T> {
    Ok(Json(ApiResponse::success(data)))
}

pub(crate) fn created<T: serde::Serialize>(data: T) -> Created<T> {
    Ok((StatusCode::CREATED, Json(ApiResponse::success(data))))
}
