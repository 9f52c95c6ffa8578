// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Translation of [`ApiError`] into the platform's error envelope.
//!
//! Only the fixed title and detail of each kind reach the caller. The cause of an
//! `Unknown` error is logged and dropped.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::error;

use crate::error::ApiError;

const UNKNOWN_DETAIL: &str = "An unknown error occurred.";

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorEnvelope {
    pub errors: Vec<ErrorEntry>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorEntry {
    pub code: u32,
    pub title: String,
    pub detail: String,
}

fn envelope(code: u32, title: &str, detail: String) -> ErrorEnvelope {
    ErrorEnvelope {
        errors: vec![ErrorEntry {
            code,
            title: title.to_string(),
            detail,
        }],
    }
}

/// Map an error to its status and envelope. Never fails.
pub fn translate(err: &ApiError) -> (StatusCode, ErrorEnvelope) {
    match err {
        ApiError::NotFound(resource) => (
            StatusCode::NOT_FOUND,
            envelope(10010, "CF-ResourceNotFound", format!("{} not found", resource)),
        ),
        ApiError::Forbidden => (
            StatusCode::FORBIDDEN,
            envelope(
                10003,
                "CF-NotAuthorized",
                "You are not authorized to perform the requested action".to_string(),
            ),
        ),
        ApiError::UnprocessableEntity(detail) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            envelope(10008, "CF-UnprocessableEntity", detail.clone()),
        ),
        ApiError::NotAuthenticated => (
            StatusCode::UNAUTHORIZED,
            envelope(10002, "CF-NotAuthenticated", "Authentication error".to_string()),
        ),
        ApiError::Unknown(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            envelope(10001, "UnknownError", UNKNOWN_DETAIL.to_string()),
        ),
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Unknown(cause) = &self {
            error!(error = %cause, "Request failed");
        }
        let (status, body) = translate(&self);
        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::UnprocessableEntity(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::UnprocessableEntity(rejection.body_text())
    }
}
