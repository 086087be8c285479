//! Mapping of evaluation failures to HTTP responses
//!
//! Bodies use a `detail` field: a plain message for 413 and 408, and
//! `{type, message}` for 422 so a UI can point at the pattern.

use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use rxplay_engine::{ErrorKind, EvalError};
use serde::Serialize;

/// Failure of one API request
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Eval(#[from] EvalError),

    /// The evaluation task died; this is a defect, reported as 500
    #[error("evaluation task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

#[derive(Serialize)]
struct ErrorBody<T: Serialize> {
    detail: T,
}

#[derive(Serialize)]
struct TypedDetail {
    #[serde(rename = "type")]
    kind: ErrorKind,
    message: String,
}

/// Status code for each failure kind
#[must_use]
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::TooLarge => StatusCode::PAYLOAD_TOO_LARGE,
        ErrorKind::RegexSyntax => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorKind::Timeout => StatusCode::REQUEST_TIMEOUT,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Eval(err) => {
                let kind = err.kind();
                let status = status_for(kind);
                let message = err.message();
                match kind {
                    ErrorKind::RegexSyntax => (
                        status,
                        Json(ErrorBody {
                            detail: TypedDetail { kind, message },
                        }),
                    )
                        .into_response(),
                    ErrorKind::TooLarge | ErrorKind::Timeout => {
                        (status, Json(ErrorBody { detail: message })).into_response()
                    }
                }
            }
            ApiError::Task(e) => {
                tracing::error!(error = %e, "evaluation task failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody {
                        detail: "internal error",
                    }),
                )
                    .into_response()
            }
        }
    }
}
