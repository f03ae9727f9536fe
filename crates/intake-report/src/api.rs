//! Status-coded error responses.

use std::error::Error;

use intake_model::BatchViolations;
use serde::Serialize;
use tracing::warn;

use crate::output::{ErrorOutput, build};

/// Status of a batch that decoded but failed validation.
pub const UNPROCESSABLE_ENTITY: u16 = 422;
/// Status of every other domain error.
pub const BAD_REQUEST: u16 = 400;

/// `{"code": …, "message": …}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorDetail {
    pub code: u16,
    pub message: String,
}

/// `{"error": {…}}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// Body of an error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ErrorPayload {
    Rows(Vec<ErrorOutput>),
    Error(ErrorBody),
}

/// An error response: status plus JSON body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorReport {
    pub status: u16,
    pub payload: ErrorPayload,
}

impl ErrorReport {
    /// 422 report listing every violating row.
    pub fn from_violations(violations: &BatchViolations) -> Self {
        Self {
            status: UNPROCESSABLE_ENTITY,
            payload: ErrorPayload::Rows(build(violations)),
        }
    }

    /// 400 report carrying the error message.
    pub fn from_error<E: Error + ?Sized>(err: &E) -> Self {
        let message = err.to_string();
        warn!(error = %message, "request rejected");
        Self {
            status: BAD_REQUEST,
            payload: ErrorPayload::Error(ErrorBody {
                error: ErrorDetail {
                    code: BAD_REQUEST,
                    message,
                },
            }),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.payload)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.payload)
    }
}
