//! Uniform response envelope.
//!
//! Every service operation answers with a `Header<T>`, and every HTTP body is
//! one. An envelope carries exactly one outcome: success with data, success
//! without data, or an error with a message. `pagination` only appears on paged
//! list results. Absent fields are omitted from the JSON.

use serde::{Deserialize, Serialize};

/// Message used for every "no such row" and "no payload" outcome.
pub const NO_DATA_MESSAGE: &str = "데이터 없음";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResultStatus {
    #[default]
    Ok,
    Error,
}

/// Matchable error category carried next to the human-readable message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    NotFound,
    MissingPayload,
    Validation,
    Internal,
}

/// Summary of a page result.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub total_pages: u64,
    pub total_elements: u64,
    /// 0-based index of the returned page
    pub current_page: u64,
    pub current_elements: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Header<T> {
    #[serde(default)]
    pub status: ResultStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorKind>,
    #[serde(default = "Option::default", skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

impl<T> Header<T> {
    /// Success without payload.
    pub fn ok_empty() -> Self {
        Self { status: ResultStatus::Ok, message: None, error: None, data: None, pagination: None }
    }

    /// Success with payload.
    pub fn ok(data: T) -> Self {
        Self { data: Some(data), ..Self::ok_empty() }
    }

    pub fn error(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            status: ResultStatus::Error,
            message: Some(message.into()),
            error: Some(kind),
            data: None,
            pagination: None,
        }
    }

    pub fn not_found() -> Self { Self::error(ErrorKind::NotFound, NO_DATA_MESSAGE) }

    pub fn missing_payload() -> Self { Self::error(ErrorKind::MissingPayload, NO_DATA_MESSAGE) }

    pub fn is_ok(&self) -> bool { self.status == ResultStatus::Ok }

    pub fn error_kind(&self) -> Option<ErrorKind> { self.error }

    pub fn message(&self) -> Option<&str> { self.message.as_deref() }

    pub fn into_data(self) -> Option<T> { self.data }
}

impl<T> Header<Vec<T>> {
    /// Success with a list payload and its page metadata.
    pub fn ok_paged(data: Vec<T>, pagination: Pagination) -> Self {
        Self { data: Some(data), pagination: Some(pagination), ..Self::ok_empty() }
    }
}
