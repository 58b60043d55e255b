use thiserror::Error;

use crate::http_client::HttpError;

/// Why an interval was rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IntervalFault {
    #[error("interval cannot be [null, null]")]
    Unbounded,
    #[error("lower bound {low} is after upper bound {high}")]
    Reversed { low: String, high: String },
    #[error("bound {value} is not a finite number")]
    NonFinite { value: String },
}

/// Local request validation failures. None of these ever reach the network.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("bad `{field}` value '{value}'; see {reference}")]
    InvalidEnumValue {
        field: &'static str,
        value: String,
        reference: String,
    },

    #[error("cannot use `{first}` and `{second}` together")]
    MutuallyExclusiveFields {
        first: &'static str,
        second: &'static str,
    },

    #[error("bad `{field}` interval: {fault}")]
    InvalidInterval {
        field: &'static str,
        fault: IntervalFault,
    },
    #[error("bad `{field}` date '{value}', expected YYYY-MM-DD")]
    InvalidDateFormat { field: &'static str, value: String },

    #[error("`{field}` is only valid when {required_by}")]
    ConditionalFieldViolation {
        field: &'static str,
        required_by: &'static str,
    },
    #[error("`{field}` must be provided for idType `{required_by}`")]
    MissingRequiredField {
        field: &'static str,
        required_by: String,
    },

    #[error("unknown mapping values key '{value}'")]
    UnknownValueKey { value: String },
}

/// Top-level error type for client operations.
#[derive(Debug, Error)]
pub enum FigiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("openfigi returned status {status}: {explanation}")]
    Status {
        status: u16,
        explanation: &'static str,
    },

    #[error("transport error: {0}")]
    Transport(#[from] HttpError),

    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("no more results")]
    NoMoreResults,
}

impl FigiError {
    /// Remote status code, when the failure came from a non-success response.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub const fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "figi.validation",
            Self::Status { .. } => "figi.status",
            Self::Transport(_) => "figi.transport",
            Self::Encode(_) => "figi.encode",
            Self::Decode(_) => "figi.decode",
            Self::NoMoreResults => "figi.no_more_results",
        }
    }
}
