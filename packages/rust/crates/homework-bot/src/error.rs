//! Error taxonomy for the bot.
//!
//! `ConfigurationError` is fatal and only raised before the poll loop starts.
//! Everything else is scoped to a single poll cycle and folds into
//! [`IterationError`], which the poller reports instead of propagating.

use thiserror::Error;

/// Startup configuration failure.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    /// One or more required secrets are absent or empty.
    #[error("Отсутствуют данные: {}", .0.join(", "))]
    MissingCredentials(Vec<&'static str>),
}

impl ConfigurationError {
    /// Names of the environment variables that were missing.
    pub fn missing(&self) -> &[&'static str] {
        match self {
            Self::MissingCredentials(names) => names,
        }
    }
}

/// Failure of the single outbound request to the homework API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection refused, DNS failure, timeout and other transport problems.
    #[error("Эндпоинт недоступен: {0}")]
    Transport(#[source] reqwest::Error),

    /// The API answered with something other than `200 OK`.
    #[error("Эндпоинт вернул код {0}")]
    HttpStatus(reqwest::StatusCode),

    /// The body was not valid JSON.
    #[error("Ответ API не является корректным JSON: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Structural mismatch in the API payload or in a homework record.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShapeError {
    /// The payload is not a JSON object.
    #[error("Ответ API не является словарем.")]
    NotAnObject,

    /// Required keys are absent.
    #[error("Отсутствуют ожидаемые ключи: {}", .0.join(", "))]
    MissingKeys(Vec<&'static str>),

    /// The value under `key` is not a list.
    #[error("Под ключом {key} нет списка.")]
    NotAList { key: &'static str },
}

/// A homework record carries a status outside the verdict table.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Неожиданный статус домашней работы: {status}")]
pub struct UnknownStatusError {
    pub status: String,
}

/// Failure while interpreting one homework record.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StatusError {
    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error(transparent)]
    UnknownStatus(#[from] UnknownStatusError),
}

/// Any failure inside one poll cycle. Absorbed and reported by the poller.
#[derive(Debug, Error)]
pub enum IterationError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error(transparent)]
    UnknownStatus(#[from] UnknownStatusError),
}

impl From<StatusError> for IterationError {
    fn from(error: StatusError) -> Self {
        match error {
            StatusError::Shape(shape) => Self::Shape(shape),
            StatusError::UnknownStatus(unknown) => Self::UnknownStatus(unknown),
        }
    }
}

impl IterationError {
    /// Short label for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Api(ApiError::Transport(_)) => "transport",
            Self::Api(ApiError::HttpStatus(_)) => "http_status",
            Self::Api(ApiError::Decode(_)) => "decode",
            Self::Shape(_) => "shape",
            Self::UnknownStatus(_) => "unknown_status",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_error_lists_every_missing_name() {
        let error = ConfigurationError::MissingCredentials(vec!["PRACTICUM_TOKEN", "TELEGRAM_CHAT_ID"]);
        assert_eq!(
            error.to_string(),
            "Отсутствуют данные: PRACTICUM_TOKEN, TELEGRAM_CHAT_ID"
        );
        assert_eq!(error.missing(), ["PRACTICUM_TOKEN", "TELEGRAM_CHAT_ID"]);
    }

    #[test]
    fn status_error_flattens_into_iteration_error() {
        let unknown = StatusError::from(UnknownStatusError {
            status: "in_review".to_string(),
        });
        let iteration = IterationError::from(unknown);
        assert_eq!(iteration.kind(), "unknown_status");
        assert_eq!(
            iteration.to_string(),
            "Неожиданный статус домашней работы: in_review"
        );
    }
}
