use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::error::{ShapeError, StatusError, UnknownStatusError};

const HOMEWORK_NAME_KEY: &str = "homework_name";
const STATUS_KEY: &str = "status";

/// Review status of a homework, as reported by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    pub const ALL: [Self; 3] = [Self::Approved, Self::Reviewing, Self::Rejected];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Reviewing => "reviewing",
            Self::Rejected => "rejected",
        }
    }

    /// Fixed human-readable verdict for this status.
    pub fn verdict(self) -> &'static str {
        match self {
            Self::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Self::Reviewing => "Работа взята на проверку ревьюером.",
            Self::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

impl fmt::Display for HomeworkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HomeworkStatus {
    type Err = UnknownStatusError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == value)
            .ok_or_else(|| UnknownStatusError {
                status: value.to_string(),
            })
    }
}

/// Build the notification text for one homework record.
pub fn parse_status(homework: &Value) -> Result<String, StatusError> {
    let name = homework.get(HOMEWORK_NAME_KEY);
    let status = homework.get(STATUS_KEY);
    let (Some(name), Some(status)) = (name, status) else {
        let missing: Vec<&'static str> = [(HOMEWORK_NAME_KEY, name), (STATUS_KEY, status)]
            .into_iter()
            .filter(|(_, value)| value.is_none())
            .map(|(key, _)| key)
            .collect();
        let error = ShapeError::MissingKeys(missing);
        tracing::error!(event = "homework_bot.status.shape", error = %error, "homework record is incomplete");
        return Err(error.into());
    };

    let parsed = match status {
        Value::String(raw) => raw.parse::<HomeworkStatus>(),
        other => Err(UnknownStatusError {
            status: other.to_string(),
        }),
    };
    let status = parsed.inspect_err(|error| {
        tracing::error!(event = "homework_bot.status.unknown", error = %error, "unexpected homework status");
    })?;

    let name = match name {
        Value::String(name) => name.clone(),
        other => other.to_string(),
    };
    Ok(format!(
        "Изменился статус проверки работы \"{name}\". {}",
        status.verdict()
    ))
}
