use serde_json::Value;

use crate::error::ShapeError;

const HOMEWORKS_KEY: &str = "homeworks";
const CURRENT_DATE_KEY: &str = "current_date";

/// Check that the decoded API body looks like a homework feed.
///
/// Only `homeworks` is required; `current_date` is optional and read by the
/// poller separately.
pub fn check_response(response: &Value) -> Result<(), ShapeError> {
    let Some(object) = response.as_object() else {
        return Err(reject(ShapeError::NotAnObject));
    };
    let Some(homeworks) = object.get(HOMEWORKS_KEY) else {
        return Err(reject(ShapeError::MissingKeys(vec![HOMEWORKS_KEY])));
    };
    if !homeworks.is_array() {
        return Err(reject(ShapeError::NotAList { key: HOMEWORKS_KEY }));
    }
    Ok(())
}

/// Head of the `homeworks` feed, which the API orders most recent first.
///
/// Expects a response that already passed [`check_response`].
pub fn latest_homework(response: &Value) -> Option<&Value> {
    let homeworks = response.get(HOMEWORKS_KEY).and_then(Value::as_array)?;
    tracing::debug!(
        event = "homework_bot.response.homeworks",
        count = homeworks.len(),
        "homework feed received"
    );
    let latest = homeworks.first();
    match latest {
        Some(homework) => tracing::debug!(%homework, "latest homework"),
        None => tracing::debug!("no new homework statuses"),
    }
    latest
}

/// Server-reported `current_date`, if present and integral.
pub fn current_date(response: &Value) -> Option<i64> {
    let value = response.get(CURRENT_DATE_KEY)?;
    let timestamp = value.as_i64();
    if timestamp.is_none() {
        tracing::warn!(
            event = "homework_bot.response.bad_current_date",
            value = %value,
            "current_date is not an integer timestamp; keeping cursor"
        );
    }
    timestamp
}

fn reject(error: ShapeError) -> ShapeError {
    tracing::error!(event = "homework_bot.response.shape", error = %error, "unexpected API response shape");
    error
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn accepts_feed_with_empty_list() {
        assert_eq!(check_response(&json!({"homeworks": [], "current_date": 1})), Ok(()));
    }

    #[test]
    fn accepts_feed_without_current_date() {
        assert_eq!(check_response(&json!({"homeworks": []})), Ok(()));
    }

    #[test]
    fn rejects_non_object() {
        assert_eq!(
            check_response(&json!([{"homeworks": []}])),
            Err(ShapeError::NotAnObject)
        );
    }

    #[test]
    fn rejects_missing_homeworks() {
        let error = check_response(&json!({})).expect_err("empty object must fail");
        assert_eq!(error, ShapeError::MissingKeys(vec!["homeworks"]));
        assert!(error.to_string().contains("homeworks"));
    }

    #[test]
    fn rejects_homeworks_that_are_not_a_list() {
        let error = check_response(&json!({"homeworks": "not-a-list"}))
            .expect_err("string homeworks must fail");
        assert_eq!(error, ShapeError::NotAList { key: "homeworks" });
        assert_eq!(error.to_string(), "Под ключом homeworks нет списка.");
    }

    #[test]
    fn latest_homework_is_the_head_of_the_feed() {
        let response = json!({"homeworks": [{"homework_name": "new"}, {"homework_name": "old"}]});
        assert_eq!(
            latest_homework(&response),
            Some(&json!({"homework_name": "new"}))
        );
        assert_eq!(latest_homework(&json!({"homeworks": []})), None);
    }

    #[test]
    fn current_date_requires_an_integer() {
        assert_eq!(current_date(&json!({"current_date": 1_700_000_000})), Some(1_700_000_000));
        assert_eq!(current_date(&json!({"current_date": "soon"})), None);
        assert_eq!(current_date(&json!({})), None);
    }
}
