//! Homework payload handling: shape checks on the API response and
//! translation of a homework record into a chat message.

mod response;
mod status;

pub use response::{check_response, current_date, latest_homework};
pub use status::{HomeworkStatus, parse_status};
