pub mod catalog;
pub mod cost_performance;
pub mod fixture_difficulty;
pub mod ict;
pub mod page;
pub mod performance;

use crate::models::error::{ApiError, bad_request};

/// Parses a comma-separated query parameter ("1, 14,3") with `parse`,
/// skipping empty segments. `what` names the parameter in the error.
pub(crate) fn parse_csv_param<T>(
    raw: &str,
    what: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<Vec<T>, ApiError> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            parse(s).ok_or_else(|| bad_request(format!("invalid {} value: '{}'", what, s)))
        })
        .collect()
}
