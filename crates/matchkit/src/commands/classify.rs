//! `matchkit classify <value> <pattern>...`

use matchkit_eval::Match;
use matchkit_pattern::Pattern;
use tracing::debug;

use super::{CliValue, CommandError};

/// Index of the first pattern the value matches, if any.
///
/// Every pattern is parsed up front, so a malformed arm is reported even
/// when an earlier arm would have matched.
pub fn classify(value: &str, patterns: &[String]) -> Result<Option<usize>, CommandError> {
    let value = CliValue::parse(value)?;
    let patterns = patterns
        .iter()
        .map(|p| p.parse::<Pattern>())
        .collect::<Result<Vec<_>, _>>()?;
    debug!(%value, arms = patterns.len(), "classifying value");

    let selected = patterns
        .into_iter()
        .enumerate()
        .fold(Match::on(&value), |m, (index, pattern)| {
            m.when(pattern, move |_| index)
        })
        .finish();
    Ok(selected)
}
