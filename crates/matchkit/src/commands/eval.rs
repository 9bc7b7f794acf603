//! `matchkit eval <pattern> <value>...`

use matchkit_eval::evaluate;
use matchkit_pattern::Pattern;
use tracing::debug;

use super::{CliValue, CommandError};

/// Test every value against one pattern.
///
/// Returns one `value: true|false` line per value, in input order.
pub fn eval(pattern: &str, values: &[String]) -> Result<Vec<String>, CommandError> {
    let pattern: Pattern = pattern.parse()?;
    debug!(%pattern, count = values.len(), "evaluating values");

    values
        .iter()
        .map(|input| {
            let value = CliValue::parse(input)?;
            Ok(format!("{value}: {}", evaluate(&value, &pattern)))
        })
        .collect()
}
