//! `matchkit encode <pattern>` and `matchkit decode <hex>`

use matchkit_pattern::{PackedPattern, Pattern};
use tracing::debug;

use super::CommandError;

/// Pack a pattern into its one-word form.
pub fn encode(pattern: &str) -> Result<PackedPattern, CommandError> {
    let pattern: Pattern = pattern.parse()?;
    let packed = PackedPattern::encode(&pattern)?;
    debug!(%pattern, bits = packed.bits(), "encoded pattern");
    Ok(packed)
}

/// Unpack a hex word (with or without `0x`, `_` separators allowed).
pub fn decode(word: &str) -> Result<Pattern, CommandError> {
    let digits: String = word
        .trim()
        .trim_start_matches("0x")
        .trim_start_matches("0X")
        .chars()
        .filter(|c| *c != '_')
        .collect();

    let bits = u64::from_str_radix(&digits, 16).map_err(|err| CommandError::Word {
        input: word.to_owned(),
        reason: err.to_string(),
    })?;

    let pattern = PackedPattern::from_bits(bits).decode()?;
    debug!(bits, %pattern, "decoded pattern");
    Ok(pattern)
}
