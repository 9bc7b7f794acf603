//! Textual pattern syntax.
//!
//! Mirrors the constructor call syntax: `42`, `-7`, `'A'`, `_`/`__`,
//! `gt(30)`, `between(10, 20)`, `variant(7)`, and the sum-family names `Ok`,
//! `Err`, `Some`, `None`. `Display` writes the same syntax back, so a
//! formatted pattern parses to itself whenever [`Pattern::make`] accepts it.
//! `variant(0)` is the one constructible pattern outside that domain: it
//! displays, but parsing it reports [`PatternError::InvalidTag`].
//!
//! Quoted characters may hold any char, including `(`, `,` and `'`.

use std::fmt;
use std::str::FromStr;

use crate::errors::PatternError;
use crate::pattern::{Pattern, PatternKind};
use crate::tags;

impl FromStr for Pattern {
    type Err = PatternError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let text = input.trim();
        if text.is_empty() {
            return Err(PatternError::syntax(input, "empty pattern"));
        }

        if text == "_" || text == "__" {
            return Ok(Pattern::Wildcard);
        }

        if let Some(tag) = tags::from_reserved_name(text) {
            return Ok(Pattern::Variant(tag));
        }

        if let Some((open, _)) = unquoted(text).find(|&(_, c)| c == '(') {
            return parse_call(input, &text[..open], &text[open..]);
        }

        parse_value(input, text).map(Pattern::Literal)
    }
}

/// Parse `name(args...)`; `rest` starts at the opening parenthesis.
fn parse_call(input: &str, name: &str, rest: &str) -> Result<Pattern, PatternError> {
    let kind = kind_by_name(name.trim())
        .ok_or_else(|| PatternError::syntax(input, format!("unknown pattern `{}`", name.trim())))?;

    let Some(args) = rest
        .strip_prefix('(')
        .and_then(|r| r.strip_suffix(')'))
    else {
        return Err(PatternError::syntax(input, "unbalanced parentheses"));
    };

    let args = args.trim();
    let operands = if args.is_empty() {
        Vec::new()
    } else {
        split_args(args)
            .into_iter()
            .map(|arg| parse_operand(input, kind, arg.trim()))
            .collect::<Result<Vec<_>, _>>()?
    };

    Pattern::make(kind, &operands)
}

/// Characters of `text` outside quoted character literals, with byte offsets.
fn unquoted(text: &str) -> impl Iterator<Item = (usize, char)> + '_ {
    let mut chars = text.char_indices().peekable();
    std::iter::from_fn(move || loop {
        let (at, c) = chars.next()?;
        if c != '\'' {
            return Some((at, c));
        }
        // Skip the quoted char and its closing quote.
        chars.next();
        chars.next_if(|&(_, c)| c == '\'');
    })
}

/// Split call arguments on commas outside quoted characters.
fn split_args(args: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    for (at, _) in unquoted(args).filter(|&(_, c)| c == ',') {
        parts.push(&args[start..at]);
        start = at + 1;
    }
    parts.push(&args[start..]);
    parts
}

fn kind_by_name(name: &str) -> Option<PatternKind> {
    PatternKind::ALL
        .into_iter()
        .find(|kind| kind.name() == name && *kind != PatternKind::Wildcard)
}

fn parse_operand(input: &str, kind: PatternKind, arg: &str) -> Result<i64, PatternError> {
    if kind == PatternKind::Variant {
        if let Some(tag) = tags::from_reserved_name(arg) {
            return Ok(i64::from(tag));
        }
    }
    parse_value(input, arg)
}

/// An integer or a quoted character.
fn parse_value(input: &str, text: &str) -> Result<i64, PatternError> {
    if let Some(inner) = text.strip_prefix('\'').and_then(|t| t.strip_suffix('\'')) {
        let mut chars = inner.chars();
        return match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(i64::from(u32::from(c))),
            _ => Err(PatternError::syntax(input, "character literal must hold one char")),
        };
    }

    text.parse::<i64>()
        .map_err(|err| PatternError::syntax(input, format!("`{text}` is not an integer: {err}")))
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Pattern::Literal(v) => write!(f, "{v}"),
            Pattern::Wildcard => f.write_str("_"),
            Pattern::GreaterThan(v)
            | Pattern::GreaterOrEqual(v)
            | Pattern::LessThan(v)
            | Pattern::LessOrEqual(v)
            | Pattern::NotEqual(v) => write!(f, "{}({v})", self.kind()),
            Pattern::RangeExclusive { low, high } | Pattern::RangeInclusive { low, high } => {
                write!(f, "{}({low}, {high})", self.kind())
            }
            Pattern::Variant(tag) => match tags::reserved_name(tag) {
                Some(name) => f.write_str(name),
                None => write!(f, "variant({tag})"),
            },
        }
    }
}
