//! Leaf value grammars.
//!
//! Every check is an exact full-string match; "looks numeric" is not enough.

use crate::error::{ParseError, ParseErrorKind};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use std::time::Duration;

static TIME_OFFSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{2}):([0-9]{2}):([0-9]{2})(?:\.([0-9]{1,3}))?$").unwrap()
});

static PERCENT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^([0-9]+)%$").unwrap());

static INTEGER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[+-]?[0-9]+$").unwrap());

static MEDIA_TYPE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(video|audio)/.+").unwrap());

/// A parsed `skipoffset` value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipOffset {
    Time(Duration),
    Percent(u32),
}

fn value_error(what: &str, input: &str, expected: &str) -> ParseError {
    ParseError::new(
        ParseErrorKind::InvalidValue,
        format!("invalid {} '{}', expected {}", what, input, expected),
    )
}

// ─── HH:MM:SS(.mmm) ──────────────────────────────────────────────────────────

pub fn is_time_offset(input: &str) -> bool {
    TIME_OFFSET_RE.is_match(input)
}

/// Parses `HH:MM:SS` with an optional `.` and 1–3 fractional digits.
///
/// Only the shape is enforced; `00:75:00` parses as 75 minutes.
pub fn parse_time_offset(input: &str) -> Result<Duration, ParseError> {
    let caps = TIME_OFFSET_RE
        .captures(input)
        .ok_or_else(|| value_error("time offset", input, "HH:MM:SS or HH:MM:SS.mmm"))?;

    let field = |i: usize| {
        caps[i]
            .parse::<u64>()
            .map_err(|_| value_error("time offset", input, "ASCII digits"))
    };
    let secs = field(1)? * 3600 + field(2)? * 60 + field(3)?;

    let millis = match caps.get(4) {
        // The grammar admits only ASCII digits, so byte length is digit count.
        Some(frac) => {
            let digits = frac.as_str();
            let value = digits
                .parse::<u64>()
                .map_err(|_| value_error("time offset", input, "ASCII digits"))?;
            value * 10u64.pow(3u32.saturating_sub(digits.len() as u32))
        }
        None => 0,
    };

    Ok(Duration::from_secs(secs) + Duration::from_millis(millis))
}

// ─── skipoffset ──────────────────────────────────────────────────────────────

pub fn is_skip_offset(input: &str) -> bool {
    is_time_offset(input) || PERCENT_RE.is_match(input)
}

/// Parses a `skipoffset`: a time offset or a bare percentage such as `15%`.
pub fn parse_skip_offset(input: &str) -> Result<SkipOffset, ParseError> {
    if let Some(caps) = PERCENT_RE.captures(input) {
        let pct = caps[1]
            .parse::<u32>()
            .map_err(|_| value_error("skipoffset", input, "a percentage that fits in u32"))?;
        return Ok(SkipOffset::Percent(pct));
    }
    parse_time_offset(input)
        .map(SkipOffset::Time)
        .map_err(|_| value_error("skipoffset", input, "HH:MM:SS, HH:MM:SS.mmm or N%"))
}

// ─── Attribute scalars ───────────────────────────────────────────────────────

/// Base-10 integer, optionally signed.
pub fn is_integer(input: &str) -> bool {
    INTEGER_RE.is_match(input)
}

/// Literal `true` or `false`; nothing else.
pub fn is_boolean_literal(input: &str) -> bool {
    matches!(input, "true" | "false")
}

/// MIME-like `video/...` or `audio/...` type.
pub fn is_media_type(input: &str) -> bool {
    MEDIA_TYPE_RE.is_match(input)
}

pub fn is_blank(input: &str) -> bool {
    input.trim().is_empty()
}
