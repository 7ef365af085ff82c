//! Format rules for each kind of parameter.
//!
//! A rule only sees non-empty raw values. Emptiness is handled by the
//! validator before the rule is consulted.

use crate::error::ParamKind;
use crate::options::{DEFAULT_COLOR, DEFAULT_INT, DEFAULT_VIDEO_ID};

/// A single-field format rule.
pub trait Rule {
    /// The validated, normalized value.
    type Output;

    /// The kind reported when the rule rejects a value.
    fn kind(&self) -> ParamKind;

    /// Validates and normalizes a non-empty raw value.
    fn check(&self, raw: &str) -> Option<Self::Output>;

    /// Built-in default when the caller supplies none.
    fn fallback(&self) -> Self::Output;
}

/// Base-10 signed integer.
#[derive(Debug, Clone, Copy, Default)]
pub struct Integer;

impl Rule for Integer {
    type Output = i64;

    fn kind(&self) -> ParamKind {
        ParamKind::Integer
    }

    fn check(&self, raw: &str) -> Option<i64> {
        raw.parse().ok()
    }

    fn fallback(&self) -> i64 {
        DEFAULT_INT
    }
}

/// Hex color, normalized to `#` plus its hex digits.
#[derive(Debug, Clone, Copy, Default)]
pub struct HexColor;

impl HexColor {
    /// Strips every non hex digit and accepts 3, 4, 6 or 8 remaining digits.
    ///
    /// Separators are discarded, so `"ff-00-00"` normalizes to `"#ff0000"`.
    /// Digit case is preserved.
    pub fn normalize(raw: &str) -> Option<String> {
        let digits: String = raw.chars().filter(char::is_ascii_hexdigit).collect();
        matches!(digits.len(), 3 | 4 | 6 | 8).then(|| format!("#{digits}"))
    }
}

impl Rule for HexColor {
    type Output = String;

    fn kind(&self) -> ParamKind {
        ParamKind::HexColor
    }

    fn check(&self, raw: &str) -> Option<String> {
        Self::normalize(raw)
    }

    fn fallback(&self) -> String {
        DEFAULT_COLOR.to_string()
    }
}

/// Returns true if `raw` is one or more of `[a-zA-Z0-9_-]`.
pub fn is_video_id(raw: &str) -> bool {
    !raw.is_empty()
        && raw
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
}

/// Video identifier, returned unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct VideoId;

impl Rule for VideoId {
    type Output = String;

    fn kind(&self) -> ParamKind {
        ParamKind::VideoId
    }

    fn check(&self, raw: &str) -> Option<String> {
        is_video_id(raw).then(|| raw.to_string())
    }

    fn fallback(&self) -> String {
        DEFAULT_VIDEO_ID.to_string()
    }
}

/// Any string.
#[derive(Debug, Clone, Copy, Default)]
pub struct Text;

impl Rule for Text {
    type Output = String;

    fn kind(&self) -> ParamKind {
        ParamKind::String
    }

    fn check(&self, raw: &str) -> Option<String> {
        Some(raw.to_string())
    }

    fn fallback(&self) -> String {
        String::new()
    }
}
