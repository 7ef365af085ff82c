//! The parameter validators.
//!
//! [`require`] and [`optional`] are the two outcomes of every validator:
//! a required parameter either validates or fails, an optional one always
//! resolves to a value. The named helpers pick between them from
//! [`ParamOptions`].

use tracing::trace;

use crate::error::ParamError;
use crate::options::ParamOptions;
use crate::rules::{HexColor, Integer, Rule, Text, VideoId};
use crate::source::ParamSource;

/// Validates a parameter that must be present and well-formed.
pub fn require<S, R>(source: &S, field: &str, rule: &R) -> Result<R::Output, ParamError>
where
    S: ParamSource + ?Sized,
    R: Rule,
{
    let raw = source.raw(field);
    if raw.is_empty() {
        return Err(ParamError::Missing {
            field: field.to_string(),
        });
    }

    rule.check(raw).ok_or_else(|| ParamError::Invalid {
        field: field.to_string(),
        kind: rule.kind(),
        value: raw.to_string(),
    })
}

/// Validates a parameter, resolving absent or malformed values to `default`.
pub fn optional<S, R>(source: &S, field: &str, rule: &R, default: R::Output) -> R::Output
where
    S: ParamSource + ?Sized,
    R: Rule,
{
    let raw = source.raw(field);
    if raw.is_empty() {
        trace!(field, kind = %rule.kind(), reason = "absent", "using default");
        return default;
    }

    match rule.check(raw) {
        Some(value) => value,
        None => {
            trace!(field, kind = %rule.kind(), reason = "invalid", raw, "using default");
            default
        }
    }
}

fn validate<S, R>(
    source: &S,
    field: &str,
    rule: R,
    options: ParamOptions<R::Output>,
) -> Result<R::Output, ParamError>
where
    S: ParamSource + ?Sized,
    R: Rule,
{
    if options.required {
        return require(source, field, &rule);
    }
    let default = options.default.unwrap_or_else(|| rule.fallback());
    Ok(optional(source, field, &rule, default))
}

/// Validates a base-10 integer parameter.
pub fn validate_int<S>(
    source: &S,
    field: &str,
    options: ParamOptions<i64>,
) -> Result<i64, ParamError>
where
    S: ParamSource + ?Sized,
{
    validate(source, field, Integer, options)
}

/// Validates a hex color parameter, returning it as `#` plus its digits.
pub fn validate_color<S>(
    source: &S,
    field: &str,
    options: ParamOptions<String>,
) -> Result<String, ParamError>
where
    S: ParamSource + ?Sized,
{
    validate(source, field, HexColor, options)
}

/// Validates a video identifier parameter.
pub fn validate_video_id<S>(
    source: &S,
    field: &str,
    options: ParamOptions<String>,
) -> Result<String, ParamError>
where
    S: ParamSource + ?Sized,
{
    validate(source, field, VideoId, options)
}

/// Reads a string parameter. An absent optional string is `""`.
pub fn validate_string<S>(source: &S, field: &str, required: bool) -> Result<String, ParamError>
where
    S: ParamSource + ?Sized,
{
    let options = ParamOptions {
        default: None,
        required,
    };
    validate(source, field, Text, options)
}
