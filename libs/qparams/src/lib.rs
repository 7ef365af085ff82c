//! # qparams
//!
//! Validation helpers for query-string parameters.
//!
//! ## Design Principles
//!
//! - A parameter source is any read-only mapping from field name to raw
//!   string; an absent field reads as `""`
//! - The empty string always means "absent", for every kind of parameter
//! - Required parameters fail with a [`ParamError`]; optional parameters
//!   resolve absent or malformed input to a default and never fail
//! - Raw values are never trimmed
//!
//! ## Parameter Kinds
//!
//! | Validator | Accepts | Returns | Built-in default |
//! |---|---|---|---|
//! | [`validate_int`] | base-10 `i64`, optional sign | the integer | `0` |
//! | [`validate_color`] | 3, 4, 6 or 8 hex digits once other characters are stripped | `#` + digits | `#ffffff` |
//! | [`validate_video_id`] | `[a-zA-Z0-9_-]+` | unchanged | `""` |
//! | [`validate_string`] | anything non-empty | unchanged | `""` |
//!
//! ## Example
//!
//! ```
//! use qparams::{validate_color, validate_int, validate_video_id, ParamOptions, QueryParams};
//!
//! let params: QueryParams = [("v", "dQw4w9WgXcQ"), ("w", "wide"), ("bg", "ff-00-00")]
//!     .into_iter()
//!     .collect();
//!
//! let video = validate_video_id(&params, "v", ParamOptions::new().required())?;
//! let width = validate_int(&params, "w", ParamOptions::new().with_default(640))?;
//! let color = validate_color(&params, "bg", ParamOptions::new())?;
//!
//! assert_eq!(video, "dQw4w9WgXcQ");
//! assert_eq!(width, 640);
//! assert_eq!(color, "#ff0000");
//!
//! let err = validate_int(&params, "h", ParamOptions::new().required()).unwrap_err();
//! assert_eq!(err.to_string(), "Required parameter 'h' is missing");
//! # Ok::<(), qparams::ParamError>(())
//! ```

mod error;
mod options;
mod rules;
mod source;
mod validate;

pub use error::{ParamError, ParamKind};
pub use options::{ParamOptions, DEFAULT_COLOR, DEFAULT_INT, DEFAULT_VIDEO_ID};
pub use rules::{is_video_id, HexColor, Integer, Rule, Text, VideoId};
pub use source::{ParamSource, QueryParams};
pub use validate::{
    optional, require, validate_color, validate_int, validate_string, validate_video_id,
};
