//! Per-call validation options.

/// Built-in default for integer parameters.
pub const DEFAULT_INT: i64 = 0;

/// Built-in default for color parameters.
pub const DEFAULT_COLOR: &str = "#ffffff";

/// Built-in default for video identifier parameters.
pub const DEFAULT_VIDEO_ID: &str = "";

/// Options accepted by the validators.
///
/// When `default` is `None` the rule's built-in default is used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamOptions<T> {
    /// Value returned for an absent or invalid parameter that is not required.
    pub default: Option<T>,
    /// Whether absence or invalid format is an error.
    pub required: bool,
}

impl<T> Default for ParamOptions<T> {
    fn default() -> Self {
        Self {
            default: None,
            required: false,
        }
    }
}

impl<T> ParamOptions<T> {
    /// Optional parameter with the built-in default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value returned when the parameter is absent or invalid.
    #[must_use]
    pub fn with_default(mut self, default: impl Into<T>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Marks the parameter as required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}
