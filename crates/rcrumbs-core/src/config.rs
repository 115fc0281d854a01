#![forbid(unsafe_code)]

//! Trail configuration.
//!
//! Configuration is applied once at attach time. Partial documents merge over
//! the defaults, and a malformed field falls back to its default instead of
//! failing the whole document:
//!
//! ```
//! use rcrumbs_core::config::TrailConfig;
//! use std::time::Duration;
//!
//! let config = TrailConfig::from_json(r#"{ "animation": { "speed": 150 } }"#).unwrap();
//! assert!(config.ellipsis);
//! assert!(config.animation.activated);
//! assert_eq!(config.animation.speed, Duration::from_millis(150));
//! ```
//!
//! Only syntactically invalid JSON is reported as an error.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default transition duration.
pub const DEFAULT_SPEED: Duration = Duration::from_millis(400);

/// Top-level trail options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrailConfig {
    /// Truncate the first crumb with an ellipsis when it does not fit.
    pub ellipsis: bool,
    /// Width transition options.
    pub animation: AnimationConfig,
}

/// Width transition options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Animate crumbs that appear or disappear on resize.
    pub activated: bool,
    /// Transition duration, in milliseconds on the wire.
    #[serde(with = "millis", alias = "speed_ms")]
    pub speed: Duration,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            ellipsis: true,
            animation: AnimationConfig::default(),
        }
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            activated: true,
            speed: DEFAULT_SPEED,
        }
    }
}

impl TrailConfig {
    /// Enable or disable first-crumb truncation (builder).
    #[must_use]
    pub fn with_ellipsis(mut self, ellipsis: bool) -> Self {
        self.ellipsis = ellipsis;
        self
    }

    /// Enable or disable width transitions (builder).
    #[must_use]
    pub fn with_animation(mut self, activated: bool) -> Self {
        self.animation.activated = activated;
        self
    }

    /// Set the transition duration (builder).
    #[must_use]
    pub fn with_speed(mut self, speed: Duration) -> Self {
        self.animation.speed = speed;
        self
    }

    /// Parse a JSON document and merge it over the defaults.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let value: Value =
            serde_json::from_str(text).map_err(|err| ConfigError::Syntax(err.to_string()))?;
        Ok(Self::from_value(&value))
    }

    /// Merge a JSON value over the defaults, field by field.
    ///
    /// Never fails: a non-object root yields the defaults, and any field with
    /// the wrong type or an out-of-range value keeps its default.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let mut config = Self::default();
        let Some(root) = value.as_object() else {
            crate::warn!("trail config root is not an object; using defaults");
            return config;
        };

        merge_bool(root.get("ellipsis"), "ellipsis", &mut config.ellipsis);

        if let Some(animation) = root.get("animation") {
            match animation.as_object() {
                Some(animation) => {
                    merge_bool(
                        animation.get("activated"),
                        "animation.activated",
                        &mut config.animation.activated,
                    );
                    let speed = animation.get("speed").or_else(|| animation.get("speed_ms"));
                    match speed.map(Value::as_u64) {
                        Some(Some(ms)) => config.animation.speed = Duration::from_millis(ms),
                        Some(None) => {
                            crate::warn!(
                                field = "animation.speed",
                                "malformed value; keeping default"
                            );
                        }
                        None => {}
                    }
                }
                None => {
                    crate::warn!(field = "animation", "malformed value; keeping default");
                }
            }
        }

        config
    }
}

#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn merge_bool(value: Option<&Value>, field: &'static str, slot: &mut bool) {
    match value.map(Value::as_bool) {
        Some(Some(flag)) => *slot = flag,
        Some(None) => {
            crate::warn!(field, "malformed value; keeping default");
        }
        None => {}
    }
}

/// Configuration text that could not be read at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The document is not valid JSON.
    Syntax(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntax(msg) => write!(f, "invalid trail config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        let ms = u64::try_from(value.as_millis()).unwrap_or(u64::MAX);
        serializer.serialize_u64(ms)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
