//! Tunable window-manager and desktop-shell parameters.
//!
//! Defaults reproduce the stock portfolio desktop. A host may override any subset of fields
//! with a JSON document (see [`DesktopConfig::from_json`]); missing fields keep their defaults.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    model::{Size, Viewport},
    responsive::{MIN_SUPPORTED_HEIGHT, MIN_SUPPORTED_WIDTH},
};

/// Default size of newly opened windows.
pub const DEFAULT_WINDOW_WIDTH: f64 = 600.0;
/// Default size of newly opened windows.
pub const DEFAULT_WINDOW_HEIGHT: f64 = 400.0;
/// Upward offset applied to the centered open position so windows clear the taskbar.
pub const OPEN_VERTICAL_BIAS: f64 = 50.0;
/// Minimum interactive resize width.
pub const MIN_WINDOW_WIDTH: f64 = 400.0;
/// Minimum interactive resize height.
pub const MIN_WINDOW_HEIGHT: f64 = 300.0;
/// First z-index handed out to a window.
pub const BASE_Z_INDEX: u32 = 100;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors raised while loading a [`DesktopConfig`] override document.
pub enum ConfigError {
    /// The override document is not valid JSON for this schema.
    #[error("desktop config parse failed: {0}")]
    Parse(String),
    /// A field holds a value the window manager cannot work with.
    #[error("desktop config field `{field}` is invalid: {reason}")]
    Invalid {
        /// Offending field name.
        field: &'static str,
        /// Why the value was rejected.
        reason: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
/// Window-manager geometry, stacking, gating, and icon-interaction parameters.
pub struct DesktopConfig {
    /// Size given to newly opened windows.
    pub default_window_size: Size,
    /// Upward offset from the exact viewport center for newly opened windows.
    pub open_vertical_bias: f64,
    /// Lower bound for interactive resizing.
    pub min_window_size: Size,
    /// Absolute upper bound for interactive resizing.
    pub max_window_size: Size,
    /// Upper bound for interactive resizing as a fraction of viewport width.
    pub max_viewport_width_ratio: f64,
    /// Upper bound for interactive resizing as a fraction of viewport height.
    pub max_viewport_height_ratio: f64,
    /// Height reserved for the menu bar above the workspace.
    pub menu_bar_height: f64,
    /// Height reserved for the taskbar below the workspace.
    pub taskbar_height: f64,
    /// z-index assigned to the first window of a session.
    pub base_z_index: u32,
    /// Smallest viewport the desktop renders at.
    pub min_supported_viewport: Viewport,
    /// Viewport assumed until the host reports a real one.
    pub fallback_viewport: Viewport,
    /// Pointer travel (px) before an icon press turns into a drag.
    pub icon_drag_threshold: f64,
    /// Time after an icon drag during which double-clicks do not open the file.
    pub icon_open_cooldown_ms: f64,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            default_window_size: Size::new(DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT),
            open_vertical_bias: OPEN_VERTICAL_BIAS,
            min_window_size: Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT),
            max_window_size: Size::new(1200.0, 750.0),
            max_viewport_width_ratio: 0.85,
            max_viewport_height_ratio: 0.75,
            menu_bar_height: 32.0,
            taskbar_height: 68.0,
            base_z_index: BASE_Z_INDEX,
            min_supported_viewport: Viewport::new(MIN_SUPPORTED_WIDTH, MIN_SUPPORTED_HEIGHT),
            fallback_viewport: Viewport::new(1400.0, 900.0),
            icon_drag_threshold: 4.0,
            icon_open_cooldown_ms: 100.0,
        }
    }
}

impl DesktopConfig {
    /// Parses a (possibly partial) JSON override document and validates the result.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and [`ConfigError::Invalid`] when a
    /// value fails [`DesktopConfig::validate`].
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config = serde_json::from_str::<Self>(raw)
            .map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every dimension is usable by the geometry engine.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = |value: f64| value.is_finite() && value > 0.0;
        let non_negative = |value: f64| value.is_finite() && value >= 0.0;
        let ratio = |value: f64| value.is_finite() && value > 0.0 && value <= 1.0;

        let checks: [(&'static str, bool, &'static str); 11] = [
            (
                "default_window_size",
                positive(self.default_window_size.width) && positive(self.default_window_size.height),
                "must be positive and finite",
            ),
            (
                "open_vertical_bias",
                self.open_vertical_bias.is_finite(),
                "must be finite",
            ),
            (
                "min_window_size",
                positive(self.min_window_size.width) && positive(self.min_window_size.height),
                "must be positive and finite",
            ),
            (
                "max_window_size",
                self.max_window_size.width >= self.min_window_size.width
                    && self.max_window_size.height >= self.min_window_size.height
                    && self.max_window_size.is_valid(),
                "must be finite and not smaller than min_window_size",
            ),
            (
                "max_viewport_width_ratio",
                ratio(self.max_viewport_width_ratio),
                "must be in (0, 1]",
            ),
            (
                "max_viewport_height_ratio",
                ratio(self.max_viewport_height_ratio),
                "must be in (0, 1]",
            ),
            (
                "menu_bar_height",
                non_negative(self.menu_bar_height),
                "must be non-negative and finite",
            ),
            (
                "taskbar_height",
                non_negative(self.taskbar_height),
                "must be non-negative and finite",
            ),
            (
                "min_supported_viewport",
                self.min_supported_viewport.is_usable(),
                "must be positive and finite",
            ),
            (
                "fallback_viewport",
                self.fallback_viewport.is_usable(),
                "must be positive and finite",
            ),
            (
                "icon_open_cooldown_ms",
                non_negative(self.icon_open_cooldown_ms) && non_negative(self.icon_drag_threshold),
                "icon thresholds must be non-negative and finite",
            ),
        ];

        match checks.into_iter().find(|(_, ok, _)| !ok) {
            Some((field, _, reason)) => Err(ConfigError::Invalid { field, reason }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(DesktopConfig::default().validate(), Ok(()));
    }

    #[test]
    fn partial_override_keeps_remaining_defaults() {
        let config = DesktopConfig::from_json(
            r#"{ "default_window_size": { "width": 720.0, "height": 480.0 }, "base_z_index": 10 }"#,
        )
        .expect("override");
        assert_eq!(config.default_window_size, Size::new(720.0, 480.0));
        assert_eq!(config.base_z_index, 10);
        assert_eq!(config.min_window_size, Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT));
        assert_eq!(config.taskbar_height, 68.0);
    }

    #[test]
    fn max_size_below_min_size_is_rejected() {
        let err = DesktopConfig::from_json(
            r#"{ "max_window_size": { "width": 200.0, "height": 900.0 } }"#,
        )
        .expect_err("invalid max size");
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "max_window_size",
                ..
            }
        ));
    }

    #[test]
    fn out_of_range_ratio_is_rejected() {
        let err = DesktopConfig::from_json(r#"{ "max_viewport_width_ratio": 1.5 }"#)
            .expect_err("invalid ratio");
        assert_eq!(
            err,
            ConfigError::Invalid {
                field: "max_viewport_width_ratio",
                reason: "must be in (0, 1]",
            }
        );
    }

    #[test]
    fn malformed_json_reports_parse_error() {
        let err = DesktopConfig::from_json("{ not json").expect_err("parse error");
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
