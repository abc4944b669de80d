//! Minimum-resolution gate.
//!
//! Below the supported resolution the shell renders a blocking notice instead of the desktop and
//! the reducer ignores window operations. At or above it, every viewport change repositions
//! windows proportionally.

use crate::model::Viewport;

/// Narrowest viewport the desktop renders at.
pub const MIN_SUPPORTED_WIDTH: f64 = 1280.0;
/// Shortest viewport the desktop renders at.
pub const MIN_SUPPORTED_HEIGHT: f64 = 720.0;

/// Returns `true` when `viewport` meets `minimum` in both dimensions.
pub fn is_supported(viewport: Viewport, minimum: Viewport) -> bool {
    viewport.width >= minimum.width && viewport.height >= minimum.height
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Outcome of feeding a new viewport through the gate.
pub struct GateTransition {
    pub was_supported: bool,
    pub is_supported: bool,
}

impl GateTransition {
    pub fn evaluate(previous: Viewport, next: Viewport, minimum: Viewport) -> Self {
        Self {
            was_supported: is_supported(previous, minimum),
            is_supported: is_supported(next, minimum),
        }
    }

    pub fn changed(self) -> bool {
        self.was_supported != self.is_supported
    }
}
