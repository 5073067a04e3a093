#![forbid(unsafe_code)]

//! Positioner configuration: target element, class name, and measurement
//! policy.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Default poll cadence for layout changes that fire no resize event.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Configuration for a footer positioner.
///
/// The measurement policy defaults to integer-pixel rounding with
/// vertical margins counted toward the footer's outer height. Both knobs
/// stay configurable for hosts whose layout engines report differently,
/// but the defaults are the documented policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionerConfig {
    /// Selector for the footer element.
    pub footer_selector: String,
    /// Class that anchors the footer to the viewport's bottom edge.
    pub pinned_class: String,
    /// Count vertical margins toward the footer's outer height.
    pub include_margins: bool,
    /// Round both sides of the comparison to the nearest integer pixel.
    pub round_to_pixel: bool,
    /// Poll cadence for layout changes that fire no resize event.
    pub poll_interval: Duration,
}

impl Default for PositionerConfig {
    fn default() -> Self {
        Self {
            footer_selector: ".footer".to_string(),
            pinned_class: "fixed-bottom".to_string(),
            include_margins: true,
            round_to_pixel: true,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

impl PositionerConfig {
    /// Target a different footer element.
    #[must_use]
    pub fn with_footer_selector(mut self, selector: impl Into<String>) -> Self {
        self.footer_selector = selector.into();
        self
    }

    /// Use a different pinned class.
    #[must_use]
    pub fn with_pinned_class(mut self, class: impl Into<String>) -> Self {
        self.pinned_class = class.into();
        self
    }

    /// Set whether vertical margins count toward the outer height.
    #[must_use]
    pub fn with_include_margins(mut self, include: bool) -> Self {
        self.include_margins = include;
        self
    }

    /// Set whether measurements are rounded before comparison.
    #[must_use]
    pub fn with_round_to_pixel(mut self, round: bool) -> Self {
        self.round_to_pixel = round;
        self
    }

    /// Set the poll cadence.
    #[must_use]
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Reject configurations a driver cannot act on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.footer_selector.trim().is_empty() {
            return Err(ConfigError::EmptySelector);
        }
        if self.pinned_class.is_empty() {
            return Err(ConfigError::EmptyClass);
        }
        if self.pinned_class.chars().any(char::is_whitespace) {
            return Err(ConfigError::ClassContainsWhitespace(
                self.pinned_class.clone(),
            ));
        }
        if self.poll_interval.is_zero() {
            return Err(ConfigError::ZeroPollInterval);
        }
        Ok(())
    }
}

/// A configuration the positioner cannot act on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("footer selector is empty")]
    EmptySelector,
    #[error("pinned class is empty")]
    EmptyClass,
    #[error("pinned class {0:?} contains whitespace")]
    ClassContainsWhitespace(String),
    #[error("poll interval must be non-zero")]
    ZeroPollInterval,
}
