#![forbid(unsafe_code)]

//! The layout surface: geometry reads and class writes.
//!
//! [`LayoutSurface`] abstracts the page the positioner operates on. The
//! capability set is deliberately small (viewport height, one element's
//! bottom edge, one class toggle) so that any DOM-like host can back it
//! and tests can run against [`MockSurface`] without a rendering engine.
//!
//! # Failure Modes
//!
//! None surfaced to callers. A missing element or unavailable window
//! reads as `None`, and class writes against a missing element are
//! silent no-ops.

use std::sync::{Arc, Mutex};

/// Capability trait for the environment the footer lives in.
pub trait LayoutSurface {
    /// Current height of the visible window, in CSS pixels.
    ///
    /// `None` when no window is available (detached or headless host).
    fn viewport_height(&self) -> Option<f64>;

    /// Natural bottom edge of the first element matching `selector`, as
    /// it would render in normal flow.
    ///
    /// `include_margins` selects whether vertical margins count toward
    /// the element's outer height. `None` when no element matches.
    fn bottom_edge(&self, selector: &str, include_margins: bool) -> Option<f64>;

    /// Add or remove `class` on the first element matching `selector`.
    ///
    /// Must be idempotent, and a silent no-op when no element matches.
    fn set_class(&mut self, selector: &str, class: &str, present: bool);
}

/// Shared surface: lets a host keep reading and writing the same surface
/// a background driver reconciles.
///
/// A poisoned lock reads as unavailable: the pass becomes a no-op
/// rather than a panic.
impl<S: LayoutSurface> LayoutSurface for Arc<Mutex<S>> {
    fn viewport_height(&self) -> Option<f64> {
        self.lock().ok()?.viewport_height()
    }

    fn bottom_edge(&self, selector: &str, include_margins: bool) -> Option<f64> {
        self.lock().ok()?.bottom_edge(selector, include_margins)
    }

    fn set_class(&mut self, selector: &str, class: &str, present: bool) {
        if let Ok(mut surface) = self.lock() {
            surface.set_class(selector, class, present);
        }
    }
}

#[cfg(any(test, feature = "test-helpers"))]
mod mock {
    use super::LayoutSurface;
    use crate::geometry::EdgeMetrics;
    use rustc_hash::FxHashMap;
    use std::collections::BTreeSet;

    /// In-memory [`LayoutSurface`] for tests and headless hosts.
    ///
    /// Elements are keyed by the exact selector string; there is no
    /// selector matching beyond string equality.
    #[derive(Debug, Clone, Default)]
    pub struct MockSurface {
        viewport_height: Option<f64>,
        elements: FxHashMap<String, MockElement>,
    }

    #[derive(Debug, Clone, Default)]
    struct MockElement {
        metrics: EdgeMetrics,
        classes: BTreeSet<String>,
    }

    impl MockSurface {
        /// A surface with no window and no elements.
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// A surface with a window of the given height.
        #[must_use]
        pub fn with_viewport(height: f64) -> Self {
            Self {
                viewport_height: Some(height),
                elements: FxHashMap::default(),
            }
        }

        /// Set or clear the window height.
        pub fn set_viewport_height(&mut self, height: impl Into<Option<f64>>) {
            self.viewport_height = height.into();
        }

        /// Insert (or re-measure) an element under `selector`.
        ///
        /// Classes already set on the element survive re-measurement.
        pub fn insert_element(&mut self, selector: &str, metrics: EdgeMetrics) {
            self.elements.entry(selector.to_string()).or_default().metrics = metrics;
        }

        /// Remove the element under `selector`, if any.
        pub fn remove_element(&mut self, selector: &str) {
            self.elements.remove(selector);
        }

        /// Whether the element under `selector` currently has `class`.
        ///
        /// `false` when the element is missing.
        #[must_use]
        pub fn has_class(&self, selector: &str, class: &str) -> bool {
            self.elements
                .get(selector)
                .is_some_and(|element| element.classes.contains(class))
        }
    }

    impl LayoutSurface for MockSurface {
        fn viewport_height(&self) -> Option<f64> {
            self.viewport_height
        }

        fn bottom_edge(&self, selector: &str, include_margins: bool) -> Option<f64> {
            self.elements
                .get(selector)
                .map(|element| element.metrics.bottom_edge(include_margins))
        }

        fn set_class(&mut self, selector: &str, class: &str, present: bool) {
            if let Some(element) = self.elements.get_mut(selector) {
                if present {
                    element.classes.insert(class.to_string());
                } else {
                    element.classes.remove(class);
                }
            }
        }
    }
}

#[cfg(any(test, feature = "test-helpers"))]
pub use mock::MockSurface;
