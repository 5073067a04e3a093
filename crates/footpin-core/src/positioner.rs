#![forbid(unsafe_code)]

//! Placement reconciliation: measure, decide, toggle.
//!
//! # Invariants
//!
//! 1. The footer is pinned iff the viewport height strictly exceeds the
//!    footer's natural bottom edge.
//! 2. Equal heights leave the footer in flow (class removed).
//! 3. A pass with any measurement unavailable writes nothing.
//! 4. Passes are idempotent: re-running under an unchanged layout leaves
//!    the class state unchanged.
//!
//! # Failure Modes
//!
//! None — unavailable measurements turn the pass into a no-op.

use crate::config::PositionerConfig;
use crate::geometry::round_px;
use crate::surface::LayoutSurface;

/// Where the footer should sit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Anchored to the viewport's bottom edge.
    Pinned,
    /// Normal document flow.
    InFlow,
}

impl Placement {
    /// Whether the pinned class should be present.
    #[must_use]
    pub const fn is_pinned(self) -> bool {
        matches!(self, Self::Pinned)
    }
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pinned => f.write_str("pinned"),
            Self::InFlow => f.write_str("in-flow"),
        }
    }
}

/// Decide placement from measured heights.
///
/// Pins iff the viewport is strictly taller than the footer's bottom
/// edge. With `round_to_pixel`, both sides are rounded to the nearest
/// integer pixel first, so sub-pixel layout noise cannot flip the class.
#[must_use]
pub fn desired_placement(viewport_height: f64, bottom_edge: f64, round_to_pixel: bool) -> Placement {
    let pinned = if round_to_pixel {
        round_px(viewport_height) > round_px(bottom_edge)
    } else {
        viewport_height > bottom_edge
    };
    if pinned {
        Placement::Pinned
    } else {
        Placement::InFlow
    }
}

/// One reconciliation pass over `surface`.
///
/// Measures the viewport and the footer's bottom edge under the policy in
/// `config`, decides the placement, and sets the pinned class to match.
/// Returns `None` without touching the surface when either measurement is
/// unavailable.
pub fn reconcile<S: LayoutSurface + ?Sized>(
    surface: &mut S,
    config: &PositionerConfig,
) -> Option<Placement> {
    let viewport = surface.viewport_height()?;
    let bottom = surface.bottom_edge(&config.footer_selector, config.include_margins)?;
    let placement = desired_placement(viewport, bottom, config.round_to_pixel);
    surface.set_class(
        &config.footer_selector,
        &config.pinned_class,
        placement.is_pinned(),
    );
    Some(placement)
}

#[cfg(test)]
mod tests {
    use super::{desired_placement, reconcile, Placement};
    use crate::config::PositionerConfig;
    use crate::geometry::EdgeMetrics;
    use crate::surface::{LayoutSurface, MockSurface};

    fn surface_with_footer(viewport: f64, metrics: EdgeMetrics) -> MockSurface {
        let mut surface = MockSurface::with_viewport(viewport);
        surface.insert_element(".footer", metrics);
        surface
    }

    #[test]
    fn short_content_pins() {
        assert_eq!(desired_placement(800.0, 600.0, true), Placement::Pinned);
    }

    #[test]
    fn overflowing_content_flows() {
        assert_eq!(desired_placement(500.0, 600.0, true), Placement::InFlow);
    }

    #[test]
    fn exact_fit_flows() {
        assert_eq!(desired_placement(600.0, 600.0, true), Placement::InFlow);
        assert_eq!(desired_placement(600.0, 600.0, false), Placement::InFlow);
    }

    #[test]
    fn rounding_absorbs_subpixel_noise() {
        // Raw comparison would pin; both sides round to 600.
        assert_eq!(desired_placement(600.4, 600.2, true), Placement::InFlow);
        assert_eq!(desired_placement(600.4, 600.2, false), Placement::Pinned);
    }

    #[test]
    fn rounding_can_pin_across_the_pixel_boundary() {
        // 599.6 rounds above 599.4: a one-pixel gap appears after rounding.
        assert_eq!(desired_placement(599.6, 599.4, true), Placement::Pinned);
    }

    #[test]
    fn reconcile_applies_pinned_class() {
        let mut surface = surface_with_footer(800.0, EdgeMetrics::new(560.0, 40.0, 0.0));
        let config = PositionerConfig::default();

        let placement = reconcile(&mut surface, &config);
        assert_eq!(placement, Some(Placement::Pinned));
        assert!(surface.has_class(".footer", "fixed-bottom"));
    }

    #[test]
    fn reconcile_removes_pinned_class() {
        let mut surface = surface_with_footer(500.0, EdgeMetrics::new(560.0, 40.0, 0.0));
        surface.set_class(".footer", "fixed-bottom", true);
        let config = PositionerConfig::default();

        let placement = reconcile(&mut surface, &config);
        assert_eq!(placement, Some(Placement::InFlow));
        assert!(!surface.has_class(".footer", "fixed-bottom"));
    }

    #[test]
    fn reconcile_is_idempotent() {
        let mut surface = surface_with_footer(800.0, EdgeMetrics::new(560.0, 40.0, 0.0));
        let config = PositionerConfig::default();

        let first = reconcile(&mut surface, &config);
        let after_first = surface.has_class(".footer", "fixed-bottom");
        let second = reconcile(&mut surface, &config);

        assert_eq!(first, second);
        assert_eq!(after_first, surface.has_class(".footer", "fixed-bottom"));
    }

    #[test]
    fn margin_policy_changes_the_decision() {
        // Bottom edge is 580 without margins, 620 with. Viewport 600 sits
        // exactly between the two.
        let metrics = EdgeMetrics::new(500.0, 80.0, 40.0);
        let mut with_margins = surface_with_footer(600.0, metrics);
        let mut without_margins = surface_with_footer(600.0, metrics);

        let include = PositionerConfig::default();
        let exclude = PositionerConfig::default().with_include_margins(false);

        assert_eq!(
            reconcile(&mut with_margins, &include),
            Some(Placement::InFlow)
        );
        assert_eq!(
            reconcile(&mut without_margins, &exclude),
            Some(Placement::Pinned)
        );
    }

    #[test]
    fn missing_footer_is_silent() {
        let mut surface = MockSurface::with_viewport(800.0);
        let config = PositionerConfig::default();
        assert_eq!(reconcile(&mut surface, &config), None);
    }

    #[test]
    fn missing_viewport_is_silent() {
        let mut surface = MockSurface::new();
        surface.insert_element(".footer", EdgeMetrics::new(560.0, 40.0, 0.0));
        surface.set_class(".footer", "fixed-bottom", true);
        let config = PositionerConfig::default();

        assert_eq!(reconcile(&mut surface, &config), None);
        // The class is left exactly as it was.
        assert!(surface.has_class(".footer", "fixed-bottom"));
    }

    #[test]
    fn custom_selector_and_class() {
        let mut surface = MockSurface::with_viewport(800.0);
        surface.insert_element("#page-footer", EdgeMetrics::new(560.0, 40.0, 0.0));
        let config = PositionerConfig::default()
            .with_footer_selector("#page-footer")
            .with_pinned_class("navbar-fixed-bottom");

        assert_eq!(reconcile(&mut surface, &config), Some(Placement::Pinned));
        assert!(surface.has_class("#page-footer", "navbar-fixed-bottom"));
    }

    #[test]
    fn placement_display() {
        assert_eq!(Placement::Pinned.to_string(), "pinned");
        assert_eq!(Placement::InFlow.to_string(), "in-flow");
    }
}
