#![forbid(unsafe_code)]

//! Core: measurement policy and placement decisions for viewport-pinned footers.
//!
//! # Role in footpin
//! `footpin-core` is the decision layer. It owns the geometry helpers, the
//! [`LayoutSurface`] capability trait standing in for the page, and the
//! reconciliation routine that decides whether a footer is anchored to the
//! viewport's bottom edge or left in normal document flow.
//!
//! # Primary responsibilities
//! - **[`EdgeMetrics`]**: raw per-element measurements in CSS pixels.
//! - **[`LayoutSurface`]**: geometry reads and class writes, mockable.
//! - **[`PositionerConfig`]**: selector, class name, measurement policy,
//!   and poll cadence.
//! - **[`reconcile`]**: one measure → decide → toggle pass.
//!
//! # How it fits in the system
//! `footpin-runtime` drives [`reconcile`] from a background loop (startup,
//! resize notifications, poll ticks). This crate stays free of threads,
//! timers, and I/O so the decision logic is testable without a rendering
//! engine.

pub mod config;
pub mod geometry;
pub mod positioner;
pub mod surface;

pub use config::{ConfigError, PositionerConfig, DEFAULT_POLL_INTERVAL};
pub use geometry::{round_px, EdgeMetrics};
pub use positioner::{desired_placement, reconcile, Placement};
pub use surface::LayoutSurface;

#[cfg(any(test, feature = "test-helpers"))]
pub use surface::MockSurface;
