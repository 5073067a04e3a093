#![forbid(unsafe_code)]

//! Runtime loop and lifecycle for viewport-pinned footers.
//!
//! # Role in footpin
//! `footpin-runtime` owns the driver thread: one reconciliation pass at
//! startup, then one per resize notification and one per poll tick until
//! the handle is disposed. It replaces global timer and event
//! registration with an explicit spawn/dispose lifecycle, so a hosted
//! environment can tear the positioner down cleanly.
//!
//! # How it fits in the system
//! The decision logic lives in `footpin-core` and is re-exported here;
//! most hosts depend on this crate alone, implement [`LayoutSurface`]
//! over their page, and feed resize events through the handle.

pub mod driver;

pub use driver::{spawn, PositionerHandle};

// Decision-layer re-exports so hosts depend on one crate.
pub use footpin_core::{
    desired_placement, reconcile, ConfigError, EdgeMetrics, LayoutSurface, Placement,
    PositionerConfig, DEFAULT_POLL_INTERVAL,
};
