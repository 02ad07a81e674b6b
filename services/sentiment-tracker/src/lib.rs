//! Bitcoin sentiment core
//!
//! The deterministic heart of the tracker: the axis vocabulary with its
//! fixed valence mapping, the three-bucket aggregation rule, and the
//! canonical snapshot document. Everything here is a pure function of its
//! inputs; no state survives a render.

pub mod axis;
pub mod snapshot;

pub use axis::{AxisRating, OverallSentiment, aggregate, aggregate_labels, resolve};
pub use snapshot::Snapshot;
