//! Derived market analytics for a trading dashboard.
//!
//! - [`rotation`]: Relative Rotation Graph trails (RS-Ratio / RS-Momentum)
//!   for a symbol against a benchmark.
//! - [`breadth`]: composite breadth momentum rows and percentile-ranked
//!   global daily breadth.
//!
//! Everything here is a pure function of caller-supplied, ordered series;
//! the crate fetches and persists nothing. [`cache::TrailCache`] optionally
//! memoizes trails for callers that recompute on every re-render.

pub mod align;
pub mod breadth;
pub mod cache;
pub mod config;
pub mod errors;
pub mod models;
pub mod rotation;
pub mod stats;

pub use errors::{AnalyticsError, Result};
