//! # Giniround Core
//!
//! The rounding primitive under test and the bridge that reaches it.
//!
//! A rounder turns a single-precision gini value into a signed integer. Its
//! tie-breaking rule is owned by the rounder, not by the caller: an exact
//! `.5` input may come back rounded away from zero or to the even neighbor.
//!
//! ## Quick Start
//!
//! ```rust
//! use giniround_core::{bridge, RounderKind};
//!
//! let rounder = RounderKind::TiesToEven.build();
//! assert_eq!(bridge(rounder.as_ref(), 42.7), 43);
//! assert_eq!(bridge(rounder.as_ref(), 42.5), 42);
//! ```

pub mod bridge;
pub mod rounding;

pub use bridge::bridge;
pub use rounding::{
    ParseRounderError, RoundToInt, RounderKind, RoundingConvention, TiesAway, TiesToEven, Truncate,
};
