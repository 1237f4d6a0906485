//! Float-to-int rounding primitives
//!
//! Every rounder implements [`RoundToInt`]. Results for inputs that are not
//! an exact tie are the same for every conforming rounder; ties are resolved
//! by whichever [`RoundingConvention`] the rounder carries.
//!
//! Out-of-range magnitudes and NaN go through Rust's saturating `as`
//! conversion. Nothing here guards against them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Narrow interface to a rounding primitive.
pub trait RoundToInt {
    /// Round `x` to a nearby integer.
    fn round_to_int(&self, x: f32) -> i32;

    /// Out-parameter form of [`RoundToInt::round_to_int`].
    ///
    /// Both forms must produce the same value for the same input.
    fn round_into(&self, x: f32, out: &mut i32) {
        *out = self.round_to_int(x);
    }

    /// Short identifier used in reports and logs.
    fn name(&self) -> &'static str;
}

/// Tie-breaking conventions a conforming rounder may follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingConvention {
    /// Ties go to the candidate with the greater magnitude.
    HalfAwayFromZero,
    /// Ties go to the even candidate.
    HalfToEven,
}

impl fmt::Display for RoundingConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundingConvention::HalfAwayFromZero => write!(f, "round-half-away-from-zero"),
            RoundingConvention::HalfToEven => write!(f, "round-half-to-even"),
        }
    }
}

/// Round-to-nearest with ties to even, the default FPU rounding mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct TiesToEven;

impl RoundToInt for TiesToEven {
    fn round_to_int(&self, x: f32) -> i32 {
        x.round_ties_even() as i32
    }

    fn name(&self) -> &'static str {
        "ties-to-even"
    }
}

/// Round-to-nearest with ties away from zero (C `roundf`).
#[derive(Debug, Clone, Copy, Default)]
pub struct TiesAway;

impl RoundToInt for TiesAway {
    fn round_to_int(&self, x: f32) -> i32 {
        x.round() as i32
    }

    fn name(&self) -> &'static str {
        "ties-away"
    }
}

/// Truncation toward zero. Not a conforming rounder: `42.7` becomes `42`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Truncate;

impl RoundToInt for Truncate {
    fn round_to_int(&self, x: f32) -> i32 {
        x as i32
    }

    fn name(&self) -> &'static str {
        "truncate"
    }
}

/// Selector for the rounders shipped with this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RounderKind {
    #[default]
    TiesToEven,
    TiesAway,
    Truncate,
}

impl RounderKind {
    pub const ALL: [RounderKind; 3] = [RounderKind::TiesToEven, RounderKind::TiesAway, RounderKind::Truncate];

    pub fn build(self) -> Box<dyn RoundToInt> {
        match self {
            RounderKind::TiesToEven => Box::new(TiesToEven),
            RounderKind::TiesAway => Box::new(TiesAway),
            RounderKind::Truncate => Box::new(Truncate),
        }
    }

    /// The tie convention this rounder follows, if it conforms at all.
    pub fn convention(self) -> Option<RoundingConvention> {
        match self {
            RounderKind::TiesToEven => Some(RoundingConvention::HalfToEven),
            RounderKind::TiesAway => Some(RoundingConvention::HalfAwayFromZero),
            RounderKind::Truncate => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RounderKind::TiesToEven => "ties-to-even",
            RounderKind::TiesAway => "ties-away",
            RounderKind::Truncate => "truncate",
        }
    }
}

impl fmt::Display for RounderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown rounder `{0}` (expected one of: ties-to-even, ties-away, truncate)")]
pub struct ParseRounderError(pub String);

impl FromStr for RounderKind {
    type Err = ParseRounderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ties-to-even" | "even" | "fpu" => Ok(RounderKind::TiesToEven),
            "ties-away" | "away" => Ok(RounderKind::TiesAway),
            "truncate" | "trunc" => Ok(RounderKind::Truncate),
            _ => Err(ParseRounderError(s.to_string())),
        }
    }
}
