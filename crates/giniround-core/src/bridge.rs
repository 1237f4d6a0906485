//! Call-through to the rounding primitive

use crate::rounding::RoundToInt;
use tracing::trace;

/// Forward `x` to `rounder` and hand back its result unchanged.
///
/// Goes through the out-parameter form of the primitive. Faults inside the
/// rounder propagate as-is.
pub fn bridge<R: RoundToInt + ?Sized>(rounder: &R, x: f32) -> i32 {
    let mut result = 0;
    rounder.round_into(x, &mut result);
    trace!(rounder = rounder.name(), input = x, result, "bridge call");
    result
}
