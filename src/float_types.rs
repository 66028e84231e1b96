// Re-export parry for the appropriate float size
#[cfg(feature = "f64")]
pub use parry3d_f64 as parry3d;

#[cfg(feature = "f32")]
pub use parry3d;

// Our Real scalar type:
#[cfg(feature = "f32")]
pub type Real = f32;
#[cfg(feature = "f64")]
pub type Real = f64;

use core::str::FromStr;
use std::sync::OnceLock;

/// Fixed epsilon for zero-length and orientation checks.
#[cfg(feature = "f32")]
pub const EPSILON: Real = 1e-4;
/// Fixed epsilon for zero-length and orientation checks.
#[cfg(feature = "f64")]
pub const EPSILON: Real = 1e-8;

/// Lazily-initialized tolerance on the sine of the turn angle in the hull
/// orientation test.
/// Defaults depend on precision (`f32` vs `f64`), but can be overridden:
///  1) **Build-time**: set env var `SAFEZONE_TOLERANCE` (e.g. `SAFEZONE_TOLERANCE=1e-6 cargo build`)
///  2) **Runtime**: call [`set_tolerance`] once before using the library
static TOLERANCE_CELL: OnceLock<Real> = OnceLock::new();

#[inline]
const fn default_tolerance() -> Real {
    #[cfg(feature = "f32")]
    {
        1e-4
    }
    #[cfg(feature = "f64")]
    {
        1e-6
    }
}

/// Returns the current tolerance value.
/// If not set yet, it tries `SAFEZONE_TOLERANCE` (parsed as the active `Real`) and
/// falls back to a sensible default.
pub fn tolerance() -> Real {
    *TOLERANCE_CELL.get_or_init(|| {
        // Compile-time env if provided, inherited by dependencies
        if let Some(environment_variable) = option_env!("SAFEZONE_TOLERANCE") {
            if let Ok(value) = Real::from_str(environment_variable) {
                return value.max(Real::EPSILON);
            }
        }
        default_tolerance()
    })
}

/// Set the tolerance programmatically once (subsequent calls are ignored).
/// Call near program start: `safezone::float_types::set_tolerance(1e-6);`
pub fn set_tolerance(value: Real) {
    let _ = TOLERANCE_CELL.set(value.max(Real::EPSILON));
}

// Tau
/// The full circle constant (τ)
#[cfg(feature = "f32")]
pub const TAU: Real = core::f32::consts::TAU;
/// The full circle constant (τ)
#[cfg(feature = "f64")]
pub const TAU: Real = core::f64::consts::TAU;

// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// Pipeline defaults
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// Margin and scene scale deliberately have no default: both depend on the
// units of the loaded model and must be supplied by the caller.

/// Per-axis distance under which two ground points are merged.
pub const DEFAULT_MERGE_TOLERANCE: Real = 0.01;
/// Height band above the lowest vertex that counts as ground contact.
pub const DEFAULT_GROUND_TOLERANCE: Real = 0.1;
/// Fraction of the horizontal half-extent beyond which a vertex is extremal.
pub const DEFAULT_EXTREMAL_FRACTION: Real = 0.75;
/// Cells per axis of the downward ray-casting grid.
pub const DEFAULT_GRID_STEPS: u32 = 16;
/// Largest accepted ray-casting grid, per axis.
pub const MAX_GRID_STEPS: u32 = 1024;
/// Laplacian weight of the corner smoothing pass.
pub const DEFAULT_SMOOTHING_FACTOR: Real = 0.1;
/// Number of corner smoothing passes.
pub const DEFAULT_SMOOTHING_PASSES: usize = 1;
/// Largest smoothing factor accepted; above this a pass overshoots its neighbours.
pub const MAX_SMOOTHING_FACTOR: Real = 0.5;
