use crate::errors::{ZoneError, ZoneResult};
use crate::float_types::{
    DEFAULT_MERGE_TOLERANCE, DEFAULT_SMOOTHING_FACTOR, DEFAULT_SMOOTHING_PASSES,
    MAX_SMOOTHING_FACTOR, Real,
};
use crate::sampling::SamplingStrategy;

/// Everything a safety zone computation depends on besides the mesh.
///
/// The margin is in the same units as the scaled mesh and has no default.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoneParams {
    /// Outward offset of every hull vertex
    pub margin: Real,
    pub smoothing_factor: Real,
    pub smoothing_passes: usize,
    /// Per-axis distance under which sampled points are merged
    pub merge_tolerance: Real,
    pub strategy: SamplingStrategy,
}

impl ZoneParams {
    pub fn new(margin: Real) -> Self {
        Self {
            margin,
            smoothing_factor: DEFAULT_SMOOTHING_FACTOR,
            smoothing_passes: DEFAULT_SMOOTHING_PASSES,
            merge_tolerance: DEFAULT_MERGE_TOLERANCE,
            strategy: SamplingStrategy::default(),
        }
    }

    pub const fn with_smoothing(mut self, factor: Real, passes: usize) -> Self {
        self.smoothing_factor = factor;
        self.smoothing_passes = passes;
        self
    }

    pub const fn with_merge_tolerance(mut self, tolerance: Real) -> Self {
        self.merge_tolerance = tolerance;
        self
    }

    pub const fn with_strategy(mut self, strategy: SamplingStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// ## Errors
    /// [`ZoneError::InvalidParameter`] naming the first offending field.
    pub fn validate(&self) -> ZoneResult<()> {
        if !(self.margin.is_finite() && self.margin >= 0.0) {
            return Err(ZoneError::InvalidParameter {
                name: "margin",
                value: self.margin,
            });
        }
        if !(0.0..=MAX_SMOOTHING_FACTOR).contains(&self.smoothing_factor) {
            return Err(ZoneError::InvalidParameter {
                name: "smoothing_factor",
                value: self.smoothing_factor,
            });
        }
        if !(self.merge_tolerance.is_finite() && self.merge_tolerance >= 0.0) {
            return Err(ZoneError::InvalidParameter {
                name: "merge_tolerance",
                value: self.merge_tolerance,
            });
        }
        self.strategy.validate()
    }
}
