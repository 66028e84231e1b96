//! Ground point sampling strategies.
//!
//! Every strategy turns a [`Mesh`] into candidate ground points `(x, z)`;
//! the caller still has to deduplicate them and build a hull.

pub mod bounding_rect;
pub mod ray_cast;
pub mod traits;
pub mod vertex_filter;

pub use bounding_rect::BoundingRect;
pub use ray_cast::RayCast;
pub use traits::PointSampler;
pub use vertex_filter::VertexFilter;

use crate::errors::{ZoneError, ZoneResult};
use crate::float_types::{MAX_GRID_STEPS, Real};
use crate::mesh::Mesh;
use nalgebra::Point2;

/// Selectable sampling strategy, carried in the zone parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SamplingStrategy {
    VertexFilter(VertexFilter),
    RayCast(RayCast),
    BoundingRect,
}

impl Default for SamplingStrategy {
    fn default() -> Self {
        SamplingStrategy::VertexFilter(VertexFilter::default())
    }
}

impl SamplingStrategy {
    pub const fn name(&self) -> &'static str {
        match self {
            SamplingStrategy::VertexFilter(_) => "vertex-filter",
            SamplingStrategy::RayCast(_) => "ray-cast",
            SamplingStrategy::BoundingRect => "bounding-rect",
        }
    }

    /// ## Errors
    /// [`ZoneError::InvalidParameter`] for a negative or non-finite ground
    /// tolerance, an extremal fraction outside `[0, 1]`, or a ray grid finer
    /// than [`MAX_GRID_STEPS`].
    pub fn validate(&self) -> ZoneResult<()> {
        if let SamplingStrategy::RayCast(ray_cast) = self {
            if ray_cast.grid_steps.get() > MAX_GRID_STEPS {
                return Err(ZoneError::InvalidParameter {
                    name: "grid_steps",
                    value: ray_cast.grid_steps.get() as Real,
                });
            }
        }
        if let SamplingStrategy::VertexFilter(filter) = self {
            if !(filter.ground_tolerance.is_finite() && filter.ground_tolerance >= 0.0) {
                return Err(ZoneError::InvalidParameter {
                    name: "ground_tolerance",
                    value: filter.ground_tolerance,
                });
            }
            if !(0.0..=1.0).contains(&filter.extremal_fraction) {
                return Err(ZoneError::InvalidParameter {
                    name: "extremal_fraction",
                    value: filter.extremal_fraction,
                });
            }
        }
        Ok(())
    }
}

impl PointSampler for SamplingStrategy {
    fn candidates(&self, mesh: &Mesh) -> Vec<Point2<Real>> {
        match self {
            SamplingStrategy::VertexFilter(filter) => filter.candidates(mesh),
            SamplingStrategy::RayCast(ray_cast) => ray_cast.candidates(mesh),
            SamplingStrategy::BoundingRect => BoundingRect.candidates(mesh),
        }
    }
}
