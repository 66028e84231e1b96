//! Traits for ground point sampling.

use crate::float_types::Real;
use crate::mesh::Mesh;
use crate::point_set::PointSet;
use nalgebra::Point2;

/// Extracts ground-relevant points `(x, z)` from a mesh.
pub trait PointSampler {
    /// Raw candidate points; may contain near-duplicates.
    ///
    /// A mesh without triangles, or whose bounds have no horizontal area,
    /// yields no candidates.
    fn candidates(&self, mesh: &Mesh) -> Vec<Point2<Real>>;

    /// Candidates merged within `tolerance` on both axes.
    fn sample(&self, mesh: &Mesh, tolerance: Real) -> PointSet {
        PointSet::from_points(self.candidates(mesh), tolerance)
    }
}
