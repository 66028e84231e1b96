use super::traits::PointSampler;
use crate::float_types::{DEFAULT_EXTREMAL_FRACTION, DEFAULT_GROUND_TOLERANCE, Real};
use crate::mesh::Mesh;
use nalgebra::Point2;
use tracing::debug;

/// Keeps mesh vertices that either touch the ground or stick out sideways.
///
/// - **ground contact**: `|y - bbox.min.y| <= ground_tolerance`
/// - **extremal**: planar distance from the bounding-box center greater than
///   `extremal_fraction` of the larger horizontal half-extent. This catches
///   parts such as slide chutes whose widest point is off the ground.
///
/// Either rule alone is enough to keep a vertex.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VertexFilter {
    pub ground_tolerance: Real,
    pub extremal_fraction: Real,
}

impl Default for VertexFilter {
    fn default() -> Self {
        Self {
            ground_tolerance: DEFAULT_GROUND_TOLERANCE,
            extremal_fraction: DEFAULT_EXTREMAL_FRACTION,
        }
    }
}

impl PointSampler for VertexFilter {
    fn candidates(&self, mesh: &Mesh) -> Vec<Point2<Real>> {
        let Some(bbox) = mesh.bounding_box() else {
            return Vec::new();
        };
        if !bbox.has_horizontal_area() {
            return Vec::new();
        }

        let ground = bbox.mins.y;
        let center = bbox.ground_center();
        let reach = self.extremal_fraction * bbox.horizontal_half_extent();

        let mut grounded = 0usize;
        let mut extremal = 0usize;
        let points: Vec<Point2<Real>> = mesh
            .world_vertices()
            .into_iter()
            .filter_map(|v| {
                let planar = Point2::new(v.x, v.z);
                let on_ground = (v.y - ground).abs() <= self.ground_tolerance;
                let far_out = nalgebra::distance(&planar, &center) > reach;
                grounded += usize::from(on_ground);
                extremal += usize::from(far_out);
                (on_ground || far_out).then_some(planar)
            })
            .collect();

        debug!(grounded, extremal, kept = points.len(), "Vertex filter sampled mesh");
        points
    }
}
