use super::traits::PointSampler;
use crate::float_types::Real;
use crate::mesh::Mesh;
use nalgebra::Point2;

/// The four ground corners of the mesh's bounding box.
///
/// Coarsest footprint: a rectangle around everything, whatever the shape.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BoundingRect;

impl PointSampler for BoundingRect {
    fn candidates(&self, mesh: &Mesh) -> Vec<Point2<Real>> {
        match mesh.bounding_box() {
            Some(bbox) if bbox.has_horizontal_area() => bbox.ground_corners().to_vec(),
            _ => Vec::new(),
        }
    }
}
