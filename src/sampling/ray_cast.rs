use super::traits::PointSampler;
use crate::float_types::{DEFAULT_GRID_STEPS, Real};
use crate::mesh::{BoundingBox, Mesh};
use nalgebra::{Point2, Point3, Vector3};
use std::num::NonZeroU32;
use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Casts rays straight down over a regular grid spanning the mesh's
/// horizontal bounds and keeps the `(x, z)` of every cell center that hits.
///
/// The grid has `grid_steps × grid_steps` cells; rays start one unit above
/// the top of the mesh. At most [`MAX_GRID_STEPS`](crate::float_types::MAX_GRID_STEPS)
/// steps per axis pass validation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayCast {
    pub grid_steps: NonZeroU32,
}

impl Default for RayCast {
    fn default() -> Self {
        Self {
            grid_steps: NonZeroU32::new(DEFAULT_GRID_STEPS).unwrap_or(NonZeroU32::MIN),
        }
    }
}

impl RayCast {
    pub const fn new(grid_steps: NonZeroU32) -> Self {
        Self { grid_steps }
    }
}

/// Downward ray grid laid over a bounding box footprint.
struct Grid<'a> {
    bbox: BoundingBox,
    steps: usize,
    triangles: &'a [[Point3<Real>; 3]],
}

impl Grid<'_> {
    const fn cells(&self) -> usize {
        self.steps * self.steps
    }

    /// Ground position of the first hit under the center of `cell`, row by row.
    fn hit(&self, cell: usize) -> Option<Point2<Real>> {
        let size = self.bbox.size();
        let dx = size.x / self.steps as Real;
        let dz = size.z / self.steps as Real;
        let (i, j) = (cell % self.steps, cell / self.steps);
        let x = self.bbox.mins.x + (i as Real + 0.5) * dx;
        let z = self.bbox.mins.z + (j as Real + 0.5) * dz;
        let origin = Point3::new(x, self.bbox.maxs.y + 1.0, z);
        Mesh::cast_against(self.triangles, &origin, &-Vector3::y())
            .first()
            .map(|(p, _)| Point2::new(p.x, p.z))
    }
}

impl PointSampler for RayCast {
    fn candidates(&self, mesh: &Mesh) -> Vec<Point2<Real>> {
        let Some(bbox) = mesh.bounding_box() else {
            return Vec::new();
        };
        if !bbox.has_horizontal_area() {
            return Vec::new();
        }

        let triangles = mesh.world_triangles();
        let grid = Grid {
            bbox,
            steps: self.grid_steps.get() as usize,
            triangles: &triangles,
        };

        #[cfg(not(feature = "parallel"))]
        let points: Vec<Point2<Real>> = (0..grid.cells()).filter_map(|c| grid.hit(c)).collect();

        #[cfg(feature = "parallel")]
        let points: Vec<Point2<Real>> = (0..grid.cells())
            .into_par_iter()
            .filter_map(|c| grid.hit(c))
            .collect();

        debug!(cells = grid.cells(), hits = points.len(), "Ray cast sampled mesh");
        points
    }
}
