//! Ground-plane polygons and the stages that shape them.
//!
//! Points are `nalgebra::Point2` with `x` = world x and `y` = world z. Every
//! polygon produced by [`convex_hull`] winds counter-clockwise in that frame,
//! and [`expand`] / [`smooth`] keep both the vertex count and the order.

use crate::errors::{ZoneError, ZoneResult};
use crate::float_types::{EPSILON, Real};
use geo::{Area, Coord, Intersects, LineString, Polygon as GeoPolygon, TriangulateEarcut};
use nalgebra::{Point2, Point3};

pub mod convex_hull;
pub mod expand;
pub mod smoothing;

pub use convex_hull::{Hull, convex_hull};
pub use expand::{Centroid, expand, expand_about};
pub use smoothing::smooth;

/// Closed ring of ground points. The edge from the last vertex back to the
/// first is implicit.
///
/// A polygon is either empty or has at least three vertices.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point2<Real>>,
}

impl Polygon {
    /// ## Errors
    /// [`ZoneError::TooFewVertices`] for one or two vertices.
    pub fn new(vertices: Vec<Point2<Real>>) -> ZoneResult<Self> {
        match vertices.len() {
            1 | 2 => Err(ZoneError::TooFewVertices(vertices.len())),
            _ => Ok(Self { vertices }),
        }
    }

    pub const fn empty() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }

    /// Stages that only move vertices reuse this to skip the length check.
    pub(crate) const fn from_vertices_unchecked(vertices: Vec<Point2<Real>>) -> Self {
        Self { vertices }
    }

    pub fn vertices(&self) -> &[Point2<Real>] {
        &self.vertices
    }

    pub fn into_vertices(self) -> Vec<Point2<Real>> {
        self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertex(&self, index: usize) -> Option<Point2<Real>> {
        self.vertices.get(index).copied()
    }

    /// Overwrite one vertex in place and return the previous position.
    ///
    /// No convexity or ordering check is made; a hand-edited polygon is allowed
    /// to become concave or even self-intersecting.
    ///
    /// ## Errors
    /// [`ZoneError::VertexIndexOutOfRange`] or [`ZoneError::NonFiniteVertex`].
    pub fn set_vertex(&mut self, index: usize, point: Point2<Real>) -> ZoneResult<Point2<Real>> {
        if !(point.x.is_finite() && point.y.is_finite()) {
            return Err(ZoneError::NonFiniteVertex(point));
        }
        let len = self.vertices.len();
        let slot = self
            .vertices
            .get_mut(index)
            .ok_or(ZoneError::VertexIndexOutOfRange { index, len })?;
        Ok(std::mem::replace(slot, point))
    }

    /// Mean of the vertices, `None` when empty.
    pub fn centroid(&self) -> Option<Centroid> {
        Centroid::of(&self.vertices)
    }

    pub fn to_geo(&self) -> GeoPolygon<Real> {
        let coords: Vec<Coord<Real>> = self
            .vertices
            .iter()
            .map(|p| Coord { x: p.x, y: p.y })
            .collect();
        GeoPolygon::new(LineString::new(coords), Vec::new())
    }

    /// Positive for counter-clockwise winding.
    pub fn signed_area(&self) -> Real {
        self.to_geo().signed_area()
    }

    pub fn area(&self) -> Real {
        self.to_geo().unsigned_area()
    }

    pub fn is_counter_clockwise(&self) -> bool {
        self.signed_area() > 0.0
    }

    /// Whether every corner turns the same way (collinear corners allowed).
    pub fn is_convex(&self) -> bool {
        let n = self.vertices.len();
        if n < 3 {
            return false;
        }
        let mut sign = 0.0;
        for i in 0..n {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % n];
            let c = self.vertices[(i + 2) % n];
            let cross = (b - a).perp(&(c - b));
            if cross.abs() <= EPSILON {
                continue;
            }
            if sign == 0.0 {
                sign = cross.signum();
            } else if cross.signum() != sign {
                return false;
            }
        }
        sign != 0.0
    }

    /// Whether `point` lies inside the polygon or on its boundary.
    pub fn contains_or_touches(&self, point: &Point2<Real>) -> bool {
        !self.is_empty() && self.to_geo().intersects(&Coord { x: point.x, y: point.y })
    }

    /// Ear-clipped triangles covering the polygon, as indices into [`Polygon::vertices`].
    pub fn triangle_indices(&self) -> Vec<[usize; 3]> {
        if self.vertices.len() < 3 {
            return Vec::new();
        }
        self.to_geo()
            .earcut_triangles_raw()
            .triangle_indices
            .chunks_exact(3)
            .map(|tri| [tri[0], tri[1], tri[2]])
            .collect()
    }

    /// Ear-clipped triangles covering the polygon, for rendering as a flat shape.
    pub fn triangulate(&self) -> Vec<[Point2<Real>; 3]> {
        self.triangle_indices()
            .into_iter()
            .map(|tri| tri.map(|i| self.vertices[i]))
            .collect()
    }

    /// The ring lifted back into 3D at a constant `elevation`.
    pub fn outline_3d(&self, elevation: Real) -> Vec<Point3<Real>> {
        self.vertices
            .iter()
            .map(|p| Point3::new(p.x, elevation, p.y))
            .collect()
    }
}
