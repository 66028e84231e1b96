//! Radial safety-margin expansion.
//!
//! Each vertex is pushed `margin` further away from the vertex centroid. This
//! is a uniform radial offset, not a Minkowski sum with a disk: on elongated
//! footprints the gap measured perpendicular to a long edge is smaller than
//! `margin`.

use super::Polygon;
use crate::float_types::{EPSILON, Real};
use nalgebra::{Point2, Vector2};

/// Mean position of a polygon's vertices.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Centroid(pub Point2<Real>);

impl Centroid {
    /// `None` for an empty vertex list.
    pub fn of(vertices: &[Point2<Real>]) -> Option<Self> {
        if vertices.is_empty() {
            return None;
        }
        let sum = vertices
            .iter()
            .fold(Vector2::zeros(), |acc, v| acc + v.coords);
        Some(Centroid(Point2::from(sum / vertices.len() as Real)))
    }

    /// Unit direction from the centroid to `vertex`, `None` when they coincide.
    pub fn direction_to(&self, vertex: &Point2<Real>) -> Option<Vector2<Real>> {
        let d = vertex - self.0;
        let len = d.norm();
        (len > EPSILON).then(|| d / len)
    }
}

/// Push every vertex `margin` away from the polygon's centroid.
///
/// Vertex count and order are preserved. A vertex sitting on the centroid has
/// no outward direction and is left where it is.
pub fn expand(polygon: &Polygon, margin: Real) -> Polygon {
    match polygon.centroid() {
        Some(centroid) => expand_about(polygon, centroid, margin),
        None => polygon.clone(),
    }
}

/// [`expand`] with a precomputed centroid.
pub fn expand_about(polygon: &Polygon, centroid: Centroid, margin: Real) -> Polygon {
    let vertices = polygon
        .vertices()
        .iter()
        .map(|v| match centroid.direction_to(v) {
            Some(dir) => v + dir * margin,
            None => *v,
        })
        .collect();
    Polygon::from_vertices_unchecked(vertices)
}

#[cfg(test)]
mod test {
    use super::*;

    fn square() -> Polygon {
        Polygon::new(vec![
            Point2::new(-1.0, -1.0),
            Point2::new(1.0, -1.0),
            Point2::new(1.0, 1.0),
            Point2::new(-1.0, 1.0),
        ])
        .expect("four vertices")
    }

    #[test]
    fn zero_margin_is_identity() {
        let sq = square();
        assert_eq!(expand(&sq, 0.0), sq);
    }

    #[test]
    fn corners_move_along_diagonals() {
        let grown = expand(&square(), Real::sqrt(2.0));
        assert_eq!(grown.len(), 4);
        for (v, expected) in grown
            .vertices()
            .iter()
            .zip([[-2.0, -2.0], [2.0, -2.0], [2.0, 2.0], [-2.0, 2.0]])
        {
            assert!((v.x - expected[0]).abs() < 1e-9 && (v.y - expected[1]).abs() < 1e-9);
        }
        assert!(grown.is_counter_clockwise());
    }

    #[test]
    fn vertex_on_centroid_stays_put() {
        // centroid of these four is (0, 0), which is also the last vertex
        let poly = Polygon::new(vec![
            Point2::new(-1.0, 0.0),
            Point2::new(1.0, -1.0),
            Point2::new(0.0, 1.0),
            Point2::new(0.0, 0.0),
        ])
        .expect("four vertices");
        let grown = expand(&poly, 0.5);
        assert_eq!(grown.vertex(3), Some(Point2::new(0.0, 0.0)));
        assert!(grown.vertices().iter().all(|p| p.x.is_finite() && p.y.is_finite()));
    }

    #[test]
    fn empty_stays_empty() {
        assert!(expand(&Polygon::empty(), 1.0).is_empty());
    }
}
