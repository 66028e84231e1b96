//! Ground points with a fixed merge tolerance.

use crate::float_types::Real;
use nalgebra::Point2;

/// A set of ground points `(x, z)` in which no two points lie within
/// `tolerance` of each other on both axes.
///
/// Closeness is checked per axis (an L∞ box), not by Euclidean distance.
/// Insertion is a linear scan, which is fine for the tens to low hundreds of
/// points the samplers produce.
#[derive(Clone, Debug, PartialEq)]
pub struct PointSet {
    points: Vec<Point2<Real>>,
    tolerance: Real,
}

impl PointSet {
    pub const fn new(tolerance: Real) -> Self {
        Self {
            points: Vec::new(),
            tolerance,
        }
    }

    /// Build a set from `points`, keeping the first of every cluster.
    pub fn from_points<I>(points: I, tolerance: Real) -> Self
    where
        I: IntoIterator<Item = Point2<Real>>,
    {
        let mut set = Self::new(tolerance);
        set.extend(points);
        set
    }

    /// Adds `point` unless an accepted point already lies within tolerance.
    /// Returns whether it was added.
    pub fn insert(&mut self, point: Point2<Real>) -> bool {
        let tol = self.tolerance;
        let taken = self
            .points
            .iter()
            .any(|p| (p.x - point.x).abs() <= tol && (p.y - point.y).abs() <= tol);
        if !taken {
            self.points.push(point);
        }
        !taken
    }

    pub fn points(&self) -> &[Point2<Real>] {
        &self.points
    }

    pub const fn tolerance(&self) -> Real {
        self.tolerance
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn into_points(self) -> Vec<Point2<Real>> {
        self.points
    }
}

impl Extend<Point2<Real>> for PointSet {
    fn extend<T: IntoIterator<Item = Point2<Real>>>(&mut self, iter: T) {
        for p in iter {
            self.insert(p);
        }
    }
}

/// Merge points that coincide within `tolerance` on both axes.
///
/// Output order is first-accepted-first.
pub fn dedupe(points: &[Point2<Real>], tolerance: Real) -> PointSet {
    PointSet::from_points(points.iter().copied(), tolerance)
}
