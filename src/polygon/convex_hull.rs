//! Gift-wrapping (Jarvis march) convex hull on the ground plane.
//!
//! Starting from the leftmost point, the march repeatedly picks the point that
//! leaves every other point on its left, until it wraps back to the start.
//! Runtime is O(n·h) for n input points and h hull vertices, which is fine for
//! the few hundred points a sampler produces.

use super::Polygon;
use crate::float_types::{Real, tolerance};
use nalgebra::Point2;
use std::cmp::Ordering;

/// Result of a hull computation.
#[derive(Clone, Debug, PartialEq)]
pub enum Hull {
    /// Strictly convex, counter-clockwise, at least three vertices.
    Polygon(Polygon),
    /// Fewer than three hull vertices: the input itself when it had fewer than
    /// three points, otherwise the (at most two) extreme points of a collinear
    /// or coincident set. Not renderable as an area.
    Degenerate(Vec<Point2<Real>>),
}

impl Hull {
    pub const fn is_degenerate(&self) -> bool {
        matches!(self, Hull::Degenerate(_))
    }

    pub fn len(&self) -> usize {
        match self {
            Hull::Polygon(p) => p.len(),
            Hull::Degenerate(pts) => pts.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn points(&self) -> &[Point2<Real>] {
        match self {
            Hull::Polygon(p) => p.vertices(),
            Hull::Degenerate(pts) => pts,
        }
    }

    /// The hull polygon, or `None` when degenerate.
    pub fn into_polygon(self) -> Option<Polygon> {
        match self {
            Hull::Polygon(p) => Some(p),
            Hull::Degenerate(_) => None,
        }
    }
}

/// Turn direction of the path p → q → r.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Collinear,
    Clockwise,
    CounterClockwise,
}

/// Classify p → q → r with `val = (q.y−p.y)(r.x−q.x) − (q.x−p.x)(r.y−q.y)`:
/// positive is clockwise, negative counter-clockwise.
///
/// The path counts as collinear when `|val| <= eps·|q−p|·|r−q|`, i.e. when the
/// sine of the turn angle is within `eps` of zero. The test is independent of
/// coordinate scale.
pub fn orientation(p: &Point2<Real>, q: &Point2<Real>, r: &Point2<Real>, eps: Real) -> Orientation {
    let val = (q.y - p.y) * (r.x - q.x) - (q.x - p.x) * (r.y - q.y);
    if val.abs() <= eps * (q - p).norm() * (r - q).norm() {
        Orientation::Collinear
    } else if val > 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::CounterClockwise
    }
}

/// Convex hull of `points`, counter-clockwise, using the crate [`tolerance`]
/// for the collinearity test.
pub fn convex_hull(points: &[Point2<Real>]) -> Hull {
    convex_hull_with_tolerance(points, tolerance())
}

/// Convex hull of `points` with an explicit collinearity tolerance.
///
/// Collinear points along a hull edge are dropped; only the extreme ones are
/// kept. The march stops after at most `points.len()` steps, so collinear or
/// coincident input always terminates.
pub fn convex_hull_with_tolerance(points: &[Point2<Real>], eps: Real) -> Hull {
    let n = points.len();
    if n < 3 {
        return Hull::Degenerate(points.to_vec());
    }

    // Leftmost point, lowest on ties, so the start is always a true corner
    let Some(start) = (0..n).min_by(|&a, &b| {
        let (pa, pb) = (points[a], points[b]);
        pa.x
            .partial_cmp(&pb.x)
            .unwrap_or(Ordering::Equal)
            .then(pa.y.partial_cmp(&pb.y).unwrap_or(Ordering::Equal))
    }) else {
        return Hull::Degenerate(Vec::new());
    };

    let mut hull = Vec::new();
    let mut p = start;
    for _ in 0..n {
        hull.push(points[p]);
        let origin = points[p];

        let mut q: Option<usize> = None;
        for (i, candidate) in points.iter().enumerate() {
            if *candidate == origin {
                continue;
            }
            let Some(current) = q else {
                q = Some(i);
                continue;
            };
            let best = points[current];
            match orientation(&origin, candidate, &best, eps) {
                Orientation::CounterClockwise => q = Some(i),
                Orientation::Collinear
                    if (candidate - origin).norm_squared() > (best - origin).norm_squared() =>
                {
                    q = Some(i)
                },
                _ => {},
            }
        }

        match q {
            Some(next) if points[next] != points[start] => p = next,
            _ => break,
        }
    }

    if hull.len() < 3 {
        Hull::Degenerate(hull)
    } else {
        Hull::Polygon(Polygon::from_vertices_unchecked(hull))
    }
}
