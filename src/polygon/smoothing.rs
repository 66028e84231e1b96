//! Laplacian corner smoothing for closed rings.

use super::Polygon;
use crate::float_types::Real;
use nalgebra::Point2;

/// Soften corners by moving each vertex toward its two neighbours:
///
/// ```text
/// smoothed[i] = curr + factor * (prev + next - 2 * curr)
/// ```
///
/// Neighbours wrap around the ring. Every pass reads only the previous pass's
/// output, so the result does not depend on visiting order. `factor = 0` or
/// `passes = 0` returns the polygon unchanged. Useful factors lie in `[0, 0.2]`;
/// above `0.5` a pass overshoots.
pub fn smooth(polygon: &Polygon, factor: Real, passes: usize) -> Polygon {
    let n = polygon.len();
    if n < 3 || passes == 0 {
        return polygon.clone();
    }

    let mut current: Vec<Point2<Real>> = polygon.vertices().to_vec();
    let mut next = current.clone();
    for _ in 0..passes {
        for i in 0..n {
            let prev = current[(i + n - 1) % n];
            let curr = current[i];
            let after = current[(i + 1) % n];
            next[i] = Point2::new(
                curr.x + factor * (prev.x + after.x - 2.0 * curr.x),
                curr.y + factor * (prev.y + after.y - 2.0 * curr.y),
            );
        }
        std::mem::swap(&mut current, &mut next);
    }

    Polygon::from_vertices_unchecked(current)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::float_types::TAU;

    fn regular(n: usize, r: Real) -> Polygon {
        Polygon::new(
            (0..n)
                .map(|i| {
                    let a = TAU * i as Real / n as Real;
                    Point2::new(r * a.cos(), r * a.sin())
                })
                .collect(),
        )
        .expect("n >= 3")
    }

    #[test]
    fn zero_factor_is_identity() {
        let poly = Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(3.0, 0.1),
            Point2::new(2.5, 2.0),
            Point2::new(-0.5, 1.7),
        ])
        .expect("four vertices");
        for passes in 0..4 {
            assert_eq!(smooth(&poly, 0.0, passes), poly);
        }
    }

    #[test]
    fn preserves_count_and_winding() {
        let poly = regular(12, 2.0);
        let smoothed = smooth(&poly, 0.15, 3);
        assert_eq!(smoothed.len(), 12);
        assert!(smoothed.is_counter_clockwise());
    }

    #[test]
    fn pulls_a_spike_inward() {
        let poly = Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(2.0, 2.0),
            Point2::new(1.0, 6.0),
            Point2::new(0.0, 2.0),
        ])
        .expect("five vertices");
        let smoothed = smooth(&poly, 0.2, 1);
        // spike tip: 6 + 0.2 * (2 + 2 - 12)
        assert!((smoothed.vertices()[3].y - 4.4).abs() < 1e-9);
    }

    /// Variance of the per-vertex Laplacian magnitudes, a discrete measure of
    /// how unevenly the ring bends.
    fn curvature_variance(polygon: &Polygon) -> Real {
        let v = polygon.vertices();
        let n = v.len();
        let bends: Vec<Real> = (0..n)
            .map(|i| (v[(i + n - 1) % n].coords + v[(i + 1) % n].coords - v[i].coords * 2.0).norm())
            .collect();
        let mean = bends.iter().sum::<Real>() / n as Real;
        bends.iter().map(|b| (b - mean).powi(2)).sum::<Real>() / n as Real
    }

    #[test]
    fn one_pass_evens_out_curvature() {
        let poly = Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(5.0, 1.0),
            Point2::new(4.0, 3.0),
            Point2::new(1.0, 2.5),
            Point2::new(-1.0, 1.0),
        ])
        .expect("six vertices");
        let before = curvature_variance(&poly);
        for factor in [0.1, 0.2] {
            let after = curvature_variance(&smooth(&poly, factor, 1));
            assert!(after < before, "factor {factor}: {after} !< {before}");
        }
    }

    #[test]
    fn passes_are_order_independent() {
        let poly = Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(4.0, 1.0),
            Point2::new(0.0, 1.0),
        ])
        .expect("four vertices");
        let smoothed = smooth(&poly, 0.1, 1);
        // vertex 1 must use the original vertex 0, not an already smoothed one
        let expected_x = 4.0 + 0.1 * (0.0 + 4.0 - 8.0);
        assert!((smoothed.vertices()[1].x - expected_x).abs() < 1e-9);
    }
}
