use nalgebra::Point2;
use safezone::{Hull, convex_hull, dedupe, float_types::Real};

mod support;

use crate::support::{points, scattered_points};

#[test]
fn square_interior_point_excluded() {
    let input = points(&[[0.0, 0.0], [2.0, 0.0], [2.0, 2.0], [0.0, 2.0], [1.0, 1.0]]);
    let hull = convex_hull(&input);
    assert_eq!(
        hull,
        Hull::Polygon(
            safezone::Polygon::new(points(&[[0.0, 0.0], [2.0, 0.0], [2.0, 2.0], [0.0, 2.0]]))
                .expect("four vertices")
        ),
        "interior point must not appear on the hull"
    );
}

#[test]
fn small_inputs_pass_through() {
    for raw in [
        &[][..],
        &[[1.0, 2.0]][..],
        &[[1.0, 2.0], [-4.0, 0.5]][..],
    ] {
        let input = points(raw);
        assert_eq!(convex_hull(&input), Hull::Degenerate(input.clone()));
    }
}

#[test]
fn collinear_input_terminates() {
    let hull = convex_hull(&points(&[[0.0, 0.0], [1.0, 0.0], [2.0, 0.0]]));
    assert!(hull.is_degenerate());
    assert!(hull.len() <= 2, "got {:?}", hull.points());

    let diagonal: Vec<_> = (0..20).map(|i| Point2::new(i as Real, 2.0 * i as Real)).collect();
    assert!(convex_hull(&diagonal).is_degenerate());
}

#[test]
fn every_point_is_inside_or_on_hull() {
    for seed in 0..8 {
        let input = scattered_points(120, 5.0, seed);
        let hull = convex_hull(&input)
            .into_polygon()
            .expect("random cloud spans an area");

        assert!(hull.len() <= input.len(), "hull may only shrink");
        assert!(hull.is_counter_clockwise(), "seed {seed}: hull must wind CCW");
        assert!(hull.is_convex(), "seed {seed}: hull must be convex");

        let grown = safezone::expand(&hull, 1e-6);
        for p in &input {
            assert!(
                grown.contains_or_touches(p),
                "seed {seed}: point {p} escaped the hull"
            );
        }
    }
}

#[test]
fn hull_vertices_come_from_input() {
    let input = scattered_points(60, 3.0, 42);
    let hull = convex_hull(&input);
    for v in hull.points() {
        assert!(input.contains(v), "hull vertex {v} was fabricated");
    }
}

#[test]
fn dedupe_then_hull_on_noisy_square() {
    // every corner sampled several times with sub-tolerance jitter
    let mut raw = Vec::new();
    for [x, z] in [[0.0, 0.0], [3.0, 0.0], [3.0, 3.0], [0.0, 3.0]] {
        for k in 0..5 {
            let jitter = k as Real * 0.001;
            raw.push(Point2::new(x + jitter, z - jitter));
        }
    }
    let set = dedupe(&raw, 0.01);
    assert_eq!(set.len(), 4);
    let hull = convex_hull(set.points()).into_polygon().expect("square");
    assert_eq!(hull.len(), 4);
}

#[test]
fn small_scale_cloud_stays_inside_hull() {
    // a 5 mm cloud, as produced by a heavily down-scaled scene
    for seed in 0..8 {
        let input = scattered_points(120, 0.005, seed);
        let hull = convex_hull(&input)
            .into_polygon()
            .expect("random cloud spans an area");
        assert!(hull.is_convex(), "seed {seed}: hull must be convex");

        let grown = safezone::expand(&hull, 5e-7);
        for p in &input {
            assert!(
                grown.contains_or_touches(p),
                "seed {seed}: point {p} escaped the hull"
            );
        }
    }
}
