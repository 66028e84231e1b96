//! Test support library
//! Provides mesh fixtures & float helpers shared by the integration tests.

#![allow(dead_code)]

use nalgebra::{Point2, Point3};
use safezone::{Mesh, MeshIdentity, MeshPart, float_types::Real};

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Points from `[x, z]` pairs.
pub fn points(raw: &[[Real; 2]]) -> Vec<Point2<Real>> {
    raw.iter().map(|&[x, z]| Point2::new(x, z)).collect()
}

/// Deterministic pseudo-random ground points in `[-size, size]²`.
pub fn scattered_points(count: usize, size: Real, seed: u64) -> Vec<Point2<Real>> {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    let mut next = move || {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((state >> 11) as f64 / (1u64 << 53) as f64) as Real
    };
    (0..count)
        .map(|_| Point2::new((next() * 2.0 - 1.0) * size, (next() * 2.0 - 1.0) * size))
        .collect()
}

/// A small play structure: a deck on four posts with a slide running off
/// one side. The slide's far end is raised above the ground.
pub fn play_structure(version: u64) -> Mesh {
    let posts = [(0.0, 0.0), (1.8, 0.0), (1.8, 1.8), (0.0, 1.8)]
        .into_iter()
        .map(|(x, z)| {
            MeshPart::cuboid(Point3::new(x, 0.0, z), Point3::new(x + 0.2, 1.5, z + 0.2))
                .with_name("post")
        });
    let deck = MeshPart::cuboid(Point3::new(0.0, 1.5, 0.0), Point3::new(2.0, 1.6, 2.0))
        .with_name("deck");
    let slide = MeshPart::cuboid(Point3::new(2.0, 0.4, 0.7), Point3::new(5.0, 1.5, 1.3))
        .with_name("slide");

    let parts = posts.chain([deck, slide]).collect();
    Mesh::new(parts, 1.0, MeshIdentity::new("play-structure", version))
}
