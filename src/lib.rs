//! Ground-level **safety zones** for 3D playground equipment.
//!
//! A loaded model is handed over as a read-only [`Mesh`] snapshot. The
//! pipeline samples ground-relevant points from it, merges near-duplicates,
//! wraps them in a counter-clockwise convex hull, pushes the hull outward by a
//! safety margin and softens the corners:
//!
//! ```text
//! Mesh → sampling → dedupe → convex_hull → expand → smooth → SafetyZone
//! ```
//!
//! The resulting [`SafetyZone`] is an ordered, editable vertex list: single
//! vertices can be dragged afterwards without the zone being re-derived.
//!
//! # Example
//! ```
//! use safezone::{Mesh, MeshIdentity, MeshPart, SafetyZone, ZoneParams, ZoneStatus};
//! use nalgebra::{Point2, Point3};
//!
//! let deck = MeshPart::cuboid(Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 1.5, 2.0));
//! let mesh = Mesh::new(vec![deck], 1.0, MeshIdentity::new("deck", 1));
//!
//! let mut zone = SafetyZone::compute(&mesh, &ZoneParams::new(1.0)).unwrap();
//! assert_eq!(zone.status(), ZoneStatus::Complete);
//! assert_eq!(zone.vertex_count(), 4);
//!
//! zone.set_vertex(0, Point2::new(-3.0, -3.0)).unwrap();
//! assert_eq!(zone.vertex(0), Some(Point2::new(-3.0, -3.0)));
//! ```
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **parallel**: use rayon to cast the ray-sampling grid in parallel
//! - **wasm**: `wasm-bindgen` wrappers for the browser viewer

#![forbid(unsafe_code)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod errors;
pub mod float_types;
pub mod mesh;
pub mod point_set;
pub mod polygon;
pub mod sampling;
pub mod zone;

#[cfg(feature = "wasm")]
pub mod wasm;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use errors::{ZoneError, ZoneResult};
pub use mesh::{BoundingBox, Mesh, MeshIdentity, MeshPart};
pub use point_set::{PointSet, dedupe};
pub use polygon::{Centroid, Hull, Polygon, convex_hull, expand, smooth};
pub use sampling::{BoundingRect, PointSampler, RayCast, SamplingStrategy, VertexFilter};
pub use zone::{SafetyZone, ZoneParams, ZoneStatus};
