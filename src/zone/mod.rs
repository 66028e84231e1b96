//! The safety zone: the pipeline result plus the state needed to edit it.
//!
//! [`SafetyZone::compute`] runs sample → dedupe → hull → expand → smooth and
//! keeps the polygon keyed to the mesh identity and parameters it came from.
//! Afterwards single vertices may be dragged with [`SafetyZone::set_vertex`];
//! those edits are a human override and are never re-validated. Recomputing
//! replaces the whole zone, edits included.

use crate::errors::ZoneResult;
use crate::float_types::Real;
use crate::mesh::{Mesh, MeshIdentity};
use crate::point_set::{PointSet, dedupe};
use crate::polygon::{Hull, Polygon, convex_hull, expand, smooth};
use crate::sampling::PointSampler;
use nalgebra::{Point2, Point3};
use tracing::{debug, info, warn};

pub mod params;

pub use params::ZoneParams;

/// How far the pipeline got for the current mesh and parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoneStatus {
    /// The polygon is a full, renderable zone.
    Complete,
    /// The mesh has no triangles or no candidate point survived sampling.
    EmptyInput,
    /// Fewer than three hull vertices could be formed.
    DegenerateHull { distinct_points: usize },
}

/// A ground-plane safety zone derived from one mesh.
#[derive(Clone, Debug)]
pub struct SafetyZone {
    polygon: Polygon,
    ground_points: PointSet,
    params: ZoneParams,
    source: MeshIdentity,
    status: ZoneStatus,
    edits: usize,
}

impl SafetyZone {
    /// Derive the safety zone of `mesh` under `params`.
    ///
    /// An empty mesh or a degenerate hull is not an error: the zone comes back
    /// with an empty polygon and the matching [`ZoneStatus`].
    ///
    /// ## Errors
    /// Malformed mesh data or out-of-range parameters.
    pub fn compute(mesh: &Mesh, params: &ZoneParams) -> ZoneResult<Self> {
        mesh.validate()?;
        params.validate()?;

        let candidates = params.strategy.candidates(mesh);
        let ground_points = dedupe(&candidates, params.merge_tolerance);
        debug!(
            strategy = params.strategy.name(),
            candidates = candidates.len(),
            distinct = ground_points.len(),
            merge_tolerance = ground_points.tolerance(),
            "Sampled ground points"
        );

        let (polygon, status) = if ground_points.is_empty() {
            warn!(mesh = %mesh.identity.name, "No ground points, safety zone is empty");
            (Polygon::empty(), ZoneStatus::EmptyInput)
        } else {
            match convex_hull(ground_points.points()) {
                Hull::Polygon(hull) => {
                    debug!(hull_vertices = hull.len(), "Built convex hull");
                    let expanded = expand(&hull, params.margin);
                    let smoothed =
                        smooth(&expanded, params.smoothing_factor, params.smoothing_passes);
                    (smoothed, ZoneStatus::Complete)
                },
                Hull::Degenerate(points) => {
                    warn!(
                        mesh = %mesh.identity.name,
                        distinct_points = points.len(),
                        "Ground points do not span an area, safety zone is empty"
                    );
                    (
                        Polygon::empty(),
                        ZoneStatus::DegenerateHull {
                            distinct_points: points.len(),
                        },
                    )
                },
            }
        };

        info!(
            mesh = %mesh.identity.name,
            version = mesh.identity.version,
            vertices = polygon.len(),
            "Computed safety zone"
        );

        Ok(Self {
            polygon,
            ground_points,
            params: *params,
            source: mesh.identity.clone(),
            status,
            edits: 0,
        })
    }

    /// Replace this zone with a fresh computation. Manual edits are discarded.
    ///
    /// ## Errors
    /// As [`SafetyZone::compute`]; on error the current zone is left untouched.
    pub fn recompute(&mut self, mesh: &Mesh, params: &ZoneParams) -> ZoneResult<()> {
        let fresh = Self::compute(mesh, params)?;
        if self.edits > 0 {
            debug!(edits = self.edits, "Discarding manual edits on recompute");
        }
        *self = fresh;
        Ok(())
    }

    /// Whether `mesh` or `params` differ from what this zone was computed from.
    pub fn is_stale(&self, mesh: &Mesh, params: &ZoneParams) -> bool {
        self.source != mesh.identity || self.params != *params
    }

    /// Recompute only when stale. Returns whether a recomputation happened.
    ///
    /// ## Errors
    /// As [`SafetyZone::compute`].
    pub fn refresh(&mut self, mesh: &Mesh, params: &ZoneParams) -> ZoneResult<bool> {
        if !self.is_stale(mesh, params) {
            return Ok(false);
        }
        self.recompute(mesh, params)?;
        Ok(true)
    }

    pub const fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    /// Deduplicated ground points the hull was built from.
    pub fn ground_points(&self) -> &[Point2<Real>] {
        self.ground_points.points()
    }

    pub const fn params(&self) -> &ZoneParams {
        &self.params
    }

    pub const fn source(&self) -> &MeshIdentity {
        &self.source
    }

    pub const fn status(&self) -> ZoneStatus {
        self.status
    }

    /// Whether the polygon can be drawn as an area.
    pub fn is_renderable(&self) -> bool {
        self.polygon.len() >= 3
    }

    pub fn vertex_count(&self) -> usize {
        self.polygon.len()
    }

    pub fn vertex(&self, index: usize) -> Option<Point2<Real>> {
        self.polygon.vertex(index)
    }

    /// Vertex on the ground plane in 3D, `y = 0`.
    pub fn vertex_3d(&self, index: usize) -> Option<Point3<Real>> {
        self.vertex(index).map(|p| Point3::new(p.x, 0.0, p.y))
    }

    /// Move one vertex. Nothing else changes and convexity is not restored.
    ///
    /// ## Errors
    /// Out-of-range index or non-finite point.
    pub fn set_vertex(&mut self, index: usize, point: Point2<Real>) -> ZoneResult<()> {
        self.polygon.set_vertex(index, point)?;
        self.edits += 1;
        Ok(())
    }

    /// [`SafetyZone::set_vertex`] from a 3D drag position; `y` is dropped.
    ///
    /// ## Errors
    /// As [`SafetyZone::set_vertex`].
    pub fn set_vertex_3d(&mut self, index: usize, point: Point3<Real>) -> ZoneResult<()> {
        self.set_vertex(index, Point2::new(point.x, point.z))
    }

    /// Number of manual vertex edits since the last computation.
    pub const fn edit_count(&self) -> usize {
        self.edits
    }

    pub const fn is_edited(&self) -> bool {
        self.edits > 0
    }

    /// Closed outline on the ground plane, `y = 0`.
    pub fn outline_3d(&self) -> Vec<Point3<Real>> {
        self.polygon.outline_3d(0.0)
    }

    /// Flat triangles filling the zone, empty when not renderable.
    pub fn triangulate(&self) -> Vec<[Point2<Real>; 3]> {
        self.polygon.triangulate()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::mesh::MeshPart;
    use crate::sampling::SamplingStrategy;

    fn boxed(version: u64) -> Mesh {
        Mesh::new(
            vec![MeshPart::cuboid(Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 1.0, 2.0))],
            1.0,
            MeshIdentity::new("box", version),
        )
    }

    #[test]
    fn box_gives_expanded_square() {
        let params = ZoneParams::new(0.5).with_smoothing(0.0, 0);
        let zone = SafetyZone::compute(&boxed(1), &params).expect("valid input");
        assert_eq!(zone.status(), ZoneStatus::Complete);
        assert_eq!(zone.vertex_count(), 4);
        assert!(zone.polygon().is_counter_clockwise());
        assert!(zone.polygon().area() > 4.0);
    }

    #[test]
    fn empty_mesh_is_not_an_error() {
        let mesh = Mesh::new(Vec::new(), 1.0, MeshIdentity::new("nothing", 1));
        let zone = SafetyZone::compute(&mesh, &ZoneParams::new(1.0)).expect("valid input");
        assert_eq!(zone.status(), ZoneStatus::EmptyInput);
        assert!(!zone.is_renderable());
    }

    #[test]
    fn edits_are_discarded_on_recompute() {
        let params = ZoneParams::new(0.5).with_strategy(SamplingStrategy::BoundingRect);
        let mut zone = SafetyZone::compute(&boxed(1), &params).expect("valid input");
        zone.set_vertex(0, Point2::new(-5.0, -5.0)).expect("index in range");
        assert!(zone.is_edited());

        assert!(!zone.is_stale(&boxed(1), &params));
        assert!(!zone.refresh(&boxed(1), &params).expect("valid input"));
        assert!(zone.is_edited(), "an up-to-date zone keeps its edits");

        assert!(zone.refresh(&boxed(2), &params).expect("valid input"));
        assert!(!zone.is_edited());
        assert_ne!(zone.vertex(0), Some(Point2::new(-5.0, -5.0)));
        assert_eq!(zone.source().version, 2);
    }

    #[test]
    fn failed_recompute_keeps_zone() {
        let params = ZoneParams::new(0.5);
        let mut zone = SafetyZone::compute(&boxed(1), &params).expect("valid input");
        let before = zone.polygon().clone();
        assert!(zone.recompute(&boxed(2), &ZoneParams::new(-1.0)).is_err());
        assert_eq!(zone.polygon(), &before);
        assert_eq!(zone.source().version, 1);
    }
}
