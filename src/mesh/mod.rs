//! Read-only mesh snapshot handed over by the scene loader.
//!
//! The loader walks its scene graph once and produces a [`Mesh`]: a list of
//! [`MeshPart`]s, each holding local positions plus the part's world
//! transform, and one uniform scene scale. Nothing in this crate mutates it.

use crate::errors::{ZoneError, ZoneResult};
use crate::float_types::{
    parry3d::{
        query::{Ray, RayCast},
        shape::Triangle,
    },
    {EPSILON, Real},
};
use nalgebra::{Isometry3, Matrix4, Point3, Vector3};
use std::sync::OnceLock;

pub mod bounding_box;

pub use bounding_box::BoundingBox;

/// Identity of the model a mesh snapshot was taken from.
///
/// A computed safety zone remembers the identity it was derived from so that
/// a changed model can be detected by comparing identities.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct MeshIdentity {
    pub name: String,
    pub version: u64,
}

impl MeshIdentity {
    pub fn new(name: impl Into<String>, version: u64) -> Self {
        Self {
            name: name.into(),
            version,
        }
    }
}

/// One drawable part of a model, in its own local frame.
#[derive(Clone, Debug)]
pub struct MeshPart {
    pub name: Option<String>,
    /// Local vertex positions
    pub positions: Vec<Point3<Real>>,
    /// Triangle corners as indices into `positions`.
    /// `None` means every three consecutive positions form one triangle.
    pub indices: Option<Vec<[u32; 3]>>,
    /// Local-to-world transform
    pub transform: Matrix4<Real>,
}

impl MeshPart {
    /// A non-indexed part with an identity transform.
    pub fn new(positions: Vec<Point3<Real>>) -> Self {
        Self {
            name: None,
            positions,
            indices: None,
            transform: Matrix4::identity(),
        }
    }

    /// An indexed part with an identity transform.
    pub fn indexed(positions: Vec<Point3<Real>>, indices: Vec<[u32; 3]>) -> Self {
        Self {
            name: None,
            positions,
            indices: Some(indices),
            transform: Matrix4::identity(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_transform(mut self, transform: Matrix4<Real>) -> Self {
        self.transform = transform;
        self
    }

    /// Closed axis-aligned box between `min` and `max`, twelve outward-facing triangles.
    pub fn cuboid(min: Point3<Real>, max: Point3<Real>) -> Self {
        let positions = vec![
            Point3::new(min.x, min.y, min.z),
            Point3::new(max.x, min.y, min.z),
            Point3::new(max.x, min.y, max.z),
            Point3::new(min.x, min.y, max.z),
            Point3::new(min.x, max.y, min.z),
            Point3::new(max.x, max.y, min.z),
            Point3::new(max.x, max.y, max.z),
            Point3::new(min.x, max.y, max.z),
        ];
        let indices = vec![
            // bottom
            [0, 1, 2],
            [0, 2, 3],
            // top
            [4, 6, 5],
            [4, 7, 6],
            // front (z = min)
            [0, 5, 1],
            [0, 4, 5],
            // back (z = max)
            [3, 2, 6],
            [3, 6, 7],
            // left (x = min)
            [0, 3, 7],
            [0, 7, 4],
            // right (x = max)
            [1, 5, 6],
            [1, 6, 2],
        ];
        Self::indexed(positions, indices)
    }

    pub fn triangle_count(&self) -> usize {
        match &self.indices {
            Some(indices) => indices.len(),
            None => self.positions.len() / 3,
        }
    }

    /// Local-space triangles, skipping any index that is out of range.
    fn local_triangles(&self) -> impl Iterator<Item = [Point3<Real>; 3]> + '_ {
        let indexed = self.indices.iter().flatten().filter_map(|tri| {
            Some([
                *self.positions.get(tri[0] as usize)?,
                *self.positions.get(tri[1] as usize)?,
                *self.positions.get(tri[2] as usize)?,
            ])
        });
        let soup = self
            .indices
            .is_none()
            .then(|| {
                self.positions
                    .chunks_exact(3)
                    .map(|c| [c[0], c[1], c[2]])
            })
            .into_iter()
            .flatten();
        indexed.chain(soup)
    }

    fn validate(&self, part: usize) -> ZoneResult<()> {
        if self.transform.iter().any(|m| !m.is_finite()) {
            return Err(ZoneError::InvalidMesh(format!(
                "part {part} has a non-finite world transform"
            )));
        }
        if let Some(p) = self
            .positions
            .iter()
            .find(|p| !(p.x.is_finite() && p.y.is_finite() && p.z.is_finite()))
        {
            return Err(ZoneError::InvalidCoordinate(*p));
        }
        match &self.indices {
            Some(indices) => {
                let len = self.positions.len();
                if let Some(&index) = indices.iter().flatten().find(|&&i| i as usize >= len) {
                    return Err(ZoneError::IndexOutOfRange { part, index, len });
                }
            },
            None => {
                if self.positions.len() % 3 != 0 {
                    return Err(ZoneError::InvalidMesh(format!(
                        "part {part} is non-indexed but has {} positions, not a multiple of 3",
                        self.positions.len()
                    )));
                }
            },
        }
        Ok(())
    }
}

/// Snapshot of a loaded model in world space.
///
/// Geometry changes go through [`Mesh::set_scale`] and [`Mesh::add_part`],
/// which drop the cached bounds and bump the version.
#[derive(Clone, Debug)]
pub struct Mesh {
    parts: Vec<MeshPart>,

    /// Uniform scene scale, applied after each part's transform
    scale: Real,

    pub identity: MeshIdentity,

    /// Lazily calculated world-space bounds.
    bounding_box: OnceLock<Option<BoundingBox>>,
}

impl Mesh {
    pub fn new(parts: Vec<MeshPart>, scale: Real, identity: MeshIdentity) -> Self {
        Self {
            parts,
            scale,
            identity,
            bounding_box: OnceLock::new(),
        }
    }

    /// Single-part, unscaled mesh built from world-space triangles.
    pub fn from_triangles(triangles: &[[Point3<Real>; 3]], identity: MeshIdentity) -> Self {
        let positions = triangles.iter().flat_map(|t| t.iter().copied()).collect();
        Self::new(vec![MeshPart::new(positions)], 1.0, identity)
    }

    pub fn parts(&self) -> &[MeshPart] {
        &self.parts
    }

    pub const fn scale(&self) -> Real {
        self.scale
    }

    /// Change the uniform scene scale. The model counts as changed.
    pub fn set_scale(&mut self, scale: Real) {
        self.scale = scale;
        self.bump_version();
    }

    /// Append a part. The model counts as changed.
    pub fn add_part(&mut self, part: MeshPart) {
        self.parts.push(part);
        self.bump_version();
    }

    /// Mark the underlying model as changed.
    pub fn bump_version(&mut self) {
        self.identity.version += 1;
        self.invalidate_bounding_box();
    }

    /// Forget the cached world bounds; they are rebuilt on next use.
    pub fn invalidate_bounding_box(&mut self) {
        self.bounding_box = OnceLock::new();
    }

    /// Check the snapshot for malformed data.
    ///
    /// ## Errors
    /// A non-positive or non-finite scale, a non-finite transform or position,
    /// an out-of-range index, or a non-indexed part whose position count is not
    /// a multiple of 3.
    pub fn validate(&self) -> ZoneResult<()> {
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(ZoneError::InvalidParameter {
                name: "scale",
                value: self.scale,
            });
        }
        self.parts
            .iter()
            .enumerate()
            .try_for_each(|(i, part)| part.validate(i))
    }

    pub fn triangle_count(&self) -> usize {
        self.parts.iter().map(MeshPart::triangle_count).sum()
    }

    #[inline]
    fn to_world(&self, part: &MeshPart, local: &Point3<Real>) -> Point3<Real> {
        part.transform.transform_point(local) * self.scale
    }

    /// Every triangle corner of every part, in world space.
    pub fn world_vertices(&self) -> Vec<Point3<Real>> {
        self.world_triangles().into_iter().flatten().collect()
    }

    /// Every triangle of every part, in world space.
    pub fn world_triangles(&self) -> Vec<[Point3<Real>; 3]> {
        self.parts
            .iter()
            .flat_map(|part| {
                part.local_triangles()
                    .map(move |tri| tri.map(|p| self.to_world(part, &p)))
            })
            .collect()
    }

    /// World-space bounds of all triangle corners, `None` for a mesh without triangles.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        *self
            .bounding_box
            .get_or_init(|| BoundingBox::from_points(&self.world_vertices()))
    }

    /// Casts a ray defined by `origin` + t * `direction` against all world-space
    /// triangles and returns a list of (intersection_point, distance), sorted by
    /// ascending distance.
    ///
    /// # Parameters
    /// - `origin`: The ray's start point.
    /// - `direction`: The ray's direction vector.
    ///
    /// # Returns
    /// A `Vec` of `(Point3<Real>, Real)` where:
    /// - `Point3<Real>` is the intersection coordinate in 3D,
    /// - `Real` is the ray parameter t from `origin`.
    pub fn ray_intersections(
        &self,
        origin: &Point3<Real>,
        direction: &Vector3<Real>,
    ) -> Vec<(Point3<Real>, Real)> {
        let triangles = self.world_triangles();
        Self::cast_against(&triangles, origin, direction)
    }

    /// Closest intersection of the ray with the mesh, if any.
    pub fn first_hit(
        &self,
        origin: &Point3<Real>,
        direction: &Vector3<Real>,
    ) -> Option<(Point3<Real>, Real)> {
        self.ray_intersections(origin, direction).into_iter().next()
    }

    /// Ray casting over an already transformed triangle list, so callers casting
    /// many rays only pay for the world transform once.
    pub(crate) fn cast_against(
        triangles: &[[Point3<Real>; 3]],
        origin: &Point3<Real>,
        direction: &Vector3<Real>,
    ) -> Vec<(Point3<Real>, Real)> {
        let ray = Ray::new(*origin, *direction);
        let iso = Isometry3::identity(); // Triangles are already in world space.

        let mut hits: Vec<(Point3<Real>, Real)> = triangles
            .iter()
            .filter_map(|&[a, b, c]| {
                let triangle = Triangle::new(a, b, c);
                triangle
                    .cast_ray(&iso, &ray, Real::MAX, true)
                    .map(|toi| (ray.point_at(toi), toi))
            })
            .collect();

        hits.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
        // shared edges report the same hit twice
        hits.dedup_by(|a, b| (a.1 - b.1).abs() < EPSILON);

        hits
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use nalgebra::Translation3;

    fn unit_box() -> Mesh {
        Mesh::new(
            vec![MeshPart::cuboid(
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 1.0, 1.0),
            )],
            1.0,
            MeshIdentity::new("box", 1),
        )
    }

    #[test]
    fn cuboid_has_twelve_triangles() {
        let mesh = unit_box();
        assert_eq!(mesh.triangle_count(), 12);
        assert_eq!(mesh.world_vertices().len(), 36);
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn scale_applies_after_transform() {
        let part = MeshPart::cuboid(Point3::origin(), Point3::new(1.0, 1.0, 1.0))
            .with_transform(Translation3::new(1.0, 0.0, 0.0).to_homogeneous());
        let mesh = Mesh::new(vec![part], 2.0, MeshIdentity::new("moved", 1));
        let bb = mesh.bounding_box().expect("mesh has triangles");
        assert_eq!(bb.mins, Point3::new(2.0, 0.0, 0.0));
        assert_eq!(bb.maxs, Point3::new(4.0, 2.0, 2.0));
    }

    #[test]
    fn downward_ray_hits_top_first() {
        let mesh = unit_box();
        let hits = mesh.ray_intersections(&Point3::new(0.3, 5.0, 0.6), &-Vector3::y());
        assert_eq!(hits.len(), 2, "top and bottom faces");
        assert!((hits[0].0.y - 1.0).abs() < 1e-9);
        assert!((hits[1].0.y - 0.0).abs() < 1e-9);

        let miss = mesh.first_hit(&Point3::new(3.0, 5.0, 0.5), &-Vector3::y());
        assert!(miss.is_none());
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let part = MeshPart::indexed(vec![Point3::origin(); 3], vec![[0, 1, 7]]);
        let mesh = Mesh::new(vec![part], 1.0, MeshIdentity::default());
        assert_eq!(
            mesh.validate(),
            Err(ZoneError::IndexOutOfRange {
                part: 0,
                index: 7,
                len: 3
            })
        );
    }

    #[test]
    fn non_positive_scale_is_rejected() {
        let mut mesh = unit_box();
        mesh.set_scale(0.0);
        assert!(matches!(
            mesh.validate(),
            Err(ZoneError::InvalidParameter { name: "scale", .. })
        ));
    }

    #[test]
    fn geometry_changes_refresh_bounds() {
        let mut mesh = unit_box();
        assert_eq!(mesh.bounding_box().map(|bb| bb.maxs.x), Some(1.0));

        mesh.set_scale(3.0);
        assert_eq!(mesh.identity.version, 2);
        assert_eq!(mesh.bounding_box().map(|bb| bb.maxs.x), Some(3.0));

        mesh.add_part(MeshPart::cuboid(
            Point3::new(4.0, 0.0, 0.0),
            Point3::new(5.0, 1.0, 1.0),
        ));
        assert_eq!(mesh.identity.version, 3);
        assert_eq!(mesh.parts().len(), 2);
        assert_eq!(mesh.bounding_box().map(|bb| bb.maxs.x), Some(15.0));
    }

    #[test]
    fn empty_mesh_has_no_bounds() {
        let mesh = Mesh::new(Vec::new(), 1.0, MeshIdentity::default());
        assert_eq!(mesh.triangle_count(), 0);
        assert!(mesh.bounding_box().is_none());
    }
}
