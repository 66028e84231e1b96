use crate::float_types::{EPSILON, Real};
use nalgebra::{Point2, Point3, Vector3, partial_max, partial_min};

/// Axis-aligned world-space bounds of a mesh.
///
/// `y` is elevation; the ground plane is spanned by `x` and `z`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub mins: Point3<Real>,
    pub maxs: Point3<Real>,
}

impl BoundingBox {
    #[inline]
    pub const fn new(mins: Point3<Real>, maxs: Point3<Real>) -> Self {
        Self { mins, maxs }
    }

    /// Tightest box around `points`, or `None` when there are none.
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Point3<Real>>,
    {
        let mut min_x = Real::MAX;
        let mut min_y = Real::MAX;
        let mut min_z = Real::MAX;
        let mut max_x = -Real::MAX;
        let mut max_y = -Real::MAX;
        let mut max_z = -Real::MAX;

        for p in points {
            min_x = *partial_min(&min_x, &p.x)?;
            min_y = *partial_min(&min_y, &p.y)?;
            min_z = *partial_min(&min_z, &p.z)?;

            max_x = *partial_max(&max_x, &p.x)?;
            max_y = *partial_max(&max_y, &p.y)?;
            max_z = *partial_max(&max_z, &p.z)?;
        }

        // Still uninitialized, no points seen
        if min_x > max_x {
            return None;
        }

        Some(Self::new(
            Point3::new(min_x, min_y, min_z),
            Point3::new(max_x, max_y, max_z),
        ))
    }

    #[inline]
    pub fn center(&self) -> Point3<Real> {
        nalgebra::center(&self.mins, &self.maxs)
    }

    /// Center projected onto the ground plane, as `(x, z)`.
    #[inline]
    pub fn ground_center(&self) -> Point2<Real> {
        let c = self.center();
        Point2::new(c.x, c.z)
    }

    #[inline]
    pub fn size(&self) -> Vector3<Real> {
        self.maxs - self.mins
    }

    /// The larger of the two horizontal half-extents (x and z).
    pub fn horizontal_half_extent(&self) -> Real {
        let size = self.size();
        0.5 * size.x.max(size.z)
    }

    /// Whether the box spans a non-zero area on the ground plane.
    ///
    /// A model with no height is fine; a model with no width or depth is not.
    pub fn has_horizontal_area(&self) -> bool {
        let size = self.size();
        size.x > EPSILON && size.z > EPSILON
    }

    /// The four corners of the box's ground footprint, counter-clockwise in `(x, z)`.
    pub fn ground_corners(&self) -> [Point2<Real>; 4] {
        [
            Point2::new(self.mins.x, self.mins.z),
            Point2::new(self.maxs.x, self.mins.z),
            Point2::new(self.maxs.x, self.maxs.z),
            Point2::new(self.mins.x, self.maxs.z),
        ]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn from_points_spans_all() {
        let pts = [
            Point3::new(1.0, 0.5, -2.0),
            Point3::new(-1.0, 3.0, 4.0),
            Point3::new(0.0, -1.0, 0.0),
        ];
        let bb = BoundingBox::from_points(&pts).expect("non-empty input");
        assert_eq!(bb.mins, Point3::new(-1.0, -1.0, -2.0));
        assert_eq!(bb.maxs, Point3::new(1.0, 3.0, 4.0));
        assert_eq!(bb.ground_center(), Point2::new(0.0, 1.0));
        assert_eq!(bb.horizontal_half_extent(), 3.0);
    }

    #[test]
    fn empty_input_has_no_box() {
        let pts: [Point3<Real>; 0] = [];
        assert!(BoundingBox::from_points(&pts).is_none());
    }

    #[test]
    fn flat_plate_still_has_area() {
        let bb = BoundingBox::new(Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 0.0, 1.0));
        assert!(bb.has_horizontal_area());

        let pole = BoundingBox::new(Point3::new(0.0, 0.0, 0.0), Point3::new(0.0, 5.0, 1.0));
        assert!(!pole.has_horizontal_area());
    }
}
