//! Errors raised by the safety zone pipeline.
//!
//! Only malformed input is reported here. Data-shape degeneracies (no ground
//! points, fewer than three distinct points) are not errors; they are reported
//! through [`ZoneStatus`](crate::zone::ZoneStatus).

use crate::float_types::Real;
use nalgebra::{Point2, Point3};

/// All the possible input problems we might encounter
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ZoneError {
    /// The mesh snapshot is structurally unusable
    #[error("(InvalidMesh) {0}")]
    InvalidMesh(String),
    /// A mesh position is NaN or infinite
    #[error("(InvalidCoordinate) The coordinate ({0}) has a NaN or infinite")]
    InvalidCoordinate(Point3<Real>),
    /// A triangle index points past the end of its part's positions
    #[error("(IndexOutOfRange) Part {part} references vertex {index} but only has {len} positions")]
    IndexOutOfRange { part: usize, index: u32, len: usize },
    /// A pipeline parameter is outside its accepted range
    #[error("(InvalidParameter) {name} = {value} is out of range")]
    InvalidParameter { name: &'static str, value: Real },
    /// A polygon was built from 1 or 2 vertices
    #[error("(TooFewVertices) A polygon needs 0 or at least 3 vertices, got {0}")]
    TooFewVertices(usize),
    /// An edit addressed a vertex the polygon does not have
    #[error("(VertexIndexOutOfRange) Vertex {index} requested on a polygon of {len} vertices")]
    VertexIndexOutOfRange { index: usize, len: usize },
    /// An edit tried to place a vertex at a NaN or infinite position
    #[error("(NonFiniteVertex) The ground point ({0}) has a NaN or infinite")]
    NonFiniteVertex(Point2<Real>),
}

pub type ZoneResult<T> = Result<T, ZoneError>;
