//! # Fragments
//!
//! The output primitive of scene traversal: every scene object converts
//! itself into zero or more [`Fragment`] values in a single shared
//! coordinate space. The depth sorter and rasterizer consume the flat
//! fragment sequence; nothing downstream walks the object tree again.

use crate::math::Vec3;
use crate::properties::{ClipRegion, LineProps, PointParams, SurfaceProps};

/// Identifies the scene object that emitted a fragment.
///
/// Plain copyable id chosen by the scene builder (for example an index
/// into its own widget table); this crate only carries it through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ObjectId(pub u64);

/// Primitive kind of a fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentKind {
    /// Filled triangle, 3 points
    Triangle,
    /// Straight line segment, 2 points
    LineSegment,
    /// Sized point marker, 1 point
    PathPoint,
}

impl FragmentKind {
    /// Number of meaningful entries in [`Fragment::points`]
    pub fn point_count(self) -> usize {
        match self {
            FragmentKind::Triangle => 3,
            FragmentKind::LineSegment => 2,
            FragmentKind::PathPoint => 1,
        }
    }
}

/// One renderable primitive in the common (post-transform) coordinate space
#[derive(Debug, Clone)]
pub struct Fragment<'a> {
    pub kind: FragmentKind,
    /// Transformed points; entries beyond `kind.point_count()` are zero
    pub points: [Vec3; 3],
    /// Fill appearance, set for triangles and point markers
    pub surface: Option<&'a SurfaceProps>,
    /// Stroke appearance, set for line segments and point markers
    pub line: Option<&'a LineProps>,
    /// Back-reference to the emitting object
    pub object: ObjectId,
    /// Emission counter within one object's emission call: restarts at 0,
    /// increments once per emitted fragment. Stable tie-break key for the
    /// depth sorter.
    pub seq: u32,
    /// Marker size for point fragments; 1.0 when no per-point size applies
    pub point_size: f64,
    /// Shared point-cloud parameters, set for point fragments only
    pub params: Option<&'a PointParams>,
    /// Clip region in effect, stamped by enclosing clip containers
    pub clip: Option<&'a ClipRegion>,
}

/// Caller-owned output sequence of one scene traversal
pub type FragmentVec<'a> = Vec<Fragment<'a>>;
