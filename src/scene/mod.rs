//! # Scene Objects
//!
//! The drawable object hierarchy and its traversal. A scene is a tree of
//! [`SceneObject`] values; calling [`SceneObject::emit_fragments`] on the
//! root walks it depth-first, composing each container's local transform
//! with the inbound one and converting every leaf into flat
//! [`Fragment`](crate::fragment::Fragment) records in a single shared
//! coordinate space.
//!
//! ## Object kinds
//!
//! - [`Triangle`] - one filled triangle
//! - [`PolyLine`] - connected line strip
//! - [`Mesh`] - height-field grid, wireframe and/or filled surface
//! - [`Points`] - point cloud of sized markers
//! - [`Container`] - owned children plus a local transform, optionally
//!   carrying a clip region for the subtree
//!
//! The set is closed on purpose: downstream depth sorting and
//! rasterization only ever see the three fragment kinds, and dispatch
//! stays an explicit `match` instead of an open trait object zoo.
//!
//! ## Degenerate data
//!
//! Non-finite coordinates (NaN/infinity from upstream domain errors)
//! never abort a traversal. The affected segment, cell or point is
//! silently dropped and its neighbours emit normally, so a partially
//! invalid dataset still produces a partially drawn scene.

mod chain;
pub mod container;
pub mod mesh;
pub mod points;
pub mod polyline;
pub mod triangle;

pub use container::Container;
pub use mesh::{Axis, Mesh};
pub use points::Points;
pub use polyline::PolyLine;
pub use triangle::Triangle;

use crate::fragment::FragmentVec;
use crate::math::Mat4;
use crate::properties::ClipRegion;

/// Closed set of drawable scene node kinds
#[derive(Debug)]
pub enum SceneObject {
    Triangle(Triangle),
    PolyLine(PolyLine),
    Mesh(Mesh),
    Points(Points),
    Container(Container),
}

impl SceneObject {
    /// Appends this object's fragments under the accumulated `transform`
    /// to the caller-owned `out`, in emission order.
    ///
    /// Every emission call is independent: per-object sequence numbering
    /// restarts and no state is kept between calls.
    pub fn emit_fragments<'a>(&'a self, transform: Mat4, out: &mut FragmentVec<'a>) {
        self.emit(transform, None, out);
    }

    pub(crate) fn emit<'a>(
        &'a self,
        transform: Mat4,
        clip: Option<&'a ClipRegion>,
        out: &mut FragmentVec<'a>,
    ) {
        match self {
            SceneObject::Triangle(triangle) => triangle.emit(transform, clip, out),
            SceneObject::PolyLine(polyline) => polyline.emit(transform, clip, out),
            SceneObject::Mesh(mesh) => mesh.emit(transform, clip, out),
            SceneObject::Points(points) => points.emit(transform, clip, out),
            SceneObject::Container(container) => container.emit(transform, clip, out),
        }
    }
}

impl From<Triangle> for SceneObject {
    fn from(value: Triangle) -> Self {
        SceneObject::Triangle(value)
    }
}

impl From<PolyLine> for SceneObject {
    fn from(value: PolyLine) -> Self {
        SceneObject::PolyLine(value)
    }
}

impl From<Mesh> for SceneObject {
    fn from(value: Mesh) -> Self {
        SceneObject::Mesh(value)
    }
}

impl From<Points> for SceneObject {
    fn from(value: Points) -> Self {
        SceneObject::Points(value)
    }
}

impl From<Container> for SceneObject {
    fn from(value: Container) -> Self {
        SceneObject::Container(value)
    }
}
