// src/lib.rs
//! Tartan 3D Plotting Core
//!
//! Converts a hierarchy of geometric scene objects into a flat sequence of
//! draw fragments in a common coordinate space, ready for depth sorting
//! and rasterization. Built on cgmath for transforms.

pub mod fragment;
pub mod math;
pub mod properties;
pub mod scene;

// Re-export main types for convenience
pub use fragment::{Fragment, FragmentKind, FragmentVec, ObjectId};
pub use math::{Mat4, Vec3, Vec4};
pub use properties::{
    ClipRegion, LineProps, LineRef, PointParams, PointPath, SurfaceProps, SurfaceRef,
};
pub use scene::{Axis, Container, Mesh, Points, PolyLine, SceneObject, Triangle};
