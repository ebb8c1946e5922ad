use cgmath::{Matrix4, SquareMatrix, Vector3};
use log::debug;

use crate::fragment::FragmentVec;
use crate::math::Mat4;
use crate::properties::ClipRegion;
use crate::scene::SceneObject;

/// A scene node owning child objects and a local transform.
///
/// Emission composes the inbound transform with the local one and visits
/// children in list order, so a subtree can be positioned as a unit.
/// Children are owned exclusively: dropping the container drops the whole
/// subtree.
#[derive(Debug)]
pub struct Container {
    pub objects: Vec<SceneObject>,
    pub transform: Mat4,
    /// When set, this region replaces any inherited one for the subtree
    /// and is stamped into every fragment emitted below
    pub clip: Option<ClipRegion>,
}

impl Container {
    /// Creates an empty container with an identity local transform
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
            transform: Matrix4::identity(),
            clip: None,
        }
    }

    /// Creates an empty clip-bearing container
    pub fn with_clip(clip: ClipRegion) -> Self {
        Self {
            objects: Vec::new(),
            transform: Matrix4::identity(),
            clip: Some(clip),
        }
    }

    /// Adds a child; children emit in insertion order
    pub fn add(&mut self, object: impl Into<SceneObject>) {
        self.objects.push(object.into());
    }

    /// Applies a translation on top of the current local transform
    pub fn translate(&mut self, offset: Vector3<f64>) {
        self.transform = self.transform * Matrix4::from_translation(offset);
    }

    /// Applies a uniform scale on top of the current local transform
    pub fn scale(&mut self, factor: f64) {
        self.transform = self.transform * Matrix4::from_scale(factor);
    }

    pub(crate) fn emit<'a>(
        &'a self,
        transform: Mat4,
        clip: Option<&'a ClipRegion>,
        out: &mut FragmentVec<'a>,
    ) {
        let combined = transform * self.transform;
        // the innermost clip region wins
        let clip = self.clip.as_ref().or(clip);
        debug!("traversing container with {} children", self.objects.len());
        for object in &self.objects {
            object.emit(combined, clip, out);
        }
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}
