use cgmath::Zero;

use crate::fragment::{Fragment, FragmentKind, FragmentVec, ObjectId};
use crate::math::{project, Mat4, Vec3, Vec4};
use crate::properties::{ClipRegion, SurfaceRef};

/// A single filled triangle with vertices in scene coordinates
#[derive(Debug, Clone)]
pub struct Triangle {
    pub points: [Vec4; 3],
    pub surface: SurfaceRef,
    pub id: ObjectId,
}

impl Triangle {
    pub fn new(id: ObjectId, points: [Vec4; 3], surface: SurfaceRef) -> Self {
        Self {
            points,
            surface,
            id,
        }
    }

    /// Appends this triangle's fragments under `transform` to `out`
    pub fn emit_fragments<'a>(&'a self, transform: Mat4, out: &mut FragmentVec<'a>) {
        self.emit(transform, None, out);
    }

    /// Always emits exactly one fragment, degenerate vertices included;
    /// the depth sorter is responsible for rejecting unusable geometry.
    pub(crate) fn emit<'a>(
        &'a self,
        transform: Mat4,
        clip: Option<&'a ClipRegion>,
        out: &mut FragmentVec<'a>,
    ) {
        let mut points = [Vec3::zero(); 3];
        for (out_pt, stored) in points.iter_mut().zip(&self.points) {
            *out_pt = project(transform * *stored);
        }
        out.push(Fragment {
            kind: FragmentKind::Triangle,
            points,
            surface: Some(&self.surface),
            line: None,
            object: self.id,
            seq: 0,
            point_size: 1.0,
            params: None,
            clip,
        });
    }
}
