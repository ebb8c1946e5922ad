use cgmath::Zero;
use log::trace;

use crate::fragment::{Fragment, FragmentKind, FragmentVec, ObjectId};
use crate::math::{point4, project, vec3_finite, Mat4, Vec3};
use crate::properties::{ClipRegion, LineRef, PointParams, SurfaceRef};

/// A point cloud drawn as one sized marker per coordinate triple
#[derive(Debug, Clone)]
pub struct Points {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
    /// Per-point marker sizes; empty means every point uses the default
    pub sizes: Vec<f64>,
    pub surface: Option<SurfaceRef>,
    pub line: Option<LineRef>,
    /// Marker outline and scaling flags, shared by all emitted fragments
    pub params: PointParams,
    pub id: ObjectId,
}

impl Points {
    pub fn new(
        id: ObjectId,
        x: Vec<f64>,
        y: Vec<f64>,
        z: Vec<f64>,
        params: PointParams,
    ) -> Self {
        Self {
            x,
            y,
            z,
            sizes: Vec::new(),
            surface: None,
            line: None,
            params,
            id,
        }
    }

    /// Appends this cloud's fragments under `transform` to `out`
    pub fn emit_fragments<'a>(&'a self, transform: Mat4, out: &mut FragmentVec<'a>) {
        self.emit(transform, None, out);
    }

    /// Each point is checked independently; a non-finite point is dropped
    /// without affecting its neighbours.
    pub(crate) fn emit<'a>(
        &'a self,
        transform: Mat4,
        clip: Option<&'a ClipRegion>,
        out: &mut FragmentVec<'a>,
    ) {
        let mut count = self.x.len().min(self.y.len()).min(self.z.len());
        let has_sizes = !self.sizes.is_empty();
        if has_sizes {
            count = count.min(self.sizes.len());
        }

        let mut seq = 0;
        for i in 0..count {
            let point = project(transform * point4(self.x[i], self.y[i], self.z[i]));
            if !vec3_finite(point) {
                trace!("dropping non-finite point {}", i);
                continue;
            }
            out.push(Fragment {
                kind: FragmentKind::PathPoint,
                points: [point, Vec3::zero(), Vec3::zero()],
                surface: self.surface.as_deref(),
                line: self.line.as_deref(),
                object: self.id,
                seq,
                point_size: if has_sizes { self.sizes[i] } else { 1.0 },
                params: Some(&self.params),
                clip,
            });
            seq += 1;
        }
    }
}
