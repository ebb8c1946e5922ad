//! Height-field mesh: a 2D parameter grid carrying one height per grid
//! point, mapped onto a chosen spatial axis and rendered as a wireframe,
//! a filled surface, or both depending on which appearances are set.

use log::trace;

use crate::fragment::{Fragment, FragmentKind, FragmentVec, ObjectId};
use crate::math::{point4, project, vec4_finite, Mat4, Vec3, Vec4};
use crate::properties::{ClipRegion, LineRef, SurfaceRef};
use crate::scene::chain::SegmentChain;
use cgmath::Zero;

/// Spatial axis that receives the height values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Output coordinate slots for (height, pos1, pos2)
    fn slots(self) -> (usize, usize, usize) {
        match self {
            Axis::X => (0, 1, 2),
            Axis::Y => (1, 2, 0),
            Axis::Z => (2, 0, 1),
        }
    }
}

/// Height-field over a `pos1` x `pos2` parameter grid.
///
/// `heights` is row-major with `pos1` as the slow index:
/// `heights[i1 * pos2.len() + i2]`.
#[derive(Debug, Clone)]
pub struct Mesh {
    pub axis: Axis,
    pub pos1: Vec<f64>,
    pub pos2: Vec<f64>,
    pub heights: Vec<f64>,
    /// Filled surface is drawn only when set
    pub surface: Option<SurfaceRef>,
    /// Grid wireframe is drawn only when set
    pub line: Option<LineRef>,
    pub id: ObjectId,
}

impl Mesh {
    pub fn new(
        id: ObjectId,
        axis: Axis,
        pos1: Vec<f64>,
        pos2: Vec<f64>,
        heights: Vec<f64>,
        surface: Option<SurfaceRef>,
        line: Option<LineRef>,
    ) -> Self {
        debug_assert_eq!(heights.len(), pos1.len() * pos2.len());
        Self {
            axis,
            pos1,
            pos2,
            heights,
            surface,
            line,
            id,
        }
    }

    /// Appends this mesh's fragments under `transform` to `out`
    pub fn emit_fragments<'a>(&'a self, transform: Mat4, out: &mut FragmentVec<'a>) {
        self.emit(transform, None, out);
    }

    pub(crate) fn emit<'a>(
        &'a self,
        transform: Mat4,
        clip: Option<&'a ClipRegion>,
        out: &mut FragmentVec<'a>,
    ) {
        // one contiguous sequence across both passes
        let mut seq = 0;
        self.emit_wireframe(transform, clip, &mut seq, out);
        self.emit_surface(transform, clip, &mut seq, out);
    }

    /// Sweeps both grid directions, joining consecutive grid points into
    /// line segments with the same gap behaviour as a poly-line.
    fn emit_wireframe<'a>(
        &'a self,
        transform: Mat4,
        clip: Option<&'a ClipRegion>,
        seq: &mut u32,
        out: &mut FragmentVec<'a>,
    ) {
        let Some(line) = self.line.as_deref() else {
            return;
        };

        let (slot_h, slot_1, slot_2) = self.axis.slots();
        let n2 = self.pos2.len();
        let mut chain = SegmentChain::new();
        let mut pt = point4(0.0, 0.0, 0.0);

        for sweep_pos1 in [true, false] {
            let (sweep, fixed) = if sweep_pos1 {
                (&self.pos1, &self.pos2)
            } else {
                (&self.pos2, &self.pos1)
            };
            let (slot_sweep, slot_fixed) = if sweep_pos1 {
                (slot_1, slot_2)
            } else {
                (slot_2, slot_1)
            };

            for (fixed_i, &fixed_val) in fixed.iter().enumerate() {
                chain.reset();
                pt[slot_fixed] = fixed_val;
                for (sweep_i, &sweep_val) in sweep.iter().enumerate() {
                    pt[slot_sweep] = sweep_val;
                    pt[slot_h] = if sweep_pos1 {
                        self.heights[sweep_i * n2 + fixed_i]
                    } else {
                        self.heights[fixed_i * n2 + sweep_i]
                    };

                    if let Some(segment) = chain.advance(project(transform * pt)) {
                        out.push(Fragment {
                            kind: FragmentKind::LineSegment,
                            points: [segment[0], segment[1], Vec3::zero()],
                            surface: None,
                            line: Some(line),
                            object: self.id,
                            seq: *seq,
                            point_size: 1.0,
                            params: None,
                            clip,
                        });
                        *seq += 1;
                    }
                }
            }
        }
    }

    /// Emits two triangles per grid cell, skipping any cell touching a
    /// non-finite height. The diagonal is fixed (p1-p2 of each cell), not
    /// alternated by cell parity.
    fn emit_surface<'a>(
        &'a self,
        transform: Mat4,
        clip: Option<&'a ClipRegion>,
        seq: &mut u32,
        out: &mut FragmentVec<'a>,
    ) {
        let Some(surface) = self.surface.as_deref() else {
            return;
        };

        let (slot_h, slot_1, slot_2) = self.axis.slots();
        let n1 = self.pos1.len();
        let n2 = self.pos2.len();

        let mut corners = [point4(0.0, 0.0, 0.0); 4];
        for i1 in 0..n1.saturating_sub(1) {
            for i2 in 0..n2.saturating_sub(1) {
                // cell corners: p0=(i1,i2) p1=(i1+1,i2) p2=(i1,i2+1) p3=(i1+1,i2+1)
                for (corner, (d1, d2)) in corners.iter_mut().zip([(0, 0), (1, 0), (0, 1), (1, 1)])
                {
                    corner[slot_h] = self.heights[(i1 + d1) * n2 + (i2 + d2)];
                    corner[slot_1] = self.pos1[i1 + d1];
                    corner[slot_2] = self.pos2[i2 + d2];
                }

                // a single bad corner invalidates the whole cell
                let corner_sum: Vec4 = corners[0] + corners[1] + corners[2] + corners[3];
                if !vec4_finite(corner_sum) {
                    trace!("skipping mesh cell ({}, {}) with non-finite corner", i1, i2);
                    continue;
                }

                let p1 = project(transform * corners[1]);
                let p2 = project(transform * corners[2]);
                let mut frag = Fragment {
                    kind: FragmentKind::Triangle,
                    points: [project(transform * corners[0]), p1, p2],
                    surface: Some(surface),
                    line: None,
                    object: self.id,
                    seq: *seq,
                    point_size: 1.0,
                    params: None,
                    clip,
                };
                out.push(frag.clone());
                *seq += 1;

                frag.points[0] = project(transform * corners[3]);
                frag.seq = *seq;
                out.push(frag);
                *seq += 1;
            }
        }
    }
}
