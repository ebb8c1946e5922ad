use cgmath::Zero;

use crate::fragment::{Fragment, FragmentKind, FragmentVec, ObjectId};
use crate::math::{point4, project, Mat4, Vec3, Vec4};
use crate::properties::{ClipRegion, LineRef};
use crate::scene::chain::SegmentChain;

/// A connected line strip through an ordered list of scene points
#[derive(Debug, Clone)]
pub struct PolyLine {
    pub points: Vec<Vec4>,
    pub line: LineRef,
    pub id: ObjectId,
}

impl PolyLine {
    /// Creates an empty poly-line; fill it with [`PolyLine::add_points`]
    pub fn new(id: ObjectId, line: LineRef) -> Self {
        Self {
            points: Vec::new(),
            line,
            id,
        }
    }

    /// Appends one point per index from three parallel coordinate arrays.
    ///
    /// The appended count is the length of the shortest array; longer
    /// arrays are silently truncated. Never fails.
    pub fn add_points(&mut self, x: &[f64], y: &[f64], z: &[f64]) {
        let count = x.len().min(y.len()).min(z.len());
        self.points.reserve(count);
        for i in 0..count {
            self.points.push(point4(x[i], y[i], z[i]));
        }
    }

    /// Appends this strip's fragments under `transform` to `out`
    pub fn emit_fragments<'a>(&'a self, transform: Mat4, out: &mut FragmentVec<'a>) {
        self.emit(transform, None, out);
    }

    pub(crate) fn emit<'a>(
        &'a self,
        transform: Mat4,
        clip: Option<&'a ClipRegion>,
        out: &mut FragmentVec<'a>,
    ) {
        let mut chain = SegmentChain::new();
        let mut seq = 0;
        for point in &self.points {
            if let Some(segment) = chain.advance(project(transform * *point)) {
                out.push(Fragment {
                    kind: FragmentKind::LineSegment,
                    points: [segment[0], segment[1], Vec3::zero()],
                    surface: None,
                    line: Some(&self.line),
                    object: self.id,
                    seq,
                    point_size: 1.0,
                    params: None,
                    clip,
                });
                seq += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::LineProps;
    use approx::assert_relative_eq;
    use cgmath::{Matrix4, SquareMatrix, Vector3};
    use std::rc::Rc;

    fn black(width: f64) -> LineRef {
        Rc::new(LineProps::new([0.0, 0.0, 0.0, 1.0], width))
    }

    fn strip(x: &[f64], y: &[f64], z: &[f64]) -> PolyLine {
        let mut line = PolyLine::new(ObjectId(3), black(1.0));
        line.add_points(x, y, z);
        line
    }

    #[test]
    fn test_mismatched_arrays_truncate_to_shortest() {
        let line = strip(
            &[0.0, 1.0, 2.0, 3.0, 4.0],
            &[0.0, 1.0, 2.0],
            &[0.0, 1.0, 2.0, 3.0],
        );
        assert_eq!(line.points.len(), 3);
    }

    #[test]
    fn test_n_finite_points_yield_n_minus_one_segments() {
        let xs: Vec<f64> = (0..5).map(f64::from).collect();
        let ys = vec![0.0; 5];
        let zs = vec![0.0; 5];
        let line = strip(&xs, &ys, &zs);

        let mut out = Vec::new();
        line.emit_fragments(Matrix4::identity(), &mut out);

        assert_eq!(out.len(), 4);
        for (i, frag) in out.iter().enumerate() {
            assert_eq!(frag.kind, FragmentKind::LineSegment);
            assert_eq!(frag.seq, i as u32);
            assert_relative_eq!(frag.points[0], Vector3::new(i as f64, 0.0, 0.0));
            assert_relative_eq!(frag.points[1], Vector3::new(i as f64 + 1.0, 0.0, 0.0));
        }
    }

    #[test]
    fn test_transform_applies_to_both_endpoints() {
        let line = strip(&[0.0, 1.0], &[0.0, 0.0], &[0.0, 0.0]);
        let transform = Matrix4::from_translation(Vector3::new(0.0, 5.0, 0.0));

        let mut out = Vec::new();
        line.emit_fragments(transform, &mut out);

        assert_eq!(out.len(), 1);
        assert_relative_eq!(out[0].points[0], Vector3::new(0.0, 5.0, 0.0));
        assert_relative_eq!(out[0].points[1], Vector3::new(1.0, 5.0, 0.0));
    }

    #[test]
    fn test_interior_non_finite_point_leaves_gap() {
        let line = strip(
            &[0.0, 1.0, f64::NAN, 3.0, 4.0, 5.0],
            &[0.0; 6],
            &[0.0; 6],
        );

        let mut out = Vec::new();
        line.emit_fragments(Matrix4::identity(), &mut out);

        // 6 points, one broken interior point: two runs of 1 and 2 segments
        assert_eq!(out.len(), 3);
        // sequence indices stay contiguous across the gap
        let seqs: Vec<u32> = out.iter().map(|f| f.seq).collect();
        assert_eq!(seqs, vec![0, 1, 2]);
        assert_relative_eq!(out[1].points[0], Vector3::new(3.0, 0.0, 0.0));
    }

    #[test]
    fn test_degenerate_inputs_emit_nothing() {
        let mut out = Vec::new();
        let empty = strip(&[], &[], &[]);
        empty.emit_fragments(Matrix4::identity(), &mut out);
        let single = strip(&[1.0], &[2.0], &[3.0]);
        single.emit_fragments(Matrix4::identity(), &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn test_random_gaps_match_pairwise_count() {
        use rand::Rng;
        let mut rng = rand::rng();

        let n = 200;
        let mut xs: Vec<f64> = (0..n).map(|_| rng.random_range(-10.0..10.0)).collect();
        for _ in 0..20 {
            let k = rng.random_range(0..n);
            xs[k] = f64::NAN;
        }
        let ys = vec![0.0; n];
        let zs = vec![0.0; n];

        let expected = xs
            .windows(2)
            .filter(|pair| pair[0].is_finite() && pair[1].is_finite())
            .count();

        let line = strip(&xs, &ys, &zs);
        let mut out = Vec::new();
        line.emit_fragments(Matrix4::identity(), &mut out);
        assert_eq!(out.len(), expected);
    }
}
