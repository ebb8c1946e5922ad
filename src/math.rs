//! # Math Layer
//!
//! Thin layer over cgmath fixing the scalar type (`f64`) and adding the
//! homogeneous-coordinate helpers the scene objects need: point
//! construction, projection back to 3D, and finiteness predicates used to
//! drop degenerate geometry.

use cgmath::{Matrix4, Vector3, Vector4};

/// 3D point or direction in the common output coordinate space
pub type Vec3 = Vector3<f64>;

/// Homogeneous 3D point
pub type Vec4 = Vector4<f64>;

/// 4x4 homogeneous transform (column-major, cgmath convention)
pub type Mat4 = Matrix4<f64>;

/// Creates a homogeneous point with w = 1
pub fn point4(x: f64, y: f64, z: f64) -> Vec4 {
    Vector4::new(x, y, z, 1.0)
}

/// Projects a homogeneous point to Euclidean 3D coordinates.
///
/// A zero w component leaves the coordinates undivided instead of
/// producing infinities; downstream finiteness checks still apply.
pub fn project(v: Vec4) -> Vec3 {
    let inv = if v.w == 0.0 { 1.0 } else { 1.0 / v.w };
    Vector3::new(v.x * inv, v.y * inv, v.z * inv)
}

/// Returns true if no component is NaN or infinite
pub fn vec3_finite(v: Vec3) -> bool {
    v.x.is_finite() && v.y.is_finite() && v.z.is_finite()
}

/// Returns true if no component is NaN or infinite
pub fn vec4_finite(v: Vec4) -> bool {
    v.x.is_finite() && v.y.is_finite() && v.z.is_finite() && v.w.is_finite()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_project_divides_by_w() {
        let v = Vector4::new(2.0, 4.0, 6.0, 2.0);
        assert_relative_eq!(project(v), Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_project_zero_w_keeps_coordinates() {
        let v = Vector4::new(2.0, 4.0, 6.0, 0.0);
        assert_relative_eq!(project(v), Vector3::new(2.0, 4.0, 6.0));
    }

    #[test]
    fn test_finiteness() {
        assert!(vec3_finite(Vector3::new(0.0, -1.0, 1.0e300)));
        assert!(!vec3_finite(Vector3::new(f64::NAN, 0.0, 0.0)));
        assert!(!vec3_finite(Vector3::new(0.0, f64::INFINITY, 0.0)));
        assert!(!vec4_finite(Vector4::new(0.0, 0.0, f64::NEG_INFINITY, 1.0)));
    }
}
