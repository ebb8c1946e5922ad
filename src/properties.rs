//! Appearance and region handles observed by fragments.
//!
//! These types are owned by the caller (typically a material table built
//! alongside the scene); objects keep shared handles and fragments keep
//! plain borrows. Nothing in this crate interprets their contents — colour
//! resolution, path stroking and clip evaluation all happen downstream.

use std::rc::Rc;

use crate::math::Vec3;

/// Fill appearance for triangle fragments
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceProps {
    /// RGBA colour, components 0.0-1.0
    pub color: [f64; 4],
    /// Fraction of incident light reflected, 0.0-1.0
    pub reflectivity: f64,
    /// Skip drawing entirely while keeping the object in the scene
    pub hide: bool,
}

impl SurfaceProps {
    pub fn new(color: [f64; 4]) -> Self {
        Self {
            color,
            reflectivity: 0.0,
            hide: false,
        }
    }
}

/// Stroke appearance for line-segment fragments and point outlines
#[derive(Debug, Clone, PartialEq)]
pub struct LineProps {
    /// RGBA colour, components 0.0-1.0
    pub color: [f64; 4],
    /// Stroke width in output units
    pub width: f64,
    /// Skip drawing entirely while keeping the object in the scene
    pub hide: bool,
}

impl LineProps {
    pub fn new(color: [f64; 4], width: f64) -> Self {
        Self {
            color,
            width,
            hide: false,
        }
    }
}

/// Shared handle to a surface appearance, held by scene objects
pub type SurfaceRef = Rc<SurfaceProps>;

/// Shared handle to a stroke appearance, held by scene objects
pub type LineRef = Rc<LineProps>;

/// 2D outline stamped at each plotted point position.
///
/// Opaque to this crate; the rasterizer scales and strokes it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointPath {
    pub coords: Vec<[f64; 2]>,
}

/// Per-point-cloud parameters shared by all of its point fragments
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointParams {
    pub path: PointPath,
    /// Scale outline stroke widths along with the point size
    pub scale_line_width: bool,
}

/// Axis-aligned clipping box carried through containers.
///
/// Threaded alongside the transform and stamped into fragments for the
/// rasterizer; never evaluated here.
#[derive(Debug, Clone, PartialEq)]
pub struct ClipRegion {
    pub min: Vec3,
    pub max: Vec3,
}
