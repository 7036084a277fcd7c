//! Scale resolution and coordinate mapping between room space and view space.
//!
//! Room space is meters with the origin at a room corner (`x` along the width,
//! `z` along the length). View space is whatever the rendering backend uses:
//! pixels with the origin at the top-left for the 2D canvas, or scene units
//! for the 3D scene graph, where the room corner sits at the scene origin and
//! one meter is one unit.

use std::fmt;

use roomkit_core::{LayoutError, Room};

/// A point on the room floor, in meters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoomPoint {
    pub x: f64,
    pub z: f64,
}

impl RoomPoint {
    pub fn new(x: f64, z: f64) -> Self {
        Self { x, z }
    }
}

/// A point in backend view space. For the 2D canvas `y` is the pixel row;
/// for the 3D scene it is the scene Z axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewPoint {
    pub x: f64,
    pub y: f64,
}

impl ViewPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Size of the surface a room is fitted into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportSize {
    pub width: f64,
    pub height: f64,
}

impl ViewportSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for ViewportSize {
    fn default() -> Self {
        Self::new(
            roomkit_core::constants::DEFAULT_VIEWPORT_WIDTH,
            roomkit_core::constants::DEFAULT_VIEWPORT_HEIGHT,
        )
    }
}

/// Room-to-view affine mapping: uniform scale plus origin offset.
///
/// The scale is always positive and finite, which `new` enforces, so the
/// inverse mapping is always defined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    scale: f64,
    origin_x: f64,
    origin_z: f64,
}

impl ViewTransform {
    pub fn new(scale: f64, origin_x: f64, origin_z: f64) -> Result<Self, LayoutError> {
        if !(scale.is_finite() && scale > 0.0) {
            return Err(LayoutError::DegenerateScale { scale });
        }
        Ok(Self {
            scale,
            origin_x,
            origin_z,
        })
    }

    /// The 1:1 mapping used by the 3D scene (scale 1, origin at the room corner).
    pub fn identity() -> Self {
        Self {
            scale: 1.0,
            origin_x: 0.0,
            origin_z: 0.0,
        }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn origin_x(&self) -> f64 {
        self.origin_x
    }

    pub fn origin_z(&self) -> f64 {
        self.origin_z
    }

    /// Converts room coordinates to view coordinates.
    ///
    /// ```text
    /// view_x = origin_x + room_x * scale
    /// view_y = origin_z + room_z * scale
    /// ```
    pub fn to_view(&self, point: RoomPoint) -> ViewPoint {
        ViewPoint {
            x: self.origin_x + point.x * self.scale,
            y: self.origin_z + point.z * self.scale,
        }
    }

    /// Converts view coordinates back to room coordinates.
    pub fn to_room(&self, point: ViewPoint) -> RoomPoint {
        RoomPoint {
            x: (point.x - self.origin_x) / self.scale,
            z: (point.y - self.origin_z) / self.scale,
        }
    }

    /// Converts a room-space length (meters) to view units.
    pub fn length_to_view(&self, meters: f64) -> f64 {
        meters * self.scale
    }

    /// Converts a view-space length back to meters.
    pub fn length_to_room(&self, units: f64) -> f64 {
        units / self.scale
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl fmt::Display for ViewTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Scale: {:.3} | Origin: ({:.1}, {:.1})",
            self.scale, self.origin_x, self.origin_z
        )
    }
}

/// Fits `room` into `viewport`, centered, using `fit_margin` of the space.
///
/// ```text
/// scale    = min(vw / room.width, vh / room.length) * fit_margin
/// origin_x = (vw - room.width  * scale) / 2
/// origin_z = (vh - room.length * scale) / 2
/// ```
///
/// Nothing is cached; call again whenever the room or the viewport changes.
pub fn resolve_scale(
    room: &Room,
    viewport: ViewportSize,
    fit_margin: f64,
) -> Result<ViewTransform, LayoutError> {
    if !(fit_margin > 0.0 && fit_margin <= 1.0) {
        return Err(LayoutError::DegenerateScale { scale: fit_margin });
    }
    let scale_x = viewport.width / room.width;
    let scale_z = viewport.height / room.length;
    // f64::min ignores a NaN operand
    if scale_x.is_nan() || scale_z.is_nan() {
        return Err(LayoutError::DegenerateScale { scale: f64::NAN });
    }
    let scale = scale_x.min(scale_z) * fit_margin;

    let origin_x = (viewport.width - room.width * scale) / 2.0;
    let origin_z = (viewport.height - room.length * scale) / 2.0;
    ViewTransform::new(scale, origin_x, origin_z)
}
