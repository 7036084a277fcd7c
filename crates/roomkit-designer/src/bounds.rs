//! Keeps furniture inside the room.
//!
//! Both the store commit path and drag previews go through [`BoundsEnforcer`],
//! so a session applies exactly one [`ClampPolicy`] everywhere.

use roomkit_core::constants::EPSILON;
use roomkit_core::{ClampPolicy, FurnitureTemplate, PlacedFurniture, Room};

use crate::viewport::RoomPoint;

/// Floor footprint of a placed item, in meters (template size times item scale).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Footprint {
    pub width: f64,
    pub length: f64,
}

impl Footprint {
    pub fn new(width: f64, length: f64) -> Self {
        Self { width, length }
    }

    /// Footprint of `template` drawn at `scale`.
    pub fn of(template: &FurnitureTemplate, scale: f64) -> Self {
        Self::new(template.width * scale, template.length * scale)
    }

    /// Half extents `(hx, hz)` of the axis-aligned box around the footprint
    /// rotated by `rotation_deg` about the vertical axis.
    pub fn half_extents(&self, rotation_deg: f64) -> (f64, f64) {
        let (sin, cos) = rotation_deg.to_radians().sin_cos();
        let (sin, cos) = (sin.abs(), cos.abs());
        (
            (self.width * cos + self.length * sin) / 2.0,
            (self.width * sin + self.length * cos) / 2.0,
        )
    }
}

/// Clamps room-space positions according to a [`ClampPolicy`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BoundsEnforcer {
    policy: ClampPolicy,
}

impl BoundsEnforcer {
    pub fn new(policy: ClampPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> ClampPolicy {
        self.policy
    }

    /// Clamps a candidate center point.
    ///
    /// Under [`ClampPolicy::CenterOnly`] the footprint is ignored and the
    /// center is kept within `[0, width] x [0, length]`. Under
    /// [`ClampPolicy::Footprint`] the rotated footprint is kept inside; an axis
    /// on which the item is larger than the room pins the center to the
    /// middle of that axis. Without a footprint both policies clamp the center.
    pub fn clamp(
        &self,
        point: RoomPoint,
        room: &Room,
        footprint: Option<(Footprint, f64)>,
    ) -> RoomPoint {
        let (hx, hz) = match (self.policy, footprint) {
            (ClampPolicy::Footprint, Some((fp, rotation))) => fp.half_extents(rotation),
            _ => (0.0, 0.0),
        };
        RoomPoint {
            x: clamp_axis(point.x, hx, room.width),
            z: clamp_axis(point.z, hz, room.length),
        }
    }

    /// Clamps a placement in place. `template` supplies the footprint; under
    /// the footprint policy a missing template degrades to a center clamp.
    pub fn clamp_placement(
        &self,
        item: &mut PlacedFurniture,
        room: &Room,
        template: Option<&FurnitureTemplate>,
    ) {
        if self.policy == ClampPolicy::Footprint && template.is_none() {
            tracing::warn!(
                "No template '{}' for footprint clamp, clamping center only",
                item.furniture_id
            );
        }
        let footprint = template.map(|t| (Footprint::of(t, item.scale), item.rotation));
        let clamped = self.clamp(RoomPoint::new(item.x, item.z), room, footprint);
        item.x = clamped.x;
        item.z = clamped.z;
    }

    /// True if the point needs no clamping, within [`EPSILON`].
    pub fn contains(
        &self,
        point: RoomPoint,
        room: &Room,
        footprint: Option<(Footprint, f64)>,
    ) -> bool {
        let clamped = self.clamp(point, room, footprint);
        (clamped.x - point.x).abs() <= EPSILON && (clamped.z - point.z).abs() <= EPSILON
    }
}

fn clamp_axis(value: f64, half: f64, extent: f64) -> f64 {
    // An item that fills the axis up to rounding has exactly one position
    if half > 0.0 && half * 2.0 >= extent - EPSILON {
        return extent / 2.0;
    }
    value.clamp(half, extent - half)
}
