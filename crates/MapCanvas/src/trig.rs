//! # Angle Utilities
//!
//! Degree/radian conversion and the angle normalization shared by the camera
//! and the scene elements. Angles are kept in degrees in the `(-180, 180]`
//! interval; radians are derived lazily where they are consumed.

/// Brings an angle in degrees into the `(-180, 180]` interval.
///
/// Idempotent: normalizing an already-normalized angle returns it unchanged.
/// `180` maps to `180`, `-180` maps to `180`.
pub fn normalize_angle(degrees: f32) -> f32 {
    let mut a = degrees % 360.0;
    if a <= -180.0 {
        a += 360.0;
    } else if a > 180.0 {
        a -= 360.0;
    }
    a
}

/// Converts degrees to radians.
pub fn deg_to_rad(degrees: f32) -> f32 {
    degrees * std::f32::consts::PI / 180.0
}

/// Converts radians to degrees.
pub fn rad_to_deg(radians: f32) -> f32 {
    radians * 180.0 / std::f32::consts::PI
}
