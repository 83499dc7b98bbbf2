//! Tilt angles from a single accelerometer sample
//!
//! Roll and pitch come straight from the gravity vector:
//!
//! ```text
//! roll  = atan2(ay, az)
//! pitch = atan2(-ax, sqrt(ay² + az²))
//! ```
//!
//! The two-argument arctangent keeps both angles correctly signed in all
//! four quadrants, so an upside-down board reads ±180° roll instead of
//! folding back to 0°. There is no filtering and no state between samples;
//! under linear acceleration the angles are simply wrong for that sample.

use tiltlink_protocol::Orientation;

use crate::sample::RawSample;

/// Accelerometer sensitivity at the power-on ±2g range, LSB per g
pub const ACCEL_SENSITIVITY_2G: f32 = 16384.0;

/// Compute roll and pitch assuming the default ±2g range
pub fn to_orientation(sample: &RawSample) -> Orientation {
    to_orientation_with(sample, ACCEL_SENSITIVITY_2G)
}

/// Compute roll and pitch for the given sensitivity (LSB per g)
///
/// Both angles are in degrees within [-180, 180].
pub fn to_orientation_with(sample: &RawSample, sensitivity: f32) -> Orientation {
    let [ax, ay, az] = sample.accel.map(|raw| raw as f32 / sensitivity);

    let roll = libm::atan2f(ay, az).to_degrees();
    let pitch = libm::atan2f(-ax, libm::sqrtf(ay * ay + az * az)).to_degrees();

    // atan2f(±0, -1) is ±π rounded up, which lands a hair past 180°
    Orientation {
        roll: roll.clamp(-180.0, 180.0),
        pitch: pitch.clamp(-180.0, 180.0),
    }
}
