use nalgebra::Vector3;

use crate::constants::{Degree, Radian, DPI, RADEG, THETA_TOLERANCE};
use crate::skycover_errors::SkycoverError;

/// A direction on the celestial sphere.
///
/// Stored as the angular pair (co-latitude θ, longitude φ) in radians, with
/// θ ∈ [0, π] and φ normalized to [0, 2π). The pair interconverts with a unit
/// 3-vector losslessly except for the φ wrap.
///
/// The galactic representation used at the configuration boundary maps
/// longitude l and latitude b (degrees) to φ = l and θ = π/2 − b.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Direction {
    theta: Radian,
    phi: Radian,
}

impl Direction {
    /// Build a direction from a co-latitude and a longitude in radians.
    ///
    /// Arguments
    /// ---------
    /// * `theta`: co-latitude, measured southward from the north pole.
    /// * `phi`: longitude, measured eastward; any finite value, wrapped into [0, 2π).
    ///
    /// Errors
    /// ------
    /// * [`SkycoverError::ColatitudeOutOfRange`] if `theta` lies outside
    ///   [0, π] by more than [`THETA_TOLERANCE`]. Out-of-range co-latitudes
    ///   are rejected, not clamped.
    pub fn new(theta: Radian, phi: Radian) -> Result<Self, SkycoverError> {
        if !(-THETA_TOLERANCE..=std::f64::consts::PI + THETA_TOLERANCE).contains(&theta) {
            return Err(SkycoverError::ColatitudeOutOfRange(theta));
        }
        Ok(Direction {
            theta,
            phi: phi.rem_euclid(DPI),
        })
    }

    /// Build a direction from galactic coordinates in degrees.
    pub fn from_galactic(l: Degree, b: Degree) -> Result<Self, SkycoverError> {
        Direction::new(std::f64::consts::FRAC_PI_2 - b * RADEG, l * RADEG)
    }

    /// Galactic coordinates (l, b) in degrees, with l wrapped to (−180, 180].
    pub fn to_galactic(&self) -> (Degree, Degree) {
        let mut l = self.phi / RADEG;
        if l > 180.0 {
            l -= 360.0;
        }
        (l, 90.0 - self.theta / RADEG)
    }

    pub fn theta(&self) -> Radian {
        self.theta
    }

    pub fn phi(&self) -> Radian {
        self.phi
    }

    /// The unit 3-vector pointing at this direction.
    pub fn unit_vector(&self) -> Vector3<f64> {
        let st = self.theta.sin();
        Vector3::new(st * self.phi.cos(), st * self.phi.sin(), self.theta.cos())
    }

    /// Recover the angular pair from a (not necessarily normalized) 3-vector.
    ///
    /// θ = arccos(z/‖v‖), φ = atan2(y, x) wrapped into [0, 2π). The cosine is
    /// guarded against rounding barely past ±1 so poles stay representable.
    pub fn from_vector(v: &Vector3<f64>) -> Self {
        let norm = v.norm();
        let theta = (v.z / norm).clamp(-1.0, 1.0).acos();
        let mut phi = v.y.atan2(v.x);
        if phi < 0.0 {
            phi += DPI;
        }
        Direction { theta, phi }
    }
}
