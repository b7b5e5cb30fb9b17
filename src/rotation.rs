use nalgebra::{Matrix3, Rotation3, Vector3};

use crate::constants::Radian;
use crate::direction::Direction;

/// Right-handed rotation matrix about the Y axis.
///
/// The rotation is active (applied to the vector in a fixed frame) and follows
/// the direct trigonometric sense. The returned matrix is orthonormal and
/// satisfies `R.transpose() == R.inverse()`.
pub fn roty(alpha: Radian) -> Matrix3<f64> {
    Rotation3::from_axis_angle(&Vector3::y_axis(), alpha).into()
}

/// Right-handed rotation matrix about the Z axis.
pub fn rotz(alpha: Radian) -> Matrix3<f64> {
    Rotation3::from_axis_angle(&Vector3::z_axis(), alpha).into()
}

/// Placement attitude for a footprint template defined at the north pole.
///
/// Composes, right to left: position-angle roll about Z, co-latitude tilt
/// about Y, longitude spin about Z:
///
/// ```text
/// A = Rz(φ) · Ry(θ) · Rz(PA)
/// ```
///
/// Applying `A` to a template vector at the pole places it at `center` with
/// the requested position angle. Rotations compose by ordered multiplication
/// and never commute; callers must not reorder the chain.
pub fn attitude(center: &Direction, position_angle: Radian) -> Matrix3<f64> {
    rotz(center.phi()) * roty(center.theta()) * rotz(position_angle)
}
