//! # Constants and type definitions for Skycover
//!
//! Centralizes the angular conversion factors and the common type aliases used
//! throughout the crate. All core computations are carried out in radians on
//! the unit sphere; degrees and millimeters only appear at the configuration
//! boundary.

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Tolerance allowed past [0, π] when validating a co-latitude.
///
/// A co-latitude outside this band is an input error and is rejected at
/// construction time, never clamped.
pub const THETA_TOLERANCE: f64 = 1e-5;

/// Slack applied to the [0, 1] band of the edge half-space test.
///
/// A target sitting exactly on a footprint edge lands at a dot product of 0
/// or 1 only up to rounding; after an angle round-trip it can come out at
/// ±few·1e-17. The band is widened by this margin so the boundary stays
/// inclusive.
pub const EDGE_TOLERANCE: f64 = 1e-12;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in radians
pub type Radian = f64;
/// Length in millimeters (focal-plane dimensions)
pub type Millimeter = f64;
