//! Mission and mosaic configuration values.
//!
//! The flight parameters live in explicit values handed to the core calls;
//! nothing in the geometry engine reads process-wide state. Defaults carry
//! the nominal instrument and the calibrated mosaic offsets.

use crate::constants::{Millimeter, Radian};

/// Focal-plane geometry of the instrument.
///
/// All lengths are millimeters in the focal plane; they reduce to angles on
/// the sky by division by the effective focal length before entering the
/// geometry engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InstrumentSpec {
    /// Separation of adjacent detector chip centers.
    pub chip_separation_mm: Millimeter,
    /// Side length of one detector chip.
    pub chip_width_mm: Millimeter,
    /// Effective focal length.
    pub focal_length_mm: Millimeter,
}

impl InstrumentSpec {
    /// Chip-center separation as an angle on the sky.
    pub fn separation(&self) -> Radian {
        self.chip_separation_mm / self.focal_length_mm
    }

    /// Chip side length as an angle on the sky.
    pub fn chip_width(&self) -> Radian {
        self.chip_width_mm / self.focal_length_mm
    }
}

impl Default for InstrumentSpec {
    fn default() -> Self {
        InstrumentSpec {
            chip_separation_mm: 22.4,
            chip_width_mm: 19.52,
            focal_length_mm: 4370.0,
        }
    }
}

/// Shift of the upper two detector units of an L-shape, in unit side lengths.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LshapeShift {
    /// Shift to the left of the upper two fields.
    pub left: f64,
    /// Shift to the top of the upper two fields.
    pub top: f64,
}

/// Placement offsets chaining three L-shapes into a large frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameLayout {
    /// Shift applied to the first (rightmost) L-shape.
    pub first: LshapeShift,
    /// Shift applied to the middle L-shape.
    pub second: LshapeShift,
    /// Shift applied to the last (leftmost) L-shape.
    pub third: LshapeShift,
    /// Leftward step between consecutive L-shapes, unit side lengths.
    pub step_left: f64,
    /// Downward step between the first and second L-shape.
    pub step_bottom: f64,
}

impl Default for FrameLayout {
    fn default() -> Self {
        FrameLayout {
            first: LshapeShift {
                left: 1.0,
                top: -0.75,
            },
            second: LshapeShift {
                left: 0.5,
                top: 0.0,
            },
            third: LshapeShift::default(),
            step_left: 1.5,
            step_bottom: 0.75,
        }
    }
}

/// Symmetric sub-unit dither offsets filling inter-chip gaps.
///
/// A dither pass evaluates the large frame at the four offset combinations
/// (±left_step, ±top_step), in detector-unit-width fractions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DitherPattern {
    pub left_step: f64,
    pub top_step: f64,
}

impl DitherPattern {
    /// The four (left, top) frame offsets of one dither pass.
    pub fn offsets(&self) -> [(f64, f64); 4] {
        [
            (self.left_step, -self.top_step),
            (-self.left_step, -self.top_step),
            (self.left_step, self.top_step),
            (-self.left_step, self.top_step),
        ]
    }
}

impl Default for DitherPattern {
    fn default() -> Self {
        DitherPattern {
            left_step: 0.125,
            top_step: 0.0625,
        }
    }
}
