//! Mosaic composition: L-shapes, large frames, and dithered gap-filling sets.
//!
//! No function here performs containment logic itself; every level only
//! orchestrates detector-unit placements through the relative-placement
//! navigator and delegates the geometry to the detector/containment layers.
//! Mask reduction (OR within a unit) and count reduction (sum across a
//! mosaic) are kept strictly separate: the former lives in
//! [`DetectorUnit::observed`], the latter in [`ObservationCounts`].

use crate::constants::Radian;
use crate::detector::{shifted_center, DetectorUnit, Shift};
use crate::direction::Direction;
use crate::mission::{DitherPattern, FrameLayout, InstrumentSpec, LshapeShift};
use crate::skycover_errors::SkycoverError;
use crate::targets::TargetList;

/// Per-target observation counts accumulated across mosaic leaves.
///
/// Created fresh per top-level evaluation, accumulated in place, and merged
/// across repeated passes by element-wise addition. No normalization is
/// applied; scaling to physical units is an external concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservationCounts {
    counts: Vec<u32>,
}

impl ObservationCounts {
    pub fn zeros(len: usize) -> Self {
        ObservationCounts {
            counts: vec![0; len],
        }
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    /// Add a containment mask (cast to 0/1) into the counts.
    pub fn add_mask(&mut self, mask: &[bool]) -> Result<(), SkycoverError> {
        if mask.len() != self.counts.len() {
            return Err(SkycoverError::LengthMismatch {
                expected: self.counts.len(),
                got: mask.len(),
            });
        }
        for (c, &hit) in self.counts.iter_mut().zip(mask) {
            *c += u32::from(hit);
        }
        Ok(())
    }

    /// Element-wise addition of another pass over the same target set.
    pub fn merge(&mut self, other: &ObservationCounts) -> Result<(), SkycoverError> {
        if other.len() != self.counts.len() {
            return Err(SkycoverError::LengthMismatch {
                expected: self.counts.len(),
                got: other.len(),
            });
        }
        for (c, &o) in self.counts.iter_mut().zip(&other.counts) {
            *c += o;
        }
        Ok(())
    }

    /// Total number of target observations in this map.
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| u64::from(c)).sum()
    }
}

/// Logical OR across sibling unit masks: true where at least one unit of the
/// mosaic level sees the target.
pub fn union_mask(masks: &[Vec<bool>]) -> Vec<bool> {
    let len = masks.first().map_or(0, Vec::len);
    let mut out = vec![false; len];
    for mask in masks {
        for (seen, &hit) in out.iter_mut().zip(mask) {
            *seen |= hit;
        }
    }
    out
}

fn unit_mask(
    targets: &TargetList,
    center: &Direction,
    position_angle: Radian,
    separation: Radian,
    chip_width: Radian,
) -> Vec<bool> {
    DetectorUnit::place(center, position_angle, separation, chip_width).observed(targets)
}

/// Containment masks of the four detector units of one L-shape.
///
/// The units sit at the anchor center, half a unit to the right, and — from a
/// position `shift.left` units to the left — 1.0 + `shift.top` and
/// 1.5 + `shift.top` units up, forming an "L" on the sky.
///
/// Returns one mask per unit, in placement order.
pub fn l_shape_masks(
    targets: &TargetList,
    center: &Direction,
    position_angle: Radian,
    spec: &InstrumentSpec,
    shift: &LshapeShift,
) -> Vec<Vec<bool>> {
    let sep = spec.separation();
    let chip = spec.chip_width();

    let mut masks = Vec::with_capacity(4);
    masks.push(unit_mask(targets, center, position_angle, sep, chip));

    let right = shifted_center(Shift::Right, 0.5, center, position_angle, sep);
    masks.push(unit_mask(targets, &right, position_angle, sep, chip));

    let upper_anchor = shifted_center(Shift::Left, shift.left, center, position_angle, sep);
    for step in [1.0 + shift.top, 1.5 + shift.top] {
        let upper = shifted_center(Shift::Top, step, &upper_anchor, position_angle, sep);
        masks.push(unit_mask(targets, &upper, position_angle, sep, chip));
    }
    masks
}

/// Containment masks of a large frame: three L-shapes chained by successive
/// left/bottom shifts, covering a wider contiguous region with overlap-aware
/// seams.
///
/// `shift` moves the whole frame before the first L-shape is placed (used by
/// the dither level). Returns the 12 per-unit masks in traversal order.
pub fn large_frame_masks(
    targets: &TargetList,
    center: &Direction,
    position_angle: Radian,
    spec: &InstrumentSpec,
    shift: &LshapeShift,
    layout: &FrameLayout,
) -> Vec<Vec<bool>> {
    let sep = spec.separation();

    let mut anchor = shifted_center(Shift::Left, shift.left, center, position_angle, sep);
    anchor = shifted_center(Shift::Top, shift.top, &anchor, position_angle, sep);

    let mut masks = l_shape_masks(targets, &anchor, position_angle, spec, &layout.first);

    anchor = shifted_center(Shift::Left, layout.step_left, &anchor, position_angle, sep);
    anchor = shifted_center(Shift::Bottom, layout.step_bottom, &anchor, position_angle, sep);
    masks.extend(l_shape_masks(
        targets,
        &anchor,
        position_angle,
        spec,
        &layout.second,
    ));

    anchor = shifted_center(Shift::Left, layout.step_left, &anchor, position_angle, sep);
    masks.extend(l_shape_masks(
        targets,
        &anchor,
        position_angle,
        spec,
        &layout.third,
    ));

    masks
}

/// Observation-count map of one dithered gap-filling pass: the large frame
/// evaluated at the four symmetric sub-unit offsets of `pattern`, all leaf
/// masks summed per target.
pub fn dithered_counts(
    targets: &TargetList,
    center: &Direction,
    position_angle: Radian,
    spec: &InstrumentSpec,
    layout: &FrameLayout,
    pattern: &DitherPattern,
) -> Result<ObservationCounts, SkycoverError> {
    let mut counts = ObservationCounts::zeros(targets.len());
    for (left, top) in pattern.offsets() {
        let shift = LshapeShift { left, top };
        for mask in large_frame_masks(targets, center, position_angle, spec, &shift, layout) {
            counts.add_mask(&mask)?;
        }
    }
    Ok(counts)
}
