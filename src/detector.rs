use crate::constants::Radian;
use crate::direction::Direction;
use crate::footprint::{Footprint, VertexLayout};
use crate::targets::TargetList;

/// Cardinal shift applied to a detector-unit placement, on the sky under the
/// unit's position angle: `Top` decreases co-latitude (+b), `Left` increases
/// longitude (+l).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shift {
    Top,
    Bottom,
    Left,
    Right,
}

impl Shift {
    /// Index of the wide-square vertex holding the shifted center.
    fn vertex_index(self) -> usize {
        match self {
            Shift::Bottom => 0,
            Shift::Left => 1,
            Shift::Top => 2,
            Shift::Right => 3,
        }
    }
}

/// Center of a detector placement shifted from `center` by `scale` unit side
/// lengths in the given cardinal direction.
///
/// The new center is read off a wide-square footprint of opening
/// `2 × scale × separation` placed at the current center/rotation. Offsets
/// therefore go through the same rotation pipeline as the footprints
/// themselves and stay exact on the sphere; naive planar (Δl, Δb) steps would
/// accumulate angular distortion away from the reference point.
pub fn shifted_center(
    shift: Shift,
    scale: f64,
    center: &Direction,
    position_angle: Radian,
    separation: Radian,
) -> Direction {
    let wide = Footprint::place(
        center,
        position_angle,
        2.0 * scale * separation,
        &VertexLayout::wide_square(),
    );
    wide.corners()[shift.vertex_index()]
}

/// A four-chip detector unit: one camera head with chips at the corners of a
/// square of side `separation`.
///
/// The characteristic shape is built from an outer square footprint whose
/// corners are the chip centers, and one chip footprint per corner, all
/// sharing the unit's position angle.
#[derive(Debug, Clone)]
pub struct DetectorUnit {
    chips: [Footprint; 4],
}

impl DetectorUnit {
    /// Place a detector unit.
    ///
    /// Arguments
    /// ---------
    /// * `center`: unit center on the sphere.
    /// * `position_angle`: roll of the whole unit, radians.
    /// * `separation`: chip-center separation as an angle (focal-plane
    ///   distance already divided by the focal length).
    /// * `chip_width`: chip side length as an angle.
    pub fn place(
        center: &Direction,
        position_angle: Radian,
        separation: Radian,
        chip_width: Radian,
    ) -> Self {
        let outer = Footprint::place(center, position_angle, separation, &VertexLayout::square());
        let chip = |k: usize| {
            Footprint::place(
                &outer.corners()[k],
                position_angle,
                chip_width,
                &VertexLayout::square(),
            )
        };
        DetectorUnit {
            chips: [chip(0), chip(1), chip(2), chip(3)],
        }
    }

    /// The four chip footprints, in outer-corner order.
    pub fn chips(&self) -> &[Footprint] {
        &self.chips
    }

    /// Per-target "observed by this unit" mask: the logical OR of the four
    /// chip containment masks.
    ///
    /// Chips never overlap by construction, but the reduction does not rely
    /// on that; a target falling in two chips still contributes a single
    /// `true` here. Counting reductions live in the accumulator, not in this
    /// mask.
    pub fn observed(&self, targets: &TargetList) -> Vec<bool> {
        let mut mask = vec![false; targets.len()];
        for chip in &self.chips {
            for (m, hit) in mask.iter_mut().zip(chip.contains(targets)) {
                *m |= hit;
            }
        }
        mask
    }
}
