use itertools::Itertools;
use nalgebra::Vector3;
use smallvec::{smallvec, SmallVec};

use crate::constants::Radian;
use crate::containment::mask_from_normals;
use crate::direction::Direction;
use crate::rotation::{attitude, roty, rotz};
use crate::targets::TargetList;

/// Template for the vertex ring of a convex footprint.
///
/// A layout is a list of azimuthal offsets plus a radial scale. Vertex `k` of
/// a placed footprint is the north pole tilted about Y by
/// `opening × scale`, spun about Z by `azimuths[k]`, then carried to the
/// footprint center by the placement attitude.
#[derive(Debug, Clone)]
pub struct VertexLayout {
    azimuths: SmallVec<[Radian; 4]>,
    scale: f64,
}

impl VertexLayout {
    /// Square chip layout: four vertices at azimuths π/4 + k·π/2, radial
    /// scale 1/√2.
    ///
    /// With the opening interpreted as the chip side length `s`, the vertices
    /// sit at the corner distance s/√2 and the footprint is an axis-aligned
    /// square under the position angle. The same layout placed with the chip
    /// separation as opening puts its vertices at (±w/2, ±w/2), the chip
    /// centers of a 2×2 mosaic.
    pub fn square() -> Self {
        VertexLayout {
            azimuths: (0..4)
                .map(|k| std::f64::consts::FRAC_PI_4 + k as f64 * std::f64::consts::FRAC_PI_2)
                .collect(),
            scale: std::f64::consts::FRAC_1_SQRT_2,
        }
    }

    /// Wide square layout: four vertices at azimuths k·π/2, radial scale 1.
    ///
    /// Not an imaging footprint: its vertices are the cardinal offsets used to
    /// navigate between adjacent detector-unit placements (see
    /// [`shifted_center`](crate::detector::shifted_center)).
    pub fn wide_square() -> Self {
        VertexLayout {
            azimuths: (0..4)
                .map(|k| k as f64 * std::f64::consts::FRAC_PI_2)
                .collect(),
            scale: 1.0,
        }
    }

    /// Arbitrary angular vertex layout.
    pub fn custom(azimuths: &[Radian], scale: f64) -> Self {
        VertexLayout {
            azimuths: SmallVec::from_slice(azimuths),
            scale,
        }
    }

    /// A single-vertex layout, the degenerate case of `custom`.
    pub fn single(azimuth: Radian, scale: f64) -> Self {
        VertexLayout {
            azimuths: smallvec![azimuth],
            scale,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.azimuths.len()
    }
}

/// A convex spherical polygon: the ordered corner ring of one chip's field of
/// view (or of a navigation square).
///
/// Corners are stored in the layout's azimuth order, which fixes the winding
/// consumed by the containment test. Construction is deterministic: identical
/// inputs produce identical rings.
#[derive(Debug, Clone)]
pub struct Footprint {
    corners: Vec<Direction>,
}

impl Footprint {
    /// Place a footprint template on the sphere.
    ///
    /// Arguments
    /// ---------
    /// * `center`: direction of the footprint center.
    /// * `position_angle`: roll about the center, radians.
    /// * `opening`: opening half-angle, radians; the layout's radial scale is
    ///   applied on top of it.
    /// * `layout`: vertex template.
    ///
    /// Each template vertex is built at the north pole and carried to its
    /// final position by the placement attitude; the result is converted back
    /// to angular pairs.
    pub fn place(
        center: &Direction,
        position_angle: Radian,
        opening: Radian,
        layout: &VertexLayout,
    ) -> Self {
        let att = attitude(center, position_angle);
        let tip = roty(opening * layout.scale) * Vector3::z();
        let corners = layout
            .azimuths
            .iter()
            .map(|&az| Direction::from_vector(&(att * (rotz(az) * tip))))
            .collect();
        Footprint { corners }
    }

    pub fn corners(&self) -> &[Direction] {
        &self.corners
    }

    /// The edge ring: corners paired cyclically as (previous, current).
    ///
    /// The returned sequence has even length 2N and is consumed in adjacent
    /// pairs by the containment tester, one pair per polygon edge.
    pub fn edge_ring(&self) -> Vec<Direction> {
        let n = self.corners.len();
        let mut ring = Vec::with_capacity(2 * n);
        for i in 0..n {
            ring.push(self.corners[(i + n - 1) % n]);
            ring.push(self.corners[i]);
        }
        ring
    }

    /// Containment mask of a target batch against this footprint.
    ///
    /// One boolean per target, true iff the target lies in the closed convex
    /// region (boundary inclusive).
    pub fn contains(&self, targets: &TargetList) -> Vec<bool> {
        let verts: Vec<Vector3<f64>> = self.corners.iter().map(Direction::unit_vector).collect();
        let normals: Vec<Vector3<f64>> = verts
            .iter()
            .circular_tuple_windows()
            .map(|(a, b)| a.cross(b))
            .collect();
        mask_from_normals(&normals, targets)
    }
}
