//! Point-in-convex-region testing on the unit sphere.
//!
//! An edge is the great-circle arc between two consecutive footprint corners
//! (a, b). Its normal n = a × b is deliberately left unnormalized: a target w
//! lies on the correct side of the edge iff 0 ≤ w·n ≤ 1. The lower bound is
//! the half-space test; the upper bound restricts the test to directions in
//! the same angular neighborhood as the edge, rejecting antipodal false
//! positives. The bound at exactly 1 (rather than some other cap) is
//! inherited behavior from the flight mapping code and is kept verbatim; it
//! implicitly limits footprints to well under a hemisphere. The band itself
//! is evaluated with a small rounding margin so the boundary is inclusive in
//! practice, not only in exact arithmetic.

use nalgebra::Vector3;

use crate::constants::EDGE_TOLERANCE;
use crate::direction::Direction;
use crate::skycover_errors::SkycoverError;
use crate::targets::TargetList;

/// Half-space band test against one edge normal.
///
/// The closed band [0, 1] is widened by [`EDGE_TOLERANCE`] on both sides:
/// a target exactly on the edge great circle evaluates to 0 (or to 1 at the
/// band's far boundary) only up to rounding, and boundary targets must stay
/// inside.
#[inline]
fn on_correct_side(w: &Vector3<f64>, normal: &Vector3<f64>) -> bool {
    let c = w.dot(normal);
    (-EDGE_TOLERANCE..=1.0 + EDGE_TOLERANCE).contains(&c)
}

/// Containment mask given precomputed edge normals (logical AND across edges).
pub(crate) fn mask_from_normals(normals: &[Vector3<f64>], targets: &TargetList) -> Vec<bool> {
    targets
        .unit_vectors()
        .iter()
        .map(|w| normals.iter().all(|n| on_correct_side(w, n)))
        .collect()
}

/// Test a target batch against an explicit edge ring.
///
/// Arguments
/// ---------
/// * `ring`: an even-length vertex sequence, consumed in adjacent pairs; each
///   pair (a, b) is one polygon edge. A 2-vertex ring is valid and reduces to
///   a single half-space test.
/// * `targets`: the target batch.
///
/// Returns
/// -------
/// * One boolean per target, true iff every edge admits the target
///   (boundary inclusive).
///
/// Errors
/// ------
/// * [`SkycoverError::OddVertexRing`] if the ring length is odd. This is a
///   caller bug in template construction and is rejected outright.
pub fn inside_ring(ring: &[Direction], targets: &TargetList) -> Result<Vec<bool>, SkycoverError> {
    if ring.len() % 2 != 0 {
        return Err(SkycoverError::OddVertexRing(ring.len()));
    }
    let normals: Vec<Vector3<f64>> = ring
        .chunks_exact(2)
        .map(|edge| edge[0].unit_vector().cross(&edge[1].unit_vector()))
        .collect();
    Ok(mask_from_normals(&normals, targets))
}

#[cfg(test)]
mod containment_test {
    use super::*;

    fn dir(v: [f64; 3]) -> Direction {
        Direction::from_vector(&Vector3::new(v[0], v[1], v[2]))
    }

    // Four-corner convex spanning the first octant corner region.
    fn octant_convex() -> Vec<Direction> {
        let s = std::f64::consts::FRAC_1_SQRT_2;
        let corners = [
            dir([1.0, 0.0, 0.0]),
            dir([0.0, 1.0, 0.0]),
            dir([0.0, s, s]),
            dir([s, 0.0, 1.0]),
        ];
        let n = corners.len();
        let mut ring = Vec::new();
        for i in 0..n {
            ring.push(corners[(i + n - 1) % n]);
            ring.push(corners[i]);
        }
        ring
    }

    #[test]
    fn test_pole_outside_octant_convex() {
        let targets = TargetList::new(&[dir([0.0, 0.0, 1.0])]);
        let mask = inside_ring(&octant_convex(), &targets).unwrap();
        assert_eq!(mask, vec![false]);
    }

    #[test]
    fn test_interior_point_inside_octant_convex() {
        let s = std::f64::consts::FRAC_1_SQRT_2;
        let targets = TargetList::new(&[dir([s, s, 0.5])]);
        let mask = inside_ring(&octant_convex(), &targets).unwrap();
        assert_eq!(mask, vec![true]);
    }

    #[test]
    fn test_batch_masks_are_independent() {
        let s = std::f64::consts::FRAC_1_SQRT_2;
        let targets = TargetList::new(&[
            dir([0.0, 0.0, 1.0]),
            dir([s, s, 0.5]),
            dir([0.0, 0.0, 1.0]),
            dir([s, s, 0.5]),
        ]);
        let mask = inside_ring(&octant_convex(), &targets).unwrap();
        assert_eq!(mask, vec![false, true, false, true]);
    }

    #[test]
    fn test_two_vertex_ring_is_a_half_space() {
        // Edge from +x to +y: normal +z, so the test keeps the closed
        // northern hemisphere (upper bound included).
        let ring = vec![dir([1.0, 0.0, 0.0]), dir([0.0, 1.0, 0.0])];
        let s = std::f64::consts::FRAC_1_SQRT_2;
        let targets = TargetList::new(&[
            dir([0.0, 0.0, 1.0]),  // c = 1, boundary of the band
            dir([s, s, 0.0]),      // c = 0, on the great circle
            dir([0.0, 0.0, -1.0]), // southern pole
            dir([0.3, -0.2, 0.8]),
        ]);
        let mask = inside_ring(&ring, &targets).unwrap();
        assert_eq!(mask, vec![true, true, false, true]);
    }

    #[test]
    fn test_odd_ring_is_rejected() {
        let ring = vec![
            dir([1.0, 0.0, 0.0]),
            dir([0.0, 1.0, 0.0]),
            dir([0.0, 0.0, 1.0]),
        ];
        let targets = TargetList::new(&[dir([0.0, 0.0, 1.0])]);
        assert!(matches!(
            inside_ring(&ring, &targets),
            Err(SkycoverError::OddVertexRing(3))
        ));
    }
}
