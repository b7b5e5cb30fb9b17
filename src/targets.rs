use nalgebra::Vector3;
use rand::Rng;
use rand_distr::StandardNormal;

use crate::constants::Radian;
use crate::direction::Direction;
use crate::skycover_errors::SkycoverError;

/// A fixed batch of catalog target directions.
///
/// The unit vectors are precomputed once at construction so that a single
/// target set can be tested against many footprints without re-evaluating any
/// trigonometry. The batch is immutable for the duration of a containment
/// evaluation.
#[derive(Debug, Clone)]
pub struct TargetList {
    units: Vec<Vector3<f64>>,
}

impl TargetList {
    pub fn new(directions: &[Direction]) -> Self {
        TargetList {
            units: directions.iter().map(Direction::unit_vector).collect(),
        }
    }

    /// Build a target list from parallel co-latitude / longitude arrays in radians.
    ///
    /// Errors
    /// ------
    /// * [`SkycoverError::LengthMismatch`] if the arrays disagree in length.
    /// * [`SkycoverError::ColatitudeOutOfRange`] if any co-latitude is invalid.
    pub fn from_angles(theta: &[Radian], phi: &[Radian]) -> Result<Self, SkycoverError> {
        if theta.len() != phi.len() {
            return Err(SkycoverError::LengthMismatch {
                expected: theta.len(),
                got: phi.len(),
            });
        }
        let mut units = Vec::with_capacity(theta.len());
        for (&t, &p) in theta.iter().zip(phi) {
            units.push(Direction::new(t, p)?.unit_vector());
        }
        Ok(TargetList { units })
    }

    /// Draw `n` uniform random directions on the unit sphere.
    ///
    /// Each direction is a normalized triple of standard normal deviates,
    /// which is isotropic by construction.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Self {
        let units = (0..n)
            .map(|_| {
                Vector3::new(
                    rng.sample::<f64, _>(StandardNormal),
                    rng.sample::<f64, _>(StandardNormal),
                    rng.sample::<f64, _>(StandardNormal),
                )
                .normalize()
            })
            .collect();
        TargetList { units }
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// The precomputed unit vectors, one per target.
    pub fn unit_vectors(&self) -> &[Vector3<f64>] {
        &self.units
    }

    /// The angular pairs (θ, φ) of every target.
    pub fn directions(&self) -> Vec<Direction> {
        self.units.iter().map(Direction::from_vector).collect()
    }
}
