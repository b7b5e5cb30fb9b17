//! Shared test helpers: a deterministic Mersenne Twister target generator.
//!
//! The integration tests pin exact containment counts, so the pseudo-random
//! sky targets they run against must be reproducible bit for bit. This module
//! carries a self-contained MT19937 with the classic polar gaussian transform
//! and the batch layout used to turn gaussian triples into isotropic sky
//! directions. Keep the arithmetic exactly as written; any reordering changes
//! every expected count in the touchstone tests.

use skycover::direction::Direction;
use skycover::targets::TargetList;

const N: usize = 624;
const M: usize = 397;
const MATRIX_A: u32 = 0x9908_b0df;
const UPPER_MASK: u32 = 0x8000_0000;
const LOWER_MASK: u32 = 0x7fff_ffff;

/// MT19937 with a cached polar-method gaussian stage.
pub struct MersenneTwister {
    mt: [u32; N],
    mti: usize,
    cached_gauss: Option<f64>,
}

impl MersenneTwister {
    pub fn new(seed: u32) -> Self {
        let mut mt = [0u32; N];
        mt[0] = seed;
        for i in 1..N {
            mt[i] = 1_812_433_253u32
                .wrapping_mul(mt[i - 1] ^ (mt[i - 1] >> 30))
                .wrapping_add(i as u32);
        }
        MersenneTwister {
            mt,
            mti: N,
            cached_gauss: None,
        }
    }

    fn next_u32(&mut self) -> u32 {
        if self.mti >= N {
            for kk in 0..N {
                let y = (self.mt[kk] & UPPER_MASK) | (self.mt[(kk + 1) % N] & LOWER_MASK);
                self.mt[kk] = self.mt[(kk + M) % N] ^ (y >> 1);
                if y & 1 == 1 {
                    self.mt[kk] ^= MATRIX_A;
                }
            }
            self.mti = 0;
        }
        let mut y = self.mt[self.mti];
        self.mti += 1;
        y ^= y >> 11;
        y ^= (y << 7) & 0x9d2c_5680;
        y ^= (y << 15) & 0xefc6_0000;
        y ^= y >> 18;
        y
    }

    /// Uniform double in [0, 1) with 53 bits of precision.
    pub fn next_double(&mut self) -> f64 {
        let a = (self.next_u32() >> 5) as f64;
        let b = (self.next_u32() >> 6) as f64;
        (a * 67_108_864.0 + b) / 9_007_199_254_740_992.0
    }

    /// Standard normal deviate via the polar method, one value cached per
    /// accept-reject round.
    pub fn next_gauss(&mut self) -> f64 {
        if let Some(g) = self.cached_gauss.take() {
            return g;
        }
        loop {
            let x1 = 2.0 * self.next_double() - 1.0;
            let x2 = 2.0 * self.next_double() - 1.0;
            let r2 = x1 * x1 + x2 * x2;
            if r2 < 1.0 && r2 != 0.0 {
                let f = (-2.0 * r2.ln() / r2).sqrt();
                self.cached_gauss = Some(f * x1);
                return f * x2;
            }
        }
    }
}

/// `n` isotropic sky targets from seed `seed`.
///
/// The 3n gaussian deviates are laid out as three stripes of length n; target
/// `j` is normalized with the stripe triple (g[j], g[n+j], g[2n+j]) but its
/// components are read back in row-major triples of the normalized block.
/// This is the exact batch layout of the touchstone data, not a plain
/// per-target normalization.
pub fn fixture_targets(n: usize, seed: u32) -> TargetList {
    let mut rng = MersenneTwister::new(seed);
    let gauss: Vec<f64> = (0..3 * n).map(|_| rng.next_gauss()).collect();

    let norms: Vec<f64> = (0..n)
        .map(|j| {
            (gauss[j] * gauss[j] + gauss[n + j] * gauss[n + j] + gauss[2 * n + j] * gauss[2 * n + j])
                .sqrt()
        })
        .collect();

    let mut flat = Vec::with_capacity(3 * n);
    for row in 0..3 {
        for j in 0..n {
            flat.push(gauss[row * n + j] / norms[j]);
        }
    }

    let directions: Vec<Direction> = (0..n)
        .map(|j| {
            let (x, y, z) = (flat[3 * j], flat[3 * j + 1], flat[3 * j + 2]);
            let dn = (x * x + y * y + z * z).sqrt();
            let theta = (z / dn).acos();
            let mut phi = y.atan2(x);
            if phi < 0.0 {
                phi += 2.0 * std::f64::consts::PI;
            }
            Direction::new(theta, phi).unwrap()
        })
        .collect();
    TargetList::new(&directions)
}
