#![forbid(unsafe_code)]

//! Seeded 2D simplex noise.
//!
//! Standard Gustavson construction: skew the plane onto a simplex grid,
//! hash the three surrounding corners through a shuffled permutation table,
//! and sum radial-falloff gradient contributions. Output lies in [-1, 1]
//! and is fully determined by the seed and the sample coordinates, which is
//! what makes the orb motion smooth instead of jittery: nearby "time"
//! coordinates yield nearby samples.

use orbfx_core::NoiseField;

/// Skew factor (sqrt(3) - 1) / 2.
const F2: f64 = 0.366_025_403_784_438_6;
/// Unskew factor (3 - sqrt(3)) / 6.
const G2: f64 = 0.211_324_865_405_187_1;

/// Gradient set for 2D sampling (the x/y components of the classic 12-entry
/// 3D gradient table, which keeps the 70.0 output scaling valid).
const GRAD: [(f64, f64); 12] = [
    (1.0, 1.0),
    (-1.0, 1.0),
    (1.0, -1.0),
    (-1.0, -1.0),
    (1.0, 0.0),
    (-1.0, 0.0),
    (1.0, 0.0),
    (-1.0, 0.0),
    (0.0, 1.0),
    (0.0, -1.0),
    (0.0, 1.0),
    (0.0, -1.0),
];

/// Deterministic 2D simplex noise field.
///
/// Seeded once at construction; sampling is pure.
#[derive(Debug, Clone)]
pub struct SimplexNoise {
    perm: [u8; 512],
    perm_mod12: [u8; 512],
}

impl SimplexNoise {
    /// Build a noise field from a seed. Identical seeds yield identical
    /// fields.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        let mut table: [u8; 256] = [0; 256];
        for (i, slot) in table.iter_mut().enumerate() {
            *slot = i as u8;
        }
        // Fisher-Yates over a seeded rng.
        let mut rng = fastrand::Rng::with_seed(seed);
        for i in (1..256).rev() {
            let j = rng.usize(..=i);
            table.swap(i, j);
        }

        let mut perm = [0u8; 512];
        let mut perm_mod12 = [0u8; 512];
        for i in 0..512 {
            perm[i] = table[i & 255];
            perm_mod12[i] = perm[i] % 12;
        }
        Self { perm, perm_mod12 }
    }

    #[inline]
    fn corner(&self, xd: f64, yd: f64, gi: usize) -> f64 {
        let t = 0.5 - xd * xd - yd * yd;
        if t < 0.0 {
            0.0
        } else {
            let t2 = t * t;
            let (gx, gy) = GRAD[gi];
            t2 * t2 * (gx * xd + gy * yd)
        }
    }
}

impl NoiseField for SimplexNoise {
    fn sample(&self, x: f64, y: f64) -> f64 {
        // Skew input space to find the containing simplex cell.
        let s = (x + y) * F2;
        let i = (x + s).floor();
        let j = (y + s).floor();
        let t = (i + j) * G2;

        // Distances from the cell origin in unskewed space.
        let x0 = x - (i - t);
        let y0 = y - (j - t);

        // Which triangle of the cell we are in.
        let (i1, j1) = if x0 > y0 { (1.0, 0.0) } else { (0.0, 1.0) };

        let x1 = x0 - i1 + G2;
        let y1 = y0 - j1 + G2;
        let x2 = x0 - 1.0 + 2.0 * G2;
        let y2 = y0 - 1.0 + 2.0 * G2;

        let ii = (i as i64 & 255) as usize;
        let jj = (j as i64 & 255) as usize;

        let gi0 = self.perm_mod12[ii + self.perm[jj] as usize] as usize;
        let gi1 = self.perm_mod12[ii + i1 as usize + self.perm[jj + j1 as usize] as usize] as usize;
        let gi2 = self.perm_mod12[ii + 1 + self.perm[jj + 1] as usize] as usize;

        let n0 = self.corner(x0, y0, gi0);
        let n1 = self.corner(x1, y1, gi1);
        let n2 = self.corner(x2, y2, gi2);

        // Scale the sum into [-1, 1].
        70.0 * (n0 + n1 + n2)
    }
}
