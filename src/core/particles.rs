//! Decorative particle field — a bounded point cloud with clock-driven drift.
//!
//! Generation is a one-time random draw from an injectable [`Rng`], so tests
//! can pass a seeded generator and assert structural properties (count,
//! bounds, accent ratio) without flakiness.  Motion, by contrast, is fully
//! deterministic: [`FieldPose::at`] maps elapsed wall-clock seconds to a
//! rotation + scale pulse + vertical float, and the same instant always
//! produces the same pose.

use rand::Rng;

/// Particles per field.
pub const DEFAULT_COUNT: usize = 2000;

/// Probability that a particle gets the accent colour instead of neutral.
pub const ACCENT_PROBABILITY: f64 = 0.15;

/// Edge length of the bounding cube; positions are uniform in ±SPREAD/2.
pub const SPREAD: f64 = 18.0;

/// One point of the cloud.
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    pub pos: [f64; 3],
    pub accent: bool,
}

/// The generated point cloud.  Positions never change after generation;
/// all motion comes from the per-frame [`FieldPose`].
#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    /// One-time pseudo-random draw of `count` particles.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Self {
        let particles = (0..count)
            .map(|_| Particle {
                pos: [
                    (rng.gen::<f64>() - 0.5) * SPREAD,
                    (rng.gen::<f64>() - 0.5) * SPREAD,
                    (rng.gen::<f64>() - 0.5) * SPREAD,
                ],
                accent: rng.gen::<f64>() < ACCENT_PROBABILITY,
            })
            .collect();
        Self { particles }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Half-width of the bounding cube, before the pose's scale pulse.
    pub fn half_extent(&self) -> f64 {
        SPREAD * 0.5
    }
}

// ───────────────────────────────────────── pose ──────────────

/// The field's transform at one instant: slow yaw drift, a gentle pitch/roll
/// sway, a "breathing" scale pulse, and a vertical float.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldPose {
    pub yaw: f64,
    pub pitch: f64,
    pub roll: f64,
    pub scale: f64,
    pub y_offset: f64,
}

impl FieldPose {
    /// Pose after `t` elapsed seconds.  Pure: same `t`, same pose.
    pub fn at(t: f64) -> Self {
        Self {
            yaw: t * 0.08,
            pitch: (t * 0.15).sin() * 0.1,
            roll: (t * 0.10).cos() * 0.05,
            scale: 1.0 + (t * 0.3).sin() * 0.1,
            y_offset: (t * 0.2).sin() * 0.5,
        }
    }

    /// Transform a particle position: rotate (pitch, then yaw, then roll),
    /// scale, then float.
    pub fn apply(&self, p: [f64; 3]) -> [f64; 3] {
        let [x, y, z] = p;

        // Pitch: rotate around X.
        let (sin_p, cos_p) = self.pitch.sin_cos();
        let y1 = y * cos_p - z * sin_p;
        let z1 = y * sin_p + z * cos_p;

        // Yaw: rotate around Y.
        let (sin_y, cos_y) = self.yaw.sin_cos();
        let x2 = x * cos_y + z1 * sin_y;
        let z2 = -x * sin_y + z1 * cos_y;

        // Roll: rotate around Z.
        let (sin_r, cos_r) = self.roll.sin_cos();
        let x3 = x2 * cos_r - y1 * sin_r;
        let y3 = x2 * sin_r + y1 * cos_r;

        [
            x3 * self.scale,
            y3 * self.scale + self.y_offset,
            z2 * self.scale,
        ]
    }
}

// ───────────────────────────────────────── tests ─────────────

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn generates_exact_count_within_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let field = ParticleField::generate(&mut rng, DEFAULT_COUNT);
        assert_eq!(field.particles().len(), DEFAULT_COUNT);
        let half = field.half_extent();
        for p in field.particles() {
            for axis in p.pos {
                assert!(axis.abs() <= half);
            }
        }
    }

    #[test]
    fn accent_ratio_is_statistically_near_probability() {
        // Exact counts are not required — only that the ratio lands within
        // a loose tolerance band across independent generations.
        for seed in 0..5u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let field = ParticleField::generate(&mut rng, 2000);
            let accents = field.particles().iter().filter(|p| p.accent).count();
            let ratio = accents as f64 / 2000.0;
            assert!(
                (0.10..=0.20).contains(&ratio),
                "seed {seed}: accent ratio {ratio} outside tolerance"
            );
        }
    }

    #[test]
    fn pose_is_deterministic_in_elapsed_time() {
        let a = FieldPose::at(12.34);
        let b = FieldPose::at(12.34);
        assert_eq!(a, b);
        assert_ne!(a, FieldPose::at(12.35));
    }

    #[test]
    fn identity_pose_at_time_zero_preserves_xz() {
        let pose = FieldPose::at(0.0);
        assert_eq!(pose.yaw, 0.0);
        assert_eq!(pose.y_offset, 0.0);
        // pitch is 0 at t=0; roll is cos(0)*0.05 — small but nonzero.
        let p = pose.apply([1.0, 0.0, 0.0]);
        assert!((p[0] - pose.scale * pose.roll.cos()).abs() < 1e-9);
    }
}
