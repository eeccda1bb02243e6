//! Bonded pair kernels: the per-pair force and energy functions.
//!
//! Every kernel is a pure, allocation-free function of the parameter record
//! and the caller-computed displacement `dx = pos(p1) - pos(p2)` (periodic
//! imaging, if any, is applied by the caller). Kernels never touch force
//! accumulators — the dispatcher in [`super::dispatch`] owns accumulation
//! and Newton's-third-law bookkeeping — and they report exceptional pair
//! states as values instead of raising from inside the hot loop.

use super::table::{FeneParams, HarmonicParams};
use crate::model::particle::Particle;
use thiserror::Error;

/// A bond stretched to or beyond its maximum extension.
///
/// This is an expected runtime condition, recovered per pair: the dispatcher
/// converts it into a warning on the simulation's sink and skips the pair
/// for this step. It carries the participant ids so the warning can name
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("bond broken between particles {p1} and {p2}")]
pub struct BondBroken {
    pub p1: usize,
    pub p2: usize,
}

/// Force factors beyond this magnitude get a diagnostic log line.
const FENE_FAC_WARN: f64 = 50.0;

#[inline]
fn sqrlen(v: [f64; 3]) -> f64 {
    v[0] * v[0] + v[1] * v[1] + v[2] * v[2]
}

/// Computes the FENE force on `p1`; the force on `p2` is its negation.
///
/// Returns [`BondBroken`] when `|dx|^2 >= r^2`. The `>=` is deliberate: the
/// potential is singular exactly at the maximum extension, so that point is
/// treated as broken and never evaluated.
pub fn fene_pair_force(
    p1: &Particle,
    p2: &Particle,
    params: &FeneParams,
    dx: [f64; 3],
) -> Result<[f64; 3], BondBroken> {
    let dist2 = sqrlen(dx);
    if dist2 >= params.r2() {
        return Err(BondBroken {
            p1: p1.id,
            p2: p2.id,
        });
    }

    let fac = -params.k / (1.0 - dist2 / params.r2());
    if fac.abs() > FENE_FAC_WARN {
        log::warn!(
            "large FENE force factor between particles {} and {}: {:.3e} at distance {:.6}",
            p1.id,
            p2.id,
            fac,
            dist2.sqrt()
        );
    }

    Ok([fac * dx[0], fac * dx[1], fac * dx[2]])
}

/// Computes the FENE pair energy `-k/2 r^2 ln(1 - |dx|^2/r^2)`.
///
/// Non-negative and finite everywhere on the valid domain (the log argument
/// lies in (0, 1]); diverges as the extension approaches `r`. Uses the same
/// `>=` extension check as [`fene_pair_force`], so a pair is either broken
/// for both kernels or for neither.
pub fn fene_pair_energy(
    p1: &Particle,
    p2: &Particle,
    params: &FeneParams,
    dx: [f64; 3],
) -> Result<f64, BondBroken> {
    let dist2 = sqrlen(dx);
    if dist2 >= params.r2() {
        return Err(BondBroken {
            p1: p1.id,
            p2: p2.id,
        });
    }

    Ok(-0.5 * params.k * params.r2() * (1.0 - dist2 / params.r2()).ln())
}

/// Computes the harmonic force on the first particle of the pair.
///
/// At zero separation a rest-length spring has no defined direction; the
/// force is zero there, which keeps the kernel total and NaN-free.
pub fn harmonic_pair_force(params: &HarmonicParams, dx: [f64; 3]) -> [f64; 3] {
    let dist = sqrlen(dx).sqrt();
    if dist == 0.0 {
        return [0.0; 3];
    }

    let fac = -params.k * (1.0 - params.r0 / dist);
    [fac * dx[0], fac * dx[1], fac * dx[2]]
}

/// Computes the harmonic pair energy `k/2 (|dx| - r0)^2`.
pub fn harmonic_pair_energy(params: &HarmonicParams, dx: [f64; 3]) -> f64 {
    let dr = sqrlen(dx).sqrt() - params.r0;
    0.5 * params.k * dr * dr
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    fn pair() -> (Particle, Particle) {
        (Particle::new(0, [0.0; 3]), Particle::new(1, [1.0, 0.0, 0.0]))
    }

    #[test]
    fn fene_force_matches_reference_value() {
        let (p1, p2) = pair();
        let params = FeneParams::new(30.0, 1.5).unwrap();

        // |dx| = 1, r^2 = 2.25: fac = -30 / (1 - 1/2.25) = -54 exactly.
        let force = fene_pair_force(&p1, &p2, &params, [1.0, 0.0, 0.0]).unwrap();
        assert!(approx_eq(force[0], -54.0, 1e-9));
        assert_eq!(force[1], 0.0);
        assert_eq!(force[2], 0.0);
    }

    #[test]
    fn fene_energy_matches_reference_value() {
        let (p1, p2) = pair();
        let params = FeneParams::new(30.0, 1.5).unwrap();

        // E = -0.5 * 30 * 2.25 * ln(1 - 1/2.25) = -33.75 * ln(5/9)
        let energy = fene_pair_energy(&p1, &p2, &params, [1.0, 0.0, 0.0]).unwrap();
        assert!(approx_eq(energy, 19.837799940446518, 1e-9));
    }

    #[test]
    fn fene_breaks_at_and_past_maximum_extension() {
        let (p1, p2) = pair();
        let params = FeneParams::new(30.0, 1.5).unwrap();
        let broken = BondBroken { p1: 0, p2: 1 };

        assert_eq!(
            fene_pair_force(&p1, &p2, &params, [1.5, 0.0, 0.0]).unwrap_err(),
            broken
        );
        assert_eq!(
            fene_pair_energy(&p1, &p2, &params, [1.5, 0.0, 0.0]).unwrap_err(),
            broken
        );
        assert_eq!(
            fene_pair_force(&p1, &p2, &params, [1.6, 0.0, 0.0]).unwrap_err(),
            broken
        );
        assert_eq!(
            fene_pair_energy(&p1, &p2, &params, [0.9, 0.9, 0.9]).unwrap_err(),
            broken
        );
    }

    #[test]
    fn fene_force_is_antisymmetric_in_dx() {
        let (p1, p2) = pair();
        let params = FeneParams::new(30.0, 1.5).unwrap();
        let dx = [0.4, -0.7, 0.2];

        let f12 = fene_pair_force(&p1, &p2, &params, dx).unwrap();
        let f21 = fene_pair_force(&p2, &p1, &params, [-dx[0], -dx[1], -dx[2]]).unwrap();
        for i in 0..3 {
            assert!(approx_eq(f12[i], -f21[i], 1e-12));
        }
    }

    #[test]
    fn fene_energy_is_nonnegative_and_increases_toward_the_limit() {
        let (p1, p2) = pair();
        let params = FeneParams::new(30.0, 1.5).unwrap();

        let mut last = -1.0;
        for dist in [0.0, 0.3, 0.6, 0.9, 1.2, 1.4, 1.49, 1.499] {
            let energy = fene_pair_energy(&p1, &p2, &params, [dist, 0.0, 0.0]).unwrap();
            assert!(energy >= 0.0);
            assert!(energy > last);
            last = energy;
        }
        // Close to the maximum extension the energy has left any bonded scale
        // far behind, on its way to the divergence.
        assert!(last > 100.0);
    }

    #[test]
    fn fene_restoring_force_points_toward_the_partner() {
        let (p1, p2) = pair();
        let params = FeneParams::new(30.0, 1.5).unwrap();

        // dx = pos(p1) - pos(p2) along +x, so the restoring force on p1 is -x.
        let force = fene_pair_force(&p1, &p2, &params, [1.0, 0.0, 0.0]).unwrap();
        assert!(force[0] < 0.0);
    }

    #[test]
    fn harmonic_force_vanishes_at_rest_length() {
        let params = HarmonicParams::new(100.0, 1.0).unwrap();
        let force = harmonic_pair_force(&params, [1.0, 0.0, 0.0]);
        for f in force {
            assert!(approx_eq(f, 0.0, 1e-12));
        }
    }

    #[test]
    fn harmonic_force_restores_on_both_sides() {
        let params = HarmonicParams::new(100.0, 1.0).unwrap();

        // Stretched: force on p1 points back toward p2 (-x).
        let stretched = harmonic_pair_force(&params, [1.5, 0.0, 0.0]);
        assert!(stretched[0] < 0.0);

        // Compressed: force pushes p1 away from p2 (+x).
        let compressed = harmonic_pair_force(&params, [0.5, 0.0, 0.0]);
        assert!(compressed[0] > 0.0);
    }

    #[test]
    fn harmonic_zero_separation_is_finite() {
        let params = HarmonicParams::new(100.0, 1.0).unwrap();
        let force = harmonic_pair_force(&params, [0.0; 3]);
        assert_eq!(force, [0.0; 3]);

        let energy = harmonic_pair_energy(&params, [0.0; 3]);
        assert!(approx_eq(energy, 50.0, 1e-12));
    }

    #[test]
    fn harmonic_energy_reference_value() {
        let params = HarmonicParams::new(100.0, 1.0).unwrap();
        // |dx| = 1.5: E = 50 * 0.25 = 12.5
        let energy = harmonic_pair_energy(&params, [1.5, 0.0, 0.0]);
        assert!(approx_eq(energy, 12.5, 1e-12));
    }
}
