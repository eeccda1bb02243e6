use super::bonded::{
    fene_pair_energy, fene_pair_force, harmonic_pair_energy, harmonic_pair_force,
};
use super::error::Error;
use super::sink::{RuntimeWarning, WarningSink};
use super::table::{BondedParams, InteractionTable};
use crate::model::particle::Particle;

/// What a single bond evaluation did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BondOutcome {
    /// Forces were accumulated on both particles; `energy` is the pair's
    /// contribution to the step total.
    Applied { energy: f64 },
    /// The pair was skipped for this step (broken bond); a warning was
    /// reported and no force or energy was written.
    Skipped,
}

/// Evaluates one bonded pair and accumulates its force and energy.
///
/// Looks up `bond_type` in the table, dispatches on the registered kind, and
/// on success adds the kernel force to `p1` and its negation to `p2`.
/// Newton's third law is enforced here, centrally, so kernels only ever
/// compute one side. A broken bond is reported to `sink` and skipped; an
/// unregistered bond type is a topology inconsistency and fails the call.
///
/// `dx` must be `pos(p1) - pos(p2)`, with periodic imaging already applied
/// by the caller.
pub fn evaluate_bond(
    table: &InteractionTable,
    bond_type: usize,
    p1: &mut Particle,
    p2: &mut Particle,
    dx: [f64; 3],
    sink: &mut dyn WarningSink,
) -> Result<BondOutcome, Error> {
    let params = table
        .get(bond_type)
        .ok_or(Error::UndefinedBondType { bond_type })?;

    let evaluated = match params {
        BondedParams::Fene(fene) => fene_pair_force(p1, p2, fene, dx).and_then(|force| {
            fene_pair_energy(p1, p2, fene, dx).map(|energy| (force, energy))
        }),
        BondedParams::Harmonic(harmonic) => Ok((
            harmonic_pair_force(harmonic, dx),
            harmonic_pair_energy(harmonic, dx),
        )),
    };

    match evaluated {
        Ok((force, energy)) => {
            p1.add_force(force);
            p2.add_force([-force[0], -force[1], -force[2]]);
            Ok(BondOutcome::Applied { energy })
        }
        Err(broken) => {
            sink.report(RuntimeWarning::BondBroken {
                bond_type,
                p1: broken.p1,
                p2: broken.p2,
            });
            Ok(BondOutcome::Skipped)
        }
    }
}

/// Borrows two distinct particles of one slice mutably.
pub(super) fn split_pair(particles: &mut [Particle], i: usize, j: usize) -> (&mut Particle, &mut Particle) {
    debug_assert!(i != j, "a particle cannot be bonded to itself");
    if i < j {
        let (head, tail) = particles.split_at_mut(j);
        (&mut head[i], &mut tail[0])
    } else {
        let (head, tail) = particles.split_at_mut(i);
        (&mut tail[0], &mut head[j])
    }
}
