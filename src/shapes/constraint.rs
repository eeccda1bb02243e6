use super::{DegenerateShape, Distance, Shape};
use crate::eval::sink::{RuntimeWarning, WarningSink};
use crate::model::particle::Particle;

/// The non-bonded wall kernel that turns a signed distance into a force.
///
/// This collaborator lives outside the core (it is typically one of the
/// simulation's non-bonded pair potentials, evaluated against the virtual
/// wall particle). The contract is minimal: given the signed distance it
/// returns a scalar factor, and the boundary force is `factor * vec` with
/// [`Distance::vec`] used as-is, no renormalization.
pub trait BoundaryPotential {
    fn force_factor(&self, dist: f64) -> f64;
}

/// What a single constraint evaluation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintOutcome {
    /// A boundary force was accumulated on the particle.
    Applied,
    /// The geometry was degenerate; a warning was reported and the particle
    /// keeps its accumulated force unchanged for this step.
    Skipped,
}

/// Evaluates one particle against one constraint shape.
///
/// Degenerate geometry (the particle exactly on the shape's reference
/// point) never produces a non-finite force: it is reported to `sink` and
/// the contribution is skipped for this step.
pub fn evaluate_constraint(
    shape: &dyn Shape,
    particle: &mut Particle,
    potential: &dyn BoundaryPotential,
    sink: &mut dyn WarningSink,
) -> ConstraintOutcome {
    match shape.distance(particle.position) {
        Ok(Distance { dist, vec }) => {
            let fac = potential.force_factor(dist);
            particle.add_force([fac * vec[0], fac * vec[1], fac * vec[2]]);
            ConstraintOutcome::Applied
        }
        Err(DegenerateShape) => {
            log::debug!(
                "skipping degenerate constraint contribution for particle {}",
                particle.id
            );
            sink.report(RuntimeWarning::DegenerateGeometry {
                particle: particle.id,
            });
            ConstraintOutcome::Skipped
        }
    }
}
