pub mod bonded;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod sink;
pub mod table;

pub use config::{load_config, BondSpec, ConstraintSpec, CoreConfig};
pub use error::Error;

use crate::model::particle::System;
use crate::shapes::constraint::{evaluate_constraint, BoundaryPotential};
use crate::shapes::Shape;
use dispatch::{evaluate_bond, split_pair, BondOutcome};
use sink::WarningSink;

/// Energy totals accumulated over one force phase.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StepEnergy {
    /// Sum of all bonded pair energies applied this step. Constraint
    /// energies are bookkept by the non-bonded layer that owns the wall
    /// kernel, not here.
    pub bonded: f64,
}

/// Runs one force phase over the whole system.
///
/// Walks every particle's bond list, dispatching each pair through the
/// interaction table, then evaluates every particle against every
/// constraint shape. Forces accumulate onto the particles, on top of
/// whatever is already there (zeroing the accumulators at the start of a
/// timestep is the integrator's job); the bonded energy total is returned.
///
/// Displacements are plain position differences. Periodic imaging belongs
/// to the caller's pair bookkeeping, as does any parallel decomposition:
/// this driver is the serial reference. Callers that split it across
/// workers must keep each particle's accumulator owned by one worker or
/// reduce privately, since concurrent unsynchronized accumulation loses
/// updates.
///
/// Recoverable conditions (broken bonds, degenerate constraint geometry)
/// land in `sink` and skip only the affected contribution. An unregistered
/// bond type aborts the phase with an error.
pub fn compute_forces(
    system: &mut System,
    table: &table::InteractionTable,
    constraints: &[Box<dyn Shape>],
    boundary: &dyn BoundaryPotential,
    sink: &mut dyn WarningSink,
) -> Result<StepEnergy, Error> {
    let mut energy = StepEnergy::default();

    for i in 0..system.particles.len() {
        for b in 0..system.particles[i].bonds.len() {
            let descriptor = system.particles[i].bonds[b];
            let (p1, p2) = split_pair(&mut system.particles, i, descriptor.partner);
            let dx = [
                p1.position[0] - p2.position[0],
                p1.position[1] - p2.position[1],
                p1.position[2] - p2.position[2],
            ];

            match evaluate_bond(table, descriptor.bond_type, p1, p2, dx, sink)? {
                BondOutcome::Applied { energy: pair } => energy.bonded += pair,
                BondOutcome::Skipped => {}
            }
        }
    }

    for particle in &mut system.particles {
        for shape in constraints {
            evaluate_constraint(shape.as_ref(), particle, boundary, sink);
        }
    }

    Ok(energy)
}
