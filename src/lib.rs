//! A pure Rust force/energy evaluation core for particle-based molecular
//! dynamics. It provides the per-pair bonded-interaction kernels, the
//! registry that maps bond types to interaction parameters, and the
//! geometric constraint machinery that turns analytic shapes into boundary
//! forces — the numeric heart a simulation engine calls millions of times
//! per timestep.
//!
//! # Features
//!
//! - **Bonded kernels** — FENE and harmonic pair potentials as pure,
//!   allocation-free force/energy functions with explicit statuses for
//!   broken bonds
//! - **Interaction registry** — A growable table of parameter slots keyed
//!   by dense bond type, with validated registration and an injectable
//!   broadcast hook for distributed runs
//! - **Central dispatch** — Exhaustive per-kind dispatch that enforces
//!   Newton's third law in one place and downgrades per-pair failures to
//!   structured warnings instead of aborting the step
//! - **Constraint shapes** — Signed-distance evaluation for spheres and
//!   walls, with degenerate geometry surfaced as a value, never a NaN
//! - **Declarative setup** — TOML documents describing interaction slots
//!   and constraints, applied through the same validated paths as the API
//!
//! # Quick Start
//!
//! Two particles on a FENE bond inside a spherical cavity:
//!
//! ```
//! use mdforce::{
//!     compute_forces, load_config, BoundaryPotential, CollectedWarnings, InteractionTable,
//!     System,
//! };
//!
//! let config = load_config(
//!     r#"
//!     [[bonds]]
//!     bond_type = 0
//!     kind = "fene"
//!     k = 30.0
//!     r = 1.5
//!
//!     [[constraints]]
//!     shape = "sphere"
//!     center = [0.0, 0.0, 0.0]
//!     radius = 2.0
//!     orientation = "inside"
//!     "#,
//! )?;
//!
//! let mut table = InteractionTable::new();
//! config.apply(&mut table)?;
//! let constraints = config.build_shapes()?;
//!
//! let mut system = System::new();
//! system.add_particle([0.5, 0.0, 0.0]);
//! system.add_particle([-0.5, 0.0, 0.0]);
//! system.add_bond(0, 1, 0);
//!
//! // The wall kernel is a non-bonded potential owned by the caller; a
//! // constant repulsion stands in for it here.
//! struct Repulsion;
//! impl BoundaryPotential for Repulsion {
//!     fn force_factor(&self, _dist: f64) -> f64 {
//!         1.0
//!     }
//! }
//!
//! let mut warnings = CollectedWarnings::new();
//! let energy = compute_forces(
//!     &mut system,
//!     &table,
//!     &constraints,
//!     &Repulsion,
//!     &mut warnings,
//! )?;
//!
//! // The FENE pair pulls the particles together with equal and opposite
//! // force, and stores a positive pair energy.
//! assert!(energy.bonded > 0.0);
//! assert_eq!(system.particles[0].force[0], -system.particles[1].force[0]);
//! assert!(warnings.is_empty());
//! # Ok::<(), mdforce::Error>(())
//! ```
//!
//! # Module Organization
//!
//! - [`shapes`] — Constraint shapes, their signed-distance contract, and
//!   the constraint evaluator
//!
//! # Data Types
//!
//! ## Particles and topology
//!
//! - [`System`] — Particle storage with bond descriptors
//! - [`Particle`] — Position, force accumulator, bond list
//! - [`BondDescriptor`] — (bond type, partner) entry in a bond list
//!
//! ## Interactions
//!
//! - [`InteractionTable`] — Registry of parameter slots keyed by bond type
//! - [`BondedParams`] — Tagged parameter variant ([`FeneParams`],
//!   [`HarmonicParams`])
//! - [`BondedKind`] — Interaction kind classification
//! - [`ParamBroadcast`] — Post-write propagation hook
//!
//! ## Evaluation
//!
//! - [`evaluate_bond`] / [`BondOutcome`] — Single-pair dispatch
//! - [`compute_forces`] / [`StepEnergy`] — Whole-system force phase
//! - [`BondBroken`] — Overextension status returned by kernels
//! - [`RuntimeWarning`] / [`WarningSink`] — Structured recoverable
//!   conditions and where they are reported
//!
//! ## Configuration
//!
//! - [`CoreConfig`], [`BondSpec`], [`ConstraintSpec`], [`load_config`] —
//!   Declarative TOML setup
//! - [`Error`] — Configuration and dispatch failures

mod eval;
mod model;

pub mod shapes;

pub use model::particle::{BondDescriptor, Particle, System};
pub use model::types::{
    BondedKind, Orientation, ParseBondedKindError, ParseOrientationError,
};

pub use eval::bonded::{
    fene_pair_energy, fene_pair_force, harmonic_pair_energy, harmonic_pair_force, BondBroken,
};
pub use eval::dispatch::{evaluate_bond, BondOutcome};
pub use eval::sink::{CollectedWarnings, NullSink, RuntimeWarning, WarningSink};
pub use eval::table::{
    BondedParams, FeneParams, HarmonicParams, InteractionTable, ParamBroadcast,
};
pub use eval::{compute_forces, load_config, BondSpec, ConstraintSpec, CoreConfig, StepEnergy};

pub use shapes::constraint::{evaluate_constraint, BoundaryPotential, ConstraintOutcome};
pub use shapes::sphere::Sphere;
pub use shapes::wall::Wall;
pub use shapes::{DegenerateShape, Distance, Shape};

pub use eval::Error;
