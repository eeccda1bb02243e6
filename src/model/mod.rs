//! Core data structures representing particles and their bond topology.
//!
//! This module provides the foundational types that flow through `mdforce`:
//!
//! - [`particle`] – Particles with positions, force accumulators, and bond lists.
//! - [`types`] – Bonded interaction kinds and constraint orientation conventions.
//!
//! The data model intentionally keeps particles dumb: positions are mutated by
//! the (external) integrator, force accumulators are mutated additively by the
//! evaluation kernels, and bond descriptors are edited only by (external)
//! topology commands. Nothing in this module computes physics.

pub mod particle;
pub mod types;
