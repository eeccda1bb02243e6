//! Analytic constraint shapes and their signed-distance contract.
//!
//! A shape is an immutable geometric description plus one pure function:
//! [`Shape::distance`]. Given a particle position it returns a [`Distance`]
//! whose sign says which side of the boundary the particle is on (positive
//! in the allowed region) and whose vector is ready to be scaled into a
//! boundary force. Shapes are read-only during force evaluation; moving a
//! wall between timesteps is the owner's business.
//!
//! - [`sphere`] – Spherical cavity or obstacle.
//! - [`wall`] – Infinite plane.
//! - [`constraint`] – Applies a shape's boundary force to a particle.

pub mod constraint;
pub mod sphere;
pub mod wall;

use thiserror::Error;

/// The queried position coincides with the shape's reference point, so no
/// boundary direction exists.
///
/// A first-class state rather than a NaN: the constraint evaluator reports
/// it to the warning sink and skips the contribution for this step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("degenerate shape geometry: position coincides with the shape reference point")]
pub struct DegenerateShape;

/// Signed distance from a shape boundary, with its pre-scaled direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Distance {
    /// Signed distance to the boundary; positive in the confining (allowed)
    /// region, negative in the forbidden one.
    pub dist: f64,
    /// Vector from the nearest boundary point to the queried position,
    /// pre-scaled so `|vec| == |dist|`. Consumers compute a boundary force
    /// as `force_factor(dist) * vec` without renormalizing.
    pub vec: [f64; 3],
}

/// An analytic shape usable as a particle constraint.
pub trait Shape: std::fmt::Debug {
    /// Evaluates the signed distance from `ppos` to the shape boundary.
    ///
    /// Pure: mutates neither the shape nor anything else.
    fn distance(&self, ppos: [f64; 3]) -> Result<Distance, DegenerateShape>;
}
