//! Error types for interaction configuration and dispatch.
//!
//! This module defines the error type used throughout the evaluation core.
//! Errors are categorized by source: parameter registration, configuration
//! parsing, and bond-type lookup during force dispatch.
//!
//! Per-pair runtime conditions (a stretched-past-its-limit bond, a particle
//! sitting exactly on a shape's reference point) are deliberately *not*
//! errors: kernels report them as lightweight statuses
//! ([`BondBroken`](crate::BondBroken), [`DegenerateShape`](crate::DegenerateShape))
//! and the dispatcher downgrades them to warnings on the simulation's
//! warning sink. Only conditions that make a configuration command or a
//! dispatch unable to proceed surface as [`Error`].

use crate::model::types::{ParseBondedKindError, ParseOrientationError};
use thiserror::Error;

/// Errors that can occur while configuring or dispatching interactions.
#[derive(Debug, Error)]
pub enum Error {
    /// A bond type id from the configuration surface was negative.
    ///
    /// Bond types index a dense table of interaction slots and must be
    /// non-negative. The offending configuration command fails; previously
    /// registered slots are untouched.
    #[error("invalid bond type {bond_type}: bond types must be non-negative")]
    InvalidBondType {
        /// The rejected id, as received from the caller.
        bond_type: i32,
    },

    /// A physical parameter was outside its valid domain.
    ///
    /// Occurs at registration time (e.g. a non-positive FENE stiffness or
    /// maximum extension), never during force evaluation.
    #[error("invalid parameter {name} = {value} for {context}: {reason}")]
    InvalidParameter {
        /// What was being configured ("FENE bond", "sphere", ...).
        context: &'static str,
        /// Parameter name as it appears in the configuration surface.
        name: &'static str,
        /// The rejected value.
        value: f64,
        /// Why the value is invalid.
        reason: &'static str,
    },

    /// The dispatcher found no interaction registered for a bond type.
    ///
    /// This indicates a configuration/topology inconsistency: a particle
    /// carries a bond descriptor whose type was never registered. It cannot
    /// be recovered per-pair and is fatal for the evaluation call.
    #[error("no bonded interaction registered for bond type {bond_type}")]
    UndefinedBondType {
        /// The unregistered bond type found in a particle's bond list.
        bond_type: usize,
    },

    /// Failed to parse an interaction configuration document.
    #[error("failed to parse interaction configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// An interaction kind string was not recognized.
    #[error(transparent)]
    UnknownKind(#[from] ParseBondedKindError),

    /// A constraint orientation string was not recognized.
    #[error(transparent)]
    UnknownOrientation(#[from] ParseOrientationError),
}

impl Error {
    /// Creates an [`InvalidParameter`](Error::InvalidParameter) error.
    pub fn invalid_parameter(
        context: &'static str,
        name: &'static str,
        value: f64,
        reason: &'static str,
    ) -> Self {
        Self::InvalidParameter {
            context,
            name,
            value,
            reason,
        }
    }
}
