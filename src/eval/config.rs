//! Declarative TOML configuration for interactions and constraints.
//!
//! The scripting surface that drives a simulation is out of scope here, but
//! its output isn't: a TOML document declaring bonded-interaction slots and
//! constraint shapes can be loaded with [`load_config`] and applied to an
//! [`InteractionTable`]. Every entry flows through the same validated
//! registration path as the programmatic API, so a bad value in a file
//! fails with the same configuration error it would raise in code.
//!
//! ```
//! use mdforce::{load_config, InteractionTable};
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
//! let shapes = config.build_shapes()?;
//! assert_eq!((table.len(), shapes.len()), (1, 1));
//! # Ok::<(), mdforce::Error>(())
//! ```

use super::error::Error;
use super::table::{BondedParams, FeneParams, HarmonicParams, InteractionTable};
use crate::model::types::Orientation;
use crate::shapes::sphere::Sphere;
use crate::shapes::wall::Wall;
use crate::shapes::Shape;
use serde::Deserialize;

/// One bonded-interaction slot declaration, tagged by `kind`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum BondSpec {
    /// `kind = "fene"`: finitely extensible nonlinear elastic bond.
    Fene { bond_type: i32, k: f64, r: f64 },
    /// `kind = "harmonic"`: harmonic spring.
    Harmonic { bond_type: i32, k: f64, r0: f64 },
}

/// One constraint shape declaration, tagged by `shape`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum ConstraintSpec {
    /// `shape = "sphere"`: spherical cavity or obstacle.
    Sphere {
        center: [f64; 3],
        radius: f64,
        /// `"inside"`/`"-1"` confines particles within the sphere,
        /// `"outside"`/`"1"` keeps them out.
        orientation: String,
    },
    /// `shape = "wall"`: infinite plane `normal . x = offset`.
    Wall { normal: [f64; 3], offset: f64 },
}

/// A parsed configuration document: interaction slots plus constraints.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct CoreConfig {
    #[serde(default)]
    pub bonds: Vec<BondSpec>,
    #[serde(default)]
    pub constraints: Vec<ConstraintSpec>,
}

impl CoreConfig {
    /// Registers every declared bond slot in `table`, in document order.
    ///
    /// Later entries may overwrite earlier ones (same semantics as issuing
    /// the registration commands one by one). Stops at the first invalid
    /// entry, leaving the slots registered so far in place.
    pub fn apply(&self, table: &mut InteractionTable) -> Result<(), Error> {
        for bond in &self.bonds {
            match *bond {
                BondSpec::Fene { bond_type, k, r } => {
                    table.set_params(bond_type, BondedParams::Fene(FeneParams::new(k, r)?))?;
                }
                BondSpec::Harmonic { bond_type, k, r0 } => {
                    table.set_params(
                        bond_type,
                        BondedParams::Harmonic(HarmonicParams::new(k, r0)?),
                    )?;
                }
            }
        }
        Ok(())
    }

    /// Builds the declared constraint shapes, validating their geometry.
    pub fn build_shapes(&self) -> Result<Vec<Box<dyn Shape>>, Error> {
        self.constraints
            .iter()
            .map(|spec| match spec {
                ConstraintSpec::Sphere {
                    center,
                    radius,
                    orientation,
                } => {
                    let orientation: Orientation = orientation.parse()?;
                    Ok(Box::new(Sphere::new(*center, *radius, orientation)?) as Box<dyn Shape>)
                }
                ConstraintSpec::Wall { normal, offset } => {
                    Ok(Box::new(Wall::new(*normal, *offset)?) as Box<dyn Shape>)
                }
            })
            .collect()
    }
}

/// Parses a TOML configuration document.
pub fn load_config(document: &str) -> Result<CoreConfig, Error> {
    Ok(toml::from_str(document)?)
}
