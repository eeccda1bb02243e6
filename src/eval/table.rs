use super::error::Error;
use crate::model::types::BondedKind;
use std::fmt;

/// Parameters of the FENE (finitely extensible nonlinear elastic) bond.
///
/// The squared maximum extension is derived once at construction and cached;
/// it can never drift out of sync with `r` because `r2` is not writable.
#[derive(Debug, Clone, PartialEq)]
pub struct FeneParams {
    /// Stiffness (energy per squared length).
    pub k: f64,
    /// Maximum extension; the force diverges as the bond length approaches it.
    pub r: f64,
    r2: f64,
}

impl FeneParams {
    pub fn new(k: f64, r: f64) -> Result<Self, Error> {
        if !(k > 0.0) {
            return Err(Error::invalid_parameter(
                "FENE bond",
                "k",
                k,
                "stiffness must be positive",
            ));
        }
        if !(r > 0.0) {
            return Err(Error::invalid_parameter(
                "FENE bond",
                "r",
                r,
                "maximum extension must be positive",
            ));
        }
        Ok(Self { k, r, r2: r * r })
    }

    /// Squared maximum extension, always equal to `r * r`.
    #[inline]
    pub fn r2(&self) -> f64 {
        self.r2
    }
}

/// Parameters of the harmonic bond `V = k/2 (|dx| - r0)^2`.
#[derive(Debug, Clone, PartialEq)]
pub struct HarmonicParams {
    pub k: f64,
    pub r0: f64,
}

impl HarmonicParams {
    pub fn new(k: f64, r0: f64) -> Result<Self, Error> {
        if !(k > 0.0) {
            return Err(Error::invalid_parameter(
                "harmonic bond",
                "k",
                k,
                "stiffness must be positive",
            ));
        }
        if !(r0 >= 0.0) {
            return Err(Error::invalid_parameter(
                "harmonic bond",
                "r0",
                r0,
                "rest length must be non-negative",
            ));
        }
        Ok(Self { k, r0 })
    }
}

/// Parameters of one registered bonded interaction, tagged by kind.
///
/// This is a closed sum type: dispatch matches on it exhaustively, so adding
/// a kind is a compile-time-checked change with no silent fallthrough.
#[derive(Debug, Clone, PartialEq)]
pub enum BondedParams {
    Fene(FeneParams),
    Harmonic(HarmonicParams),
}

impl BondedParams {
    pub fn kind(&self) -> BondedKind {
        match self {
            BondedParams::Fene(_) => BondedKind::Fene,
            BondedParams::Harmonic(_) => BondedKind::Harmonic,
        }
    }

    /// Number of partner particles beyond the first (1 for pair bonds).
    pub fn num_partners(&self) -> usize {
        match self {
            BondedParams::Fene(_) | BondedParams::Harmonic(_) => 1,
        }
    }
}

/// Collaborator notified after every successful parameter-table write.
///
/// In a distributed run this propagates the slot to the other ranks; the
/// table itself neither knows nor cares how. Single-process runs simply
/// leave the hook unset.
pub trait ParamBroadcast {
    fn broadcast(&mut self, bond_type: usize, params: &BondedParams);
}

/// Registry of bonded interactions, keyed by dense non-negative bond type.
///
/// Slots are created on first registration and persist for the whole run;
/// re-registering a bond type atomically replaces the slot (kind included).
/// The table is writable only between timesteps. During the force phase it
/// is shared read-only, which is what makes bond evaluation embarrassingly
/// parallel.
#[derive(Default)]
pub struct InteractionTable {
    slots: Vec<Option<BondedParams>>,
    broadcast: Option<Box<dyn ParamBroadcast + Send + Sync>>,
}

impl fmt::Debug for InteractionTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InteractionTable")
            .field("slots", &self.slots)
            .field("broadcast", &self.broadcast.is_some())
            .finish()
    }
}

impl InteractionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table whose writes are propagated through `broadcast`.
    pub fn with_broadcast(broadcast: Box<dyn ParamBroadcast + Send + Sync>) -> Self {
        Self {
            slots: Vec::new(),
            broadcast: Some(broadcast),
        }
    }

    /// Registers (or overwrites) the interaction for `bond_type`.
    ///
    /// The id arrives as a raw integer from the configuration surface;
    /// negative values are rejected as configuration errors. The table grows
    /// as needed, preserving existing slots. On success the broadcast hook
    /// fires exactly once and the dense slot index is returned.
    pub fn set_params(&mut self, bond_type: i32, params: BondedParams) -> Result<usize, Error> {
        if bond_type < 0 {
            return Err(Error::InvalidBondType { bond_type });
        }
        let slot = bond_type as usize;
        if slot >= self.slots.len() {
            self.slots.resize(slot + 1, None);
        }

        log::debug!(
            "registering {} interaction for bond type {slot}",
            params.kind()
        );
        let written = self.slots[slot].insert(params);
        if let Some(broadcast) = self.broadcast.as_mut() {
            broadcast.broadcast(slot, written);
        }
        Ok(slot)
    }

    /// Looks up the interaction registered for `bond_type`, if any.
    #[inline]
    pub fn get(&self, bond_type: usize) -> Option<&BondedParams> {
        self.slots.get(bond_type).and_then(Option::as_ref)
    }

    /// Number of slots (registered or not) the table currently spans.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Drops every slot. Individual slots are never destroyed; the table
    /// resets only as a whole, on simulation reinitialization.
    pub fn reset(&mut self) {
        self.slots.clear();
    }
}
