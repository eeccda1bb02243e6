//! Structured runtime warnings and the sink they are reported into.
//!
//! Kernels return statuses; the dispatcher and the constraint evaluator
//! translate the recoverable ones into [`RuntimeWarning`] values and append
//! them to a [`WarningSink`]. The sink is the simulation-wide warning queue
//! seen from this core: append-only, non-blocking, never inspected here.
//! Each warning carries a stable numeric code and the offending particle
//! ids, so the outermost layer can format, deduplicate, or abort on them as
//! it sees fit.

use std::fmt;

/// A recoverable per-pair or per-particle condition raised during the force
/// phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeWarning {
    /// A bonded pair stretched to or beyond its maximum extension; its
    /// force/energy contribution was skipped for this step.
    BondBroken {
        bond_type: usize,
        p1: usize,
        p2: usize,
    },

    /// A particle sits exactly on a constraint shape's reference point, so
    /// no boundary direction is defined; the constraint contribution was
    /// skipped for this step.
    DegenerateGeometry { particle: usize },
}

impl RuntimeWarning {
    /// Stable numeric code identifying the warning class.
    pub fn code(&self) -> u16 {
        match self {
            RuntimeWarning::BondBroken { .. } => 77,
            RuntimeWarning::DegenerateGeometry { .. } => 78,
        }
    }
}

impl fmt::Display for RuntimeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuntimeWarning::BondBroken { bond_type, p1, p2 } => write!(
                f,
                "{{{:03} bond broken between particles {p1} and {p2} (bond type {bond_type})}}",
                self.code()
            ),
            RuntimeWarning::DegenerateGeometry { particle } => write!(
                f,
                "{{{:03} degenerate constraint geometry for particle {particle}}}",
                self.code()
            ),
        }
    }
}

/// Append-only consumer of runtime warnings.
///
/// Implementations must not block: `report` is called from inside the force
/// phase.
pub trait WarningSink {
    fn report(&mut self, warning: RuntimeWarning);
}

/// A sink that keeps every warning in memory, in arrival order.
#[derive(Debug, Clone, Default)]
pub struct CollectedWarnings {
    warnings: Vec<RuntimeWarning>,
}

impl CollectedWarnings {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn warnings(&self) -> &[RuntimeWarning] {
        &self.warnings
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.warnings.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    pub fn clear(&mut self) {
        self.warnings.clear();
    }
}

impl WarningSink for CollectedWarnings {
    fn report(&mut self, warning: RuntimeWarning) {
        self.warnings.push(warning);
    }
}

/// A sink that discards everything, for callers that track stability by
/// other means.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl WarningSink for NullSink {
    fn report(&mut self, _warning: RuntimeWarning) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warning_codes_are_stable() {
        let broken = RuntimeWarning::BondBroken {
            bond_type: 0,
            p1: 4,
            p2: 7,
        };
        let degenerate = RuntimeWarning::DegenerateGeometry { particle: 2 };
        assert_eq!(broken.code(), 77);
        assert_eq!(degenerate.code(), 78);
    }

    #[test]
    fn messages_name_code_and_participants() {
        let broken = RuntimeWarning::BondBroken {
            bond_type: 3,
            p1: 4,
            p2: 7,
        };
        assert_eq!(
            broken.to_string(),
            "{077 bond broken between particles 4 and 7 (bond type 3)}"
        );

        let degenerate = RuntimeWarning::DegenerateGeometry { particle: 2 };
        assert_eq!(
            degenerate.to_string(),
            "{078 degenerate constraint geometry for particle 2}"
        );
    }

    #[test]
    fn collected_warnings_preserve_arrival_order() {
        let mut sink = CollectedWarnings::new();
        sink.report(RuntimeWarning::DegenerateGeometry { particle: 0 });
        sink.report(RuntimeWarning::BondBroken {
            bond_type: 1,
            p1: 0,
            p2: 1,
        });

        assert_eq!(sink.len(), 2);
        assert_eq!(
            sink.warnings()[0],
            RuntimeWarning::DegenerateGeometry { particle: 0 }
        );
        sink.clear();
        assert!(sink.is_empty());
    }
}
