use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid or unsupported bonded interaction kind: '{0}'")]
pub struct ParseBondedKindError(String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid constraint orientation string: '{0}'")]
pub struct ParseOrientationError(String);

/// The kind of a bonded interaction, independent of its parameter values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BondedKind {
    Fene,
    Harmonic,
}

impl fmt::Display for BondedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BondedKind::Fene => write!(f, "FENE"),
            BondedKind::Harmonic => write!(f, "harmonic"),
        }
    }
}

impl FromStr for BondedKind {
    type Err = ParseBondedKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fene" => Ok(BondedKind::Fene),
            "harmonic" => Ok(BondedKind::Harmonic),
            _ => Err(ParseBondedKindError(s.to_string())),
        }
    }
}

/// Which side of a constraint shape is the confining (allowed) region.
///
/// `Inside` means particles live inside the shape and the boundary pushes
/// them back in; `Outside` means the shape is an obstacle and particles
/// are kept out. The numeric forms accepted by [`FromStr`] (`"-1"`/`"1"`)
/// follow the direction convention used by common simulation scripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Inside,
    Outside,
}

impl Orientation {
    /// Sign of the direction convention: `-1.0` for `Inside`, `1.0` for `Outside`.
    pub fn direction(&self) -> f64 {
        match self {
            Orientation::Inside => -1.0,
            Orientation::Outside => 1.0,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Inside => write!(f, "inside"),
            Orientation::Outside => write!(f, "outside"),
        }
    }
}

impl FromStr for Orientation {
    type Err = ParseOrientationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "inside" | "-1" => Ok(Orientation::Inside),
            "outside" | "1" | "+1" => Ok(Orientation::Outside),
            _ => Err(ParseOrientationError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bonded_kind_roundtrips_through_strings() {
        assert_eq!("fene".parse::<BondedKind>().unwrap(), BondedKind::Fene);
        assert_eq!("FENE".parse::<BondedKind>().unwrap(), BondedKind::Fene);
        assert_eq!(
            "Harmonic".parse::<BondedKind>().unwrap(),
            BondedKind::Harmonic
        );
        assert_eq!(BondedKind::Fene.to_string(), "FENE");
    }

    #[test]
    fn unknown_bonded_kind_is_rejected() {
        let err = "angle".parse::<BondedKind>().unwrap_err();
        assert_eq!(err, ParseBondedKindError("angle".to_string()));
    }

    #[test]
    fn orientation_accepts_names_and_directions() {
        assert_eq!("inside".parse::<Orientation>().unwrap(), Orientation::Inside);
        assert_eq!("-1".parse::<Orientation>().unwrap(), Orientation::Inside);
        assert_eq!("OUTSIDE".parse::<Orientation>().unwrap(), Orientation::Outside);
        assert_eq!("1".parse::<Orientation>().unwrap(), Orientation::Outside);
        assert!("sideways".parse::<Orientation>().is_err());
    }

    #[test]
    fn orientation_direction_signs() {
        assert_eq!(Orientation::Inside.direction(), -1.0);
        assert_eq!(Orientation::Outside.direction(), 1.0);
    }
}
