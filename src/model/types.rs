use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid particle type: '{0}'")]
pub struct ParseParticleTypeError(String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown named bond type: '{0}'")]
pub struct ParseNamedBondTypeError(String);

/// Role of a particle in the matrix.
///
/// The discriminants are the raw type ids shared with the integrator and the
/// CPM coupling code, so they must stay sequential from zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[repr(u8)]
pub enum ParticleType {
    /// Moves under bond and angle forces.
    #[default]
    Free = 0,
    /// Anchors the matrix to the dish walls; never moves.
    Boundary = 1,
    /// Attached to a cell and dragged along with it.
    Adhesion = 2,
    /// Logically removed; the slot and id stay allocated.
    Excluded = 3,
}

impl ParticleType {
    pub const ALL: [ParticleType; 4] = [
        ParticleType::Free,
        ParticleType::Boundary,
        ParticleType::Adhesion,
        ParticleType::Excluded,
    ];

    #[inline]
    pub fn id(&self) -> u8 {
        *self as u8
    }

    pub fn name(&self) -> &'static str {
        match self {
            ParticleType::Free => "free",
            ParticleType::Boundary => "boundary",
            ParticleType::Adhesion => "adhesion",
            ParticleType::Excluded => "excluded",
        }
    }

    /// Whether downstream consumers should treat the particle as existing.
    #[inline]
    pub fn is_live(&self) -> bool {
        !matches!(self, ParticleType::Excluded)
    }
}

impl TryFrom<i64> for ParticleType {
    type Error = ParseParticleTypeError;

    fn try_from(id: i64) -> Result<Self, Self::Error> {
        match id {
            0 => Ok(ParticleType::Free),
            1 => Ok(ParticleType::Boundary),
            2 => Ok(ParticleType::Adhesion),
            3 => Ok(ParticleType::Excluded),
            _ => Err(ParseParticleTypeError(id.to_string())),
        }
    }
}

impl fmt::Display for ParticleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ParticleType {
    type Err = ParseParticleTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "free" => Ok(ParticleType::Free),
            "boundary" => Ok(ParticleType::Boundary),
            "adhesion" => Ok(ParticleType::Adhesion),
            "excluded" => Ok(ParticleType::Excluded),
            _ => Err(ParseParticleTypeError(s.to_string())),
        }
    }
}

/// Bond types that collaborators recognise by name.
///
/// The value is the bond type id, i.e. the row in
/// [`BondTypes`](super::bonds::BondTypes) holding its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum NamedBondType {
    Fiber = 0,
}

impl NamedBondType {
    #[inline]
    pub fn type_id(&self) -> usize {
        *self as usize
    }

    pub fn from_type_id(id: usize) -> Option<Self> {
        match id {
            0 => Some(NamedBondType::Fiber),
            _ => None,
        }
    }
}

impl fmt::Display for NamedBondType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NamedBondType::Fiber => f.write_str("fiber"),
        }
    }
}

impl FromStr for NamedBondType {
    type Err = ParseNamedBondTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fiber" => Ok(NamedBondType::Fiber),
            _ => Err(ParseNamedBondTypeError(s.to_string())),
        }
    }
}
