//! Error types for matrix construction and mutation.
//!
//! Every fallible operation on the matrix reports one of these variants
//! immediately and leaves the structure unchanged. Aggregate-level problems
//! found by the validation sweep are wrapped in
//! [`InvariantViolation`](Error::InvariantViolation).

use crate::model::types::ParticleType;
use crate::validate::ValidationReport;
use std::fmt;
use thiserror::Error;

/// One of the five tables making up the matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Particles,
    BondTypes,
    Bonds,
    AngleCstTypes,
    AngleCsts,
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Table::Particles => "particles",
            Table::BondTypes => "bond types",
            Table::Bonds => "bonds",
            Table::AngleCstTypes => "angle constraint types",
            Table::AngleCsts => "angle constraints",
        };
        f.write_str(name)
    }
}

/// Errors that can occur while building or mutating the matrix.
#[derive(Debug, Error)]
pub enum Error {
    /// An id was used outside its table's current extent.
    #[error("{table} id {id} is out of range (table has {len} rows)")]
    OutOfRange {
        /// Table the id indexes into.
        table: Table,
        /// The offending id.
        id: usize,
        /// Current row count of the table.
        len: usize,
    },

    /// A type was registered with a negative or non-finite parameter.
    #[error("invalid {table} parameter: {detail}")]
    InvalidParameter {
        /// Type table being registered into.
        table: Table,
        /// Description of the problem.
        detail: String,
    },

    /// Both ends of a bond are the same particle.
    #[error("bond connects particle {particle} to itself")]
    DegenerateBond {
        /// The repeated particle id.
        particle: usize,
    },

    /// An arm of an angle constraint is its own vertex.
    #[error("angle constraint has an arm equal to its vertex {vertex}")]
    DegenerateAngle {
        /// The vertex particle id.
        vertex: usize,
    },

    /// A coordinate is NaN or infinite.
    #[error("position of particle {particle} is not finite")]
    NonFinitePosition {
        /// Id the position was destined for.
        particle: usize,
    },

    /// A boundary particle was asked to move or change type, or a particle
    /// was asked to become boundary after creation.
    #[error("particle {particle} of type {particle_type} cannot be modified this way")]
    ImmutableParticle {
        /// The particle the operation targeted.
        particle: usize,
        /// Its type at the time of the call.
        particle_type: ParticleType,
    },

    /// A cell-side write targeted a particle that is not an adhesion.
    #[error("particle {particle} is {particle_type}, not adhesion")]
    NotAdhesion {
        /// The particle the write targeted.
        particle: usize,
        /// Its actual type.
        particle_type: ParticleType,
    },

    /// A table adopted from raw arrays has parallel arrays of different
    /// lengths, so rows cannot be appended to it.
    #[error("{table}: parallel arrays differ in length ({left} vs {right})")]
    LengthMismatch {
        /// The inconsistent table.
        table: Table,
        /// Length of the first array.
        left: usize,
        /// Length of the second array.
        right: usize,
    },

    /// The validation sweep found one or more violations.
    #[error("matrix failed validation: {0}")]
    InvariantViolation(ValidationReport),

    /// Failed to parse type table parameters TOML.
    #[error("failed to parse type table parameters: {0}")]
    ParameterParse(#[from] toml::de::Error),
}

impl Error {
    pub fn out_of_range(table: Table, id: usize, len: usize) -> Self {
        Self::OutOfRange { table, id, len }
    }

    pub fn invalid_parameter(table: Table, detail: impl Into<String>) -> Self {
        Self::InvalidParameter {
            table,
            detail: detail.into(),
        }
    }

    pub fn immutable(particle: usize, particle_type: ParticleType) -> Self {
        Self::ImmutableParticle {
            particle,
            particle_type,
        }
    }
}

/// Returns `Ok(())` if `id` indexes a row of a table with `len` rows.
#[inline]
pub(crate) fn check_index(table: Table, id: usize, len: usize) -> Result<(), Error> {
    if id < len {
        Ok(())
    } else {
        Err(Error::out_of_range(table, id, len))
    }
}

/// Returns `Ok(())` if a table's two parallel arrays are in step.
#[inline]
pub(crate) fn check_paired(table: Table, left: usize, right: usize) -> Result<(), Error> {
    if left == right {
        Ok(())
    } else {
        Err(Error::LengthMismatch { table, left, right })
    }
}
