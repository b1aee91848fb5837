//! In-memory data model for a coarse-grained extracellular matrix (ECM)
//! coupled to a Cellular Potts Model (CPM).
//!
//! The matrix is stored as five flat tables: particles, bond types, bonds,
//! angle constraint types and angle constraints. The same data serves as a
//! collagen network (strands and crosslinkers), as an MD system (particles
//! and springs) and as the substrate a CPM drags through adhered particles.
//! This crate holds the tables and keeps their cross-references valid. Force
//! computation, time integration and the CPM itself live elsewhere.
//!
//! # Quick Start
//!
//! ```
//! use ecm_model::{BoundingBox, Error, ExtraCellularMatrix, ParticleType};
//!
//! let mut ecm = ExtraCellularMatrix::new();
//!
//! // Three free particles in a row
//! let ids = ecm.add_particles([
//!     ([0.0, 0.0], ParticleType::Free),
//!     ([1.0, 0.0], ParticleType::Free),
//!     ([2.0, 0.0], ParticleType::Free),
//! ])?;
//! assert_eq!(ids, 0..3);
//!
//! // One bond type, two bonds
//! let fiber = ecm.register_bond_type(1.0, 10.0)?;
//! ecm.add_bond(0, 1, fiber)?;
//! ecm.add_bond(1, 2, fiber)?;
//! assert_eq!(ecm.bond_count(), 2);
//! assert!(ecm.validate().is_ok());
//!
//! // Bonds must reference existing particles
//! assert!(matches!(ecm.add_bond(0, 5, fiber), Err(Error::OutOfRange { .. })));
//! assert_eq!(ecm.bond_count(), 2);
//!
//! // A cell adheres to the middle particle
//! ecm.set_particle_type(1, ParticleType::Adhesion)?;
//! let pixel = BoundingBox::new([0.5, -0.5], [1.5, 0.5]);
//! assert_eq!(ecm.adhesions_in(&pixel), vec![1]);
//! # Ok::<(), Error>(())
//! ```
//!
//! # Identity and removal
//!
//! Particle, bond and angle constraint ids are row indices. Rows are only
//! appended, never removed or reordered. A particle is removed by retyping
//! it to [`ParticleType::Excluded`], which consumers treat as nonexistent.
//!
//! # Validation
//!
//! Every mutating method checks the new row against the current tables and
//! either succeeds or leaves the matrix untouched.
//! [`ExtraCellularMatrix::validate`] runs a full sweep over all tables on
//! request, for matrices assembled from raw arrays or before handing the
//! matrix to an integrator.
//!
//! # Logging
//!
//! Diagnostics go through the [`log`] facade. The crate never installs a
//! logger.

mod error;
mod model;
mod params;
mod validate;

pub use error::{Error, Table};

pub use model::angles::{AngleCstId, AngleCstTypeId, AngleCstTypes, AngleCsts};
pub use model::bonds::{BondId, BondTypeId, BondTypes, Bonds};
pub use model::matrix::ExtraCellularMatrix;
pub use model::particles::{ParticleId, Particles};
pub use model::region::{BoundingBox, Disc, Region};
pub use model::topology::Topology;
pub use model::types::{
    NamedBondType, ParseNamedBondTypeError, ParseParticleTypeError, ParticleType,
};

pub use params::{
    AngleCstTypeParams, BondTypeParams, TypeTableParams, default_type_tables, load_type_tables,
};

pub use validate::{ValidationReport, Violation};
