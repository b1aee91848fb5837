//! Struct-of-arrays tables making up the extracellular matrix.
//!
//! - [`types`] – Particle roles and named bond types.
//! - [`particles`] – Particle positions and types.
//! - [`bonds`] – Bond types and bonds between particle pairs.
//! - [`angles`] – Angle constraint types and constraints over particle triples.
//! - [`matrix`] – The aggregate owning all five tables.
//! - [`region`] – Spatial regions for interface-region queries.
//! - [`topology`] – On-demand reverse index from particles to bonds and angles.
//!
//! Every table is a set of parallel arrays indexed by id, and ids are row
//! indices that never change once assigned.

pub mod angles;
pub mod bonds;
pub mod matrix;
pub mod particles;
pub mod region;
pub mod topology;
pub mod types;
