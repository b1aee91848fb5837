//! Referential-integrity sweep over a whole matrix.
//!
//! The per-operation checks on [`ExtraCellularMatrix`] keep a matrix built
//! through its methods consistent, but tables adopted with `from_raw` or
//! [`ExtraCellularMatrix::from_parts`] are taken on trust. The sweep
//! re-derives every invariant from the arrays alone, in one pass per table,
//! and reports every violation it finds rather than stopping at the first.
//! Validity is never cached: mutation may happen between two sweeps.

use crate::error::Table;
use crate::model::matrix::ExtraCellularMatrix;
use crate::model::particles::is_finite;
use std::fmt;
use thiserror::Error;

/// A single broken invariant.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Violation {
    /// The two arrays of a table have different lengths.
    #[error("{table}: parallel arrays differ in length ({left} vs {right})")]
    LengthMismatch {
        table: Table,
        left: usize,
        right: usize,
    },

    #[error("particle {particle} has a non-finite position")]
    NonFinitePosition { particle: usize },

    #[error("{table} row {row}: {detail}")]
    InvalidParameter {
        table: Table,
        row: usize,
        detail: String,
    },

    /// A bond or angle constraint references a particle that does not exist.
    #[error("{table} row {row} references particle {particle} (only {len} particles)")]
    DanglingParticle {
        table: Table,
        row: usize,
        particle: usize,
        len: usize,
    },

    #[error("bond {row} connects particle {particle} to itself")]
    DegenerateBond { row: usize, particle: usize },

    #[error("angle constraint {row} has an arm equal to its vertex {vertex}")]
    DegenerateAngle { row: usize, vertex: usize },

    /// A bond or angle constraint uses a type id beyond its type table.
    #[error("{table} row {row} uses type {typ} (only {len} types)")]
    UnknownType {
        table: Table,
        row: usize,
        typ: usize,
        len: usize,
    },
}

/// Outcome of a validation sweep.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    violations: Vec<Violation>,
}

impl ValidationReport {
    #[inline]
    pub fn is_ok(&self) -> bool {
        self.violations.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    fn push(&mut self, v: Violation) {
        self.violations.push(v);
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.violations.is_empty() {
            return f.write_str("no violations");
        }
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

impl IntoIterator for ValidationReport {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.into_iter()
    }
}

/// Checks every invariant of `ecm` in time linear in the table sizes.
pub(crate) fn sweep(ecm: &ExtraCellularMatrix) -> ValidationReport {
    let mut report = ValidationReport::default();

    let particles = ecm.particles();
    let positions = particles.positions();
    check_lengths(&mut report, Table::Particles, positions.len(), particles.type_ids().len());
    for (id, p) in positions.iter().enumerate() {
        if !is_finite(*p) {
            report.push(Violation::NonFinitePosition { particle: id });
        }
    }
    let n = particles.len();

    let bond_types = ecm.bond_types();
    check_lengths(&mut report, Table::BondTypes, bond_types.r0().len(), bond_types.k().len());
    for (row, (&r0, &k)) in bond_types.r0().iter().zip(bond_types.k()).enumerate() {
        if let Err(detail) = crate::model::bonds::check_bond_params(r0, k) {
            report.push(Violation::InvalidParameter {
                table: Table::BondTypes,
                row,
                detail,
            });
        }
    }
    // A row is only usable if both of its parameters exist.
    let n_bond_types = bond_types.r0().len().min(bond_types.k().len());

    let angle_types = ecm.angle_cst_types();
    check_lengths(&mut report, Table::AngleCstTypes, angle_types.t0().len(), angle_types.k().len());
    for (row, (&t0, &k)) in angle_types.t0().iter().zip(angle_types.k()).enumerate() {
        if let Err(detail) = crate::model::angles::check_angle_params(t0, k) {
            report.push(Violation::InvalidParameter {
                table: Table::AngleCstTypes,
                row,
                detail,
            });
        }
    }
    let n_angle_types = angle_types.t0().len().min(angle_types.k().len());

    let bonds = ecm.bonds();
    check_lengths(&mut report, Table::Bonds, bonds.particle_groups().len(), bonds.typ().len());
    for (row, pair) in bonds.particle_groups().iter().enumerate() {
        check_particles(&mut report, Table::Bonds, row, pair, n);
        if pair[0] == pair[1] {
            report.push(Violation::DegenerateBond {
                row,
                particle: pair[0],
            });
        }
    }
    check_types(&mut report, Table::Bonds, bonds.typ(), n_bond_types);

    let csts = ecm.angle_csts();
    check_lengths(&mut report, Table::AngleCsts, csts.particle_groups().len(), csts.typ().len());
    for (row, triple) in csts.particle_groups().iter().enumerate() {
        check_particles(&mut report, Table::AngleCsts, row, triple, n);
        let [a, vertex, b] = *triple;
        if a == vertex || b == vertex {
            report.push(Violation::DegenerateAngle { row, vertex });
        }
    }
    check_types(&mut report, Table::AngleCsts, csts.typ(), n_angle_types);

    report
}

fn check_lengths(report: &mut ValidationReport, table: Table, left: usize, right: usize) {
    if left != right {
        report.push(Violation::LengthMismatch { table, left, right });
    }
}

fn check_particles(report: &mut ValidationReport, table: Table, row: usize, ids: &[usize], n: usize) {
    for &particle in ids {
        if particle >= n {
            report.push(Violation::DanglingParticle {
                table,
                row,
                particle,
                len: n,
            });
        }
    }
}

fn check_types(report: &mut ValidationReport, table: Table, typ: &[usize], len: usize) {
    for (row, &t) in typ.iter().enumerate() {
        if t >= len {
            report.push(Violation::UnknownType {
                table,
                row,
                typ: t,
                len,
            });
        }
    }
}
