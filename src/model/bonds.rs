use super::particles::ParticleId;
use super::types::NamedBondType;
use crate::error::{Error, Table, check_index, check_paired};

pub type BondTypeId = usize;
pub type BondId = usize;

/// Linear spring parameters, one row per bond type.
///
/// Append-only: rows are registered during setup and never modified.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BondTypes {
    r0: Vec<f64>,
    k: Vec<f64>,
}

impl BondTypes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopts parameter arrays without checking them.
    pub fn from_raw(r0: Vec<f64>, k: Vec<f64>) -> Self {
        Self { r0, k }
    }

    /// Number of usable types: rows present in both arrays.
    #[inline]
    pub fn len(&self) -> usize {
        self.r0.len().min(self.k.len())
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Rest lengths.
    #[inline]
    pub fn r0(&self) -> &[f64] {
        &self.r0
    }

    /// Spring constants.
    #[inline]
    pub fn k(&self) -> &[f64] {
        &self.k
    }

    /// Registers a bond type with rest length `r0` and stiffness `k`.
    pub fn register(&mut self, r0: f64, k: f64) -> Result<BondTypeId, Error> {
        check_bond_params(r0, k).map_err(|detail| Error::invalid_parameter(Table::BondTypes, detail))?;
        check_paired(Table::BondTypes, self.r0.len(), self.k.len())?;
        self.r0.push(r0);
        self.k.push(k);
        Ok(self.r0.len() - 1)
    }

    /// Returns `(r0, k)` for a bond type.
    pub fn get(&self, id: BondTypeId) -> Result<(f64, f64), Error> {
        check_index(Table::BondTypes, id, self.len())?;
        Ok((self.r0[id], self.k[id]))
    }
}

pub(crate) fn check_bond_params(r0: f64, k: f64) -> Result<(), String> {
    if !r0.is_finite() || r0 < 0.0 {
        return Err(format!("rest length must be finite and >= 0 (got {r0})"));
    }
    if !k.is_finite() || k < 0.0 {
        return Err(format!("stiffness must be finite and >= 0 (got {k})"));
    }
    Ok(())
}

/// Bonds between particle pairs, one row per bond.
///
/// A row's particles and type are fixed once created.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bonds {
    particle_groups: Vec<[ParticleId; 2]>,
    typ: Vec<BondTypeId>,
}

impl Bonds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopts bond arrays without checking them.
    pub fn from_raw(particle_groups: Vec<[ParticleId; 2]>, typ: Vec<BondTypeId>) -> Self {
        Self {
            particle_groups,
            typ,
        }
    }

    /// Number of usable rows: those present in both arrays.
    #[inline]
    pub fn len(&self) -> usize {
        self.particle_groups.len().min(self.typ.len())
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn particle_groups(&self) -> &[[ParticleId; 2]] {
        &self.particle_groups
    }

    #[inline]
    pub fn typ(&self) -> &[BondTypeId] {
        &self.typ
    }

    /// Creates a bond, checking it against the current table extents.
    pub(crate) fn create(
        &mut self,
        pair: [ParticleId; 2],
        typ: BondTypeId,
        n_particles: usize,
        n_types: usize,
    ) -> Result<BondId, Error> {
        for &p in &pair {
            check_index(Table::Particles, p, n_particles)?;
        }
        check_index(Table::BondTypes, typ, n_types)?;
        if pair[0] == pair[1] {
            return Err(Error::DegenerateBond { particle: pair[0] });
        }
        check_paired(Table::Bonds, self.particle_groups.len(), self.typ.len())?;
        self.particle_groups.push(pair);
        self.typ.push(typ);
        Ok(self.particle_groups.len() - 1)
    }

    /// Returns the particle pair and type of a bond.
    pub fn get(&self, id: BondId) -> Result<([ParticleId; 2], BondTypeId), Error> {
        check_index(Table::Bonds, id, self.len())?;
        Ok((self.particle_groups[id], self.typ[id]))
    }

    pub fn iter(&self) -> impl Iterator<Item = (BondId, [ParticleId; 2], BondTypeId)> + '_ {
        self.particle_groups
            .iter()
            .zip(self.typ.iter())
            .enumerate()
            .map(|(id, (pair, typ))| (id, *pair, *typ))
    }

    /// Ids of all bonds with `particle` at either end.
    pub fn referencing(&self, particle: ParticleId) -> impl Iterator<Item = BondId> + '_ {
        self.particle_groups[..self.len()]
            .iter()
            .enumerate()
            .filter(move |(_, pair)| pair.contains(&particle))
            .map(|(id, _)| id)
    }

    /// Ids of all bonds of a named type, e.g. the fiber backbone.
    pub fn of_named_type(&self, named: NamedBondType) -> impl Iterator<Item = BondId> + '_ {
        let wanted = named.type_id();
        self.typ[..self.len()]
            .iter()
            .enumerate()
            .filter(move |(_, t)| **t == wanted)
            .map(|(id, _)| id)
    }
}
