use super::particles::ParticleId;
use crate::error::{Error, Table, check_index, check_paired};

pub type AngleCstTypeId = usize;
pub type AngleCstId = usize;

/// Torsion spring parameters, one row per angle constraint type.
///
/// The torsion axis is perpendicular to the simulation plane, so a
/// constraint tries to hold a string of three particles at the rest angle
/// `t0` (radians).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AngleCstTypes {
    t0: Vec<f64>,
    k: Vec<f64>,
}

impl AngleCstTypes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopts parameter arrays without checking them.
    pub fn from_raw(t0: Vec<f64>, k: Vec<f64>) -> Self {
        Self { t0, k }
    }

    /// Number of usable types: rows present in both arrays.
    #[inline]
    pub fn len(&self) -> usize {
        self.t0.len().min(self.k.len())
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Rest angles.
    #[inline]
    pub fn t0(&self) -> &[f64] {
        &self.t0
    }

    /// Spring constants.
    #[inline]
    pub fn k(&self) -> &[f64] {
        &self.k
    }

    pub fn register(&mut self, t0: f64, k: f64) -> Result<AngleCstTypeId, Error> {
        check_angle_params(t0, k)
            .map_err(|detail| Error::invalid_parameter(Table::AngleCstTypes, detail))?;
        check_paired(Table::AngleCstTypes, self.t0.len(), self.k.len())?;
        self.t0.push(t0);
        self.k.push(k);
        Ok(self.t0.len() - 1)
    }

    /// Returns `(t0, k)` for an angle constraint type.
    pub fn get(&self, id: AngleCstTypeId) -> Result<(f64, f64), Error> {
        check_index(Table::AngleCstTypes, id, self.len())?;
        Ok((self.t0[id], self.k[id]))
    }
}

pub(crate) fn check_angle_params(t0: f64, k: f64) -> Result<(), String> {
    if !t0.is_finite() || t0 < 0.0 {
        return Err(format!("rest angle must be finite and >= 0 (got {t0})"));
    }
    if !k.is_finite() || k < 0.0 {
        return Err(format!("stiffness must be finite and >= 0 (got {k})"));
    }
    Ok(())
}

/// Angle constraints over particle triples, one row per constraint.
///
/// The middle particle of each triple is the vertex; the outer two are the
/// arms.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AngleCsts {
    particle_groups: Vec<[ParticleId; 3]>,
    typ: Vec<AngleCstTypeId>,
}

impl AngleCsts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopts constraint arrays without checking them.
    pub fn from_raw(particle_groups: Vec<[ParticleId; 3]>, typ: Vec<AngleCstTypeId>) -> Self {
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
    pub fn particle_groups(&self) -> &[[ParticleId; 3]] {
        &self.particle_groups
    }

    #[inline]
    pub fn typ(&self) -> &[AngleCstTypeId] {
        &self.typ
    }

    pub(crate) fn create(
        &mut self,
        triple: [ParticleId; 3],
        typ: AngleCstTypeId,
        n_particles: usize,
        n_types: usize,
    ) -> Result<AngleCstId, Error> {
        for &p in &triple {
            check_index(Table::Particles, p, n_particles)?;
        }
        check_index(Table::AngleCstTypes, typ, n_types)?;
        let [a, vertex, b] = triple;
        if a == vertex || b == vertex {
            return Err(Error::DegenerateAngle { vertex });
        }
        check_paired(Table::AngleCsts, self.particle_groups.len(), self.typ.len())?;
        self.particle_groups.push(triple);
        self.typ.push(typ);
        Ok(self.particle_groups.len() - 1)
    }

    /// Returns the particle triple and type of a constraint.
    pub fn get(&self, id: AngleCstId) -> Result<([ParticleId; 3], AngleCstTypeId), Error> {
        check_index(Table::AngleCsts, id, self.len())?;
        Ok((self.particle_groups[id], self.typ[id]))
    }

    pub fn iter(&self) -> impl Iterator<Item = (AngleCstId, [ParticleId; 3], AngleCstTypeId)> + '_ {
        self.particle_groups
            .iter()
            .zip(self.typ.iter())
            .enumerate()
            .map(|(id, (triple, typ))| (id, *triple, *typ))
    }

    /// Ids of all constraints that involve `particle` as vertex or arm.
    pub fn referencing(&self, particle: ParticleId) -> impl Iterator<Item = AngleCstId> + '_ {
        self.particle_groups[..self.len()]
            .iter()
            .enumerate()
            .filter(move |(_, triple)| triple.contains(&particle))
            .map(|(id, _)| id)
    }
}
