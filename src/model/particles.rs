use super::types::ParticleType;
use crate::error::{Error, Table, check_index, check_paired};
use std::ops::Range;

pub type ParticleId = usize;

/// Parallel arrays of particle positions and types.
///
/// The particle id is the row index. Rows are only ever appended, so an id
/// stays valid and keeps referring to the same particle for the life of the
/// table. Removal is expressed by retyping a particle to
/// [`ParticleType::Excluded`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Particles {
    positions: Vec<[f64; 2]>,
    type_ids: Vec<ParticleType>,
}

impl Particles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopts arrays produced elsewhere without checking them.
    ///
    /// Use [`ExtraCellularMatrix::validate`](super::matrix::ExtraCellularMatrix::validate)
    /// before relying on the result.
    pub fn from_raw(positions: Vec<[f64; 2]>, type_ids: Vec<ParticleType>) -> Self {
        Self {
            positions,
            type_ids,
        }
    }

    /// Number of usable rows: those present in both arrays.
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len().min(self.type_ids.len())
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn positions(&self) -> &[[f64; 2]] {
        &self.positions
    }

    #[inline]
    pub fn type_ids(&self) -> &[ParticleType] {
        &self.type_ids
    }

    pub fn push(
        &mut self,
        position: [f64; 2],
        particle_type: ParticleType,
    ) -> Result<ParticleId, Error> {
        self.check_paired()?;
        let id = self.len();
        if !is_finite(position) {
            return Err(Error::NonFinitePosition { particle: id });
        }
        self.positions.push(position);
        self.type_ids.push(particle_type);
        Ok(id)
    }

    /// Appends several particles, returning their contiguous ids.
    ///
    /// Either every particle is appended or none is.
    pub fn extend<I>(&mut self, particles: I) -> Result<Range<ParticleId>, Error>
    where
        I: IntoIterator<Item = ([f64; 2], ParticleType)>,
    {
        self.check_paired()?;
        let start = self.len();
        let staged: Vec<_> = particles.into_iter().collect();
        if let Some(offset) = staged.iter().position(|(p, _)| !is_finite(*p)) {
            return Err(Error::NonFinitePosition {
                particle: start + offset,
            });
        }

        self.positions.reserve(staged.len());
        self.type_ids.reserve(staged.len());
        for (position, particle_type) in staged {
            self.positions.push(position);
            self.type_ids.push(particle_type);
        }
        Ok(start..self.len())
    }

    pub fn position(&self, id: ParticleId) -> Result<[f64; 2], Error> {
        self.check(id)?;
        Ok(self.positions[id])
    }

    pub fn particle_type(&self, id: ParticleId) -> Result<ParticleType, Error> {
        self.check(id)?;
        Ok(self.type_ids[id])
    }

    /// Moves a particle. Boundary particles are fixed and reject the write.
    pub fn set_position(&mut self, id: ParticleId, position: [f64; 2]) -> Result<(), Error> {
        self.check(id)?;
        let particle_type = self.type_ids[id];
        if particle_type == ParticleType::Boundary {
            return Err(Error::immutable(id, particle_type));
        }
        if !is_finite(position) {
            return Err(Error::NonFinitePosition { particle: id });
        }
        self.positions[id] = position;
        Ok(())
    }

    pub(crate) fn set_type_unchecked(&mut self, id: ParticleId, particle_type: ParticleType) {
        self.type_ids[id] = particle_type;
    }

    pub fn ids_of_type(&self, particle_type: ParticleType) -> impl Iterator<Item = ParticleId> + '_ {
        self.positions_of_type(particle_type).map(|(id, _)| id)
    }

    /// Positions of all particles of one type, paired with their ids.
    pub fn positions_of_type(
        &self,
        particle_type: ParticleType,
    ) -> impl Iterator<Item = (ParticleId, [f64; 2])> + '_ {
        self.positions
            .iter()
            .zip(self.type_ids.iter())
            .enumerate()
            .filter(move |(_, (_, t))| **t == particle_type)
            .map(|(id, (p, _))| (id, *p))
    }

    /// Lets `f` update every free particle's position.
    ///
    /// Boundary, adhesion and excluded particles are skipped, so an
    /// integrator cannot accidentally move particles it does not own. The
    /// updates are staged and only committed if every new position is
    /// finite; otherwise no particle moves.
    pub fn for_each_free_position_mut<F>(&mut self, mut f: F) -> Result<(), Error>
    where
        F: FnMut(ParticleId, &mut [f64; 2]),
    {
        let mut staged = Vec::new();
        for (id, (position, t)) in self.positions.iter().zip(self.type_ids.iter()).enumerate() {
            if *t == ParticleType::Free {
                let mut next = *position;
                f(id, &mut next);
                if !is_finite(next) {
                    return Err(Error::NonFinitePosition { particle: id });
                }
                staged.push((id, next));
            }
        }
        for (id, next) in staged {
            self.positions[id] = next;
        }
        Ok(())
    }

    #[inline]
    fn check(&self, id: ParticleId) -> Result<(), Error> {
        check_index(Table::Particles, id, self.len())
    }

    fn check_paired(&self) -> Result<(), Error> {
        check_paired(Table::Particles, self.positions.len(), self.type_ids.len())
    }
}

#[inline]
pub(crate) fn is_finite(p: [f64; 2]) -> bool {
    p[0].is_finite() && p[1].is_finite()
}
