use super::angles::AngleCstId;
use super::bonds::BondId;
use super::matrix::ExtraCellularMatrix;
use super::particles::ParticleId;

/// Per-particle reverse index of bonds and angle constraints.
///
/// Built on demand from the forward tables in `O(N + B + A)` and never
/// stored in the matrix, so it cannot drift out of sync with it. Rebuild
/// after adding bonds, angle constraints or particles. Rows referencing
/// particles beyond the particle table are skipped.
///
/// Storage is compressed: `offsets[p]..offsets[p + 1]` indexes the slice of
/// `ids` belonging to particle `p`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Topology {
    bond_offsets: Vec<usize>,
    bond_ids: Vec<BondId>,
    angle_offsets: Vec<usize>,
    angle_ids: Vec<AngleCstId>,
}

impl Topology {
    pub fn build(ecm: &ExtraCellularMatrix) -> Self {
        let n = ecm.particle_count();
        let bonds = &ecm.bonds().particle_groups()[..ecm.bond_count()];
        let csts = &ecm.angle_csts().particle_groups()[..ecm.angle_cst_count()];
        let (bond_offsets, bond_ids) = invert(n, bonds);
        let (angle_offsets, angle_ids) = invert(n, csts);
        Self {
            bond_offsets,
            bond_ids,
            angle_offsets,
            angle_ids,
        }
    }

    /// Number of particles the index was built for.
    #[inline]
    pub fn particle_count(&self) -> usize {
        self.bond_offsets.len().saturating_sub(1)
    }

    /// Bonds referencing `particle`, ascending. Empty for unknown ids.
    pub fn bonds_of(&self, particle: ParticleId) -> &[BondId] {
        slice_of(&self.bond_offsets, &self.bond_ids, particle)
    }

    /// Angle constraints referencing `particle`, ascending.
    pub fn angle_csts_of(&self, particle: ParticleId) -> &[AngleCstId] {
        slice_of(&self.angle_offsets, &self.angle_ids, particle)
    }

    /// Number of bonds attached to `particle`.
    #[inline]
    pub fn degree(&self, particle: ParticleId) -> usize {
        self.bonds_of(particle).len()
    }
}

fn invert<const K: usize>(n: usize, groups: &[[ParticleId; K]]) -> (Vec<usize>, Vec<usize>) {
    let mut counts = vec![0usize; n + 1];
    for group in groups {
        for_each_distinct(group, n, |p| counts[p + 1] += 1);
    }
    for i in 0..n {
        counts[i + 1] += counts[i];
    }
    let offsets = counts;

    let mut cursor = offsets.clone();
    let mut ids = vec![0usize; offsets[n]];
    for (row, group) in groups.iter().enumerate() {
        for_each_distinct(group, n, |p| {
            ids[cursor[p]] = row;
            cursor[p] += 1;
        });
    }
    (offsets, ids)
}

/// Calls `f` once for every in-range particle of `group`, so a row listing
/// the same particle twice is only indexed once for it.
fn for_each_distinct<const K: usize>(group: &[ParticleId; K], n: usize, mut f: impl FnMut(usize)) {
    for (i, &p) in group.iter().enumerate() {
        if p < n && !group[..i].contains(&p) {
            f(p);
        }
    }
}

fn slice_of<'a>(offsets: &[usize], ids: &'a [usize], particle: ParticleId) -> &'a [usize] {
    if particle >= offsets.len().saturating_sub(1) {
        return &[];
    }
    &ids[offsets[particle]..offsets[particle + 1]]
}
