use super::angles::{AngleCstId, AngleCstTypeId, AngleCstTypes, AngleCsts};
use super::bonds::{BondId, BondTypeId, BondTypes, Bonds};
use super::particles::{ParticleId, Particles};
use super::region::Region;
use super::types::ParticleType;
use crate::error::Error;
use crate::params::TypeTableParams;
use crate::validate::{self, ValidationReport};
use log::{debug, info, warn};
use std::ops::Range;

/// Coarse-grained MD representation of the extracellular matrix.
///
/// Biologically the matrix is collagen strands held together by
/// crosslinkers; physically it is a set of particles connected by linear
/// springs (bonds) and torsion springs (angle constraints). Fibers are not
/// stored explicitly, only implied by bonds of
/// [`NamedBondType::Fiber`](super::types::NamedBondType::Fiber).
///
/// The matrix owns all five tables. Collaborators read the tables through
/// the accessors and mutate them only through methods on this type, which
/// check every new row against the current extents of the tables it
/// references. Ids are row indices and are never renumbered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtraCellularMatrix {
    particles: Particles,
    bond_types: BondTypes,
    bonds: Bonds,
    angle_cst_types: AngleCstTypes,
    angle_csts: AngleCsts,
}

impl ExtraCellularMatrix {
    /// Creates a matrix with every table empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty matrix with its type tables registered from `params`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] naming the first bad row.
    pub fn with_type_tables(params: &TypeTableParams) -> Result<Self, Error> {
        let mut ecm = Self::new();
        for (row, bt) in params.bond_types.iter().enumerate() {
            ecm.register_bond_type(bt.r0, bt.k).map_err(|e| at_row(e, row))?;
        }
        for (row, at) in params.angle_cst_types.iter().enumerate() {
            ecm.register_angle_cst_type(at.t0, at.k)
                .map_err(|e| at_row(e, row))?;
        }
        Ok(ecm)
    }

    /// Assembles a matrix from tables built elsewhere, without checking them.
    ///
    /// Call [`validate`](Self::validate) before handing the result on.
    pub fn from_parts(
        particles: Particles,
        bond_types: BondTypes,
        bonds: Bonds,
        angle_cst_types: AngleCstTypes,
        angle_csts: AngleCsts,
    ) -> Self {
        Self {
            particles,
            bond_types,
            bonds,
            angle_cst_types,
            angle_csts,
        }
    }

    #[inline]
    pub fn particles(&self) -> &Particles {
        &self.particles
    }

    #[inline]
    pub fn bond_types(&self) -> &BondTypes {
        &self.bond_types
    }

    #[inline]
    pub fn bonds(&self) -> &Bonds {
        &self.bonds
    }

    #[inline]
    pub fn angle_cst_types(&self) -> &AngleCstTypes {
        &self.angle_cst_types
    }

    #[inline]
    pub fn angle_csts(&self) -> &AngleCsts {
        &self.angle_csts
    }

    #[inline]
    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn bond_count(&self) -> usize {
        self.bonds.len()
    }

    #[inline]
    pub fn angle_cst_count(&self) -> usize {
        self.angle_csts.len()
    }

    pub fn add_particle(
        &mut self,
        position: [f64; 2],
        particle_type: ParticleType,
    ) -> Result<ParticleId, Error> {
        let id = self.particles.push(position, particle_type)?;
        debug!("added {particle_type} particle {id}");
        Ok(id)
    }

    /// Appends particles and returns their contiguous ids.
    pub fn add_particles<I>(&mut self, particles: I) -> Result<Range<ParticleId>, Error>
    where
        I: IntoIterator<Item = ([f64; 2], ParticleType)>,
    {
        let ids = self.particles.extend(particles)?;
        debug!("added particles {}..{}", ids.start, ids.end);
        Ok(ids)
    }

    pub fn register_bond_type(&mut self, r0: f64, k: f64) -> Result<BondTypeId, Error> {
        let id = self.bond_types.register(r0, k)?;
        debug!("registered bond type {id} (r0 = {r0}, k = {k})");
        Ok(id)
    }

    pub fn register_angle_cst_type(&mut self, t0: f64, k: f64) -> Result<AngleCstTypeId, Error> {
        let id = self.angle_cst_types.register(t0, k)?;
        debug!("registered angle constraint type {id} (t0 = {t0}, k = {k})");
        Ok(id)
    }

    /// Creates a bond between two distinct existing particles.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] for an unknown particle or bond type, and
    /// [`Error::DegenerateBond`] if `i == j`.
    pub fn add_bond(&mut self, i: ParticleId, j: ParticleId, typ: BondTypeId) -> Result<BondId, Error> {
        self.bonds
            .create([i, j], typ, self.particles.len(), self.bond_types.len())
    }

    /// Creates an angle constraint with `vertex` between arms `a` and `b`.
    pub fn add_angle_cst(
        &mut self,
        a: ParticleId,
        vertex: ParticleId,
        b: ParticleId,
        typ: AngleCstTypeId,
    ) -> Result<AngleCstId, Error> {
        self.angle_csts.create(
            [a, vertex, b],
            typ,
            self.particles.len(),
            self.angle_cst_types.len(),
        )
    }

    pub fn position(&self, id: ParticleId) -> Result<[f64; 2], Error> {
        self.particles.position(id)
    }

    pub fn particle_type(&self, id: ParticleId) -> Result<ParticleType, Error> {
        self.particles.particle_type(id)
    }

    /// Moves a non-boundary particle.
    pub fn set_position(&mut self, id: ParticleId, position: [f64; 2]) -> Result<(), Error> {
        self.particles.set_position(id, position)
    }

    /// Drags an adhesion particle along with its cell.
    ///
    /// # Errors
    ///
    /// [`Error::NotAdhesion`] if the particle is of any other type.
    pub fn move_adhesion(&mut self, id: ParticleId, position: [f64; 2]) -> Result<(), Error> {
        let particle_type = self.particles.particle_type(id)?;
        if particle_type != ParticleType::Adhesion {
            return Err(Error::NotAdhesion {
                particle: id,
                particle_type,
            });
        }
        self.particles.set_position(id, position)
    }

    /// Lets an integrator update every free particle in place.
    ///
    /// # Errors
    ///
    /// [`Error::NonFinitePosition`] if the callback produces a NaN or
    /// infinite coordinate, in which case no particle moves.
    pub fn for_each_free_position_mut<F>(&mut self, f: F) -> Result<(), Error>
    where
        F: FnMut(ParticleId, &mut [f64; 2]),
    {
        self.particles.for_each_free_position_mut(f)
    }

    /// Reassigns a particle's type.
    ///
    /// Boundary particles keep their type for good, and no particle can be
    /// turned into a boundary particle after creation.
    pub fn set_particle_type(&mut self, id: ParticleId, particle_type: ParticleType) -> Result<(), Error> {
        let current = self.particles.particle_type(id)?;
        check_transition(id, current, particle_type)?;
        if current != particle_type {
            self.particles.set_type_unchecked(id, particle_type);
            debug!("particle {id}: {current} -> {particle_type}");
        }
        Ok(())
    }

    /// Logically removes a particle. The row stays allocated, so bonds and
    /// angle constraints referencing it remain valid.
    pub fn exclude(&mut self, id: ParticleId) -> Result<(), Error> {
        self.set_particle_type(id, ParticleType::Excluded)
    }

    /// Ids of particles of `particle_type` inside `region`, ascending.
    pub fn particles_in<R>(&self, region: &R, particle_type: ParticleType) -> Vec<ParticleId>
    where
        R: Region + ?Sized,
    {
        self.particles
            .positions_of_type(particle_type)
            .filter(|(_, p)| region.contains(*p))
            .map(|(id, _)| id)
            .collect()
    }

    /// Adhesion particles inside `region`: the interface region of a copy
    /// attempt. Always computed from the current positions.
    pub fn adhesions_in<R>(&self, region: &R) -> Vec<ParticleId>
    where
        R: Region + ?Sized,
    {
        self.particles_in(region, ParticleType::Adhesion)
    }

    /// Converts up to `max_count` particles of type `from` inside `region`
    /// to type `to`, lowest ids first, and returns the converted ids.
    ///
    /// Used to seed adhesions under a cell (`free` to `adhesion`) and to
    /// exclude particles a cell has grown over.
    pub fn change_type_in_area<R>(
        &mut self,
        region: &R,
        from: ParticleType,
        to: ParticleType,
        max_count: usize,
    ) -> Result<Vec<ParticleId>, Error>
    where
        R: Region + ?Sized,
    {
        let mut ids = self.particles_in(region, from);
        ids.truncate(max_count);
        if let Some(&first) = ids.first() {
            check_transition(first, from, to)?;
        }
        if from != to {
            for &id in &ids {
                self.particles.set_type_unchecked(id, to);
            }
        }
        debug!("changed {} particles from {from} to {to}", ids.len());
        Ok(ids)
    }

    /// Ids of all bonds referencing `particle`.
    pub fn bonds_of(&self, particle: ParticleId) -> Result<Vec<BondId>, Error> {
        self.particles.position(particle)?;
        Ok(self.bonds.referencing(particle).collect())
    }

    /// Ids of all angle constraints referencing `particle`.
    pub fn angle_csts_of(&self, particle: ParticleId) -> Result<Vec<AngleCstId>, Error> {
        self.particles.position(particle)?;
        Ok(self.angle_csts.referencing(particle).collect())
    }

    /// Runs the full referential-integrity sweep over all five tables.
    pub fn validate(&self) -> ValidationReport {
        let report = validate::sweep(self);
        if report.is_ok() {
            info!(
                "validated matrix: {} particles, {} bonds, {} angle constraints",
                self.particles.len(),
                self.bonds.len(),
                self.angle_csts.len()
            );
        } else {
            warn!("matrix validation found {} violation(s)", report.len());
        }
        report
    }

    pub fn is_valid(&self) -> bool {
        validate::sweep(self).is_ok()
    }

    /// Like [`validate`](Self::validate), but as a `Result`.
    pub fn ensure_valid(&self) -> Result<(), Error> {
        let report = self.validate();
        if report.is_ok() {
            Ok(())
        } else {
            Err(Error::InvariantViolation(report))
        }
    }
}

fn check_transition(id: ParticleId, from: ParticleType, to: ParticleType) -> Result<(), Error> {
    if from == to {
        return Ok(());
    }
    if from == ParticleType::Boundary || to == ParticleType::Boundary {
        return Err(Error::immutable(id, from));
    }
    Ok(())
}

fn at_row(e: Error, row: usize) -> Error {
    match e {
        Error::InvalidParameter { table, detail } => {
            Error::invalid_parameter(table, format!("row {row}: {detail}"))
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Table;
    use crate::model::region::{BoundingBox, Disc};
    use crate::model::angles::{AngleCstTypes, AngleCsts};
    use crate::model::bonds::{BondTypes, Bonds};
    use crate::params::{AngleCstTypeParams, BondTypeParams};

    fn chain_of_three() -> ExtraCellularMatrix {
        let mut ecm = ExtraCellularMatrix::new();
        ecm.add_particles([
            ([0.0, 0.0], ParticleType::Free),
            ([1.0, 0.0], ParticleType::Free),
            ([2.0, 0.0], ParticleType::Free),
        ])
        .unwrap();
        let fiber = ecm.register_bond_type(1.0, 10.0).unwrap();
        ecm.add_bond(0, 1, fiber).unwrap();
        ecm.add_bond(1, 2, fiber).unwrap();
        ecm
    }

    #[test]
    fn new_matrix_is_empty_and_valid() {
        let ecm = ExtraCellularMatrix::new();
        assert_eq!(ecm.particle_count(), 0);
        assert!(ecm.bond_types().is_empty());
        assert_eq!(ecm.bond_count(), 0);
        assert!(ecm.angle_cst_types().is_empty());
        assert_eq!(ecm.angle_cst_count(), 0);
        assert!(ecm.is_valid());
    }

    #[test]
    fn chain_scenario_builds_and_validates() {
        let ecm = chain_of_three();
        assert_eq!(ecm.particle_count(), 3);
        assert_eq!(ecm.bond_count(), 2);
        for (_, [i, j], typ) in ecm.bonds().iter() {
            assert!(i < 3 && j < 3 && i != j);
            assert_eq!(typ, 0);
        }
        assert!(ecm.validate().is_ok());
        assert!(ecm.ensure_valid().is_ok());
    }

    #[test]
    fn bond_to_missing_particle_fails_and_leaves_bonds_alone() {
        let mut ecm = chain_of_three();
        let result = ecm.add_bond(0, 5, 0);
        assert!(matches!(
            result,
            Err(Error::OutOfRange {
                table: Table::Particles,
                id: 5,
                len: 3
            })
        ));
        assert_eq!(ecm.bond_count(), 2);
    }

    #[test]
    fn self_bond_is_rejected() {
        let mut ecm = chain_of_three();
        assert!(matches!(
            ecm.add_bond(1, 1, 0),
            Err(Error::DegenerateBond { particle: 1 })
        ));
        assert_eq!(ecm.bond_count(), 2);
    }

    #[test]
    fn appends_never_renumber_existing_rows() {
        let mut ecm = chain_of_three();
        let before_bonds: Vec<_> = ecm.bonds().iter().collect();
        let before_positions = ecm.particles().positions().to_vec();

        let new = ecm
            .add_particles([([3.0, 0.0], ParticleType::Free)])
            .unwrap();
        assert_eq!(new, 3..4);
        ecm.add_bond(2, 3, 0).unwrap();
        let bend = ecm.register_angle_cst_type(std::f64::consts::PI, 1.0).unwrap();
        assert_eq!(ecm.add_angle_cst(0, 1, 2, bend).unwrap(), 0);
        assert_eq!(ecm.add_angle_cst(1, 2, 3, bend).unwrap(), 1);

        assert_eq!(&ecm.bonds().iter().collect::<Vec<_>>()[..2], &before_bonds[..]);
        assert_eq!(&ecm.particles().positions()[..3], &before_positions[..]);
        assert!(ecm.is_valid());
    }

    #[test]
    fn excluding_keeps_slot_and_references() {
        let mut ecm = chain_of_three();
        ecm.exclude(1).unwrap();
        assert_eq!(ecm.particle_count(), 3);
        assert_eq!(ecm.particle_type(1).unwrap(), ParticleType::Excluded);
        assert_eq!(ecm.bonds_of(1).unwrap(), vec![0, 1]);
        assert!(ecm.is_valid());

        // idempotent
        ecm.exclude(1).unwrap();
        assert!(ecm.exclude(3).is_err());
    }

    #[test]
    fn boundary_particles_are_frozen() {
        let mut ecm = ExtraCellularMatrix::new();
        let wall = ecm.add_particle([0.0, 0.0], ParticleType::Boundary).unwrap();
        let free = ecm.add_particle([1.0, 0.0], ParticleType::Free).unwrap();

        assert!(ecm.set_position(wall, [0.0, 1.0]).is_err());
        assert!(matches!(
            ecm.set_particle_type(wall, ParticleType::Free),
            Err(Error::ImmutableParticle { particle: 0, .. })
        ));
        assert!(ecm.exclude(wall).is_err());
        assert!(ecm.set_particle_type(free, ParticleType::Boundary).is_err());
        assert_eq!(ecm.particle_type(free).unwrap(), ParticleType::Free);
    }

    #[test]
    fn interface_query_returns_adhesions_in_box() {
        let mut ecm = chain_of_three();
        ecm.set_particle_type(1, ParticleType::Adhesion).unwrap();
        let region = BoundingBox::new([0.5, -0.5], [1.5, 0.5]);
        assert_eq!(ecm.adhesions_in(&region), vec![1]);

        ecm.move_adhesion(1, [5.0, 5.0]).unwrap();
        assert!(ecm.adhesions_in(&region).is_empty());
        assert_eq!(ecm.adhesions_in(&BoundingBox::pixel(5, 5)), vec![1]);
    }

    #[test]
    fn interface_query_ignores_other_types() {
        let ecm = chain_of_three();
        let everything = BoundingBox::new([-10.0, -10.0], [10.0, 10.0]);
        assert!(ecm.adhesions_in(&everything).is_empty());
        assert_eq!(ecm.particles_in(&everything, ParticleType::Free), vec![0, 1, 2]);
    }

    #[test]
    fn move_adhesion_rejects_free_particle() {
        let mut ecm = chain_of_three();
        assert!(matches!(
            ecm.move_adhesion(0, [0.0, 1.0]),
            Err(Error::NotAdhesion {
                particle: 0,
                particle_type: ParticleType::Free
            })
        ));
        assert_eq!(ecm.position(0).unwrap(), [0.0, 0.0]);
    }

    #[test]
    fn change_type_in_area_limits_count() {
        let mut ecm = chain_of_three();
        let zone = Disc::new([1.0, 0.0], 1.0);
        let changed = ecm
            .change_type_in_area(&zone, ParticleType::Free, ParticleType::Adhesion, 2)
            .unwrap();
        assert_eq!(changed, vec![0, 1]);
        assert_eq!(ecm.particle_type(2).unwrap(), ParticleType::Free);
        assert_eq!(ecm.adhesions_in(&zone), vec![0, 1]);
    }

    #[test]
    fn change_type_in_area_refuses_boundary() {
        let mut ecm = ExtraCellularMatrix::new();
        ecm.add_particle([0.0, 0.0], ParticleType::Boundary).unwrap();
        let zone = Disc::new([0.0, 0.0], 1.0);
        let result =
            ecm.change_type_in_area(&zone, ParticleType::Boundary, ParticleType::Excluded, 10);
        assert!(result.is_err());
        assert_eq!(ecm.particle_type(0).unwrap(), ParticleType::Boundary);

        let empty = ecm
            .change_type_in_area(&zone, ParticleType::Free, ParticleType::Adhesion, 10)
            .unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn integrator_pass_moves_only_free_particles() {
        let mut ecm = chain_of_three();
        ecm.set_particle_type(2, ParticleType::Adhesion).unwrap();
        ecm.for_each_free_position_mut(|_, p| p[1] = 1.0).unwrap();
        assert_eq!(ecm.position(0).unwrap(), [0.0, 1.0]);
        assert_eq!(ecm.position(2).unwrap(), [2.0, 0.0]);

        let result = ecm.for_each_free_position_mut(|id, p| {
            p[0] = if id == 1 { f64::INFINITY } else { -1.0 };
        });
        assert!(matches!(result, Err(Error::NonFinitePosition { particle: 1 })));
        assert_eq!(ecm.position(0).unwrap(), [0.0, 1.0]);
        assert!(ecm.is_valid());
    }

    #[test]
    fn raw_tables_with_unpaired_rows_fail_cleanly() {
        let particles = Particles::from_raw(
            vec![[0.0, 0.0], [1.0, 0.0], [2.0, 0.0]],
            vec![ParticleType::Free, ParticleType::Adhesion],
        );
        let mut ecm = ExtraCellularMatrix::from_parts(
            particles,
            BondTypes::from_raw(vec![1.0, 2.0], vec![10.0]),
            Bonds::new(),
            AngleCstTypes::new(),
            AngleCsts::new(),
        );

        assert!(matches!(
            ecm.particle_type(2),
            Err(Error::OutOfRange {
                table: Table::Particles,
                id: 2,
                len: 2
            })
        ));
        assert!(ecm.set_position(2, [0.0, 0.0]).is_err());
        let everything = BoundingBox::new([-10.0, -10.0], [10.0, 10.0]);
        assert_eq!(ecm.adhesions_in(&everything), vec![1]);

        assert!(matches!(
            ecm.add_bond(0, 1, 1),
            Err(Error::OutOfRange {
                table: Table::BondTypes,
                id: 1,
                len: 1
            })
        ));
        assert_eq!(ecm.bond_count(), 0);
        assert!(ecm.bond_types().get(1).is_err());

        ecm.add_bond(0, 1, 0).unwrap();
        assert!(!ecm.validate().violations().iter().any(|v| matches!(
            v,
            crate::validate::Violation::UnknownType { .. }
        )));
    }

    /// Small deterministic generator so the sequence below is reproducible.
    struct Lcg(u64);

    impl Lcg {
        fn next(&mut self) -> u64 {
            self.0 = self
                .0
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            self.0 >> 33
        }

        fn below(&mut self, n: usize) -> usize {
            (self.next() % n as u64) as usize
        }
    }

    #[test]
    fn random_edit_sequences_stay_valid_and_stable() {
        for seed in 0..20u64 {
            let mut rng = Lcg(seed);
            let mut ecm = ExtraCellularMatrix::new();
            let fiber = ecm.register_bond_type(1.0, 10.0).unwrap();
            let bend = ecm.register_angle_cst_type(std::f64::consts::PI, 1.0).unwrap();
            let mut bonds_seen: Vec<[ParticleId; 2]> = Vec::new();
            let mut angles_seen: Vec<[ParticleId; 3]> = Vec::new();

            for step in 0..200 {
                let n = ecm.particle_count();
                match rng.below(6) {
                    0 | 1 => {
                        let t = ParticleType::ALL[rng.below(3)];
                        let x = rng.below(50) as f64 * 0.5;
                        let y = rng.below(50) as f64 * 0.5;
                        assert_eq!(ecm.add_particle([x, y], t).unwrap(), n);
                    }
                    2 if n > 0 => {
                        let (i, j) = (rng.below(n + 2), rng.below(n + 2));
                        match ecm.add_bond(i, j, fiber) {
                            Ok(id) => {
                                assert_eq!(id, bonds_seen.len());
                                bonds_seen.push([i, j]);
                            }
                            Err(_) => assert!(i >= n || j >= n || i == j),
                        }
                    }
                    3 if n > 0 => {
                        let t = [rng.below(n + 1), rng.below(n + 1), rng.below(n + 1)];
                        match ecm.add_angle_cst(t[0], t[1], t[2], bend) {
                            Ok(id) => {
                                assert_eq!(id, angles_seen.len());
                                angles_seen.push(t);
                            }
                            Err(_) => {
                                assert!(t.iter().any(|&p| p >= n) || t[0] == t[1] || t[2] == t[1])
                            }
                        }
                    }
                    4 if n > 0 => {
                        let id = rng.below(n);
                        let was = ecm.particle_type(id).unwrap();
                        let result = ecm.exclude(id);
                        assert_eq!(result.is_err(), was == ParticleType::Boundary);
                    }
                    _ => {
                        assert!(ecm.add_bond(0, 0, fiber).is_err());
                        assert!(ecm.register_bond_type(-1.0, 1.0).is_err());
                    }
                }

                assert!(ecm.is_valid(), "seed {seed} step {step}: {}", ecm.validate());
                assert_eq!(ecm.bonds().particle_groups(), bonds_seen.as_slice());
                assert_eq!(ecm.angle_csts().particle_groups(), angles_seen.as_slice());
                assert_eq!(ecm.bond_types().len(), 1);
            }
        }
    }

    #[test]
    fn angle_cst_reverse_lookup() {
        let mut ecm = chain_of_three();
        let t = ecm.register_angle_cst_type(3.0, 1.0).unwrap();
        ecm.add_angle_cst(0, 1, 2, t).unwrap();
        assert_eq!(ecm.angle_csts_of(0).unwrap(), vec![0]);
        assert!(ecm.angle_csts_of(9).is_err());
        assert!(matches!(
            ecm.add_angle_cst(0, 1, 2, 1),
            Err(Error::OutOfRange {
                table: Table::AngleCstTypes,
                ..
            })
        ));
    }

    #[test]
    fn type_tables_from_params_report_bad_row() {
        let params = TypeTableParams {
            bond_types: vec![
                BondTypeParams { r0: 1.0, k: 1.0 },
                BondTypeParams { r0: 1.0, k: -1.0 },
            ],
            angle_cst_types: vec![AngleCstTypeParams { t0: 1.0, k: 1.0 }],
        };
        let err = ExtraCellularMatrix::with_type_tables(&params).unwrap_err();
        match err {
            Error::InvalidParameter { table, detail } => {
                assert_eq!(table, Table::BondTypes);
                assert!(detail.starts_with("row 1:"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn type_tables_from_params() {
        let params = TypeTableParams {
            bond_types: vec![BondTypeParams { r0: 1.0, k: 5.0 }],
            angle_cst_types: vec![AngleCstTypeParams { t0: 2.0, k: 0.5 }],
        };
        let ecm = ExtraCellularMatrix::with_type_tables(&params).unwrap();
        assert_eq!(ecm.bond_types().get(0).unwrap(), (1.0, 5.0));
        assert_eq!(ecm.angle_cst_types().get(0).unwrap(), (2.0, 0.5));
        assert_eq!(ecm.particle_count(), 0);
    }
}
