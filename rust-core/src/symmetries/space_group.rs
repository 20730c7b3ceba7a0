use std::collections::HashSet;

use anyhow::{Error, Result};
use log::{debug, trace};
use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

use crate::config::MAX_GROUP_ORDER;
use crate::interfaces::{MillerIndex, TranslationVector};
use crate::miller::phase_restriction::PhaseRestriction;
use crate::miller::sym_equiv_index::SymEquivIndex;
use crate::miller::sym_equiv_indices::{SymEquivMillerIndices, SymEquivMillerIndicesBuilder};
use crate::miller::sys_absent_test::SysAbsentTest;
use crate::symmetries::symmetry_operations::SymmetryOperation;

/// Lattice centering types of conventional cells.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Centering {
    Primitive,
    ACentered,
    BCentered,
    CCentered,
    BodyCentered,
    Rhombohedral, // obverse setting on hexagonal axes
    FaceCentered,
}

impl Centering {
    /// Non-zero lattice translations as numerators over `tbf`.
    pub fn lattice_translations(&self, tbf: i32) -> Result<Vec<TranslationVector>> {
        let fractions: &[[(i32, i32); 3]] = match self {
            Centering::Primitive => &[],
            Centering::ACentered => &[[(0, 1), (1, 2), (1, 2)]],
            Centering::BCentered => &[[(1, 2), (0, 1), (1, 2)]],
            Centering::CCentered => &[[(1, 2), (1, 2), (0, 1)]],
            Centering::BodyCentered => &[[(1, 2), (1, 2), (1, 2)]],
            Centering::Rhombohedral => &[[(2, 3), (1, 3), (1, 3)], [(1, 3), (2, 3), (2, 3)]],
            Centering::FaceCentered => &[
                [(0, 1), (1, 2), (1, 2)],
                [(1, 2), (0, 1), (1, 2)],
                [(1, 2), (1, 2), (0, 1)],
            ],
        };

        fractions
            .iter()
            .map(|t| {
                let mut v = Vector3::zeros();
                for (i, &(num, den)) in t.iter().enumerate() {
                    let scaled = num.checked_mul(tbf).ok_or_else(|| {
                        Error::msg(format!("{self:?} centering overflows with base factor {tbf}."))
                    })?;
                    if scaled % den != 0 {
                        return Err(Error::msg(format!(
                            "{self:?} centering needs a translation base factor divisible by {den}, got {tbf}."
                        )));
                    }
                    v[i] = scaled / den;
                }
                Ok(v)
            })
            .collect()
    }
}

/// A space group given by its complete, ordered list of operations.
///
/// All translations share one translation base factor (TBF). The point group order
/// counts distinct rotation parts; every rotation appears once per lattice translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpaceGroup {
    operations: Vec<SymmetryOperation>,
    tbf: i32,
    order_p: usize,
    n_ltr: usize,
}

impl SpaceGroup {
    /// Build from a complete operation list, validating the group structure.
    pub fn new(operations: Vec<SymmetryOperation>, tbf: i32) -> Result<Self> {
        if tbf <= 0 {
            return Err(Error::msg(format!(
                "Translation base factor must be positive, got {tbf}."
            )));
        }
        if operations.len() > MAX_GROUP_ORDER {
            return Err(Error::msg(format!(
                "{} operations exceed the maximum group order {MAX_GROUP_ORDER}.",
                operations.len()
            )));
        }

        let operations: Vec<SymmetryOperation> =
            operations.iter().map(|op| op.normalized(tbf)).collect();
        let lookup: HashSet<SymmetryOperation> = operations.iter().copied().collect();
        if lookup.len() != operations.len() {
            return Err(Error::msg("Operation list contains duplicates."));
        }
        if !lookup.contains(&SymmetryOperation::identity()) {
            return Err(Error::msg("Operation list does not contain the identity."));
        }
        if let Some(op) = operations
            .iter()
            .find(|op| op.rotation.iter().any(|r| r.abs() > 1))
        {
            return Err(Error::msg(format!(
                "Rotation {:?} has entries outside -1..=1.",
                op.rotation
            )));
        }
        if let Some(op) = operations.iter().find(|op| op.determinant().abs() != 1) {
            return Err(Error::msg(format!(
                "Rotation {:?} has determinant {}, expected ±1.",
                op.rotation,
                op.determinant()
            )));
        }

        // Closure under composition
        for a in &operations {
            for b in &operations {
                if !lookup.contains(&a.compose(b, tbf)) {
                    return Err(Error::msg(
                        "Operation list is not closed under composition.",
                    ));
                }
            }
        }

        let n_ltr = operations
            .iter()
            .filter(|op| op.is_lattice_translation())
            .count();
        let order_p = operations
            .iter()
            .map(|op| op.rotation)
            .collect::<HashSet<_>>()
            .len();
        if order_p * n_ltr != operations.len() {
            return Err(Error::msg(format!(
                "{} operations are inconsistent with {order_p} rotations and {n_ltr} lattice translations.",
                operations.len()
            )));
        }

        debug!(
            "Validated space group: {} operations, order_p = {order_p}, n_ltr = {n_ltr}, tbf = {tbf}",
            operations.len()
        );

        Ok(Self {
            operations,
            tbf,
            order_p,
            n_ltr,
        })
    }

    /// Generate the group spanned by `generators` and the lattice translations of `centering`.
    ///
    /// The identity comes first; the remaining operations follow in discovery order.
    pub fn from_generators(
        generators: &[SymmetryOperation],
        centering: Centering,
        tbf: i32,
    ) -> Result<Self> {
        if tbf <= 0 {
            return Err(Error::msg(format!(
                "Translation base factor must be positive, got {tbf}."
            )));
        }

        let mut seeds: Vec<SymmetryOperation> = centering
            .lattice_translations(tbf)?
            .into_iter()
            .map(SymmetryOperation::lattice_translation)
            .collect();
        seeds.extend(generators.iter().map(|g| g.normalized(tbf)));

        let mut operations = vec![SymmetryOperation::identity()];
        let mut seen: HashSet<SymmetryOperation> = operations.iter().copied().collect();
        let mut i = 0;
        while i < operations.len() {
            for seed in &seeds {
                let product = operations[i].compose(seed, tbf);
                if seen.insert(product) {
                    if operations.len() == MAX_GROUP_ORDER {
                        return Err(Error::msg(format!(
                            "Generators span more than {MAX_GROUP_ORDER} operations; check the translations."
                        )));
                    }
                    operations.push(product);
                }
            }
            i += 1;
        }

        debug!(
            "Generated {} operations from {} generators ({centering:?})",
            operations.len(),
            generators.len()
        );
        Self::new(operations, tbf)
    }

    /// [`Self::from_generators`] with generators in xyz notation.
    pub fn from_xyz(generators: &[&str], centering: Centering, tbf: i32) -> Result<Self> {
        let generators = generators
            .iter()
            .map(|g| SymmetryOperation::from_xyz(g, tbf))
            .collect::<Result<Vec<_>>>()?;
        Self::from_generators(&generators, centering, tbf)
    }

    pub fn operations(&self) -> &[SymmetryOperation] {
        &self.operations
    }

    /// Translation base factor.
    pub fn tbf(&self) -> i32 {
        self.tbf
    }

    /// Point group order (number of distinct rotation parts).
    pub fn order_p(&self) -> usize {
        self.order_p
    }

    /// Total number of operations.
    pub fn order_z(&self) -> usize {
        self.operations.len()
    }

    /// Number of lattice translations, including the zero translation.
    pub fn n_ltr(&self) -> usize {
        self.n_ltr
    }

    /// True if the group contains an inversion (rotation part -I).
    pub fn is_centric(&self) -> bool {
        let inversion = -Matrix3::<i32>::identity();
        self.operations.iter().any(|op| op.rotation == inversion)
    }

    /// Symmetrically equivalent indices of `h`.
    pub fn equiv_miller_indices(&self, h: &MillerIndex) -> SymEquivMillerIndices {
        let mut builder = SymEquivMillerIndicesBuilder::new(*h, self.tbf, self.order_p);
        for op in &self.operations {
            let hr = op.apply_to_index(h);
            let ht = op.ht_mod_1(h, self.tbf);
            builder.add(SymEquivIndex::new(hr, ht, self.tbf, false));
        }
        let result = builder.finish();
        trace!(
            "Equivalents of ({}, {}, {}): n = {}, epsilon = {}, centric = {}",
            h[0],
            h[1],
            h[2],
            result.n(),
            result.epsilon(),
            result.is_centric()
        );
        result
    }

    /// Equivalence lists of many indices, built in parallel.
    #[cfg(feature = "parallel")]
    pub fn equiv_miller_indices_many(&self, hs: &[MillerIndex]) -> Vec<SymEquivMillerIndices> {
        use rayon::prelude::*;
        hs.par_iter().map(|h| self.equiv_miller_indices(h)).collect()
    }

    pub fn sys_absent_test(&self, h: &MillerIndex) -> SysAbsentTest {
        SysAbsentTest::new(self, h)
    }

    pub fn is_sys_absent(&self, h: &MillerIndex) -> bool {
        self.sys_absent_test(h).is_sys_absent()
    }

    /// True if some operation maps `h` onto `-h`.
    pub fn is_centric_index(&self, h: &MillerIndex) -> bool {
        self.equiv_miller_indices(h).is_centric()
    }

    /// Phase restriction of `h`, `None` if it is systematically absent.
    pub fn phase_restriction(&self, h: &MillerIndex) -> Option<PhaseRestriction> {
        self.sys_absent_test(h).phase_restriction()
    }

    pub fn epsilon(&self, h: &MillerIndex) -> usize {
        self.equiv_miller_indices(h).epsilon()
    }

    pub fn multiplicity(&self, h: &MillerIndex, friedel_flag: bool) -> usize {
        self.equiv_miller_indices(h).m(friedel_flag)
    }
}
