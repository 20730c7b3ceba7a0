use serde::{Deserialize, Serialize};
use std::ops::Index;

use crate::config::DEFAULT_PHASE_TOLERANCE;
use crate::interfaces::{AngleUnit, MillerIndex};
use crate::miller::index::{hemisphere_order, is_in_canonical_hemisphere};
use crate::miller::phase_restriction::PhaseRestriction;
use crate::miller::sym_equiv_index::SymEquivIndex;

/// Symmetrically equivalent Miller indices of one input index.
///
/// Produced exclusively by [`SpaceGroup::equiv_miller_indices`](crate::SpaceGroup::equiv_miller_indices).
/// Entries are unique up to sign: an image whose H·R is the negation of a stored entry
/// is merged into it. The list is stored in canonical hemisphere order, so the same
/// equivalence class always yields the same list of indices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymEquivMillerIndices {
    tbf: i32,
    order_p: usize,
    ht_restriction: Option<i32>,
    list: Vec<SymEquivIndex>,
}

/// Position of a flattened enumeration index in the (mate, list) double loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct IndexDecomposition {
    i_mate: usize,
    i_list: usize,
}

impl SymEquivMillerIndices {
    /// The phase restriction (if any) for the input Miller index.
    pub fn phase_restriction(&self) -> PhaseRestriction {
        PhaseRestriction::new(self.ht_restriction, self.tbf)
    }

    /// A reflection is centric if some operation maps H onto -H.
    pub fn is_centric(&self) -> bool {
        self.ht_restriction.is_some()
    }

    pub fn ht_restriction(&self) -> Option<i32> {
        self.ht_restriction
    }

    pub fn tbf(&self) -> i32 {
        self.tbf
    }

    pub fn order_p(&self) -> usize {
        self.order_p
    }

    /// Number of stored equivalent indices. Not in general the multiplicity, see [`Self::m`].
    pub fn n(&self) -> usize {
        self.list.len()
    }

    /// Multiplicity of the input index.
    ///
    /// Twice [`Self::n`] for acentric reflections under Friedel symmetry, [`Self::n`] otherwise.
    pub fn m(&self, friedel_flag: bool) -> usize {
        self.n() * self.f_mates(friedel_flag)
    }

    /// Count for a non-redundant P1 listing.
    ///
    /// Entries of a centric list already stand for {H, -H}, so this is [`Self::n`] for
    /// either flag.
    pub fn n_p1_listing(&self, _friedel_flag: bool) -> usize {
        self.n()
    }

    /// Friedel mates per stored entry, `m(friedel_flag) / n()`.
    pub fn f_mates(&self, friedel_flag: bool) -> usize {
        if friedel_flag && !self.is_centric() {
            2
        } else {
            1
        }
    }

    /// Number of operations mapping the input index onto itself (up to sign).
    ///
    /// Used for statistical averaging: epsilon == order_p / n.
    pub fn epsilon(&self) -> usize {
        self.order_p / self.n()
    }

    /// Low-level access to the stored entries.
    pub fn indices(&self) -> &[SymEquivIndex] {
        &self.list
    }

    /// Entry `i_list`, its Friedel mate if `i_mate != 0`.
    ///
    /// Intended for a nested loop over `0..n()` and `0..f_mates(friedel_flag)`.
    ///
    /// # Panics
    /// If `i_list >= n()` or `i_mate > 1`.
    pub fn at(&self, i_mate: usize, i_list: usize) -> SymEquivIndex {
        assert!(i_mate < 2, "mate index {i_mate} out of range");
        self.list[i_list].mate(i_mate != 0)
    }

    /// Flattened access over `0..m(friedel_flag)`.
    ///
    /// The first `n()` positions are the stored entries, the next `n()` their Friedel mates.
    ///
    /// # Panics
    /// If `i_il >= 2 * n()`.
    pub fn flat(&self, i_il: usize) -> SymEquivIndex {
        let d = self.decompose(i_il);
        self.at(d.i_mate, d.i_list)
    }

    /// All equivalent reflections, including Friedel mates for acentric reflections
    /// when `friedel_flag` is set.
    pub fn iter(&self, friedel_flag: bool) -> impl Iterator<Item = SymEquivIndex> + '_ {
        (0..self.m(friedel_flag)).map(move |i_il| self.flat(i_il))
    }

    /// Test if phase `phi` is compatible with the restriction of the input index.
    pub fn is_valid_phase(&self, phi: f64, unit: AngleUnit, tolerance: f64) -> bool {
        self.phase_restriction().is_valid_phase(phi, unit, tolerance)
    }

    /// [`Self::is_valid_phase`] with [`DEFAULT_PHASE_TOLERANCE`].
    pub fn is_valid_phase_default(&self, phi: f64, unit: AngleUnit) -> bool {
        self.is_valid_phase(phi, unit, DEFAULT_PHASE_TOLERANCE)
    }

    fn decompose(&self, i_il: usize) -> IndexDecomposition {
        let n = self.n();
        assert!(i_il < 2 * n, "flattened index {i_il} out of range");
        IndexDecomposition {
            i_mate: i_il / n,
            i_list: i_il % n,
        }
    }
}

impl Index<usize> for SymEquivMillerIndices {
    type Output = SymEquivIndex;

    fn index(&self, i_list: usize) -> &SymEquivIndex {
        &self.list[i_list]
    }
}

/// Accumulates operation images of one input index. Driven only by the space group.
#[derive(Debug)]
pub(crate) struct SymEquivMillerIndicesBuilder {
    h_in: MillerIndex,
    inner: SymEquivMillerIndices,
}

impl SymEquivMillerIndicesBuilder {
    pub(crate) fn new(h_in: MillerIndex, tbf: i32, order_p: usize) -> Self {
        Self {
            h_in,
            inner: SymEquivMillerIndices {
                tbf,
                order_p,
                ht_restriction: None,
                list: Vec::new(),
            },
        }
    }

    /// Merge one operation image into the list.
    ///
    /// Images equal to a stored H·R keep the smaller HT. Images equal to the negation of a
    /// stored H·R are merged with it, keeping whichever lies in the canonical hemisphere. The
    /// first image with H·R = -H_in fixes the centric restriction.
    pub(crate) fn add(&mut self, candidate: SymEquivIndex) {
        let hr = *candidate.hr();
        if self.inner.ht_restriction.is_none() && hr == -self.h_in {
            self.inner.ht_restriction = Some(candidate.ht());
        }

        let minus_hr = -hr;
        for existing in self.inner.list.iter_mut() {
            if *existing.hr() == hr {
                if candidate.ht() < existing.ht() {
                    *existing = candidate;
                }
                return;
            }
            if *existing.hr() == minus_hr {
                if is_in_canonical_hemisphere(&hr) && !is_in_canonical_hemisphere(existing.hr()) {
                    *existing = candidate;
                }
                return;
            }
        }
        self.inner.list.push(candidate);
    }

    fn sort_in_hemispheres(&mut self) {
        self.inner
            .list
            .sort_by(|a, b| hemisphere_order(&a.h(), &b.h()));
    }

    pub(crate) fn finish(mut self) -> SymEquivMillerIndices {
        self.sort_in_hemispheres();
        debug_assert!(
            !self.inner.list.is_empty() && self.inner.order_p % self.inner.list.len() == 0,
            "equivalent index count {} does not divide point group order {}",
            self.inner.list.len(),
            self.inner.order_p
        );
        self.inner
    }
}
