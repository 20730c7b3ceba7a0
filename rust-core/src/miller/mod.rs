// Miller module: Symmetry-equivalent Miller indices and the constraints symmetry imposes on them
// This module provides equivalence lists, phase restrictions of centric reflections and absence tests

// ======================== MODULE DECLARATIONS ========================
pub mod index;
pub mod phase_restriction;
pub mod sym_equiv_index;
pub mod sym_equiv_indices;

mod _tests_sym_equiv_indices;

// ======================== INDEX HELPERS ========================
pub use index::{
    canonical_friedel_representative, // fn(h: &MillerIndex) -> MillerIndex - h or -h, whichever is canonical
    ht_mod_1,                         // fn(h, t, tbf) -> i32 - (H·T) mod TBF in [0, TBF)
    is_in_canonical_hemisphere,       // fn(h: &MillerIndex) -> bool - leading non-zero component positive
    rotate_index,                     // fn(h, r) -> MillerIndex - row vector product H·R
};

// ======================== SINGLE EQUIVALENT INDEX ========================
pub use sym_equiv_index::SymEquivIndex; // struct - one symmetry image (HR, HT, TBF, Friedel flag)
// SymEquivIndex impl methods:
//   new(hr, ht, tbf, friedel_flag) -> Self                - creates image
//   h(&self) -> MillerIndex                               - equivalent index (-HR if Friedel flag set)
//   mate(&self, flip: bool) -> Self                       - copy with toggled Friedel flag
//   phase_eq / phase_in(&self, phi, unit) -> f64          - phase transforms input <-> equivalent
//   complex_eq / complex_in(&self, f: Complex64) -> Complex64 - structure factor transforms

// ======================== PHASE RESTRICTIONS ========================
pub use phase_restriction::{
    PhaseRestriction, // struct - restriction angle of centric reflections
    Restriction,      // enum - Unrestricted, Centric(ht), SystematicallyAbsent
};
// PhaseRestriction impl methods:
//   is_centric(&self) -> bool                             - true if the phase is restricted
//   ht_angle(&self, unit) -> Option<f64>                  - restriction angle in [0, π)
//   is_valid_phase(&self, phi, unit, tolerance) -> bool   - phase compatible with restriction

// ======================== EQUIVALENCE CLASSES ========================
pub use sym_equiv_indices::SymEquivMillerIndices; // struct - deduplicated, canonically ordered equivalents
// SymEquivMillerIndices impl methods:
//   n(), m(friedel), f_mates(friedel), n_p1_listing(friedel), epsilon() - counts
//   indices(), [i_list], at(i_mate, i_list), flat(i_il), iter(friedel) - low/medium/high level access
//   phase_restriction(), is_centric(), is_valid_phase(phi, unit, tolerance) - centric handling

// ======================== SYSTEMATIC ABSENCES ========================
pub use sys_absent_test::SysAbsentTest; // struct - absent / centric / acentric classification of one index
