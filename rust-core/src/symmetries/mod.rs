// Symmetries module: Contains symmetry operations and the space group collaborator
// This module provides crystallographic operations, group validation and a small catalogue of groups

// ======================== MODULE DECLARATIONS ========================
pub mod space_group;
pub mod space_group_catalog;
pub mod symmetry_operations;


// ======================== SYMMETRY OPERATIONS ========================
pub use symmetry_operations::SymmetryOperation; // struct - crystallographic symmetry operation (rotation + translation over TBF)
// SymmetryOperation impl methods:
//   new(rotation, translation) -> Self                 - creates operation
//   identity() -> Self                                 - creates identity operation
//   from_xyz(symbol: &str, tbf: i32) -> Result<Self>   - parses xyz notation, e.g. "-x,y+1/2,-z"
//   compose(&self, other: &Self, tbf: i32) -> Self     - self ∘ other with translation mod TBF
//   order(&self) -> Option<usize>                      - order of the rotation part
//   apply_to_index(&self, h) -> MillerIndex            - H·R
//   ht_mod_1(&self, h, tbf) -> i32                     - (H·T) mod TBF

// ======================== SPACE GROUPS ========================
pub use space_group::{
    Centering,  // enum - lattice centering (Primitive, A, B, C, Body, Rhombohedral, Face)
    SpaceGroup, // struct - validated operation list with TBF and point group order
};
// SpaceGroup impl methods:
//   new(operations, tbf) -> Result<Self>                          - validates a complete operation list
//   from_generators(generators, centering, tbf) -> Result<Self>   - closes generators under composition
//   from_xyz(generators: &[&str], centering, tbf) -> Result<Self> - same, generators in xyz notation
//   equiv_miller_indices(&self, h) -> SymEquivMillerIndices       - equivalence class of h
//   sys_absent_test(&self, h) -> SysAbsentTest                    - absent / centric / acentric
//   epsilon(&self, h), multiplicity(&self, h, friedel)            - counting shortcuts

// ======================== CATALOGUE ========================
pub use space_group_catalog::{
    c2, fm_3m, lookup_space_group, p1, p2_1, p2_12_12_1, p2_1_c, p4_1, p6_3, p_1, r3,
};
