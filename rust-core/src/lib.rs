//! Symmetry-equivalent Miller indices library
//!
//! This library computes, for a Miller index and a space group, the set of symmetry-equivalent
//! indices together with the phase restrictions, epsilon factors and systematic absences
//! implied by the group's operations.

pub mod config;
pub mod interfaces;
pub mod miller;
pub mod symmetries;

pub use interfaces::{AngleUnit, MillerIndex};
pub use miller::{
    PhaseRestriction, Restriction, SymEquivIndex, SymEquivMillerIndices, SysAbsentTest,
};
pub use symmetries::{Centering, SpaceGroup, SymmetryOperation};

/// Common result type used throughout the library
pub type Result<T, E = anyhow::Error> = std::result::Result<T, E>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
