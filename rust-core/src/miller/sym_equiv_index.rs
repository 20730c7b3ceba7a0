use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::interfaces::{AngleUnit, MillerIndex};

/// One symmetry image of an input Miller index.
///
/// `hr` is the product of the input index H and the rotation part of a symmetry
/// operation. `ht` is the product of H and the translation part, multiplied by the
/// translation base factor `tbf` so that it is an integer in [0, tbf).
/// `friedel_flag` records whether Friedel's law was applied to arrive at [`Self::h`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SymEquivIndex {
    hr: MillerIndex,
    ht: i32,
    tbf: i32,
    friedel_flag: bool,
}

impl SymEquivIndex {
    pub fn new(hr: MillerIndex, ht: i32, tbf: i32, friedel_flag: bool) -> Self {
        Self {
            hr,
            ht,
            tbf,
            friedel_flag,
        }
    }

    /// The symmetrically equivalent index: `-hr` if the Friedel flag is set, `hr` otherwise.
    pub fn h(&self) -> MillerIndex {
        if self.friedel_flag {
            -self.hr
        } else {
            self.hr
        }
    }

    /// Product of the input index and the rotation part of the operation.
    pub fn hr(&self) -> &MillerIndex {
        &self.hr
    }

    /// Product of the input index and the translation part, in units of 1/tbf.
    pub fn ht(&self) -> i32 {
        self.ht
    }

    /// Translation base factor.
    pub fn tbf(&self) -> i32 {
        self.tbf
    }

    /// For centric reflections the stored entries never carry the flag.
    pub fn friedel_flag(&self) -> bool {
        self.friedel_flag
    }

    /// Copy with the Friedel flag toggled if `flip` is set.
    pub fn mate(&self, flip: bool) -> Self {
        if flip {
            Self {
                friedel_flag: !self.friedel_flag,
                ..*self
            }
        } else {
            *self
        }
    }

    fn phase_shift(&self, unit: AngleUnit) -> f64 {
        unit.period() * f64::from(self.ht) / f64::from(self.tbf)
    }

    /// Phase of the equivalent index given the phase of the input index.
    ///
    /// phi_eq = phi_in - period * ht / tbf, negated if the Friedel flag is set.
    pub fn phase_eq(&self, phi_in: f64, unit: AngleUnit) -> f64 {
        let phi_eq = phi_in - self.phase_shift(unit);
        if self.friedel_flag {
            -phi_eq
        } else {
            phi_eq
        }
    }

    /// Phase of the input index given the phase of the equivalent index.
    pub fn phase_in(&self, phi_eq: f64, unit: AngleUnit) -> f64 {
        let phi_eq = if self.friedel_flag { -phi_eq } else { phi_eq };
        phi_eq + self.phase_shift(unit)
    }

    /// f_eq = f_in * exp(-2πi ht / tbf), conjugated if the Friedel flag is set.
    pub fn complex_eq(&self, f_in: Complex64) -> Complex64 {
        let theta = -2.0 * PI * f64::from(self.ht) / f64::from(self.tbf);
        let f_eq = f_in * Complex64::from_polar(1.0, theta);
        if self.friedel_flag {
            f_eq.conj()
        } else {
            f_eq
        }
    }

    /// Inverse of [`Self::complex_eq`].
    pub fn complex_in(&self, f_eq: Complex64) -> Complex64 {
        let f_eq = if self.friedel_flag { f_eq.conj() } else { f_eq };
        let theta = 2.0 * PI * f64::from(self.ht) / f64::from(self.tbf);
        f_eq * Complex64::from_polar(1.0, theta)
    }
}
