use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_PHASE_TOLERANCE;
use crate::interfaces::AngleUnit;

/// Classification of a reflection by the constraints its space group imposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Restriction {
    /// Acentric, the phase can take any value.
    Unrestricted,
    /// Centric, the phase is fixed modulo π by the given numerator over TBF.
    Centric(i32),
    /// Forced to zero amplitude by symmetry.
    SystematicallyAbsent,
}

impl Restriction {
    /// Numeric code: -1 unrestricted, -2 absent, the numerator otherwise.
    pub fn code(&self) -> i32 {
        match self {
            Restriction::Unrestricted => -1,
            Restriction::SystematicallyAbsent => -2,
            Restriction::Centric(ht) => *ht,
        }
    }
}

/// Phase restriction of a reflection.
///
/// A reflection with Miller index H is centric if there is a symmetry operation with
/// rotation part R such that H·R = -H. Its phase is then restricted to two values
/// modulo 2π, `ht_angle` and `ht_angle + π`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PhaseRestriction {
    ht: Option<i32>,
    tbf: i32,
}

impl PhaseRestriction {
    pub fn new(ht: Option<i32>, tbf: i32) -> Self {
        Self { ht, tbf }
    }

    /// Restriction for an acentric reflection.
    pub fn unrestricted(tbf: i32) -> Self {
        Self { ht: None, tbf }
    }

    pub fn is_centric(&self) -> bool {
        self.ht.is_some()
    }

    /// Phase shift H·T (mod 1) of the operation with H·R = -H, in units of 1/tbf.
    pub fn ht(&self) -> Option<i32> {
        self.ht
    }

    pub fn tbf(&self) -> i32 {
        self.tbf
    }

    /// Restriction angle in [0, π) or [0, 180), `None` for acentric reflections.
    pub fn ht_angle(&self, unit: AngleUnit) -> Option<f64> {
        self.ht
            .map(|ht| unit.half_period() * f64::from(ht) / f64::from(self.tbf))
    }

    /// Test if `phi` is compatible with the restriction.
    ///
    /// Every phase is valid for acentric reflections. The tolerance only compensates
    /// for rounding errors.
    pub fn is_valid_phase(&self, phi: f64, unit: AngleUnit, tolerance: f64) -> bool {
        let Some(angle) = self.ht_angle(unit) else {
            return true;
        };
        let half = unit.half_period();
        let delta = (phi - angle).rem_euclid(half);
        delta <= tolerance || half - delta <= tolerance
    }

    /// [`Self::is_valid_phase`] with [`DEFAULT_PHASE_TOLERANCE`].
    pub fn is_valid_phase_default(&self, phi: f64, unit: AngleUnit) -> bool {
        self.is_valid_phase(phi, unit, DEFAULT_PHASE_TOLERANCE)
    }
}
