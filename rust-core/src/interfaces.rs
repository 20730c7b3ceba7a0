// Definitions that are used throughout all modules

use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Miller index (h, k, l)
pub type MillerIndex = Vector3<i32>;

/// Integer rotation part of a symmetry operation, rows act on (x, y, z)
pub type RotationMatrix = Matrix3<i32>;

/// Translation part of a symmetry operation, stored as numerators over the translation base factor
pub type TranslationVector = Vector3<i32>;

// Enumeration for angle units of phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AngleUnit {
    Radians,
    Degrees,
}

impl AngleUnit {
    /// Full phase period: 2π or 360.
    pub fn period(self) -> f64 {
        match self {
            AngleUnit::Radians => 2.0 * PI,
            AngleUnit::Degrees => 360.0,
        }
    }

    /// Half period: π or 180. Centric phases are fixed modulo this value.
    pub fn half_period(self) -> f64 {
        self.period() / 2.0
    }
}
