// Constants

// Tolerances
pub const DEFAULT_PHASE_TOLERANCE: f64 = 1e-5; // Absorbs rounding in upstream phase angles

// Space group construction
pub const DEFAULT_TBF: i32 = 12; // Translation base factor, covers 1/2, 1/3, 1/4 and 1/6 shifts
pub const MAX_GROUP_ORDER: usize = 192; // Largest conventional space group order (F m -3 m)
