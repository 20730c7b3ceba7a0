use anyhow::{Error, Result};

use crate::config::DEFAULT_TBF;
use crate::symmetries::space_group::{Centering, SpaceGroup};

/// Generate space group P 1
pub fn p1() -> Result<SpaceGroup> {
    SpaceGroup::from_xyz(&[], Centering::Primitive, DEFAULT_TBF)
}

/// Generate space group P -1
pub fn p_1() -> Result<SpaceGroup> {
    SpaceGroup::from_xyz(&["-x,-y,-z"], Centering::Primitive, DEFAULT_TBF)
}

/// Generate space group P 1 21 1
pub fn p2_1() -> Result<SpaceGroup> {
    SpaceGroup::from_xyz(&["-x,y+1/2,-z"], Centering::Primitive, DEFAULT_TBF)
}

/// Generate space group P 1 21/c 1
pub fn p2_1_c() -> Result<SpaceGroup> {
    SpaceGroup::from_xyz(
        &["-x,y+1/2,-z+1/2", "-x,-y,-z"],
        Centering::Primitive,
        DEFAULT_TBF,
    )
}

/// Generate space group C 1 2 1
pub fn c2() -> Result<SpaceGroup> {
    SpaceGroup::from_xyz(&["-x,y,-z"], Centering::CCentered, DEFAULT_TBF)
}

/// Generate space group P 21 21 21
pub fn p2_12_12_1() -> Result<SpaceGroup> {
    SpaceGroup::from_xyz(
        &["-x+1/2,-y,z+1/2", "-x,y+1/2,-z+1/2"],
        Centering::Primitive,
        DEFAULT_TBF,
    )
}

/// Generate space group P 41
pub fn p4_1() -> Result<SpaceGroup> {
    SpaceGroup::from_xyz(&["-y,x,z+1/4"], Centering::Primitive, DEFAULT_TBF)
}

/// Generate space group P 63
pub fn p6_3() -> Result<SpaceGroup> {
    SpaceGroup::from_xyz(&["x-y,x,z+1/2"], Centering::Primitive, DEFAULT_TBF)
}

/// Generate space group R 3 (hexagonal axes)
pub fn r3() -> Result<SpaceGroup> {
    SpaceGroup::from_xyz(&["-y,x-y,z"], Centering::Rhombohedral, DEFAULT_TBF)
}

/// Generate space group F m -3 m
pub fn fm_3m() -> Result<SpaceGroup> {
    SpaceGroup::from_xyz(
        &["z,x,y", "-y,x,z", "-x,-y,-z"],
        Centering::FaceCentered,
        DEFAULT_TBF,
    )
}

/// Look up one of the catalogued groups by Hermann-Mauguin symbol.
///
/// Whitespace is ignored, so "P 21 21 21" and "P212121" are the same symbol.
pub fn lookup_space_group(symbol: &str) -> Result<SpaceGroup> {
    let compact: String = symbol.chars().filter(|c| !c.is_whitespace()).collect();
    match compact.as_str() {
        "P1" => p1(),
        "P-1" => p_1(),
        "P21" | "P1211" => p2_1(),
        "P21/c" | "P121/c1" => p2_1_c(),
        "C2" | "C121" => c2(),
        "P212121" => p2_12_12_1(),
        "P41" => p4_1(),
        "P63" => p6_3(),
        "R3" | "R3:H" => r3(),
        "Fm-3m" => fm_3m(),
        _ => Err(Error::msg(format!("Space group '{symbol}' is not in the catalogue."))),
    }
}
