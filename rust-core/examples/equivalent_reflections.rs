/// Example listing symmetry-equivalent reflections
///
/// This example shows how to build space groups from the catalogue or from
/// generators, and how to query equivalence lists, epsilon factors, phase
/// restrictions and systematic absences.
use env_logger::Env;
use miller_equiv::symmetries::{lookup_space_group, Centering, SpaceGroup};
use miller_equiv::AngleUnit;
use nalgebra::Vector3;

fn main() -> miller_equiv::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    println!("=== Symmetry-Equivalent Miller Indices ===\n");

    // Example 1: a centrosymmetric monoclinic group
    println!("1. Space group P 1 21/c 1, index (1, 2, 3):");
    let sg = lookup_space_group("P 1 21/c 1")?;
    let semi = sg.equiv_miller_indices(&Vector3::new(1, 2, 3));
    println!("   Point group order: {}", sg.order_p());
    println!("   Stored equivalents: {}", semi.n());
    println!("   Epsilon: {}", semi.epsilon());
    println!("   Multiplicity (Friedel): {}", semi.m(true));
    if let Some(angle) = semi.phase_restriction().ht_angle(AngleUnit::Degrees) {
        println!("   Centric, phase restricted to {angle:.1} or {:.1} degrees", angle + 180.0);
    }
    for e in semi.iter(true) {
        let h = e.h();
        println!(
            "   ({:3}, {:3}, {:3})  phase shift {}/{}  friedel {}",
            h[0],
            h[1],
            h[2],
            e.ht(),
            e.tbf(),
            e.friedel_flag()
        );
    }
    println!();

    // Example 2: absences from screw axes and glide planes
    println!("2. Systematic absences in P 1 21/c 1:");
    for h in [Vector3::new(0, 1, 0), Vector3::new(0, 2, 0), Vector3::new(1, 0, 1), Vector3::new(1, 0, 2)] {
        let test = sg.sys_absent_test(&h);
        println!(
            "   ({}, {}, {}): {:?}",
            h[0],
            h[1],
            h[2],
            test.restriction()
        );
    }
    println!();

    // Example 3: a group built from generators
    println!("3. I 4/m from generators:");
    let sg = SpaceGroup::from_xyz(&["-y,x,z", "-x,-y,-z"], Centering::BodyCentered, 12)?;
    println!("   Operations: {}", sg.order_z());
    for h in [Vector3::new(1, 1, 0), Vector3::new(0, 0, 2), Vector3::new(1, 2, 3)] {
        let semi = sg.equiv_miller_indices(&h);
        println!(
            "   ({}, {}, {}): n = {}, epsilon = {}, centric = {}, absent = {}",
            h[0],
            h[1],
            h[2],
            semi.n(),
            semi.epsilon(),
            semi.is_centric(),
            sg.is_sys_absent(&h)
        );
    }

    Ok(())
}
