use crate::interfaces::{MillerIndex, RotationMatrix, TranslationVector};
use std::cmp::Ordering;

/// Product of a Miller index (row vector) and a rotation matrix: H·R.
pub fn rotate_index(h: &MillerIndex, rotation: &RotationMatrix) -> MillerIndex {
    rotation.transpose() * h
}

/// (H·T) mod TBF, always in [0, TBF).
pub fn ht_mod_1(h: &MillerIndex, translation: &TranslationVector, tbf: i32) -> i32 {
    h.dot(translation).rem_euclid(tbf)
}

/// Whether the leading non-zero component of `h` is positive.
///
/// The zero index (0, 0, 0) counts as canonical.
pub fn is_in_canonical_hemisphere(h: &MillerIndex) -> bool {
    h.iter()
        .find(|&&c| c != 0)
        .map_or(true, |&c| c > 0)
}

/// Returns `h` or `-h`, whichever lies in the canonical hemisphere.
pub fn canonical_friedel_representative(h: &MillerIndex) -> MillerIndex {
    if is_in_canonical_hemisphere(h) {
        *h
    } else {
        -h
    }
}

/// Ordering used for stored equivalence lists: canonical hemisphere first,
/// then descending lexicographic (h, k, l).
pub(crate) fn hemisphere_order(a: &MillerIndex, b: &MillerIndex) -> Ordering {
    is_in_canonical_hemisphere(b)
        .cmp(&is_in_canonical_hemisphere(a))
        .then_with(|| (b[0], b[1], b[2]).cmp(&(a[0], a[1], a[2])))
}
