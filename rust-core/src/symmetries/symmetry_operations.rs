use anyhow::{Error, Result};
use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

use crate::interfaces::{MillerIndex, RotationMatrix, TranslationVector};
use crate::miller::index::{ht_mod_1, rotate_index};

/// A single symmetry operation: rotation (integer matrix) + translation.
///
/// The translation is stored as integer numerators over the translation base factor
/// of the owning space group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SymmetryOperation {
    /// Rotation matrix with determinant ±1, rows act on (x, y, z)
    pub rotation: RotationMatrix,
    /// Fractional translation shift times TBF
    pub translation: TranslationVector,
}

impl SymmetryOperation {
    /// Create a new symmetry operation
    pub fn new(rotation: RotationMatrix, translation: TranslationVector) -> Self {
        Self {
            rotation,
            translation,
        }
    }

    /// Create identity operation
    pub fn identity() -> Self {
        Self {
            rotation: Matrix3::identity(),
            translation: Vector3::zeros(),
        }
    }

    /// Pure lattice translation (identity rotation)
    pub fn lattice_translation(translation: TranslationVector) -> Self {
        Self::new(Matrix3::identity(), translation)
    }

    /// Check if this is the identity operation
    pub fn is_identity(&self) -> bool {
        self.is_lattice_translation() && self.translation == Vector3::zeros()
    }

    /// Check if the rotation part is the identity
    pub fn is_lattice_translation(&self) -> bool {
        self.rotation == Matrix3::identity()
    }

    /// Integer determinant of the rotation part.
    ///
    /// Evaluated in `i128`, which holds the determinant of any `i32` matrix.
    pub fn determinant(&self) -> i128 {
        let r = self.rotation.map(i128::from);
        r[(0, 0)] * (r[(1, 1)] * r[(2, 2)] - r[(1, 2)] * r[(2, 1)])
            - r[(0, 1)] * (r[(1, 0)] * r[(2, 2)] - r[(1, 2)] * r[(2, 0)])
            + r[(0, 2)] * (r[(1, 0)] * r[(2, 1)] - r[(1, 1)] * r[(2, 0)])
    }

    /// Order of the rotation part: smallest n with R^n = I.
    ///
    /// Returns `None` if no power up to 6 is the identity, which means the matrix is not
    /// a crystallographic rotation.
    pub fn order(&self) -> Option<usize> {
        let identity = Matrix3::identity();
        let mut power = self.rotation;
        for n in 1..=6 {
            if power == identity {
                return Some(n);
            }
            power = power * self.rotation;
        }
        None
    }

    /// Translation numerators reduced to [0, tbf)
    pub fn normalized(&self, tbf: i32) -> Self {
        Self::new(self.rotation, self.translation.map(|t| t.rem_euclid(tbf)))
    }

    /// self ∘ other: apply `other` first, then `self`
    pub fn compose(&self, other: &Self, tbf: i32) -> Self {
        Self::new(
            self.rotation * other.rotation,
            self.rotation * other.translation + self.translation,
        )
        .normalized(tbf)
    }

    /// H·R
    pub fn apply_to_index(&self, h: &MillerIndex) -> MillerIndex {
        rotate_index(h, &self.rotation)
    }

    /// (H·T) mod TBF
    pub fn ht_mod_1(&self, h: &MillerIndex, tbf: i32) -> i32 {
        ht_mod_1(h, &self.translation, tbf)
    }

    /// Parse an operation in xyz notation, e.g. `-x,y+1/2,-z` or `x-y,x,z+1/6`.
    ///
    /// Constant terms must be representable as integer numerators over `tbf`.
    pub fn from_xyz(symbol: &str, tbf: i32) -> Result<Self> {
        if tbf <= 0 {
            return Err(Error::msg(format!(
                "Translation base factor must be positive, got {tbf}."
            )));
        }
        let components: Vec<&str> = symbol.split(',').map(str::trim).collect();
        if components.len() != 3 {
            return Err(Error::msg(format!(
                "Expected three comma separated components in '{symbol}'."
            )));
        }

        let mut rotation = Matrix3::zeros();
        let mut translation = Vector3::zeros();
        for (row, component) in components.iter().enumerate() {
            let (coefficients, numerator) = parse_component(component, tbf)
                .map_err(|e| e.context(format!("Invalid operation '{symbol}'")))?;
            for (col, c) in coefficients.iter().enumerate() {
                rotation[(row, col)] = *c;
            }
            translation[row] = numerator;
        }

        let op = Self::new(rotation, translation).normalized(tbf);
        let det = op.determinant();
        if det.abs() != 1 {
            return Err(Error::msg(format!(
                "Rotation part of '{symbol}' has determinant {det}, expected ±1."
            )));
        }
        Ok(op)
    }
}

/// Parse one xyz component into rotation row coefficients and a translation numerator.
fn parse_component(component: &str, tbf: i32) -> Result<([i32; 3], i32)> {
    let text: String = component
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase();
    if text.is_empty() {
        return Err(Error::msg("Empty component."));
    }

    // Split into signed terms
    let mut terms = Vec::new();
    let mut start = 0;
    for (i, c) in text.char_indices() {
        if (c == '+' || c == '-') && i > 0 {
            terms.push(&text[start..i]);
            start = i;
        }
    }
    terms.push(&text[start..]);

    let mut coefficients: [i32; 3] = [0; 3];
    let mut numerator: i32 = 0;
    for term in terms {
        let (sign, body) = match term.as_bytes().first().copied() {
            Some(b'-') => (-1, &term[1..]),
            Some(b'+') => (1, &term[1..]),
            _ => (1, term),
        };
        if body.is_empty() {
            return Err(Error::msg(format!("Dangling sign in '{component}'.")));
        }

        if let Some(axis) = body.chars().last().and_then(|c| "xyz".find(c)) {
            let factor = body[..body.len() - 1].trim_end_matches('*');
            let factor: i32 = if factor.is_empty() {
                1
            } else {
                factor
                    .parse()
                    .map_err(|_| Error::msg(format!("Bad coefficient '{factor}' in '{component}'.")))?
            };
            coefficients[axis] = factor
                .checked_mul(sign)
                .and_then(|f| coefficients[axis].checked_add(f))
                .ok_or_else(|| Error::msg(format!("Coefficient overflow in '{component}'.")))?;
        } else {
            numerator = parse_fraction(body, tbf)?
                .checked_mul(sign)
                .and_then(|t| numerator.checked_add(t))
                .ok_or_else(|| Error::msg(format!("Translation overflow in '{component}'.")))?;
        }
    }

    // Rotation rows of a crystallographic operation only mix axes with unit weights
    if let Some(c) = coefficients.iter().find(|c| c.abs() > 1) {
        return Err(Error::msg(format!(
            "Coefficient {c} in '{component}' is outside -1..=1."
        )));
    }
    Ok((coefficients, numerator))
}

/// Parse `n/d` or `n` into a numerator over `tbf`.
fn parse_fraction(text: &str, tbf: i32) -> Result<i32> {
    let (num, den) = match text.split_once('/') {
        Some((n, d)) => (n, d),
        None => (text, "1"),
    };
    let num: i32 = num
        .parse()
        .map_err(|_| Error::msg(format!("Bad translation '{text}'.")))?;
    let den: i32 = den
        .parse()
        .map_err(|_| Error::msg(format!("Bad translation '{text}'.")))?;
    let scaled = num
        .checked_mul(tbf)
        .ok_or_else(|| Error::msg(format!("Translation '{text}' overflows over 1/{tbf}.")))?;
    if den <= 0 || scaled % den != 0 {
        return Err(Error::msg(format!(
            "Translation '{text}' is not a multiple of 1/{tbf}."
        )));
    }
    Ok(scaled / den)
}
