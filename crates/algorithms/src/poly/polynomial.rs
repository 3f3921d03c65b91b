//! polynomial.rs - Polynomials with Eisenstein integer coefficients

use core::fmt;

use crate::eisenstein::EisensteinInteger;
use crate::error::Result;
use zeroize::Zeroize;

/// A polynomial over Z[ω], stored highest-degree coefficient first.
///
/// Construction never trims leading zeros, so two polynomials are equal only
/// when their coefficient lists have the same length. The empty list is the
/// zero polynomial left behind by a reduction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Zeroize)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polynomial {
    /// Coefficients, index 0 is the highest degree
    pub coeffs: Vec<EisensteinInteger>,
}

impl Polynomial {
    /// Creates a polynomial from coefficients, highest degree first
    pub fn new(coeffs: Vec<EisensteinInteger>) -> Self {
        Self { coeffs }
    }

    /// Creates a polynomial from `(x, y)` coefficient pairs
    pub fn from_pairs(pairs: &[(i64, i64)]) -> Self {
        Self::new(pairs.iter().copied().map(EisensteinInteger::from).collect())
    }

    /// The empty zero polynomial
    pub fn zero() -> Self {
        Self::new(Vec::new())
    }

    /// The constant polynomial 1
    pub fn one() -> Self {
        Self::constant(EisensteinInteger::ONE)
    }

    /// A degree-zero polynomial
    pub fn constant(c: EisensteinInteger) -> Self {
        Self::new(vec![c])
    }

    /// The ideal polynomial x^n - 1, of length n + 1
    pub fn ideal(n: usize) -> Self {
        let mut coeffs = vec![EisensteinInteger::ZERO; n + 1];
        coeffs[0] = EisensteinInteger::ONE;
        coeffs[n] = coeffs[n].sub(EisensteinInteger::ONE);
        Self::new(coeffs)
    }

    /// Returns a slice view of the coefficients
    pub fn as_coeffs_slice(&self) -> &[EisensteinInteger] {
        &self.coeffs
    }

    /// Coefficients as `(x, y)` pairs
    pub fn to_pairs(&self) -> Vec<(i64, i64)> {
        self.coeffs.iter().map(|c| (c.x, c.y)).collect()
    }

    /// Number of stored coefficients, leading zeros included
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    /// True when no coefficients are stored
    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// True when every coefficient is zero
    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(EisensteinInteger::is_zero)
    }

    /// Degree of the highest nonzero term, `None` for zero
    pub fn degree(&self) -> Option<usize> {
        let skip = self.leading_zeros();
        (skip < self.len()).then(|| self.len() - skip - 1)
    }

    /// The highest nonzero coefficient
    pub fn leading(&self) -> Option<EisensteinInteger> {
        self.coeffs.iter().copied().find(|c| !c.is_zero())
    }

    fn leading_zeros(&self) -> usize {
        self.coeffs.iter().take_while(|c| c.is_zero()).count()
    }

    /// Copy with leading zeros removed
    pub fn trimmed(&self) -> Self {
        Self::new(self.coeffs[self.leading_zeros()..].to_vec())
    }

    /// Strips leading zeros in place
    pub fn trim(&mut self) {
        let skip = self.leading_zeros();
        self.coeffs.drain(..skip);
    }

    /// Copy left-padded with zeros to at least `len` coefficients
    pub fn left_padded(&self, len: usize) -> Self {
        let pad = len.saturating_sub(self.len());
        let mut coeffs = vec![EisensteinInteger::ZERO; pad];
        coeffs.extend_from_slice(&self.coeffs);
        Self::new(coeffs)
    }

    /// Both operands left-padded to a common length
    fn aligned(&self, other: &Self) -> (Self, Self) {
        let len = self.len().max(other.len());
        (self.left_padded(len), other.left_padded(len))
    }

    /// Polynomial addition, the shorter operand is padded with leading zeros
    pub fn add(&self, other: &Self) -> Self {
        let (a, b) = self.aligned(other);
        Self::new(
            a.coeffs
                .iter()
                .zip(&b.coeffs)
                .map(|(&x, &y)| x.add(y))
                .collect(),
        )
    }

    /// Polynomial subtraction, the shorter operand is padded with leading zeros
    pub fn sub(&self, other: &Self) -> Self {
        let (a, b) = self.aligned(other);
        Self::new(
            a.coeffs
                .iter()
                .zip(&b.coeffs)
                .map(|(&x, &y)| x.sub(y))
                .collect(),
        )
    }

    /// Polynomial negation
    pub fn neg(&self) -> Self {
        Self::new(self.coeffs.iter().map(|c| c.neg()).collect())
    }

    /// Schoolbook multiplication, of length `len(a) + len(b) - 1`
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_empty() || other.is_empty() {
            return Self::zero();
        }

        let mut result = vec![EisensteinInteger::ZERO; self.len() + other.len() - 1];
        for (i, &a) in self.coeffs.iter().enumerate() {
            if a.is_zero() {
                continue;
            }
            for (j, &b) in other.coeffs.iter().enumerate() {
                result[i + j] = result[i + j].add(a.mul(b));
            }
        }
        Self::new(result)
    }

    /// Multiplies every coefficient by `c`
    pub fn scale(&self, c: EisensteinInteger) -> Self {
        Self::new(self.coeffs.iter().map(|&a| a.mul(c)).collect())
    }

    /// Reduces every coefficient modulo `modulus`, preserving the length
    pub fn reduce_coeffs(&self, modulus: EisensteinInteger) -> Result<Self> {
        self.coeffs
            .iter()
            .map(|c| c.rem_euclid(modulus))
            .collect::<Result<Vec<_>>>()
            .map(Self::new)
    }
}

impl From<Vec<EisensteinInteger>> for Polynomial {
    fn from(coeffs: Vec<EisensteinInteger>) -> Self {
        Self::new(coeffs)
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, c) in self.coeffs.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", c)?;
        }
        f.write_str("]")
    }
}

// Implement standard ops traits for ergonomic usage
impl core::ops::Add for &Polynomial {
    type Output = Polynomial;

    fn add(self, other: Self) -> Polynomial {
        Polynomial::add(self, other)
    }
}

impl core::ops::Sub for &Polynomial {
    type Output = Polynomial;

    fn sub(self, other: Self) -> Polynomial {
        Polynomial::sub(self, other)
    }
}

impl core::ops::Mul for &Polynomial {
    type Output = Polynomial;

    fn mul(self, other: Self) -> Polynomial {
        Polynomial::mul(self, other)
    }
}

impl core::ops::Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        Polynomial::neg(self)
    }
}
