//! integer.rs - Exact arithmetic on Eisenstein integers x + yω
//!
//! ω is a primitive cube root of unity, so ω² = -1 - ω and every element
//! is a pair of rational integers in the basis (1, ω).

use core::fmt;

use crate::error::{validate, Error, Result};
use zeroize::Zeroize;

/// An Eisenstein integer `x + yω`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Zeroize)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EisensteinInteger {
    /// Coefficient of 1
    pub x: i64,
    /// Coefficient of ω
    pub y: i64,
}

impl EisensteinInteger {
    /// The additive identity
    pub const ZERO: Self = Self::new(0, 0);

    /// The multiplicative identity
    pub const ONE: Self = Self::new(1, 0);

    /// The primitive cube root of unity ω
    pub const OMEGA: Self = Self::new(0, 1);

    /// The six units ±1, ±ω, ±(1+ω), the elements of norm 1
    pub const UNITS: [Self; 6] = [
        Self::new(1, 0),
        Self::new(-1, 0),
        Self::new(0, 1),
        Self::new(0, -1),
        Self::new(1, 1),
        Self::new(-1, -1),
    ];

    /// The sampling and encoding digit set, indexed by base-7 digit:
    /// `0, 1, -1, ω, -ω, 1+ω, -1-ω`
    pub const DIGITS: [Self; 7] = [
        Self::new(0, 0),
        Self::new(1, 0),
        Self::new(-1, 0),
        Self::new(0, 1),
        Self::new(0, -1),
        Self::new(1, 1),
        Self::new(-1, -1),
    ];

    /// Creates the element `x + yω`
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Returns true for the zero element
    pub fn is_zero(&self) -> bool {
        self.x == 0 && self.y == 0
    }

    /// Returns true for the six units
    pub fn is_unit(&self) -> bool {
        self.norm() == 1
    }

    /// Ring addition
    pub fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }

    /// Ring subtraction
    pub fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }

    /// Additive inverse
    pub fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }

    /// Ring multiplication: (a + bω)(c + dω) = (ac - bd) + (ad + bc - bd)ω
    ///
    /// Coordinates are plain `i64`. Operands must keep every product below
    /// `2^62` in magnitude, which holds for residues of any modulus with a
    /// norm under `2^30`. Use [`checked_mul`](Self::checked_mul) otherwise.
    pub fn mul(self, other: Self) -> Self {
        let (a, b) = (self.x, self.y);
        let (c, d) = (other.x, other.y);
        Self::new(a * c - b * d, a * d + b * c - b * d)
    }

    /// Ring multiplication, `None` if a coordinate overflows `i64`
    pub fn checked_mul(self, other: Self) -> Option<Self> {
        let (a, b) = (self.x, self.y);
        let (c, d) = (other.x, other.y);
        let bd = b.checked_mul(d)?;
        let x = a.checked_mul(c)?.checked_sub(bd)?;
        let y = a.checked_mul(d)?.checked_add(b.checked_mul(c)?)?.checked_sub(bd)?;
        Some(Self::new(x, y))
    }

    /// Square-and-multiply exponentiation, `pow(_, 0) == 1`.
    ///
    /// Returns `None` once the result leaves the `i64` range, which for
    /// `2 + 3ω` (norm 7) happens in the mid forties.
    pub fn pow(self, exponent: u32) -> Option<Self> {
        let mut result = Self::ONE;
        let mut base = self;
        let mut e = exponent;
        while e > 0 {
            if e & 1 == 1 {
                result = result.checked_mul(base)?;
            }
            e >>= 1;
            if e > 0 {
                base = base.checked_mul(base)?;
            }
        }
        Some(result)
    }

    /// The norm x² - xy + y², multiplicative and never negative
    pub fn norm(&self) -> i64 {
        self.x * self.x - self.x * self.y + self.y * self.y
    }

    /// Complex conjugate in the (1, ω) basis: conj(x + yω) = (x - y) - yω
    pub fn conjugate(&self) -> Self {
        Self::new(self.x - self.y, -self.y)
    }

    /// Division with remainder by closest-vector search.
    ///
    /// The exact quotient `self / divisor` is rounded to the hexagonal
    /// lattice Z[ω], viewed as two rectangular cosets: quotients with an even
    /// ω-coordinate and quotients with an odd one. Each coset is rounded
    /// independently and the candidate leaving the smaller remainder wins, so
    /// `self = q * divisor + r` with `norm(r) < norm(divisor)`.
    pub fn div_rem(self, divisor: Self) -> Result<(Self, Self)> {
        validate::nonzero_divisor(divisor.is_zero(), "EisensteinInteger::div_rem")?;

        let (x, y) = (self.x as i128, self.y as i128);
        let (c, d) = (divisor.x as i128, divisor.y as i128);
        let norm = c * c - c * d + d * d;
        let twice = 2 * norm;

        // s / 2N is the real part and t / 2N the scaled imaginary part of
        // self / divisor
        let s = x * (2 * c - d) + y * (2 * d - c);
        let t = y * c - x * d;

        let x0 = round_half_down(s, twice, norm);
        let x1 = round_half_down(t, twice, norm);
        let even = Self::new((x0 + x1) as i64, (2 * x1) as i64);
        let even_rem = self.sub(divisor.mul(even));

        let y0 = round_half_down(s + norm, twice, norm);
        let y1 = round_half_down(t - norm, twice, norm);
        let odd = Self::new((y0 + y1) as i64, (2 * y1 + 1) as i64);
        let odd_rem = self.sub(divisor.mul(odd));

        let (even_norm, odd_norm) = (even_rem.norm(), odd_rem.norm());
        if even_norm < odd_norm || (even_norm == odd_norm && x0 < y0) {
            Ok((even, even_rem))
        } else {
            Ok((odd, odd_rem))
        }
    }

    /// The remainder of [`div_rem`](Self::div_rem), the canonical residue of
    /// `self` modulo `modulus`
    pub fn rem_euclid(self, modulus: Self) -> Result<Self> {
        self.div_rem(modulus).map(|(_, r)| r)
    }

    /// Extended Euclid: returns `(h, a, b)` with `h = a*self + b*other`.
    ///
    /// `h` is a gcd of the two inputs up to one of the six units.
    pub fn gcd_extended(self, other: Self) -> Result<(Self, Self, Self)> {
        let (mut h, mut l) = (self, other);
        let (mut a, mut b) = (Self::ONE, Self::ZERO);
        let (mut u, mut v) = (Self::ZERO, Self::ONE);

        while !l.is_zero() {
            let (q, r) = h.div_rem(l)?;
            h = l;
            l = r;
            (a, u) = (u, a.sub(q.mul(u)));
            (b, v) = (v, b.sub(q.mul(v)));
        }

        Ok((h, a, b))
    }

    /// Inverse of `self` modulo `modulus`.
    ///
    /// Extended Euclid only yields the gcd up to a unit, so the Bézout
    /// coefficient is scaled by the inverse of whichever unit came out.
    pub fn invert(self, modulus: Self) -> Result<Self> {
        let (gcd, a, _) = self.gcd_extended(modulus)?;

        let unit_inverse = match (gcd.x, gcd.y) {
            (1, 0) => Self::new(1, 0),
            (-1, 0) => Self::new(-1, 0),
            // ω · (-1 - ω) = 1
            (0, 1) => Self::new(-1, -1),
            (0, -1) => Self::new(1, 1),
            // (-1 - ω) · ω = 1
            (-1, -1) => Self::new(0, 1),
            (1, 1) => Self::new(0, -1),
            _ => return Err(Error::not_invertible(self, modulus)),
        };

        let inverse = a.mul(unit_inverse);
        if modulus.is_zero() {
            return Ok(inverse);
        }
        inverse.rem_euclid(modulus)
    }

    /// True iff the norm is a rational prime.
    ///
    /// An element whose norm is a rational prime is prime in Z[ω]. Inert
    /// rational primes such as 167 have square norms and are not detected.
    pub fn is_prime(&self) -> bool {
        is_rational_prime(self.norm())
    }
}

/// Nearest-integer division `v / d` for `d > 0`, rounding exact halves down
#[inline(always)]
fn round_half_down(v: i128, d: i128, half: i128) -> i128 {
    let r = v.rem_euclid(d);
    let floor = (v - r) / d;
    if r > half {
        floor + 1
    } else {
        floor
    }
}

/// Trial division up to the square root
fn is_rational_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    let mut i = 2i64;
    while i * i <= n {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}

impl From<(i64, i64)> for EisensteinInteger {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for EisensteinInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:+}ω", self.x, self.y)
    }
}

// Operator forms delegate to the named methods above
impl core::ops::Add for EisensteinInteger {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        EisensteinInteger::add(self, other)
    }
}

impl core::ops::Sub for EisensteinInteger {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        EisensteinInteger::sub(self, other)
    }
}

impl core::ops::Mul for EisensteinInteger {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        EisensteinInteger::mul(self, other)
    }
}

impl core::ops::Neg for EisensteinInteger {
    type Output = Self;

    fn neg(self) -> Self {
        EisensteinInteger::neg(self)
    }
}
