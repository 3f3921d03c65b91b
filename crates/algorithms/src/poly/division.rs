//! division.rs - Long division and inversion modulo (ideal, m)
//!
//! All arithmetic here happens in (Z[ω]/m)[x]. Every intermediate
//! coefficient is reduced to its canonical residue so the Euclidean
//! iteration stays bounded.

use super::polynomial::Polynomial;
use crate::eisenstein::EisensteinInteger;
use crate::error::{validate, Error, Result};

impl Polynomial {
    /// Long division of `self` by `divisor` with coefficients in Z[ω]/m.
    ///
    /// Returns `(quotient, remainder)`, both trimmed. The divisor's leading
    /// coefficient must be a unit modulo `m`.
    pub fn div_rem_ideal(
        &self,
        divisor: &Polynomial,
        m: EisensteinInteger,
    ) -> Result<(Polynomial, Polynomial)> {
        let divisor = divisor.reduce_coeffs(m)?.trimmed();
        validate::nonzero_divisor(divisor.is_empty(), "Polynomial::div_rem_ideal")?;

        let div = divisor.as_coeffs_slice();
        let lead_inv = div[0].invert(m)?;
        let d = div.len();

        let mut rem = self.reduce_coeffs(m)?.trimmed();
        if rem.len() < d {
            return Ok((Polynomial::zero(), rem));
        }

        let q_len = rem.len() - d + 1;
        let mut quotient = vec![EisensteinInteger::ZERO; q_len];

        while rem.len() >= d {
            let factor = rem.coeffs[0].mul(lead_inv).rem_euclid(m)?;
            let shift = rem.len() - d;
            quotient[q_len - 1 - shift] = factor;

            for (r, &c) in rem.coeffs.iter_mut().zip(div) {
                *r = r.sub(factor.mul(c)).rem_euclid(m)?;
            }
            // The leading term cancels exactly, so the length always drops
            rem.trim();
        }

        Ok((Polynomial::new(quotient), rem))
    }

    /// Remainder of `self` modulo `(ideal, m)`
    pub fn reduce_ideal(&self, ideal: &Polynomial, m: EisensteinInteger) -> Result<Polynomial> {
        self.div_rem_ideal(ideal, m).map(|(_, r)| r)
    }

    /// Extended Euclid in (Z[ω]/m)[x]: returns `(h, a, b)` with
    /// `h ≡ a*self + b*other`, all reduced modulo `m` and trimmed.
    pub fn gcd_extended(
        &self,
        other: &Polynomial,
        m: EisensteinInteger,
    ) -> Result<(Polynomial, Polynomial, Polynomial)> {
        let mut h = self.reduce_coeffs(m)?.trimmed();
        let mut l = other.reduce_coeffs(m)?.trimmed();
        let (mut a, mut b) = (Polynomial::one(), Polynomial::zero());
        let (mut u, mut v) = (Polynomial::zero(), Polynomial::one());

        while !l.is_empty() {
            let (q, r) = h.div_rem_ideal(&l, m)?;
            h = core::mem::replace(&mut l, r);

            let next_u = a.sub(&q.mul(&u)).reduce_coeffs(m)?.trimmed();
            a = core::mem::replace(&mut u, next_u);
            let next_v = b.sub(&q.mul(&v)).reduce_coeffs(m)?.trimmed();
            b = core::mem::replace(&mut v, next_v);
        }

        Ok((h.reduce_coeffs(m)?.trimmed(), a, b))
    }

    /// Inverse of `self` in (Z[ω]/m)[x] / (ideal).
    ///
    /// Fails with `NotInvertible` unless the gcd with the ideal is a nonzero
    /// constant.
    pub fn invert(&self, ideal: &Polynomial, m: EisensteinInteger) -> Result<Polynomial> {
        let (h, a, _) = self.gcd_extended(ideal, m)?;

        if h.len() != 1 {
            return Err(Error::not_invertible(
                self,
                format_args!("({}, {})", ideal, m),
            ));
        }

        let c_inv = h.coeffs[0].invert(m)?;
        a.scale(c_inv).reduce_ideal(ideal, m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poly(pairs: &[(i64, i64)]) -> Polynomial {
        Polynomial::from_pairs(pairs)
    }

    const P: EisensteinInteger = EisensteinInteger::new(2, 3);
    const Q: EisensteinInteger = EisensteinInteger::new(0, 167);

    #[test]
    fn test_div_rem_ideal() {
        // x^2 + 2x + 3 = (x + 1)(x + 1) + 2
        let n = poly(&[(1, 0), (2, 0), (3, 0)]);
        let d = poly(&[(1, 0), (1, 0)]);
        let (q, r) = n.div_rem_ideal(&d, Q).unwrap();
        assert_eq!(q, poly(&[(1, 0), (1, 0)]));
        assert_eq!(r, poly(&[(2, 0)]));
    }

    #[test]
    fn test_reduce_ideal_wraps_exponents() {
        let ideal = Polynomial::ideal(5);

        // x^6 + 2 ≡ x + 2
        let a = poly(&[(1, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (2, 0)]);
        assert_eq!(a.reduce_ideal(&ideal, Q).unwrap(), poly(&[(1, 0), (2, 0)]));

        let b = poly(&[(3, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (2, 0)]);
        assert_eq!(b.reduce_ideal(&ideal, Q).unwrap(), poly(&[(3, 0), (2, 0)]));

        // Short inputs come back trimmed and reduced
        let short = poly(&[(0, 0), (1, 1)]);
        assert_eq!(short.reduce_ideal(&ideal, Q).unwrap(), poly(&[(1, 1)]));
    }

    #[test]
    fn test_reduce_ideal_is_idempotent() {
        let ideal = Polynomial::ideal(5);
        let a = poly(&[(9, -4), (0, 3), (1, 1), (7, 7), (-2, 0), (5, 5), (0, 1), (3, 8)]);
        let once = a.reduce_ideal(&ideal, P).unwrap();
        assert_eq!(once.reduce_ideal(&ideal, P).unwrap(), once);
        assert!(once.len() < 5);
    }

    #[test]
    fn test_div_rem_ideal_by_zero() {
        let a = poly(&[(1, 0)]);
        assert_eq!(
            a.reduce_ideal(&poly(&[(0, 0), (0, 0)]), P),
            Err(Error::DivisionByZero {
                context: "Polynomial::div_rem_ideal"
            })
        );
        // A divisor that vanishes modulo m is zero as well
        assert!(matches!(
            a.reduce_ideal(&poly(&[(4, 6)]), P),
            Err(Error::DivisionByZero { .. })
        ));
    }

    #[test]
    fn test_invert_mod_p() {
        let ideal = Polynomial::ideal(5);
        let f = poly(&[(1, 0), (0, 1), (0, 0), (-1, 0), (1, 1)]);

        let f_p = f.invert(&ideal, P).unwrap();
        assert_eq!(f_p, poly(&[(1, 1), (0, 0), (0, -1), (0, 0), (0, -1)]));
        assert_eq!(f.mul(&f_p).reduce_ideal(&ideal, P).unwrap(), Polynomial::one());
    }

    #[test]
    fn test_invert_mod_q() {
        let ideal = Polynomial::ideal(5);
        let f = poly(&[(1, 0), (0, 1), (0, 0), (-1, 0), (1, 1)]);

        let f_q = f.invert(&ideal, Q).unwrap();
        assert_eq!(f_q.mul(&f).reduce_ideal(&ideal, Q).unwrap(), Polynomial::one());
    }

    #[test]
    fn test_gcd_extended_bezout() {
        let ideal = Polynomial::ideal(5);
        let f = poly(&[(1, 0), (0, 1), (0, 0), (-1, 0), (1, 1)]);

        let (h, a, b) = f.gcd_extended(&ideal, P).unwrap();
        assert_eq!(h, poly(&[(1, 1)]));
        let combo = a.mul(&f).add(&b.mul(&ideal)).reduce_coeffs(P).unwrap();
        assert_eq!(combo.trimmed(), h);
    }

    #[test]
    fn test_invert_shared_factor_fails() {
        // x - 1 divides x^5 - 1
        let ideal = Polynomial::ideal(5);
        let f = poly(&[(1, 0), (-1, 0)]);
        assert!(matches!(
            f.invert(&ideal, P),
            Err(Error::NotInvertible { .. })
        ));

        // The zero polynomial never has an inverse
        assert!(matches!(
            Polynomial::zero().invert(&ideal, Q),
            Err(Error::NotInvertible { .. })
        ));
    }
}
