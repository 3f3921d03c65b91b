//! Algebraic laws of Z[ω] and (Z[ω]/m)[x] / (x^N - 1)

use etru_algorithms::{EisensteinInteger, Polynomial};
use proptest::prelude::*;

const P: EisensteinInteger = EisensteinInteger::new(2, 3);
const Q: EisensteinInteger = EisensteinInteger::new(0, 167);

fn element() -> impl Strategy<Value = EisensteinInteger> {
    (-10_000i64..10_000, -10_000i64..10_000).prop_map(|(x, y)| EisensteinInteger::new(x, y))
}

fn polynomial(max_len: usize) -> impl Strategy<Value = Polynomial> {
    prop::collection::vec((-50i64..50, -50i64..50), 0..max_len)
        .prop_map(|pairs| Polynomial::from_pairs(&pairs))
}

fn is_zero_mod(poly: &Polynomial, m: EisensteinInteger) -> bool {
    poly.reduce_coeffs(m).unwrap().is_zero()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn eisenstein_ring_laws(a in element(), b in element(), c in element()) {
        prop_assert_eq!((a * b) * c, a * (b * c));
        prop_assert_eq!(a * (b + c), a * b + a * c);
        prop_assert_eq!(a + (-a), EisensteinInteger::ZERO);
        prop_assert_eq!((a * b).norm(), a.norm() * b.norm());
    }

    #[test]
    fn eisenstein_division_contract(n in element(), d in element()) {
        prop_assume!(!d.is_zero());
        let (q, r) = n.div_rem(d).unwrap();
        prop_assert_eq!(q * d + r, n);
        prop_assert!(r.norm() < d.norm());
    }

    #[test]
    fn eisenstein_inverse_round_trip(a in element()) {
        prop_assume!(!a.rem_euclid(Q).unwrap().is_zero());
        let inv = a.invert(Q).unwrap();
        prop_assert_eq!((inv * a).rem_euclid(Q).unwrap(), EisensteinInteger::ONE);
    }

    #[test]
    fn polynomial_ring_laws(a in polynomial(8), b in polynomial(8), c in polynomial(8)) {
        prop_assert_eq!(a.mul(&b).trimmed(), b.mul(&a).trimmed());
        prop_assert_eq!(a.mul(&b).mul(&c).trimmed(), a.mul(&b.mul(&c)).trimmed());
        prop_assert_eq!(
            a.mul(&b.add(&c)).trimmed(),
            a.mul(&b).add(&a.mul(&c)).trimmed()
        );
        prop_assert!(a.sub(&a).is_zero());
    }

    #[test]
    fn polynomial_division_contract(n in polynomial(14), d in polynomial(6)) {
        prop_assume!(!is_zero_mod(&d, Q));
        let (q, r) = n.div_rem_ideal(&d, Q).unwrap();
        prop_assert!(r.len() < d.trimmed().len() || r.is_empty());
        prop_assert!(is_zero_mod(&q.mul(&d).add(&r).sub(&n), Q));
    }

    #[test]
    fn reduction_is_idempotent(f in polynomial(30), n in 2usize..12) {
        let ideal = Polynomial::ideal(n);
        for m in [P, Q] {
            let once = f.reduce_ideal(&ideal, m).unwrap();
            prop_assert!(once.len() < n + 1);
            prop_assert_eq!(once.reduce_ideal(&ideal, m).unwrap(), once.clone());
        }
    }

    #[test]
    fn inverse_round_trip_when_invertible(f in polynomial(7)) {
        let ideal = Polynomial::ideal(7);
        if let Ok(inv) = f.invert(&ideal, P) {
            prop_assert_eq!(f.mul(&inv).reduce_ideal(&ideal, P).unwrap(), Polynomial::one());
        }
    }
}
