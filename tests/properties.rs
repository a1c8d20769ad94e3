use exact_cfrac::{
    continued_fraction_terms, Approximation, ContinuedFraction, ExactReal, IrrationalAlgebraicNumber,
    Polynomial, QuadraticNumber,
};
use num_bigint::BigInt;
use num_integer::Roots;
use num_rational::{BigRational, Ratio};
use proptest::prelude::*;

fn arb_radicand() -> impl Strategy<Value = i64> {
    prop::sample::select(vec![2i64, 3, 5, 6, 7, 10, 11, 13])
}

fn arb_polynomial() -> impl Strategy<Value = Polynomial> {
    prop::collection::vec(-20i64..=20, 1..6).prop_map(|c| Polynomial::from_integers(&c))
}

fn is_perfect_power(d: u64, n: u32) -> bool {
    let k = d.nth_root(n);
    k.pow(n) == d
}

proptest! {
    #[test]
    fn rational_terms_rebuild_the_value(n in -100_000i64..100_000, d in 1i64..100_000) {
        let r = Ratio::new(n, d);
        let terms = continued_fraction_terms(r, 1000).unwrap();
        prop_assert!(terms.len() < 1000);
        prop_assert!(terms[1..].iter().all(|t| *t >= 1));
        prop_assert_eq!(
            ContinuedFraction::from(terms).to_rational(),
            Some(Approximation::Exact(r))
        );
    }

    #[test]
    fn quadratic_recip_is_an_involution(
        a in -50i64..50,
        b in (1i64..50).prop_union(-50i64..0),
        c in (1i64..50).prop_union(-50i64..0),
        d in arb_radicand(),
    ) {
        let mut x = QuadraticNumber::new(a, b, c, d).unwrap();
        let mut y = x.recip().unwrap();
        prop_assert_eq!(y.recip().unwrap(), x);
    }

    #[test]
    fn quadratic_floor_brackets_the_value(
        a in -50i64..50,
        b in (1i64..50).prop_union(-50i64..0),
        c in 1i64..50,
        d in arb_radicand(),
    ) {
        let mut x = QuadraticNumber::new(a, b, c, d).unwrap();
        let f = x.floor();
        prop_assert!(x.gt_int(&f));
        prop_assert!(x.lt_int(&(f + 1)));
    }

    #[test]
    fn quadratic_terms_follow_the_periodic_expansion(
        a in -30i64..30,
        b in (1i64..30).prop_union(-30i64..0),
        c in 1i64..30,
        d in arb_radicand(),
    ) {
        let x = QuadraticNumber::new(a, b, c, d).unwrap();
        let cf = x.repeating_continued_fraction();
        prop_assert!(!cf.periodic_coeffs().is_empty());
        let expected: Vec<i64> = cf.coeffs().take(20).cloned().collect();
        prop_assert_eq!(continued_fraction_terms(x, 20).unwrap(), expected);
    }

    #[test]
    fn sqrt_expansion_has_the_classic_shape(d in 2i64..500) {
        let s = d.sqrt();
        prop_assume!(s * s != d);
        let cf = QuadraticNumber::from_sqrt(d).unwrap().repeating_continued_fraction();
        prop_assert_eq!(cf.aperiodic_coeffs(), &[s][..]);
        prop_assert_eq!(cf.periodic_coeffs().last(), Some(&(2 * s)));
    }

    #[test]
    fn polynomial_shift_moves_the_argument(p in arb_polynomial(), a in -10i64..10, x in -10i64..10) {
        let a = BigRational::from_integer(BigInt::from(a));
        let x = BigRational::from_integer(BigInt::from(x));
        prop_assert_eq!(p.shift(&a).evaluate(&x), p.evaluate(&(&x + &a)));
    }

    #[test]
    fn nth_root_floor_is_the_integer_root(n in 2u32..5, d in 2u64..2000) {
        prop_assume!(!is_perfect_power(d, n));
        let mut x = IrrationalAlgebraicNumber::nth_root(n, BigInt::from(d)).unwrap();
        prop_assert_eq!(x.floor(), BigInt::from(d.nth_root(n)));
    }
}
