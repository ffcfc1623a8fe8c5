//! Property-based tests for exact rational arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::Zero;
    use proptest::prelude::*;

    use crate::{MathError, Rational};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn i64_gcd(a: i64, b: i64) -> i64 {
        let (mut a, mut b) = (a.abs(), b.abs());
        while b != 0 {
            (a, b) = (b, a % b);
        }
        a
    }

    proptest! {
        #[test]
        fn construction_is_reduced(n in small_int(), d in non_zero_int()) {
            let r = Rational::new(n, d).unwrap();
            prop_assert!(r.denominator() > 0);
            // lowest terms; zero normalizes to 0/1 so the gcd is always 1
            prop_assert_eq!(i64_gcd(r.numerator(), r.denominator()), 1);
        }

        #[test]
        fn construction_is_canonical(
            n in small_int(),
            d in non_zero_int(),
            k in non_zero_int(),
        ) {
            // scaling numerator and denominator by k never changes the value
            let r = Rational::new(n, d).unwrap();
            let scaled = Rational::new(k * n, k * d).unwrap();
            prop_assert_eq!(r, scaled);
        }

        #[test]
        fn zero_denominator_always_fails(n in any::<i64>()) {
            prop_assert_eq!(Rational::new(n, 0), Err(MathError::DivisionByZero));
        }

        #[test]
        fn add_commutative(
            a in small_int(), b in non_zero_int(),
            c in small_int(), d in non_zero_int(),
        ) {
            let x = Rational::new(a, b).unwrap();
            let y = Rational::new(c, d).unwrap();
            prop_assert_eq!(x + y, y + x);
        }

        #[test]
        fn mul_commutative(
            a in small_int(), b in non_zero_int(),
            c in small_int(), d in non_zero_int(),
        ) {
            let x = Rational::new(a, b).unwrap();
            let y = Rational::new(c, d).unwrap();
            prop_assert_eq!(x * y, y * x);
        }

        #[test]
        fn add_associative(
            a in -100i64..100, b in 1i64..100,
            c in -100i64..100, d in 1i64..100,
            e in -100i64..100, f in 1i64..100,
        ) {
            let x = Rational::new(a, b).unwrap();
            let y = Rational::new(c, d).unwrap();
            let z = Rational::new(e, f).unwrap();
            prop_assert_eq!((x + y) + z, x + (y + z));
        }

        #[test]
        fn mul_distributes_over_add(
            a in -100i64..100, b in 1i64..100,
            c in -100i64..100, d in 1i64..100,
            e in -100i64..100, f in 1i64..100,
        ) {
            let x = Rational::new(a, b).unwrap();
            let y = Rational::new(c, d).unwrap();
            let z = Rational::new(e, f).unwrap();
            prop_assert_eq!(x * (y + z), x * y + x * z);
        }

        #[test]
        fn sub_is_add_of_negation(
            a in small_int(), b in non_zero_int(),
            c in small_int(), d in non_zero_int(),
        ) {
            let x = Rational::new(a, b).unwrap();
            let y = Rational::new(c, d).unwrap();
            prop_assert_eq!(x - y, x + (-y));
        }

        #[test]
        fn ordering_matches_cross_multiplication(
            a in small_int(), b in non_zero_int(),
            c in small_int(), d in non_zero_int(),
        ) {
            let x = Rational::new(a, b).unwrap();
            let y = Rational::new(c, d).unwrap();
            let lhs = i128::from(x.numerator()) * i128::from(y.denominator());
            let rhs = i128::from(y.numerator()) * i128::from(x.denominator());
            prop_assert_eq!(x.cmp(&y), lhs.cmp(&rhs));
        }

        #[test]
        fn zero_is_additive_identity(a in small_int(), b in non_zero_int()) {
            let x = Rational::new(a, b).unwrap();
            prop_assert_eq!(x + Rational::zero(), x);
            prop_assert_eq!(Rational::zero() + x, x);
        }

        #[test]
        fn recip_roundtrip(a in non_zero_int(), b in non_zero_int()) {
            let x = Rational::new(a, b).unwrap();
            prop_assert_eq!(x.recip().unwrap().recip().unwrap(), x);
        }
    }
}
