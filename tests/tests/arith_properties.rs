//! Property-based tests of every engine against arbitrary-precision arithmetic

use evm384_algorithms::{
    from_montgomery, to_montgomery, FieldElement, ModArith384, Modulus, Reference, Unrolled,
};
use evm384_tests::{full_width_modulus, is_montgomery_product, reduce, to_biguint};
use num_bigint::BigUint;
use proptest::prelude::*;

const ENGINES: [&dyn ModArith384; 2] = [&Reference, &Unrolled];

/// Values below p
fn reduced(m: Modulus) -> impl Strategy<Value = FieldElement> {
    any::<[u64; 6]>().prop_map(move |limbs| reduce(&FieldElement(limbs), &m))
}

fn modulus() -> impl Strategy<Value = Modulus> {
    // the full-width modulus is the only one whose sums carry out of limb 5
    prop_oneof![
        Just(Modulus::BLS12_381),
        Just(Modulus::BLS12_377),
        Just(full_width_modulus()),
    ]
}

fn case() -> impl Strategy<Value = (Modulus, FieldElement, FieldElement)> {
    modulus().prop_flat_map(|m| (Just(m), reduced(m), reduced(m)))
}

proptest! {
    #[test]
    fn add_matches_bigint((m, a, b) in case()) {
        let p = to_biguint(m.p());
        let expected = (to_biguint(&a) + to_biguint(&b)) % &p;
        for e in ENGINES {
            let r = e.add_mod(&a, &b, m.p());
            prop_assert!(bool::from(m.is_reduced(&r)));
            prop_assert_eq!(to_biguint(&r), expected.clone());
        }
    }

    #[test]
    fn sub_matches_bigint((m, a, b) in case()) {
        let p = to_biguint(m.p());
        let expected = (to_biguint(&a) + &p - to_biguint(&b)) % &p;
        for e in ENGINES {
            let r = e.sub_mod(&a, &b, m.p());
            prop_assert!(bool::from(m.is_reduced(&r)));
            prop_assert_eq!(to_biguint(&r), expected.clone());
        }
    }

    #[test]
    fn mul_mont_matches_bigint((m, a, b) in case()) {
        for e in ENGINES {
            let r = e.mul_mont(&a, &b, m.p(), m.n0());
            prop_assert!(is_montgomery_product(&m, &a, &b, &r), "{} {:?}", e.name(), r);
        }
    }

    #[test]
    fn full_width_near_p_matches_bigint(da in 1u64..1 << 20, db in 1u64..1 << 20) {
        // operands just below p force the final carry on every operation
        let m = full_width_modulus();
        let p = to_biguint(m.p());
        let a = evm384_tests::from_biguint(&(&p - da));
        let b = evm384_tests::from_biguint(&(&p - db));
        for e in ENGINES {
            let sum = e.add_mod(&a, &b, m.p());
            prop_assert_eq!(to_biguint(&sum), (to_biguint(&a) + to_biguint(&b)) % &p);
            let diff = e.sub_mod(&FieldElement::from_limbs([da, 0, 0, 0, 0, 0]), &b, m.p());
            prop_assert_eq!(to_biguint(&diff), (BigUint::from(da) + &p - to_biguint(&b)) % &p);
            let prod = e.mul_mont(&a, &b, m.p(), m.n0());
            prop_assert!(is_montgomery_product(&m, &a, &b, &prod));
        }
    }

    #[test]
    fn montgomery_round_trip((m, a, _b) in case()) {
        for e in ENGINES {
            let am = to_montgomery(&e, &a, &m);
            prop_assert_eq!(from_montgomery(&e, &am, &m), a);
        }
    }

    #[test]
    fn engines_are_deterministic((m, a, b) in case()) {
        for e in ENGINES {
            prop_assert_eq!(e.mul_mont(&a, &b, m.p(), m.n0()), e.mul_mont(&a, &b, m.p(), m.n0()));
            prop_assert_eq!(e.add_mod(&a, &b, m.p()), e.add_mod(&a, &b, m.p()));
        }
    }
}

#[test]
fn test_montgomery_round_trip_thousand_values() {
    let mut rng = evm384_tests::rng(1);
    for m in [Modulus::BLS12_381, Modulus::BLS12_377, full_width_modulus()] {
        for _ in 0..1000 {
            let a = evm384_tests::random_below(&mut rng, &m);
            let am = to_montgomery(&Unrolled, &a, &m);
            assert_eq!(from_montgomery(&Reference, &am, &m), a);
        }
    }
}
