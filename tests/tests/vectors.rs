//! Fixed vectors and boundary scenarios

use evm384_algorithms::{FieldElement, ModArith384, Modulus, Reference, Unrolled};
use evm384_tests::{full_width_modulus, is_montgomery_product, r_inverse, to_biguint};

const ENGINES: [&dyn ModArith384; 2] = [&Reference, &Unrolled];

fn hex(s: &str) -> FieldElement {
    FieldElement::from_hex(s).unwrap()
}

#[test]
fn test_bls12_381_vectors_from_hex() {
    let m = Modulus::BLS12_381;
    assert_eq!(
        *m.p(),
        hex("1a0111ea397fe69a4b1ba7b6434bacd764774b84f38512bf6730d2a0f6b0f6241eabfffeb153ffffb9feffffffffaaab")
    );

    let x = hex("0x0daa35e7a880a2ca3bcea128c5c8d17202945981a13aec134d10c051c1fa23c06b3088c3a380f4b8b1f598e5f390298f");
    let y = hex("0x15e1e13af71de9928b9b1631a9ecad43670a33daa7a418b44f0090b4b602e334f47665551a973a7a4c64af08c847d3ec");
    let expected = hex("0x08e7724179630faa8ba6599731e3b7f3592efb881d54c66dd601841435360731e3b9585c3bc798c320b39e434f6b7627");

    for e in ENGINES {
        assert_eq!(e.mul_mont(&x, &y, m.p(), m.n0()), expected, "{}", e.name());
    }

    // Cross-check the vector itself
    let p = to_biguint(m.p());
    assert_eq!(
        to_biguint(&expected),
        to_biguint(&x) * to_biguint(&y) % &p * r_inverse(&m) % &p
    );
}

#[test]
fn test_one_plus_one() {
    let m = Modulus::BLS12_381;
    let one = FieldElement([1, 0, 0, 0, 0, 0]);
    for e in ENGINES {
        assert_eq!(e.add_mod(&one, &one, m.p()), FieldElement([2, 0, 0, 0, 0, 0]));
    }
}

#[test]
fn test_p_minus_one_plus_one_wraps() {
    let m = Modulus::BLS12_381;
    let mut p_minus_one = *m.p();
    p_minus_one.0[0] -= 1;
    for e in ENGINES {
        assert_eq!(e.add_mod(&p_minus_one, &FieldElement::ONE, m.p()), FieldElement::ZERO);
    }
}

#[test]
fn test_maximal_operands() {
    for m in Modulus::ALL {
        let top = m.max_element();
        let p = to_biguint(m.p());
        for e in ENGINES {
            // wraps exactly once
            assert_eq!(
                to_biguint(&e.add_mod(&top, &top, m.p())),
                (to_biguint(&top) * 2u32) % &p
            );
            // borrow path
            assert_eq!(e.sub_mod(&FieldElement::ZERO, &top, m.p()), FieldElement::ONE);
            assert_eq!(
                to_biguint(&e.mul_mont(&top, &top, m.p(), m.n0())),
                to_biguint(&top) * to_biguint(&top) % &p * r_inverse(&m) % &p
            );
            assert_eq!(
                e.add_mod(&FieldElement::ZERO, &FieldElement::ZERO, m.p()),
                FieldElement::ZERO
            );
        }
    }
}

#[test]
fn test_custom_modulus() {
    // 2^383 + 187 is odd with a full top limb; primality is not required here
    let mut limbs = [0u64; 6];
    limbs[0] = 187;
    limbs[5] = 1 << 63;
    let m = Modulus::new("custom", FieldElement(limbs)).unwrap();
    assert_eq!(m.p().0[0].wrapping_mul(m.n0()), u64::MAX);
    assert_eq!(to_biguint(m.r()), evm384_tests::two_pow_384() % to_biguint(m.p()));

    let a = m.max_element();
    let b = FieldElement([5, 0, 0, 0, 0, 0]);
    let p = to_biguint(m.p());
    for e in ENGINES {
        assert_eq!(
            to_biguint(&e.add_mod(&a, &b, m.p())),
            (to_biguint(&a) + 5u32) % &p
        );
        assert_eq!(e.sub_mod(&b, &a, m.p()), FieldElement([6, 0, 0, 0, 0, 0]));
    }
    for e in ENGINES {
        let r = e.mul_mont(&a, &a, m.p(), m.n0());
        assert!(is_montgomery_product(&m, &a, &a, &r), "{}", e.name());
    }
}

#[test]
fn test_full_width_modulus_carry() {
    let m = full_width_modulus();
    let p = to_biguint(m.p());
    let top = m.max_element();
    let mut half = *m.p();
    half.0[0] += 1;
    let half = evm384_tests::from_biguint(&(to_biguint(&half) / 2u32));
    let small = FieldElement([317, 0, 0, 0, 0, 0]);

    let operands = [FieldElement::ZERO, FieldElement::ONE, small, half, top];
    for a in &operands {
        for b in &operands {
            for e in ENGINES {
                // (p-1) + (p-1) and friends exceed 2^384
                assert_eq!(
                    to_biguint(&e.add_mod(a, b, m.p())),
                    (to_biguint(a) + to_biguint(b)) % &p,
                    "{} add {:?} {:?}",
                    e.name(),
                    a,
                    b
                );
                assert_eq!(
                    to_biguint(&e.sub_mod(a, b, m.p())),
                    (to_biguint(a) + &p - to_biguint(b)) % &p,
                    "{} sub {:?} {:?}",
                    e.name(),
                    a,
                    b
                );
                let r = e.mul_mont(a, b, m.p(), m.n0());
                assert!(is_montgomery_product(&m, a, b, &r), "{} mul {:?} {:?}", e.name(), a, b);
            }
        }
    }

    for e in ENGINES {
        let mut p_minus_two = *m.p();
        p_minus_two.0[0] -= 2;
        assert_eq!(e.add_mod(&top, &top, m.p()), p_minus_two);
        // (p-1)^2 = 1, so the product is R^-1 and R^-1 * R^2 / R = 1
        let r = e.mul_mont(&top, &top, m.p(), m.n0());
        assert_eq!(e.mul_mont(&r, m.r2(), m.p(), m.n0()), FieldElement::ONE);
    }
}
