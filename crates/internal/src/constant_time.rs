//! Branch-free selection over limbs
//!
//! Selection is done with full-width masks: all-ones picks one side,
//! all-zeros picks the other. No comparison or branch ever depends on the
//! operand values.

/// Expand a 0/1 bit into an all-zeros/all-ones mask
#[inline(always)]
pub const fn ct_mask(bit: u64) -> u64 {
    0u64.wrapping_sub(bit)
}

/// Pick `if_set` where `mask` is all-ones, `if_clear` where it is all-zeros
#[inline(always)]
pub const fn ct_select_u64(mask: u64, if_set: u64, if_clear: u64) -> u64 {
    (if_set & mask) | (if_clear & !mask)
}

/// Limb-wise [`ct_select_u64`]
#[inline(always)]
pub fn ct_select_limbs<const N: usize>(mask: u64, if_set: &[u64; N], if_clear: &[u64; N]) -> [u64; N] {
    let mut out = [0u64; N];
    for i in 0..N {
        out[i] = ct_select_u64(mask, if_set[i], if_clear[i]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_mask_expansion() {
        assert_eq!(ct_mask(0), 0);
        assert_eq!(ct_mask(1), u64::MAX);
    }

    #[test]
    fn test_select() {
        let mut rng = rand::thread_rng();
        for _ in 0..64 {
            let a: u64 = rng.gen();
            let b: u64 = rng.gen();
            assert_eq!(ct_select_u64(ct_mask(1), a, b), a);
            assert_eq!(ct_select_u64(ct_mask(0), a, b), b);
        }
    }

    #[test]
    fn test_select_limbs() {
        let a = [1u64, 2, 3, 4, 5, 6];
        let b = [6u64, 5, 4, 3, 2, 1];
        assert_eq!(ct_select_limbs(u64::MAX, &a, &b), a);
        assert_eq!(ct_select_limbs(0, &a, &b), b);
    }
}
