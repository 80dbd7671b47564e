//! Constants for the BLS12-377 base field

use crate::LIMBS;

/// Short name used in benchmark labels
pub const NAME: &str = "BLS377";

/// p = 0x01ae3a4617c510eac63b05c06ca1493b1a22d9f300f5138f1ef3622fba094800170b5d44300000008508c00000000001
pub const MODULUS: [u64; LIMBS] = [
    0x8508_c000_0000_0001,
    0x170b_5d44_3000_0000,
    0x1ef3_622f_ba09_4800,
    0x1a22_d9f3_00f5_138f,
    0xc63b_05c0_6ca1_493b,
    0x01ae_3a46_17c5_10ea,
];

/// INV = -(p^{-1} mod 2^64) mod 2^64
pub const INV: u64 = 0x8508_bfff_ffff_ffff;

/// R = 2^384 mod p
pub const R: [u64; LIMBS] = [
    0x02cd_ffff_ffff_ff68,
    0x5140_9f83_7fff_ffb1,
    0x9f7d_b3a9_8a7d_3ff2,
    0x7b4e_97b7_6e7c_6305,
    0x4cf4_95bf_803c_84e8,
    0x008d_6661_e2fd_f49a,
];

/// R2 = 2^(384*2) mod p
pub const R2: [u64; LIMBS] = [
    0xb786_686c_9400_cd22,
    0x0329_fcaa_b004_31b1,
    0x22a5_f111_62d6_b46d,
    0xbfdf_7d03_827d_c3ac,
    0x837e_92f0_4179_0bf9,
    0x006d_fccb_1e91_4b88,
];

/// Bit length of p
pub const MODULUS_BITS: u32 = 377;
