//! BLS48-581 curve constants
//!
//! The curve is `E: y^2 = x^3 + 1` over a 581-bit prime field, generated by the
//! seed `u = -0x140000381`. G2 lives on the D-type sextic twist `y^2 = x^3 + 1/s`
//! over Fp8. All multi-precision values are canonical (not Montgomery) integers
//! stored as ten little-endian 64-bit limbs.

use super::{CurveParams, SeedSign, TwistType};

/// Number of 64-bit limbs in a field element or scalar
pub const LIMBS: usize = 10;

/// Size of an encoded base field element in bytes
pub const FP_SIZE: usize = 73;

/// Size of a compressed G1 point in bytes
pub const G1_COMPRESSED_SIZE: usize = FP_SIZE;

/// Size of an uncompressed G1 point in bytes
pub const G1_UNCOMPRESSED_SIZE: usize = 2 * FP_SIZE;

/// Size of an uncompressed G2 point in bytes
pub const G2_UNCOMPRESSED_SIZE: usize = 16 * FP_SIZE;

/// Size of an encoded GT element in bytes
pub const GT_SIZE: usize = 48 * FP_SIZE;

/// Size of an encoded scalar in bytes
pub const SCALAR_SIZE: usize = 8 * LIMBS;

/// Bit length of the group order
pub const ORDER_BITS: usize = 518;

/// Absolute value of the curve seed `u`
pub const SEED: u64 = 0x1_4000_0381;

/// Sign of the curve seed
pub const SEED_SIGN: SeedSign = SeedSign::Negative;

/// Twist used to represent G2
pub const TWIST: TwistType = TwistType::D;

/// Curve coefficient `b`
pub const CURVE_B: u64 = 1;

/// Base field modulus `p = (u - 1)^2 (u^16 - u^8 + 1) / 3 + u`, little-endian limbs
pub const MODULUS: [u64; 10] = [
    0x3edc_154e_6565_912b,
    0x578f_df72_1a4a_48ac,
    0x8367_a551_3170_ee0a,
    0xcd30_394f_4736_daf6,
    0x8ae4_3af6_e082_acd9,
    0xe6c0_f1f3_9754_44a4,
    0xe84f_8d12_2131_bb3b,
    0x24e3_1d47_012a_0056,
    0x80f7_3ff3_476f_3138,
    0x0000_0000_0000_0012,
];

/// Prime order `r = u^16 - u^8 + 1` of G1, G2 and GT, little-endian limbs
pub const ORDER: [u64; 10] = [
    0x18a5_fe6f_cd67_1c01,
    0xccbe_5994_67c2_4da1,
    0xa85c_7cd0_5623_03c4,
    0x4196_9d34_c4c9_2016,
    0x3fad_6bc9_72c2_e6e7,
    0x3538_7a3f_0b3c_be00,
    0x3a9c_cc16_15c0_d6c6,
    0x86f8_a925_e288_5e23,
    0x0000_0000_0000_0023,
    0x0000_0000_0000_0000,
];

/// Cube root of unity `β` in Fp with `(β·x, y) = -[u^8](x, y)` on G1
pub const CUBE_ROOT_OF_UNITY: [u64; 10] = [
    0x24de_9ac5_e1c7_9b90,
    0x205c_d8e3_f88e_5de8,
    0xd62a_b21f_74f7_421a,
    0xf431_6694_b9b6_0db5,
    0xfa6a_a734_22b5_fb82,
    0xfcbe_d6ff_46a8_46b5,
    0x2afa_5658_3d66_c1e5,
    0xdd5d_1f4e_2096_384f,
    0x0000_002c_68b7_5055,
    0x0000_0000_0000_0000,
];

/// Affine x-coordinate of the G1 generator
pub const G1_X: [u64; 10] = [
    0x4d03_75a8_98e6_408f,
    0x95e1_f3fc_2718_b7be,
    0x2b7d_512c_c7c1_7f8d,
    0x3371_161c_8f73_f1c5,
    0x3d9a_c102_9abd_2116,
    0x9765_cfe1_548b_e5ae,
    0x7ef3_8952_828d_2f22,
    0xb329_2a93_31e1_18ba,
    0x495d_a87e_0b5b_5fec,
    0x0000_0000_0000_000d,
];

/// Affine y-coordinate of the G1 generator
pub const G1_Y: [u64; 10] = [
    0x45f3_27ae_6a9b_5529,
    0x2fb4_9245_eba5_27b3,
    0xfff3_83c5_ee69_dff2,
    0x8ba3_4e3f_039d_c020,
    0x28e0_a7db_0f2f_ad50,
    0x9589_11ad_7abc_4ebe,
    0xe323_9f85_1220_18fc,
    0xef90_a18a_c259_f9d6,
    0x7959_1587_4398_61bd,
    0x0000_0000_0000_000c,
];

/// Affine x-coordinate of the G2 generator as eight Fp coefficients,
/// ordered `c0.c0.c0, c0.c0.c1, c0.c1.c0, c0.c1.c1, c1.c0.c0, ...`
pub const G2_X: [[u64; 10]; 8] = [
    [
        0x234f_92ef_8620_c4bd,
        0x02c9_4cb9_3131_78fb,
        0x8b37_71c5_42e2_5355,
        0xad79_6c39_8b9d_7446,
        0x7b87_890c_c375_8186,
        0x2a9d_de11_4caf_212c,
        0xa609_1cb5_e393_04e9,
        0x0f05_e7db_7205_be9b,
        0x2a8e_4592_4a7e_4202,
        0x0000_0000_0000_0005,
    ],
    [
        0x2609_b1dc_ff44_f319,
        0x5400_a5e2_da43_5511,
        0xf1e6_6a5f_0b26_1aa2,
        0xd179_2640_3fb4_163e,
        0xc1f6_a965_b1e1_29e0,
        0x5b48_8ff0_2655_1946,
        0xf67b_8558_d00b_f479,
        0xbc38_9fab_8f64_8aea,
        0xcdf3_01f1_5b59_2c23,
        0x0000_0000_0000_0010,
    ],
    [
        0x27d2_a41a_8396_e218,
        0x51dc_dbb5_186f_b406,
        0x1e9b_7a05_1d41_1813,
        0x0937_c112_7204_ae3f,
        0x7b3d_0275_085b_6616,
        0x5121_2f45_e7d8_a877,
        0x5833_90e8_b8dd_6cd8,
        0xdc3d_cd4d_5d27_a31c,
        0x8113_d5f3_142d_41ef,
        0x0000_0000_0000_0010,
    ],
    [
        0x30d4_d0f7_0e6d_3ff9,
        0x87b1_51c3_5050_5efc,
        0xbf3a_6bbb_1425_9945,
        0x9a4a_43a5_0080_8112,
        0xfa2c_0348_727e_ad0b,
        0x7565_71c1_c50e_16e6,
        0xf4f3_6d6f_0b9c_3a68,
        0xc910_12f5_3287_39e3,
        0xa581_d98c_31d6_9e0f,
        0x0000_0000_0000_000a,
    ],
    [
        0xefb6_de5a_1972_98dc,
        0xbb85_652e_2d99_4d90,
        0x7b14_4ec5_cdbc_57f6,
        0x8508_58a5_52ec_f2c7,
        0x5c35_65a1_8530_6eb6,
        0x409d_fc06_de91_cf67,
        0x4eba_be44_2472_3ec6,
        0x5174_1bc2_e690_7b1b,
        0x6142_14c8_d7b3_9b6c,
        0x0000_0000_0000_0004,
    ],
    [
        0x7e8f_83a7_5aaa_7ef4,
        0xefa8_ea67_3cdf_be36,
        0xf813_9320_4d55_0fc9,
        0xb106_2d16_93e3_8918,
        0x28e2_799e_a3a4_f2fb,
        0x00c2_e22b_d4d5_6c0b,
        0xda47_7b46_6568_497f,
        0xcfcb_3525_7d41_a727,
        0xcdce_5a4c_1880_c0d7,
        0x0000_0000_0000_000e,
    ],
    [
        0xe6d0_5cf1_bda8_a38d,
        0xaaf4_5fa8_35fa_ae1f,
        0x047d_f9fa_66c3_c468,
        0x1df9_a1dc_ccbc_3773,
        0x19bb_20f6_f63c_645c,
        0x902f_b110_c4bb_c902,
        0xe39b_dcd5_4c14_c16a,
        0xdac3_f9ce_8a9e_5286,
        0x31af_e14d_0781_4622,
        0x0000_0000_0000_000e,
    ],
    [
        0x5636_3900_cbcd_f4a9,
        0x7f1a_c1ee_2369_71a1,
        0x70da_01b1_2489_1b18,
        0x69d3_7295_3671_ac47,
        0xf8f4_c4ae_3dbd_4579,
        0x8c41_6a43_e41e_6ff3,
        0x0c51_417a_ee56_1850,
        0xd8f8_51f4_dfbd_fb94,
        0xafcb_eaa5_ae87_acd5,
        0x0000_0000_0000_0005,
    ],
];

/// Affine y-coordinate of the G2 generator, same coefficient order as [`G2_X`]
pub const G2_Y: [[u64; 10]; 8] = [
    [
        0x8a55_71d6_5e58_8d09,
        0x0435_a3d7_0397_0d92,
        0xd0f9_b263_ccae_89f5,
        0x18c7_e446_152d_0308,
        0x601e_326c_0f30_1601,
        0x07cb_430a_4891_b7f4,
        0x42ff_c96a_3078_e0a6,
        0x9737_e1cd_540e_9daf,
        0x8015_9203_73ec_69d2,
        0x0000_0000_0000_0010,
    ],
    [
        0xfb5a_f19d_8f03_dd6a,
        0xf013_9250_8586_1222,
        0x57d7_41f4_ff9b_58f6,
        0x6aaf_d67c_64a0_d4db,
        0xe49b_b54b_0787_639a,
        0x6ad8_fbaa_3471_7eff,
        0xa7d0_9863_096a_5cb7,
        0x84fa_494c_027d_c9b1,
        0x0161_9b7e_fb8a_d871,
        0x0000_0000_0000_000a,
    ],
    [
        0xd171_f5eb_7f92_a6cd,
        0x64f1_2722_bfda_7cb9,
        0x9893_05a1_dc63_ba1c,
        0x45b4_aacf_9eed_2fb8,
        0x0ca4_d266_e634_4eaa,
        0xcf3e_5eb4_1750_df20,
        0xd42a_2b3f_99fb_07d0,
        0x6e53_14d1_4e31_f51c,
        0x7ac1_f587_4e54_4087,
        0x0000_0000_0000_000e,
    ],
    [
        0x8720_70ed_f413_e620,
        0x4512_e7b5_793f_cb61,
        0x2b0e_481c_6e5c_abbf,
        0x8c09_7f00_5f24_dbdc,
        0x5d44_840c_5291_1fa0,
        0x7105_b926_f52d_d5f8,
        0x0dc0_ffbb_7660_06cb,
        0x5f1c_e86f_8148_c6f0,
        0x89c5_48f9_2a5c_3668,
        0x0000_0000_0000_000c,
    ],
    [
        0x9cc9_e8a5_edbd_6808,
        0x2caa_7a69_e728_5471,
        0x80d0_f382_127b_8d41,
        0x95de_ecdb_8b04_27db,
        0xbd2e_b0a5_c33b_862e,
        0x8aa8_114b_4efb_039c,
        0xf693_8ec5_28a3_e162,
        0xa8ae_ee45_6b7c_ac8c,
        0xdb0b_a744_eb04_b049,
        0x0000_0000_0000_0007,
    ],
    [
        0x9e37_a1ab_c9ee_10be,
        0x7f5a_9a3e_920e_2611,
        0x25d5_a53f_dab2_5203,
        0x4a0a_eb20_04d4_ddf2,
        0x2108_4b10_c436_a91b,
        0x45bd_7e5c_0fa6_a823,
        0x1a70_915f_8fa7_80c8,
        0xd2fd_3c42_42d3_d2b9,
        0xe31d_e136_08dd_ddc8,
        0x0000_0000_0000_0000,
    ],
    [
        0x81ec_266a_310f_0f1b,
        0x929c_5f3d_8043_ae24,
        0x4f7a_2d79_6f32_fcf3,
        0xc93b_e125_569f_6ada,
        0x8028_54a5_868e_709c,
        0x1cd5_2219_a887_38ea,
        0x0b2f_ca3b_0efc_153e,
        0xf4fd_81c9_7810_ee7d,
        0x353a_4d17_e673_8dfa,
        0x0000_0000_0000_000a,
    ],
    [
        0xab05_d64d_ee97_7589,
        0xfb0f_278e_458d_c8eb,
        0x52fe_741f_3bb0_0797,
        0xae90_46ca_b2b2_f14f,
        0xecc1_c4e1_8e44_9d1f,
        0xa44f_cd6e_686b_8801,
        0x8b65_4c13_efec_ef70,
        0x40d9_95b6_e49a_5dd5,
        0xd1e4_6e4a_3826_5652,
        0x0000_0000_0000_0007,
    ],
];

/// `(1 + i)^((p - 1) / 2)`, applied to the `v` half of an Fp4 element
pub const FROB_FP4: [[u64; 10]; 2] = [
    [
        0x0b48_2490_6253_fd3f,
        0x36cd_56db_d642_f088,
        0x2279_e706_8889_e0c4,
        0xfcbf_ce27_89e0_eb21,
        0x4fae_28ac_4a5d_edec,
        0xb5f9_9c11_34e9_6cdf,
        0x7dec_ca34_48ec_11bb,
        0xc758_7d72_d7f1_6508,
        0x5dae_7295_81bf_9c47,
        0x0000_0000_0000_0009,
    ],
    [
        0x0b48_2490_6253_fd3f,
        0x36cd_56db_d642_f088,
        0x2279_e706_8889_e0c4,
        0xfcbf_ce27_89e0_eb21,
        0x4fae_28ac_4a5d_edec,
        0xb5f9_9c11_34e9_6cdf,
        0x7dec_ca34_48ec_11bb,
        0xc758_7d72_d7f1_6508,
        0x5dae_7295_81bf_9c47,
        0x0000_0000_0000_0009,
    ],
];

/// Fp2 coefficient `c` of `v^((p - 1) / 2) = c·v`
pub const FROB_FP8: [[u64; 10]; 2] = [
    [
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
    ],
    [
        0x9d93_d086_be29_0b4f,
        0xa430_18b8_0c6b_ac30,
        0x78e3_3622_0a1e_8e72,
        0x7b01_da84_bb5d_3b7c,
        0x10d1_a2e9_6b7c_c7e1,
        0x31c2_d757_7134_7f9d,
        0xed00_39c8_90e7_49d2,
        0xf731_e03f_64a6_8791,
        0x5cd1_caf1_099d_b7c8,
        0x0000_0000_0000_0005,
    ],
];

/// Fp2 coefficient `d` of `s^((p - 1) / 2) = d·s`
pub const FROB_FP16: [[u64; 10]; 2] = [
    [
        0x442e_fdc3_0005_6a36,
        0x273c_be0f_0beb_35e0,
        0xfefb_699b_487d_8d8a,
        0xd908_7fbe_90ab_f056,
        0x6b2a_b7c4_fc30_e79c,
        0xc374_9e6a_b450_c53b,
        0x9da4_be96_45f8_7f8f,
        0xc2a0_0d50_8a1e_44b4,
        0x3f9a_03d3_23ed_e5aa,
        0x0000_0000_0000_0000,
    ],
    [
        0x442e_fdc3_0005_6a36,
        0x273c_be0f_0beb_35e0,
        0xfefb_699b_487d_8d8a,
        0xd908_7fbe_90ab_f056,
        0x6b2a_b7c4_fc30_e79c,
        0xc374_9e6a_b450_c53b,
        0x9da4_be96_45f8_7f8f,
        0xc2a0_0d50_8a1e_44b4,
        0x3f9a_03d3_23ed_e5aa,
        0x0000_0000_0000_0000,
    ],
];

/// Fp2 coefficient `e` of `t^((p - 1) / 3) = e·v·s`
pub const FROB_FP48: [[u64; 10]; 2] = [
    [
        0xa8ad_5e7e_813a_a606,
        0x72b4_9ddd_f2e9_9b6c,
        0xc26d_275e_da69_d81d,
        0x0917_a917_cbe5_ba6b,
        0x095c_5472_5bee_cb11,
        0xe955_8eff_0123_c67b,
        0x6ecb_a58c_99f0_d770,
        0x4cfb_def1_0b23_8352,
        0x83c6_64a3_32cf_89db,
        0x0000_0000_0000_0011,
    ],
    [
        0xa8ad_5e7e_813a_a606,
        0x72b4_9ddd_f2e9_9b6c,
        0xc26d_275e_da69_d81d,
        0x0917_a917_cbe5_ba6b,
        0x095c_5472_5bee_cb11,
        0xe955_8eff_0123_c67b,
        0x6ecb_a58c_99f0_d770,
        0x4cfb_def1_0b23_8352,
        0x83c6_64a3_32cf_89db,
        0x0000_0000_0000_0011,
    ],
];

/// Fp2 coefficient `e'` of `t^(2(p - 1) / 3) = e'·v`
pub const FROB_FP48_SQ: [[u64; 10]; 2] = [
    [
        0x404e_57a0_a300_fb46,
        0x33ac_3be3_5ba8_f827,
        0x9cba_5847_c22b_3a51,
        0xbe2e_e18e_a8f0_b742,
        0xed4e_2cd8_d6f4_97d7,
        0x5c1d_4170_928e_3f69,
        0x7ce8_4741_a95b_9ba8,
        0xd6a4_f9ce_061c_2e2a,
        0x82ba_a79e_cbd5_e7cc,
        0x0000_0000_0000_0007,
    ],
    [
        0xfe8d_bdad_c264_95e5,
        0x23e3_a38e_bea1_5084,
        0xe6ad_4d09_6f45_b3b9,
        0x0f01_57c0_9e46_23b3,
        0x9d96_0e1e_098e_1502,
        0x8aa3_b083_04c6_053a,
        0x6b67_45d0_77d6_1f93,
        0x4e3e_2378_fb0d_d22c,
        0xfe3c_9854_7b99_496b,
        0x0000_0000_0000_000a,
    ],
];

/// Parameter table entry for BLS48-581
pub const BLS48_581: CurveParams = CurveParams {
    name: "BLS48-581",
    modulus: &MODULUS,
    order: &ORDER,
    order_bits: ORDER_BITS,
    seed: SEED,
    seed_sign: SEED_SIGN,
    twist: TWIST,
    b: CURVE_B,
};
