/*
 * // Copyright (c) Radzivon Bartoshyk 10/2026. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
pub(crate) const TWO_POW_24: f64 = f64::from_bits(0x4170_0000_0000_0000);
pub(crate) const TWO_POW_N24: f64 = f64::from_bits(0x3e70_0000_0000_0000);
pub(crate) const TWO_POW_N26: f64 = f64::from_bits(0x3e50_0000_0000_0000);
pub(crate) const TWO_POW_27: f64 = f64::from_bits(0x41a0_0000_0000_0000);
pub(crate) const TWO_POW_N27: f64 = f64::from_bits(0x3e40_0000_0000_0000);
pub(crate) const TWO_POW_N28: f64 = f64::from_bits(0x3e30_0000_0000_0000);
pub(crate) const TWO_POW_52: f64 = f64::from_bits(0x4330_0000_0000_0000);
pub(crate) const TWO_POW_N54: f64 = f64::from_bits(0x3c90_0000_0000_0000);
pub(crate) const TWO_POW_N55: f64 = f64::from_bits(0x3c80_0000_0000_0000);
pub(crate) const TWO_POW_66: f64 = f64::from_bits(0x4410_0000_0000_0000);
pub(crate) const TWO_POW_78: f64 = f64::from_bits(0x44d0_0000_0000_0000);
pub(crate) const MIN_DOUBLE_NORMAL: f64 = f64::MIN_POSITIVE;

pub(crate) const PI: f64 = std::f64::consts::PI;
pub(crate) const TWO_PI: f64 = 2.0 * PI;
pub(crate) const PI_OVER_2: f64 = std::f64::consts::FRAC_PI_2;
pub(crate) const PI_OVER_4: f64 = std::f64::consts::FRAC_PI_4;
pub(crate) const THREE_PI_OVER_4: f64 = 3.0 * std::f64::consts::FRAC_PI_4;
pub(crate) const LOG_2: f64 = std::f64::consts::LN_2;
pub(crate) const INV_LOG_10: f64 = std::f64::consts::LOG10_E;

/// 2/pi.
pub(crate) const INV_PIO2: f64 = f64::from_bits(0x3fe4_5f30_6dc9_c883);
/// First 33 bits of pi/2, products with integers below 2^20 are exact.
pub(crate) const PIO2_HI: f64 = f64::from_bits(0x3ff9_21fb_5440_0000);
/// pi/2 - PIO2_HI.
pub(crate) const PIO2_LO: f64 = f64::from_bits(0x3dd0_b461_1a62_6331);
pub(crate) const INV_TWO_PI: f64 = INV_PIO2 / 4.0;
pub(crate) const TWO_PI_HI: f64 = 4.0 * PIO2_HI;
pub(crate) const TWO_PI_LO: f64 = 4.0 * PIO2_LO;

/// Below this magnitude the reduction modulo 2pi uses one hi/lo subtraction.
pub(crate) const NORMALIZE_ANGLE_MAX_MEDIUM_DOUBLE: f64 = 1048576.0 * TWO_PI;

/// 1/(2pi) written in base 2^24, most significant chunk first.
pub(crate) static ONE_OVER_TWO_PI_CHUNKS: [f64; 47] = [
    2670176.0, 14390161.0, 346751.0, 644596.0, 8211767.0, 7354072.0, 10839631.0, 1106960.0,
    8361048.0, 15398830.0, 15816813.0, 13179790.0, 9474932.0, 12059026.0, 4962946.0, 7627911.0,
    4163450.0, 13053002.0, 6934458.0, 2133373.0, 4959953.0, 2177639.0, 1837485.0, 1564560.0,
    5137525.0, 9330900.0, 13532455.0, 2168802.0, 15695434.0, 968702.0, 2490359.0, 8480259.0,
    16501700.0, 6477442.0, 10176475.0, 5087155.0, 13234882.0, 7197649.0, 9427367.0, 9960075.0,
    6113774.0, 11664121.0, 8150735.0, 4312701.0, 14849188.0, 12229374.0, 14150727.0,
];

/// 2pi split into five parts of at most 24 significant bits.
pub(crate) static TWO_PI_CHUNKS: [f64; 5] = [
    f64::from_bits(0x4019_21fb_4000_0000),
    f64::from_bits(0x3e94_442d_0000_0000),
    f64::from_bits(0x3d18_4698_8000_0000),
    f64::from_bits(0x3b98_cc51_6000_0000),
    f64::from_bits(0x3a10_1b83_8000_0000),
];

// ln(f64::MAX) and ln(2^-1075), the exp saturation points.
pub(crate) const EXP_OVERFLOW_LIMIT: f64 = f64::from_bits(0x4086_2e42_fefa_39ef);
pub(crate) const EXP_UNDERFLOW_LIMIT: f64 = f64::from_bits(0xc087_4910_d52d_3051);
/// Integer tables for exp(-k) are stored scaled by 2^54 below this point.
pub(crate) const EXP_MIN_INT_LIMIT: i32 = -705;
pub(crate) const LOG_DOUBLE_MAX_VALUE: f64 = EXP_OVERFLOW_LIMIT;
/// ln(2^27)
pub(crate) const LOG_TWO_POW_27: f64 = 27.0 * LOG_2;
/// tanh(x) rounds to 1 above this point.
pub(crate) const TANH_1_THRESHOLD: f64 = 19.061547465398498;

pub(crate) const ASIN_PIO2_HI: f64 = f64::from_bits(0x3ff9_21fb_5444_2d18);
pub(crate) const ASIN_PIO2_LO: f64 = f64::from_bits(0x3c91_a626_3314_5c07);
pub(crate) const ASIN_PS0: f64 = f64::from_bits(0x3fc5_5555_5555_5555);
pub(crate) const ASIN_PS1: f64 = f64::from_bits(0xbfd4_d612_03eb_6f7d);
pub(crate) const ASIN_PS2: f64 = f64::from_bits(0x3fc9_c155_0e88_4455);
pub(crate) const ASIN_PS3: f64 = f64::from_bits(0xbfa4_8228_b568_8f3b);
pub(crate) const ASIN_PS4: f64 = f64::from_bits(0x3f49_efe0_7501_b288);
pub(crate) const ASIN_PS5: f64 = f64::from_bits(0x3f02_3de1_0dfd_f709);
pub(crate) const ASIN_QS1: f64 = f64::from_bits(0xc003_3a27_1c8a_2d4b);
pub(crate) const ASIN_QS2: f64 = f64::from_bits(0x4000_2ae5_9c59_8ac8);
pub(crate) const ASIN_QS3: f64 = f64::from_bits(0xbfe6_066c_1b8d_0159);
pub(crate) const ASIN_QS4: f64 = f64::from_bits(0x3fb3_b8c5_b12e_9282);

pub(crate) const ATAN_HI3: f64 = ASIN_PIO2_HI;
pub(crate) const ATAN_LO3: f64 = ASIN_PIO2_LO;
pub(crate) const ATAN_AT: [f64; 11] = [
    f64::from_bits(0x3fd5_5555_5555_550d),
    f64::from_bits(0xbfc9_9999_9998_ebc4),
    f64::from_bits(0x3fc2_4924_9200_83ff),
    f64::from_bits(0xbfbc_71c6_fe23_1671),
    f64::from_bits(0x3fb7_45cd_c54c_206e),
    f64::from_bits(0xbfb3_b0f2_af74_9a6d),
    f64::from_bits(0x3fb1_0d66_a0d0_3d51),
    f64::from_bits(0xbfad_de2d_52de_fd9a),
    f64::from_bits(0x3fa9_7b4b_2476_0deb),
    f64::from_bits(0xbfa2_b444_2c6a_6c2f),
    f64::from_bits(0x3f90_ad3a_e322_da11),
];

pub(crate) const ONE_DIV_F2: f64 = 1.0 / 2.0;
pub(crate) const ONE_DIV_F3: f64 = 1.0 / 6.0;
pub(crate) const ONE_DIV_F4: f64 = 1.0 / 24.0;
pub(crate) const ONE_DIV_F5: f64 = 1.0 / 120.0;

/// Pivot bit pattern of the exponent-field `pow` approximation, the double `0.97100782...`.
pub(crate) const FASTPOW_PIVOT_BITS: i64 = 0x3fef_127f_0000_0000;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits() {
        assert_eq!(PIO2_HI + PIO2_LO, PI_OVER_2);
        assert_eq!(TWO_PI_HI + TWO_PI_LO, TWO_PI);
        assert!((INV_TWO_PI - 1.0 / TWO_PI).abs() < 1e-16);
        let chunks: f64 = TWO_PI_CHUNKS.iter().sum();
        assert!((chunks - TWO_PI).abs() <= 8.0 * f64::EPSILON);
        assert!((EXP_OVERFLOW_LIMIT - f64::MAX.ln()).abs() < 1e-12);
        assert!((EXP_UNDERFLOW_LIMIT - (f64::from_bits(1).ln() - LOG_2)).abs() < 1e-12);
    }

    #[test]
    fn test_one_over_two_pi_chunks() {
        let mut acc = 0f64;
        let mut scale = TWO_POW_N24;
        for chunk in ONE_OVER_TWO_PI_CHUNKS.iter().take(4) {
            assert!(*chunk < TWO_POW_24);
            acc += chunk * scale;
            scale *= TWO_POW_N24;
        }
        assert!((acc - 1.0 / TWO_PI).abs() < 1e-16);
    }
}
