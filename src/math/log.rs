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
use crate::math::bits::{
    EXP_BIAS, MIN_DOUBLE_EXPONENT, biased_exponent, bucket_floor, high_word, top_mantissa_bits,
};
use crate::math::consts::{INV_LOG_10, LOG_2, MIN_DOUBLE_NORMAL, TWO_POW_52};
use crate::math::tables::FastMath;
use crate::mlaf::mlaf;

/// ln(x) for x close to one, from atanh series of z = (x-1)/(x+1).
#[inline]
fn log_near_one(x: f64) -> f64 {
    let z = (x - 1.0) / (x + 1.0);
    let z2 = z * z;
    let mut p = mlaf(2.0 / 11.0, z2, 2.0 / 13.0);
    p = mlaf(2.0 / 9.0, z2, p);
    p = mlaf(2.0 / 7.0, z2, p);
    p = mlaf(2.0 / 5.0, z2, p);
    p = mlaf(2.0 / 3.0, z2, p);
    p = mlaf(2.0, z2, p);
    z * p
}

impl FastMath {
    /// Natural logarithm.
    ///
    /// Log of zero is -Inf, negative values and NaN give NaN.
    pub fn log(&self, x: f64) -> f64 {
        if x > 0.0 {
            if x == f64::INFINITY {
                return f64::INFINITY;
            }
            let (x, h) = if x > 0.95 {
                if x < 1.14 {
                    return log_near_one(x);
                }
                (x, 0.0)
            } else if x < MIN_DOUBLE_NORMAL {
                (x * TWO_POW_52, -52.0 * LOG_2)
            } else {
                (x, 0.0)
            };
            let hw = high_word(x);
            let e = biased_exponent(hw) - EXP_BIAS;
            let index = top_mantissa_bits(hw, self.options.log_bits);
            let [log_m, inv_m] = self.log[index];
            let mantissa = x * self.two_pow[(-e - MIN_DOUBLE_EXPONENT) as usize];
            // Both terms share the binade, the difference is exact.
            let z = (mantissa - bucket_floor(mantissa, self.options.log_bits)) * inv_m;
            // ln(1 + z) for z < 2^-log_bits
            let mut p = mlaf(-0.25, z, 0.2);
            p = mlaf(1.0 / 3.0, z, p);
            p = mlaf(-0.5, z, p);
            p = mlaf(1.0, z, p);
            h + e as f64 * LOG_2 + mlaf(log_m, z, p)
        } else if x == 0.0 {
            f64::NEG_INFINITY
        } else {
            f64::NAN
        }
    }

    /// Base 10 logarithm
    #[inline]
    pub fn log10(&self, x: f64) -> f64 {
        self.log(x) * INV_LOG_10
    }
}

/// Computes natural logarithm using shared tables
#[inline]
pub fn log(x: f64) -> f64 {
    FastMath::global().log(x)
}

/// Computes base 10 logarithm using shared tables
#[inline]
pub fn log10(x: f64) -> f64 {
    FastMath::global().log10(x)
}
