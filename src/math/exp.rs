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
use crate::math::consts::*;
use crate::math::tables::FastMath;
use crate::mlaf::mlaf;

/// 2^52 / ln(2)
const EXP_QUICK_A: f64 = 6497320848556798.0;
/// 1023 * 2^52, bits of 1.0
const EXP_QUICK_B: f64 = 4607182418800017408.0;
/// Shift balancing the relative error of the bit approximation around zero,
/// ceil((ln(ln(2) + 2/e) - ln(2) - ln(ln(2))) * EXP_QUICK_A).
const EXP_QUICK_C: f64 = 196705742606757.0;
const EXP_QUICK_MAX_VALUE: f64 = 700.0;

impl FastMath {
    /// Exponential, split into an integer part and a table sampled fraction
    pub fn exp(&self, x: f64) -> f64 {
        if x > EXP_OVERFLOW_LIMIT {
            return f64::INFINITY;
        }
        if !(x >= EXP_UNDERFLOW_LIMIT) {
            return if x.is_nan() { f64::NAN } else { 0.0 };
        }
        let t = &self.exp;
        let indexes = (x * t.indexing as f64) as i32;
        let value_int = if indexes >= 0 {
            indexes >> t.indexing_div_shift
        } else {
            -((-indexes) >> t.indexing_div_shift)
        };
        let z_index = indexes - (value_int << t.indexing_div_shift);
        let y = x - value_int as f64;
        let eps = y - z_index as f64 * (1.0 / t.indexing as f64);
        let exp_z = t.lo_pos[(z_index + t.mid_index) as usize];
        let mut exp_eps = mlaf(ONE_DIV_F3, eps, ONE_DIV_F4);
        exp_eps = mlaf(ONE_DIV_F2, eps, exp_eps);
        exp_eps = mlaf(1.0, eps, exp_eps);
        exp_eps = mlaf(1.0, eps, exp_eps);
        let lo = exp_z * exp_eps;
        if value_int >= 0 {
            t.hi[value_int as usize] * lo
        } else if value_int >= EXP_MIN_INT_LIMIT {
            t.hi_inv[-value_int as usize] * lo
        } else {
            t.hi_inv[-value_int as usize] * lo * TWO_POW_N54
        }
    }

    /// `e^x - 1`, keeps full relative precision near zero
    pub fn expm1(&self, x: f64) -> f64 {
        if x == 0.0 {
            return x;
        }
        if x.abs() < 1.0 {
            let t = &self.exp;
            let i = (x * t.indexing as f64) as i32;
            let delta = x - i as f64 * (1.0 / t.indexing as f64);
            let k = (i + t.mid_index) as usize;
            let mut p = mlaf(ONE_DIV_F4, delta, ONE_DIV_F5);
            p = mlaf(ONE_DIV_F3, delta, p);
            p = mlaf(ONE_DIV_F2, delta, p);
            p = mlaf(1.0, delta, p);
            t.lo_pos[k] * mlaf(t.lo_neg[k], delta, p)
        } else {
            self.exp(x) - 1.0
        }
    }

    /// Bit trick exponential with a relative error below 3%.
    ///
    /// Meant for |x| < 700, anything outside takes the regular [FastMath::exp].
    #[inline]
    pub fn exp_quick(&self, x: f64) -> f64 {
        if !(x.abs() < EXP_QUICK_MAX_VALUE) {
            return self.exp(x);
        }
        f64::from_bits((EXP_QUICK_A * x + EXP_QUICK_B - EXP_QUICK_C) as i64 as u64)
    }
}

/// Computes exponential using shared tables
#[inline]
pub fn exp(x: f64) -> f64 {
    FastMath::global().exp(x)
}

/// Computes `e^x - 1` using shared tables
#[inline]
pub fn expm1(x: f64) -> f64 {
    FastMath::global().expm1(x)
}

/// Computes rough exponential from the float bit layout
#[inline]
pub fn exp_quick(x: f64) -> f64 {
    FastMath::global().exp_quick(x)
}
