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
use crate::math::consts::{
    LOG_DOUBLE_MAX_VALUE, LOG_TWO_POW_27, TANH_1_THRESHOLD, TWO_POW_N27, TWO_POW_N28,
    TWO_POW_N55,
};
use crate::math::tables::FastMath;

impl FastMath {
    /// Hyperbolic sine
    pub fn sinh(&self, x: f64) -> f64 {
        let (a, h) = if x < 0.0 { (-x, -0.5) } else { (x, 0.5) };
        if a < 22.0 {
            if a < TWO_POW_N28 {
                return x;
            }
            let t = self.expm1(a);
            h * (t + t / (t + 1.0))
        } else if a < LOG_DOUBLE_MAX_VALUE {
            h * self.exp(a)
        } else {
            // exp(a) alone would overflow before the halving
            let t = self.exp(a * 0.5);
            (h * t) * t
        }
    }

    /// Hyperbolic cosine
    pub fn cosh(&self, x: f64) -> f64 {
        let a = x.abs();
        if a < LOG_TWO_POW_27 {
            if a < TWO_POW_N27 {
                return 1.0;
            }
            let t = self.exp(a);
            0.5 * (t + 1.0 / t)
        } else if a < LOG_DOUBLE_MAX_VALUE {
            0.5 * self.exp(a)
        } else {
            let t = self.exp(a * 0.5);
            (0.5 * t) * t
        }
    }

    /// Hyperbolic tangent
    pub fn tanh(&self, x: f64) -> f64 {
        let negative = x < 0.0;
        let a = x.abs();
        let z = if a < TANH_1_THRESHOLD {
            if a < TWO_POW_N55 {
                return x * (1.0 + a);
            }
            if a >= 1.0 {
                1.0 - 2.0 / (self.expm1(a + a) + 2.0)
            } else {
                let t = self.expm1(-(a + a));
                -t / (t + 2.0)
            }
        } else if a.is_nan() {
            f64::NAN
        } else {
            1.0
        };
        if negative { -z } else { z }
    }
}

/// Computes hyperbolic sine using shared tables
#[inline]
pub fn sinh(x: f64) -> f64 {
    FastMath::global().sinh(x)
}

/// Computes hyperbolic cosine using shared tables
#[inline]
pub fn cosh(x: f64) -> f64 {
    FastMath::global().cosh(x)
}

/// Computes hyperbolic tangent using shared tables
#[inline]
pub fn tanh(x: f64) -> f64 {
    FastMath::global().tanh(x)
}
