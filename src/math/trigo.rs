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
use crate::math::consts::{ONE_DIV_F2, ONE_DIV_F3, ONE_DIV_F4, PI, PI_OVER_2, TWO_PI};
use crate::math::reduce::remainder_two_pi;
use crate::math::tables::FastMath;
use crate::mlaf::mlaf;

impl FastMath {
    /// Brings a non negative angle into the indexable range of the sin/cos table.
    #[inline(always)]
    fn sin_cos_argument(&self, x: f64) -> f64 {
        if x > self.sin_cos_grid.max_value_for_int_modulo {
            let r = remainder_two_pi(x);
            if r < 0.0 { r + TWO_PI } else { r }
        } else {
            x
        }
    }

    /// Returns `[sin, cos]` at the nearest sample and the offset from it.
    #[inline(always)]
    fn sin_cos_sample(&self, x: f64) -> ([f64; 2], f64) {
        let (index, delta) = self.sin_cos_grid.locate(x);
        let mask = self.sin_cos.len() as i32 - 2;
        (self.sin_cos[(index & mask) as usize], delta)
    }

    #[inline(always)]
    fn sin_from_sample(s: f64, c: f64, h: f64) -> f64 {
        let mut p = mlaf(-c * ONE_DIV_F3, h, s * ONE_DIV_F4);
        p = mlaf(-s * ONE_DIV_F2, h, p);
        p = mlaf(c, h, p);
        mlaf(s, h, p)
    }

    #[inline(always)]
    fn cos_from_sample(s: f64, c: f64, h: f64) -> f64 {
        let mut p = mlaf(s * ONE_DIV_F3, h, c * ONE_DIV_F4);
        p = mlaf(-c * ONE_DIV_F2, h, p);
        p = mlaf(-s, h, p);
        mlaf(c, h, p)
    }

    /// Sine, absolute error about 1e-15 on moderate arguments
    #[inline]
    pub fn sin(&self, x: f64) -> f64 {
        let negative = x.is_sign_negative();
        let x = self.sin_cos_argument(x.abs());
        let ([s, c], h) = self.sin_cos_sample(x);
        let r = Self::sin_from_sample(s, c, h);
        if negative { -r } else { r }
    }

    /// Cosine, absolute error about 1e-15 on moderate arguments
    #[inline]
    pub fn cos(&self, x: f64) -> f64 {
        let x = self.sin_cos_argument(x.abs());
        let ([s, c], h) = self.sin_cos_sample(x);
        Self::cos_from_sample(s, c, h)
    }

    /// Sine and cosine from a single table lookup
    #[inline]
    pub fn sin_cos(&self, x: f64) -> (f64, f64) {
        let negative = x.is_sign_negative();
        let x = self.sin_cos_argument(x.abs());
        let ([s, c], h) = self.sin_cos_sample(x);
        let sin = Self::sin_from_sample(s, c, h);
        let cos = Self::cos_from_sample(s, c, h);
        (if negative { -sin } else { sin }, cos)
    }

    /// Tangent.
    ///
    /// Angles above 77 degrees are evaluated as the reciprocal of the
    /// cotangent sample, so the table never holds values close to the pole.
    pub fn tan(&self, x: f64) -> f64 {
        let mut x = x;
        if x.abs() > self.tan_grid.max_value_for_int_modulo {
            x = remainder_two_pi(x);
            if x < -PI_OVER_2 {
                x += PI;
            } else if x > PI_OVER_2 {
                x -= PI;
            }
        }
        let mut negative = x.is_sign_negative();
        let (index, mut delta) = self.tan_grid.locate(x.abs());
        let last = self.tan_virtual_len as i32 - 1;
        let mut index = index & (2 * last - 1);
        // tan(pi - y) = -tan(y)
        if index > last {
            index = 2 * last - index;
            delta = -delta;
            negative = !negative;
        }
        let r = if (index as usize) < self.tan.len() {
            self.tan.eval(index as usize, delta)
        } else {
            // tan(pi/2 - y) = 1 / tan(y)
            1.0 / self.tan.eval((last - index) as usize, -delta)
        };
        if negative { -r } else { r }
    }
}

/// Computes sine using shared tables
#[inline]
pub fn sin(x: f64) -> f64 {
    FastMath::global().sin(x)
}

/// Computes cosine using shared tables
#[inline]
pub fn cos(x: f64) -> f64 {
    FastMath::global().cos(x)
}

/// Computes sine and cosine using shared tables
#[inline]
pub fn sin_cos(x: f64) -> (f64, f64) {
    FastMath::global().sin_cos(x)
}

/// Computes tangent using shared tables
#[inline]
pub fn tan(x: f64) -> f64 {
    FastMath::global().tan(x)
}
