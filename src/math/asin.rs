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

/// asin for `x` in `(sin(73deg), 1)` from asin(x) = pi/2 - 2 asin(sqrt((1-x)/2)).
#[inline]
fn asin_tail(x: f64) -> f64 {
    let t = (1.0 - x) * 0.5;
    let mut p = mlaf(ASIN_PS4, t, ASIN_PS5);
    p = mlaf(ASIN_PS3, t, p);
    p = mlaf(ASIN_PS2, t, p);
    p = mlaf(ASIN_PS1, t, p);
    p = mlaf(ASIN_PS0, t, p);
    p *= t;
    let mut q = mlaf(ASIN_QS3, t, ASIN_QS4);
    q = mlaf(ASIN_QS2, t, q);
    q = mlaf(ASIN_QS1, t, q);
    q = mlaf(1.0, t, q);
    let s = t.sqrt();
    let z = s + s * (p / q);
    ASIN_PIO2_HI - ((z + z) - ASIN_PIO2_LO)
}

impl FastMath {
    /// Arcsine, NaN outside of `[-1, 1]`
    pub fn asin(&self, x: f64) -> f64 {
        let negative = x.is_sign_negative();
        let a = x.abs();
        let r = if a <= self.asin_grid.max_value_for_tabs {
            let (index, delta) = self.asin_grid.locate(a);
            self.asin.eval(index, delta)
        } else if a < 1.0 {
            asin_tail(a)
        } else if a == 1.0 {
            PI_OVER_2
        } else {
            return f64::NAN;
        };
        if negative { -r } else { r }
    }

    /// Arccosine, NaN outside of `[-1, 1]`
    #[inline]
    pub fn acos(&self, x: f64) -> f64 {
        ASIN_PIO2_HI - (self.asin(x) - ASIN_PIO2_LO)
    }
}

/// Computes arcsine using shared tables
#[inline]
pub fn asin(x: f64) -> f64 {
    FastMath::global().asin(x)
}

/// Computes arccosine using shared tables
#[inline]
pub fn acos(x: f64) -> f64 {
    FastMath::global().acos(x)
}
