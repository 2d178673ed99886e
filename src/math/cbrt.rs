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
use crate::math::consts::{MIN_DOUBLE_NORMAL, TWO_POW_78, TWO_POW_N26};
use crate::math::tables::FastMath;
use crate::mlaf::mlaf;

impl FastMath {
    /// Cube root from a table seed refined by two Newton steps
    pub fn cbrt(&self, x: f64) -> f64 {
        let (x, h) = if x < 0.0 {
            if x == f64::NEG_INFINITY {
                return f64::NEG_INFINITY;
            }
            let x = -x;
            if x < MIN_DOUBLE_NORMAL {
                (x * TWO_POW_78, -2.0 * TWO_POW_N26)
            } else {
                (x, -2.0)
            }
        } else {
            // +Inf and NaN
            if !(x < f64::INFINITY) {
                return x;
            }
            if x < MIN_DOUBLE_NORMAL {
                if x == 0.0 {
                    return x;
                }
                (x * TWO_POW_78, 2.0 * TWO_POW_N26)
            } else {
                (x, 2.0)
            }
        };
        let (mut r, slope) = self.cbrt.lookup(x);
        // r approximates cbrt(x / 8)
        let x = x * 0.125;
        r = mlaf(r, mlaf(x, -r * r, r), slope);
        r = mlaf(r, mlaf(x, -r * r, r), slope);
        h * r
    }
}

/// Computes cube root using shared tables
#[inline]
pub fn cbrt(x: f64) -> f64 {
    FastMath::global().cbrt(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_cbrt_random() {
        let mut rng = rand::rng();
        for _ in 0..200000 {
            let x = 10f64.powf(rng.random_range(-300.0..300.0));
            let expected = x.cbrt();
            let r = cbrt(x);
            assert!(((r - expected) / expected).abs() < 1e-11, "cbrt({x}) = {r}");
            assert_eq!(cbrt(-x), -r);
        }
    }

    #[test]
    fn test_special_values() {
        assert_eq!(cbrt(0.0), 0.0);
        assert!(cbrt(-0.0).is_sign_negative());
        assert_eq!(cbrt(f64::INFINITY), f64::INFINITY);
        assert_eq!(cbrt(f64::NEG_INFINITY), f64::NEG_INFINITY);
        assert!(cbrt(f64::NAN).is_nan());
        assert!((cbrt(27.0) - 3.0).abs() < 1e-12);
        assert!((cbrt(-8.0) + 2.0).abs() < 1e-12);
        let tiny = f64::from_bits(7);
        assert!(((cbrt(tiny) - tiny.cbrt()) / tiny.cbrt()).abs() < 1e-11);
        assert!(((cbrt(-tiny) + tiny.cbrt()) / tiny.cbrt()).abs() < 1e-11);
    }
}
