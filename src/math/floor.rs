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
use crate::math::consts::TWO_POW_52;

/// Largest integer value not greater than `x`.
///
/// NaN, infinities and signed zeros are returned unchanged.
#[inline]
pub fn floor(x: f64) -> f64 {
    // From 2^52 up every double is an integer, the comparison also rejects NaN.
    if x == 0.0 || !(x.abs() < TWO_POW_52) {
        return x;
    }
    let t = (x as i64) as f64;
    if t > x { t - 1.0 } else { t }
}

/// Rounds to the nearest integer, halves go towards +Inf.
///
/// `round(-2.5) = -2`, `round(2.5) = 3`. NaN and infinities are returned unchanged.
#[inline]
pub fn round(x: f64) -> f64 {
    let r = floor(x);
    if x - r >= 0.5 { r + 1.0 } else { r }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MathLib, StdMath};
    use rand::Rng;

    #[test]
    fn test_floor_random() {
        let mut rng = rand::rng();
        for _ in 0..100000 {
            let x: f64 = rng.random_range(-1e6..1e6);
            assert_eq!(floor(x), x.floor());
            assert_eq!(round(x), MathLib::round(&StdMath, x));
        }
        for _ in 0..10000 {
            let x = 10f64.powf(rng.random_range(-10.0..20.0));
            assert_eq!(floor(x), x.floor());
            assert_eq!(floor(-x), (-x).floor());
        }
    }

    #[test]
    fn test_round_halves() {
        assert_eq!(round(2.5), 3.0);
        assert_eq!(round(-2.5), -2.0);
        assert_eq!(round(0.5), 1.0);
        assert_eq!(round(-0.5), 0.0);
        assert_eq!(round(0.49999999999999994), 0.0);
        assert_eq!(round(4503599627370497.0), 4503599627370497.0);
        for i in -1000..1000 {
            let x = i as f64 + 0.5;
            assert_eq!(round(x), i as f64 + 1.0, "round({x})");
        }
    }

    #[test]
    fn test_special_values() {
        assert!(floor(-0.0).is_sign_negative());
        assert_eq!(floor(0.3), 0.0);
        assert_eq!(floor(-0.3), -1.0);
        assert_eq!(floor(f64::INFINITY), f64::INFINITY);
        assert_eq!(floor(f64::NEG_INFINITY), f64::NEG_INFINITY);
        assert!(floor(f64::NAN).is_nan());
        assert!(round(-0.0).is_sign_negative());
        assert_eq!(round(f64::INFINITY), f64::INFINITY);
        assert_eq!(round(f64::NEG_INFINITY), f64::NEG_INFINITY);
        assert!(round(f64::NAN).is_nan());
    }
}
