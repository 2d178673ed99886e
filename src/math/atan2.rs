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
use crate::math::consts::{PI, PI_OVER_2, PI_OVER_4, THREE_PI_OVER_4};
use crate::math::tables::FastMath;

impl FastMath {
    /// Angle of the point `(x, y)`, in `[-pi, pi]`.
    ///
    /// Signed zeros and infinities follow IEEE 754 atan2.
    pub fn atan2(&self, y: f64, x: f64) -> f64 {
        if y.is_nan() || x.is_nan() {
            return f64::NAN;
        }
        if y == 0.0 {
            // (±0, +0) and (±0, x > 0) keep y, (±0, -0) and (±0, x < 0) go to ±pi.
            return if x.is_sign_negative() {
                PI.copysign(y)
            } else {
                y
            };
        }
        if x == 0.0 {
            return PI_OVER_2.copysign(y);
        }
        if x.is_infinite() {
            return match (y.is_infinite(), x > 0.0) {
                (true, true) => PI_OVER_4.copysign(y),
                (true, false) => THREE_PI_OVER_4.copysign(y),
                (false, true) => 0f64.copysign(y),
                (false, false) => PI.copysign(y),
            };
        }
        if x > 0.0 {
            self.atan(y / x)
        } else if y > 0.0 {
            PI_OVER_2 + self.atan(-x / y)
        } else {
            -PI_OVER_2 - self.atan(x / y)
        }
    }
}

/// Computes the four quadrant arctangent of `y / x` using shared tables
#[inline]
pub fn atan2(y: f64, x: f64) -> f64 {
    FastMath::global().atan2(y, x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_atan2_random() {
        let mut rng = rand::rng();
        for _ in 0..200000 {
            let y: f64 = rng.random_range(-100.0..100.0);
            let x: f64 = rng.random_range(-100.0..100.0);
            assert!((atan2(y, x) - y.atan2(x)).abs() < 1e-12, "atan2({y}, {x})");
        }
    }

    #[test]
    fn test_signed_zeros() {
        let r = atan2(0.0, 0.0);
        assert!(r == 0.0 && r.is_sign_positive());
        let r = atan2(-0.0, 0.0);
        assert!(r == 0.0 && r.is_sign_negative());
        assert_eq!(atan2(0.0, -0.0), PI);
        assert_eq!(atan2(-0.0, -0.0), -PI);
        assert_eq!(atan2(0.0, -3.0), PI);
        assert_eq!(atan2(-0.0, -3.0), -PI);
        assert!(atan2(-0.0, 3.0).is_sign_negative());
        assert_eq!(atan2(2.0, 0.0), PI_OVER_2);
        assert_eq!(atan2(-2.0, -0.0), -PI_OVER_2);
    }

    #[test]
    fn test_infinities() {
        let r = atan2(1.0, f64::INFINITY);
        assert!(r == 0.0 && r.is_sign_positive());
        assert!(atan2(-1.0, f64::INFINITY).is_sign_negative());
        assert_eq!(atan2(1.0, f64::NEG_INFINITY), PI);
        assert_eq!(atan2(-1.0, f64::NEG_INFINITY), -PI);
        assert_eq!(atan2(f64::INFINITY, f64::INFINITY), PI_OVER_4);
        assert_eq!(atan2(f64::NEG_INFINITY, f64::NEG_INFINITY), -THREE_PI_OVER_4);
        assert_eq!(atan2(f64::INFINITY, 5.0), PI_OVER_2);
        assert_eq!(atan2(f64::NEG_INFINITY, -5.0), -PI_OVER_2);
        assert!(atan2(f64::NAN, 1.0).is_nan());
        assert!(atan2(1.0, f64::NAN).is_nan());
    }
}
