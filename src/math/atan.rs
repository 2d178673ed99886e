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

/// atan for `x` in `(tan(74deg), 2^66)` from atan(x) = pi/2 - atan(1/x).
#[inline]
fn atan_tail(x: f64) -> f64 {
    let xx = -1.0 / x;
    let x2 = xx * xx;
    let x4 = x2 * x2;
    let mut s1 = mlaf(ATAN_AT[8], x4, ATAN_AT[10]);
    s1 = mlaf(ATAN_AT[6], x4, s1);
    s1 = mlaf(ATAN_AT[4], x4, s1);
    s1 = mlaf(ATAN_AT[2], x4, s1);
    s1 = mlaf(ATAN_AT[0], x4, s1);
    s1 *= x2;
    let mut s2 = mlaf(ATAN_AT[7], x4, ATAN_AT[9]);
    s2 = mlaf(ATAN_AT[5], x4, s2);
    s2 = mlaf(ATAN_AT[3], x4, s2);
    s2 = mlaf(ATAN_AT[1], x4, s2);
    s2 *= x4;
    ATAN_HI3 - ((xx * (s1 + s2) - ATAN_LO3) - xx)
}

impl FastMath {
    /// Arctangent, result is in `[-pi/2, pi/2]`
    pub fn atan(&self, x: f64) -> f64 {
        let negative = x.is_sign_negative();
        let a = x.abs();
        let r = if a == 1.0 {
            PI_OVER_4
        } else if a <= self.atan_grid.max_value_for_tabs {
            let (index, delta) = self.atan_grid.locate(a);
            self.atan.eval(index, delta)
        } else if a < TWO_POW_66 {
            atan_tail(a)
        } else if a.is_nan() {
            return f64::NAN;
        } else {
            PI_OVER_2
        };
        if negative { -r } else { r }
    }
}

/// Computes arctangent using shared tables
#[inline]
pub fn atan(x: f64) -> f64 {
    FastMath::global().atan(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_atan_random() {
        let mut rng = rand::rng();
        for _ in 0..200000 {
            let x: f64 = rng.random_range(-20.0..20.0);
            assert!((atan(x) - x.atan()).abs() < 1e-12, "atan({x})");
        }
        for _ in 0..20000 {
            let x = 10f64.powf(rng.random_range(-300.0..300.0));
            assert!((atan(x) - x.atan()).abs() < 1e-12, "atan({x})");
            assert!((atan(-x) + x.atan()).abs() < 1e-12, "atan({x})");
        }
    }

    #[test]
    fn test_table_boundaries() {
        let edge = FastMath::global().atan_grid.max_value_for_tabs;
        let below = f64::from_bits(edge.to_bits() - 1);
        let above = f64::from_bits(edge.to_bits() + 1);
        for x in [below, edge, above] {
            assert!((atan(x) - x.atan()).abs() < 1e-15, "atan({x})");
            assert_eq!(atan(-x), -atan(x));
        }
        let below = f64::from_bits(TWO_POW_66.to_bits() - 1);
        let above = f64::from_bits(TWO_POW_66.to_bits() + 1);
        for x in [below, TWO_POW_66, above] {
            assert_eq!(atan(x), PI_OVER_2, "atan({x})");
            assert_eq!(atan(-x), -PI_OVER_2, "atan({x})");
        }
    }

    #[test]
    fn test_special_values() {
        assert_eq!(atan(1.0), PI_OVER_4);
        assert_eq!(atan(-1.0), -PI_OVER_4);
        assert_eq!(atan(0.0), 0.0);
        assert!(atan(-0.0).is_sign_negative());
        assert_eq!(atan(f64::INFINITY), PI_OVER_2);
        assert_eq!(atan(f64::NEG_INFINITY), -PI_OVER_2);
        assert_eq!(atan(1e300), PI_OVER_2);
        assert!(atan(f64::NAN).is_nan());
        assert!(atan(-f64::NAN).is_nan());
    }
}
