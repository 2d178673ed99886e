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
use crate::math::tables::FastMath;
use crate::mlaf::mlaf;

/// Inputs below 2^-768 are scaled by 2^256 so the residual terms stay normal.
const SCALE_THRESHOLD: f64 = f64::from_bits(0x0ff0_0000_0000_0000);
const TWO_POW_256: f64 = f64::from_bits(0x4ff0_0000_0000_0000);
const TWO_POW_N128: f64 = f64::from_bits(0x37f0_0000_0000_0000);
/// 2^27 + 1, Veltkamp splitter
const SPLITTER: f64 = 134217729.0;

/// `x - y * y` with `y * y` taken exactly, `y^2` must be within a factor of two of `x`.
#[inline(always)]
fn square_residual(x: f64, y: f64) -> f64 {
    let p = y * y;
    let t = SPLITTER * y;
    let hi = t - (t - y);
    let lo = y - hi;
    let err = ((hi * hi - p) + 2.0 * hi * lo) + lo * lo;
    (x - p) - err
}

impl FastMath {
    /// Square root from a table seed refined by Newton steps.
    ///
    /// The last step takes an exact residual, so the result matches the IEEE
    /// square root barring inputs within 2^-100 of a rounding midpoint.
    /// Zeros are returned as is, negative values and NaN give NaN.
    pub fn sqrt(&self, x: f64) -> f64 {
        if !(x > 0.0) {
            return if x == 0.0 { x } else { f64::NAN };
        }
        if x == f64::INFINITY {
            return f64::INFINITY;
        }
        let (x, factor) = if x < SCALE_THRESHOLD {
            (x * TWO_POW_256, 2.0 * TWO_POW_N128)
        } else {
            (x, 2.0)
        };
        let (mut y, slope) = self.sqrt.lookup(x);
        // y approximates sqrt(x / 4)
        let x = x * 0.25;
        y = mlaf(y, mlaf(x, -y, y), slope);
        y = mlaf(y, mlaf(x, -y, y), slope);
        y = mlaf(y, mlaf(x, -y, y), slope);
        factor * mlaf(y, square_residual(x, y), 0.5 / y)
    }
}

/// Computes square root using shared tables
#[inline]
pub fn sqrt(x: f64) -> f64 {
    FastMath::global().sqrt(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_sqrt_random() {
        let mut rng = rand::rng();
        for _ in 0..200000 {
            let x = 10f64.powf(rng.random_range(-300.0..300.0));
            let r = sqrt(x);
            let expected = x.sqrt();
            assert_eq!(r, expected, "sqrt({x})");
            assert!(((r * r - x) / x).abs() < 1e-14, "sqrt({x})^2");
        }
    }

    #[test]
    fn test_sqrt_subnormal() {
        for x in [
            f64::from_bits(1),
            f64::from_bits(12345),
            f64::MIN_POSITIVE * 0.3,
            f64::MIN_POSITIVE * 3.7,
            SCALE_THRESHOLD,
        ] {
            assert_eq!(sqrt(x), x.sqrt(), "sqrt({x})");
        }
        assert_eq!(sqrt(f64::from_bits(1)), f64::from_bits(0x1e60_0000_0000_0000));
    }

    #[test]
    fn test_sqrt_matches_ieee() {
        let mut rng = rand::rng();
        for _ in 0..200000 {
            let x = f64::from_bits(rng.random_range(1u64..0x7ff0_0000_0000_0000));
            assert_eq!(sqrt(x), x.sqrt(), "sqrt({x})");
        }
    }

    #[test]
    fn test_bucket_edges() {
        let bits = FastMath::global().options().sqrt_bits;
        for exponent in [1023u64, 1024, 1, 40, 1500, 2046] {
            for bucket in 1..1u64 << bits {
                let edge = f64::from_bits((exponent << 52) | (bucket << (52 - bits)));
                let below = f64::from_bits(edge.to_bits() - 1);
                assert!(sqrt(below) <= sqrt(edge), "sqrt decreases at {edge}");
                assert_eq!(sqrt(edge), edge.sqrt(), "sqrt({edge})");
            }
        }
    }

    #[test]
    fn test_special_values() {
        assert_eq!(sqrt(0.0), 0.0);
        assert!(sqrt(-0.0).is_sign_negative());
        assert_eq!(sqrt(f64::INFINITY), f64::INFINITY);
        assert!(sqrt(-1.0).is_nan());
        assert!(sqrt(f64::NEG_INFINITY).is_nan());
        assert!(sqrt(f64::NAN).is_nan());
        assert_eq!(sqrt(4.0), 2.0);
        assert_eq!(sqrt(1.0), 1.0);
    }
}
