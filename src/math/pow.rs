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
use crate::math::consts::FASTPOW_PIVOT_BITS;
use crate::math::tables::FastMath;

const TWO_POW_53: f64 = f64::from_bits(0x4340_0000_0000_0000);

/// Parity of an exponent: 1 for even integers, -1 for odd integers,
/// 0 when it is not an integer and `None` for NaN.
#[inline]
fn exponent_parity(power: f64) -> Option<i32> {
    if power.is_nan() {
        return None;
    }
    // Every double from 2^53 up is an even integer.
    if power.abs() >= TWO_POW_53 {
        return Some(1);
    }
    let truncated = power as i64;
    if power == truncated as f64 {
        Some(if truncated & 1 == 0 { 1 } else { -1 })
    } else {
        Some(0)
    }
}

impl FastMath {
    /// `value^power` computed as `exp(power * log(value))`.
    ///
    /// Zero and negative bases follow the IEEE 754 pow rules, a negative
    /// finite base with a non integer power gives NaN.
    pub fn pow(&self, value: f64, power: f64) -> f64 {
        if power == 0.0 || value == 1.0 {
            return 1.0;
        }
        if power == 1.0 {
            return value;
        }
        if value <= 0.0 {
            let Some(parity) = exponent_parity(power) else {
                return f64::NAN;
            };
            if value == 0.0 {
                return if power < 0.0 {
                    if parity < 0 { 1.0 / value } else { f64::INFINITY }
                } else if parity < 0 {
                    value
                } else {
                    0.0
                };
            }
            if value == f64::NEG_INFINITY {
                return if parity < 0 {
                    if power < 0.0 { -0.0 } else { f64::NEG_INFINITY }
                } else if power < 0.0 {
                    0.0
                } else {
                    f64::INFINITY
                };
            }
            if parity == 0 {
                return f64::NAN;
            }
            return parity as f64 * self.exp(power * self.log(-value));
        }
        self.exp(power * self.log(value))
    }
}

/// Computes `value^power` using shared tables
#[inline]
pub fn pow(value: f64, power: f64) -> f64 {
    FastMath::global().pow(value, power)
}

/// Integer power by repeated squaring.
pub fn powi(value: f64, n: i32) -> f64 {
    let mut base = value;
    let mut e = n.unsigned_abs();
    let mut acc = 1.0;
    while e > 0 {
        if e & 1 == 1 {
            acc *= base;
        }
        e >>= 1;
        if e > 0 {
            base *= base;
        }
    }
    if n < 0 { 1.0 / acc } else { acc }
}

/// Approximate power by scaling the exponent field, good for previews only.
///
/// Error is not bounded in ULPs, it can reach tens of percent. Only positive
/// finite bases give meaningful results.
#[inline]
pub fn fastpow(value: f64, power: f64) -> f64 {
    let bits = value.to_bits() as i64;
    let scaled = (power * (bits - FASTPOW_PIVOT_BITS) as f64) as i64;
    f64::from_bits(scaled.wrapping_add(FASTPOW_PIVOT_BITS) as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_pow_random() {
        let mut rng = rand::rng();
        for _ in 0..200000 {
            let value: f64 = rng.random_range(0.0..100.0);
            let power: f64 = rng.random_range(-20.0..20.0);
            let expected = value.powf(power);
            if expected == 0.0 || !expected.is_finite() {
                continue;
            }
            let r = pow(value, power);
            assert!(
                ((r - expected) / expected).abs() < 5e-13,
                "pow({value}, {power}) = {r}, expected {expected}"
            );
        }
    }

    #[test]
    fn test_pow_negative_base() {
        assert!((pow(-2.0, 3.0) + 8.0).abs() < 1e-13);
        assert!((pow(-2.0, 4.0) - 16.0).abs() < 1e-13);
        assert!((pow(-2.0, -1.0) + 0.5).abs() < 1e-15);
        assert!(pow(-2.0, 0.5).is_nan());
        assert!(pow(-2.0, f64::NAN).is_nan());
        assert_eq!(pow(-1.5, 1e17), f64::INFINITY);
    }

    #[test]
    fn test_pow_special_values() {
        assert_eq!(pow(f64::NAN, 0.0), 1.0);
        assert_eq!(pow(5.0, -0.0), 1.0);
        assert_eq!(pow(1.0, f64::NAN), 1.0);
        assert_eq!(pow(3.7, 1.0), 3.7);
        assert!(pow(f64::NAN, 2.0).is_nan());
        assert!(pow(2.0, f64::NAN).is_nan());

        assert_eq!(pow(0.0, -3.0), f64::INFINITY);
        assert_eq!(pow(-0.0, -3.0), f64::NEG_INFINITY);
        assert_eq!(pow(-0.0, -2.0), f64::INFINITY);
        assert_eq!(pow(-0.0, -0.5), f64::INFINITY);
        assert!(pow(-0.0, 3.0).is_sign_negative());
        assert_eq!(pow(-0.0, 3.0), 0.0);
        assert!(pow(-0.0, 2.0).is_sign_positive());
        assert_eq!(pow(0.0, 0.5), 0.0);

        assert_eq!(pow(f64::NEG_INFINITY, 3.0), f64::NEG_INFINITY);
        assert!(pow(f64::NEG_INFINITY, -3.0).is_sign_negative());
        assert_eq!(pow(f64::NEG_INFINITY, 2.0), f64::INFINITY);
        assert_eq!(pow(f64::NEG_INFINITY, 0.5), f64::INFINITY);
        assert_eq!(pow(f64::NEG_INFINITY, -2.0), 0.0);

        assert_eq!(pow(f64::INFINITY, 2.0), f64::INFINITY);
        assert_eq!(pow(f64::INFINITY, -2.0), 0.0);
        assert_eq!(pow(2.0, 2000.0), f64::INFINITY);
        assert_eq!(pow(2.0, -2000.0), 0.0);
    }

    #[test]
    fn test_powi() {
        assert_eq!(powi(2.0, 10), 1024.0);
        assert_eq!(powi(2.0, -2), 0.25);
        assert_eq!(powi(-3.0, 3), -27.0);
        assert_eq!(powi(7.0, 0), 1.0);
        assert_eq!(powi(f64::NAN, 0), 1.0);
        assert_eq!(powi(2.0, i32::MIN), 0.0);
        assert_eq!(powi(1.0, i32::MAX), 1.0);
        let mut rng = rand::rng();
        for _ in 0..10000 {
            let value: f64 = rng.random_range(-3.0..3.0);
            let n = rng.random_range(-40..40);
            let expected = value.powi(n);
            assert!(((powi(value, n) - expected) / expected).abs() < 1e-13);
        }
    }

    #[test]
    fn test_fastpow() {
        assert_eq!(fastpow(2.0, 1.0), 2.0);
        for (value, power) in [(2.0, 2.0), (10.0, 0.5), (3.0, 1.5), (0.5, 3.0)] {
            let expected: f64 = f64::powf(value, power);
            assert!(((fastpow(value, power) - expected) / expected).abs() < 0.25);
        }
    }
}
