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
use crate::math::bits::two_pow;
use crate::math::consts::{
    INV_TWO_PI, NORMALIZE_ANGLE_MAX_MEDIUM_DOUBLE, ONE_OVER_TWO_PI_CHUNKS, TWO_PI_CHUNKS,
    TWO_PI_HI, TWO_PI_LO, TWO_POW_24, TWO_POW_N24,
};

#[inline(always)]
fn one_over_two_pi_chunk(index: i32) -> f64 {
    if index >= 0 {
        ONE_OVER_TWO_PI_CHUNKS[index as usize]
    } else {
        0.0
    }
}

/// Splits `q`, most significant term first, into base 2^24 digits.
/// `digits[0]` receives the least significant one, the carried leading term is returned.
#[inline]
fn distill(q: &[f64], digits: &mut [i32]) -> f64 {
    let Some((&last, rest)) = q.split_last() else {
        return 0.0;
    };
    let mut z = last;
    for (digit, &term) in digits.iter_mut().zip(rest.iter().rev()) {
        let fw = ((TWO_POW_N24 * z) as i32) as f64;
        *digit = (z - TWO_POW_24 * fw) as i32;
        z = term + fw;
    }
    z
}

#[inline]
fn fraction(z: f64, two_q0: f64) -> f64 {
    let frac = (z * two_q0) % 8.0;
    frac - (frac as i32) as f64
}

/// Masks the leading digit down to the fraction bits and returns the rounding
/// state: 0 keeps the value, anything positive means it has to be taken from one.
#[inline]
fn rounding_state(top: &mut i32, q0: i32, frac: f64) -> i32 {
    if q0 > 0 {
        *top &= 0xffffff >> q0;
        *top >> (23 - q0)
    } else if q0 == 0 {
        *top >> 23
    } else if frac >= 0.5 {
        2
    } else {
        0
    }
}

/// Replaces digits, least significant first, with `2^(24 * n) - digits`.
/// Returns whether any digit was non zero.
#[inline]
fn complement(digits: &mut [i32], q0: i32) -> bool {
    let mut carry = false;
    for digit in digits.iter_mut() {
        if carry {
            *digit = 0xffffff - *digit;
        } else if *digit != 0 {
            carry = true;
            *digit = 0x1000000 - *digit;
        }
    }
    if let Some(top) = digits.last_mut() {
        match q0 {
            1 => *top &= 0x7fffff,
            2 => *top &= 0x3fffff,
            _ => {}
        }
    }
    carry
}

/// Payne-Hanek reduction, `limbs` are the 24 bit chunks of the angle scaled by `2^-e0`.
fn reduce_by_chunks(limbs: &[f64], e0: i32) -> f64 {
    let jv = (e0 - 3) / 24;
    let q0 = e0 - 24 * (jv + 1);

    let mut q = [0f64; 6];
    for (k, term) in q.iter_mut().enumerate() {
        *term = limbs.iter().enumerate().fold(0.0, |acc, (j, &limb)| {
            acc + limb * one_over_two_pi_chunk(jv + k as i32 - j as i32)
        });
    }

    let two_q0 = two_pow(q0);
    let mut digits = [0i32; 5];
    let z = distill(&q[..5], &mut digits[..4]);
    let mut frac = fraction(z, two_q0);
    let mut state = rounding_state(&mut digits[3], q0, frac);
    if state > 0 {
        let carry = complement(&mut digits[..4], q0);
        if state == 2 {
            frac = 1.0 - frac;
            if carry {
                frac -= two_q0;
            }
        }
    }

    let (top, mut weight) = if frac == 0.0 {
        // Every digit cancelled, one more chunk of 1/(2pi) is needed.
        let z = distill(&q, &mut digits);
        let frac = fraction(z, two_q0);
        state = rounding_state(&mut digits[4], q0, frac);
        if state > 0 {
            complement(&mut digits, q0);
        }
        (digits[4], two_q0 * TWO_POW_N24)
    } else {
        ((frac / two_q0) as i32, two_q0)
    };

    let mut f = [0f64; 5];
    f[0] = weight * top as f64;
    for (fk, &digit) in f[1..].iter_mut().zip(digits[..4].iter().rev()) {
        weight *= TWO_POW_N24;
        *fk = weight * digit as f64;
    }

    let r = (0..f.len()).fold(0.0, |acc, k| {
        acc + (0..=k).fold(0.0, |s, i| s + TWO_PI_CHUNKS[i] * f[k - i])
    });
    if state == 0 { r } else { -r }
}

/// Remainder of `angle` modulo 2pi, result is in about `[-pi, pi]`.
///
/// Magnitudes up to `2^20 * 2pi` take a two-constant subtraction, anything larger
/// is reduced exactly against 1128 bits of 1/(2pi). NaN and infinities give NaN.
pub fn remainder_two_pi(angle: f64) -> f64 {
    let negative = angle < 0.0;
    let angle = angle.abs();
    if angle <= NORMALIZE_ANGLE_MAX_MEDIUM_DOUBLE {
        let n = ((angle * INV_TWO_PI + 0.5) as i32) as f64;
        let r = angle - n * TWO_PI_HI - n * TWO_PI_LO;
        return if negative { -r } else { r };
    }
    if !angle.is_finite() {
        return f64::NAN;
    }
    let bits = angle.to_bits() as i64;
    let e0 = ((bits >> 52) & 0x7ff) - 1046;
    // Scaled into [2^23, 2^24) so the leading chunk is an integer.
    let scaled = f64::from_bits((bits - (e0 << 52)) as u64);
    let x0 = (scaled as i32) as f64;
    let t = (scaled - x0) * TWO_POW_24;
    let x1 = (t as i32) as f64;
    let x2 = (t - x1) * TWO_POW_24;
    let limbs = [x0, x1, x2];
    let used = if x2 == 0.0 { 2 } else { 3 };
    let r = reduce_by_chunks(&limbs[..used], e0 as i32);
    if negative { -r } else { r }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_medium_range() {
        for &x in &[0.0, 1.0, 3.0, 7.0, 100.0, 12345.678, 6.5e6] {
            let r = remainder_two_pi(x);
            assert!(r.abs() <= std::f64::consts::PI + 1e-9, "{x} -> {r}");
            assert!((r.sin() - x.sin()).abs() < 1e-9, "{x} -> {r}");
            assert!((r.cos() - x.cos()).abs() < 1e-9, "{x} -> {r}");
            assert_eq!(remainder_two_pi(-x), -r);
        }
    }

    #[test]
    fn test_huge_arguments() {
        // sin(1e22) = -0.8522008497671888
        let r = remainder_two_pi(1e22);
        assert!((r.sin() + 0.8522008497671888).abs() < 1e-14, "{r}");
        let mut rng = rand::rng();
        for _ in 0..20000 {
            let x = 10f64.powf(rng.random_range(7.0..300.0));
            let r = remainder_two_pi(x);
            assert!(r.abs() <= std::f64::consts::PI + 1e-9, "{x} -> {r}");
            assert!((r.sin() - x.sin()).abs() < 1e-12, "{x} -> {r}");
            assert!((r.cos() - x.cos()).abs() < 1e-12, "{x} -> {r}");
            assert_eq!(remainder_two_pi(-x), -r);
        }
        assert!((remainder_two_pi(f64::MAX).sin() - f64::MAX.sin()).abs() < 1e-12);
    }

    #[test]
    fn test_non_finite() {
        assert!(remainder_two_pi(f64::NAN).is_nan());
        assert!(remainder_two_pi(f64::INFINITY).is_nan());
        assert!(remainder_two_pi(f64::NEG_INFINITY).is_nan());
    }

    #[test]
    fn test_complement() {
        let mut digits = [0, 5, 7];
        assert!(complement(&mut digits, 0));
        assert_eq!(digits, [0, 0x1000000 - 5, 0xffffff - 7]);
        let mut zeros = [0, 0];
        assert!(!complement(&mut zeros, 0));
        assert_eq!(zeros, [0, 0]);
    }
}
