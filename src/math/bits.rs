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
/// Smallest binary exponent of a non-zero double, `2^-1074` being the least subnormal.
pub(crate) const MIN_DOUBLE_EXPONENT: i32 = -1074;
/// Largest binary exponent of a finite double.
pub(crate) const MAX_DOUBLE_EXPONENT: i32 = 1023;
/// Amount of representable powers of two, `2^-1074..=2^1023`.
pub(crate) const TWO_POW_TABLE_LEN: usize = (MAX_DOUBLE_EXPONENT - MIN_DOUBLE_EXPONENT + 1) as usize;

pub(crate) const EXP_BIAS: i32 = 1023;
pub(crate) const MANTISSA_BITS: u32 = 52;

/// Upper 32 bits of the IEEE-754 pattern, sign included.
///
/// This is a pure type pun, no numeric conversion happens.
#[inline(always)]
pub(crate) const fn high_word(x: f64) -> i32 {
    (x.to_bits() >> 32) as i32
}

/// Biased exponent field of a non-negative double taken from its high word.
#[inline(always)]
pub(crate) const fn biased_exponent(high_word: i32) -> i32 {
    high_word >> 20
}

/// Top `bits` of the mantissa taken from the high word, `bits` must be in `1..=20`.
#[inline(always)]
pub(crate) const fn top_mantissa_bits(high_word: i32, bits: u32) -> usize {
    (((high_word as u32) << 12) >> (32 - bits)) as usize
}

/// Exact `2^k` for every `k` in `-1074..=1023`, subnormals included.
#[inline]
pub(crate) const fn two_pow(k: i32) -> f64 {
    if k >= 1 - EXP_BIAS {
        f64::from_bits(((k + EXP_BIAS) as u64) << MANTISSA_BITS)
    } else {
        f64::from_bits(1u64 << (k - MIN_DOUBLE_EXPONENT) as u64)
    }
}

/// Double whose mantissa is `1.b` where the first `bits` of `b` are `index` and
/// every following bit is set, i.e. the top of the `index`-th mantissa bucket.
#[inline]
pub(crate) const fn mantissa_bucket_top(index: u64, bits: u32) -> f64 {
    const ONE: u64 = 0x3ff0_0000_0000_0000;
    const MANTISSA_MASK: u64 = (1u64 << MANTISSA_BITS) - 1;
    f64::from_bits(ONE | (MANTISSA_MASK >> bits) | (index << (MANTISSA_BITS - bits)))
}

/// Clears every mantissa bit below the top `bits`, giving the start of the bucket `x` falls in.
#[inline(always)]
pub(crate) const fn bucket_floor(x: f64, bits: u32) -> f64 {
    f64::from_bits(x.to_bits() & !((1u64 << (MANTISSA_BITS - bits)) - 1))
}
