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
use crate::err::FastMathError;
use crate::math::bits::{
    EXP_BIAS, MIN_DOUBLE_EXPONENT, TWO_POW_TABLE_LEN, biased_exponent, high_word,
    mantissa_bucket_top, top_mantissa_bits, two_pow,
};
use crate::math::consts::*;
use crate::mlaf::mlaf;
use crate::options::FastMathOptions;
use pxfm::{f_asin, f_atan, f_cbrt, f_cos, f_exp, f_expm1, f_log, f_sin, f_tan};
use std::fmt::{Debug, Formatter};
use std::sync::LazyLock;

/// Largest index the periodic evaluators compute before masking, keeps `x * indexer` in `i32`.
const MAX_INT_MODULO_INDEX: f64 = 4194303.0;

/// Function samples over an even grid, each entry holds `f, f'/1!, f''/2!, f'''/3!, f''''/4!`
/// taken at the sample point.
#[derive(Clone)]
pub(crate) struct SampleTable {
    pub(crate) coeffs: Vec<[f64; 5]>,
}

impl SampleTable {
    fn build(len: usize, sample: impl FnMut(usize) -> [f64; 5]) -> SampleTable {
        SampleTable {
            coeffs: (0..len).map(sample).collect(),
        }
    }

    #[inline(always)]
    pub(crate) fn len(&self) -> usize {
        self.coeffs.len()
    }

    /// Degree 4 Taylor expansion around sample `index`, `delta` is the offset from it.
    #[inline(always)]
    pub(crate) fn eval(&self, index: usize, delta: f64) -> f64 {
        let c = &self.coeffs[index];
        let mut p = mlaf(c[3], delta, c[4]);
        p = mlaf(c[2], delta, p);
        p = mlaf(c[1], delta, p);
        mlaf(c[0], delta, p)
    }
}

/// Sampling grid over an angle, the step is kept as hi + lo so that
/// `index * step` stays exact for every index below [MAX_INT_MODULO_INDEX].
#[derive(Copy, Clone, Debug)]
pub(crate) struct AngleGrid {
    pub(crate) delta_hi: f64,
    pub(crate) delta_lo: f64,
    pub(crate) indexer: f64,
    /// Above this value an angle has to be reduced modulo 2pi before indexing.
    pub(crate) max_value_for_int_modulo: f64,
}

impl AngleGrid {
    fn new(span_hi: f64, span_lo: f64, steps: usize) -> AngleGrid {
        let delta_hi = span_hi / steps as f64;
        let delta_lo = span_lo / steps as f64;
        let indexer = 1.0 / (delta_hi + delta_lo);
        AngleGrid {
            delta_hi,
            delta_lo,
            indexer,
            max_value_for_int_modulo: MAX_INT_MODULO_INDEX / indexer * 0.99,
        }
    }

    #[inline(always)]
    fn angle(&self, index: usize) -> f64 {
        index as f64 * self.delta_hi + index as f64 * self.delta_lo
    }

    /// Nearest grid index and the signed offset of `x` from it.
    #[inline(always)]
    pub(crate) fn locate(&self, x: f64) -> (i32, f64) {
        let index = (x * self.indexer + 0.5) as i32;
        let delta = x - index as f64 * self.delta_hi - index as f64 * self.delta_lo;
        (index, delta)
    }
}

/// Even grid over `[0, max_value_for_tabs]`.
#[derive(Copy, Clone, Debug)]
pub(crate) struct ValueGrid {
    pub(crate) delta: f64,
    pub(crate) indexer: f64,
    pub(crate) max_value_for_tabs: f64,
}

impl ValueGrid {
    fn new(max_value_for_tabs: f64, steps: usize) -> ValueGrid {
        let delta = max_value_for_tabs / steps as f64;
        ValueGrid {
            delta,
            indexer: 1.0 / delta,
            max_value_for_tabs,
        }
    }

    #[inline(always)]
    pub(crate) fn locate(&self, x: f64) -> (usize, f64) {
        let index = (x * self.indexer + 0.5) as usize;
        (index, x - index as f64 * self.delta)
    }
}

/// Starting approximation of a root, addressed by the exponent and the top mantissa bits.
///
/// Both parts hold `[value, slope]`, the product of the exponent entry and the
/// mantissa entry gives the approximation and the Newton slope for it.
#[derive(Clone)]
pub(crate) struct RootTable {
    pub(crate) mantissa_bits: u32,
    pub(crate) by_exponent: Vec<[f64; 2]>,
    pub(crate) by_mantissa: Vec<[f64; 2]>,
}

impl RootTable {
    fn build(
        mantissa_bits: u32,
        exponent_entry: impl Fn(f64) -> [f64; 2],
        mantissa_entry: impl Fn(f64) -> [f64; 2],
    ) -> RootTable {
        let by_exponent = (0..TWO_POW_TABLE_LEN)
            .map(|i| exponent_entry(two_pow(i as i32 + MIN_DOUBLE_EXPONENT)))
            .collect();
        let by_mantissa = (0..1usize << mantissa_bits)
            .map(|i| {
                if i == 0 {
                    [1.0, 1.0]
                } else {
                    mantissa_entry(mantissa_bucket_top(i as u64 - 1, mantissa_bits))
                }
            })
            .collect();
        RootTable {
            mantissa_bits,
            by_exponent,
            by_mantissa,
        }
    }

    /// Returns `(approximation, slope)` for a positive normal `x`.
    #[inline(always)]
    pub(crate) fn lookup(&self, x: f64) -> (f64, f64) {
        let hw = high_word(x);
        let e = (biased_exponent(hw) - EXP_BIAS - MIN_DOUBLE_EXPONENT) as usize;
        let m = top_mantissa_bits(hw, self.mantissa_bits);
        let hi = self.by_exponent[e];
        let lo = self.by_mantissa[m];
        (hi[0] * lo[0], hi[1] * lo[1])
    }

    fn bytes(&self) -> usize {
        (self.by_exponent.len() + self.by_mantissa.len()) * size_of::<[f64; 2]>()
    }
}

/// Tables of the exponential.
#[derive(Clone)]
pub(crate) struct ExpTables {
    /// `e^k` for `k` in `0..=709`
    pub(crate) hi: Vec<f64>,
    /// `e^-k` for `k` in `0..=745`, scaled by `2^54` after `k = 705`
    pub(crate) hi_inv: Vec<f64>,
    /// `e^z` for `z = -1 + i / indexing`
    pub(crate) lo_pos: Vec<f64>,
    /// `1 - e^-z` on the same grid
    pub(crate) lo_neg: Vec<f64>,
    pub(crate) mid_index: i32,
    pub(crate) indexing: i32,
    pub(crate) indexing_div_shift: u32,
}

impl ExpTables {
    fn build(power: u32) -> ExpTables {
        let lo_len = (1usize << power) + 1;
        let mid_index = ((lo_len - 1) / 2) as i32;
        let indexing = mid_index;
        let lo_points = (0..lo_len)
            .map(|i| -1.0 + i as f64 / indexing as f64)
            .collect::<Vec<f64>>();
        let hi = (0..=EXP_OVERFLOW_LIMIT as usize)
            .map(|k| f_exp(k as f64))
            .collect();
        let hi_inv = (0..=(-EXP_UNDERFLOW_LIMIT) as usize)
            .map(|k| {
                if -(k as i32) >= EXP_MIN_INT_LIMIT {
                    f_exp(-(k as f64))
                } else {
                    // (e^(-k/2) * 2^27)^2 = e^-k * 2^54 stays normal
                    let half = f_exp(-0.5 * k as f64) * TWO_POW_27;
                    half * half
                }
            })
            .collect();
        ExpTables {
            hi,
            hi_inv,
            lo_pos: lo_points.iter().map(|&z| f_exp(z)).collect(),
            lo_neg: lo_points.iter().map(|&z| -f_expm1(-z)).collect(),
            mid_index,
            indexing,
            indexing_div_shift: power - 1,
        }
    }

    fn bytes(&self) -> usize {
        (self.hi.len() + self.hi_inv.len() + self.lo_pos.len() + self.lo_neg.len())
            * size_of::<f64>()
    }
}

/// Process-wide immutable context holding every lookup table.
///
/// Tables are computed once from correctly rounded reference functions, so two
/// contexts built from the same options are bit-identical on every platform.
/// After construction nothing is ever mutated, the context is freely shared
/// between render threads.
#[derive(Clone)]
pub struct FastMath {
    pub(crate) options: FastMathOptions,
    /// `[sin, cos]` over `[0, 2pi]`
    pub(crate) sin_cos: Vec<[f64; 2]>,
    pub(crate) sin_cos_grid: AngleGrid,
    pub(crate) tan: SampleTable,
    /// Samples of the virtual table covering `[0, pi/2]`, the stored one stops at 77 degrees.
    pub(crate) tan_virtual_len: usize,
    pub(crate) tan_grid: AngleGrid,
    pub(crate) asin: SampleTable,
    pub(crate) asin_grid: ValueGrid,
    pub(crate) atan: SampleTable,
    pub(crate) atan_grid: ValueGrid,
    pub(crate) exp: ExpTables,
    /// `[ln(m), 1/m]` for `m = 1 + i / 2^log_bits`
    pub(crate) log: Vec<[f64; 2]>,
    /// `2^k` for `k` in `-1074..=1023`
    pub(crate) two_pow: Vec<f64>,
    pub(crate) sqrt: RootTable,
    pub(crate) cbrt: RootTable,
}

static GLOBAL: LazyLock<FastMath> = LazyLock::new(FastMath::default);

impl FastMath {
    /// Builds tables with the requested resolution
    pub fn new(options: FastMathOptions) -> Result<FastMath, FastMathError> {
        options.validate()?;
        Ok(FastMath::build(options))
    }

    /// Shared context with the default resolution, built on first access
    #[inline]
    pub fn global() -> &'static FastMath {
        &GLOBAL
    }

    pub fn options(&self) -> FastMathOptions {
        self.options
    }

    /// Memory held by the tables, in bytes
    pub fn table_bytes(&self) -> usize {
        let sampled = (self.tan.len() + self.asin.len() + self.atan.len()) * size_of::<[f64; 5]>();
        sampled
            + self.sin_cos.len() * size_of::<[f64; 2]>()
            + self.log.len() * size_of::<[f64; 2]>()
            + self.two_pow.len() * size_of::<f64>()
            + self.exp.bytes()
            + self.sqrt.bytes()
            + self.cbrt.bytes()
    }

    fn build(options: FastMathOptions) -> FastMath {
        let sin_cos_steps = 1usize << options.sin_cos_table_power;
        let sin_cos_grid = AngleGrid::new(TWO_PI_HI, TWO_PI_LO, sin_cos_steps);
        let half = sin_cos_steps / 2;
        let quarter = half / 2;
        let sin_cos = (0..=sin_cos_steps)
            .map(|i| {
                let angle = sin_cos_grid.angle(i);
                // Exact zeros where they belong.
                let sin = if i == half || i == sin_cos_steps {
                    0.0
                } else {
                    f_sin(angle)
                };
                let cos = if i == quarter || i == half + quarter {
                    0.0
                } else {
                    f_cos(angle)
                };
                [sin, cos]
            })
            .collect();

        let tan_steps = 1usize << options.tan_table_power;
        let tan_grid = AngleGrid::new(PIO2_HI, PIO2_LO, tan_steps);
        let tan_max_value_for_tabs = 77f64.to_radians();
        let tan_len = (tan_max_value_for_tabs / PI_OVER_2 * tan_steps as f64) as usize + 1;
        let tan = SampleTable::build(tan_len, |i| {
            let x = tan_grid.angle(i);
            let c = f_cos(x);
            let s = f_sin(x);
            let sec = 1.0 / c;
            let sec2 = sec * sec;
            let sec3 = sec2 * sec;
            let sec4 = sec2 * sec2;
            let sec5 = sec3 * sec2;
            [
                f_tan(x),
                sec2,
                2.0 * s * sec3 * ONE_DIV_F2,
                2.0 * (1.0 + 2.0 * s * s) * sec4 * ONE_DIV_F3,
                8.0 * s * (2.0 + s * s) * sec5 * ONE_DIV_F4,
            ]
        });

        let asin_steps = 1usize << options.asin_table_power;
        let asin_grid = ValueGrid::new(f_sin(73f64.to_radians()), asin_steps);
        let asin = SampleTable::build(asin_steps + 1, |i| {
            let x = i as f64 * asin_grid.delta;
            let one_minus_x2_inv = 1.0 / (1.0 - x * x);
            let d1 = one_minus_x2_inv.sqrt();
            let d2 = d1 * one_minus_x2_inv;
            let d3 = d2 * one_minus_x2_inv;
            let d4 = d3 * one_minus_x2_inv;
            [
                f_asin(x),
                d1,
                x * d2 * ONE_DIV_F2,
                (1.0 + 2.0 * x * x) * d3 * ONE_DIV_F3,
                3.0 * x * (3.0 + 2.0 * x * x) * d4 * ONE_DIV_F4,
            ]
        });

        let atan_steps = 1usize << options.atan_table_power;
        let atan_grid = ValueGrid::new(f_tan(74f64.to_radians()), atan_steps);
        let atan = SampleTable::build(atan_steps + 1, |i| {
            let x = i as f64 * atan_grid.delta;
            let one_plus_x2_inv = 1.0 / (1.0 + x * x);
            let d2 = one_plus_x2_inv * one_plus_x2_inv;
            let d3 = d2 * one_plus_x2_inv;
            let d4 = d2 * d2;
            [
                f_atan(x),
                one_plus_x2_inv,
                -2.0 * x * d2 * ONE_DIV_F2,
                (-2.0 + 6.0 * x * x) * d3 * ONE_DIV_F3,
                24.0 * x * (1.0 - x * x) * d4 * ONE_DIV_F4,
            ]
        });

        let log_len = 1usize << options.log_bits;
        let log = (0..log_len)
            .map(|i| {
                let m = 1.0 + i as f64 / log_len as f64;
                [f_log(m), 1.0 / m]
            })
            .collect();

        let two_pow = (0..TWO_POW_TABLE_LEN)
            .map(|i| two_pow(i as i32 + MIN_DOUBLE_EXPONENT))
            .collect();

        let sqrt = RootTable::build(
            options.sqrt_bits,
            |p| {
                let r = p.sqrt();
                [r * 0.5, 1.0 / r]
            },
            |m| {
                let r = m.sqrt();
                [r, 1.0 / r]
            },
        );

        let cbrt = RootTable::build(
            options.cbrt_bits,
            |p| {
                let r = f_cbrt(p);
                let inv = 1.0 / r;
                [r * 0.5, 4.0 / 3.0 * inv * inv]
            },
            |m| {
                let r = f_cbrt(m);
                [r, 1.0 / (r * r)]
            },
        );

        FastMath {
            options,
            sin_cos,
            sin_cos_grid,
            tan,
            tan_virtual_len: tan_steps + 1,
            tan_grid,
            asin,
            asin_grid,
            atan,
            atan_grid,
            exp: ExpTables::build(options.exp_table_power),
            log,
            two_pow,
            sqrt,
            cbrt,
        }
    }
}

impl Default for FastMath {
    fn default() -> Self {
        FastMath::build(FastMathOptions::default())
    }
}

impl Debug for FastMath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FastMath")
            .field("options", &self.options)
            .field("sin_cos_len", &self.sin_cos.len())
            .field("tan_len", &self.tan.len())
            .field("tan_virtual_len", &self.tan_virtual_len)
            .field("asin_len", &self.asin.len())
            .field("atan_len", &self.atan.len())
            .field("exp_lo_len", &self.exp.lo_pos.len())
            .field("log_len", &self.log.len())
            .field("table_bytes", &self.table_bytes())
            .finish()
    }
}

/// Builds the shared tables now instead of on first use.
///
/// Hosts may call it before spawning worker threads so that no render thread
/// pays for the table construction.
pub fn init() {
    LazyLock::force(&GLOBAL);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits_of(t: &FastMath) -> Vec<u64> {
        let mut out = Vec::new();
        out.extend(t.sin_cos.iter().flatten().map(|v| v.to_bits()));
        for table in [&t.tan, &t.asin, &t.atan] {
            out.extend(table.coeffs.iter().flatten().map(|v| v.to_bits()));
        }
        for table in [&t.exp.hi, &t.exp.hi_inv, &t.exp.lo_pos, &t.exp.lo_neg, &t.two_pow] {
            out.extend(table.iter().map(|v| v.to_bits()));
        }
        out.extend(t.log.iter().flatten().map(|v| v.to_bits()));
        for table in [&t.sqrt, &t.cbrt] {
            out.extend(table.by_exponent.iter().flatten().map(|v| v.to_bits()));
            out.extend(table.by_mantissa.iter().flatten().map(|v| v.to_bits()));
        }
        out
    }

    #[test]
    fn test_deterministic() {
        let a = FastMath::default();
        let b = FastMath::new(FastMathOptions::default()).unwrap();
        assert_eq!(bits_of(&a), bits_of(&b));
        assert_eq!(bits_of(&a), bits_of(FastMath::global()));
    }

    #[test]
    fn test_default_sizes() {
        let t = FastMath::default();
        assert_eq!(t.sin_cos.len(), 2049);
        assert_eq!(t.tan_virtual_len, 4097);
        assert_eq!(t.tan.len(), 3505);
        assert_eq!(t.asin.len(), 8193);
        assert_eq!(t.atan.len(), 4097);
        assert_eq!(t.exp.lo_pos.len(), 2049);
        assert_eq!(t.exp.mid_index, 1024);
        assert_eq!(t.exp.indexing_div_shift, 10);
        assert_eq!(t.exp.hi.len(), 710);
        assert_eq!(t.exp.hi_inv.len(), 746);
        assert_eq!(t.log.len(), 4096);
        assert_eq!(t.two_pow.len(), 2098);
        assert_eq!(t.sqrt.by_exponent.len(), 2098);
        assert_eq!(t.cbrt.by_mantissa.len(), 4096);
    }

    #[test]
    fn test_sin_cos_exact_points() {
        let t = FastMath::default();
        assert_eq!(t.sin_cos[0], [0.0, 1.0]);
        assert_eq!(t.sin_cos[512][1], 0.0);
        assert_eq!(t.sin_cos[1024][0], 0.0);
        assert_eq!(t.sin_cos[1536][1], 0.0);
        assert_eq!(t.sin_cos[2048][0], 0.0);
        assert_eq!(t.sin_cos[512][0], 1.0);
        assert_eq!(t.sin_cos[1024][1], -1.0);
    }

    #[test]
    fn test_sample_table_matches_reference() {
        let t = FastMath::default();
        for i in (0..t.atan.len()).step_by(37) {
            let x = i as f64 * t.atan_grid.delta;
            assert!((t.atan.eval(i, 0.0) - x.atan()).abs() < 1e-15);
            let h = t.atan_grid.delta * 0.5;
            assert!((t.atan.eval(i, h) - (x + h).atan()).abs() < 1e-14);
        }
        for i in (0..t.asin.len()).step_by(41) {
            let x = i as f64 * t.asin_grid.delta;
            let h = -t.asin_grid.delta * 0.5;
            assert!((t.asin.eval(i, h) - (x + h).asin()).abs() < 1e-14, "asin at {x}");
        }
        for i in (1..t.tan.len()).step_by(29) {
            let x = t.tan_grid.angle(i);
            let h = t.tan_grid.delta_hi * 0.5;
            let expected = (x + h).tan();
            assert!(((t.tan.eval(i, h) - expected) / expected).abs() < 1e-14, "tan at {x}");
        }
    }

    #[test]
    fn test_custom_options() {
        let options = FastMathOptions {
            sin_cos_table_power: 8,
            tan_table_power: 8,
            asin_table_power: 8,
            atan_table_power: 8,
            exp_table_power: 6,
            log_bits: 6,
            sqrt_bits: 6,
            cbrt_bits: 6,
        };
        let t = FastMath::new(options).unwrap();
        assert_eq!(t.options(), options);
        assert_eq!(t.sin_cos.len(), 257);
        assert_eq!(t.exp.lo_pos.len(), 65);
        assert!(t.table_bytes() < FastMath::global().table_bytes());
        assert!(format!("{t:?}").contains("sin_cos_len: 257"));
    }

    #[test]
    fn test_invalid_options() {
        let options = FastMathOptions {
            exp_table_power: 0,
            ..Default::default()
        };
        assert!(FastMath::new(options).is_err());
    }

    #[test]
    fn test_init() {
        init();
        assert_eq!(FastMath::global().options(), FastMathOptions::default());
    }
}
