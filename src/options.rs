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
use crate::err::{FastMathError, TableKind};

pub(crate) const MIN_SAMPLED_TABLE_POWER: u32 = 4;
pub(crate) const MIN_BIT_INDEXED_POWER: u32 = 1;
/// Mantissa slices come from the high word, and indexers must stay within `i32`.
pub(crate) const MAX_TABLE_POWER: u32 = 20;

/// Declares resolution of lookup tables.
///
/// Every table holds `2^power` (+1 for sampled tables) entries,
/// bigger tables are more precise but use more memory and cache.
/// Defaults are tuned for flame rendering and need about 1 MB in total.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub struct FastMathOptions {
    /// Samples of sin and cos over `[0, 2pi]`
    pub sin_cos_table_power: u32,
    /// Virtual samples of tan over `[0, pi/2]`
    pub tan_table_power: u32,
    pub asin_table_power: u32,
    pub atan_table_power: u32,
    /// Samples of `e^z` over `[-1, 1]`
    pub exp_table_power: u32,
    /// Mantissa bits used to index log table
    pub log_bits: u32,
    /// Mantissa bits used to index square root table
    pub sqrt_bits: u32,
    /// Mantissa bits used to index cube root table
    pub cbrt_bits: u32,
}

impl Default for FastMathOptions {
    fn default() -> Self {
        Self {
            sin_cos_table_power: 11,
            tan_table_power: 12,
            asin_table_power: 13,
            atan_table_power: 12,
            exp_table_power: 11,
            log_bits: 12,
            sqrt_bits: 12,
            cbrt_bits: 12,
        }
    }
}

#[inline]
fn check_power(table: TableKind, power: u32, min: u32) -> Result<(), FastMathError> {
    if power < min || power > MAX_TABLE_POWER {
        return Err(FastMathError::TablePowerOutOfRange {
            table,
            power,
            min,
            max: MAX_TABLE_POWER,
        });
    }
    Ok(())
}

impl FastMathOptions {
    /// Checks that every table power is supported
    pub fn validate(&self) -> Result<(), FastMathError> {
        check_power(TableKind::SinCos, self.sin_cos_table_power, MIN_SAMPLED_TABLE_POWER)?;
        check_power(TableKind::Tan, self.tan_table_power, MIN_SAMPLED_TABLE_POWER)?;
        check_power(TableKind::Asin, self.asin_table_power, MIN_SAMPLED_TABLE_POWER)?;
        check_power(TableKind::Atan, self.atan_table_power, MIN_SAMPLED_TABLE_POWER)?;
        check_power(TableKind::Exp, self.exp_table_power, MIN_SAMPLED_TABLE_POWER)?;
        check_power(TableKind::Log, self.log_bits, MIN_BIT_INDEXED_POWER)?;
        check_power(TableKind::Sqrt, self.sqrt_bits, MIN_BIT_INDEXED_POWER)?;
        check_power(TableKind::Cbrt, self.cbrt_bits, MIN_BIT_INDEXED_POWER)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(FastMathOptions::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_out_of_range() {
        let options = FastMathOptions {
            tan_table_power: 3,
            ..Default::default()
        };
        assert_eq!(
            options.validate(),
            Err(FastMathError::TablePowerOutOfRange {
                table: TableKind::Tan,
                power: 3,
                min: MIN_SAMPLED_TABLE_POWER,
                max: MAX_TABLE_POWER,
            })
        );

        let options = FastMathOptions {
            cbrt_bits: 21,
            ..Default::default()
        };
        assert!(matches!(
            options.validate(),
            Err(FastMathError::TablePowerOutOfRange {
                table: TableKind::Cbrt,
                power: 21,
                ..
            })
        ));

        let options = FastMathOptions {
            log_bits: 1,
            ..Default::default()
        };
        assert!(options.validate().is_ok());
    }
}
