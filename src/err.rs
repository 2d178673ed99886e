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
use std::error::Error;
use std::fmt::Display;

/// Names a lookup table whose resolution is configurable
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum TableKind {
    SinCos,
    Tan,
    Asin,
    Atan,
    Exp,
    Log,
    Sqrt,
    Cbrt,
}

impl Display for TableKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TableKind::SinCos => "sin/cos",
            TableKind::Tan => "tan",
            TableKind::Asin => "asin",
            TableKind::Atan => "atan",
            TableKind::Exp => "exp",
            TableKind::Log => "log",
            TableKind::Sqrt => "sqrt",
            TableKind::Cbrt => "cbrt",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum FastMathError {
    /// Requested table resolution power is outside the supported range
    TablePowerOutOfRange {
        table: TableKind,
        power: u32,
        min: u32,
        max: u32,
    },
}

impl Display for FastMathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FastMathError::TablePowerOutOfRange {
                table,
                power,
                min,
                max,
            } => f.write_fmt(format_args!(
                "Table power {power} for {table} table is out of supported range {min}..={max}"
            )),
        }
    }
}

impl Error for FastMathError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = FastMathError::TablePowerOutOfRange {
            table: TableKind::SinCos,
            power: 31,
            min: 4,
            max: 20,
        };
        assert_eq!(
            err.to_string(),
            "Table power 31 for sin/cos table is out of supported range 4..=20"
        );
    }
}
