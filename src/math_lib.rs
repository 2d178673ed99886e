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
use crate::math::FastMath;

/// Operation set used by flame variations.
///
/// Render pipelines hold a `&dyn MathLib` so that previews may run on the
/// table driven [FastMath] and final renders on [StdMath], or the other way round.
pub trait MathLib: Send + Sync {
    fn sin(&self, x: f64) -> f64;
    fn cos(&self, x: f64) -> f64;
    fn sin_cos(&self, x: f64) -> (f64, f64) {
        (self.sin(x), self.cos(x))
    }
    fn tan(&self, x: f64) -> f64;
    fn asin(&self, x: f64) -> f64;
    fn acos(&self, x: f64) -> f64;
    fn atan(&self, x: f64) -> f64;
    fn atan2(&self, y: f64, x: f64) -> f64;
    fn exp(&self, x: f64) -> f64;
    fn log(&self, x: f64) -> f64;
    fn log10(&self, x: f64) -> f64;
    fn sqrt(&self, x: f64) -> f64;
    fn pow(&self, value: f64, power: f64) -> f64;
    fn sinh(&self, x: f64) -> f64;
    fn cosh(&self, x: f64) -> f64;
    fn tanh(&self, x: f64) -> f64;
    fn floor(&self, x: f64) -> f64;
    /// Halves go towards +Inf
    fn round(&self, x: f64) -> f64;
}

impl MathLib for FastMath {
    fn sin(&self, x: f64) -> f64 {
        FastMath::sin(self, x)
    }

    fn cos(&self, x: f64) -> f64 {
        FastMath::cos(self, x)
    }

    fn sin_cos(&self, x: f64) -> (f64, f64) {
        FastMath::sin_cos(self, x)
    }

    fn tan(&self, x: f64) -> f64 {
        FastMath::tan(self, x)
    }

    fn asin(&self, x: f64) -> f64 {
        FastMath::asin(self, x)
    }

    fn acos(&self, x: f64) -> f64 {
        FastMath::acos(self, x)
    }

    fn atan(&self, x: f64) -> f64 {
        FastMath::atan(self, x)
    }

    fn atan2(&self, y: f64, x: f64) -> f64 {
        FastMath::atan2(self, y, x)
    }

    fn exp(&self, x: f64) -> f64 {
        FastMath::exp(self, x)
    }

    fn log(&self, x: f64) -> f64 {
        FastMath::log(self, x)
    }

    fn log10(&self, x: f64) -> f64 {
        FastMath::log10(self, x)
    }

    fn sqrt(&self, x: f64) -> f64 {
        FastMath::sqrt(self, x)
    }

    fn pow(&self, value: f64, power: f64) -> f64 {
        FastMath::pow(self, value, power)
    }

    fn sinh(&self, x: f64) -> f64 {
        FastMath::sinh(self, x)
    }

    fn cosh(&self, x: f64) -> f64 {
        FastMath::cosh(self, x)
    }

    fn tanh(&self, x: f64) -> f64 {
        FastMath::tanh(self, x)
    }

    fn floor(&self, x: f64) -> f64 {
        crate::math::floor(x)
    }

    fn round(&self, x: f64) -> f64 {
        crate::math::round(x)
    }
}

/// [MathLib] backed by the standard library, the precision reference.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct StdMath;

impl MathLib for StdMath {
    fn sin(&self, x: f64) -> f64 {
        x.sin()
    }

    fn cos(&self, x: f64) -> f64 {
        x.cos()
    }

    fn sin_cos(&self, x: f64) -> (f64, f64) {
        x.sin_cos()
    }

    fn tan(&self, x: f64) -> f64 {
        x.tan()
    }

    fn asin(&self, x: f64) -> f64 {
        x.asin()
    }

    fn acos(&self, x: f64) -> f64 {
        x.acos()
    }

    fn atan(&self, x: f64) -> f64 {
        x.atan()
    }

    fn atan2(&self, y: f64, x: f64) -> f64 {
        y.atan2(x)
    }

    fn exp(&self, x: f64) -> f64 {
        x.exp()
    }

    fn log(&self, x: f64) -> f64 {
        x.ln()
    }

    fn log10(&self, x: f64) -> f64 {
        x.log10()
    }

    fn sqrt(&self, x: f64) -> f64 {
        x.sqrt()
    }

    fn pow(&self, value: f64, power: f64) -> f64 {
        value.powf(power)
    }

    fn sinh(&self, x: f64) -> f64 {
        x.sinh()
    }

    fn cosh(&self, x: f64) -> f64 {
        x.cosh()
    }

    fn tanh(&self, x: f64) -> f64 {
        x.tanh()
    }

    fn floor(&self, x: f64) -> f64 {
        x.floor()
    }

    fn round(&self, x: f64) -> f64 {
        let r = x.floor();
        if x - r >= 0.5 { r + 1.0 } else { r }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn relative_diff(a: f64, b: f64) -> f64 {
        if a == b {
            return 0.0;
        }
        (a - b).abs() / b.abs().max(1.0)
    }

    #[test]
    fn test_libraries_agree() {
        let libs: [&dyn MathLib; 2] = [FastMath::global(), &StdMath];
        let mut rng = rand::rng();
        for _ in 0..20000 {
            let x: f64 = rng.random_range(-10.0..10.0);
            let u: f64 = rng.random_range(-1.0..1.0);
            let p: f64 = rng.random_range(0.01..50.0);
            let results = libs.map(|lib| {
                [
                    lib.sin(x),
                    lib.cos(x),
                    lib.sin_cos(x).0,
                    lib.sin_cos(x).1,
                    lib.asin(u),
                    lib.acos(u),
                    lib.atan(x),
                    lib.atan2(x, u),
                    lib.exp(x),
                    lib.log(p),
                    lib.log10(p),
                    lib.sqrt(p),
                    lib.pow(p, u),
                    lib.sinh(x),
                    lib.cosh(x),
                    lib.tanh(x),
                    lib.floor(x),
                    lib.round(x),
                ]
            });
            for (fast, reference) in results[0].iter().zip(results[1].iter()) {
                assert!(relative_diff(*fast, *reference) < 1e-12, "x = {x}, u = {u}, p = {p}");
            }
            if x.cos().abs() > 1e-3 {
                assert!(relative_diff(libs[0].tan(x), libs[1].tan(x)) < 1e-10);
            }
        }
    }

    #[test]
    fn test_round_matches() {
        for x in [-2.5, -0.5, 0.5, 2.5, 0.49999999999999994, -7.25, 1e300] {
            assert_eq!(MathLib::round(&StdMath, x), crate::math::round(x));
        }
    }
}
