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
#![allow(clippy::excessive_precision, clippy::neg_cmp_op_on_partial_ord)]
#![deny(unreachable_pub)]
//! Table driven transcendental functions for fractal flame rendering.
//!
//! Every function trades a bounded error (about 1e-15 absolute for the
//! trigonometric ones) for throughput. Tables are built once per process
//! from correctly rounded reference values and are bit identical everywhere,
//! evaluation uses fused multiply-add where the target has it, so results may
//! differ in the last bit between targets.
//!
//! ```
//! let (s, c) = flamemath::sin_cos(0.5);
//! assert!((s - 0.5f64.sin()).abs() < 1e-12);
//! assert!((c - 0.5f64.cos()).abs() < 1e-12);
//! assert!((flamemath::exp(1.0) - std::f64::consts::E).abs() < 1e-14);
//! ```
mod err;
mod math;
mod math_lib;
mod mlaf;
mod options;

pub use err::{FastMathError, TableKind};
pub use math::{
    FastMath, acos, asin, atan, atan2, cbrt, cos, cosh, exp, exp_quick, expm1, fastpow, floor,
    init, log, log10, pow, powi, remainder_two_pi, round, sin, sin_cos, sinh, sqrt, tan, tanh,
};
pub use math_lib::{MathLib, StdMath};
pub use options::FastMathOptions;
