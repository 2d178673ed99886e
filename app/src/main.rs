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
use flamemath::FastMath;
use rand::Rng;
use std::ops::Range;
use std::time::Instant;

const SAMPLES: usize = 1_000_000;

#[derive(Default)]
struct ErrorStats {
    max_abs: f64,
    max_rel: f64,
    max_ulp: u64,
    worst_input: f64,
}

fn ulp_distance(a: f64, b: f64) -> u64 {
    if a == b {
        return 0;
    }
    if a.is_nan() || b.is_nan() || a.is_sign_negative() != b.is_sign_negative() {
        return u64::MAX;
    }
    a.to_bits().abs_diff(b.to_bits())
}

fn measure(
    name: &str,
    range: Range<f64>,
    log_scale: bool,
    fast: impl Fn(f64) -> f64,
    reference: impl Fn(f64) -> f64,
) {
    let mut rng = rand::rng();
    let mut stats = ErrorStats::default();
    for _ in 0..SAMPLES {
        let t = rng.random_range(range.clone());
        let x = if log_scale { 10f64.powf(t) } else { t };
        let r = fast(x);
        let e = reference(x);
        let abs = (r - e).abs();
        let rel = if e != 0.0 { abs / e.abs() } else { abs };
        let ulp = ulp_distance(r, e);
        if ulp > stats.max_ulp {
            stats.max_ulp = ulp;
            stats.worst_input = x;
        }
        stats.max_abs = stats.max_abs.max(abs);
        stats.max_rel = stats.max_rel.max(rel);
    }
    println!(
        "{name:<10} max abs {:>10.3e}  max rel {:>10.3e}  max ulp {:>8}  at {:e}",
        stats.max_abs, stats.max_rel, stats.max_ulp, stats.worst_input
    );
}

fn main() {
    let start = Instant::now();
    flamemath::init();
    let math = FastMath::global();
    println!("tables built in {:?}: {:?}", start.elapsed(), math);

    measure("sin", -1000.0..1000.0, false, |x| math.sin(x), f64::sin);
    measure("cos", -1000.0..1000.0, false, |x| math.cos(x), f64::cos);
    measure("sin huge", 7.0..300.0, true, |x| math.sin(x), f64::sin);
    measure("tan", -1.5..1.5, false, |x| math.tan(x), f64::tan);
    measure("asin", -1.0..1.0, false, |x| math.asin(x), f64::asin);
    measure("acos", -1.0..1.0, false, |x| math.acos(x), f64::acos);
    measure("atan", -300.0..300.0, true, |x| math.atan(x), f64::atan);
    measure("exp", -700.0..700.0, false, |x| math.exp(x), f64::exp);
    measure("expm1", -3.0..3.0, false, |x| math.expm1(x), f64::exp_m1);
    measure("log", -300.0..300.0, true, |x| math.log(x), f64::ln);
    measure("log10", -300.0..300.0, true, |x| math.log10(x), f64::log10);
    measure("sqrt", -300.0..300.0, true, |x| math.sqrt(x), f64::sqrt);
    measure("cbrt", -300.0..300.0, true, |x| math.cbrt(x), f64::cbrt);
    measure("sinh", -700.0..700.0, false, |x| math.sinh(x), f64::sinh);
    measure("cosh", -700.0..700.0, false, |x| math.cosh(x), f64::cosh);
    measure("tanh", -20.0..20.0, false, |x| math.tanh(x), f64::tanh);
    measure("pow 2.5", -100.0..100.0, true, |x| math.pow(x, 2.5), |x| x.powf(2.5));
    measure("fastpow", -3.0..3.0, true, |x| flamemath::fastpow(x, 2.5), |x| x.powf(2.5));
    measure("exp_quick", -600.0..600.0, false, |x| math.exp_quick(x), f64::exp);
}
