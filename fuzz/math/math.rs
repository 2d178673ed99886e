#![no_main]

use flamemath::{
    acos, asin, atan, atan2, cbrt, cos, cosh, exp, exp_quick, expm1, fastpow, floor, log, log10,
    pow, powi, remainder_two_pi, round, sin, sin_cos, sinh, sqrt, tan, tanh,
};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (u64, u64)| {
    let x = f64::from_bits(data.0);
    let y = f64::from_bits(data.1);

    _ = sin(x);
    _ = cos(x);
    _ = sin_cos(x);
    _ = tan(x);
    _ = asin(x);
    _ = acos(x);
    _ = atan(x);
    let a = atan2(x, y);
    assert!(a.is_nan() || a.abs() <= std::f64::consts::PI);
    _ = exp(x);
    _ = expm1(x);
    _ = exp_quick(x);
    _ = log(x);
    _ = log10(x);
    _ = sqrt(x);
    _ = cbrt(x);
    _ = pow(x, y);
    _ = powi(x, data.1 as i32);
    _ = fastpow(x, y);
    _ = sinh(x);
    _ = cosh(x);
    _ = tanh(x);
    _ = floor(x);
    _ = round(x);
    let r = remainder_two_pi(x);
    assert!(!x.is_finite() || r.abs() <= 4.0);
});
