//! Elementary math.
//!
//! Every function forwards to the pure-Rust `libm` crate by its full path. The C
//! exports carry a `lumen_` prefix, and `libm`'s own symbols are mangled, so a
//! forwarding call can never resolve back to one of our exported symbols.

pub fn sin(x: f64) -> f64 {
    libm::sin(x)
}

pub fn cos(x: f64) -> f64 {
    libm::cos(x)
}

pub fn tan(x: f64) -> f64 {
    libm::tan(x)
}

pub fn sqrt(x: f64) -> f64 {
    libm::sqrt(x)
}

pub fn abs(x: f64) -> f64 {
    libm::fabs(x)
}

/// `absi(i32::MIN)` wraps to `i32::MIN`.
pub fn absi(x: i32) -> i32 {
    x.wrapping_abs()
}

pub fn floor(x: f64) -> f64 {
    libm::floor(x)
}

pub fn ceil(x: f64) -> f64 {
    libm::ceil(x)
}

pub fn exp(x: f64) -> f64 {
    libm::exp(x)
}

pub fn ln(x: f64) -> f64 {
    libm::log(x)
}

pub fn atan2(y: f64, x: f64) -> f64 {
    libm::atan2(y, x)
}

// Unlike f64::min, a NaN operand poisons the result.
pub fn minf(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.min(b)
    }
}

pub fn maxf(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.max(b)
    }
}
