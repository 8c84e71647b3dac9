//! Integer and floating arithmetic.
//!
//! Integer operations use two's-complement wrapping. Division and modulo by zero
//! trap; everything else produces a value.

use crate::fault::{trap, Fault};

pub fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

pub fn sub(a: i32, b: i32) -> i32 {
    a.wrapping_sub(b)
}

pub fn mul(a: i32, b: i32) -> i32 {
    a.wrapping_mul(b)
}

/// Truncating division. `i32::MIN / -1` wraps to `i32::MIN`.
pub fn div(a: i32, b: i32) -> i32 {
    if b == 0 {
        trap(Fault::DivisionByZero);
    }
    a.wrapping_div(b)
}

/// Remainder of truncating division; takes the sign of `a`.
pub fn r#mod(a: i32, b: i32) -> i32 {
    if b == 0 {
        trap(Fault::ModuloByZero);
    }
    a.wrapping_rem(b)
}

/// `base` raised to `exp` by repeated multiplication.
///
/// A negative exponent gives the reciprocal truncated toward zero: `1` or `-1` when
/// `|base| == 1`, otherwise `0`.
pub fn powi(base: i32, exp: i32) -> i32 {
    if exp < 0 {
        return match base {
            1 => 1,
            -1 if exp % 2 == 0 => 1,
            -1 => -1,
            _ => 0,
        };
    }
    // Square-and-multiply; wrapping makes it agree with the naive loop bit for bit.
    base.wrapping_pow(exp as u32)
}

pub fn powf(base: f64, exp: f64) -> f64 {
    libm::pow(base, exp)
}

pub fn addf(a: f64, b: f64) -> f64 {
    a + b
}

pub fn subf(a: f64, b: f64) -> f64 {
    a - b
}

pub fn mulf(a: f64, b: f64) -> f64 {
    a * b
}

/// IEEE division; a zero divisor yields an infinity or NaN.
pub fn divf(a: f64, b: f64) -> f64 {
    a / b
}

pub fn int_to_float(x: i32) -> f64 {
    f64::from(x)
}

/// Truncates toward zero, saturating at the `i32` range; NaN becomes 0.
pub fn float_to_int(x: f64) -> i32 {
    x as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_integer_ops() {
        assert_eq!(add(2, 3), 5);
        assert_eq!(sub(2, 3), -1);
        assert_eq!(mul(-4, 6), -24);
        assert_eq!(div(7, 2), 3);
        assert_eq!(div(-7, 2), -3);
        assert_eq!(r#mod(7, 3), 1);
        assert_eq!(r#mod(-7, 3), -1);
    }

    #[test]
    fn overflow_wraps() {
        assert_eq!(add(i32::MAX, 1), i32::MIN);
        assert_eq!(sub(i32::MIN, 1), i32::MAX);
        assert_eq!(mul(i32::MAX, 2), -2);
        assert_eq!(div(i32::MIN, -1), i32::MIN);
        assert_eq!(r#mod(i32::MIN, -1), 0);
    }

    #[test]
    fn division_identity_holds_for_negative_operands() {
        for &(a, b) in &[(17, 5), (-17, 5), (17, -5), (-17, -5), (0, 3)] {
            assert_eq!(add(mul(div(a, b), b), r#mod(a, b)), a);
        }
    }

    #[test]
    #[should_panic(expected = "lumen_trap(9800)")]
    fn div_by_zero_traps() {
        div(1, 0);
    }

    #[test]
    #[should_panic(expected = "lumen_trap(9801)")]
    fn mod_by_zero_traps() {
        r#mod(1, 0);
    }

    #[test]
    fn powi_by_repeated_multiplication() {
        assert_eq!(powi(2, 10), 1024);
        assert_eq!(powi(3, 0), 1);
        assert_eq!(powi(0, 0), 1);
        assert_eq!(powi(-2, 3), -8);
        assert_eq!(powi(2, 31), i32::MIN);
    }

    #[test]
    fn powi_negative_exponent_truncates() {
        assert_eq!(powi(2, -1), 0);
        assert_eq!(powi(0, -3), 0);
        assert_eq!(powi(1, -5), 1);
        assert_eq!(powi(-1, -3), -1);
        assert_eq!(powi(-1, -4), 1);
    }

    #[test]
    fn float_ops() {
        assert_eq!(powf(2.0, 10.0), 1024.0);
        assert_eq!(addf(0.5, 0.25), 0.75);
        assert_eq!(divf(1.0, 0.0), f64::INFINITY);
        assert!(divf(0.0, 0.0).is_nan());
    }

    #[test]
    fn conversions() {
        assert_eq!(int_to_float(-3), -3.0);
        assert_eq!(float_to_int(2.9), 2);
        assert_eq!(float_to_int(-2.9), -2);
        assert_eq!(float_to_int(f64::NAN), 0);
        assert_eq!(float_to_int(1e300), i32::MAX);
    }
}
