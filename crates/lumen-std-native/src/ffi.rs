//! C ABI exports. Keep in sync with `include/lumen_std.h`.
//!
//! Every symbol is `lumen_<primitive>`. String arguments are borrowed,
//! NUL-terminated views (null reads as ""); every `char*` result is a fresh buffer
//! owned by the caller and released with `lumen_free`.

use std::ffi::{c_char, c_void, CStr};

use crate::{arith, io, math, mem, random, runtime, string, time};

#[inline]
unsafe fn view<'a>(s: *const c_char) -> &'a CStr {
    if s.is_null() {
        c""
    } else {
        CStr::from_ptr(s)
    }
}

// --- lifecycle ---

#[no_mangle]
pub extern "C" fn lumen_runtime_init() {
    runtime::init();
}

#[no_mangle]
pub extern "C" fn lumen_std_abi_version() -> u32 {
    lumen_contracts::LUMEN_STD_ABI_VERSION
}

// --- I/O ---

#[no_mangle]
pub unsafe extern "C" fn lumen_print(msg: *const c_char) {
    io::print(view(msg));
}

#[no_mangle]
pub unsafe extern "C" fn lumen_println(msg: *const c_char) {
    io::println(view(msg));
}

#[no_mangle]
pub extern "C" fn lumen_print_int(x: i32) {
    io::print_int(x);
}

#[no_mangle]
pub extern "C" fn lumen_print_float(x: f64) {
    io::print_float(x);
}

#[no_mangle]
pub extern "C" fn lumen_flush() {
    io::flush();
}

#[no_mangle]
pub extern "C" fn lumen_read_int() -> i32 {
    io::read_int()
}

#[no_mangle]
pub extern "C" fn lumen_read_float() -> f64 {
    io::read_float()
}

#[no_mangle]
pub extern "C" fn lumen_read_string() -> *mut c_char {
    io::read_string().into_raw()
}

#[no_mangle]
pub extern "C" fn lumen_read_line() -> *mut c_char {
    io::read_line().into_raw()
}

// --- arithmetic ---

#[no_mangle]
pub extern "C" fn lumen_add(a: i32, b: i32) -> i32 {
    arith::add(a, b)
}

#[no_mangle]
pub extern "C" fn lumen_sub(a: i32, b: i32) -> i32 {
    arith::sub(a, b)
}

#[no_mangle]
pub extern "C" fn lumen_mul(a: i32, b: i32) -> i32 {
    arith::mul(a, b)
}

#[no_mangle]
pub extern "C" fn lumen_div(a: i32, b: i32) -> i32 {
    arith::div(a, b)
}

#[no_mangle]
pub extern "C" fn lumen_mod(a: i32, b: i32) -> i32 {
    arith::r#mod(a, b)
}

#[no_mangle]
pub extern "C" fn lumen_powi(base: i32, exp: i32) -> i32 {
    arith::powi(base, exp)
}

#[no_mangle]
pub extern "C" fn lumen_powf(base: f64, exp: f64) -> f64 {
    arith::powf(base, exp)
}

#[no_mangle]
pub extern "C" fn lumen_addf(a: f64, b: f64) -> f64 {
    arith::addf(a, b)
}

#[no_mangle]
pub extern "C" fn lumen_subf(a: f64, b: f64) -> f64 {
    arith::subf(a, b)
}

#[no_mangle]
pub extern "C" fn lumen_mulf(a: f64, b: f64) -> f64 {
    arith::mulf(a, b)
}

#[no_mangle]
pub extern "C" fn lumen_divf(a: f64, b: f64) -> f64 {
    arith::divf(a, b)
}

#[no_mangle]
pub extern "C" fn lumen_int_to_float(x: i32) -> f64 {
    arith::int_to_float(x)
}

#[no_mangle]
pub extern "C" fn lumen_float_to_int(x: f64) -> i32 {
    arith::float_to_int(x)
}

// --- math ---

#[no_mangle]
pub extern "C" fn lumen_sin(x: f64) -> f64 {
    math::sin(x)
}

#[no_mangle]
pub extern "C" fn lumen_cos(x: f64) -> f64 {
    math::cos(x)
}

#[no_mangle]
pub extern "C" fn lumen_tan(x: f64) -> f64 {
    math::tan(x)
}

#[no_mangle]
pub extern "C" fn lumen_sqrt(x: f64) -> f64 {
    math::sqrt(x)
}

#[no_mangle]
pub extern "C" fn lumen_abs(x: f64) -> f64 {
    math::abs(x)
}

#[no_mangle]
pub extern "C" fn lumen_absi(x: i32) -> i32 {
    math::absi(x)
}

#[no_mangle]
pub extern "C" fn lumen_floor(x: f64) -> f64 {
    math::floor(x)
}

#[no_mangle]
pub extern "C" fn lumen_ceil(x: f64) -> f64 {
    math::ceil(x)
}

#[no_mangle]
pub extern "C" fn lumen_exp(x: f64) -> f64 {
    math::exp(x)
}

#[no_mangle]
pub extern "C" fn lumen_ln(x: f64) -> f64 {
    math::ln(x)
}

#[no_mangle]
pub extern "C" fn lumen_atan2(y: f64, x: f64) -> f64 {
    math::atan2(y, x)
}

#[no_mangle]
pub extern "C" fn lumen_minf(a: f64, b: f64) -> f64 {
    math::minf(a, b)
}

#[no_mangle]
pub extern "C" fn lumen_maxf(a: f64, b: f64) -> f64 {
    math::maxf(a, b)
}

// --- strings ---

#[no_mangle]
pub unsafe extern "C" fn lumen_str_len(s: *const c_char) -> i32 {
    string::str_len(view(s))
}

#[no_mangle]
pub unsafe extern "C" fn lumen_str_concat(a: *const c_char, b: *const c_char) -> *mut c_char {
    string::str_concat(view(a), view(b)).into_raw()
}

#[no_mangle]
pub unsafe extern "C" fn lumen_str_cmp(a: *const c_char, b: *const c_char) -> i32 {
    string::str_cmp(view(a), view(b))
}

#[no_mangle]
pub unsafe extern "C" fn lumen_str_substring(
    s: *const c_char,
    start: i32,
    length: i32,
) -> *mut c_char {
    string::str_substring(view(s), start, length).into_raw()
}

#[no_mangle]
pub extern "C" fn lumen_int_to_string(x: i32) -> *mut c_char {
    string::int_to_string(x).into_raw()
}

#[no_mangle]
pub extern "C" fn lumen_float_to_string(x: f64) -> *mut c_char {
    string::float_to_string(x).into_raw()
}

#[no_mangle]
pub unsafe extern "C" fn lumen_str_to_int(s: *const c_char) -> i32 {
    string::str_to_int(view(s))
}

#[no_mangle]
pub unsafe extern "C" fn lumen_str_to_float(s: *const c_char) -> f64 {
    string::str_to_float(view(s))
}

// --- time & random ---

#[no_mangle]
pub extern "C" fn lumen_clock_now() -> f64 {
    time::clock_now()
}

#[no_mangle]
pub extern "C" fn lumen_clock_unix() -> f64 {
    time::clock_unix()
}

#[no_mangle]
pub extern "C" fn lumen_random_int(min: i32, max: i32) -> i32 {
    random::random_int(min, max)
}

#[no_mangle]
pub extern "C" fn lumen_random_float(min: f64, max: f64) -> f64 {
    random::random_float(min, max)
}

// --- memory ---

#[no_mangle]
pub extern "C" fn lumen_malloc(size: usize) -> *mut c_void {
    mem::acquire(size).as_ptr() as *mut c_void
}

/// Releases a block from `lumen_malloc` or any `char*` returned by this library.
#[no_mangle]
pub unsafe extern "C" fn lumen_free(ptr: *mut c_void) {
    mem::release(ptr as *mut u8);
}
