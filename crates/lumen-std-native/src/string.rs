//! String primitives over NUL-terminated byte strings.
//!
//! Inputs are borrowed views; outputs are fresh [`OwnedStr`] buffers the caller owns
//! and that share nothing with the inputs.

use std::cmp::Ordering;
use std::ffi::CStr;

use crate::buf::OwnedStr;
use crate::fault::{trap, Fault};
use crate::io::{parse_float, parse_int};

/// Byte length, terminator excluded.
pub fn str_len(s: &CStr) -> i32 {
    s.to_bytes().len() as i32
}

pub fn str_concat(a: &CStr, b: &CStr) -> OwnedStr {
    OwnedStr::concat(&[a.to_bytes(), b.to_bytes()])
}

/// Unsigned bytewise lexicographic order: -1, 0 or 1.
pub fn str_cmp(a: &CStr, b: &CStr) -> i32 {
    match a.to_bytes().cmp(b.to_bytes()) {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

/// `length` bytes starting at byte offset `start`. Traps unless the range lies
/// within `s`.
pub fn str_substring(s: &CStr, start: i32, length: i32) -> OwnedStr {
    let bytes = s.to_bytes();
    let range = usize::try_from(start)
        .ok()
        .zip(usize::try_from(length).ok())
        .and_then(|(start, length)| Some(start..start.checked_add(length)?))
        .filter(|r| r.end <= bytes.len());
    let Some(range) = range else {
        trap(Fault::SubstringOutOfBounds {
            start,
            length,
            len: bytes.len(),
        });
    };
    OwnedStr::from_bytes(&bytes[range])
}

pub fn int_to_string(x: i32) -> OwnedStr {
    let mut buf = itoa::Buffer::new();
    OwnedStr::from_bytes(buf.format(x).as_bytes())
}

/// Shortest representation that round-trips; integral values drop the `.0`.
pub fn float_to_string(x: f64) -> OwnedStr {
    let mut buf = ryu::Buffer::new();
    let s: &str = if x.is_nan() {
        "nan"
    } else if x == f64::INFINITY {
        "inf"
    } else if x == f64::NEG_INFINITY {
        "-inf"
    } else {
        buf.format_finite(x)
    };
    let s = s.strip_suffix(".0").unwrap_or(s);
    OwnedStr::from_bytes(s.as_bytes())
}

pub fn str_to_int(s: &CStr) -> i32 {
    parse_int(s.to_bytes().trim_ascii_start())
}

pub fn str_to_float(s: &CStr) -> f64 {
    parse_float(s.to_bytes().trim_ascii_start())
}
