#![allow(clippy::missing_safety_doc)]

//! Runtime primitive library for Lumen programs.
//!
//! Generated code links against the staticlib and calls the `lumen_*` exports
//! declared in `include/lumen_std.h`. The same primitives are available to Rust
//! hosts as plain functions, grouped by concern:
//!
//! - [`io`]: console output and token/line input
//! - [`arith`], [`math`]: integer and float arithmetic, elementary functions
//! - [`string`]: operations on NUL-terminated byte strings
//! - [`time`], [`random`]: clocks and the seeded generator
//! - [`mem`]: raw acquire/release
//!
//! Allocating primitives return [`OwnedStr`]; ownership always moves to the caller.
//! There is no error channel: misuse either traps (see [`fault`]) or yields an
//! unspecified value. The library assumes a single thread of execution.

pub mod arith;
pub mod buf;
pub mod config;
pub mod fault;
pub mod ffi;
pub mod io;
pub mod math;
pub mod mem;
pub mod random;
pub mod runtime;
pub mod string;
pub mod time;

pub use buf::OwnedStr;
pub use config::{ConfigError, StdConfig};
pub use fault::Fault;
pub use runtime::init;
