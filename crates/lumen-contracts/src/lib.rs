//! Shared, version-pinned identifiers for the Lumen runtime ABI.
//!
//! These constants are the single source of truth for symbol names, trap codes and
//! limits that generated code relies on. `include/lumen_std.h` in `lumen-std-native`
//! mirrors them and is checked against this crate by its tests.

pub const LUMEN_STD_ABI_VERSION: u32 = 1;

/// Every exported primitive is named `SYMBOL_PREFIX` + primitive name.
pub const SYMBOL_PREFIX: &str = "lumen_";

/// Maximum size of a `read_string`/`read_line` buffer, terminator included.
pub const READ_STRING_CAP: usize = 1024;

// Keep these in sync with the header.
pub const TRAP_DIV_BY_ZERO: i32 = 9800;
pub const TRAP_MOD_BY_ZERO: i32 = 9801;
pub const TRAP_SUBSTRING_OUT_OF_BOUNDS: i32 = 9802;
pub const TRAP_OUT_OF_MEMORY: i32 = 9803;

pub const IO_PRIMITIVES: &[&str] = &[
    "print",
    "println",
    "print_int",
    "print_float",
    "flush",
    "read_int",
    "read_float",
    "read_string",
    "read_line",
];

pub const ARITH_PRIMITIVES: &[&str] = &[
    "add",
    "sub",
    "mul",
    "div",
    "mod",
    "powi",
    "powf",
    "addf",
    "subf",
    "mulf",
    "divf",
    "int_to_float",
    "float_to_int",
];

pub const MATH_PRIMITIVES: &[&str] = &[
    "sin", "cos", "tan", "sqrt", "abs", "absi", "floor", "ceil", "exp", "ln", "atan2", "minf",
    "maxf",
];

pub const STRING_PRIMITIVES: &[&str] = &[
    "str_len",
    "str_concat",
    "str_cmp",
    "str_substring",
    "int_to_string",
    "float_to_string",
    "str_to_int",
    "str_to_float",
];

pub const TIME_RANDOM_PRIMITIVES: &[&str] =
    &["clock_now", "clock_unix", "random_int", "random_float"];

pub const MEMORY_PRIMITIVES: &[&str] = &["malloc", "free"];

pub const LIFECYCLE_SYMBOLS: &[&str] = &["runtime_init", "std_abi_version"];

/// All primitive groups, in header order.
pub const PRIMITIVE_GROUPS: &[&[&str]] = &[
    IO_PRIMITIVES,
    ARITH_PRIMITIVES,
    MATH_PRIMITIVES,
    STRING_PRIMITIVES,
    TIME_RANDOM_PRIMITIVES,
    MEMORY_PRIMITIVES,
];

pub fn symbol_name(primitive: &str) -> String {
    format!("{SYMBOL_PREFIX}{primitive}")
}

pub fn all_primitives() -> impl Iterator<Item = &'static str> {
    PRIMITIVE_GROUPS.iter().flat_map(|g| g.iter().copied())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitive_names_are_unique() {
        let mut names: Vec<&str> = all_primitives().chain(LIFECYCLE_SYMBOLS.iter().copied()).collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total);
    }

    #[test]
    fn symbol_names_carry_prefix() {
        assert_eq!(symbol_name("sin"), "lumen_sin");
        assert!(all_primitives().all(|p| !p.starts_with(SYMBOL_PREFIX)));
    }
}
