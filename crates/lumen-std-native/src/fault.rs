//! Unrecoverable faults.
//!
//! Primitives have no error-return channel. Misuse that cannot produce a meaningful
//! value terminates the process through [`trap`]; everything else yields an
//! unspecified but well-defined value.

use lumen_contracts::{
    TRAP_DIV_BY_ZERO, TRAP_MOD_BY_ZERO, TRAP_OUT_OF_MEMORY, TRAP_SUBSTRING_OUT_OF_BOUNDS,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Fault {
    #[error("integer division by zero")]
    DivisionByZero,
    #[error("integer modulo by zero")]
    ModuloByZero,
    #[error("substring [{start}, +{length}) out of bounds for string of length {len}")]
    SubstringOutOfBounds { start: i32, length: i32, len: usize },
    #[error("allocation of {size} bytes failed")]
    OutOfMemory { size: usize },
}

impl Fault {
    pub fn code(self) -> i32 {
        match self {
            Fault::DivisionByZero => TRAP_DIV_BY_ZERO,
            Fault::ModuloByZero => TRAP_MOD_BY_ZERO,
            Fault::SubstringOutOfBounds { .. } => TRAP_SUBSTRING_OUT_OF_BOUNDS,
            Fault::OutOfMemory { .. } => TRAP_OUT_OF_MEMORY,
        }
    }
}

/// Reports `fault` and terminates the process. Must not return.
#[cold]
#[inline(never)]
pub fn trap(fault: Fault) -> ! {
    tracing::error!(code = fault.code(), %fault, "lumen runtime trap");
    terminate(fault)
}

#[cfg(not(test))]
fn terminate(_fault: Fault) -> ! {
    std::process::abort()
}

// Unit tests observe traps as panics instead of aborting the test harness.
#[cfg(test)]
fn terminate(fault: Fault) -> ! {
    panic!("lumen_trap({}): {fault}", fault.code())
}
