//! One-time runtime initialization.
//!
//! [`init`] freezes the configuration and seeds the generator used by the random
//! primitives. Generated program prologues call it through `lumen_runtime_init`;
//! every primitive that needs runtime state also calls it, so the generator is
//! seeded exactly once before its first use no matter which call comes first.
//! Generated code cannot choose or change the seed; only a Rust host can fix it,
//! through [`crate::config::install`] before initialization.

use std::sync::{Mutex, MutexGuard};

use once_cell::sync::OnceCell;
use rand::rngs::StdRng;
use rand::SeedableRng as _;

use crate::config;

pub struct Runtime {
    seed: u64,
    autoflush: bool,
    // Single-threaded callers never contend; the lock only makes the static Sync.
    rng: Mutex<StdRng>,
}

static RUNTIME: OnceCell<Runtime> = OnceCell::new();

/// Initializes the runtime if it has not been initialized yet.
pub fn init() -> &'static Runtime {
    RUNTIME.get_or_init(|| {
        let cfg = config::resolve();
        let (seed, source) = match cfg.seed {
            Some(seed) => (seed, "config"),
            None => (time_seed(), "clock"),
        };
        tracing::debug!(seed, source, autoflush = cfg.autoflush, "lumen runtime initialized");
        Runtime {
            seed,
            autoflush: cfg.autoflush,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    })
}

pub fn is_initialized() -> bool {
    RUNTIME.get().is_some()
}

fn time_seed() -> u64 {
    let now = chrono::Utc::now();
    let nanos = now
        .timestamp_nanos_opt()
        .unwrap_or_else(|| now.timestamp().wrapping_mul(1_000_000_000)) as u64;
    // Processes started within the same clock tick still diverge.
    nanos ^ (u64::from(std::process::id())).rotate_left(32)
}

impl Runtime {
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn autoflush(&self) -> bool {
        self.autoflush
    }

    pub(crate) fn rng(&self) -> MutexGuard<'_, StdRng> {
        self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
