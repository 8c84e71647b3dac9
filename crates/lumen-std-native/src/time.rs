//! Timing primitives.

use std::time::Instant;

use once_cell::sync::OnceCell;

static PROCESS_START: OnceCell<Instant> = OnceCell::new();

extern "C" fn record_process_start() {
    let _ = PROCESS_START.set(Instant::now());
}

// Runs while the program image loads, before `main` and before any generated code.
#[used]
#[cfg_attr(
    any(
        target_os = "linux",
        target_os = "android",
        target_os = "freebsd",
        target_os = "netbsd",
        target_os = "openbsd",
        target_os = "dragonfly",
        target_os = "illumos"
    ),
    link_section = ".init_array"
)]
#[cfg_attr(target_vendor = "apple", link_section = "__DATA,__mod_init_func")]
#[cfg_attr(windows, link_section = ".CRT$XCU")]
static RECORD_PROCESS_START: extern "C" fn() = record_process_start;

/// The instant the process image was initialized.
pub fn process_start() -> Instant {
    if PROCESS_START.get().is_none() {
        // Targets without a constructor section start counting at first use. The
        // call goes through the static so the linker keeps the constructor entry.
        std::hint::black_box(RECORD_PROCESS_START)();
    }
    *PROCESS_START.get_or_init(Instant::now)
}

/// Seconds elapsed since process start. Never decreases.
pub fn clock_now() -> f64 {
    process_start().elapsed().as_secs_f64()
}

/// Wall-clock seconds since the Unix epoch.
pub fn clock_unix() -> f64 {
    let now = chrono::Utc::now();
    now.timestamp() as f64 + f64::from(now.timestamp_subsec_nanos()) * 1e-9
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_now_is_monotonic() {
        let mut prev = clock_now();
        assert!(prev >= 0.0);
        for _ in 0..1000 {
            let t = clock_now();
            assert!(t >= prev);
            prev = t;
        }
    }

    #[test]
    fn process_start_is_fixed() {
        let a = process_start();
        std::thread::sleep(std::time::Duration::from_millis(5));
        assert_eq!(process_start(), a);
    }

    #[test]
    fn clock_unix_is_after_2020() {
        assert!(clock_unix() > 1_577_836_800.0);
    }
}
