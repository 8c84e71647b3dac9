//! Pseudo-random primitives backed by the generator seeded in [`crate::runtime::init`].

use rand::Rng as _;

use crate::runtime;

/// Uniform in `[min, max]`. Returns `min` when the range is empty or a single value.
pub fn random_int(min: i32, max: i32) -> i32 {
    if min >= max {
        return min;
    }
    runtime::init().rng().gen_range(min..=max)
}

/// Uniform in `[min, max)`. Returns `min` unless `min < max` and both bounds are
/// finite.
pub fn random_float(min: f64, max: f64) -> f64 {
    if !(min < max) || !min.is_finite() || !max.is_finite() {
        return min;
    }
    let u: f64 = runtime::init().rng().gen();
    // Interpolating never forms `max - min`, which overflows for wide ranges.
    let v = min * (1.0 - u) + max * u;
    v.clamp(min, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_int_stays_in_range() {
        for _ in 0..10_000 {
            let v = random_int(-3, 5);
            assert!((-3..=5).contains(&v));
        }
    }

    #[test]
    fn random_int_full_range_does_not_overflow() {
        for _ in 0..100 {
            random_int(i32::MIN, i32::MAX);
        }
    }

    #[test]
    fn random_int_hits_both_ends() {
        let mut seen = [false; 2];
        for _ in 0..10_000 {
            seen[random_int(0, 1) as usize] = true;
        }
        assert_eq!(seen, [true, true]);
    }

    #[test]
    fn degenerate_ranges_return_min() {
        assert_eq!(random_int(4, 4), 4);
        assert_eq!(random_int(9, 2), 9);
        assert_eq!(random_float(1.5, 1.5), 1.5);
        assert_eq!(random_float(3.0, -1.0), 3.0);
        assert!(random_float(f64::NAN, 1.0).is_nan());
        assert_eq!(random_float(f64::NEG_INFINITY, 0.0), f64::NEG_INFINITY);
        assert_eq!(random_float(0.0, f64::INFINITY), 0.0);
    }

    #[test]
    fn random_float_spans_the_widest_finite_range() {
        let samples: Vec<f64> = (0..1000)
            .map(|_| random_float(-f64::MAX, f64::MAX))
            .collect();
        assert!(samples.iter().all(|v| v.is_finite()));
        assert!(samples.iter().any(|&v| v < 0.0));
        assert!(samples.iter().any(|&v| v > 0.0));
        let mut distinct = samples.clone();
        distinct.sort_by(f64::total_cmp);
        distinct.dedup();
        assert!(distinct.len() > 900, "distinct values: {}", distinct.len());
    }

    #[test]
    fn random_float_stays_in_range() {
        for _ in 0..10_000 {
            let v = random_float(-1.0, 1.0);
            assert!((-1.0..=1.0).contains(&v));
        }
    }
}
