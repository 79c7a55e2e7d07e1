//! Monotonic time sources and frame delta guarding

use std::time::Instant;

/// A monotonic time source, in seconds since an arbitrary origin
pub trait Clock {
    fn now(&mut self) -> f64;
}

/// Wall clock backed by `Instant`
#[derive(Debug, Clone)]
pub struct SystemClock {
    origin: Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    fn now(&mut self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

/// Hand-driven clock for headless runs and tests
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    time: f64,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, secs: f64) {
        self.time += secs;
    }

    pub fn set(&mut self, time: f64) {
        self.time = time;
    }
}

impl Clock for ManualClock {
    fn now(&mut self) -> f64 {
        self.time
    }
}

/// Guard a frame delta: NaN, infinite and negative become 0, large values are capped
#[inline]
pub fn sanitize_dt(dt: f32, max_dt: f32) -> f32 {
    if !dt.is_finite() || dt <= 0.0 {
        return 0.0;
    }
    dt.min(max_dt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_manual_clock() {
        let mut clock = ManualClock::new();
        assert_eq!(clock.now(), 0.0);
        clock.advance(0.5);
        clock.advance(0.25);
        assert_eq!(clock.now(), 0.75);
        clock.set(0.1);
        assert_eq!(clock.now(), 0.1);
    }

    #[test]
    fn test_system_clock_is_monotonic() {
        let mut clock = SystemClock::new();
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }

    #[test]
    fn test_sanitize_dt() {
        assert_eq!(sanitize_dt(f32::NAN, 0.25), 0.0);
        assert_eq!(sanitize_dt(f32::INFINITY, 0.25), 0.0);
        assert_eq!(sanitize_dt(-0.1, 0.25), 0.0);
        assert_eq!(sanitize_dt(0.016, 0.25), 0.016);
        assert_eq!(sanitize_dt(3.0, 0.25), 0.25);
    }

    proptest! {
        #[test]
        fn sanitized_dt_is_within_bounds(dt in proptest::num::f32::ANY) {
            let out = sanitize_dt(dt, 0.25);
            prop_assert!(out.is_finite());
            prop_assert!((0.0..=0.25).contains(&out));
        }
    }
}
