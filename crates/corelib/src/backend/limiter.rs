use spin_sleep_util::Interval;
use std::time::Duration;

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LimitMode {
    Target(Duration),
    #[default]
    Disabled,
}

impl LimitMode {
    #[inline]
    pub fn from_fps(fps: Option<u8>) -> Self {
        match fps {
            Some(fps) if fps > 0 => LimitMode::Target(Duration::from_secs_f64(1.0 / fps as f64)),
            _ => LimitMode::Disabled,
        }
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        !matches!(self, LimitMode::Disabled)
    }

    #[inline]
    pub fn period(&self) -> Duration {
        match self {
            LimitMode::Target(dt) => *dt,
            LimitMode::Disabled => Duration::ZERO,
        }
    }
}

/// Sleeps between ticks to keep a steady frame rate
pub(crate) struct FpsLimiter {
    mode: LimitMode,
    interval: Option<Interval>,
}

impl FpsLimiter {
    pub fn new(mode: LimitMode) -> Self {
        let interval = mode.is_enabled().then(|| {
            log::debug!("FPSLimiter enabled with mode={mode:?}");
            spin_sleep_util::interval(mode.period())
        });

        FpsLimiter { mode, interval }
    }

    #[inline]
    pub fn mode(&self) -> LimitMode {
        self.mode
    }

    /// Blocks until the next tick is due, does nothing when disabled
    #[inline(always)]
    pub fn tick(&mut self) {
        if let Some(interval) = &mut self.interval {
            interval.tick();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    const EPS: f64 = 1e-9;

    #[test]
    fn limit_mode_is_enabled() {
        assert!(LimitMode::Target(Duration::from_secs(1)).is_enabled());
        assert!(!LimitMode::Disabled.is_enabled());
    }

    #[test]
    fn from_fps_computes_inverse() {
        let mode = LimitMode::from_fps(Some(60));
        let actual = mode.period().as_secs_f64();
        let expected = 1.0 / 60.0;
        assert!(
            (actual - expected).abs() < EPS,
            "got {actual}, expected {expected}"
        );
    }

    #[test]
    fn from_fps_none_or_zero_is_disabled() {
        assert_eq!(LimitMode::from_fps(None), LimitMode::Disabled);
        assert_eq!(LimitMode::from_fps(Some(0)), LimitMode::Disabled);
        assert_eq!(LimitMode::Disabled.period(), Duration::ZERO);
    }

    #[test]
    fn tick_does_not_sleep_when_off() {
        let mut limiter = FpsLimiter::new(LimitMode::Disabled);
        let start = Instant::now();
        (0..100).for_each(|_| limiter.tick());
        assert!(start.elapsed() < Duration::from_millis(100));
    }

    #[test]
    fn tick_paces_frames() {
        let mut limiter = FpsLimiter::new(LimitMode::from_fps(Some(100)));
        let start = Instant::now();
        // the first tick returns right away, the next five wait ~10ms each
        (0..6).for_each(|_| limiter.tick());
        assert!(start.elapsed() >= Duration::from_millis(45));
    }
}
