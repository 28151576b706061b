use utils::ring_buffer::RingBuffer;

pub use web_time::{Duration, Instant};

/// Something that knows how many seconds passed since the app started.
///
/// Frame computations take a `TimeSource` instead of reading a global clock,
/// so a test can pass a plain `f64` or `Duration`.
pub trait TimeSource {
    fn elapsed_secs(&self) -> f64;
}

impl TimeSource for f64 {
    #[inline]
    fn elapsed_secs(&self) -> f64 {
        *self
    }
}

impl TimeSource for Duration {
    #[inline]
    fn elapsed_secs(&self) -> f64 {
        self.as_secs_f64()
    }
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    #[inline]
    fn elapsed_secs(&self) -> f64 {
        (**self).elapsed_secs()
    }
}

/// How the clock advances on each tick
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TimeStep {
    /// Follow the wall clock
    #[default]
    Real,
    /// Advance exactly this amount per tick
    Fixed(Duration),
}

/// Measure Application times
#[derive(Debug, Clone)]
pub struct Time {
    step: TimeStep,
    init_time: Instant,
    last_time: Option<Instant>,
    delta: Duration,
    elapsed: Duration,
    frame_count: u64,
    fps_cache: RingBuffer<f32, 30>,
    last_cached_fps_time: Instant,
    fps: f32,
}

impl Default for Time {
    fn default() -> Time {
        Time::new(TimeStep::Real)
    }
}

impl Time {
    pub fn new(step: TimeStep) -> Self {
        let now = Instant::now();
        Time {
            step,
            init_time: now,
            last_time: None,
            delta: Duration::ZERO,
            elapsed: Duration::ZERO,
            frame_count: 0,
            fps_cache: Default::default(),
            last_cached_fps_time: now,
            fps: 0.0,
        }
    }

    /// Clock advancing `dt` on every tick regardless of the wall clock
    pub fn fixed(dt: Duration) -> Self {
        Time::new(TimeStep::Fixed(dt))
    }

    pub(crate) fn tick(&mut self) {
        let now = Instant::now();

        match self.step {
            TimeStep::Real => {
                if let Some(last_time) = self.last_time {
                    self.delta = now - last_time;
                }
                self.elapsed = now - self.init_time;
            }
            TimeStep::Fixed(dt) => {
                // the first tick is the frame at t=0
                if self.last_time.is_some() {
                    self.delta = dt;
                    self.elapsed += dt;
                }
            }
        }

        self.last_time = Some(now);
        self.frame_count += 1;

        let delta = self.delta.as_secs_f32();
        if delta <= 0.0 {
            return;
        }

        // cache fps each 100ms
        let cache_dt = now - self.last_cached_fps_time;
        let is_fixed = matches!(self.step, TimeStep::Fixed(_));
        if is_fixed || cache_dt.as_secs_f32() > 0.1 {
            self.fps_cache.push(delta);
            self.last_cached_fps_time = now;
            if let Some(avg) = self.fps_cache.average() {
                self.fps = 1.0 / avg;
            }
        }
    }

    /// Average frames per second (calculated using the last 30 samples)
    #[inline]
    pub fn fps(&self) -> f32 {
        self.fps
    }

    /// Delta time between frames
    #[inline]
    pub fn delta(&self) -> Duration {
        self.delta
    }

    /// Delta time between frames in seconds
    #[inline]
    pub fn delta_f32(&self) -> f32 {
        self.delta.as_secs_f32()
    }

    /// Elapsed time since application's init
    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Elapsed time since application's init in seconds
    #[inline]
    pub fn elapsed_f64(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    /// Number of ticks so far
    #[inline]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    #[inline]
    pub fn step(&self) -> TimeStep {
        self.step
    }

    /// Application's init time
    #[inline]
    pub fn init_time(&self) -> Instant {
        self.init_time
    }

    /// Last frame time
    #[inline]
    pub fn last_time(&self) -> Option<Instant> {
        self.last_time
    }
}

impl TimeSource for Time {
    #[inline]
    fn elapsed_secs(&self) -> f64 {
        self.elapsed_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Busy spin, to await N time and measure time, because thread::sleep is not precise
    fn busy_spin(duration: Duration) {
        let start = Instant::now();
        while start.elapsed() < duration {}
    }

    #[test]
    fn test_time_initialization() {
        let time = Time::default();

        assert_eq!(time.last_time(), None);
        assert_eq!(time.delta(), Duration::ZERO);
        assert_eq!(time.elapsed(), Duration::ZERO);
        assert_eq!(time.frame_count(), 0);
        assert_eq!(time.fps(), 0.0);
        assert_eq!(time.step(), TimeStep::Real);
    }

    #[test]
    fn test_real_tick() {
        let mut time = Time::default();
        time.tick();

        busy_spin(Duration::from_millis(50));
        time.tick();

        assert!(time.delta_f32() > 0.0);
        assert!(time.elapsed_f64() >= 0.05);
        assert!(time.last_time().is_some());
        assert_eq!(time.frame_count(), 2);
    }

    #[test]
    fn test_elapsed_is_monotonic() {
        let mut time = Time::default();
        let mut last = 0.0;
        for _ in 0..50 {
            time.tick();
            let now = time.elapsed_secs();
            assert!(now >= last);
            last = now;
        }
    }

    #[test]
    fn test_fixed_step() {
        let mut time = Time::fixed(Duration::from_millis(500));

        time.tick();
        assert_eq!(time.elapsed(), Duration::ZERO);

        time.tick();
        time.tick();
        assert_eq!(time.elapsed(), Duration::from_secs(1));
        assert_eq!(time.delta(), Duration::from_millis(500));
        assert_eq!(time.frame_count(), 3);
        assert!((time.fps() - 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_plain_sources() {
        assert_eq!(1.5_f64.elapsed_secs(), 1.5);
        assert_eq!(Duration::from_millis(250).elapsed_secs(), 0.25);

        let t = 3.0_f64;
        let by_ref: &dyn TimeSource = &t;
        assert_eq!(by_ref.elapsed_secs(), 3.0);
    }
}
