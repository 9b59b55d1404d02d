use std::time::{Duration, Instant};

/// Monotonic stopwatch scoped to one measured region.
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    start: Instant,
}

impl Stopwatch {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Elapsed wall-clock time in fractional milliseconds.
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed().as_secs_f64() * 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_is_monotonic() {
        let sw = Stopwatch::start();
        let first = sw.elapsed();
        std::thread::sleep(Duration::from_millis(2));
        let second = sw.elapsed();
        assert!(second >= first);
        assert!(second >= Duration::from_millis(2));
    }

    #[test]
    fn elapsed_ms_matches_duration() {
        let sw = Stopwatch::start();
        std::thread::sleep(Duration::from_millis(5));
        let ms = sw.elapsed_ms();
        assert!(ms >= 5.0);
        assert!(ms <= sw.elapsed().as_secs_f64() * 1000.0);
    }
}
