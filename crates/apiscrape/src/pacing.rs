use std::time::Duration;

use rand::Rng;

/// Randomised delay inserted between consecutive requests so remote hosts
/// do not see a burst of traffic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacer {
    min: Duration,
    max: Duration,
}

impl Default for Pacer {
    fn default() -> Self {
        Self::new(Duration::from_secs(1), Duration::from_secs(3))
    }
}

impl Pacer {
    /// Bounds are swapped when given in the wrong order.
    pub fn new(min: Duration, max: Duration) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    pub fn disabled() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO)
    }

    pub fn min(&self) -> Duration {
        self.min
    }

    pub fn max(&self) -> Duration {
        self.max
    }

    pub fn is_disabled(&self) -> bool {
        self.max.is_zero()
    }

    /// Draws a delay uniformly from `[min, max]`.
    pub fn sample(&self) -> Duration {
        if self.min == self.max {
            return self.min;
        }
        let micros = rand::rng().random_range(self.min.as_micros()..=self.max.as_micros());
        Duration::from_micros(micros as u64)
    }

    /// Sleeps for a sampled delay and returns how long was requested.
    pub async fn pause(&self) -> Duration {
        let delay = self.sample();
        if !delay.is_zero() {
            log::debug!("Pausing for {:?} before the next request", delay);
            tokio::time::sleep(delay).await;
        }
        delay
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_range_is_one_to_three_seconds() {
        let pacer = Pacer::default();
        assert_eq!(pacer.min(), Duration::from_secs(1));
        assert_eq!(pacer.max(), Duration::from_secs(3));
    }

    #[test]
    fn test_sample_stays_within_bounds() {
        let pacer = Pacer::default();
        for _ in 0..1000 {
            let delay = pacer.sample();
            assert!(delay >= Duration::from_secs(1), "sampled {:?}", delay);
            assert!(delay <= Duration::from_secs(3), "sampled {:?}", delay);
        }
    }

    #[test]
    fn test_sample_is_not_constant() {
        let pacer = Pacer::default();
        let first = pacer.sample();
        assert!((0..100).any(|_| pacer.sample() != first));
    }

    #[test]
    fn test_reversed_bounds_are_normalised() {
        let pacer = Pacer::new(Duration::from_millis(30), Duration::from_millis(10));
        assert_eq!(pacer.min(), Duration::from_millis(10));
        assert_eq!(pacer.max(), Duration::from_millis(30));
    }

    #[test]
    fn test_disabled_never_waits() {
        let pacer = Pacer::disabled();
        assert!(pacer.is_disabled());
        assert_eq!(pacer.sample(), Duration::ZERO);
    }

    #[tokio::test]
    async fn test_pause_blocks_for_sampled_delay() {
        let pacer = Pacer::new(Duration::from_millis(5), Duration::from_millis(15));
        let started = std::time::Instant::now();
        let slept = pacer.pause().await;
        let elapsed = started.elapsed();

        assert!(slept >= Duration::from_millis(5) && slept <= Duration::from_millis(15));
        assert!(elapsed >= slept, "elapsed {:?} < slept {:?}", elapsed, slept);
    }
}
