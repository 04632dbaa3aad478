use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// Shared stop flag for a [`TickDriver`]. Cloning hands out another handle
/// to the same flag.
#[derive(Clone, Debug, Default)]
pub struct CancelHandle {
    cancelled: Arc<AtomicBool>,
}

impl CancelHandle {
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickDecision {
    /// Enough time has passed: update and draw.
    Run,
    /// Too early; do nothing this frame.
    Skip,
    /// Cancelled; the caller should stop scheduling frames.
    Stopped,
}

/// Turns a free-running frame clock into throttled logical ticks.
///
/// The caller reports the current timestamp on every frame; the driver
/// answers whether a tick is due given the current tick interval. Time is
/// measured from an arbitrary origin chosen by the caller.
#[derive(Debug)]
pub struct TickDriver {
    last_tick: Duration,
    ticks: u64,
    cancel: CancelHandle,
}

impl TickDriver {
    pub fn new(origin: Duration) -> Self {
        Self {
            last_tick: origin,
            ticks: 0,
            cancel: CancelHandle::default(),
        }
    }

    pub fn cancel_handle(&self) -> CancelHandle {
        self.cancel.clone()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn poll(&mut self, now: Duration, interval: Duration) -> TickDecision {
        if self.cancel.is_cancelled() {
            return TickDecision::Stopped;
        }

        let elapsed = now.saturating_sub(self.last_tick);
        if elapsed < interval {
            return TickDecision::Skip;
        }

        self.last_tick = now;
        self.ticks += 1;
        TickDecision::Run
    }
}

/// Tick interval for a speed given in ticks per second.
pub fn interval_for_speed(speed: f32) -> Duration {
    Duration::from_secs_f64(1.0 / f64::from(speed))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn test_skips_until_interval_elapsed() {
        let mut driver = TickDriver::new(ms(0));
        let interval = ms(100);
        assert_eq!(driver.poll(ms(0), interval), TickDecision::Skip);
        assert_eq!(driver.poll(ms(16), interval), TickDecision::Skip);
        assert_eq!(driver.poll(ms(99), interval), TickDecision::Skip);
        assert_eq!(driver.poll(ms(100), interval), TickDecision::Run);
        assert_eq!(driver.poll(ms(150), interval), TickDecision::Skip);
        assert_eq!(driver.poll(ms(216), interval), TickDecision::Run);
        assert_eq!(driver.ticks(), 2);
    }

    #[test]
    fn test_interval_measured_from_last_executed_tick() {
        let mut driver = TickDriver::new(ms(0));
        assert_eq!(driver.poll(ms(250), ms(100)), TickDecision::Run);
        // A late frame does not bank extra ticks.
        assert_eq!(driver.poll(ms(260), ms(100)), TickDecision::Skip);
        assert_eq!(driver.poll(ms(350), ms(100)), TickDecision::Run);
    }

    #[test]
    fn test_shorter_interval_ticks_sooner() {
        let mut driver = TickDriver::new(ms(0));
        assert_eq!(driver.poll(ms(60), ms(66)), TickDecision::Skip);
        assert_eq!(driver.poll(ms(60), ms(50)), TickDecision::Run);
    }

    #[test]
    fn test_cancel_stops_driver() {
        let mut driver = TickDriver::new(ms(0));
        let handle = driver.cancel_handle();
        assert!(!handle.is_cancelled());
        handle.cancel();
        assert_eq!(driver.poll(ms(10_000), ms(1)), TickDecision::Stopped);
        assert_eq!(driver.ticks(), 0);
    }

    #[test]
    fn test_interval_for_speed() {
        assert_eq!(interval_for_speed(10.0), ms(100));
        assert!(interval_for_speed(15.25) < interval_for_speed(15.0));
    }
}
