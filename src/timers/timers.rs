use std::collections::HashMap;
use std::ops::{Deref, DerefMut};
use std::time::{Duration, Instant};

#[derive(Debug, Default)]
struct SamplesMap(HashMap<String, Vec<Duration>>);

impl Deref for SamplesMap {
    type Target = HashMap<String, Vec<Duration>>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
impl DerefMut for SamplesMap {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

/// Collects one wall clock sample per timed trial, grouped by key.
///
/// Only one trial can be active at a time.  Samples accumulate until
/// [`reset`](TrialTimer::reset) is called, so the same key can be timed
/// any number of times and summarised afterwards.
#[derive(Debug, Default)]
pub struct TrialTimer {
    active: Option<(String, Instant)>,
    samples: SamplesMap,
}

impl TrialTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// starts a trial under `key`, discarding any unfinished trial
    pub fn start(&mut self, key: &str) {
        self.active = Some((key.to_string(), Instant::now()));
    }

    /// stops the active trial and records its duration
    pub fn stop(&mut self) -> Option<Duration> {
        let (key, start) = self.active.take()?;
        let elapsed = start.elapsed();
        self.samples.entry(key).or_default().push(elapsed);
        Some(elapsed)
    }

    pub fn samples(&self, key: &str) -> &[Duration] {
        self.samples.get(key).map_or(&[], |v| v.as_slice())
    }

    /// shortest recorded sample for `key`
    pub fn min(&self, key: &str) -> Option<Duration> {
        self.samples(key).iter().min().copied()
    }

    /// mean of the recorded samples for `key`
    pub fn mean(&self, key: &str) -> Option<Duration> {
        let samples = self.samples(key);
        if samples.is_empty() {
            return None;
        }
        let total: Duration = samples.iter().sum();
        Some(total / samples.len() as u32)
    }

    pub fn reset_key(&mut self, key: &str) {
        self.samples.remove(key);
    }

    pub fn reset(&mut self) {
        self.active = None;
        self.samples.clear();
    }
}

/// Times the enclosed statements as one trial of `$key`
#[macro_export]
macro_rules! timeit {
    ($timer:ident => $key:expr; $($tt:tt)+) => {

        $timer.start($key);
        $(
            $tt
        )+
        $timer.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trial_timer_statistics() {
        let mut timer = TrialTimer::new();
        assert_eq!(timer.min("a"), None);
        assert_eq!(timer.mean("a"), None);

        // inject samples directly so the statistics are exact
        timer.samples.entry("a".to_string()).or_default().extend([
            Duration::from_millis(3),
            Duration::from_millis(1),
            Duration::from_millis(2),
        ]);
        assert_eq!(timer.min("a"), Some(Duration::from_millis(1)));
        assert_eq!(timer.mean("a"), Some(Duration::from_millis(2)));

        timer.reset_key("a");
        assert!(timer.samples("a").is_empty());
    }

    #[test]
    fn test_timeit_macro() {
        let mut timer = TrialTimer::new();
        let mut total = 0u64;
        for _ in 0..3 {
            timeit! {timer => "sum"; {
                total += (0..100u64).sum::<u64>();
            }}
        }
        assert_eq!(total, 3 * 4950);
        assert_eq!(timer.samples("sum").len(), 3);
        assert!(timer.stop().is_none());
    }
}
