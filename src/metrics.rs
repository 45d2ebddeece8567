use crate::http::Response;
use itertools::Itertools;
use std::{collections::BTreeMap, fmt, time::Duration};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CheckCount {
    pub passes: u64,
    pub fails: u64,
}

impl CheckCount {
    pub fn total(&self) -> u64 {
        self.passes + self.fails
    }

    pub fn pass_rate(&self) -> f64 {
        rate(self.passes, self.total())
    }
}

/// HTTP request counters. Transport failures are counted but carry no timing.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RequestStats {
    pub count: u64,
    pub failed: u64,
    pub timed: u64,
    pub total: Duration,
    pub min: Option<Duration>,
    pub max: Duration,
}

impl RequestStats {
    pub fn record(&mut self, response: &Response) {
        self.count += 1;

        if response.is_failure() {
            self.failed += 1;
        }

        if response.is_transport_error() {
            return;
        }

        self.timed += 1;
        self.total += response.elapsed;
        self.max = self.max.max(response.elapsed);
        self.min = Some(match self.min {
            Some(min) => min.min(response.elapsed),
            None => response.elapsed,
        });
    }

    pub fn merge(&mut self, other: &RequestStats) {
        self.count += other.count;
        self.failed += other.failed;
        self.timed += other.timed;
        self.total += other.total;
        self.max = self.max.max(other.max);
        self.min = match (self.min, other.min) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
    }

    pub fn average(&self) -> Duration {
        if self.timed == 0 {
            return Duration::ZERO;
        }
        Duration::from_nanos((self.total.as_nanos() / u128::from(self.timed)) as u64)
    }
}

#[derive(Debug, Default, Clone)]
pub struct Tally {
    pub checks: BTreeMap<String, CheckCount>,
    pub iterations: u64,
    pub requests: RequestStats,
}

impl Tally {
    pub fn record_check(&mut self, name: &str, passed: bool) {
        let count = self.checks.entry(name.to_owned()).or_default();
        if passed {
            count.passes += 1;
        } else {
            count.fails += 1;
        }
    }

    pub fn record_request(&mut self, response: &Response) {
        self.requests.record(response);
    }

    pub fn merge(&mut self, other: Tally) {
        for (name, count) in other.checks {
            let entry = self.checks.entry(name).or_default();
            entry.passes += count.passes;
            entry.fails += count.fails;
        }
        self.iterations += other.iterations;
        self.requests.merge(&other.requests);
    }
}

#[derive(Debug, Clone)]
pub struct Summary {
    pub driver: String,
    pub vus: usize,
    pub elapsed: Duration,
    pub tally: Tally,
}

impl Summary {
    pub fn checks_passed(&self) -> bool {
        self.tally.checks.values().all(|count| count.fails == 0)
    }

    pub fn iteration_rate(&self) -> f64 {
        per_second(self.tally.iterations, self.elapsed)
    }

    pub fn request_rate(&self) -> f64 {
        per_second(self.tally.requests.count, self.elapsed)
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let requests = &self.tally.requests;

        writeln!(
            f,
            "driver {} finished: {} vus, {:.1}s",
            self.driver,
            self.vus,
            self.elapsed.as_secs_f64()
        )?;

        let checks = self
            .tally
            .checks
            .iter()
            .map(|(name, count)| {
                let mark = if count.fails == 0 { '✓' } else { '✗' };
                format!(
                    "  {} {:<24} {:>6.2}% ({} passed, {} failed)",
                    mark,
                    name,
                    count.pass_rate() * 100.0,
                    count.passes,
                    count.fails
                )
            })
            .join("\n");
        writeln!(f, "{}", checks)?;

        writeln!(
            f,
            "  iterations: {} ({:.1}/s)",
            self.tally.iterations,
            self.iteration_rate()
        )?;
        writeln!(
            f,
            "  http requests: {} ({:.1}/s), failed: {:.2}%",
            requests.count,
            self.request_rate(),
            rate(requests.failed, requests.count) * 100.0
        )?;
        write!(
            f,
            "  http request duration: avg={:?} min={:?} max={:?}",
            requests.average(),
            requests.min.unwrap_or_default(),
            requests.max
        )
    }
}

fn rate(part: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    part as f64 / total as f64
}

fn per_second(count: u64, elapsed: Duration) -> f64 {
    let secs = elapsed.as_secs_f64();
    if secs == 0.0 {
        return 0.0;
    }
    count as f64 / secs
}
