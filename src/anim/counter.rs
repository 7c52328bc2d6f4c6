//! # Viewport-Triggered Counters
//!
//! Statistic counters that count up from zero to their target once, starting
//! the first time their section scrolls into view.
//!
//! The viewport is not read directly: callers hand in anything implementing
//! [`Visibility`], which lets tests drive the trigger with a fake signal.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default time from trigger to final value.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(2000);

/// Number of discrete updates spread across the duration.
pub const DEFAULT_STEPS: u32 = 60;

/// Fraction of the section that must be visible before counting starts.
pub const DEFAULT_THRESHOLD: f64 = 0.3;

/// Read-only signal describing how much of a region is on screen.
pub trait Visibility {
    /// Visible fraction of the observed region, in `[0, 1]`.
    fn intersection_ratio(&self) -> f64;

    fn is_intersecting(&self, threshold: f64) -> bool {
        let ratio = self.intersection_ratio();
        ratio > 0.0 && ratio >= threshold
    }
}

/// How a counter's intermediate values are rounded for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Precision {
    /// Floor to a whole number.
    #[default]
    Whole,
    /// Round to one decimal place.
    OneDecimal,
}

impl Precision {
    fn apply(self, value: f64) -> f64 {
        match self {
            Precision::Whole => value.floor(),
            Precision::OneDecimal => (value * 10.0).round() / 10.0,
        }
    }

    /// Render `value` with the number of decimals this precision shows.
    pub fn format(self, value: f64) -> String {
        match self {
            Precision::Whole => format!("{value:.0}"),
            Precision::OneDecimal => format!("{value:.1}"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Counter {
    target: f64,
    precision: Precision,
    duration: Duration,
    steps: u32,
    triggered_at: Option<Duration>,
    value: f64,
}

impl Counter {
    pub fn new(target: f64, precision: Precision, duration: Duration) -> Self {
        Self {
            target: target.max(0.0),
            precision,
            duration,
            steps: DEFAULT_STEPS,
            triggered_at: None,
            value: 0.0,
        }
    }

    /// Start counting at `now`. Later calls are ignored: a counter never replays.
    pub fn trigger(&mut self, now: Duration) {
        if self.triggered_at.is_none() {
            self.triggered_at = Some(now);
            self.advance(now);
        }
    }

    pub fn has_triggered(&self) -> bool {
        self.triggered_at.is_some()
    }

    /// Recompute the displayed value for `now`.
    pub fn advance(&mut self, now: Duration) {
        let Some(started) = self.triggered_at else {
            return;
        };
        if self.value >= self.target {
            return;
        }
        let elapsed = now.saturating_sub(started);
        let interval = self.duration / self.steps.max(1);
        let step = if interval.is_zero() {
            u128::from(self.steps)
        } else {
            (elapsed.as_nanos() / interval.as_nanos()).min(u128::from(self.steps))
        };

        if step >= u128::from(self.steps) {
            self.value = self.target;
            return;
        }
        let progress = step as f64 / f64::from(self.steps);
        let next = self.precision.apply(self.target * progress).min(self.target);
        self.value = self.value.max(next);
    }

    /// The value on screen right now.
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn is_finished(&self) -> bool {
        self.has_triggered() && self.value >= self.target
    }

    pub fn formatted(&self) -> String {
        self.precision.format(self.value)
    }
}

/// Counters that share one trigger region (a statistics section).
#[derive(Debug, Clone)]
pub struct CounterGroup {
    counters: Vec<Counter>,
    threshold: f64,
}

impl CounterGroup {
    pub fn new(counters: Vec<Counter>, threshold: f64) -> Self {
        Self {
            counters,
            threshold,
        }
    }

    /// Feed the current visibility of the section and advance every counter.
    pub fn update(&mut self, signal: &dyn Visibility, now: Duration) {
        if !self.has_triggered() && signal.is_intersecting(self.threshold) {
            tracing::debug!(now_ms = now.as_millis() as u64, "counters triggered");
            for counter in &mut self.counters {
                counter.trigger(now);
            }
        }
        for counter in &mut self.counters {
            counter.advance(now);
        }
    }

    pub fn has_triggered(&self) -> bool {
        self.counters.iter().any(Counter::has_triggered)
    }

    pub fn counters(&self) -> &[Counter] {
        &self.counters
    }
}
