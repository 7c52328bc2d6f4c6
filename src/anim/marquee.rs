//! # Continuous Marquee Scroller
//!
//! Two flavors of a horizontally looping strip, both built on the same trick:
//! the content is rendered twice back to back, so translating by exactly one
//! copy's width is indistinguishable from not translating at all.
//!
//! - [`Marquee`] derives its offset directly from elapsed time through the pure
//!   [`position`] function.
//! - [`ImageStrip`] keeps a persistent accumulator fed by per-frame time deltas
//!   so it can be paused and resumed without jumping.

use std::time::Duration;
use unicode_width::UnicodeWidthStr;

/// Columns of padding on each side of a marquee label (separator included).
pub const LABEL_PADDING: usize = 3;

/// Offset of a doubled strip after `elapsed` time at `speed` units/second.
///
/// `total_width` is the rendered (doubled) width; the result always lies in
/// `[0, total_width / 2)`. A strip with no width never moves.
pub fn position(elapsed: Duration, speed: f64, total_width: f64) -> f64 {
    let half = total_width / 2.0;
    if !half.is_finite() || half <= 0.0 || !speed.is_finite() {
        return 0.0;
    }
    let travelled = elapsed.as_secs_f64() * speed.abs();
    let offset = travelled.rem_euclid(half);
    // rem_euclid can round up to exactly `half` for tiny negative remainders
    if offset >= half {
        0.0
    } else {
        offset
    }
}

/// A ticker of text labels scrolling at a constant speed.
#[derive(Debug, Clone)]
pub struct Marquee {
    items: Vec<String>,
    /// Columns per second.
    speed: f64,
}

impl Marquee {
    pub fn new(items: Vec<String>, speed: f64) -> Self {
        Self { items, speed }
    }

    /// The rendered sequence: the logical list followed by itself.
    pub fn rendered_items(&self) -> impl Iterator<Item = &str> {
        self.items.iter().chain(self.items.iter()).map(String::as_str)
    }

    /// Width in columns of one logical copy.
    pub fn copy_width(&self) -> usize {
        self.items
            .iter()
            .map(|item| item.width() + LABEL_PADDING * 2)
            .sum()
    }

    /// Width in columns of the rendered (doubled) strip.
    pub fn rendered_width(&self) -> usize {
        self.copy_width() * 2
    }

    /// Leftward translation of the strip at `elapsed` time since mount.
    pub fn offset(&self, elapsed: Duration) -> f64 {
        position(elapsed, self.speed, self.rendered_width() as f64)
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }
}

/// A strip of cards that drifts left continuously and freezes while hovered.
#[derive(Debug, Clone)]
pub struct ImageStrip {
    /// Width of one logical copy of the strip.
    total_width: f64,
    /// Units per second.
    speed: f64,
    position: f64,
    last_frame: Option<Duration>,
    paused: bool,
}

impl ImageStrip {
    /// `item_count` cards of `item_width` (card plus gap) each.
    ///
    /// The strip always drifts left; only the magnitude of `speed` is used.
    pub fn new(item_count: usize, item_width: f64, speed: f64) -> Self {
        Self {
            total_width: item_count as f64 * item_width,
            speed: if speed.is_finite() { speed.abs() } else { 0.0 },
            position: 0.0,
            last_frame: None,
            paused: false,
        }
    }

    /// Frame callback: fold the time since the previous frame into the position.
    pub fn on_frame(&mut self, timestamp: Duration) {
        let last = *self.last_frame.get_or_insert(timestamp);
        let delta = timestamp.saturating_sub(last);
        self.last_frame = Some(timestamp);

        if self.paused || !self.total_width.is_finite() || self.total_width <= 0.0 {
            return;
        }
        let moved = self.position + self.speed * delta.as_secs_f64();
        self.position = moved.rem_euclid(self.total_width);
        if self.position >= self.total_width {
            self.position = 0.0;
        }
    }

    /// Pointer entered the strip: stop accumulating, keep the position.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Pointer left the strip: resume from the current position without
    /// applying the time spent paused.
    pub fn resume(&mut self) {
        self.paused = false;
        self.last_frame = None;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Current leftward translation, in `[0, total_width)`.
    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn total_width(&self) -> f64 {
        self.total_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_position_is_linear_before_wrap() {
        assert_eq!(position(ms(0), 50.0, 400.0), 0.0);
        assert!((position(ms(1000), 50.0, 400.0) - 50.0).abs() < 1e-9);
        assert!((position(ms(2000), 50.0, 400.0) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_position_wraps_at_half_width() {
        // half width is 200: four seconds at 50/s lands exactly on the seam
        assert_eq!(position(ms(4000), 50.0, 400.0), 0.0);
        assert!((position(ms(5000), 50.0, 400.0) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_position_with_no_width_stays_put() {
        assert_eq!(position(ms(1234), 50.0, 0.0), 0.0);
        assert_eq!(position(ms(1234), f64::NAN, 100.0), 0.0);
    }

    #[test]
    fn test_marquee_renders_items_twice() {
        let marquee = Marquee::new(vec!["Email Copy".into(), "A/B Testing".into()], 8.0);
        let rendered: Vec<&str> = marquee.rendered_items().collect();
        assert_eq!(
            rendered,
            vec!["Email Copy", "A/B Testing", "Email Copy", "A/B Testing"]
        );
        assert_eq!(marquee.rendered_width(), marquee.copy_width() * 2);
        assert_eq!(marquee.copy_width(), 10 + 11 + LABEL_PADDING * 4);
    }

    #[test]
    fn test_marquee_offset_stays_within_one_copy() {
        let marquee = Marquee::new(vec!["Lead Magnets".into()], 8.0);
        let copy = marquee.copy_width() as f64;
        for secs in 0..120 {
            let offset = marquee.offset(Duration::from_secs(secs));
            assert!((0.0..copy).contains(&offset));
        }
    }

    #[test]
    fn test_strip_accumulates_frame_deltas() {
        let mut strip = ImageStrip::new(4, 10.0, 20.0);
        strip.on_frame(ms(100));
        assert_eq!(strip.position(), 0.0);
        strip.on_frame(ms(600));
        assert!((strip.position() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_strip_wraps_by_total_width() {
        let mut strip = ImageStrip::new(2, 10.0, 20.0);
        strip.on_frame(ms(0));
        strip.on_frame(ms(1500));
        assert!((strip.position() - 10.0).abs() < 1e-9);
        strip.on_frame(ms(2000));
        assert!(strip.position().abs() < 1e-9);
    }

    #[test]
    fn test_strip_negative_speed_drifts_and_wraps() {
        let mut strip = ImageStrip::new(4, 70.0, -12.0);
        strip.on_frame(ms(0));
        strip.on_frame(ms(60_000));
        // 720 columns over a 280-column strip
        assert!((strip.position() - 160.0).abs() < 1e-9);
        assert!((0.0..strip.total_width()).contains(&strip.position()));
    }

    #[test]
    fn test_strip_with_non_finite_speed_stays_put() {
        let mut strip = ImageStrip::new(4, 10.0, f64::NAN);
        strip.on_frame(ms(0));
        strip.on_frame(ms(5000));
        assert_eq!(strip.position(), 0.0);
    }

    #[test]
    fn test_strip_pause_freezes_position() {
        let mut strip = ImageStrip::new(10, 10.0, 20.0);
        strip.on_frame(ms(0));
        strip.on_frame(ms(1000));
        strip.pause();
        strip.on_frame(ms(2000));
        strip.on_frame(ms(9000));
        assert!((strip.position() - 20.0).abs() < 1e-9);
        assert!(strip.is_paused());
    }

    #[test]
    fn test_strip_resume_does_not_apply_paused_time() {
        let mut strip = ImageStrip::new(10, 10.0, 20.0);
        strip.on_frame(ms(0));
        strip.on_frame(ms(1000));
        strip.pause();
        strip.resume();
        // Long gap between resume and the next frame is not debt
        strip.on_frame(ms(60_000));
        assert!((strip.position() - 20.0).abs() < 1e-9);
        strip.on_frame(ms(60_500));
        assert!((strip.position() - 30.0).abs() < 1e-9);
    }
}
