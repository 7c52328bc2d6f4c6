//! # Drag/Swipe Carousel
//!
//! An index-based pager over a fixed number of items. Navigation clamps at
//! both ends (no wrap-around). A horizontal drag longer than
//! [`DRAG_THRESHOLD`] pages once in the drag direction; anything shorter is
//! treated as a click or jitter and ignored.
//!
//! The visible track is translated by `-(index × 100%)` of the viewport and
//! eases between pages over [`TRANSITION`].

use super::easing::{CubicBezier, CAROUSEL_EASE};
use std::time::Duration;

/// Minimum horizontal travel (exclusive) for a drag to count as a swipe.
pub const DRAG_THRESHOLD: f64 = 40.0;

/// Duration of the track slide between two pages.
pub const TRANSITION: Duration = Duration::from_millis(420);

/// Outcome of a completed drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// Dragged left: show the next item.
    Next,
    /// Dragged right: show the previous item.
    Previous,
}

/// Tracks a single pointer drag from press to release.
#[derive(Debug, Clone, Default)]
pub struct DragTracker {
    start_x: Option<f64>,
}

impl DragTracker {
    pub fn start(&mut self, x: f64) {
        self.start_x = Some(x);
    }

    pub fn is_dragging(&self) -> bool {
        self.start_x.is_some()
    }

    /// Finish the drag at `x`. Returns `None` when no drag was in progress or
    /// the travel stayed inside the dead zone.
    pub fn end(&mut self, x: f64) -> Option<Swipe> {
        let start = self.start_x.take()?;
        let delta = start - x;
        if delta > DRAG_THRESHOLD {
            Some(Swipe::Next)
        } else if delta < -DRAG_THRESHOLD {
            Some(Swipe::Previous)
        } else {
            None
        }
    }

    pub fn cancel(&mut self) {
        self.start_x = None;
    }
}

// In-flight slide of the track between two page positions.
#[derive(Debug, Clone, Copy)]
struct Slide {
    from: f64,
    started_at: Duration,
}

#[derive(Debug, Clone)]
pub struct Carousel {
    index: usize,
    count: usize,
    drag: DragTracker,
    easing: CubicBezier,
    slide: Option<Slide>,
    /// Latest time seen by [`Carousel::tick`]; index changes start sliding here.
    now: Duration,
}

impl Carousel {
    pub fn new(count: usize) -> Self {
        Self {
            index: 0,
            count,
            drag: DragTracker::default(),
            easing: CAROUSEL_EASE,
            slide: None,
            now: Duration::ZERO,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Move one item forward; no-op on the last item.
    pub fn next(&mut self) {
        let last = self.count.saturating_sub(1);
        self.set_index((self.index + 1).min(last));
    }

    /// Move one item back; no-op on the first item.
    pub fn prev(&mut self) {
        self.set_index(self.index.saturating_sub(1));
    }

    /// Jump straight to `index`, clamped into range.
    pub fn go(&mut self, index: usize) {
        self.set_index(index.min(self.count.saturating_sub(1)));
    }

    /// Change the number of items (e.g. after filtering) and pull the index
    /// back into range.
    pub fn set_count(&mut self, count: usize) {
        self.count = count;
        self.go(self.index);
    }

    fn set_index(&mut self, index: usize) {
        if index == self.index {
            return;
        }
        let from = self.track_position();
        self.index = index;
        self.slide = Some(Slide {
            from,
            started_at: self.now,
        });
    }

    pub fn drag_start(&mut self, x: f64) {
        self.drag.start(x);
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Release the pointer at `x`, paging if the drag cleared the dead zone.
    pub fn drag_end(&mut self, x: f64) -> Option<Swipe> {
        let swipe = self.drag.end(x)?;
        match swipe {
            Swipe::Next => self.next(),
            Swipe::Previous => self.prev(),
        }
        Some(swipe)
    }

    /// Advance the transition clock.
    pub fn tick(&mut self, now: Duration) {
        self.now = now;
        if let Some(slide) = self.slide {
            if now.saturating_sub(slide.started_at) >= TRANSITION {
                self.slide = None;
            }
        }
    }

    /// Resting translation of the track, in percent of the viewport width.
    pub fn track_offset_percent(&self) -> i64 {
        -(self.index as i64 * 100)
    }

    /// Current position of the track measured in pages (0.0 = first item),
    /// including any slide in progress.
    pub fn track_position(&self) -> f64 {
        let target = self.index as f64;
        let Some(slide) = self.slide else {
            return target;
        };
        let elapsed = self.now.saturating_sub(slide.started_at);
        let t = elapsed.as_secs_f64() / TRANSITION.as_secs_f64();
        slide.from + (target - slide.from) * self.easing.ease(t)
    }

    /// One flag per indicator dot: `true` for the active item.
    pub fn indicators(&self) -> Vec<bool> {
        (0..self.count).map(|i| i == self.index).collect()
    }
}
