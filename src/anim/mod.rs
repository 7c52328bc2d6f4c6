//! # Animation Module
//!
//! Small, self-contained animation state machines. None of them touch the
//! terminal: each takes the elapsed time since the page was mounted (or a
//! pointer coordinate) and exposes the values the renderer should draw.
//!
//! | Component | Driven by | Loop behavior |
//! |-----------|-----------|---------------|
//! | [`Typewriter`] | one-shot timers | cycles phrases forever |
//! | [`Marquee`] | frame time | wraps at one copy's width |
//! | [`ImageStrip`] | frame deltas, hover pause | wraps at one copy's width |
//! | [`Carousel`] | key presses, drags | clamps at both ends |
//! | [`CounterGroup`] | viewport visibility | runs once, never replays |

pub mod carousel;
pub mod counter;
pub mod easing;
pub mod marquee;
pub mod typewriter;

pub use carousel::{Carousel, DragTracker, Swipe, DRAG_THRESHOLD};
pub use counter::{Counter, CounterGroup, Precision, Visibility};
pub use marquee::{position, ImageStrip, Marquee};
pub use typewriter::{cursor_visible, Typewriter};
