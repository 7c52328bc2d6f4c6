//! Folio - a terminal rendition of a copywriter's portfolio page
//!
//! This library provides the animation state machines (typewriter, marquee,
//! carousel, counters), the site content model, and the ratatui front end that
//! composes them into a scrollable page.

pub mod anim;
pub mod content;
pub mod ui;
