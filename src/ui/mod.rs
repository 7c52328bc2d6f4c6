//! # UI Module
//!
//! The terminal front end: page state, input handling and rendering.
//!
//! ## Components
//!
//! - [`App`] - Page state; owns every animation and routes time to it
//! - [`mod@input`] - Key and mouse dispatch
//! - [`mod@render`] - Drawing with ratatui, plus the hit map for the mouse
//! - [`overlay`] - Case study modal and the page scroll lock
//! - [`form`] - Contact form stub
//! - [`viewport`] - Page scroll and section visibility
//!
//! ## Layout
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │ Brand   1 Home  2 About  ...      ☾  [Work With Me] │  navbar (fixed)
//! ├─────────────────────────────────────────────────┤
//! │ Hero                                             │
//! │ Work strip                                       │
//! │ Metrics                                          │  page (scrolls)
//! │ About / Marquee / Services / Portfolio / ...     │
//! ├─────────────────────────────────────────────────┤
//! │ key hints / notices                     [↑ Top]  │  footer (fixed)
//! └─────────────────────────────────────────────────┘
//! ```

pub mod app;
pub mod config;
pub mod form;
pub mod input;
pub mod links;
pub mod overlay;
pub mod render;
pub mod theme;
pub mod viewport;

pub use app::{Action, App};
pub use render::render;
