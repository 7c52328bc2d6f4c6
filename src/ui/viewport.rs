//! # Viewport
//!
//! The page is a vertical stack of sections with fixed row heights. The
//! viewport tracks how far the page is scrolled and answers the questions the
//! page asks about it: how much of a section is on screen, whether the layout
//! should switch to its narrow variant, and whether the scroll-to-top control
//! should be showing.

use crate::anim::Visibility;

/// Terminal width (columns) below which the narrow layout is used.
pub const MOBILE_BREAKPOINT: u16 = 80;

/// Scroll (rows) past which the navbar switches to its scrolled style.
pub const NAV_SCROLLED_ROWS: u16 = 2;

/// Scroll (rows) past which the scroll-to-top control appears.
pub const SCROLL_TOP_ROWS: u16 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Hero,
    WorkStrip,
    Metrics,
    About,
    Marquee,
    Services,
    Portfolio,
    Clients,
    Contact,
}

impl Section {
    /// Page order, top to bottom.
    pub const ALL: [Section; 9] = [
        Section::Hero,
        Section::WorkStrip,
        Section::Metrics,
        Section::About,
        Section::Marquee,
        Section::Services,
        Section::Portfolio,
        Section::Clients,
        Section::Contact,
    ];
}

/// Where a section sits on the page, in rows from the top of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpan {
    pub section: Section,
    pub top: u16,
    pub height: u16,
}

impl SectionSpan {
    fn bottom(&self) -> u16 {
        self.top.saturating_add(self.height)
    }
}

/// Visible fraction of one section at the current scroll position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionVisibility {
    ratio: f64,
}

impl Visibility for SectionVisibility {
    fn intersection_ratio(&self) -> f64 {
        self.ratio
    }
}

#[derive(Debug, Clone, Default)]
pub struct Viewport {
    scroll: u16,
    width: u16,
    /// Rows available to the scrolling page (terminal minus fixed chrome).
    height: u16,
    spans: Vec<SectionSpan>,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Stack `heights` top to bottom. The scroll is re-clamped to the new page.
    pub fn set_layout(&mut self, heights: &[(Section, u16)]) {
        let mut top = 0u16;
        self.spans = heights
            .iter()
            .map(|&(section, height)| {
                let span = SectionSpan {
                    section,
                    top,
                    height,
                };
                top = top.saturating_add(height);
                span
            })
            .collect();
        self.scroll = self.scroll.min(self.max_scroll());
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.scroll = self.scroll.min(self.max_scroll());
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn spans(&self) -> &[SectionSpan] {
        &self.spans
    }

    pub fn page_height(&self) -> u16 {
        self.spans.last().map_or(0, SectionSpan::bottom)
    }

    pub fn max_scroll(&self) -> u16 {
        self.page_height().saturating_sub(self.height)
    }

    pub fn scroll_by(&mut self, delta: i32) {
        let next = (i32::from(self.scroll) + delta).clamp(0, i32::from(self.max_scroll()));
        self.scroll = u16::try_from(next).unwrap_or(0);
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll = 0;
    }

    /// Bring the top of `section` to the top of the viewport (or as close as
    /// the page length allows).
    pub fn scroll_to_section(&mut self, section: Section) {
        if let Some(span) = self.span(section) {
            self.scroll = span.top.min(self.max_scroll());
        }
    }

    pub fn span(&self, section: Section) -> Option<SectionSpan> {
        self.spans.iter().copied().find(|s| s.section == section)
    }

    /// Screen-relative row range `(first_row, rows)` of a section, clipped to
    /// the viewport. `None` when it is entirely off screen.
    pub fn on_screen(&self, section: Section) -> Option<(u16, u16)> {
        let span = self.span(section)?;
        let view_bottom = self.scroll.saturating_add(self.height);
        let start = span.top.max(self.scroll);
        let end = span.bottom().min(view_bottom);
        (end > start).then(|| (start - self.scroll, end - start))
    }

    pub fn visibility(&self, section: Section) -> SectionVisibility {
        let ratio = match (self.span(section), self.on_screen(section)) {
            (Some(span), Some((_, rows))) if span.height > 0 => {
                f64::from(rows) / f64::from(span.height)
            }
            _ => 0.0,
        };
        SectionVisibility { ratio }
    }

    pub fn is_mobile(&self) -> bool {
        self.width < MOBILE_BREAKPOINT
    }

    pub fn is_scrolled(&self) -> bool {
        self.scroll > NAV_SCROLLED_ROWS
    }

    pub fn shows_scroll_top(&self) -> bool {
        self.scroll > SCROLL_TOP_ROWS
    }
}
