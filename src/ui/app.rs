//! # Page State
//!
//! [`App`] owns every component on the page and advances them from a single
//! clock. Components never talk to each other; the app only routes input and
//! time to them.

use crate::anim::counter::DEFAULT_THRESHOLD;
use crate::anim::easing::EASE;
use crate::anim::{Carousel, Counter, CounterGroup, ImageStrip, Marquee, Typewriter};
use crate::content::{CaseStudy, SiteContent};
use crate::ui::config::Config;
use crate::ui::form::ContactForm;
use crate::ui::overlay::{DetailOverlay, ScrollLock};
use crate::ui::render::HitMap;
use crate::ui::theme::Theme;
use crate::ui::viewport::{Section, Viewport};
use rand::Rng;
use std::time::Duration;
use unicode_width::UnicodeWidthStr;

/// Rows taken by the fixed navbar above the page.
pub const NAV_HEIGHT: u16 = 2;
/// Rows taken by the fixed footer below the page.
pub const FOOTER_HEIGHT: u16 = 1;

/// Columns one work-strip card occupies, gap included.
pub const STRIP_PITCH: u16 = 20;
pub const STRIP_CARD_ROWS: u16 = 5;

pub const SERVICE_CARD_HEIGHT: u16 = 8;
pub const PORTFOLIO_CARD_HEIGHT: u16 = 9;
pub const CLIENT_CARD_HEIGHT: u16 = 8;

/// Horizontal drag units per terminal column.
pub const PX_PER_COLUMN: f64 = 8.0;

/// How long the hero underline takes to draw itself.
pub const RULE_EXPAND: Duration = Duration::from_millis(800);

/// How long a footer notice stays up.
pub const NOTICE_TIMEOUT: Duration = Duration::from_secs(3);

const SPARKLE_COUNT: usize = 12;
const SPARKLE_GLYPHS: [char; 3] = ['✦', '✧', '·'];

/// Interactive sections reachable with Tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Services,
    Portfolio,
    Clients,
    Contact,
}

impl Focus {
    pub const ALL: [Focus; 4] = [
        Focus::Services,
        Focus::Portfolio,
        Focus::Clients,
        Focus::Contact,
    ];

    pub fn section(self) -> Section {
        match self {
            Focus::Services => Section::Services,
            Focus::Portfolio => Section::Portfolio,
            Focus::Clients => Section::Clients,
            Focus::Contact => Section::Contact,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselId {
    Portfolio,
    Clients,
}

/// Side effects the event loop performs on the app's behalf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    OpenLink(String),
    PersistTheme,
}

/// A decorative star in the hero, placed once when the page mounts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sparkle {
    /// Horizontal position as a fraction of the hero width.
    pub x: f64,
    /// Vertical position as a fraction of the hero height.
    pub y: f64,
    pub glyph: char,
    /// Offset into the twinkle cycle.
    pub phase: Duration,
}

impl Sparkle {
    const TWINKLE: Duration = Duration::from_millis(2100);

    pub fn is_lit(&self, now: Duration) -> bool {
        let t = (now + self.phase).as_millis() % Self::TWINKLE.as_millis();
        t < Self::TWINKLE.as_millis() * 2 / 3
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub shown_at: Duration,
}

/// Position of one filter chip: row within the chip block, column, width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChipSlot {
    pub row: u16,
    pub col: u16,
    pub width: u16,
}

/// Flow filter labels left to right, wrapping onto new rows at `width`.
pub fn layout_chips(labels: &[String], width: u16) -> Vec<ChipSlot> {
    let mut slots = Vec::with_capacity(labels.len());
    let (mut row, mut col) = (0u16, 0u16);
    for label in labels {
        let chip = u16::try_from(label.width()).unwrap_or(u16::MAX).saturating_add(4);
        if col > 0 && col.saturating_add(chip) > width {
            row += 1;
            col = 0;
        }
        slots.push(ChipSlot {
            row,
            col,
            width: chip,
        });
        col = col.saturating_add(chip + 1);
    }
    slots
}

fn rows_for(items: usize, per_row: usize) -> u16 {
    u16::try_from(items.div_ceil(per_row.max(1)).max(1)).unwrap_or(u16::MAX)
}

pub struct App {
    pub content: SiteContent,
    pub config: Config,
    pub theme: &'static Theme,

    pub typewriter: Typewriter,
    pub marquee: Marquee,
    pub strip: ImageStrip,
    pub metrics: CounterGroup,
    pub portfolio: Carousel,
    pub clients: Carousel,
    pub sparkles: Vec<Sparkle>,

    pub filter_index: usize,
    pub selected_service: usize,
    pub flipped: Vec<bool>,
    pub overlay: DetailOverlay<String>,
    pub scroll_lock: ScrollLock,
    pub form: ContactForm,

    pub viewport: Viewport,
    pub focus: Option<Focus>,
    pub hits: HitMap,
    pub notice: Option<Notice>,
    pub elapsed: Duration,
    pub should_quit: bool,
}

impl App {
    pub fn new(content: SiteContent, config: Config, theme: &'static Theme) -> Self {
        Self::with_rng(content, config, theme, &mut rand::rng())
    }

    /// Build the page, drawing sparkle positions from `rng`.
    pub fn with_rng<R: Rng + ?Sized>(
        content: SiteContent,
        config: Config,
        theme: &'static Theme,
        rng: &mut R,
    ) -> Self {
        let anim = &config.animation;
        let typewriter = Typewriter::new(
            content.roles.clone(),
            anim.typing_speed(),
            anim.typing_pause(),
        );
        let marquee = Marquee::new(content.marquee.clone(), anim.marquee_speed);
        let strip = ImageStrip::new(
            content.slides.len(),
            f64::from(STRIP_PITCH),
            anim.strip_speed,
        );
        let counters = content
            .metrics
            .iter()
            .map(|m| Counter::new(m.target, m.precision, anim.counter_duration()))
            .collect();
        let metrics = CounterGroup::new(counters, DEFAULT_THRESHOLD);
        let portfolio = Carousel::new(content.portfolio.len());
        let clients = Carousel::new(content.clients.len());
        let flipped = vec![false; content.services.len()];

        let sparkles = (0..SPARKLE_COUNT)
            .map(|i| Sparkle {
                x: rng.random_range(0.55..0.97),
                y: rng.random_range(0.05..0.95),
                glyph: SPARKLE_GLYPHS[i % SPARKLE_GLYPHS.len()],
                phase: Duration::from_millis(rng.random_range(0..2100)),
            })
            .collect();

        let mut app = Self {
            content,
            config,
            theme,
            typewriter,
            marquee,
            strip,
            metrics,
            portfolio,
            clients,
            sparkles,
            filter_index: 0,
            selected_service: 0,
            flipped,
            overlay: DetailOverlay::new(),
            scroll_lock: ScrollLock::new(),
            form: ContactForm::new(),
            viewport: Viewport::default(),
            focus: None,
            hits: HitMap::default(),
            notice: None,
            elapsed: Duration::ZERO,
            should_quit: false,
        };
        app.relayout();
        app
    }

    /// Advance every component to `elapsed` since the page mounted.
    pub fn tick(&mut self, elapsed: Duration) {
        self.elapsed = elapsed;
        self.typewriter.advance(elapsed);
        self.strip.on_frame(elapsed);
        let visibility = self.viewport.visibility(Section::Metrics);
        self.metrics.update(&visibility, elapsed);
        self.portfolio.tick(elapsed);
        self.clients.tick(elapsed);
        self.form.tick(elapsed);
        if let Some(notice) = &self.notice {
            if elapsed.saturating_sub(notice.shown_at) >= NOTICE_TIMEOUT {
                self.notice = None;
            }
        }
    }

    /// Terminal size changed. `height` is the whole terminal.
    pub fn resize(&mut self, width: u16, height: u16) {
        let page = height.saturating_sub(NAV_HEIGHT + FOOTER_HEIGHT);
        self.viewport.resize(width, page);
        self.relayout();
    }

    pub fn is_mobile(&self) -> bool {
        self.viewport.is_mobile()
    }

    /// Recompute section heights for the current width and filter.
    pub fn relayout(&mut self) {
        let heights = self.section_heights();
        self.viewport.set_layout(&heights);
    }

    fn section_heights(&self) -> Vec<(Section, u16)> {
        let mobile = self.is_mobile();
        let width = self.viewport.width().max(1);
        Section::ALL
            .iter()
            .map(|&section| {
                let height = match section {
                    Section::Hero => 13,
                    Section::WorkStrip => STRIP_CARD_ROWS + 3,
                    Section::Metrics => {
                        let rows = rows_for(self.content.metrics.len(), if mobile { 2 } else { 4 });
                        rows * 5 + 3
                    }
                    Section::About => self.about_height(width),
                    Section::Marquee => 3,
                    Section::Services => {
                        let rows = rows_for(self.content.services.len(), if mobile { 1 } else { 2 });
                        rows * SERVICE_CARD_HEIGHT + 3
                    }
                    Section::Portfolio => {
                        let chips = self.chip_rows(width);
                        let body = if mobile {
                            PORTFOLIO_CARD_HEIGHT + 1
                        } else {
                            rows_for(self.filtered_portfolio().len(), 3) * PORTFOLIO_CARD_HEIGHT
                        };
                        chips + body + 4
                    }
                    Section::Clients => {
                        let body = if mobile {
                            CLIENT_CARD_HEIGHT + 1
                        } else {
                            rows_for(self.content.clients.len(), 2) * CLIENT_CARD_HEIGHT
                        };
                        body + 3
                    }
                    Section::Contact => 11,
                };
                (section, height)
            })
            .collect()
    }

    fn about_height(&self, width: u16) -> u16 {
        let text_width = usize::from(width.saturating_sub(4).max(1));
        let lines: usize = self
            .content
            .about
            .paragraphs
            .iter()
            .map(|p| p.width().div_ceil(text_width).max(1) + 1)
            .sum();
        u16::try_from(lines).unwrap_or(u16::MAX).saturating_add(6)
    }

    /// Rows the filter chips wrap onto at `width`.
    pub fn chip_rows(&self, width: u16) -> u16 {
        layout_chips(&self.content.filters, width.saturating_sub(4))
            .last()
            .map_or(1, |slot| slot.row + 1)
    }

    // -- Page scrolling -------------------------------------------------

    /// Scroll the page, unless the overlay holds the scroll lock.
    pub fn scroll_page(&mut self, delta: i32) {
        if self.scroll_lock.is_locked() {
            return;
        }
        self.viewport.scroll_by(delta);
    }

    pub fn scroll_to_section(&mut self, section: Section) {
        if !self.scroll_lock.is_locked() {
            self.viewport.scroll_to_section(section);
        }
    }

    pub fn scroll_to_top(&mut self) {
        if !self.scroll_lock.is_locked() {
            self.viewport.scroll_to_top();
        }
    }

    /// Rows one page-down moves.
    pub fn page_step(&self) -> i32 {
        i32::from(self.viewport.height().saturating_sub(2).max(1))
    }

    // -- Focus ----------------------------------------------------------

    pub fn focus_next(&mut self) {
        let next = match self.focus {
            None => Focus::ALL[0],
            Some(f) => {
                let i = Focus::ALL.iter().position(|&x| x == f).unwrap_or(0);
                Focus::ALL[(i + 1) % Focus::ALL.len()]
            }
        };
        self.set_focus(Some(next));
    }

    pub fn focus_previous(&mut self) {
        let last = Focus::ALL.len() - 1;
        let prev = match self.focus {
            None => Focus::ALL[last],
            Some(f) => {
                let i = Focus::ALL.iter().position(|&x| x == f).unwrap_or(0);
                Focus::ALL[if i == 0 { last } else { i - 1 }]
            }
        };
        self.set_focus(Some(prev));
    }

    pub fn set_focus(&mut self, focus: Option<Focus>) {
        self.focus = focus;
        if let Some(f) = focus {
            self.scroll_to_section(f.section());
        }
    }

    // -- Theme ----------------------------------------------------------

    pub fn toggle_theme(&mut self) -> Action {
        self.theme = self.theme.toggled();
        self.config.theme = self.theme.name.to_string();
        tracing::info!(theme = self.theme.name, "theme toggled");
        Action::PersistTheme
    }

    // -- Services -------------------------------------------------------

    pub fn select_service(&mut self, index: usize) {
        self.selected_service = index.min(self.content.services.len().saturating_sub(1));
    }

    pub fn flip_service(&mut self, index: usize) {
        if let Some(flipped) = self.flipped.get_mut(index) {
            *flipped = !*flipped;
            self.selected_service = index;
        }
    }

    // -- Portfolio ------------------------------------------------------

    pub fn current_filter(&self) -> &str {
        self.content
            .filters
            .get(self.filter_index)
            .map_or(crate::content::ALL_FILTER, String::as_str)
    }

    pub fn filtered_portfolio(&self) -> Vec<&CaseStudy> {
        self.content.filtered_portfolio(self.current_filter())
    }

    pub fn set_filter(&mut self, index: usize) {
        if index >= self.content.filters.len() || index == self.filter_index {
            return;
        }
        self.filter_index = index;
        let count = self.filtered_portfolio().len();
        self.portfolio.set_count(count);
        tracing::debug!(filter = self.current_filter(), count, "portfolio filter changed");
        self.relayout();
    }

    pub fn next_filter(&mut self) {
        let len = self.content.filters.len().max(1);
        self.set_filter((self.filter_index + 1) % len);
    }

    pub fn previous_filter(&mut self) {
        let len = self.content.filters.len().max(1);
        self.set_filter((self.filter_index + len - 1) % len);
    }

    /// Open the detail overlay for the `index`-th entry of the filtered list.
    pub fn open_study(&mut self, index: usize) {
        let Some(id) = self.filtered_portfolio().get(index).map(|s| s.id.clone()) else {
            return;
        };
        self.portfolio.go(index);
        tracing::debug!(id = %id, "opening case study");
        self.overlay.select(id, &self.scroll_lock);
    }

    pub fn close_overlay(&mut self) {
        self.overlay.close();
    }

    pub fn selected_study(&self) -> Option<&CaseStudy> {
        let id = self.overlay.selected()?;
        self.content.portfolio.iter().find(|s| &s.id == id)
    }

    // -- Carousels ------------------------------------------------------

    pub fn carousel(&self, id: CarouselId) -> &Carousel {
        match id {
            CarouselId::Portfolio => &self.portfolio,
            CarouselId::Clients => &self.clients,
        }
    }

    pub fn carousel_mut(&mut self, id: CarouselId) -> &mut Carousel {
        match id {
            CarouselId::Portfolio => &mut self.portfolio,
            CarouselId::Clients => &mut self.clients,
        }
    }

    /// The item a carousel currently shows was clicked or activated.
    pub fn activate_carousel(&mut self, id: CarouselId) -> Option<Action> {
        match id {
            CarouselId::Portfolio => {
                self.open_study(self.portfolio.index());
                None
            }
            CarouselId::Clients => self.open_client(self.clients.index()),
        }
    }

    pub fn open_client(&mut self, index: usize) -> Option<Action> {
        let client = self.content.clients.get(index)?;
        self.clients.go(index);
        Some(Action::OpenLink(client.link.clone()))
    }

    // -- Contact --------------------------------------------------------

    /// Submit the contact form according to the configured mode.
    pub fn submit_contact(&mut self) -> Option<Action> {
        match self.config.contact_form {
            crate::ui::config::ContactFormMode::Status => {
                // The outcome is shown through the form status
                let _ = self.form.submit(self.elapsed);
                None
            }
            crate::ui::config::ContactFormMode::Redirect => {
                Some(Action::OpenLink(self.content.links.messaging.clone()))
            }
        }
    }

    // -- Misc -----------------------------------------------------------

    pub fn notify(&mut self, text: impl Into<String>) {
        self.notice = Some(Notice {
            text: text.into(),
            shown_at: self.elapsed,
        });
    }

    /// Drawn fraction of the hero underline, eased.
    pub fn hero_rule_progress(&self) -> f64 {
        EASE.ease(self.elapsed.as_secs_f64() / RULE_EXPAND.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn create_test_app() -> App {
        let content = SiteContent::bundled().expect("bundled content");
        let mut rng = StdRng::seed_from_u64(7);
        let mut app = App::with_rng(content, Config::default(), Theme::default_theme(), &mut rng);
        app.resize(120, 40);
        app
    }

    #[test]
    fn test_layout_chips_wraps() {
        let labels: Vec<String> = vec!["All".into(), "Email Design".into(), "Sales".into()];
        let slots = layout_chips(&labels, 24);
        assert_eq!(slots[0], ChipSlot { row: 0, col: 0, width: 7 });
        assert_eq!(slots[1], ChipSlot { row: 0, col: 8, width: 16 });
        assert_eq!(slots[2].row, 1);
        assert_eq!(slots[2].col, 0);
    }

    #[test]
    fn test_sparkles_are_stable_across_ticks() {
        let mut app = create_test_app();
        let before = app.sparkles.clone();
        app.tick(Duration::from_secs(5));
        app.tick(Duration::from_secs(9));
        assert_eq!(app.sparkles, before);
        assert_eq!(app.sparkles.len(), SPARKLE_COUNT);
    }

    #[test]
    fn test_focus_cycles_both_ways() {
        let mut app = create_test_app();
        app.focus_next();
        assert_eq!(app.focus, Some(Focus::Services));
        app.focus_previous();
        assert_eq!(app.focus, Some(Focus::Contact));
        app.focus_next();
        assert_eq!(app.focus, Some(Focus::Services));
    }

    #[test]
    fn test_filter_change_clamps_carousel() {
        let mut app = create_test_app();
        app.portfolio.go(2);
        let copy = app
            .content
            .filters
            .iter()
            .position(|f| f == "Ecommerce Copy")
            .expect("filter exists");
        app.set_filter(copy);
        assert_eq!(app.portfolio.count(), 1);
        assert_eq!(app.portfolio.index(), 0);
    }

    #[test]
    fn test_overlay_locks_page_scroll() {
        let mut app = create_test_app();
        app.open_study(0);
        assert!(app.selected_study().is_some());
        app.scroll_page(10);
        assert_eq!(app.viewport.scroll(), 0);
        app.close_overlay();
        app.scroll_page(10);
        assert_eq!(app.viewport.scroll(), 10);
    }

    #[test]
    fn test_hero_rule_expands_once() {
        let mut app = create_test_app();
        assert_eq!(app.hero_rule_progress(), 0.0);
        app.tick(RULE_EXPAND);
        assert_eq!(app.hero_rule_progress(), 1.0);
        app.tick(RULE_EXPAND * 10);
        assert_eq!(app.hero_rule_progress(), 1.0);
    }

    #[test]
    fn test_notice_expires() {
        let mut app = create_test_app();
        app.tick(Duration::from_secs(1));
        app.notify("Could not open link");
        app.tick(Duration::from_millis(3999));
        assert!(app.notice.is_some());
        app.tick(Duration::from_secs(4));
        assert!(app.notice.is_none());
    }

    #[test]
    fn test_narrow_terminal_is_mobile() {
        let mut app = create_test_app();
        assert!(!app.is_mobile());
        app.resize(60, 30);
        assert!(app.is_mobile());
    }
}
