//! # Rendering
//!
//! Draws the page with ratatui and reports where the clickable things ended
//! up, so mouse input can be resolved against what is actually on screen.
//!
//! Each section is drawn at full height into its own offscreen [`Buffer`]
//! and only the rows inside the viewport are copied to the frame. Partially
//! scrolled sections clip cleanly without any widget having to know about
//! the scroll offset.

use crate::anim::cursor_visible;
use crate::anim::Carousel;
use crate::content::{CaseStudy, Client, Service};
use crate::ui::app::{
    layout_chips, App, CarouselId, Focus, CLIENT_CARD_HEIGHT, PORTFOLIO_CARD_HEIGHT,
    SERVICE_CARD_HEIGHT, STRIP_CARD_ROWS, STRIP_PITCH,
};
use crate::ui::config::ContactFormMode;
use crate::ui::form::FormStatus;
use crate::ui::theme::Theme;
use crate::ui::viewport::Section;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Something the mouse can land on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hit {
    NavSection(Section),
    ThemeToggle,
    Link(String),
    WorkStrip,
    Service(usize),
    Filter(usize),
    PortfolioCard(usize),
    ClientCard(usize),
    Track(CarouselId),
    Dot(CarouselId, usize),
    ContactInput,
    ContactSubmit,
    ScrollTop,
    OverlayBody,
    OverlayClose,
    OverlayLink,
}

/// Screen regions recorded during the last draw, topmost last.
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    regions: Vec<(Rect, Hit)>,
    /// Furthest the overlay body can scroll at the current size.
    pub overlay_scroll_limit: u16,
}

impl HitMap {
    pub fn push(&mut self, area: Rect, hit: Hit) {
        if !area.is_empty() {
            self.regions.push((area, hit));
        }
    }

    /// The topmost region under `(column, row)`.
    pub fn hit_at(&self, column: u16, row: u16) -> Option<&Hit> {
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| area.contains(Position::new(column, row)))
            .map(|(_, hit)| hit)
    }

    /// The first region recorded for `hit`.
    pub fn find(&self, hit: &Hit) -> Option<Rect> {
        self.regions
            .iter()
            .find(|(_, h)| h == hit)
            .map(|(area, _)| *area)
    }

    pub fn regions(&self) -> &[(Rect, Hit)] {
        &self.regions
    }
}

pub fn render(frame: &mut Frame, app: &App) -> HitMap {
    let theme = app.theme;
    let mut hits = HitMap::default();
    let area = frame.area();

    frame.render_widget(
        Block::default().style(Style::default().bg(theme.bg).fg(theme.fg)),
        area,
    );

    // Navbar + Page + Footer
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(crate::ui::app::NAV_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(crate::ui::app::FOOTER_HEIGHT),
        ])
        .split(area);

    render_page(frame, app, chunks[1], &mut hits);
    render_navbar(frame, app, chunks[0], &mut hits);
    render_footer(frame, app, chunks[2], &mut hits);

    if let Some(study) = app.selected_study() {
        render_overlay(frame, app, study, area, &mut hits);
    }

    hits
}

// ---------------------------------------------------------------------------
// Offscreen drawing
// ---------------------------------------------------------------------------

/// A section-sized drawing surface with its own hit regions.
struct Canvas {
    buf: Buffer,
    hits: Vec<(Rect, Hit)>,
}

impl Canvas {
    fn new(width: u16, height: u16, theme: &Theme) -> Self {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        buf.set_style(area, Style::default().bg(theme.bg).fg(theme.fg));
        Self {
            buf,
            hits: Vec::new(),
        }
    }

    fn width(&self) -> u16 {
        self.buf.area.width
    }

    fn height(&self) -> u16 {
        self.buf.area.height
    }

    fn draw<W: Widget>(&mut self, widget: W, area: Rect) {
        draw_into(&mut self.buf, widget, area);
    }

    fn line(&mut self, x: u16, y: u16, line: Line) {
        let width = self.width().saturating_sub(x);
        self.draw(Paragraph::new(line), Rect::new(x, y, width, 1));
    }

    fn hit(&mut self, area: Rect, hit: Hit) {
        let area = area.intersection(self.buf.area);
        if !area.is_empty() {
            self.hits.push((area, hit));
        }
    }
}

fn draw_into<W: Widget>(buf: &mut Buffer, widget: W, area: Rect) {
    let area = area.intersection(buf.area);
    if !area.is_empty() {
        widget.render(area, buf);
    }
}

/// Copy `dst_area`-sized cells from `src` starting at `(src_x, src_y)`.
fn copy_region(src: &Buffer, src_x: u16, src_y: u16, dst: &mut Buffer, dst_area: Rect) {
    for dy in 0..dst_area.height {
        for dx in 0..dst_area.width {
            let from = (src_x.saturating_add(dx), src_y.saturating_add(dy));
            let to = (dst_area.x + dx, dst_area.y + dy);
            if let (Some(cell), Some(target)) = (src.cell(from), dst.cell_mut(to)) {
                *target = cell.clone();
            }
        }
    }
}

/// `width` columns of `text` repeated end to end, starting `offset` columns in.
fn window(text: &str, offset: usize, width: usize) -> String {
    let mut out = String::with_capacity(width);
    if text.width() == 0 {
        return " ".repeat(width);
    }
    let (mut skipped, mut used) = (0usize, 0usize);
    for ch in text.chars().cycle() {
        let cw = ch.width().unwrap_or(0);
        if skipped < offset {
            skipped += cw;
            continue;
        }
        if used + cw > width {
            break;
        }
        out.push(ch);
        used += cw;
    }
    out.push_str(&" ".repeat(width - used));
    out
}

/// Truncate to `width` columns, padding with spaces.
fn fit(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let cw = ch.width().unwrap_or(0);
        if used + cw > width {
            break;
        }
        out.push(ch);
        used += cw;
    }
    out.push_str(&" ".repeat(width - used));
    out
}

fn text_width(text: &str) -> u16 {
    u16::try_from(text.width()).unwrap_or(u16::MAX)
}

fn card_block<'a>(theme: &Theme, highlighted: bool) -> Block<'a> {
    let border = if highlighted { theme.accent } else { theme.border };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(theme.card))
}

fn section_heading(canvas: &mut Canvas, theme: &Theme, label: &str, heading: &str) {
    canvas.line(
        2,
        0,
        Line::from(Span::styled(
            label.to_uppercase(),
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        )),
    );
    if !heading.is_empty() {
        canvas.line(
            2,
            1,
            Line::from(Span::styled(
                heading.to_string(),
                Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
            )),
        );
    }
}

// ---------------------------------------------------------------------------
// Page
// ---------------------------------------------------------------------------

fn render_page(frame: &mut Frame, app: &App, area: Rect, hits: &mut HitMap) {
    let viewport = &app.viewport;
    for span in viewport.spans() {
        let Some((first_row, rows)) = viewport.on_screen(span.section) else {
            continue;
        };
        let mut canvas = Canvas::new(area.width, span.height, app.theme);
        draw_section(&mut canvas, app, span.section);

        let local_start = viewport.scroll().max(span.top) - span.top;
        let dst = Rect::new(area.x, area.y + first_row, area.width, rows);
        copy_region(&canvas.buf, 0, local_start, frame.buffer_mut(), dst);

        let visible = Rect::new(0, local_start, area.width, rows);
        for (region, hit) in canvas.hits {
            let clipped = region.intersection(visible);
            if clipped.is_empty() {
                continue;
            }
            hits.push(
                Rect::new(
                    area.x + clipped.x,
                    dst.y + (clipped.y - local_start),
                    clipped.width,
                    clipped.height,
                ),
                hit,
            );
        }
    }
}

fn draw_section(canvas: &mut Canvas, app: &App, section: Section) {
    match section {
        Section::Hero => draw_hero(canvas, app),
        Section::WorkStrip => draw_work_strip(canvas, app),
        Section::Metrics => draw_metrics(canvas, app),
        Section::About => draw_about(canvas, app),
        Section::Marquee => draw_marquee(canvas, app),
        Section::Services => draw_services(canvas, app),
        Section::Portfolio => draw_portfolio(canvas, app),
        Section::Clients => draw_clients(canvas, app),
        Section::Contact => draw_contact(canvas, app),
    }
}

fn draw_hero(canvas: &mut Canvas, app: &App) {
    let theme = app.theme;
    let owner = &app.content.owner;
    let (w, h) = (canvas.width(), canvas.height());

    // Sparkles go down first so text always wins
    for sparkle in &app.sparkles {
        let x = (sparkle.x * f64::from(w)) as u16;
        let y = (sparkle.y * f64::from(h)) as u16;
        if x < w && y < h {
            let (glyph, color) = if sparkle.is_lit(app.elapsed) {
                (sparkle.glyph, theme.secondary)
            } else {
                ('·', theme.border)
            };
            canvas.buf.set_string(
                x,
                y,
                glyph.to_string(),
                Style::default().fg(color).bg(theme.bg),
            );
        }
    }

    canvas.line(
        2,
        1,
        Line::from(Span::styled(
            format!("~ {}", owner.eyebrow),
            Style::default().fg(theme.fg_dim),
        )),
    );

    let bold = Style::default().add_modifier(Modifier::BOLD);
    canvas.line(
        2,
        3,
        Line::from(vec![
            Span::styled(format!("{} ", owner.first_name), bold.fg(theme.fg)),
            Span::styled(owner.last_name.clone(), bold.fg(theme.accent)),
        ]),
    );

    let name_width = owner.first_name.width() + 1 + owner.last_name.width();
    let drawn = (name_width as f64 * app.hero_rule_progress()).round() as usize;
    canvas.line(
        2,
        4,
        Line::from(Span::styled(
            "━".repeat(drawn),
            Style::default().fg(theme.accent),
        )),
    );

    let mut role = vec![
        Span::styled("I'm a ", Style::default().fg(theme.fg_dim)),
        Span::styled(
            app.typewriter.display().to_string(),
            bold.fg(theme.secondary),
        ),
    ];
    if cursor_visible(app.elapsed) {
        role.push(Span::styled("▌", Style::default().fg(theme.secondary)));
    }
    canvas.line(2, 6, Line::from(role));

    canvas.draw(
        Paragraph::new(owner.tagline.clone())
            .style(Style::default().fg(theme.fg))
            .wrap(Wrap { trim: true }),
        Rect::new(2, 8, w.saturating_sub(4), 2),
    );

    let links = &app.content.links;
    let mut x = 2;
    for (label, url, filled) in [
        ("See My Work", &links.document, true),
        ("Let's Talk", &links.messaging, false),
    ] {
        let text = format!("[ {label} ]");
        let width = text_width(&text);
        let style = if filled {
            bold.fg(theme.bg).bg(theme.accent)
        } else {
            bold.fg(theme.accent)
        };
        canvas.line(x, 11, Line::from(Span::styled(text, style)));
        canvas.hit(Rect::new(x, 11, width, 1), Hit::Link(url.clone()));
        x += width + 2;
    }
}

fn draw_work_strip(canvas: &mut Canvas, app: &App) {
    let theme = app.theme;
    section_heading(canvas, theme, "Recent work", "");

    let inner = usize::from(STRIP_PITCH.saturating_sub(4));
    let mut rows = vec![String::new(); usize::from(STRIP_CARD_ROWS)];
    for slide in &app.content.slides {
        let alt: Vec<char> = slide.alt.chars().collect();
        let split = alt.len().min(inner);
        let first: String = alt[..split].iter().collect();
        let rest: String = alt[split..].iter().collect();
        let gap = " ".repeat(usize::from(STRIP_PITCH) - inner - 2);
        rows[0].push_str(&format!("╭{}╮{gap}", "─".repeat(inner)));
        rows[1].push_str(&format!("│{}│{gap}", fit(&format!("#{:02}", slide.id), inner)));
        rows[2].push_str(&format!("│{}│{gap}", fit(&first, inner)));
        rows[3].push_str(&format!("│{}│{gap}", fit(rest.trim_start(), inner)));
        rows[4].push_str(&format!("╰{}╯{gap}", "─".repeat(inner)));
    }

    let offset = app.strip.position() as usize;
    let width = usize::from(canvas.width());
    let color = if app.strip.is_paused() {
        theme.accent
    } else {
        theme.border
    };
    for (i, row) in rows.iter().enumerate() {
        // Two copies back to back: the strip wraps after one
        let doubled = row.repeat(2);
        let y = 2 + i as u16;
        canvas.line(
            0,
            y,
            Line::from(Span::styled(
                window(&doubled, offset, width),
                Style::default().fg(if i == 1 { theme.secondary } else { color }),
            )),
        );
    }
    canvas.hit(
        Rect::new(0, 2, canvas.width(), STRIP_CARD_ROWS),
        Hit::WorkStrip,
    );
}

fn draw_metrics(canvas: &mut Canvas, app: &App) {
    let theme = app.theme;
    section_heading(canvas, theme, "By the numbers", "");

    let cols: u16 = if app.is_mobile() { 2 } else { 4 };
    let box_width = canvas.width().saturating_sub(4) / cols;
    for (i, (metric, counter)) in app
        .content
        .metrics
        .iter()
        .zip(app.metrics.counters())
        .enumerate()
    {
        let i = i as u16;
        let area = Rect::new(2 + (i % cols) * box_width, 2 + (i / cols) * 5, box_width, 5);
        let block = card_block(theme, counter.is_finished());
        let inner = block.inner(area);
        canvas.draw(block, area);

        let lines = vec![
            Line::from(Span::styled(
                format!("{}{}", counter.formatted(), metric.suffix),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(format!("{} {}", metric.icon, metric.label)),
            Line::from(Span::styled(
                metric.sub.clone(),
                Style::default().fg(theme.fg_dim),
            )),
        ];
        canvas.draw(
            Paragraph::new(lines).centered(),
            inner,
        );
    }
}

fn draw_about(canvas: &mut Canvas, app: &App) {
    let theme = app.theme;
    let about = &app.content.about;
    section_heading(canvas, theme, &about.label, &about.heading);

    let mut badges = Vec::new();
    for (figure, caption) in &about.badges {
        badges.push(Span::styled(
            figure.clone(),
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        ));
        badges.push(Span::styled(
            format!(" {caption}    "),
            Style::default().fg(theme.fg_dim),
        ));
    }
    canvas.line(2, 3, Line::from(badges));

    let mut lines = Vec::new();
    for paragraph in &about.paragraphs {
        lines.push(Line::from(paragraph.clone()));
        lines.push(Line::from(""));
    }
    let area = Rect::new(
        2,
        5,
        canvas.width().saturating_sub(4),
        canvas.height().saturating_sub(5),
    );
    canvas.draw(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

fn draw_marquee(canvas: &mut Canvas, app: &App) {
    let theme = app.theme;
    let block = Block::default()
        .borders(Borders::TOP | Borders::BOTTOM)
        .border_style(Style::default().fg(theme.border));
    let area = Rect::new(0, 0, canvas.width(), 3);
    canvas.draw(block, area);

    let strip: String = app
        .marquee
        .rendered_items()
        .map(|label| format!("   {label}  ✦"))
        .collect();
    let offset = app.marquee.offset(app.elapsed) as usize;
    canvas.line(
        0,
        1,
        Line::from(Span::styled(
            window(&strip, offset, usize::from(canvas.width())),
            Style::default()
                .fg(theme.secondary)
                .add_modifier(Modifier::BOLD),
        )),
    );
}

fn draw_services(canvas: &mut Canvas, app: &App) {
    let theme = app.theme;
    section_heading(canvas, theme, "Services", "What I do for brands");

    let cols: u16 = if app.is_mobile() { 1 } else { 2 };
    let card_width = canvas.width().saturating_sub(4) / cols;
    let focused = app.focus == Some(Focus::Services);
    for (i, service) in app.content.services.iter().enumerate() {
        let n = i as u16;
        let area = Rect::new(
            2 + (n % cols) * card_width,
            3 + (n / cols) * SERVICE_CARD_HEIGHT,
            card_width.saturating_sub(1),
            SERVICE_CARD_HEIGHT,
        );
        let flipped = app.flipped.get(i).copied().unwrap_or(false);
        let highlighted = focused && app.selected_service == i;
        service_card(&mut canvas.buf, area, service, theme, highlighted, flipped);
        canvas.hit(area, Hit::Service(i));
    }
}

fn service_card(
    buf: &mut Buffer,
    area: Rect,
    service: &Service,
    theme: &Theme,
    highlighted: bool,
    flipped: bool,
) {
    let side = if flipped { "back ↺" } else { "↻" };
    let block = card_block(theme, highlighted)
        .title(Line::from(Span::styled(
            format!(" {} {} {} ", service.num, service.icon, service.title),
            Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
        )))
        .title_top(Line::from(format!(" {side} ")).right_aligned());
    let inner = block.inner(area);
    draw_into(buf, block, area);

    let body = if flipped { &service.back } else { &service.front };
    let lines = vec![
        Line::from(Span::styled(
            service.sub.clone(),
            Style::default().fg(theme.secondary),
        )),
        Line::from(body.clone()),
    ];
    let text_area = Rect::new(inner.x, inner.y, inner.width, inner.height.saturating_sub(1));
    draw_into(buf, Paragraph::new(lines).wrap(Wrap { trim: true }), text_area);
    draw_into(
        buf,
        Paragraph::new(Span::styled(
            service.tag.clone(),
            Style::default().fg(theme.fg_dim),
        )),
        Rect::new(inner.x, inner.bottom().saturating_sub(1), inner.width, 1),
    );
}

fn draw_portfolio(canvas: &mut Canvas, app: &App) {
    let theme = app.theme;
    section_heading(canvas, theme, "Portfolio", "Case studies");

    let slots = layout_chips(&app.content.filters, canvas.width().saturating_sub(4));
    for (i, (label, slot)) in app.content.filters.iter().zip(&slots).enumerate() {
        let active = i == app.filter_index;
        let style = if active {
            Style::default()
                .fg(theme.bg)
                .bg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.fg_dim)
        };
        let area = Rect::new(2 + slot.col, 3 + slot.row, slot.width, 1);
        canvas.line(area.x, area.y, Line::from(Span::styled(format!("( {label} )"), style)));
        canvas.hit(area, Hit::Filter(i));
    }

    let top = 4 + app.chip_rows(canvas.width());
    let studies = app.filtered_portfolio();
    let width = canvas.width().saturating_sub(4);
    if studies.is_empty() {
        canvas.line(
            2,
            top,
            Line::from(Span::styled(
                "Nothing in this category yet.",
                Style::default().fg(theme.fg_dim),
            )),
        );
        return;
    }

    let focused = app.focus == Some(Focus::Portfolio);
    if app.is_mobile() {
        let area = Rect::new(2, top, width, PORTFOLIO_CARD_HEIGHT);
        draw_track(canvas, theme, area, &app.portfolio, CarouselId::Portfolio, |buf, rect, i| {
            if let Some(study) = studies.get(i) {
                study_card(buf, rect, study, theme, focused);
            }
        });
    } else {
        let card_width = width / 3;
        for (i, study) in studies.iter().enumerate() {
            let n = i as u16;
            let area = Rect::new(
                2 + (n % 3) * card_width,
                top + (n / 3) * PORTFOLIO_CARD_HEIGHT,
                card_width.saturating_sub(1),
                PORTFOLIO_CARD_HEIGHT,
            );
            let highlighted = focused && app.portfolio.index() == i;
            study_card(&mut canvas.buf, area, study, theme, highlighted);
            canvas.hit(area, Hit::PortfolioCard(i));
        }
    }
}

fn study_card(buf: &mut Buffer, area: Rect, study: &CaseStudy, theme: &Theme, highlighted: bool) {
    let block = card_block(theme, highlighted).title(Line::from(Span::styled(
        format!(" {} {} ", study.icon, study.category),
        Style::default().fg(theme.fg_dim),
    )));
    let inner = block.inner(area);
    draw_into(buf, block, area);

    let lines = vec![
        Line::from(Span::styled(
            study.title.clone(),
            Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            study.result.clone(),
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(study.description.clone()),
    ];
    let body = Rect::new(inner.x, inner.y, inner.width, inner.height.saturating_sub(1));
    draw_into(buf, Paragraph::new(lines).wrap(Wrap { trim: true }), body);
    draw_into(
        buf,
        Paragraph::new(Span::styled(
            "View case study →",
            Style::default().fg(theme.secondary),
        )),
        Rect::new(inner.x, inner.bottom().saturating_sub(1), inner.width, 1),
    );
}

fn draw_clients(canvas: &mut Canvas, app: &App) {
    let theme = app.theme;
    section_heading(canvas, theme, "Clients", "Brands I've worked with");

    let clients = &app.content.clients;
    let width = canvas.width().saturating_sub(4);
    let focused = app.focus == Some(Focus::Clients);
    if app.is_mobile() {
        let area = Rect::new(2, 3, width, CLIENT_CARD_HEIGHT);
        draw_track(canvas, theme, area, &app.clients, CarouselId::Clients, |buf, rect, i| {
            if let Some(client) = clients.get(i) {
                client_card(buf, rect, client, theme, focused);
            }
        });
    } else {
        let card_width = width / 2;
        for (i, client) in clients.iter().enumerate() {
            let n = i as u16;
            let area = Rect::new(
                2 + (n % 2) * card_width,
                3 + (n / 2) * CLIENT_CARD_HEIGHT,
                card_width.saturating_sub(1),
                CLIENT_CARD_HEIGHT,
            );
            let highlighted = focused && app.clients.index() == i;
            client_card(&mut canvas.buf, area, client, theme, highlighted);
            canvas.hit(area, Hit::ClientCard(i));
        }
    }
}

fn client_card(buf: &mut Buffer, area: Rect, client: &Client, theme: &Theme, highlighted: bool) {
    let block = card_block(theme, highlighted).title(Line::from(Span::styled(
        format!(" {} {} ", client.icon, client.name),
        Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
    )));
    let inner = block.inner(area);
    draw_into(buf, block, area);

    let lines = vec![
        Line::from(Span::styled(
            format!("{} · {}", client.role, client.kind),
            Style::default().fg(theme.secondary),
        )),
        Line::from(client.scope.clone()),
        Line::from(Span::styled(
            client.result.clone(),
            Style::default().fg(theme.fg_dim),
        )),
    ];
    draw_into(buf, Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

/// Draw a carousel: every card laid side by side on a long offscreen track,
/// shifted by the carousel's (possibly mid-transition) position, with dot
/// indicators underneath.
fn draw_track<F>(
    canvas: &mut Canvas,
    theme: &Theme,
    area: Rect,
    carousel: &Carousel,
    id: CarouselId,
    draw_card: F,
) where
    F: Fn(&mut Buffer, Rect, usize),
{
    let count = carousel.count();
    if count == 0 {
        return;
    }
    // Only the two pages straddling the current position can be on screen
    let position = carousel.track_position().clamp(0.0, (count - 1) as f64);
    let first = position.floor() as usize;
    let shift = ((position - first as f64) * f64::from(area.width)).round() as u16;

    let track_area = Rect::new(0, 0, area.width.saturating_mul(2), area.height);
    let mut track = Buffer::empty(track_area);
    track.set_style(track_area, Style::default().bg(theme.bg).fg(theme.fg));
    for (slot, page) in (first..count).take(2).enumerate() {
        let x = if slot == 0 { 1 } else { area.width.saturating_add(1) };
        let card = Rect::new(x, 0, area.width.saturating_sub(2), area.height);
        draw_card(&mut track, card.intersection(track_area), page);
    }

    copy_region(&track, shift, 0, &mut canvas.buf, area);
    canvas.hit(area, Hit::Track(id));

    let pages = u16::try_from(count).unwrap_or(u16::MAX);
    let dots_width = pages.saturating_mul(2);
    let mut x = area.x + area.width.saturating_sub(dots_width) / 2;
    let y = area.bottom();
    for (i, active) in carousel.indicators().into_iter().enumerate() {
        if x >= area.right() {
            break;
        }
        let (glyph, color) = if active {
            ("●", theme.accent)
        } else {
            ("○", theme.border)
        };
        canvas.line(x, y, Line::from(Span::styled(glyph, Style::default().fg(color))));
        canvas.hit(Rect::new(x, y, 2, 1), Hit::Dot(id, i));
        x = x.saturating_add(2);
    }
}

fn draw_contact(canvas: &mut Canvas, app: &App) {
    let theme = app.theme;
    let contact = &app.content.contact;
    section_heading(canvas, theme, &contact.label, &contact.heading);
    let width = canvas.width().saturating_sub(4);

    canvas.draw(
        Paragraph::new(contact.body.clone())
            .style(Style::default().fg(theme.fg_dim))
            .wrap(Wrap { trim: true }),
        Rect::new(2, 3, width, 2),
    );

    let focused = app.focus == Some(Focus::Contact);
    let input_width = width.min(40);
    let input_area = Rect::new(2, 5, input_width, 3);
    let error = matches!(app.form.status(), FormStatus::Error(_));
    let border = if error {
        theme.error
    } else if focused {
        theme.accent
    } else {
        theme.border
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(theme.card));
    let inner = block.inner(input_area);
    canvas.draw(block, input_area);

    let mut field = if app.form.input().is_empty() {
        vec![Span::styled(
            contact.placeholder.clone(),
            Style::default().fg(theme.fg_dim),
        )]
    } else {
        vec![Span::raw(app.form.input().to_string())]
    };
    if focused && !app.form.is_locked() && cursor_visible(app.elapsed) {
        field.insert(
            if app.form.input().is_empty() { 0 } else { 1 },
            Span::styled("▏", Style::default().fg(theme.secondary)),
        );
    }
    canvas.draw(Paragraph::new(Line::from(field)), inner);
    canvas.hit(input_area, Hit::ContactInput);

    let submit = match app.form.status() {
        FormStatus::Success => "[ ✓ Sent! ]".to_string(),
        _ => format!("[ {} ]", contact.submit),
    };
    let submit_x = input_area.right() + 2;
    let submit_width = text_width(&submit);
    canvas.line(
        submit_x,
        6,
        Line::from(Span::styled(
            submit,
            Style::default()
                .fg(theme.bg)
                .bg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
    );
    canvas.hit(Rect::new(submit_x, 6, submit_width, 1), Hit::ContactSubmit);

    let status = match (app.config.contact_form, app.form.status()) {
        (ContactFormMode::Redirect, _) => Some(Span::styled(
            "Submitting opens a direct message.",
            Style::default().fg(theme.fg_dim),
        )),
        (_, FormStatus::Success) => Some(Span::styled(
            "Thanks! I'll get back to you within 24 hours.",
            Style::default().fg(theme.success),
        )),
        (_, FormStatus::Error(err)) => Some(Span::styled(
            err.to_string(),
            Style::default().fg(theme.error),
        )),
        (_, FormStatus::Idle) => None,
    };
    if let Some(status) = status {
        canvas.line(2, 9, Line::from(status));
    }
}

// ---------------------------------------------------------------------------
// Fixed chrome
// ---------------------------------------------------------------------------

fn render_navbar(frame: &mut Frame, app: &App, area: Rect, hits: &mut HitMap) {
    let theme = app.theme;
    let scrolled = app.viewport.is_scrolled();
    let bg = if scrolled { theme.card } else { theme.bg };
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(if scrolled { theme.accent } else { theme.border }))
        .style(Style::default().bg(bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.is_empty() {
        return;
    }

    let owner = &app.content.owner;
    let brand = format!(" {}.", owner.first_name);
    let mut x = inner.x;
    frame.render_widget(
        Paragraph::new(Span::styled(
            brand.clone(),
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        )),
        Rect::new(x, inner.y, text_width(&brand), 1).intersection(inner),
    );
    x += text_width(&brand) + 3;

    // Narrow terminals drop the section links; the number keys still work
    if !app.is_mobile() {
        for (n, (label, section)) in [
            ("Home", Section::Hero),
            ("About", Section::About),
            ("Services", Section::Services),
            ("Portfolio", Section::Portfolio),
        ]
        .into_iter()
        .enumerate()
        {
            let text = format!("{} {label}", n + 1);
            let width = text_width(&text);
            let rect = Rect::new(x, inner.y, width, 1).intersection(inner);
            frame.render_widget(
                Paragraph::new(Span::styled(text, Style::default().fg(theme.fg))),
                rect,
            );
            hits.push(rect, Hit::NavSection(section));
            x += width + 3;
        }
    }

    let button = "[ Work With Me ]";
    let toggle = if app.theme.dark { " ☾ " } else { " ☀ " };
    let button_x = inner.right().saturating_sub(text_width(button) + 1);
    let toggle_x = button_x.saturating_sub(text_width(toggle) + 1);

    let toggle_rect = Rect::new(toggle_x, inner.y, text_width(toggle), 1).intersection(inner);
    frame.render_widget(
        Paragraph::new(Span::styled(toggle, Style::default().fg(theme.secondary))),
        toggle_rect,
    );
    hits.push(toggle_rect, Hit::ThemeToggle);

    let button_rect = Rect::new(button_x, inner.y, text_width(button), 1).intersection(inner);
    frame.render_widget(
        Paragraph::new(Span::styled(
            button,
            Style::default()
                .fg(theme.bg)
                .bg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
        button_rect,
    );
    hits.push(button_rect, Hit::Link(app.content.links.messaging.clone()));
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect, hits: &mut HitMap) {
    let theme = app.theme;
    let line = if let Some(notice) = &app.notice {
        Line::from(Span::styled(
            format!(" {}", notice.text),
            Style::default().fg(theme.error),
        ))
    } else {
        let help = if app.overlay.is_open() {
            " [↑↓/jk] Scroll  [o] Open case study  [Esc] Close  [q] Quit"
        } else {
            match app.focus {
                Some(Focus::Contact) => " Type your email  [Enter] Submit  [Tab] Next  [Esc] Done",
                Some(Focus::Portfolio) => {
                    " [←→] Browse  [f/F] Filter  [Enter] Open  [Tab] Next  [Esc] Unfocus  [q] Quit"
                }
                Some(Focus::Services) => " [←→] Select  [Enter] Flip  [o] Work samples  [Tab] Next  [q] Quit",
                Some(Focus::Clients) => " [←→] Browse  [Enter] Visit  [Tab] Next  [Esc] Unfocus  [q] Quit",
                None => " [↑↓/jk] Scroll  [1-4] Jump  [Tab] Focus  [t] Theme  [w] Message  [q] Quit",
            }
        };
        Line::from(Span::styled(help, Style::default().fg(theme.fg_dim)))
    };
    frame.render_widget(Paragraph::new(line), area);

    if app.viewport.shows_scroll_top() && !app.overlay.is_open() {
        let label = "[↑ Top]";
        let width = text_width(label);
        let rect = Rect::new(area.right().saturating_sub(width + 1), area.y, width, 1)
            .intersection(area);
        frame.render_widget(
            Paragraph::new(Span::styled(
                label,
                Style::default().fg(theme.bg).bg(theme.accent),
            )),
            rect,
        );
        hits.push(rect, Hit::ScrollTop);
    }
}

// ---------------------------------------------------------------------------
// Overlay
// ---------------------------------------------------------------------------

fn overlay_lines(study: &CaseStudy, theme: &Theme) -> Vec<Line<'static>> {
    let heading = Style::default().fg(theme.accent).add_modifier(Modifier::BOLD);
    let dim = Style::default().fg(theme.fg_dim);
    let mut lines = vec![
        Line::from(vec![
            Span::styled(study.category.clone(), Style::default().fg(theme.secondary)),
            Span::styled(format!("  ·  {}", study.tags.join(" · ")), dim),
        ]),
        Line::from(Span::styled(
            study.result.clone(),
            Style::default().fg(theme.success).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(study.long_description.clone()),
        Line::from(""),
        Line::from(vec![
            Span::styled("★".repeat(usize::from(study.rating.min(5))), heading),
            Span::styled(format!("  {}", study.client_name), dim),
        ]),
        Line::from(Span::styled(
            format!("\"{}\"", study.client_quote),
            Style::default().add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
        Line::from(Span::styled("The Challenge", heading)),
        Line::from(study.challenge.clone()),
        Line::from(""),
        Line::from(Span::styled("Diagnosis", heading)),
        Line::from(study.diagnosis.clone()),
    ];
    lines.extend(study.pain_points.iter().map(|p| Line::from(format!("  • {p}"))));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("The Solution", heading)));
    lines.push(Line::from(study.solution.clone()));
    lines.extend(
        study
            .solution_steps
            .iter()
            .enumerate()
            .map(|(i, step)| Line::from(format!("  {}. {step}", i + 1))),
    );
    if !study.results.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Results", heading)));
        lines.extend(study.results.iter().map(|r| {
            Line::from(vec![
                Span::styled("  ✓ ", Style::default().fg(theme.success)),
                Span::raw(r.clone()),
            ])
        }));
    }
    lines
}

/// Rows `lines` take when word-wrapped to `width` (an upper-bound estimate).
fn wrapped_height(lines: &[Line], width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let rows: usize = lines
        .iter()
        .map(|line| line.width().div_ceil(width).max(1))
        .sum();
    u16::try_from(rows).unwrap_or(u16::MAX)
}

fn render_overlay(frame: &mut Frame, app: &App, study: &CaseStudy, area: Rect, hits: &mut HitMap) {
    let theme = app.theme;
    let width = (area.width * 4 / 5).max(area.width.min(40));
    let height = (area.height * 4 / 5).max(area.height.min(12));
    let rect = Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    );

    frame.render_widget(Clear, rect);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.accent))
        .style(Style::default().bg(theme.card).fg(theme.fg))
        .title(Line::from(Span::styled(
            format!(" {} {} ", study.icon, study.title),
            Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
        )))
        .title_top(Line::from(" [×] ").right_aligned());
    let inner = block.inner(rect);
    frame.render_widget(block, rect);
    hits.push(rect, Hit::OverlayBody);
    hits.push(
        Rect::new(rect.right().saturating_sub(6), rect.y, 5, 1),
        Hit::OverlayClose,
    );

    let body = Rect::new(inner.x + 1, inner.y, inner.width.saturating_sub(2), inner.height.saturating_sub(1));
    let lines = overlay_lines(study, theme);
    hits.overlay_scroll_limit = wrapped_height(&lines, body.width).saturating_sub(body.height);
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((app.overlay.scroll(), 0)),
        body,
    );

    let link = " [o] Open case study ↗ ";
    let link_rect = Rect::new(inner.x + 1, inner.bottom().saturating_sub(1), text_width(link), 1)
        .intersection(inner);
    frame.render_widget(
        Paragraph::new(Span::styled(
            link,
            Style::default().fg(theme.bg).bg(theme.secondary),
        )),
        link_rect,
    );
    hits.push(link_rect, Hit::OverlayLink);
}
