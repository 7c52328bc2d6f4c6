//! # Input Dispatch
//!
//! Translates crossterm events into [`App`] state changes. Anything that has
//! to reach outside the process (opening a link, saving the config) comes
//! back as an [`Action`] for the event loop to perform.
//!
//! Precedence, highest first:
//!
//! 1. Detail overlay open: scroll keys move the overlay body, `Esc` closes it,
//!    a click outside it closes it.
//! 2. Contact field focused: printable keys are typed into the field.
//! 3. Page keys.

use crate::ui::app::{Action, App, CarouselId, Focus, PX_PER_COLUMN};
use crate::ui::render::Hit;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

/// Rows one mouse wheel notch scrolls.
pub const WHEEL_ROWS: u16 = 3;

pub fn handle_event(app: &mut App, event: Event) -> Option<Action> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Mouse(mouse) => handle_mouse(app, mouse),
        Event::Resize(width, height) => {
            app.resize(width, height);
            None
        }
        _ => None,
    }
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> Option<Action> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return None;
    }

    if app.overlay.is_open() {
        return handle_overlay_key(app, key);
    }

    if app.focus == Some(Focus::Contact) {
        match key.code {
            KeyCode::Char(c) => {
                app.form.push_char(c);
                return None;
            }
            KeyCode::Backspace => {
                app.form.pop_char();
                return None;
            }
            KeyCode::Enter => return app.submit_contact(),
            KeyCode::Esc => {
                app.focus = None;
                return None;
            }
            _ => {}
        }
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.should_quit = true;
        }
        KeyCode::Down | KeyCode::Char('j') => app.scroll_page(1),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_page(-1),
        KeyCode::PageDown | KeyCode::Char(' ') => app.scroll_page(app.page_step()),
        KeyCode::PageUp => app.scroll_page(-app.page_step()),
        KeyCode::Home | KeyCode::Char('g') => app.scroll_to_top(),
        KeyCode::End | KeyCode::Char('G') => app.scroll_page(i32::from(u16::MAX)),
        KeyCode::Char(c @ '1'..='4') => {
            use crate::ui::viewport::Section;
            let section = match c {
                '1' => Section::Hero,
                '2' => Section::About,
                '3' => Section::Services,
                _ => Section::Portfolio,
            };
            app.scroll_to_section(section);
        }
        KeyCode::Tab => app.focus_next(),
        KeyCode::BackTab => app.focus_previous(),
        KeyCode::Esc => app.focus = None,
        KeyCode::Char('t') => return Some(app.toggle_theme()),
        KeyCode::Char('w') => {
            return Some(Action::OpenLink(app.content.links.messaging.clone()));
        }
        KeyCode::Char('o') => {
            return Some(Action::OpenLink(app.content.links.document.clone()));
        }
        KeyCode::Char('f') => app.next_filter(),
        KeyCode::Char('F') => app.previous_filter(),
        KeyCode::Left | KeyCode::Char('h') => navigate(app, false),
        KeyCode::Right | KeyCode::Char('l') => navigate(app, true),
        KeyCode::Enter => return activate(app),
        _ => {}
    }
    None
}

fn handle_overlay_key(app: &mut App, key: KeyEvent) -> Option<Action> {
    let limit = app.hits.overlay_scroll_limit;
    let page = u16::try_from(app.page_step()).unwrap_or(1);
    match key.code {
        KeyCode::Esc => app.close_overlay(),
        KeyCode::Char('q') | KeyCode::Char('Q') => app.should_quit = true,
        KeyCode::Down | KeyCode::Char('j') => app.overlay.scroll_down(1, limit),
        KeyCode::Up | KeyCode::Char('k') => app.overlay.scroll_up(1),
        KeyCode::PageDown | KeyCode::Char(' ') => app.overlay.scroll_down(page, limit),
        KeyCode::PageUp => app.overlay.scroll_up(page),
        KeyCode::Home | KeyCode::Char('g') => app.overlay.scroll_up(u16::MAX),
        KeyCode::Enter | KeyCode::Char('o') => {
            return app.selected_study().map(|s| Action::OpenLink(s.link.clone()));
        }
        KeyCode::Char('t') => return Some(app.toggle_theme()),
        _ => {}
    }
    None
}

// Left/right inside the focused section.
fn navigate(app: &mut App, forward: bool) {
    match app.focus {
        Some(Focus::Services) => {
            let index = if forward {
                app.selected_service + 1
            } else {
                app.selected_service.saturating_sub(1)
            };
            app.select_service(index);
        }
        Some(Focus::Portfolio) if forward => app.portfolio.next(),
        Some(Focus::Portfolio) => app.portfolio.prev(),
        Some(Focus::Clients) if forward => app.clients.next(),
        Some(Focus::Clients) => app.clients.prev(),
        Some(Focus::Contact) | None => {}
    }
}

fn activate(app: &mut App) -> Option<Action> {
    match app.focus? {
        Focus::Services => {
            app.flip_service(app.selected_service);
            None
        }
        Focus::Portfolio => app.activate_carousel(CarouselId::Portfolio),
        Focus::Clients => app.activate_carousel(CarouselId::Clients),
        Focus::Contact => app.submit_contact(),
    }
}

fn drag_units(column: u16) -> f64 {
    f64::from(column) * PX_PER_COLUMN
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) -> Option<Action> {
    let hit = app.hits.hit_at(mouse.column, mouse.row).cloned();

    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            update_strip_hover(app, hit.as_ref());
            None
        }
        MouseEventKind::ScrollDown => {
            if app.overlay.is_open() {
                app.overlay
                    .scroll_down(WHEEL_ROWS, app.hits.overlay_scroll_limit);
            } else {
                app.scroll_page(i32::from(WHEEL_ROWS));
            }
            None
        }
        MouseEventKind::ScrollUp => {
            if app.overlay.is_open() {
                app.overlay.scroll_up(WHEEL_ROWS);
            } else {
                app.scroll_page(-i32::from(WHEEL_ROWS));
            }
            None
        }
        MouseEventKind::Down(MouseButton::Left) => press(app, hit, mouse.column),
        MouseEventKind::Up(MouseButton::Left) => release(app, hit.as_ref(), mouse.column),
        _ => None,
    }
}

fn update_strip_hover(app: &mut App, hit: Option<&Hit>) {
    let over = hit == Some(&Hit::WorkStrip);
    if over && !app.strip.is_paused() {
        app.strip.pause();
    } else if !over && app.strip.is_paused() {
        app.strip.resume();
    }
}

fn press(app: &mut App, hit: Option<Hit>, column: u16) -> Option<Action> {
    if app.overlay.is_open() {
        match hit {
            Some(Hit::OverlayLink) => {
                return app.selected_study().map(|s| Action::OpenLink(s.link.clone()));
            }
            Some(Hit::OverlayBody) => {}
            // Close control or backdrop
            _ => app.close_overlay(),
        }
        return None;
    }

    let Some(hit) = hit else {
        if app.focus == Some(Focus::Contact) {
            app.focus = None;
        }
        return None;
    };

    match hit {
        Hit::Track(id) => app.carousel_mut(id).drag_start(drag_units(column)),
        Hit::Dot(id, index) => app.carousel_mut(id).go(index),
        Hit::Filter(index) => {
            app.focus = Some(Focus::Portfolio);
            app.set_filter(index);
        }
        Hit::Service(index) => {
            app.focus = Some(Focus::Services);
            app.flip_service(index);
        }
        Hit::PortfolioCard(index) => {
            app.focus = Some(Focus::Portfolio);
            app.open_study(index);
        }
        Hit::ClientCard(index) => {
            app.focus = Some(Focus::Clients);
            return app.open_client(index);
        }
        Hit::NavSection(section) => app.scroll_to_section(section),
        Hit::ThemeToggle => return Some(app.toggle_theme()),
        Hit::Link(url) => return Some(Action::OpenLink(url)),
        Hit::ContactInput => app.focus = Some(Focus::Contact),
        Hit::ContactSubmit => return app.submit_contact(),
        Hit::ScrollTop => app.scroll_to_top(),
        Hit::WorkStrip | Hit::OverlayBody | Hit::OverlayClose | Hit::OverlayLink => {}
    }
    None
}

// Releasing ends any drag, wherever the pointer is.
fn release(app: &mut App, hit: Option<&Hit>, column: u16) -> Option<Action> {
    let mut action = None;
    for id in [CarouselId::Portfolio, CarouselId::Clients] {
        let carousel = app.carousel_mut(id);
        if !carousel.is_dragging() {
            continue;
        }
        let swipe = carousel.drag_end(drag_units(column));
        if swipe.is_none() && hit == Some(&Hit::Track(id)) {
            // Press and release in place is a click on the visible card
            action = app.activate_carousel(id);
        }
    }
    action
}
