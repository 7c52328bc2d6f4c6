//! Rendering tests
//!
//! Draws the page into a `TestBackend` at desktop and mobile widths and
//! checks what lands in the buffer.

use folio::content::SiteContent;
use folio::ui::config::Config;
use folio::ui::render::{Hit, HitMap};
use folio::ui::theme::Theme;
use folio::ui::viewport::Section;
use folio::ui::{render, App};
use ratatui::{backend::TestBackend, Terminal};
use std::time::Duration;

/// Helper to create a test app with the bundled content
fn create_test_app() -> App {
    let content = SiteContent::bundled().unwrap();
    App::new(content, Config::default(), Theme::default_theme())
}

/// Draw one frame and return the buffer as text, one line per row.
fn draw(app: &mut App, width: u16, height: u16) -> String {
    app.resize(width, height);
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    let mut hits = HitMap::default();
    terminal.draw(|f| hits = render(f, app)).unwrap();
    app.hits = hits;

    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

#[test]
fn test_desktop_hero_shows_owner_and_nav() {
    let mut app = create_test_app();
    app.tick(Duration::from_millis(85 * 4));
    let screen = draw(&mut app, 120, 40);

    assert!(screen.contains("John"));
    assert!(screen.contains("Adegboye"));
    assert!(screen.contains("Copy"));
    assert!(app.hits.find(&Hit::NavSection(Section::About)).is_some());
    assert!(app.hits.find(&Hit::ThemeToggle).is_some());
}

#[test]
fn test_mobile_hides_nav_links() {
    let mut app = create_test_app();
    draw(&mut app, 60, 30);

    assert!(app.is_mobile());
    assert!(app.hits.find(&Hit::NavSection(Section::About)).is_none());
    assert!(app.hits.find(&Hit::ThemeToggle).is_some());
}

#[test]
fn test_portfolio_grid_on_desktop_and_track_on_mobile() {
    let mut app = create_test_app();
    app.resize(120, 40);
    app.scroll_to_section(Section::Portfolio);
    draw(&mut app, 120, 40);
    assert!(app.hits.find(&Hit::PortfolioCard(0)).is_some());
    assert!(app.hits.find(&Hit::Track(folio::ui::app::CarouselId::Portfolio)).is_none());

    app.resize(60, 30);
    app.scroll_to_section(Section::Portfolio);
    draw(&mut app, 60, 30);
    assert!(app.hits.find(&Hit::PortfolioCard(0)).is_none());
    assert!(app.hits.find(&Hit::Track(folio::ui::app::CarouselId::Portfolio)).is_some());
}

#[test]
fn test_overlay_shows_study_and_covers_page() {
    let mut app = create_test_app();
    app.open_study(1);
    let screen = draw(&mut app, 120, 40);

    let study = app.selected_study().unwrap();
    assert!(screen.contains(&study.title));
    let body = app.hits.find(&Hit::OverlayBody).unwrap();
    let centre = app.hits.hit_at(body.x + body.width / 2, body.y + body.height / 2);
    assert_eq!(centre, Some(&Hit::OverlayBody));
}

#[test]
fn test_contact_status_is_drawn() {
    let mut app = create_test_app();
    app.form.push_char('x');
    app.submit_contact();
    app.resize(120, 40);
    app.scroll_page(i32::from(u16::MAX));
    let screen = draw(&mut app, 120, 40);

    assert!(screen.contains("Please enter a valid email address."));
    assert!(app.hits.find(&Hit::ContactSubmit).is_some());
    assert!(app.hits.find(&Hit::ScrollTop).is_some());
}

#[test]
fn test_notice_replaces_footer_hints() {
    let mut app = create_test_app();
    app.notify("Could not open link: https://example.com");
    let screen = draw(&mut app, 120, 40);
    assert!(screen.contains("Could not open link"));

    app.tick(Duration::from_secs(4));
    let screen = draw(&mut app, 120, 40);
    assert!(!screen.contains("Could not open link"));
}

#[test]
fn test_tiny_terminal_does_not_panic() {
    let mut app = create_test_app();
    draw(&mut app, 10, 5);
    app.open_study(0);
    draw(&mut app, 10, 5);
}

#[test]
fn test_every_scroll_position_draws() {
    let mut app = create_test_app();
    app.resize(90, 24);
    let max = app.viewport.max_scroll();
    for scroll in (0..=max).step_by(7) {
        app.scroll_to_top();
        app.scroll_page(i32::from(scroll));
        app.tick(Duration::from_millis(u64::from(scroll) * 50));
        draw(&mut app, 90, 24);
    }
}

#[test]
fn test_mobile_track_with_thousands_of_studies_draws() {
    let mut content = SiteContent::bundled().unwrap();
    let template = content.portfolio[0].clone();
    content.portfolio = (0..1500)
        .map(|i| {
            let mut study = template.clone();
            study.id = format!("study-{i}");
            study.title = format!("Study {i}");
            study
        })
        .collect();
    let mut app = App::new(content, Config::default(), Theme::default_theme());
    app.resize(60, 30);
    app.scroll_to_section(Section::Portfolio);
    assert_eq!(app.portfolio.count(), 1500);

    app.portfolio.go(1499);
    app.tick(Duration::from_secs(2));
    let screen = draw(&mut app, 60, 30);
    assert!(screen.contains("Study 1499"));
    assert!(app.hits.find(&Hit::Track(folio::ui::app::CarouselId::Portfolio)).is_some());
}
