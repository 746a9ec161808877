pub mod components;
pub mod layout;
pub mod results;

use ratatui::{style::Color, text::Line, Frame};

use rollcall_service::BrowserView;

use crate::app::App;

const FOOTER: &str = "Type to search | ↑/↓ PgUp/PgDn: Scroll | Ctrl-U: Clear | Esc: Quit";

pub fn render(app: &App, frame: &mut Frame) {
    let chunks = layout::create_browser_layout(frame.area());

    components::render_header(&app.config.title, frame, chunks[0]);
    components::render_search_input(&app.query, frame, chunks[1]);

    let view = app.view();
    if let Some(line) = view.results_line() {
        components::render_results_line(&line, frame, chunks[2]);
    }

    match &view {
        BrowserView::Loading => components::render_message(
            vec![Line::from("Loading database...")],
            Color::Gray,
            frame,
            chunks[3],
        ),
        BrowserView::Prompt => components::render_message(
            vec![Line::from("Type a name or ID to search")],
            Color::DarkGray,
            frame,
            chunks[3],
        ),
        BrowserView::NoMatches { query } => components::render_message(
            vec![Line::from(format!("No customers found matching \"{}\"", query))],
            Color::Yellow,
            frame,
            chunks[3],
        ),
        BrowserView::Results { shown, .. } => {
            if app.config.is_wide(frame.area().width) {
                results::render_table(shown, app.scroll, frame, chunks[3]);
            } else {
                results::render_cards(shown, app.scroll, frame, chunks[3]);
            }
        }
    }

    components::render_footer(FOOTER, frame, chunks[4]);
}
