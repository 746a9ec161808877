use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub const SEARCH_PLACEHOLDER: &str = "Search Name, ID, or NIC...";

pub fn render_header(title: &str, frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

pub fn render_search_input(query: &str, frame: &mut Frame, area: Rect) {
    let line = if query.is_empty() {
        Line::from(vec![
            Span::styled("_", Style::default().fg(Color::White)),
            Span::styled(SEARCH_PLACEHOLDER, Style::default().fg(Color::DarkGray)),
        ])
    } else {
        Line::from(Span::styled(
            format!("{}_", query),
            Style::default().fg(Color::White),
        ))
    };

    let input = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Search")
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(input, area);
}

pub fn render_results_line(text: &str, frame: &mut Frame, area: Rect) {
    let line = Paragraph::new(Span::styled(
        format!(" {}", text),
        Style::default().fg(Color::Gray),
    ));
    frame.render_widget(line, area);
}

/// A centred message in place of the results
pub fn render_message(lines: Vec<Line>, color: Color, frame: &mut Frame, area: Rect) {
    let message = Paragraph::new(lines)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Results"))
        .wrap(Wrap { trim: true });
    frame.render_widget(message, area);
}

pub fn render_footer(text: &str, frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL).title("Help"));
    frame.render_widget(footer, area);
}
