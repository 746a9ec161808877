use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Browser layout: header, search box, results line, results, footer
pub fn create_browser_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Search input
            Constraint::Length(1), // Results line
            Constraint::Min(1),    // Results
            Constraint::Length(3), // Footer
        ])
        .split(area)
        .to_vec()
}

/// Column widths for the wide table layout: ID, Name, NIC, Address
pub fn table_widths() -> [Constraint; 4] {
    [
        Constraint::Percentage(15),
        Constraint::Percentage(35),
        Constraint::Percentage(20),
        Constraint::Percentage(30),
    ]
}
