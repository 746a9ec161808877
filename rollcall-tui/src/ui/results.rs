use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use rollcall_service::{Field, Record};

use crate::ui::layout;

const LABEL_WIDTH: usize = 9;

/// One row per record, all four fields as columns
pub fn render_table(records: &[&Record], scroll: usize, frame: &mut Frame, area: Rect) {
    let header = Row::new(Field::ALL.iter().map(|field| Cell::from(field.label())))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .bottom_margin(1);

    let rows: Vec<Row> = records
        .iter()
        .skip(scroll)
        .map(|record| {
            Row::new(vec![
                Cell::from(record.id.display_text()),
                Cell::from(record.name.display_text())
                    .style(Style::default().add_modifier(Modifier::BOLD)),
                Cell::from(record.nic.display_text()).style(Style::default().fg(Color::Gray)),
                Cell::from(record.address.display_text()).style(Style::default().fg(Color::Gray)),
            ])
        })
        .collect();

    let table = Table::new(rows, layout::table_widths())
        .header(header)
        .block(Block::default().borders(Borders::ALL).title("Results"))
        .style(Style::default().fg(Color::White));

    frame.render_widget(table, area);
}

/// Stacked cards for narrow terminals: the name, then labelled fields
pub fn render_cards(records: &[&Record], scroll: usize, frame: &mut Frame, area: Rect) {
    let lines: Vec<Line> = records
        .iter()
        .skip(scroll)
        .flat_map(|record| card_lines(record))
        .collect();

    let cards = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Results"))
        .style(Style::default().fg(Color::White));

    frame.render_widget(cards, area);
}

fn card_lines(record: &Record) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        format!("▌ {}", record.name.display_text()),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))];

    for field in [Field::Id, Field::Nic, Field::Address] {
        lines.push(Line::from(vec![
            Span::styled(
                format!("▌ {:<width$}", format!("{}:", field.label()), width = LABEL_WIDTH),
                Style::default().fg(Color::DarkGray),
            ),
            Span::raw(record.field(field).display_text()),
        ]));
    }

    lines.push(Line::from(""));
    lines
}
