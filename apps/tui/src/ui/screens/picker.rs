use crate::app::App;
use crate::ui::widgets::tables::territory_table;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin};
use ratatui::style::{Color, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn render_picker(app: &App, f: &mut Frame<'_>) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Filter input
            Constraint::Min(4),    // Matches
            Constraint::Length(1), // Shortcuts hint
        ])
        .split(f.area().inner(Margin::new(2, 1)));

    let input_block = Block::default()
        .title(" Pick a territory ")
        .title_style(Style::default().fg(Color::Green))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let input = Paragraph::new(TextLine::from(vec![
        Span::styled("Filter: ", Style::default().fg(Color::Gray)),
        Span::styled(app.picker.query.as_str(), Style::default().fg(Color::White)),
        Span::styled("_", Style::default().fg(Color::Green)),
    ]))
    .block(input_block);
    f.render_widget(input, layout[0]);

    let matches = app.picker_matches();
    let block = Block::default()
        .title(format!(" Matches ({}) ", matches.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    if matches.is_empty() {
        f.render_widget(
            Paragraph::new("No territory matches the filter.")
                .block(block)
                .alignment(Alignment::Center),
            layout[1],
        );
    } else {
        let max_visible_rows = usize::from(layout[1].height.saturating_sub(3));
        f.render_widget(
            territory_table(
                &app.territories,
                &matches,
                Some(app.picker.index),
                max_visible_rows,
                block,
            ),
            layout[1],
        );
    }

    f.render_widget(
        Paragraph::new("Type to filter | Up/Down: Move | Enter: Pick | Esc: Back")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center),
        layout[2],
    );
}
