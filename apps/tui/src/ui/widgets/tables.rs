use crate::domain::Territory;
use crate::ui::widgets::spinner::owner_color;
use ratatui::layout::Constraint;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Cell, Row, Table};

/// First visible row so that `selected_index` stays on screen.
pub const fn scroll_offset(
    total_rows: usize,
    max_visible_rows: usize,
    selected_index: usize,
) -> usize {
    if total_rows <= max_visible_rows {
        return 0;
    }

    if selected_index >= max_visible_rows {
        return selected_index.saturating_sub(max_visible_rows) + 1;
    }

    0
}

/// Roster rows in `order`, with `highlighted` (a position in `order`) marked.
pub fn territory_table<'a>(
    territories: &'a [Territory],
    order: &[usize],
    highlighted: Option<usize>,
    max_visible_rows: usize,
    block: Block<'a>,
) -> Table<'a> {
    let header = Row::new(vec![
        Cell::from("Territory"),
        Cell::from("Owner"),
        Cell::from("VP"),
    ])
    .style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let offset = scroll_offset(order.len(), max_visible_rows, highlighted.unwrap_or(0));

    let rows = order
        .iter()
        .enumerate()
        .skip(offset)
        .take(max_visible_rows)
        .filter_map(|(position, &index)| {
            let territory = territories.get(index)?;
            let style = if highlighted == Some(position) {
                Style::default()
                    .bg(Color::Rgb(0, 0, 238))
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(owner_color(territory.owner))
            };

            Some(
                Row::new(vec![
                    Cell::from(territory.name.clone()),
                    Cell::from(territory.owner.label()),
                    Cell::from(territory.victory_points.to_string()),
                ])
                .style(style),
            )
        })
        .collect::<Vec<_>>();

    let widths = [
        Constraint::Min(16),
        Constraint::Length(12),
        Constraint::Length(4),
    ];

    Table::new(rows, widths).header(header).block(block)
}
