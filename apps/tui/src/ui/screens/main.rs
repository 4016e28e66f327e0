use crate::app::App;
use crate::ui::widgets::popup::render_popup;
use crate::ui::widgets::spinner::{render_spinner_panel, SpinnerView};
use crate::ui::widgets::tables::territory_table;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub fn render_main(app: &App, f: &mut Frame<'_>) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title area
            Constraint::Min(8),    // Spinner and roster
            Constraint::Length(3), // Status area
            Constraint::Length(1), // Shortcuts hint
        ])
        .split(f.area().inner(Margin::new(2, 1)));

    render_title_section(app, f, main_layout[0]);
    render_content_section(app, f, main_layout[1]);
    render_status_section(app, f, main_layout[2]);
    render_shortcuts(f, main_layout[3]);

    if app.show_help {
        let area = f.area();
        render_help_popup(f, area);
    }
}

fn render_title_section(app: &App, f: &mut Frame<'_>, area: Rect) {
    let title_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let lock_span = if app.locked {
        Span::styled("  [locked]", Style::default().fg(Color::Red))
    } else {
        Span::raw("")
    };

    let title = Paragraph::new(TextLine::from(vec![
        Span::styled(
            "Campaign ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "Territory Spinner",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        lock_span,
    ]))
    .block(title_block)
    .alignment(Alignment::Left);

    f.render_widget(title, area);
}

fn render_content_section(app: &App, f: &mut Frame<'_>, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let view = SpinnerView {
        phase: app.phase(),
        selected: app.selected_territory(),
        display_name: app.spinner.display_name(),
        disabled: app.locked,
    };
    render_spinner_panel(f, columns[0], &view, &app.throbber);

    render_roster(app, f, columns[1]);
}

fn render_roster(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title(format!(" Territories ({}) ", app.territories.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    if app.territories.is_empty() {
        let message = format!("No territories loaded from {}", app.roster_path.display());
        let paragraph = Paragraph::new(message)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
        return;
    }

    let order: Vec<usize> = (0..app.territories.len()).collect();
    let highlighted = app
        .selected_territory()
        .and_then(|selected| app.territories.iter().position(|t| t.id == selected.id));
    let max_visible_rows = usize::from(area.height.saturating_sub(3));

    f.render_widget(
        territory_table(&app.territories, &order, highlighted, max_visible_rows, block),
        area,
    );
}

fn render_status_section(app: &App, f: &mut Frame<'_>, area: Rect) {
    let status_block = Block::default()
        .title(" Status ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));

    let status = Paragraph::new(app.status_message.as_str())
        .style(Style::default().fg(Color::White))
        .block(status_block);

    f.render_widget(status, area);
}

fn render_shortcuts(f: &mut Frame<'_>, area: Rect) {
    let shortcuts = Paragraph::new(
        "s: Spin | p: Pick | c: Change | l: Lock | ?: Help | q: Quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);

    f.render_widget(shortcuts, area);
}

fn render_help_popup(f: &mut Frame<'_>, area: Rect) {
    let key = |label: &'static str| Span::styled(label, Style::default().fg(Color::Cyan));

    let lines = vec![
        TextLine::from(vec![key("s / Space"), Span::raw("  Spin for a random territory")]),
        TextLine::from(vec![key("p / Enter"), Span::raw("  Pick a territory by hand")]),
        TextLine::from(vec![key("c"), Span::raw("          Change the chosen territory")]),
        TextLine::from(vec![key("l"), Span::raw("          Lock or unlock the spinner")]),
        TextLine::from(vec![key("q / Esc"), Span::raw("    Quit")]),
        TextLine::from(""),
        TextLine::from(Span::styled(
            "Picker: type to filter, Up/Down to move, Enter to pick, Esc to go back",
            Style::default().fg(Color::Gray),
        )),
        TextLine::from(""),
        TextLine::from(Span::styled(
            "Press Esc or ? to close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    render_popup(f, area, "Help", lines);
}
