use crate::domain::{Owner, Territory};
use crate::spinner::SpinnerPhase;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;
use throbber_widgets_tui::{Throbber, ThrobberState, WhichUse, BRAILLE_SIX};

pub const fn owner_color(owner: Owner) -> Color {
    match owner {
        Owner::Union => Color::Rgb(70, 110, 230),
        Owner::Confederate => Color::Rgb(170, 170, 170),
        Owner::Neutral => Color::Yellow,
    }
}

/// What the spinner panel needs to draw one frame.
#[derive(Debug, Clone, Copy)]
pub struct SpinnerView<'a> {
    pub phase: SpinnerPhase,
    pub selected: Option<&'a Territory>,
    pub display_name: Option<&'a str>,
    pub disabled: bool,
}

pub const fn prompt_text(phase: SpinnerPhase, disabled: bool) -> &'static str {
    match (phase, disabled) {
        (SpinnerPhase::Spinning, _) => "Spinning...",
        (SpinnerPhase::Settled, _) => "[c] Change",
        (SpinnerPhase::Idle, true) => "Spinner locked  [l] Unlock",
        (SpinnerPhase::Idle, false) => "[s] Spin  [p] Pick",
    }
}

pub fn render_spinner_panel(
    f: &mut Frame<'_>,
    area: Rect,
    view: &SpinnerView<'_>,
    throbber_state: &ThrobberState,
) {
    let block = Block::default()
        .title(" Next Campaign ")
        .title_style(Style::default().fg(Color::Green))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    f.render_widget(block, area);

    let inner = area.inner(Margin::new(2, 1));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Body
            Constraint::Length(1), // Prompt
        ])
        .split(inner);

    match view.phase {
        SpinnerPhase::Spinning => render_spinning(f, chunks[0], view, throbber_state),
        SpinnerPhase::Settled => render_settled(f, chunks[0], view.selected),
        SpinnerPhase::Idle => render_idle(f, chunks[0]),
    }

    let prompt_style = if view.disabled && view.phase == SpinnerPhase::Idle {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Gray)
    };
    f.render_widget(
        Paragraph::new(prompt_text(view.phase, view.disabled))
            .style(prompt_style)
            .alignment(Alignment::Center),
        chunks[1],
    );
}

fn render_spinning(
    f: &mut Frame<'_>,
    area: Rect,
    view: &SpinnerView<'_>,
    throbber_state: &ThrobberState,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    let throbber = Throbber::default()
        .label(" rolling the dice")
        .style(Style::default().fg(Color::Gray))
        .throbber_style(Style::default().fg(Color::Yellow))
        .throbber_set(BRAILLE_SIX)
        .use_type(WhichUse::Spin);
    let mut state = throbber_state.clone();
    f.render_stateful_widget(throbber, rows[0], &mut state);

    let name = view.display_name.unwrap_or("...");
    let headline = Paragraph::new(TextLine::from(Span::styled(
        name.to_string(),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    f.render_widget(headline, centered_line(rows[1]));
}

fn render_settled(f: &mut Frame<'_>, area: Rect, selected: Option<&Territory>) {
    let Some(territory) = selected else {
        render_idle(f, area);
        return;
    };

    let lines = vec![
        TextLine::from(Span::styled(
            territory.name.clone(),
            Style::default()
                .fg(owner_color(territory.owner))
                .add_modifier(Modifier::BOLD),
        )),
        TextLine::from(""),
        TextLine::from(vec![
            Span::styled("Held by: ", Style::default().fg(Color::Gray)),
            Span::styled(
                territory.owner.label(),
                Style::default().fg(owner_color(territory.owner)),
            ),
        ]),
        TextLine::from(vec![
            Span::styled("Victory points: ", Style::default().fg(Color::Gray)),
            Span::styled(
                territory.victory_points.to_string(),
                Style::default().fg(Color::White),
            ),
        ]),
    ];

    f.render_widget(
        Paragraph::new(Text::from(lines))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}

fn render_idle(f: &mut Frame<'_>, area: Rect) {
    f.render_widget(
        Paragraph::new(TextLine::from(Span::styled(
            "No territory chosen",
            Style::default().fg(Color::Gray),
        )))
        .alignment(Alignment::Center),
        centered_line(area),
    );
}

fn centered_line(area: Rect) -> Rect {
    let y = area.y + area.height.saturating_sub(1) / 2;
    Rect {
        x: area.x,
        y,
        width: area.width,
        height: area.height.min(1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::territory;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn rendered(view: &SpinnerView<'_>) -> Result<String, Box<dyn std::error::Error>> {
        let mut terminal = Terminal::new(TestBackend::new(40, 10))?;
        terminal.draw(|f| {
            let area = f.area();
            render_spinner_panel(f, area, view, &ThrobberState::default());
        })?;

        let buffer = terminal.backend().buffer();
        Ok(buffer.content().iter().map(|cell| cell.symbol()).collect())
    }

    #[test]
    fn prompts_follow_the_phase() {
        assert_eq!(prompt_text(SpinnerPhase::Idle, false), "[s] Spin  [p] Pick");
        assert_eq!(prompt_text(SpinnerPhase::Idle, true), "Spinner locked  [l] Unlock");
        assert_eq!(prompt_text(SpinnerPhase::Settled, true), "[c] Change");
    }

    #[test]
    fn idle_panel_prompts_for_a_choice() -> Result<(), Box<dyn std::error::Error>> {
        let view = SpinnerView {
            phase: SpinnerPhase::Idle,
            selected: None,
            display_name: None,
            disabled: false,
        };

        let screen = rendered(&view)?;
        assert!(screen.contains("No territory chosen"));
        assert!(screen.contains("[s] Spin"));

        Ok(())
    }

    #[test]
    fn settled_panel_shows_the_territory() -> Result<(), Box<dyn std::error::Error>> {
        let richmond = territory("richmond", "Richmond");
        let view = SpinnerView {
            phase: SpinnerPhase::Settled,
            selected: Some(&richmond),
            display_name: None,
            disabled: false,
        };

        let screen = rendered(&view)?;
        assert!(screen.contains("Richmond"));
        assert!(screen.contains("Neutral"));
        assert!(screen.contains("[c] Change"));

        Ok(())
    }

    #[test]
    fn spinning_panel_shows_the_current_tick() -> Result<(), Box<dyn std::error::Error>> {
        let view = SpinnerView {
            phase: SpinnerPhase::Spinning,
            selected: None,
            display_name: Some("Vicksburg"),
            disabled: false,
        };

        let screen = rendered(&view)?;
        assert!(screen.contains("Vicksburg"));

        Ok(())
    }
}
