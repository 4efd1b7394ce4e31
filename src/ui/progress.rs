// Progress header rendering.
// Shows the step bar, the "Step x of y" label, and one dot per step.

use ratatui::{prelude::*, widgets::*};

use crate::state::{DotState, StepController};

/// Draw the progress bar and dots.
pub fn draw_progress(frame: &mut Frame, steps: &StepController, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(14)])
        .split(area);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Black))
        .ratio(steps.progress_percent() / 100.0)
        .label(steps.progress_label());
    frame.render_widget(gauge, chunks[0]);

    let dots: Vec<Span> = steps
        .dots()
        .into_iter()
        .map(|dot| match dot {
            DotState::Completed => Span::styled(" ✓ ", Style::default().fg(Color::Green)),
            DotState::Active => Span::styled(
                " ● ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            DotState::Pending => Span::styled(" ○ ", Style::default().fg(Color::DarkGray)),
        })
        .collect();

    let dots_widget = Paragraph::new(Line::from(dots)).alignment(Alignment::Center);
    frame.render_widget(dots_widget, chunks[1]);
}
