// Rating slider rendering.
// Draws each slider's label row and track fill for step 1.

use ratatui::{prelude::*, widgets::*};

use crate::state::{RatingSliders, Slider};

/// Draw all rating sliders, highlighting the focused one.
pub fn draw_ratings(frame: &mut Frame, sliders: &RatingSliders, focus: usize, area: Rect) {
    let outer = Block::default()
        .borders(Borders::ALL)
        .title(" How was your visit? ");
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let count = sliders.iter().count();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(4); count])
        .split(inner);

    for (i, slider) in sliders.iter().enumerate() {
        if let Some(row) = rows.get(i) {
            draw_slider(frame, slider, i == focus, *row);
        }
    }
}

fn draw_slider(frame: &mut Frame, slider: &Slider, focused: bool, area: Rect) {
    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(format!(" {} ", slider.dimension.title()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(inner);

    let track = LineGauge::default()
        .filled_style(Style::default().fg(Color::Cyan))
        .unfilled_style(Style::default().fg(Color::DarkGray))
        .ratio(slider.fill_percent() / 100.0)
        .label(format!("{}", slider.value()));
    frame.render_widget(track, chunks[0]);

    let labels: Vec<Span> = slider
        .dimension
        .labels()
        .iter()
        .enumerate()
        .flat_map(|(i, label)| {
            let style = if slider.is_label_active(i) {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            [Span::styled(format!(" {} ", label), style), Span::raw("  ")]
        })
        .collect();

    let labels_widget = Paragraph::new(Line::from(labels)).alignment(Alignment::Center);
    frame.render_widget(labels_widget, chunks[1]);
}
