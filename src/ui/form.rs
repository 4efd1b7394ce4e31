// Step 2 rendering.
// Tag list with selection marks, the feedback box with its character count, and the name field.

use ratatui::{prelude::*, widgets::*};

use crate::app::FormFocus;
use crate::state::{FeedbackField, TagSelector, TextField};

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Draw tags, feedback, and customer name.
pub fn draw_form(
    frame: &mut Frame,
    tags: &TagSelector,
    feedback: &FeedbackField,
    customer_name: &TextField,
    focus: FormFocus,
    area: Rect,
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    draw_tags(frame, tags, focus == FormFocus::Tags, chunks[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(3)])
        .split(chunks[1]);

    draw_feedback(frame, feedback, focus == FormFocus::Feedback, right[0]);
    draw_text_input(
        frame,
        " Your name (optional) ",
        customer_name.value(),
        focus == FormFocus::CustomerName,
        right[1],
    );
}

fn draw_tags(frame: &mut Frame, tags: &TagSelector, focused: bool, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(focus_style(focused))
        .title(" What stood out? ");

    if tags.available().is_empty() {
        let text = Paragraph::new("No tags configured")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(text, area);
        return;
    }

    let items: Vec<ListItem> = tags
        .available()
        .iter()
        .map(|tag| {
            if tags.is_selected(tag) {
                ListItem::new(Line::from(vec![
                    Span::styled("[x] ", Style::default().fg(Color::Cyan)),
                    Span::styled(
                        tag.clone(),
                        Style::default()
                            .fg(Color::White)
                            .bg(Color::Blue)
                            .add_modifier(Modifier::BOLD),
                    ),
                ]))
            } else {
                ListItem::new(Line::from(vec![
                    Span::styled("[ ] ", Style::default().fg(Color::DarkGray)),
                    Span::raw(tag.clone()),
                ]))
            }
        })
        .collect();

    let mut list_state = ListState::default();
    if focused {
        list_state.select(Some(tags.cursor()));
    }

    let list_widget = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    frame.render_stateful_widget(list_widget, area, &mut list_state);
}

fn draw_feedback(frame: &mut Frame, feedback: &FeedbackField, focused: bool, area: Rect) {
    let count_style = if feedback.over_budget() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(focus_style(focused))
        .title(" Tell us more ")
        .title_bottom(
            Line::from(Span::styled(format!(" {} ", feedback.readout()), count_style))
                .right_aligned(),
        );

    let mut spans = vec![Span::raw(feedback.value().to_string())];
    if focused {
        spans.push(Span::styled("█", Style::default().fg(Color::Yellow)));
    }

    let text = Paragraph::new(Line::from(spans))
        .wrap(Wrap { trim: false })
        .block(block);
    frame.render_widget(text, area);
}

fn draw_text_input(frame: &mut Frame, title: &str, value: &str, focused: bool, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(focus_style(focused))
        .title(title.to_string());

    let mut spans = vec![Span::raw(value.to_string())];
    if focused {
        spans.push(Span::styled("█", Style::default().fg(Color::Yellow)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
