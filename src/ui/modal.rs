// Modal UI components.
// Blocking notice drawn on top of the wizard.

use ratatui::{prelude::*, widgets::*};

/// Draw a blocking notice that must be acknowledged with Enter.
pub fn draw_notice_modal(frame: &mut Frame, title: &str, message: &str) {
    let area = frame.area();

    // Create centered modal
    let modal_width = 60.min(area.width);
    let modal_height = 8.min(area.height);
    let modal_x = (area.width.saturating_sub(modal_width)) / 2;
    let modal_y = (area.height.saturating_sub(modal_height)) / 2;

    let modal_area = Rect::new(modal_x, modal_y, modal_width, modal_height);

    // Clear the area behind the modal
    frame.render_widget(Clear, modal_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Message
            Constraint::Length(1), // Instructions
        ])
        .split(modal_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(format!(" {} ", title));

    let message_widget = Paragraph::new(message.to_string())
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(message_widget, chunks[0]);

    let instructions = Line::from(vec![
        Span::styled(" Enter", Style::default().fg(Color::Yellow)),
        Span::styled(" = OK ", Style::default().fg(Color::DarkGray)),
    ]);

    let instructions_widget = Paragraph::new(instructions).alignment(Alignment::Center);
    frame.render_widget(instructions_widget, chunks[1]);
}
