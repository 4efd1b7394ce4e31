// Step 3 rendering.
// Loading indicator, inline error, generated review or its editor, and the action row.

use ratatui::{prelude::*, widgets::*};

use crate::state::{EditMode, WizardState};

/// Draw the final step from the wizard's derived view.
pub fn draw_review(frame: &mut Frame, wizard: &WizardState, area: Rect) {
    let view = wizard.final_step();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Review / loading / error
            Constraint::Length(1), // Actions
            Constraint::Length(1), // Status line
        ])
        .split(area);

    let block = Block::default().borders(Borders::ALL).title(" Your Review ");

    if view.loading_visible {
        let text = Paragraph::new("⏳ Writing your review...")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Yellow))
            .block(block);
        frame.render_widget(text, chunks[0]);
    } else if let Some(error) = &view.error {
        let text = Paragraph::new(format!("❌ {}", error))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(Color::Red))
            .block(block);
        frame.render_widget(text, chunks[0]);
    } else if view.review_visible {
        let editor = wizard.editor();
        match (editor.mode(), editor.draft()) {
            (EditMode::Editing, Some(draft)) => {
                let block = block
                    .title(" Editing ")
                    .border_style(Style::default().fg(Color::Yellow));
                let text = Paragraph::new(format!("{}█", draft))
                    .wrap(Wrap { trim: false })
                    .block(block);
                frame.render_widget(text, chunks[0]);
            }
            _ => {
                let text = Paragraph::new(editor.content().to_string())
                    .wrap(Wrap { trim: false })
                    .block(block);
                frame.render_widget(text, chunks[0]);
            }
        }
    } else {
        frame.render_widget(block, chunks[0]);
    }

    let mut actions = Vec::new();
    if view.actions_visible {
        let button = wizard.completion().button();
        let button_style = if button.is_disabled() {
            Style::default().fg(Color::Green)
        } else {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        };
        actions.push(Span::styled(format!(" c {} ", button.label()), button_style));
        actions.push(Span::raw("  "));
        actions.push(Span::styled(
            format!(" e {} ", wizard.editor().toggle_label()),
            Style::default().fg(Color::Yellow),
        ));
        actions.push(Span::raw("  "));
    }
    if view.nav_visible {
        actions.push(Span::styled(" Esc Back ", Style::default().fg(Color::DarkGray)));
    }
    frame.render_widget(Paragraph::new(Line::from(actions)), chunks[1]);

    if let Some(status) = &view.status_line {
        let status_widget = Paragraph::new(status.clone())
            .alignment(Alignment::Right)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(status_widget, chunks[2]);
    }
}
