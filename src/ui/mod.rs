// UI module for rendering the TUI.
// Everything drawn here is a pure function of the app and wizard state.

mod form;
mod modal;
mod progress;
mod ratings;
mod review;

use ratatui::{prelude::*, widgets::*};

use crate::app::App;
use crate::state::EditMode;

/// Main draw function that renders the entire UI.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Business header
            Constraint::Length(2), // Progress
            Constraint::Min(1),    // Step content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    draw_header(frame, app, chunks[0]);
    progress::draw_progress(frame, app.wizard.steps(), chunks[1]);
    draw_content(frame, app, chunks[2]);
    draw_status_bar(frame, app, chunks[3]);

    // Overlays (rendered last, on top of everything)
    if app.show_help {
        draw_help_overlay(frame);
    }
    if let Some(notice) = app.wizard.completion().notice() {
        modal::draw_notice_modal(frame, "Copy your review", notice);
    }
}

/// Draw the business name and address.
fn draw_header(frame: &mut Frame, app: &App, area: Rect) {
    let business = app.wizard.business();
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            business.name.clone(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            business.address.clone(),
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" reviewbud ")
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
    );
    frame.render_widget(header, area);
}

/// Draw only the current step's content.
fn draw_content(frame: &mut Frame, app: &App, area: Rect) {
    let wizard = &app.wizard;
    let steps = wizard.steps();

    if steps.is_visible(1) {
        ratings::draw_ratings(frame, wizard.sliders(), app.slider_focus, area);
    } else if steps.is_visible(2) {
        form::draw_form(
            frame,
            wizard.tags(),
            wizard.feedback(),
            wizard.customer_name(),
            app.form_focus,
            area,
        );
    } else {
        review::draw_review(frame, wizard, area);
    }
}

/// Draw the status bar with keybinding hints for the current step.
fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let hint = |key: &'static str, label: &'static str| {
        [
            Span::raw(format!(" {} ", key)),
            Span::styled(label, Style::default().fg(Color::DarkGray)),
            Span::raw(" "),
        ]
    };

    let pairs: Vec<(&str, &str)> = match app.wizard.steps().current() {
        1 => vec![
            ("↑↓", "Rating"),
            ("←→/1-5", "Choose"),
            ("⇧←→", "Drag"),
            ("↵", "Next"),
            ("?", "Help"),
            ("q", "Quit"),
        ],
        2 if app.form_focus.is_text() => vec![
            ("Tab", "Field"),
            ("↵", "Generate"),
            ("Esc", "Back"),
            ("^u", "Clear"),
        ],
        2 => vec![
            ("↑↓", "Tag"),
            ("Space", "Toggle"),
            ("Tab", "Field"),
            ("↵", "Generate"),
            ("Esc", "Back"),
            ("q", "Quit"),
        ],
        _ if app.wizard.editor().mode() == EditMode::Editing => {
            vec![("Esc/^s", "Save"), ("↵", "Newline")]
        }
        _ => vec![
            ("c", "Copy & post"),
            ("e", "Edit"),
            ("Esc", "Back"),
            ("q", "Quit"),
        ],
    };

    let spans: Vec<Span> = pairs
        .into_iter()
        .flat_map(|(key, label)| hint(key, label))
        .collect();

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Draw the help overlay.
fn draw_help_overlay(frame: &mut Frame) {
    let area = frame.area();

    // Create a centered popup
    let popup_width = 55.min(area.width);
    let popup_height = 18.min(area.height);
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let key_line = |key: &'static str, text: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {:<14}", key), Style::default().fg(Color::Cyan)),
            Span::raw(text),
        ])
    };

    let help_text = vec![
        Line::from(vec![Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        key_line("↑/↓ or j/k", "Select rating / tag"),
        key_line("←/→ or h/l", "Change rating"),
        key_line("1-5", "Pick rating label"),
        key_line("Shift+←/→", "Fine drag (snaps on release)"),
        key_line("Space", "Toggle tag"),
        key_line("Tab", "Next field"),
        key_line("Enter", "Next step / generate"),
        key_line("Esc", "Back"),
        key_line("e", "Edit / save review"),
        key_line("c", "Copy review and open review page"),
        key_line("?", "Show/hide this help"),
        key_line("q", "Quit"),
        Line::from(""),
        Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::DarkGray)),
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::styled(" or ", Style::default().fg(Color::DarkGray)),
            Span::styled("?", Style::default().fg(Color::Yellow)),
            Span::styled(" to close", Style::default().fg(Color::DarkGray)),
        ]),
    ];

    let help_paragraph = Paragraph::new(help_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Help ")
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
        )
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);
}
