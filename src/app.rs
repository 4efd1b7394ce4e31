// App state and main event loop.
// Maps keys to wizard actions, runs effects, and drains async results.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::prelude::*;
use tokio::sync::mpsc::{self, UnboundedReceiver};

use crate::clipboard::{ClipboardChain, Release};
use crate::effects::{EffectRunner, Flow};
use crate::generation::GenerationClient;
use crate::navigator::Navigator;
use crate::state::{Action, Dimension, EditMode, SLIDER_MAX, TextEdit, WizardState};
use crate::ui;

/// How far one drag keystroke moves a slider.
const DRAG_STEP: f64 = 0.25;

/// Which field has keyboard focus on step 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormFocus {
    #[default]
    Tags,
    Feedback,
    CustomerName,
}

impl FormFocus {
    pub fn next(&self) -> Self {
        match self {
            FormFocus::Tags => FormFocus::Feedback,
            FormFocus::Feedback => FormFocus::CustomerName,
            FormFocus::CustomerName => FormFocus::Tags,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            FormFocus::Tags => FormFocus::CustomerName,
            FormFocus::Feedback => FormFocus::Tags,
            FormFocus::CustomerName => FormFocus::Feedback,
        }
    }

    /// Whether keystrokes are typed into a text field.
    pub fn is_text(&self) -> bool {
        !matches!(self, FormFocus::Tags)
    }
}

/// Main application state.
pub struct App {
    pub wizard: WizardState,
    /// Slider with keyboard focus on step 1.
    pub slider_focus: usize,
    pub form_focus: FormFocus,
    pub show_help: bool,
    pub should_quit: bool,
    /// Set when the wizard left for the review target.
    pub exit_url: Option<String>,
    runner: EffectRunner,
    rx: UnboundedReceiver<Action>,
}

impl App {
    pub fn new(
        wizard: WizardState,
        client: GenerationClient,
        clipboard: ClipboardChain,
        navigator: Box<dyn Navigator>,
    ) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            wizard,
            slider_focus: 0,
            form_focus: FormFocus::default(),
            show_help: false,
            should_quit: false,
            exit_url: None,
            runner: EffectRunner::new(tx, client, clipboard, navigator),
            rx,
        }
    }

    /// Main event loop.
    pub fn run(&mut self, terminal: &mut Terminal<impl Backend>) -> io::Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| ui::draw(frame, self))?;
            self.drain_actions();
            self.handle_events()?;
        }
        Ok(())
    }

    /// Apply an action and run whatever effects it produces.
    pub fn dispatch(&mut self, action: Action) {
        for effect in self.wizard.dispatch(action) {
            if let Flow::Exit { url } = self.runner.run(effect) {
                self.exit_url = Some(url);
                self.should_quit = true;
            }
        }
    }

    /// Call once after the event loop ends, before the process exits.
    pub fn release_clipboard(&mut self, grace: Duration) -> Release {
        self.runner.release_clipboard(grace)
    }

    /// Apply every action delivered by finished requests and timers.
    pub fn drain_actions(&mut self) {
        while let Ok(action) = self.rx.try_recv() {
            self.dispatch(action);
        }
    }

    /// Handle keyboard and other events.
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Translate one key press into focus changes and wizard actions.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        // The manual-copy notice blocks everything else
        if self.wizard.completion().notice().is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.dispatch(Action::DismissNotice);
            }
            return;
        }

        if self.show_help {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?')) {
                self.show_help = false;
            }
            return;
        }

        if !self.is_typing() {
            match key.code {
                KeyCode::Char('q') => {
                    self.should_quit = true;
                    return;
                }
                KeyCode::Char('?') => {
                    self.show_help = true;
                    return;
                }
                _ => {}
            }
        }

        match self.wizard.steps().current() {
            1 => self.handle_ratings_key(key),
            2 => self.handle_form_key(key),
            _ => self.handle_review_key(key),
        }
    }

    /// Whether printable keys go into a text field.
    pub fn is_typing(&self) -> bool {
        match self.wizard.steps().current() {
            2 => self.form_focus.is_text(),
            3 => self.wizard.editor().mode() == EditMode::Editing,
            _ => false,
        }
    }

    fn focused_dimension(&self) -> Dimension {
        Dimension::ALL[self.slider_focus.min(Dimension::ALL.len() - 1)]
    }

    /// Leaving a slider releases it where the drag stopped.
    fn move_slider_focus(&mut self, next: usize) {
        let dimension = self.focused_dimension();
        let value = self.wizard.sliders().get(dimension).position();
        self.dispatch(Action::SliderCommit { dimension, value });
        self.slider_focus = next;
    }

    fn handle_ratings_key(&mut self, key: KeyEvent) {
        let dimension = self.focused_dimension();
        let slider = self.wizard.sliders().get(dimension);
        let index = slider.active_label();
        let position = slider.position();
        let shift = key.modifiers.contains(KeyModifiers::SHIFT);

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_slider_focus(self.slider_focus.saturating_sub(1));
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let next = (self.slider_focus + 1).min(Dimension::ALL.len() - 1);
                self.move_slider_focus(next);
            }
            KeyCode::Left if shift => self.dispatch(Action::SliderInput {
                dimension,
                value: position - DRAG_STEP,
            }),
            KeyCode::Right if shift => self.dispatch(Action::SliderInput {
                dimension,
                value: position + DRAG_STEP,
            }),
            KeyCode::Char('H') => self.dispatch(Action::SliderInput {
                dimension,
                value: position - DRAG_STEP,
            }),
            KeyCode::Char('L') => self.dispatch(Action::SliderInput {
                dimension,
                value: position + DRAG_STEP,
            }),
            KeyCode::Left | KeyCode::Char('h') => self.dispatch(Action::LabelClick {
                dimension,
                index: index.saturating_sub(1),
            }),
            KeyCode::Right | KeyCode::Char('l') => self.dispatch(Action::LabelClick {
                dimension,
                index: (index + 1).min(SLIDER_MAX as usize - 1),
            }),
            KeyCode::Char(c @ '1'..='5') => self.dispatch(Action::LabelClick {
                dimension,
                index: c as usize - '1' as usize,
            }),
            KeyCode::Enter | KeyCode::Char('n') => self.dispatch(Action::Next),
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab => self.form_focus = self.form_focus.next(),
            KeyCode::BackTab => self.form_focus = self.form_focus.prev(),
            KeyCode::Esc => self.dispatch(Action::Back),
            KeyCode::Enter => self.dispatch(Action::Generate),
            _ => match self.form_focus {
                FormFocus::Tags => match key.code {
                    KeyCode::Up | KeyCode::Char('k') => self.wizard.tags_mut().cursor_prev(),
                    KeyCode::Down | KeyCode::Char('j') => self.wizard.tags_mut().cursor_next(),
                    KeyCode::Char(' ') => {
                        if let Some(tag) = self.wizard.tags().cursor_tag() {
                            let tag = tag.to_string();
                            self.dispatch(Action::ToggleTag(tag));
                        }
                    }
                    KeyCode::Char('b') => self.dispatch(Action::Back),
                    _ => {}
                },
                FormFocus::Feedback => {
                    if let Some(edit) = text_edit(key) {
                        self.dispatch(Action::EditFeedback(edit));
                    }
                }
                FormFocus::CustomerName => {
                    if let Some(edit) = text_edit(key) {
                        self.dispatch(Action::EditCustomerName(edit));
                    }
                }
            },
        }
    }

    fn handle_review_key(&mut self, key: KeyEvent) {
        if self.wizard.editor().mode() == EditMode::Editing {
            let save = key.code == KeyCode::Esc
                || (key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('s'));
            if save {
                self.dispatch(Action::ToggleEdit);
            } else if key.code == KeyCode::Enter {
                self.dispatch(Action::EditReview(TextEdit::Insert('\n')));
            } else if let Some(edit) = text_edit(key) {
                self.dispatch(Action::EditReview(edit));
            }
            return;
        }

        match key.code {
            KeyCode::Char('e') => self.dispatch(Action::ToggleEdit),
            KeyCode::Char('c') | KeyCode::Enter => self.dispatch(Action::Commit),
            KeyCode::Esc | KeyCode::Char('b') => self.dispatch(Action::Back),
            _ => {}
        }
    }
}

/// Map a key to a text edit for free-text fields.
fn text_edit(key: KeyEvent) -> Option<TextEdit> {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return match key.code {
            KeyCode::Char('u') => Some(TextEdit::Clear),
            _ => None,
        };
    }
    match key.code {
        KeyCode::Char(c) => Some(TextEdit::Insert(c)),
        KeyCode::Backspace => Some(TextEdit::Backspace),
        _ => None,
    }
}
