// Wizard state machine.
// Owns every piece of wizard state and maps actions to state changes plus effects.

use std::time::Duration;

use crate::business::Business;
use crate::clipboard::CopyOutcome;

use super::completion::ClipboardRedirector;
use super::editor::{EditMode, ReviewEditor};
use super::form::{FeedbackField, FormSnapshot, TextEdit, TextField};
use super::slider::{Dimension, RatingSliders};
use super::steps::StepController;
use super::submission::{FinalStepView, SubmissionOrchestrator, SubmissionPhase, SubmissionResult};
use super::tags::TagSelector;

/// Delay between a successful copy and opening the review target.
pub const DEFAULT_REDIRECT_DELAY: Duration = Duration::from_millis(1500);
/// Delay between a failed submission and navigation reappearing.
pub const DEFAULT_NAV_REVEAL_DELAY: Duration = Duration::from_millis(2000);

/// UX pacing delays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WizardTimings {
    pub redirect_delay: Duration,
    pub nav_reveal_delay: Duration,
}

impl Default for WizardTimings {
    fn default() -> Self {
        Self {
            redirect_delay: DEFAULT_REDIRECT_DELAY,
            nav_reveal_delay: DEFAULT_NAV_REVEAL_DELAY,
        }
    }
}

/// Everything that can happen to the wizard.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Slider dragged to a possibly fractional position.
    SliderInput { dimension: Dimension, value: f64 },
    /// Slider released at a position.
    SliderCommit { dimension: Dimension, value: f64 },
    LabelClick { dimension: Dimension, index: usize },
    ToggleTag(String),
    EditFeedback(TextEdit),
    EditCustomerName(TextEdit),
    Next,
    Back,
    Generate,
    GenerationFinished {
        generation: u64,
        result: SubmissionResult,
    },
    NavRevealDue { generation: u64 },
    ToggleEdit,
    EditReview(TextEdit),
    Commit,
    CopyFinished(CopyOutcome),
    RedirectDue { url: String },
    DismissNotice,
}

/// Side effects requested by a transition, executed outside the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Submit {
        generation: u64,
        snapshot: FormSnapshot,
    },
    ScheduleNavReveal {
        generation: u64,
        delay: Duration,
    },
    CopyToClipboard {
        text: String,
    },
    ScheduleRedirect {
        url: String,
        delay: Duration,
    },
    Navigate {
        url: String,
    },
}

/// The whole wizard, owned by a single controller.
#[derive(Debug, Clone)]
pub struct WizardState {
    business: Business,
    timings: WizardTimings,
    steps: StepController,
    sliders: RatingSliders,
    tags: TagSelector,
    feedback: FeedbackField,
    customer_name: TextField,
    submission: SubmissionOrchestrator,
    editor: ReviewEditor,
    completion: ClipboardRedirector,
}

impl WizardState {
    pub fn new(
        business: Business,
        tags: Vec<String>,
        feedback_budget: usize,
        timings: WizardTimings,
    ) -> Self {
        Self {
            business,
            timings,
            steps: StepController::new(),
            sliders: RatingSliders::default(),
            tags: TagSelector::new(tags),
            feedback: FeedbackField::new(feedback_budget),
            customer_name: TextField::default(),
            submission: SubmissionOrchestrator::default(),
            editor: ReviewEditor::default(),
            completion: ClipboardRedirector::default(),
        }
    }

    pub fn business(&self) -> &Business {
        &self.business
    }

    pub fn steps(&self) -> &StepController {
        &self.steps
    }

    pub fn sliders(&self) -> &RatingSliders {
        &self.sliders
    }

    pub fn tags(&self) -> &TagSelector {
        &self.tags
    }

    /// Tag cursor movement is presentation-only and bypasses dispatch.
    pub fn tags_mut(&mut self) -> &mut TagSelector {
        &mut self.tags
    }

    pub fn feedback(&self) -> &FeedbackField {
        &self.feedback
    }

    pub fn customer_name(&self) -> &TextField {
        &self.customer_name
    }

    pub fn submission(&self) -> &SubmissionOrchestrator {
        &self.submission
    }

    pub fn editor(&self) -> &ReviewEditor {
        &self.editor
    }

    pub fn completion(&self) -> &ClipboardRedirector {
        &self.completion
    }

    pub fn final_step(&self) -> FinalStepView {
        self.submission.view()
    }

    /// Form fields as they would be posted right now.
    pub fn snapshot(&self) -> FormSnapshot {
        let rating = |d: Dimension| self.sliders.get(d).value();
        FormSnapshot {
            business_name: self.business.name.clone(),
            business_address: self.business.address.clone(),
            google_url: self.business.review_url.clone(),
            food_rating: rating(Dimension::Food),
            service_rating: rating(Dimension::Service),
            atmosphere_rating: rating(Dimension::Atmosphere),
            recommend_rating: rating(Dimension::Recommend),
            tags: self.tags.field(),
            feedback: self.feedback.value().to_string(),
            customer_name: self.customer_name.value().trim().to_string(),
        }
    }

    /// Apply an action. Actions that make no sense in the current state are
    /// ignored rather than rejected.
    pub fn dispatch(&mut self, action: Action) -> Vec<Effect> {
        tracing::trace!(?action, step = self.steps.current(), "dispatch");
        let step = self.steps.current();

        match action {
            Action::SliderInput { dimension, value } if step == 1 => {
                self.sliders.get_mut(dimension).raw_input(value);
            }
            Action::SliderCommit { dimension, value } if step == 1 => {
                self.sliders.get_mut(dimension).commit(value);
            }
            Action::LabelClick { dimension, index } if step == 1 => {
                self.sliders.get_mut(dimension).click_label(index);
            }
            Action::ToggleTag(tag) if step == 2 => {
                let selected = self.tags.toggle(&tag);
                tracing::debug!(tag = %tag, selected, field = %self.tags.field(), "tag toggled");
            }
            Action::EditFeedback(edit) if step == 2 => self.feedback.apply(edit),
            Action::EditCustomerName(edit) if step == 2 => self.customer_name.apply(edit),

            // Step 3 is only reachable through Generate
            Action::Next if step == 1 => {
                self.sliders.settle_all();
                self.steps.advance();
            }
            Action::Back if step == 2 => {
                self.steps.retreat();
            }
            Action::Back if step == 3 && self.submission.nav_visible() => {
                if self.editor.mode() == EditMode::Editing {
                    self.editor.toggle();
                }
                self.steps.retreat();
            }

            Action::Generate if step == 2 => return self.generate(),
            Action::GenerationFinished { generation, result } => {
                return self.generation_finished(generation, result);
            }
            Action::NavRevealDue { generation } => {
                if self.submission.reveal_nav(generation) {
                    tracing::debug!(generation, "navigation revealed after failure");
                }
            }

            Action::ToggleEdit if self.review_active() => {
                let mode = self.editor.toggle();
                tracing::debug!(?mode, "review edit toggled");
            }
            Action::EditReview(edit) if self.review_active() => {
                self.editor.edit(edit);
            }
            Action::Commit if self.review_active() => {
                return self.completion.commit(self.editor.content()).into_iter().collect();
            }
            Action::CopyFinished(outcome) => {
                tracing::info!(?outcome, "clipboard copy finished");
                return self
                    .completion
                    .copy_finished(outcome, self.timings.redirect_delay)
                    .into_iter()
                    .collect();
            }
            Action::RedirectDue { url } => return vec![Effect::Navigate { url }],
            Action::DismissNotice => {
                return self.completion.dismiss_notice().into_iter().collect();
            }

            other => tracing::trace!(?other, step, "action ignored"),
        }

        Vec::new()
    }

    fn review_active(&self) -> bool {
        self.steps.is_last()
            && matches!(self.submission.phase(), SubmissionPhase::Succeeded { .. })
    }

    fn generate(&mut self) -> Vec<Effect> {
        let Some(generation) = self.submission.begin() else {
            tracing::warn!("generate ignored, a submission is already in flight");
            return Vec::new();
        };

        // Navigate optimistically before the result is known
        self.steps.advance();
        self.editor.load(String::new());
        self.completion.reset();

        let snapshot = self.snapshot();
        tracing::info!(generation, business = %snapshot.business_name, "submitting review inputs");
        vec![Effect::Submit {
            generation,
            snapshot,
        }]
    }

    fn generation_finished(&mut self, generation: u64, result: SubmissionResult) -> Vec<Effect> {
        let Some(result) = self.submission.finish(generation, result) else {
            tracing::debug!(generation, "dropping stale generation result");
            return Vec::new();
        };

        match result {
            SubmissionResult::Success {
                review_text,
                review_target_url,
                generation_method,
            } => {
                tracing::info!(generation, method = %generation_method, "review generated");
                let target = if review_target_url.trim().is_empty() {
                    self.business.review_url.clone()
                } else {
                    review_target_url
                };
                self.editor.load(review_text);
                self.completion.load(target);
                Vec::new()
            }
            SubmissionResult::Failure { message } => {
                tracing::warn!(generation, error = %message, "review generation failed");
                vec![Effect::ScheduleNavReveal {
                    generation,
                    delay: self.timings.nav_reveal_delay,
                }]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn business() -> Business {
        Business {
            name: "Cafe Nero".to_string(),
            address: "1 High St".to_string(),
            place_id: "ChIJabc".to_string(),
            review_url: "https://search.google.com/local/writereview?placeid=ChIJabc".to_string(),
        }
    }

    fn wizard() -> WizardState {
        WizardState::new(
            business(),
            vec!["Clean".to_string(), "Cozy".to_string()],
            280,
            WizardTimings::default(),
        )
    }

    fn success(text: &str) -> SubmissionResult {
        SubmissionResult::Success {
            review_text: text.to_string(),
            review_target_url: "https://example/review".to_string(),
            generation_method: "template".to_string(),
        }
    }

    /// Drive the wizard to the loading state and return the generation.
    fn submit(wizard: &mut WizardState) -> u64 {
        wizard.dispatch(Action::Next);
        match wizard.dispatch(Action::Generate).as_slice() {
            [Effect::Submit { generation, .. }] => *generation,
            other => panic!("expected Submit, got {:?}", other),
        }
    }

    #[test]
    fn test_user_cannot_skip_to_last_step() {
        let mut wizard = wizard();
        wizard.dispatch(Action::Next);
        assert_eq!(wizard.steps().current(), 2);

        assert!(wizard.dispatch(Action::Next).is_empty());
        assert_eq!(wizard.steps().current(), 2);

        wizard.dispatch(Action::Back);
        wizard.dispatch(Action::Back);
        assert_eq!(wizard.steps().current(), 1);
    }

    #[test]
    fn test_slider_actions_only_on_first_step() {
        let mut wizard = wizard();
        wizard.dispatch(Action::LabelClick {
            dimension: Dimension::Food,
            index: 4,
        });
        assert_eq!(wizard.sliders().get(Dimension::Food).value(), 5);

        wizard.dispatch(Action::Next);
        wizard.dispatch(Action::LabelClick {
            dimension: Dimension::Food,
            index: 0,
        });
        assert_eq!(wizard.sliders().get(Dimension::Food).value(), 5);
    }

    #[test]
    fn test_next_settles_dragged_slider() {
        let mut wizard = wizard();
        wizard.dispatch(Action::SliderInput {
            dimension: Dimension::Service,
            value: 1.7,
        });
        assert_eq!(wizard.sliders().get(Dimension::Service).value(), 1);

        wizard.dispatch(Action::Next);
        assert_eq!(wizard.sliders().get(Dimension::Service).value(), 2);
    }

    #[test]
    fn test_generate_advances_and_snapshots() {
        let mut wizard = wizard();
        wizard.dispatch(Action::SliderCommit {
            dimension: Dimension::Atmosphere,
            value: 4.2,
        });
        wizard.dispatch(Action::Next);
        wizard.dispatch(Action::ToggleTag("Cozy".to_string()));
        wizard.dispatch(Action::ToggleTag("Clean".to_string()));
        for c in "Lovely".chars() {
            wizard.dispatch(Action::EditFeedback(TextEdit::Insert(c)));
        }

        let effects = wizard.dispatch(Action::Generate);
        assert_eq!(wizard.steps().current(), 3);
        assert!(wizard.final_step().loading_visible);

        match effects.as_slice() {
            [Effect::Submit { generation, snapshot }] => {
                assert_eq!(*generation, 1);
                assert_eq!(snapshot.atmosphere_rating, 4);
                assert_eq!(snapshot.food_rating, 3);
                assert_eq!(snapshot.tags, "Cozy, Clean");
                assert_eq!(snapshot.feedback, "Lovely");
                assert_eq!(snapshot.business_name, "Cafe Nero");
            }
            other => panic!("unexpected effects {:?}", other),
        }
    }

    #[test]
    fn test_success_populates_review() {
        let mut wizard = wizard();
        let generation = submit(&mut wizard);

        let effects = wizard.dispatch(Action::GenerationFinished {
            generation,
            result: success("Great service!"),
        });
        assert!(effects.is_empty());

        let view = wizard.final_step();
        assert!(view.review_visible);
        assert!(view.nav_visible);
        assert!(view.status_line.unwrap().contains("template"));
        assert_eq!(wizard.editor().content(), "Great service!");
        assert_eq!(wizard.completion().target(), Some("https://example/review"));
    }

    #[test]
    fn test_empty_target_falls_back_to_business_url() {
        let mut wizard = wizard();
        let generation = submit(&mut wizard);
        wizard.dispatch(Action::GenerationFinished {
            generation,
            result: SubmissionResult::Success {
                review_text: "Nice".to_string(),
                review_target_url: String::new(),
                generation_method: "ai".to_string(),
            },
        });
        assert_eq!(
            wizard.completion().target(),
            Some(business().review_url.as_str())
        );
    }

    #[test]
    fn test_failure_schedules_nav_reveal() {
        let mut wizard = wizard();
        let generation = submit(&mut wizard);

        let effects = wizard.dispatch(Action::GenerationFinished {
            generation,
            result: SubmissionResult::failure("quota exceeded"),
        });
        assert_eq!(
            effects,
            vec![Effect::ScheduleNavReveal {
                generation,
                delay: DEFAULT_NAV_REVEAL_DELAY,
            }]
        );
        assert!(wizard.final_step().error.is_some());

        // Navigation stays hidden until the timer fires
        wizard.dispatch(Action::Back);
        assert_eq!(wizard.steps().current(), 3);

        wizard.dispatch(Action::NavRevealDue { generation });
        assert!(wizard.final_step().nav_visible);

        wizard.dispatch(Action::Back);
        assert_eq!(wizard.steps().current(), 2);
    }

    #[test]
    fn test_retry_after_failure_drops_stale_result() {
        let mut wizard = wizard();
        let first = submit(&mut wizard);
        wizard.dispatch(Action::GenerationFinished {
            generation: first,
            result: SubmissionResult::failure("timeout"),
        });
        wizard.dispatch(Action::NavRevealDue { generation: first });
        wizard.dispatch(Action::Back);

        let second = match wizard.dispatch(Action::Generate).as_slice() {
            [Effect::Submit { generation, .. }] => *generation,
            other => panic!("expected Submit, got {:?}", other),
        };
        assert_eq!(second, first + 1);

        // A late timer from the first attempt must not reveal navigation
        wizard.dispatch(Action::NavRevealDue { generation: first });
        assert!(!wizard.final_step().nav_visible);
        assert!(wizard.final_step().loading_visible);
    }

    #[test]
    fn test_edit_toggle_then_commit_copies_edited_text() {
        let mut wizard = wizard();
        let generation = submit(&mut wizard);
        wizard.dispatch(Action::GenerationFinished {
            generation,
            result: success("Great service!"),
        });

        wizard.dispatch(Action::ToggleEdit);
        wizard.dispatch(Action::EditReview(TextEdit::Clear));
        for c in "Superb".chars() {
            wizard.dispatch(Action::EditReview(TextEdit::Insert(c)));
        }
        wizard.dispatch(Action::ToggleEdit);
        assert_eq!(wizard.editor().content(), "Superb");

        assert_eq!(
            wizard.dispatch(Action::Commit),
            vec![Effect::CopyToClipboard {
                text: "Superb".to_string()
            }]
        );
    }

    #[test]
    fn test_redirect_due_navigates() {
        let mut wizard = wizard();
        assert_eq!(
            wizard.dispatch(Action::RedirectDue {
                url: "https://example/review".to_string()
            }),
            vec![Effect::Navigate {
                url: "https://example/review".to_string()
            }]
        );
    }

    #[test]
    fn test_review_actions_ignored_before_success() {
        let mut wizard = wizard();
        submit(&mut wizard);

        assert!(wizard.dispatch(Action::Commit).is_empty());
        wizard.dispatch(Action::ToggleEdit);
        assert_eq!(wizard.editor().mode(), EditMode::Viewing);
    }
}
