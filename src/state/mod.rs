// Wizard state module.
// Step navigation, rating sliders, tags, submission lifecycle, and the review completion flow.

pub mod completion;
pub mod editor;
pub mod form;
pub mod slider;
pub mod steps;
pub mod submission;
pub mod tags;
pub mod wizard;

pub use completion::{ClipboardRedirector, CommitButton, MANUAL_COPY_NOTICE};
pub use editor::{EditMode, ReviewEditor};
pub use form::{FeedbackField, FormSnapshot, TextEdit, TextField};
pub use slider::{Dimension, RatingSliders, SLIDER_MAX, SLIDER_MIN, Slider};
pub use steps::{DotState, StepController, TOTAL_STEPS};
pub use submission::{FinalStepView, SubmissionOrchestrator, SubmissionPhase, SubmissionResult};
pub use tags::TagSelector;
pub use wizard::{
    Action, DEFAULT_NAV_REVEAL_DELAY, DEFAULT_REDIRECT_DELAY, Effect, WizardState, WizardTimings,
};
