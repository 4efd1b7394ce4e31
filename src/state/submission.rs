// Submission lifecycle state.
// Tracks loading, success, and failure of the generation request for the final step.

/// Outcome of one generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    Success {
        review_text: String,
        review_target_url: String,
        generation_method: String,
    },
    Failure {
        message: String,
    },
}

impl SubmissionResult {
    pub fn failure(message: impl Into<String>) -> Self {
        SubmissionResult::Failure {
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionResult::Success { .. })
    }
}

/// Where the current submission stands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Loading,
    Succeeded {
        generation_method: String,
    },
    Failed {
        message: String,
    },
}

/// What the final step shows, derived from the phase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FinalStepView {
    pub loading_visible: bool,
    pub error: Option<String>,
    pub review_visible: bool,
    pub actions_visible: bool,
    pub nav_visible: bool,
    pub status_line: Option<String>,
}

/// Drives one submission at a time.
///
/// Every submission gets a fresh generation number; results and timers
/// carrying an older number are stale and get dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionOrchestrator {
    phase: SubmissionPhase,
    generation: u64,
    nav_visible: bool,
}

impl SubmissionOrchestrator {
    pub fn phase(&self) -> &SubmissionPhase {
        &self.phase
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self.phase, SubmissionPhase::Loading)
    }

    /// Enter the loading state. Returns the new generation, or None if a
    /// request is already in flight.
    pub fn begin(&mut self) -> Option<u64> {
        if self.is_in_flight() {
            return None;
        }
        self.generation += 1;
        self.phase = SubmissionPhase::Loading;
        self.nav_visible = false;
        Some(self.generation)
    }

    /// Record a result. Returns it back when it belongs to the in-flight
    /// submission, None when it is stale.
    pub fn finish(
        &mut self,
        generation: u64,
        result: SubmissionResult,
    ) -> Option<SubmissionResult> {
        if generation != self.generation || !self.is_in_flight() {
            return None;
        }

        match &result {
            SubmissionResult::Success {
                generation_method, ..
            } => {
                self.phase = SubmissionPhase::Succeeded {
                    generation_method: generation_method.clone(),
                };
                self.nav_visible = true;
            }
            SubmissionResult::Failure { message } => {
                self.phase = SubmissionPhase::Failed {
                    message: message.clone(),
                };
                self.nav_visible = false;
            }
        }
        Some(result)
    }

    /// Re-expose navigation after a failure. Returns whether anything changed.
    pub fn reveal_nav(&mut self, generation: u64) -> bool {
        if generation != self.generation
            || !matches!(self.phase, SubmissionPhase::Failed { .. })
            || self.nav_visible
        {
            return false;
        }
        self.nav_visible = true;
        true
    }

    pub fn nav_visible(&self) -> bool {
        self.nav_visible
    }

    pub fn view(&self) -> FinalStepView {
        match &self.phase {
            SubmissionPhase::Idle => FinalStepView::default(),
            SubmissionPhase::Loading => FinalStepView {
                loading_visible: true,
                ..FinalStepView::default()
            },
            SubmissionPhase::Succeeded { generation_method } => FinalStepView {
                review_visible: true,
                actions_visible: true,
                nav_visible: self.nav_visible,
                status_line: Some(format!("Generated using {}", generation_method)),
                ..FinalStepView::default()
            },
            SubmissionPhase::Failed { message } => FinalStepView {
                error: Some(format!(
                    "Error generating review: {}. Please try again.",
                    message.trim_end_matches('.')
                )),
                nav_visible: self.nav_visible,
                ..FinalStepView::default()
            },
        }
    }
}
