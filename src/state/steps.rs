// Wizard step navigation.
// Holds the current step and derives the progress bar, label, and dots from it.

/// Number of steps in the wizard.
pub const TOTAL_STEPS: u8 = 3;

/// Visual state of one progress dot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DotState {
    /// Step already passed.
    Completed,
    /// The current step.
    Active,
    /// Step not reached yet.
    Pending,
}

/// Bounded step counter, always within 1..=TOTAL_STEPS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepController {
    current: u8,
}

impl Default for StepController {
    fn default() -> Self {
        Self { current: 1 }
    }
}

impl StepController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current step (1-based).
    pub fn current(&self) -> u8 {
        self.current
    }

    /// Move forward one step. Returns false at the last step.
    pub fn advance(&mut self) -> bool {
        if self.current < TOTAL_STEPS {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Move back one step. Returns false at the first step.
    pub fn retreat(&mut self) -> bool {
        if self.current > 1 {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    pub fn is_last(&self) -> bool {
        self.current == TOTAL_STEPS
    }

    /// Only the current step's content is shown.
    pub fn is_visible(&self, step: u8) -> bool {
        step == self.current
    }

    /// Progress bar fill: `current/total * 100`.
    pub fn progress_percent(&self) -> f64 {
        self.current as f64 / TOTAL_STEPS as f64 * 100.0
    }

    pub fn progress_label(&self) -> String {
        format!("Step {} of {}", self.current, TOTAL_STEPS)
    }

    /// One dot per step.
    pub fn dots(&self) -> Vec<DotState> {
        (1..=TOTAL_STEPS)
            .map(|step| {
                if step < self.current {
                    DotState::Completed
                } else if step == self.current {
                    DotState::Active
                } else {
                    DotState::Pending
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_bounds() {
        let mut steps = StepController::new();

        assert_eq!(steps.current(), 1);
        assert!(!steps.retreat());
        assert_eq!(steps.current(), 1);

        assert!(steps.advance());
        assert!(steps.advance());
        assert_eq!(steps.current(), 3);

        // Can't advance past the end
        assert!(!steps.advance());
        assert_eq!(steps.current(), 3);

        assert!(steps.retreat());
        assert_eq!(steps.current(), 2);
    }

    #[test]
    fn test_progress_percent() {
        let mut steps = StepController::new();
        for step in 1..=TOTAL_STEPS {
            assert_eq!(
                steps.progress_percent(),
                step as f64 / TOTAL_STEPS as f64 * 100.0
            );
            assert_eq!(steps.progress_label(), format!("Step {} of 3", step));
            steps.advance();
        }
    }

    #[test]
    fn test_dots() {
        let mut steps = StepController::new();
        assert_eq!(
            steps.dots(),
            vec![DotState::Active, DotState::Pending, DotState::Pending]
        );

        steps.advance();
        assert_eq!(
            steps.dots(),
            vec![DotState::Completed, DotState::Active, DotState::Pending]
        );

        steps.advance();
        assert_eq!(
            steps.dots(),
            vec![DotState::Completed, DotState::Completed, DotState::Active]
        );
    }

    #[test]
    fn test_only_current_step_visible() {
        let mut steps = StepController::new();
        steps.advance();
        let visible: Vec<u8> = (1..=TOTAL_STEPS).filter(|s| steps.is_visible(*s)).collect();
        assert_eq!(visible, vec![2]);
    }
}
