// Copy-then-redirect completion state.
// Tracks the commit control, the manual-copy notice, and the redirect target.

use std::time::Duration;

use crate::clipboard::CopyOutcome;

use super::wizard::Effect;

/// Shown when no clipboard strategy worked.
pub const MANUAL_COPY_NOTICE: &str =
    "Please manually copy the review above, then press Enter to go to the review page.";

/// Visual state of the commit control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CommitButton {
    #[default]
    Ready,
    /// A copy attempt is running.
    Copying,
    CopiedRedirecting {
        disabled: bool,
    },
}

impl CommitButton {
    pub fn label(&self) -> &'static str {
        match self {
            CommitButton::Ready => "Copy & Post Review",
            CommitButton::Copying => "Copying...",
            CommitButton::CopiedRedirecting { .. } => "Copied! Redirecting...",
        }
    }

    pub fn is_disabled(&self) -> bool {
        matches!(
            self,
            CommitButton::Copying | CommitButton::CopiedRedirecting { disabled: true }
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClipboardRedirector {
    target: Option<String>,
    button: CommitButton,
    notice: Option<&'static str>,
}

impl ClipboardRedirector {
    /// Arm the redirector with a fresh review target.
    pub fn load(&mut self, target: impl Into<String>) {
        self.target = Some(target.into());
        self.button = CommitButton::Ready;
        self.notice = None;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub fn button(&self) -> CommitButton {
        self.button
    }

    /// Blocking notice currently shown, if any.
    pub fn notice(&self) -> Option<&'static str> {
        self.notice
    }

    /// Start copying `text`. No-op without a target, while disabled, or
    /// while the notice is up.
    pub fn commit(&mut self, text: &str) -> Option<Effect> {
        if self.target.is_none() || self.button.is_disabled() || self.notice.is_some() {
            return None;
        }
        self.button = CommitButton::Copying;
        Some(Effect::CopyToClipboard {
            text: text.to_string(),
        })
    }

    /// Apply the result of the clipboard strategy chain.
    pub fn copy_finished(&mut self, outcome: CopyOutcome, delay: Duration) -> Option<Effect> {
        let url = self.target.clone()?;

        match outcome {
            CopyOutcome::Copied { primary, .. } => {
                // Only the native path locks the control
                self.button = CommitButton::CopiedRedirecting { disabled: primary };
                Some(Effect::ScheduleRedirect { url, delay })
            }
            CopyOutcome::ManualCopyRequired => {
                self.button = CommitButton::Ready;
                self.notice = Some(MANUAL_COPY_NOTICE);
                None
            }
        }
    }

    /// Closing the manual-copy notice navigates straight away.
    pub fn dismiss_notice(&mut self) -> Option<Effect> {
        self.notice.take()?;
        self.target
            .clone()
            .map(|url| Effect::Navigate { url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(1500);

    fn armed() -> ClipboardRedirector {
        let mut redirector = ClipboardRedirector::default();
        redirector.load("https://example/review");
        redirector
    }

    #[test]
    fn test_commit_without_target_is_noop() {
        let mut redirector = ClipboardRedirector::default();
        assert!(redirector.commit("text").is_none());
    }

    #[test]
    fn test_primary_copy_disables_and_schedules() {
        let mut redirector = armed();
        assert_eq!(
            redirector.commit("Great service!"),
            Some(Effect::CopyToClipboard {
                text: "Great service!".to_string()
            })
        );
        assert!(redirector.commit("again").is_none());

        let effect = redirector.copy_finished(
            CopyOutcome::Copied {
                strategy: "native",
                primary: true,
            },
            DELAY,
        );
        assert_eq!(
            effect,
            Some(Effect::ScheduleRedirect {
                url: "https://example/review".to_string(),
                delay: DELAY,
            })
        );
        assert_eq!(
            redirector.button(),
            CommitButton::CopiedRedirecting { disabled: true }
        );
        assert!(redirector.commit("again").is_none());
    }

    #[test]
    fn test_fallback_copy_leaves_control_enabled() {
        let mut redirector = armed();
        redirector.commit("text");
        redirector.copy_finished(
            CopyOutcome::Copied {
                strategy: "xclip",
                primary: false,
            },
            DELAY,
        );

        assert_eq!(redirector.button().label(), "Copied! Redirecting...");
        assert!(!redirector.button().is_disabled());
        assert!(redirector.commit("text").is_some());
    }

    #[test]
    fn test_manual_copy_notice_then_navigate() {
        let mut redirector = armed();
        redirector.commit("text");
        assert!(redirector
            .copy_finished(CopyOutcome::ManualCopyRequired, DELAY)
            .is_none());
        assert_eq!(redirector.notice(), Some(MANUAL_COPY_NOTICE));

        assert_eq!(
            redirector.dismiss_notice(),
            Some(Effect::Navigate {
                url: "https://example/review".to_string()
            })
        );
        assert!(redirector.notice().is_none());
        assert!(redirector.dismiss_notice().is_none());
    }
}
