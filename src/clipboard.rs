// Clipboard copy with layered fallback.
// Tries the native clipboard first, then platform copy utilities, then gives up.

use std::io::Write;
use std::process::{Command, Stdio};
use std::time::Duration;

use crate::error::{ReviewError, Result};

/// Result of running the strategy chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Text is on the clipboard. `primary` is set when the first strategy worked.
    Copied {
        strategy: &'static str,
        primary: bool,
    },
    /// Every strategy failed; the user has to copy by hand.
    ManualCopyRequired,
}

/// What became of clipboard contents served by this process at exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Release {
    /// Nothing to pass on; the contents already outlive the process.
    Nothing,
    /// A system copy utility took over serving the text.
    HandedOff,
    /// The text was served until another owner took over or the grace period ran out.
    Held,
}

/// One way of getting text onto the system clipboard.
pub trait CopyStrategy {
    fn name(&self) -> &'static str;
    fn copy(&mut self, text: &str) -> Result<()>;

    /// Called once before the process exits. Strategies whose contents die
    /// with the process pass them on here.
    fn release(&mut self, _grace: Duration) -> Release {
        Release::Nothing
    }
}

/// Whether clipboard contents set through arboard vanish when this process exits (X11, Wayland).
const SERVED_BY_PROCESS: bool = cfg!(all(
    unix,
    not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
));

/// The system clipboard through arboard.
///
/// On X11 and Wayland the contents are served by the owning process, so the
/// handle is kept alive after a copy and the text is handed to a forking copy
/// utility on release.
pub struct NativeClipboard {
    clipboard: Option<arboard::Clipboard>,
    /// Text this process is still serving.
    owned: Option<String>,
    handoff: CopyCommand,
}

impl Default for NativeClipboard {
    fn default() -> Self {
        Self {
            clipboard: None,
            owned: None,
            handoff: CopyCommand::persistent(),
        }
    }
}

impl NativeClipboard {
    #[cfg(all(
        unix,
        not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
    ))]
    fn hold(&mut self, text: &str, grace: Duration) -> Release {
        use arboard::SetExtLinux;

        let Some(clipboard) = self.clipboard.as_mut() else {
            return Release::Nothing;
        };
        tracing::info!(?grace, "serving clipboard until another owner takes over");
        let deadline = std::time::Instant::now() + grace;
        match clipboard.set().wait_until(deadline).text(text.to_string()) {
            Ok(()) => Release::Held,
            Err(e) => {
                tracing::warn!(error = %e, "failed to hold clipboard contents");
                Release::Nothing
            }
        }
    }

    #[cfg(not(all(
        unix,
        not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
    )))]
    fn hold(&mut self, _text: &str, _grace: Duration) -> Release {
        Release::Nothing
    }
}

impl CopyStrategy for NativeClipboard {
    fn name(&self) -> &'static str {
        "native"
    }

    fn copy(&mut self, text: &str) -> Result<()> {
        if self.clipboard.is_none() {
            let clipboard =
                arboard::Clipboard::new().map_err(|e| ReviewError::Clipboard(e.to_string()))?;
            self.clipboard = Some(clipboard);
        }

        match self.clipboard.as_mut() {
            Some(clipboard) => clipboard
                .set_text(text.to_string())
                .map_err(|e| ReviewError::Clipboard(e.to_string()))?,
            None => return Err(ReviewError::Clipboard("no clipboard handle".to_string())),
        }

        if SERVED_BY_PROCESS {
            self.owned = Some(text.to_string());
        }
        Ok(())
    }

    fn release(&mut self, grace: Duration) -> Release {
        let Some(text) = self.owned.take() else {
            return Release::Nothing;
        };

        match self.handoff.copy(&text) {
            Ok(()) => {
                tracing::info!("clipboard contents handed to system utility");
                Release::HandedOff
            }
            Err(e) => {
                tracing::debug!(error = %e, "clipboard handoff failed");
                self.hold(&text, grace)
            }
        }
    }
}

/// Pipes text into the first platform copy utility that accepts it.
pub struct CopyCommand {
    candidates: Vec<(&'static str, Vec<&'static str>)>,
}

impl Default for CopyCommand {
    fn default() -> Self {
        Self {
            candidates: vec![
                ("pbcopy", vec![]),
                ("wl-copy", vec![]),
                ("xclip", vec!["-selection", "clipboard"]),
                ("xsel", vec!["--clipboard", "--input"]),
                ("clip", vec![]),
            ],
        }
    }
}

impl CopyCommand {
    pub fn with_candidates(candidates: Vec<(&'static str, Vec<&'static str>)>) -> Self {
        Self { candidates }
    }

    /// Utilities that fork and keep serving the selection after we exit.
    pub fn persistent() -> Self {
        Self::with_candidates(vec![
            ("wl-copy", vec![]),
            ("xclip", vec!["-selection", "clipboard"]),
            ("xsel", vec!["--clipboard", "--input"]),
        ])
    }

    fn run(program: &str, args: &[&str], text: &str) -> Result<()> {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(text.as_bytes()),
            None => Ok(()),
        };

        // Reap the child even when it stopped reading early
        let status = child.wait()?;
        written?;
        if status.success() {
            Ok(())
        } else {
            Err(ReviewError::Clipboard(format!("{} exited with {}", program, status)))
        }
    }
}

impl CopyStrategy for CopyCommand {
    fn name(&self) -> &'static str {
        "copy-command"
    }

    fn copy(&mut self, text: &str) -> Result<()> {
        let mut last_error = ReviewError::Clipboard("no copy utility configured".to_string());
        for (program, args) in &self.candidates {
            match Self::run(program, args, text) {
                Ok(()) => {
                    tracing::debug!(program, "copied with system utility");
                    return Ok(());
                }
                Err(e) => {
                    tracing::debug!(program, error = %e, "copy utility failed");
                    last_error = e;
                }
            }
        }
        Err(last_error)
    }
}

/// Ordered list of strategies tried until one succeeds.
pub struct ClipboardChain {
    strategies: Vec<Box<dyn CopyStrategy>>,
}

impl Default for ClipboardChain {
    fn default() -> Self {
        Self::new(vec![
            Box::new(NativeClipboard::default()),
            Box::new(CopyCommand::default()),
        ])
    }
}

impl ClipboardChain {
    pub fn new(strategies: Vec<Box<dyn CopyStrategy>>) -> Self {
        Self { strategies }
    }

    /// Copy `text`, never failing: the worst case is `ManualCopyRequired`.
    pub fn copy(&mut self, text: &str) -> CopyOutcome {
        for (index, strategy) in self.strategies.iter_mut().enumerate() {
            match strategy.copy(text) {
                Ok(()) => {
                    return CopyOutcome::Copied {
                        strategy: strategy.name(),
                        primary: index == 0,
                    };
                }
                Err(e) => {
                    tracing::warn!(strategy = strategy.name(), error = %e, "clipboard strategy failed");
                }
            }
        }
        CopyOutcome::ManualCopyRequired
    }

    /// Pass on any contents that would vanish with this process. Blocks for
    /// at most `grace`.
    pub fn release(&mut self, grace: Duration) -> Release {
        self.strategies
            .iter_mut()
            .map(|strategy| strategy.release(grace))
            .fold(Release::Nothing, |acc, release| match release {
                Release::Nothing => acc,
                other => other,
            })
    }
}
