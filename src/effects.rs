// Effect execution.
// Runs the side effects requested by wizard transitions and feeds results back as actions.

use tokio::sync::mpsc::UnboundedSender;
use tokio::time::{Duration, sleep};

use crate::clipboard::{ClipboardChain, Release};
use crate::generation::GenerationClient;
use crate::navigator::Navigator;
use crate::state::{Action, Effect};

/// What the event loop should do after an effect ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// The wizard left for the review target.
    Exit { url: String },
}

/// Executes effects. Async work is spawned on the tokio runtime and reports
/// back through `tx`; nothing here touches wizard state directly.
pub struct EffectRunner {
    tx: UnboundedSender<Action>,
    client: GenerationClient,
    clipboard: ClipboardChain,
    navigator: Box<dyn Navigator>,
}

impl EffectRunner {
    pub fn new(
        tx: UnboundedSender<Action>,
        client: GenerationClient,
        clipboard: ClipboardChain,
        navigator: Box<dyn Navigator>,
    ) -> Self {
        Self {
            tx,
            client,
            clipboard,
            navigator,
        }
    }

    pub fn run(&mut self, effect: Effect) -> Flow {
        match effect {
            Effect::Submit {
                generation,
                snapshot,
            } => {
                let client = self.client.clone();
                let tx = self.tx.clone();
                tokio::spawn(async move {
                    let result = client.generate(&snapshot).await;
                    let _ = tx.send(Action::GenerationFinished { generation, result });
                });
            }
            Effect::ScheduleNavReveal { generation, delay } => {
                self.schedule(delay, Action::NavRevealDue { generation });
            }
            Effect::CopyToClipboard { text } => {
                let outcome = self.clipboard.copy(&text);
                let _ = self.tx.send(Action::CopyFinished(outcome));
            }
            Effect::ScheduleRedirect { url, delay } => {
                self.schedule(delay, Action::RedirectDue { url });
            }
            Effect::Navigate { url } => {
                if let Err(e) = self.navigator.navigate(&url) {
                    tracing::error!(error = %e, "failed to open review target");
                }
                return Flow::Exit { url };
            }
        }
        Flow::Continue
    }

    /// Hand off clipboard contents that would vanish when the process exits.
    pub fn release_clipboard(&mut self, grace: Duration) -> Release {
        self.clipboard.release(grace)
    }

    /// Fire-once timer; there is no way to cancel it.
    fn schedule(&self, delay: Duration, action: Action) {
        let tx = self.tx.clone();
        tokio::spawn(async move {
            sleep(delay).await;
            let _ = tx.send(action);
        });
    }
}
