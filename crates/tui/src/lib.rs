//! # Mnemo restore wizard TUI
//!
//! A two-step terminal wizard for entering a wallet recovery phrase: pick the
//! phrase length, then fill each word individually or paste the whole phrase
//! at once.
//!
//! ## Architecture
//!
//! The wizard follows a component-based architecture: each screen is a
//! component that handles its own events and rendering, while all wizard
//! semantics live in an explicit state object (`WizardState`) with pure
//! transition methods. Deferred side actions (post-commit focus shifts, the
//! paste-feedback auto-clear) are expressed as `Effect`s and executed by the
//! runtime through a separate scheduler, so both remain testable without
//! real timers or a terminal.

mod app;
mod ui;

use anyhow::Result;
use mnemo_types::FlowOutcome;

/// Host-supplied configuration for one wizard run.
#[derive(Debug, Clone)]
pub struct RestoreOptions {
    /// Phrase lengths offered on the selection screen, in display order.
    pub word_counts: Vec<usize>,
}

impl Default for RestoreOptions {
    fn default() -> Self {
        Self {
            word_counts: mnemo_types::default_word_counts(),
        }
    }
}

/// Runs the wizard to completion.
///
/// Owns the full terminal lifecycle: raw mode and alternate screen are
/// entered on start and restored before returning, including on error. The
/// returned [`FlowOutcome`] is the only data that crosses the boundary; all
/// wizard state is dropped when this returns.
pub async fn run(options: RestoreOptions) -> Result<FlowOutcome> {
    ui::runtime::run_app(options).await
}
