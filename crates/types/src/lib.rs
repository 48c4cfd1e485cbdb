//! Shared plain types for the mnemo restore wizard.
//!
//! Everything here is UI-framework agnostic: the wizard step machine, the
//! word-count option metadata shown on the selection screen, the `Msg`/
//! `Effect` vocabulary exchanged between components and the runtime, and the
//! outcome handed back to the host process.

use serde::Serialize;

/// Which screen of the wizard is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Step {
    /// Phrase-length selection screen.
    #[default]
    TypeSelect,
    /// Per-word entry grid.
    WordEntry,
}

/// Routable views; one per wizard step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    TypeSelect,
    WordEntry,
}

/// A selectable phrase length plus its descriptive label.
///
/// The label mapping is presentation metadata only; any count outside the
/// well-known set gets a generic description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCountOption {
    pub count: usize,
    pub label: &'static str,
}

impl WordCountOption {
    pub fn for_count(count: usize) -> Self {
        let label = match count {
            24 => "Typically used by Daedalus or Eternl wallets",
            15 => "Common Yoroi wallet phrase",
            12 => "Standard 12-word wallet phrase",
            _ => "Recovery phrase of this length",
        };
        Self { count, label }
    }

    /// Card title, e.g. "24-word phrase".
    pub fn title(&self) -> String {
        format!("{}-word phrase", self.count)
    }
}

/// The word counts offered when the host provides none.
pub fn default_word_counts() -> Vec<usize> {
    vec![24, 15, 12]
}

/// Messages that can be sent to update wizard state.
#[derive(Debug, Clone)]
pub enum Msg {
    /// Terminal resized
    Resize(u16, u16),
    /// A full clipboard payload arrived (bracketed paste or Ctrl+V)
    PasteCaptured(String),
    /// The paste-feedback display window elapsed
    PasteNoticeExpired,
}

/// Side effects reported by state transitions for the runtime to execute.
///
/// Transitions never perform deferred work themselves; they describe it here
/// and the runtime maps it onto the scheduler or the focus engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Change the active view
    SwitchTo(Route),
    /// Move focus to the first word slot immediately (confirm-while-incomplete nudge)
    FocusFirstSlot,
    /// Move focus to the first word slot shortly after the next render
    ScheduleFocusFirstSlot,
    /// Start the auto-clear timer for the current paste notice
    SchedulePasteNoticeClear,
    /// Read the system clipboard and feed it through the bulk-paste path
    ClipboardPasteRequested,
    /// The user confirmed a fully populated phrase
    ConfirmPhrase(Vec<String>),
    /// The user abandoned the flow
    CancelRestore,
}

/// Terminal state of one wizard run, handed back to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum FlowOutcome {
    /// Ordered, fully populated word list; length equals the selected count.
    Confirmed { words: Vec<String> },
    Cancelled,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_counts_get_wallet_labels() {
        assert_eq!(
            WordCountOption::for_count(24).label,
            "Typically used by Daedalus or Eternl wallets"
        );
        assert_eq!(WordCountOption::for_count(15).label, "Common Yoroi wallet phrase");
        assert_eq!(
            WordCountOption::for_count(12).label,
            "Standard 12-word wallet phrase"
        );
    }

    #[test]
    fn unknown_count_gets_generic_label_and_title() {
        let option = WordCountOption::for_count(18);
        assert_eq!(option.label, "Recovery phrase of this length");
        assert_eq!(option.title(), "18-word phrase");
    }

    #[test]
    fn outcome_serializes_with_tag_and_words() {
        let outcome = FlowOutcome::Confirmed {
            words: vec!["abandon".into(), "ability".into()],
        };
        let value = serde_json::to_value(&outcome).expect("serialize outcome");
        assert_eq!(value["outcome"], "confirmed");
        assert_eq!(value["words"][1], "ability");

        let cancelled = serde_json::to_value(FlowOutcome::Cancelled).expect("serialize cancelled");
        assert_eq!(cancelled["outcome"], "cancelled");
    }
}
