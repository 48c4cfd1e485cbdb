//! Wizard state: the step controller and the word-slot store.
//!
//! All transitions are pure methods that mutate local state and report side
//! work as `Effect`s; nothing here touches timers, focus, or the terminal.
//! The runtime executes the effects, and the deferred ones come back through
//! `Msg`s once their window elapses.

use mnemo_types::{Effect, Route, Step, WordCountOption};
use mnemo_util::{normalize_word, tokenize_phrase};
use rat_focus::{FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::Rect;

/// Fixed number of display columns for the word grid.
pub const DISPLAY_COLUMNS: usize = 3;

/// Focus targets for the phrase-length selection screen.
#[derive(Debug)]
pub struct TypeSelectState {
    container_focus: FocusFlag,
    /// One flag per selectable length card, in display order.
    pub f_options: Vec<FocusFlag>,
    pub f_cancel: FocusFlag,
    pub f_next: FocusFlag,
}

impl TypeSelectState {
    fn new(option_count: usize) -> Self {
        Self {
            container_focus: FocusFlag::new().with_name("restore.type"),
            f_options: (0..option_count)
                .map(|idx| FocusFlag::new().with_name(format!("restore.type.option.{idx}").as_str()))
                .collect(),
            f_cancel: FocusFlag::new().with_name("restore.type.cancel"),
            f_next: FocusFlag::new().with_name("restore.type.next"),
        }
    }

    pub fn focused_option(&self) -> Option<usize> {
        self.f_options.iter().position(|flag| flag.get())
    }
}

impl HasFocus for TypeSelectState {
    fn build(&self, builder: &mut FocusBuilder) {
        let tag = builder.start(self);
        for flag in &self.f_options {
            builder.leaf_widget(flag);
        }
        builder.leaf_widget(&self.f_cancel);
        builder.leaf_widget(&self.f_next);
        builder.end(tag);
    }

    fn focus(&self) -> FocusFlag {
        self.container_focus.clone()
    }

    fn area(&self) -> Rect {
        Rect::default()
    }
}

/// The ordered word slots plus the transient paste-feedback notice.
///
/// Created when the wizard enters word entry, discarded on retreat or
/// cancel. The notice is owned here and never persisted.
#[derive(Debug)]
pub struct SlotsState {
    words: Vec<String>,
    notice: Option<String>,
    container_focus: FocusFlag,
    /// One flag per word slot; slots come first in tab order.
    pub f_slots: Vec<FocusFlag>,
    pub f_reset: FocusFlag,
    pub f_confirm: FocusFlag,
    pub f_back: FocusFlag,
}

impl SlotsState {
    fn new(count: usize) -> Self {
        Self {
            words: vec![String::new(); count],
            notice: None,
            container_focus: FocusFlag::new().with_name("restore.entry"),
            f_slots: (0..count)
                .map(|idx| FocusFlag::new().with_name(format!("restore.entry.slot.{idx}").as_str()))
                .collect(),
            f_reset: FocusFlag::new().with_name("restore.entry.reset"),
            f_confirm: FocusFlag::new().with_name("restore.entry.confirm"),
            f_back: FocusFlag::new().with_name("restore.entry.back"),
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn word(&self, index: usize) -> &str {
        &self.words[index]
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn focused_slot(&self) -> Option<usize> {
        self.f_slots.iter().position(|flag| flag.get())
    }

    /// Stores a manually edited value. Trims only; typing never case-folds,
    /// unlike the paste path. `index` must be within bounds.
    pub fn edit_slot(&mut self, index: usize, raw: &str) {
        self.words[index] = normalize_word(raw);
    }

    /// Applies a bulk paste: all-or-nothing replacement of every slot.
    ///
    /// A token-count mismatch leaves the slots untouched and raises the
    /// transient notice; a match overwrites everything, including slots the
    /// user already filled, and drops any pending notice at once. Whitespace
    /// that tokenizes to nothing is a complete no-op.
    pub fn apply_paste(&mut self, text: &str) -> Vec<Effect> {
        let tokens = tokenize_phrase(text);
        if tokens.is_empty() {
            return Vec::new();
        }
        if tokens.len() != self.words.len() {
            self.notice = Some(format!(
                "Detected {} words — expected {} words. Please check your phrase.",
                tokens.len(),
                self.words.len()
            ));
            return vec![Effect::SchedulePasteNoticeClear];
        }
        self.words = tokens;
        self.notice = None;
        Vec::new()
    }

    /// Empties every slot, keeping the slot count.
    pub fn reset_all(&mut self) -> Vec<Effect> {
        for word in &mut self.words {
            word.clear();
        }
        vec![Effect::ScheduleFocusFirstSlot]
    }

    pub fn is_ready(&self) -> bool {
        self.words.iter().all(|word| !word.is_empty())
    }

    /// Clears the paste notice when its display window elapses. The timer
    /// does not re-validate that its original message is still the current
    /// one; whatever notice exists now is dropped.
    pub fn expire_notice(&mut self) {
        self.notice = None;
    }
}

impl HasFocus for SlotsState {
    fn build(&self, builder: &mut FocusBuilder) {
        let tag = builder.start(self);
        for flag in &self.f_slots {
            builder.leaf_widget(flag);
        }
        builder.leaf_widget(&self.f_reset);
        builder.leaf_widget(&self.f_confirm);
        builder.leaf_widget(&self.f_back);
        builder.end(tag);
    }

    fn focus(&self) -> FocusFlag {
        self.container_focus.clone()
    }

    fn area(&self) -> Rect {
        Rect::default()
    }
}

/// The whole wizard: step controller plus the slot store for the active run.
///
/// Invariant: `step == WordEntry` implies a selected count and a live
/// `SlotsState` of exactly that length.
#[derive(Debug)]
pub struct WizardState {
    pub step: Step,
    options: Vec<WordCountOption>,
    selected_count: Option<usize>,
    pub type_select: TypeSelectState,
    pub slots: Option<SlotsState>,
}

impl WizardState {
    pub fn new(word_counts: &[usize]) -> Self {
        Self {
            step: Step::TypeSelect,
            options: word_counts.iter().map(|&count| WordCountOption::for_count(count)).collect(),
            selected_count: None,
            type_select: TypeSelectState::new(word_counts.len()),
            slots: None,
        }
    }

    pub fn options(&self) -> &[WordCountOption] {
        &self.options
    }

    pub fn selected_count(&self) -> Option<usize> {
        self.selected_count
    }

    /// Records the chosen length without transitioning. Re-selecting simply
    /// overwrites the prior choice.
    pub fn select_count(&mut self, count: usize) -> Vec<Effect> {
        self.selected_count = Some(count);
        Vec::new()
    }

    /// Moves from type selection to word entry, allocating the slot array.
    /// Silent no-op while no length is selected.
    pub fn advance(&mut self) -> Vec<Effect> {
        let Some(count) = self.selected_count else {
            return Vec::new();
        };
        self.step = Step::WordEntry;
        self.slots = Some(SlotsState::new(count));
        vec![Effect::SwitchTo(Route::WordEntry), Effect::ScheduleFocusFirstSlot]
    }

    /// Returns to type selection. This is a full reset, not a soft back
    /// navigation: entered words and the selected count are discarded.
    pub fn retreat(&mut self) -> Vec<Effect> {
        self.step = Step::TypeSelect;
        self.slots = None;
        self.selected_count = None;
        vec![Effect::SwitchTo(Route::TypeSelect)]
    }

    /// Signals the host to abandon the flow. Mutates nothing; teardown is
    /// the host's job.
    pub fn cancel(&self) -> Vec<Effect> {
        vec![Effect::CancelRestore]
    }

    /// Routes clipboard text into the slot store, if one is live.
    pub fn paste(&mut self, text: &str) -> Vec<Effect> {
        match self.slots.as_mut() {
            Some(slots) => slots.apply_paste(text),
            None => Vec::new(),
        }
    }

    /// Emits the finished phrase, or nudges focus back to the first slot
    /// when any word is still missing. The nudge is not an error.
    pub fn confirm(&self) -> Vec<Effect> {
        let Some(slots) = &self.slots else {
            return Vec::new();
        };
        if !slots.is_ready() {
            return vec![Effect::FocusFirstSlot];
        }
        vec![Effect::ConfirmPhrase(slots.words().to_vec())]
    }
}

/// Assigns slot indices to display columns in contiguous runs (column-major,
/// not round-robin). The mapping is part of the observable contract: slot 0
/// is the top of the first column.
pub fn column_layout(slot_count: usize, columns: usize) -> Vec<Vec<usize>> {
    let per_column = slot_count.div_ceil(columns);
    (0..columns)
        .map(|col| (col * per_column..((col + 1) * per_column).min(slot_count)).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wizard_at_entry(count: usize) -> WizardState {
        let mut wizard = WizardState::new(&[24, 15, 12]);
        wizard.select_count(count);
        wizard.advance();
        wizard
    }

    #[test]
    fn advance_without_selection_is_a_silent_noop() {
        let mut wizard = WizardState::new(&[24, 15, 12]);
        assert!(wizard.advance().is_empty());
        assert_eq!(wizard.step, Step::TypeSelect);
        assert!(wizard.slots.is_none());
    }

    #[test]
    fn advance_allocates_empty_slots_for_every_supported_count() {
        for count in [12, 15, 24] {
            let wizard = wizard_at_entry(count);
            let slots = wizard.slots.as_ref().expect("slots allocated");
            assert_eq!(slots.len(), count);
            assert!(slots.words().iter().all(String::is_empty));
            assert!(!slots.is_ready());
        }
    }

    #[test]
    fn advance_reports_route_switch_and_deferred_focus() {
        let mut wizard = WizardState::new(&[12]);
        wizard.select_count(12);
        assert_eq!(
            wizard.advance(),
            vec![Effect::SwitchTo(Route::WordEntry), Effect::ScheduleFocusFirstSlot]
        );
    }

    #[test]
    fn reselecting_overwrites_the_prior_choice() {
        let mut wizard = WizardState::new(&[24, 15, 12]);
        wizard.select_count(24);
        wizard.select_count(15);
        assert_eq!(wizard.selected_count(), Some(15));
    }

    #[test]
    fn matching_paste_replaces_all_slots_in_order() {
        let mut wizard = wizard_at_entry(12);
        let slots = wizard.slots.as_mut().unwrap();
        slots.edit_slot(0, "Keep");
        let effects = slots.apply_paste(
            "abandon ability\nable about\nabove absent absorb abstract absurd abuse access accident",
        );
        assert!(effects.is_empty());
        assert_eq!(slots.word(0), "abandon");
        assert_eq!(slots.word(11), "accident");
        assert!(slots.notice().is_none());
        assert!(slots.is_ready());
    }

    #[test]
    fn paste_lowercases_regardless_of_line_breaks() {
        let mut wizard = wizard_at_entry(12);
        let slots = wizard.slots.as_mut().unwrap();
        slots.apply_paste("ABANDON Ability\n\nable about above absent\tabsorb abstract absurd abuse access accident");
        assert_eq!(slots.word(0), "abandon");
        assert_eq!(slots.word(1), "ability");
    }

    #[test]
    fn mismatched_paste_mutates_nothing_and_raises_notice() {
        let mut wizard = wizard_at_entry(12);
        let slots = wizard.slots.as_mut().unwrap();
        slots.edit_slot(3, "kept");
        let effects = slots.apply_paste("abandon ability able about above absent absorb abstract absurd abuse access");
        assert_eq!(effects, vec![Effect::SchedulePasteNoticeClear]);
        assert_eq!(slots.word(3), "kept");
        assert_eq!(slots.word(0), "");
        assert_eq!(
            slots.notice(),
            Some("Detected 11 words — expected 12 words. Please check your phrase.")
        );
    }

    #[test]
    fn whitespace_only_paste_is_a_complete_noop() {
        let mut wizard = wizard_at_entry(12);
        let slots = wizard.slots.as_mut().unwrap();
        assert!(slots.apply_paste(" \n \t ").is_empty());
        assert!(slots.notice().is_none());
    }

    #[test]
    fn successful_paste_clears_a_pending_notice_immediately() {
        let mut wizard = wizard_at_entry(12);
        let slots = wizard.slots.as_mut().unwrap();
        slots.apply_paste("too few words");
        assert!(slots.notice().is_some());
        slots.apply_paste("abandon ability able about above absent absorb abstract absurd abuse access accident");
        assert!(slots.notice().is_none());
    }

    #[test]
    fn notice_expiry_clears_whatever_is_current() {
        let mut wizard = wizard_at_entry(12);
        let slots = wizard.slots.as_mut().unwrap();
        slots.apply_paste("one two three");
        slots.expire_notice();
        assert!(slots.notice().is_none());
        // Stale timers firing against an empty notice stay harmless.
        slots.expire_notice();
        assert!(slots.notice().is_none());
    }

    #[test]
    fn manual_edit_trims_but_keeps_case() {
        let mut wizard = wizard_at_entry(12);
        let slots = wizard.slots.as_mut().unwrap();
        slots.edit_slot(0, "  Abandon ");
        assert_eq!(slots.word(0), "Abandon");
    }

    #[test]
    fn ready_only_when_every_slot_is_filled() {
        let mut wizard = wizard_at_entry(12);
        let slots = wizard.slots.as_mut().unwrap();
        for idx in 0..11 {
            slots.edit_slot(idx, "word");
        }
        assert!(!slots.is_ready());
        slots.edit_slot(11, "word");
        assert!(slots.is_ready());
    }

    #[test]
    fn confirm_gates_on_readiness() {
        let mut wizard = wizard_at_entry(12);
        assert_eq!(wizard.confirm(), vec![Effect::FocusFirstSlot]);

        let slots = wizard.slots.as_mut().unwrap();
        slots.apply_paste("abandon ability able about above absent absorb abstract absurd abuse access accident");
        let effects = wizard.confirm();
        match effects.as_slice() {
            [Effect::ConfirmPhrase(words)] => {
                assert_eq!(words.len(), 12);
                assert_eq!(words[0], "abandon");
            }
            other => panic!("unexpected effects: {other:?}"),
        }
    }

    #[test]
    fn reset_empties_slots_and_defers_refocus() {
        let mut wizard = wizard_at_entry(12);
        let slots = wizard.slots.as_mut().unwrap();
        slots.apply_paste("abandon ability able about above absent absorb abstract absurd abuse access accident");
        let effects = slots.reset_all();
        assert_eq!(effects, vec![Effect::ScheduleFocusFirstSlot]);
        assert_eq!(slots.len(), 12);
        assert!(slots.words().iter().all(String::is_empty));
    }

    #[test]
    fn retreat_discards_progress_and_selection() {
        let mut wizard = wizard_at_entry(12);
        wizard
            .slots
            .as_mut()
            .unwrap()
            .apply_paste("abandon ability able about above absent absorb abstract absurd abuse access accident");
        let effects = wizard.retreat();
        assert_eq!(effects, vec![Effect::SwitchTo(Route::TypeSelect)]);
        assert_eq!(wizard.step, Step::TypeSelect);
        assert!(wizard.slots.is_none());
        assert_eq!(wizard.selected_count(), None);
    }

    #[test]
    fn cancel_only_signals_the_host() {
        let mut wizard = wizard_at_entry(12);
        wizard.slots.as_mut().unwrap().edit_slot(0, "kept");
        assert_eq!(wizard.cancel(), vec![Effect::CancelRestore]);
        assert_eq!(wizard.step, Step::WordEntry);
        assert_eq!(wizard.slots.as_ref().unwrap().word(0), "kept");
    }

    #[test]
    fn paste_with_no_live_slots_is_ignored() {
        let mut wizard = WizardState::new(&[12]);
        assert!(wizard.paste("abandon ability").is_empty());
    }

    #[test]
    fn columns_fill_in_contiguous_runs() {
        assert_eq!(
            column_layout(12, 3),
            vec![vec![0, 1, 2, 3], vec![4, 5, 6, 7], vec![8, 9, 10, 11]]
        );
        let cols = column_layout(15, 3);
        assert_eq!(cols[0], vec![0, 1, 2, 3, 4]);
        assert_eq!(cols[2], vec![10, 11, 12, 13, 14]);
    }

    #[test]
    fn ragged_counts_leave_trailing_columns_short() {
        let cols = column_layout(14, 3);
        assert_eq!(cols[0].len(), 5);
        assert_eq!(cols[1].len(), 5);
        assert_eq!(cols[2], vec![10, 11, 12, 13]);
    }
}
