//! Application state for the restore wizard TUI.
//!
//! `App` owns the wizard state machine, the resolved theme, and the focus
//! engine. Components mutate the wizard through its transition methods and
//! report `Effect`s; the runtime owns effect execution.

use std::rc::Rc;

use mnemo_types::{FlowOutcome, Route, Step};
use rat_focus::{Focus, FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::Rect;

use crate::RestoreOptions;
use crate::ui::components::restore::WizardState;
use crate::ui::theme::Theme;

/// Cross-cutting context owned by the App.
#[derive(Debug)]
pub struct SharedCtx {
    pub theme: Theme,
}

pub struct App {
    /// Shared context (theme)
    pub ctx: SharedCtx,
    /// The wizard state machine: step controller plus word slots
    pub wizard: WizardState,
    /// Current primary route; mirrors `wizard.step`
    pub current_route: Route,
    /// Focus engine, rebuilt before each render
    pub focus: Rc<Focus>,
    /// Set when the flow terminates; the runtime exits on it
    pub outcome: Option<FlowOutcome>,

    container_focus: FocusFlag,
}

impl App {
    pub fn new(options: &RestoreOptions) -> Self {
        Self {
            ctx: SharedCtx { theme: Theme::load() },
            wizard: WizardState::new(&options.word_counts),
            current_route: Route::TypeSelect,
            focus: Rc::default(),
            outcome: None,
            container_focus: FocusFlag::new().with_name("app"),
        }
    }
}

impl HasFocus for App {
    fn build(&self, builder: &mut FocusBuilder) {
        match self.wizard.step {
            Step::TypeSelect => {
                builder.widget(&self.wizard.type_select);
            }
            Step::WordEntry => {
                if let Some(slots) = &self.wizard.slots {
                    builder.widget(slots);
                }
            }
        }
    }

    fn focus(&self) -> FocusFlag {
        self.container_focus.clone()
    }

    fn area(&self) -> Rect {
        Rect::default()
    }
}
