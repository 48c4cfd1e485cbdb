//! The restore wizard: phrase-length selection and word-entry screens.

pub mod state;
pub mod type_select_component;
pub mod word_entry_component;

pub use state::{DISPLAY_COLUMNS, SlotsState, TypeSelectState, WizardState, column_layout};
pub use type_select_component::TypeSelectComponent;
pub use word_entry_component::WordEntryComponent;
