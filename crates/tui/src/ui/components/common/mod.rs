pub mod slot_editor;

pub use slot_editor::SlotEditor;
