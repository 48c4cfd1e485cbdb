//! UI components: the two wizard screens plus shared primitives.

pub mod common;
pub mod component;
pub mod restore;

pub use component::Component;
pub use restore::{TypeSelectComponent, WordEntryComponent};
