pub mod components;
pub mod main_component;
pub mod runtime;
pub mod scheduler;
pub mod theme;
pub mod utils;
