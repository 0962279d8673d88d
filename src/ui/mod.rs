pub mod app;
pub mod events;
pub mod input;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod selector;
pub mod theme;
pub mod viewer;
pub mod worker;

mod footer;
mod header;
mod layout;
mod terminal_guard;
