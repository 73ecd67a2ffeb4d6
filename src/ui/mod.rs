pub mod app;
pub mod components;
pub mod detail;
pub mod discovery;
pub mod events;
pub mod filter;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod login;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod sort;
pub mod terminal_guard;
pub mod theme;
