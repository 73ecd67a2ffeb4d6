//! Storefront discovery in the terminal: sign in, then browse, search,
//! filter and sort nearby vendors.

pub mod auth;
pub mod cli;
pub mod config;
pub mod discovery;
pub mod geo;
pub mod location;
pub mod logging;
pub mod shutdown;
pub mod ui;
pub mod vendor;
