//! Series Index (sidx)
//!
//! TUI application for browsing a TV-series library: table and poster
//! views, sort/filter/view menus, an alphabetical jump bar, and a
//! system logs page.
//!
//! Follows a Pure Core / Impure Shell layout: `model` and `state` are
//! pure, `source` reads from disk, and `view` owns the terminal.

pub mod config;
pub mod logging;
pub mod model;
pub mod source;
pub mod state;
pub mod view;
