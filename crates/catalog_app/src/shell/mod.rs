//! Line-oriented terminal front end for the catalog.
//!
//! Commands are read from stdin, rendered frames go to stdout, and logs go
//! to `./catalog.log`.

mod app;
mod command;
mod effects;
mod logging;
mod render;

pub use app::run_app;
