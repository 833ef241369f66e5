//! Observability subsystem.
//!
//! Only structured logging: a one-shot check has nothing to scrape.

pub mod logging;

pub use logging::init_logging;
