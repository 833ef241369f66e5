//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! settings file (TOML, optional)
//!     → loader.rs (parse & deserialize into ProbeSettings)
//! command line + environment
//!     → args.rs (clap, merged over ProbeSettings)
//!     → CheckConfig
//!     → validation.rs (semantic checks)
//!     → passed by reference to the check
//! ```
//!
//! # Design Decisions
//! - Config is immutable once built
//! - All settings fields have defaults to allow minimal files
//! - Validation separates syntactic (serde/clap) from semantic checks

pub mod args;
pub mod loader;
pub mod schema;
pub mod validation;

pub use args::CliArgs;
pub use loader::{load_settings, ConfigError};
pub use schema::{CheckConfig, ProbeSettings};
pub use validation::{validate_config, ValidationError};
