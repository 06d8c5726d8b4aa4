//! Configuration system for innkeep.
//!
//! Configuration is layered from YAML files, environment variables and
//! programmatic overrides, then validated.
//!
//! # Configuration Precedence
//!
//! From highest to lowest:
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`INNKEEP_*`)
//! 3. Private project config (`innkeep.local.yaml`)
//! 4. Project config (`innkeep.yaml`)
//! 5. User config (`~/.innkeep/config.yaml`, or `config.yaml` in the data
//!    directory)
//! 6. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use innkeep::config::ConfigBuilder;
//! use std::path::Path;
//!
//! let config = ConfigBuilder::new()
//!     .with_working_dir(Path::new("/srv/resort"))
//!     .build()
//!     .unwrap();
//!
//! println!("calendar limit: {} days", config.max_range_days());
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(test)]
mod proptests;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{Config, OutputFormat, ResolverConfig, SessionConfig, TransitionConfig};
pub use validator::ConfigValidator;
