//! Configuration for the resolver.
//!
//! This module handles:
//! - Environment variable integration
//! - Loading and validating the custom networks file
//!
//! # Structure
//!
//! - `ResolverConfig`: runtime settings read from the environment
//! - Custom networks: base/rollup pairs registered before resolution
mod resolver_config;
pub use resolver_config::*;

mod config_file;
pub use config_file::*;

mod error;
pub use error::*;
