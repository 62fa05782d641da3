//! # Domain Module
//!
//! Core resolution logic:
//!
//! * Chain orientation detection against the network registry
//! * Materialization of base/rollup connections
//! * The resolution state machine and the consumer context it feeds

mod resolver;
pub use resolver::*;

mod materializer;
pub use materializer::*;

mod network_resolution;
pub use network_resolution::*;

mod context;
pub use context::*;
