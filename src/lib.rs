//! Rollup Network Resolver Library
//!
//! Resolves a single wallet connection into a consistent pair of chain
//! connections, a base (L1) chain and the rollup (L2) settling on it, and keeps
//! that pairing in sync as the wallet's account or chain changes. It includes:
//!
//! - A registry of well-known and custom network descriptors
//! - Orientation detection (is the wallet on the base or on the rollup?)
//! - Construction of provider/signer handles for both sides
//! - A resolution state machine publishing one discriminated status
//!
//! # Module Structure
//!
//! - `config`: Environment settings and the custom networks file
//! - `constants`: Well-known chain ids and default rollup mapping
//! - `domain`: Resolver, materializer, state machine and consumer context
//! - `logging`: Logger setup
//! - `models`: Network descriptors, pairing, status and error types
//! - `repositories`: Network registry
//! - `services`: Providers, signers and wallet connections
//! - `utils`: Test utilities

pub mod config;
pub mod constants;
pub mod domain;
pub mod logging;
pub mod models;
pub mod repositories;
pub mod services;
