//! Infrastructure layer.
//!
//! Configuration, the job scheduler and the composition root. No business
//! logic lives here.
//!
//! # Submodules
//!
//! - [`bootstrap`] - Composition root for runtime wiring
//! - [`config`] - Configuration loading and validation
//! - [`scheduler`] - Daily and interval job timers

pub mod bootstrap;
pub mod config;
pub mod scheduler;

pub use config::Config;
