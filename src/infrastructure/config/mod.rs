//! Configuration sections and loading.

pub mod index;
pub mod line;
pub mod logging;
pub mod schedule;
pub mod server;
pub mod settings;

pub use settings::Config;
