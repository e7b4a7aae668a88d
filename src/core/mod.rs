/*!
 * Core Module
 * Shared types, errors, limits, configuration, and the simulation clock
 */

pub mod clock;
pub mod config;
pub mod errors;
pub mod limits;
pub mod types;

pub use clock::SimClock;
pub use config::KernelConfig;
pub use errors::*;
pub use types::*;
