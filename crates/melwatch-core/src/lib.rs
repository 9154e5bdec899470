//! # Melwatch Core Library
//!
//! Core logic for Melwatch, a repair-deadline tracker for aircraft MEL
//! (minimum-equipment-list) deferred-maintenance items. Given the instant a
//! malfunction was discovered, it computes the regulatory repair deadline for
//! each MEL category and keeps a live countdown current. The CLI binary is a
//! thin presentation layer over this crate.
//!
//! ## Architecture
//!
//! - **Deadline Engine**: a pure function from (category, discovery instant,
//!   current instant, optional Category A interval) to a calculation result.
//!   The current instant is always an explicit parameter, never ambient state.
//! - **Live Clock**: wall-clock refresh state with no internal thread -- the
//!   host polls [`Monitor::tick`] with the current instant on its own cadence
//! - **Config**: TOML-based ambient settings (refresh cadence, defaults)
//!
//! ## Key Components
//!
//! - [`Category`]: the four MEL repair categories and their interval policy
//! - [`compute`]: deadline calculation for a single category
//! - [`Monitor`]: live session state driving periodic recomputation
//! - [`Config`]: application configuration

pub mod clock;
pub mod config;
pub mod deadline;
pub mod error;
pub mod events;
pub mod input;

pub use clock::{Monitor, Snapshot, Ticker, DEFAULT_REFRESH_SECS};
pub use config::Config;
pub use deadline::{compute, compute_all, CalculationResult, Category, CategoryInfo};
pub use error::{ConfigError, CoreError, InputError};
pub use events::Event;
pub use input::DiscoveryInput;
