#![warn(clippy::shadow_reuse, clippy::shadow_same, clippy::builtin_type_shadow)]

//! Warp-to-waypoint core for flight simulators.
//!
//! [`WarpPlugin`] turns panel events into status lines: it looks navaids up
//! by identifier, falls back to the flight plan for an empty query, and jumps
//! the aircraft toward the selected destination, stopping a standoff distance
//! short and optionally debiting the fuel the skipped leg would have burned.
//! The simulator is reached through the [`FlightData`], [`FuelSystem`] and
//! [`NavDatabase`] traits; [`OfflineHost`] is the in-memory implementation
//! the tests run against.

pub mod flight_control;
pub mod host;
pub mod logger;
pub mod plugin;
pub mod prefs;

pub use flight_control::{Coordinate, WarpError};
pub use host::{FlightData, FuelSystem, NavDatabase, OfflineHost};
pub use plugin::{Destination, SearchError, WarpPlugin};
pub use prefs::Preferences;

/// Name used in log prefixes and the panel title.
pub const PLUGIN_NAME: &str = "Simple Warp";
/// Identity string the plugin registers with the host.
pub const PLUGIN_SIGNATURE: &str = "lzh.simple_warp";
pub const PLUGIN_DESCRIPTION: &str = "Teleport aircraft close to next waypoint";
pub const PLUGIN_VERSION: &str = "1.1";
