//! Infrastructure layer for island placement limits.
//!
//! Contains implementations of the port traits defined in `islimits-core`:
//! in-memory and JSON-file override stores, the configured resource catalog
//! and game-mode registry, the occupant roster and island registry, plus the
//! loaders for `config.toml` and replay scenarios.

pub mod catalog;
pub mod config;
pub mod game_modes;
pub mod islands;
pub mod roster;
pub mod scenario;
pub mod store;
