//! Shared domain types for island placement limits.
//!
//! This crate contains the types passed between the grammar parser, the limit
//! merger, the lifecycle controller and the storage adapters: identifiers,
//! resource kinds, grants, override records, lifecycle events, configuration
//! and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, thiserror.

pub mod config;
pub mod error;
pub mod event;
pub mod game_mode;
pub mod ids;
pub mod record;
pub mod resource;
