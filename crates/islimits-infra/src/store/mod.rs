//! Override store adapters.
//!
//! Implement the `OverrideStore` port from `islimits-core`:
//! - [`InMemoryOverrideStore`]: concurrent map, lives as long as the process
//! - [`JsonFileOverrideStore`]: one JSON document per island in a directory

pub mod json;
pub mod memory;

pub use json::JsonFileOverrideStore;
pub use memory::InMemoryOverrideStore;
