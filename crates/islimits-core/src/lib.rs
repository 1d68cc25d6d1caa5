//! Placement-limit logic and port trait definitions.
//!
//! This crate defines the "ports" (collaborator traits) that the
//! infrastructure layer implements, plus the three pieces of logic that run
//! against them: the capability grammar, the max-wins limit merger and the
//! island lifecycle controller. It depends only on `islimits-types` -- never
//! on `islimits-infra` or any storage crate.

pub mod diagnostics;
pub mod grammar;
pub mod lifecycle;
pub mod merge;
pub mod ports;

#[cfg(test)]
pub(crate) mod test_support;
