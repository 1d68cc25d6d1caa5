//! Logging and trace export setup shared by the islimits binaries.

pub mod tracing_setup;
