// src/config/mod.rs
// This module handles configuration parsing and validation.

pub mod raw; // Structs directly mapping to the YAML structure
pub mod processed; // The validated policy set exposed to consumers

pub use processed::PolicySet;
