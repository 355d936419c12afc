//! Application layer orchestrating classification, encoding and hand-off.
//!
//! This module defines the `PromptPayGenerator`, the primary entry point for
//! producing payloads from raw caller input.

pub mod generator;
