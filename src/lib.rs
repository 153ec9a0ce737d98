//! Household appliance cost calculator library
//!
//! This module exposes the core functionality for use in tests
//! and by the binaries.

pub mod commands;
pub mod consumption;
pub mod core;
pub mod format;
pub mod i18n;
pub mod pricing;
pub mod render;
pub mod state;
