//! Shared test utilities for termfolio
//!
//! - TUI terminal testing helpers
//! - Key and mouse event builders

pub mod terminal;
