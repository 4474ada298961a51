//! Integration tests for termfolio
//!
//! These tests drive the app through key, mouse and timer events and check
//! what it shows and logs.

#[path = "../common/mod.rs"]
pub mod common;

pub mod boot_flow;
pub mod cli;
pub mod contact_flow;
pub mod navigation;
