//! Infrastructure adapters. Implement ports.
//!
//! HTTP backend, filesystem, terminal UI. Map errors to DomainError.

pub mod fs;
pub mod http;
pub mod ui;
