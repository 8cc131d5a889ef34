//! Infrastructure adapters. Implement ports.
//!
//! Console UI and project stores. Map errors to DomainError.

pub mod persistence;
pub mod ui;
