//! Infrastructure layer for external integrations.
//!
//! This layer implements the ports defined by the domain layer.
//!
//! # Modules
//!
//! - [`clipboard`] - System and in-memory clipboards
//! - [`shortener`] - HTTP and no-op link shorteners

pub mod clipboard;
pub mod shortener;
