//! Application layer services implementing the link workflows.
//!
//! Services consume domain entities and port traits and expose the operations
//! the rest of the application calls.
//!
//! # Available Services
//!
//! - [`services::link_builder::LinkBuilder`] - Deep link construction
//! - [`services::clipboard_service::ClipboardService`] - Copy, shorten-then-copy workflows

pub mod services;
