//! Domain layer containing link entities and collaborator contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Links and the read-only music entities they are built from
//! - [`echonest`] - Echo Nest generator tag and parameter codes
//! - [`ports`] - Clipboard and link shortener trait definitions
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Port traits define contracts implemented by the infrastructure layer
//! - Link assembly and copy workflows live in [`crate::application::services`]

pub mod echonest;
pub mod entities;
pub mod ports;
