//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: The feed document model
//! - `ports`: Trait definitions for external dependencies

pub mod entities;
pub mod ports;
