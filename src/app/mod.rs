//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (document state, collaborator traits, settings, messages)
//! - `controllers/` - Orchestration (DocumentSession)
//! - `services/` - Pure text operations
//! - `infrastructure/` - External integrations (disk file store, error)

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-exports for convenient external access
pub use controllers::session::DocumentSession;
pub use domain::{AppSettings, DiscardChoice, DocumentState, Message, TextEncoding, WindowGeometry};
pub use infrastructure::error::{AppError, Result};
pub use infrastructure::file_store::DiskFileStore;
