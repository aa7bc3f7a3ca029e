//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Document identity and modified state
//! - Collaborator traits the session depends on
//! - Persisted settings
//! - Message types for the event system

pub mod collaborators;
pub mod document;
pub mod messages;
pub mod settings;

pub use collaborators::{DiscardChoice, DocumentBuffer, FileStore, SettingsStore, UserPrompt};
pub use document::{DocumentState, TextEncoding, title_for, window_title_for};
pub use messages::Message;
pub use settings::{AppSettings, WindowGeometry};
