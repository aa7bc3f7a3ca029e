//! Services layer - pure text operations used by the controller and dialogs.

pub mod text_ops;
