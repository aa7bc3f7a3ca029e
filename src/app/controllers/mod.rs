//! Controllers layer - orchestration and coordination.
//!
//! - Document session (identity, modified state, save-before-discard)

pub mod session;
