//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and
//! component code so the latter stay testable off-wasm.

pub mod auth;
pub mod session;
pub mod url;
