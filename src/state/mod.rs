//! Shared application state provided via Leptos context.
//!
//! DESIGN
//! ======
//! State lives in explicit `RwSignal` containers injected from the app
//! root, never in module-level globals, so every consumer shares one
//! instance per application lifetime.

pub mod auth;
