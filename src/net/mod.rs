//! Networking modules for the remote marketplace REST API.

pub mod api;
pub mod types;
