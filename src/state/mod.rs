//! Snapshot types observed from the external authentication client.

pub mod auth;
