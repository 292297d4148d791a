//! Seams to the external authentication client.
//!
//! ARCHITECTURE
//! ============
//! `client` defines what the guard needs from an SDK, `context` shares one
//! client with the component tree, and `login` runs a single login trigger.

pub mod client;
pub mod context;
pub mod login;
