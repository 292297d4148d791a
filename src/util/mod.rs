//! Location helpers shared by the guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Kept free of Leptos types so matching and URL rules are testable natively.

pub mod path_match;
pub mod url;
