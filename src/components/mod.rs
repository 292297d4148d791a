//! Leptos components exposed by the crate.

pub mod auth_error;
pub mod secure_route;
