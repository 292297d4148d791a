//! Pure decision logic behind `SecureRoute`.
//!
//! DESIGN
//! ======
//! The component only wires signals to these types. Everything that decides
//! when to trigger login and what to render lives here so it can be tested
//! without a reactive runtime.

pub mod gate;
pub mod status;
