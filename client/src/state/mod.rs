//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Session state lives in `auth`; pages keep their own view-local signals.

pub mod auth;
