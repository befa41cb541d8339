//! Networking modules for the host and the backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls to the host (`/api/config`) and the backend
//! (auth + tables), and `types` defines the shared record schema.

pub mod api;
pub mod types;
