//! Reusable UI components shared by pages.
//!
//! ARCHITECTURE
//! ============
//! `route_guard` gates protected routes on session state and `nav_shell`
//! renders the chrome around them. `auth_error_banner` is mounted outside
//! both so auth failures stay visible on public pages too.

pub mod auth_error_banner;
pub mod nav_shell;
pub mod route_guard;
