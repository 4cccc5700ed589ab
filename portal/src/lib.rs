//! Session and navigation controller for the subject profile portal.
//!
//! The portal resolves a subject identifier from the entry URL, looks the
//! subject up, and layers an authenticated session (login, server-driven
//! menu, logout, password change) on top of that lookup.
//!
//! - [`domain`] holds the view machine, the session store, the gateway, and
//!   the ports they depend on.
//! - [`outbound`] provides adapters for those ports (HTTP, storage, location).
//! - [`settings`] loads runtime configuration via `OrthoConfig`.

pub mod domain;
pub mod outbound;
pub mod settings;

pub use domain::SessionController;
