//! HTTP adapter for the remote profile API.
//!
//! Provides a `reqwest` implementation of the `ProfileApi` port against the
//! `/api/v1` surface.

mod dto;
mod profile_api;

pub use profile_api::{
    DEFAULT_API_BASE_URL, HttpProfileApi, LOGIN_FAILED_MESSAGE, PASSWORD_CHANGE_FAILED_MESSAGE,
};
